//! Pointer gesture state machine for the timeline track.
//!
//! Mouse, pen and touch input are normalized into [`PointerEvent`] values and
//! consumed by one [`DragController`]. The controller owns at most one
//! [`DragSession`] at a time; the first captured pointer wins.

mod guard;

pub use guard::{ReconciliationGuard, SettleTicket};

use serde::{Deserialize, Serialize};

use crate::core::HandlePositions;
use crate::core::primitives::clamp_px;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerKind {
    Mouse,
    Pen,
    Touch,
}

/// Device-independent pointer sample in track coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub pointer_id: u64,
    pub kind: PointerKind,
    pub x: f64,
}

impl PointerEvent {
    #[must_use]
    pub fn mouse(x: f64) -> Self {
        Self {
            pointer_id: 1,
            kind: PointerKind::Mouse,
            x,
        }
    }

    #[must_use]
    pub fn touch(touch_id: u64, x: f64) -> Self {
        Self {
            pointer_id: touch_id,
            kind: PointerKind::Touch,
            x,
        }
    }

    #[must_use]
    pub fn pen(x: f64) -> Self {
        Self {
            pointer_id: 1,
            kind: PointerKind::Pen,
            x,
        }
    }

    #[must_use]
    pub fn at(self, x: f64) -> Self {
        Self { x, ..self }
    }
}

/// Element under the pointer when a gesture starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DragTarget {
    StartHandle,
    EndHandle,
    /// The selected band between the handles.
    Band,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DragMode {
    #[default]
    Idle,
    DraggingStart,
    DraggingEnd,
    DraggingRange,
}

impl From<DragTarget> for DragMode {
    fn from(target: DragTarget) -> Self {
        match target {
            DragTarget::StartHandle => Self::DraggingStart,
            DragTarget::EndHandle => Self::DraggingEnd,
            DragTarget::Band => Self::DraggingRange,
        }
    }
}

/// Bookkeeping for one captured pointer, alive from pointer-down to release.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragSession {
    pub target: DragTarget,
    pub pointer_id: u64,
    pub pointer_kind: PointerKind,
    pub anchor_pointer_x: f64,
    pub anchor_start_px: f64,
    pub anchor_end_px: f64,
}

impl DragSession {
    #[must_use]
    pub fn mode(self) -> DragMode {
        DragMode::from(self.target)
    }

    #[must_use]
    fn owns(self, event: PointerEvent) -> bool {
        self.pointer_id == event.pointer_id && self.pointer_kind == event.kind
    }

    /// Handle positions for the pointer at `pointer_x`.
    ///
    /// `current` supplies the handle that is not being dragged.
    #[must_use]
    pub fn resolve_positions(
        self,
        pointer_x: f64,
        current: HandlePositions,
        width_px: f64,
        min_gap_px: f64,
    ) -> HandlePositions {
        let delta = pointer_x - self.anchor_pointer_x;
        match self.target {
            DragTarget::StartHandle => HandlePositions::new(
                clamp_px(
                    self.anchor_start_px + delta,
                    0.0,
                    (current.end_px - min_gap_px).max(0.0),
                ),
                current.end_px,
            ),
            // The track edge wins over the gap; the start handle is pinned
            // instead when the gap no longer fits.
            DragTarget::EndHandle => HandlePositions::new(
                current.start_px,
                clamp_px(
                    self.anchor_end_px + delta,
                    (current.start_px + min_gap_px).min(width_px),
                    width_px,
                ),
            ),
            DragTarget::Band => {
                band_positions(self.anchor_start_px, self.anchor_end_px, delta, width_px)
            }
        }
    }
}

/// Shifts the band by `delta` as a rigid unit; the span never shrinks.
#[must_use]
pub fn band_positions(
    anchor_start_px: f64,
    anchor_end_px: f64,
    delta: f64,
    width_px: f64,
) -> HandlePositions {
    let span = (anchor_end_px - anchor_start_px).min(width_px.max(0.0));
    let mut start_px = anchor_start_px + delta;
    let mut end_px = anchor_end_px + delta;

    if start_px < 0.0 {
        start_px = 0.0;
        end_px = span;
    }
    if end_px > width_px {
        end_px = width_px;
        start_px = width_px - span;
    }

    HandlePositions::new(start_px, end_px)
}

/// Single-session drag state machine:
/// `Idle -> DraggingStart | DraggingEnd | DraggingRange -> Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    #[must_use]
    pub fn mode(&self) -> DragMode {
        self.session.map_or(DragMode::Idle, DragSession::mode)
    }

    #[must_use]
    pub fn session(&self) -> Option<DragSession> {
        self.session
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Captures `event` for `target`. Returns `false` while another session
    /// is active or when the pointer coordinate is not finite.
    pub fn begin(
        &mut self,
        target: DragTarget,
        event: PointerEvent,
        current: HandlePositions,
    ) -> bool {
        if self.session.is_some() || !event.x.is_finite() {
            return false;
        }

        self.session = Some(DragSession {
            target,
            pointer_id: event.pointer_id,
            pointer_kind: event.kind,
            anchor_pointer_x: event.x,
            anchor_start_px: current.start_px,
            anchor_end_px: current.end_px,
        });
        true
    }

    /// Resolves new handle positions for a move of the captured pointer.
    ///
    /// Returns `None` for foreign pointers, non-finite coordinates, a track
    /// without width or when no session is active.
    #[must_use]
    pub fn update(
        &self,
        event: PointerEvent,
        current: HandlePositions,
        width_px: f64,
        min_gap_px: f64,
    ) -> Option<HandlePositions> {
        let session = self.session.filter(|session| session.owns(event))?;
        if !event.x.is_finite() || !width_px.is_finite() || width_px <= 0.0 {
            return None;
        }
        Some(session.resolve_positions(event.x, current, width_px, min_gap_px))
    }

    /// Scales the captured anchors after the track was resized to
    /// `width_px`, keeping the anchored pair at least `min_gap_px` apart.
    pub fn rescale(&mut self, factor: f64, width_px: f64, min_gap_px: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        if let Some(session) = self.session.as_mut() {
            let anchors = HandlePositions::new(
                session.anchor_start_px * factor,
                session.anchor_end_px * factor,
            )
            .with_min_gap(width_px, min_gap_px);
            session.anchor_pointer_x *= factor;
            session.anchor_start_px = anchors.start_px;
            session.anchor_end_px = anchors.end_px;
        }
    }

    /// Ends the session when `event` belongs to the captured pointer.
    pub fn finish(&mut self, event: PointerEvent) -> Option<DragSession> {
        if !self.session.is_some_and(|session| session.owns(event)) {
            return None;
        }
        self.session.take()
    }

    /// Ends whatever session is active regardless of pointer identity.
    pub fn terminate(&mut self) -> Option<DragSession> {
        self.session.take()
    }
}
