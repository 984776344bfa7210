use std::time::Instant;

use tracing::{debug, trace, warn};

use crate::core::primitives::clamp_px;
use crate::extensions::{RangeChange, RangeChangeCause};
use crate::interaction::{DragSession, DragTarget, PointerEvent};

use super::{HoverReadout, RangeSelectionKind, TimelineSlider};

impl TimelineSlider {
    /// Starts a drag of `target` with the pointer in `event`.
    ///
    /// Ignored while another gesture owns the track or before the slider has
    /// a usable domain and width. Engages the reconciliation guard.
    pub fn pointer_down(&mut self, target: DragTarget, event: PointerEvent) -> bool {
        if self.model.scale().is_none() {
            debug!(drag_target = ?target, "ignoring pointer down before layout");
            return false;
        }
        if !self
            .runtime
            .drag
            .begin(target, event, self.model.handles)
        {
            debug!(
                drag_target = ?target,
                pointer_id = event.pointer_id,
                "ignoring pointer down while another gesture is active"
            );
            return false;
        }

        self.runtime.gesture_width_px = self.model.geometry.width_px;
        self.runtime.guard.engage();
        debug!(
            drag_target = ?target,
            pointer_id = event.pointer_id,
            kind = ?event.kind,
            x = event.x,
            "drag started"
        );
        true
    }

    /// Hit-tests `event.x` and starts a drag of whatever lies under it.
    pub fn pointer_down_at(&mut self, event: PointerEvent) -> Option<DragTarget> {
        let target = self.hit_test(event.x)?;
        self.pointer_down(target, event).then_some(target)
    }

    /// Moves the captured handle(s).
    ///
    /// Returns `false` for foreign pointers and while the track has no width;
    /// the handles then keep their last positions.
    pub fn pointer_move(&mut self, event: PointerEvent) -> bool {
        if !self.model.geometry.is_laid_out() {
            trace!(x = event.x, "ignoring drag move without track width");
            return false;
        }
        let Some(next) = self.runtime.drag.update(
            event,
            self.model.handles,
            self.model.geometry.width_px,
            self.config.min_gap_px,
        ) else {
            return false;
        };

        trace!(
            start_px = next.start_px,
            end_px = next.end_px,
            "drag moved"
        );
        self.model.handles = next;
        true
    }

    /// Completes the gesture owned by `event` and emits the resulting range.
    pub fn pointer_up(&mut self, event: PointerEvent, now: Instant) -> Option<RangeChange> {
        let session = self.runtime.drag.finish(event)?;
        self.complete_gesture(session, now)
    }

    /// Touch cancellation commits like a release.
    pub fn pointer_cancel(&mut self, event: PointerEvent, now: Instant) -> Option<RangeChange> {
        self.pointer_up(event, now)
    }

    /// Ends the active gesture regardless of pointer identity, e.g. when the
    /// pointer leaves the track or the host tears the control down.
    pub fn end_active_gesture(&mut self, now: Instant) -> Option<RangeChange> {
        let session = self.runtime.drag.terminate()?;
        self.complete_gesture(session, now)
    }

    fn complete_gesture(&mut self, session: DragSession, now: Instant) -> Option<RangeChange> {
        let delay = self.config.settle_delay_for(session.pointer_kind);
        let ticket = self.runtime.guard.arm_release(now, delay);

        let Some(scale) = self.model.scale() else {
            warn!(
                drag_target = ?session.target,
                "drag released without a usable track; nothing emitted"
            );
            return None;
        };

        let range = scale.handles_to_range(self.model.handles);
        self.model.selection_kind = RangeSelectionKind::Dragged;
        debug!(
            drag_target = ?session.target,
            settle_generation = ticket.generation(),
            settle_ms = delay.as_millis() as u64,
            "drag released"
        );
        Some(self.emit_range_change(RangeChange {
            range,
            cause: RangeChangeCause::DragReleased,
        }))
    }

    /// Updates the hover readout for a pointer over the track.
    pub fn hover(&mut self, pointer_x: f64) -> Option<HoverReadout> {
        let scale = self.model.scale()?;
        if !pointer_x.is_finite() {
            return None;
        }

        let position_px = clamp_px(pointer_x, 0.0, scale.width_px());
        let readout = HoverReadout {
            position_px,
            instant: scale.pixel_to_time(position_px),
        };
        self.model.hover = Some(readout);
        Some(readout)
    }

    pub fn hover_leave(&mut self) {
        self.model.hover = None;
    }
}
