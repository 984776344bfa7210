use indexmap::IndexMap;

use crate::extensions::RangeListener;
use crate::interaction::{DragController, ReconciliationGuard};

/// Gesture and synchronization state that has no semantic meaning of its own.
#[derive(Default)]
pub(super) struct SliderRuntime {
    pub(super) drag: DragController,
    pub(super) guard: ReconciliationGuard,
    /// Set when a domain or width change arrived while the guard held the
    /// handles; forces a resync on release.
    pub(super) stale_layout: bool,
    /// Set when a host range arrived while the guard held the handles.
    pub(super) external_held: bool,
    /// Track width the active gesture's pixel positions are expressed in.
    pub(super) gesture_width_px: f64,
    pub(super) listeners: IndexMap<String, Box<dyn RangeListener>>,
}
