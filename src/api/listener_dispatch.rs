use tracing::debug;

use crate::extensions::RangeChange;

use super::TimelineSlider;

impl TimelineSlider {
    /// Records a local emission and notifies every listener once.
    pub(super) fn emit_range_change(&mut self, change: RangeChange) -> RangeChange {
        self.model.last_emitted = Some(change.range);
        self.model.selection = Some(change.range);
        // Host values held back before this emission are superseded by it.
        self.runtime.external_held = false;
        debug!(
            cause = ?change.cause,
            start = %change.range.start,
            end = %change.range.end,
            listeners = self.runtime.listeners.len(),
            "range emitted"
        );
        for listener in self.runtime.listeners.values_mut() {
            listener.on_range_change(change);
        }
        change
    }
}
