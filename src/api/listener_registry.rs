use tracing::warn;

use crate::error::{TimelineError, TimelineResult};
use crate::extensions::RangeListener;

use super::TimelineSlider;

impl TimelineSlider {
    /// Registers a listener with unique identifier.
    pub fn register_listener(&mut self, listener: Box<dyn RangeListener>) -> TimelineResult<()> {
        let listener_id = listener.id().to_owned();
        if listener_id.is_empty() {
            warn!("rejected range listener with empty id");
            return Err(TimelineError::InvalidInput(
                "listener id must not be empty".to_owned(),
            ));
        }
        if self.runtime.listeners.contains_key(&listener_id) {
            warn!(listener_id = %listener_id, "rejected duplicate range listener");
            return Err(TimelineError::DuplicateListener(listener_id));
        }
        self.runtime.listeners.insert(listener_id, listener);
        Ok(())
    }

    /// Unregisters a listener by id. Returns `true` when removed.
    pub fn unregister_listener(&mut self, listener_id: &str) -> bool {
        self.runtime.listeners.shift_remove(listener_id).is_some()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.runtime.listeners.len()
    }

    #[must_use]
    pub fn has_listener(&self, listener_id: &str) -> bool {
        self.runtime.listeners.contains_key(listener_id)
    }

    /// Listener ids in registration order.
    #[must_use]
    pub fn listener_ids(&self) -> Vec<String> {
        self.runtime.listeners.keys().cloned().collect()
    }
}
