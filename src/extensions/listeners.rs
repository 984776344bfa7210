use serde::{Deserialize, Serialize};

use crate::core::{QuickRange, ShiftDirection, TimeRange};

/// User action that produced a locally computed selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeChangeCause {
    DragReleased,
    QuickRange(QuickRange),
    Shift(ShiftDirection),
    CustomEntry,
}

/// Selection emitted to the host, once per discrete user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeChange {
    pub range: TimeRange,
    pub cause: RangeChangeCause,
}

/// Host-side receiver of selection changes.
///
/// Listeners observe emitted ranges; they cannot reach into slider internals.
pub trait RangeListener {
    fn id(&self) -> &str;
    fn on_range_change(&mut self, change: RangeChange);
}

/// Adapts a closure into a [`RangeListener`].
pub struct FnRangeListener<F> {
    id: String,
    callback: F,
}

impl<F> FnRangeListener<F>
where
    F: FnMut(RangeChange),
{
    #[must_use]
    pub fn new(id: impl Into<String>, callback: F) -> Self {
        Self {
            id: id.into(),
            callback,
        }
    }
}

impl<F> RangeListener for FnRangeListener<F>
where
    F: FnMut(RangeChange),
{
    fn id(&self) -> &str {
        &self.id
    }

    fn on_range_change(&mut self, change: RangeChange) {
        (self.callback)(change);
    }
}
