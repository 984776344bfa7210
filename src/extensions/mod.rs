//! Host integration points.
//!
//! Listeners only observe emitted selections; keep them out of core paths.

pub mod listeners;

pub use listeners::{FnRangeListener, RangeChange, RangeChangeCause, RangeListener};
