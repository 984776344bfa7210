//! timeline-rs: headless interactive time-range selector.
//!
//! The crate maps a host-owned selection onto a draggable two-handle track,
//! turns mouse, pen and touch gestures into emitted ranges and reconciles
//! those emissions with host echoes through an explicit settle guard. Quick
//! ranges and span shifts are computed by pure functions in [`core`].

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod telemetry;

pub use api::{
    HoverReadout, RangeSelectionKind, SliderSnapshot, TimelineSlider, TimelineSliderConfig,
};
pub use error::{TimelineError, TimelineResult};
