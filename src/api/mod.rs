//! Host-facing slider facade.
//!
//! `TimelineSlider` is split across files by concern: each file adds one
//! `impl TimelineSlider` block on top of the shared state declared here.

mod hit_test_resolver;
mod listener_dispatch;
mod listener_registry;
mod pointer_controller;
mod quick_range_controller;
mod reconciliation_controller;
mod slider_accessors;
mod slider_config;
mod slider_init;
mod slider_model;
mod slider_runtime;
mod slider_snapshot;

pub use slider_config::TimelineSliderConfig;
pub use slider_model::{HoverReadout, RangeSelectionKind};
pub use slider_snapshot::SliderSnapshot;

use slider_model::SliderModel;
use slider_runtime::SliderRuntime;

/// One interactive time-range selector.
///
/// The slider mirrors a host-owned [`TimeRange`](crate::core::TimeRange) as
/// two handle positions on a track, turns pointer gestures and button
/// actions into emitted ranges and keeps host echoes from fighting the
/// user's hand while a gesture settles.
pub struct TimelineSlider {
    config: TimelineSliderConfig,
    model: SliderModel,
    runtime: SliderRuntime,
}

impl std::fmt::Debug for TimelineSlider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimelineSlider")
            .field("config", &self.config)
            .field("model", &self.model)
            .field("drag", &self.runtime.drag)
            .field("guard", &self.runtime.guard)
            .field("listeners", &self.runtime.listeners.keys().collect::<Vec<_>>())
            .finish()
    }
}
