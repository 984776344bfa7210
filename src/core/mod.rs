pub mod custom_range;
pub mod mapper;
pub mod markers;
pub mod primitives;
pub mod quick_range;
pub mod types;
pub mod windowing;

pub use custom_range::{CustomRangeFields, parse_custom_range};
pub use mapper::{TrackScale, position_to_time, time_to_position};
pub use markers::{
    MarkerGranularity, MarkerLabelConfig, MarkerLabelLocale, MarkerStep, TimeMarker,
    format_marker_label, generate_markers, marker_step_for_span, thinning_factor,
};
pub use quick_range::{
    QuickRange, ShiftDirection, compute_relative_range, describe_span, shift_range,
};
pub use types::{Domain, HandlePositions, TimeRange, TrackGeometry};
pub use windowing::{instants_in_range, records_in_range};
