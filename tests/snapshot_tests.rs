use std::time::Instant;

use chrono::{DateTime, TimeZone, Utc};
use timeline_rs::core::{Domain, QuickRange, TimeRange};
use timeline_rs::extensions::FnRangeListener;
use timeline_rs::interaction::{DragMode, DragTarget, PointerEvent};
use timeline_rs::{RangeSelectionKind, SliderSnapshot, TimelineSlider, TimelineSliderConfig};

fn utc(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, hour, 0, 0)
        .single()
        .expect("valid utc time")
}

fn week_slider() -> TimelineSlider {
    TimelineSlider::with_state(
        TimelineSliderConfig::default(),
        Domain::new(utc(1, 0), utc(8, 0)),
        Some(TimeRange::new(utc(2, 0), utc(5, 0))),
        700.0,
    )
    .expect("slider init")
}

#[test]
fn snapshot_reports_mid_drag_state() {
    let mut slider = week_slider();
    slider
        .register_listener(Box::new(FnRangeListener::new("table", |_| {})))
        .expect("register listener");

    assert!(slider.pointer_down(DragTarget::Band, PointerEvent::mouse(250.0)));
    assert!(slider.pointer_move(PointerEvent::mouse(350.0)));
    slider.hover(350.0);

    let snapshot = slider.snapshot();
    assert_eq!(snapshot.drag_mode, DragMode::DraggingRange);
    assert!(snapshot.guard_engaged);
    assert!(snapshot.pending_settle_generation.is_none());
    assert_eq!(
        snapshot.preview_range,
        Some(TimeRange::new(utc(3, 0), utc(6, 0)))
    );
    assert_eq!(snapshot.selection, Some(TimeRange::new(utc(2, 0), utc(5, 0))));
    assert_eq!(snapshot.listener_ids, ["table"]);
    assert_eq!(snapshot.markers.len(), 29);
    assert!(snapshot.hover.is_some());
}

#[test]
fn snapshot_json_roundtrips_after_quick_range() {
    let mut slider = week_slider();
    slider.apply_quick_range(QuickRange::Days7, Instant::now());

    let json = slider.snapshot_json().expect("snapshot serializes");
    let restored: SliderSnapshot = serde_json::from_str(&json).expect("snapshot deserializes");

    let snapshot = slider.snapshot();
    assert_eq!(restored.selection, snapshot.selection);
    assert_eq!(restored.last_emitted, snapshot.last_emitted);
    assert_eq!(restored.handles, snapshot.handles);
    assert_eq!(restored.markers.len(), snapshot.markers.len());
    assert_eq!(restored.pending_settle_generation, snapshot.pending_settle_generation);
    assert_eq!(restored.selection_kind, RangeSelectionKind::Preset(QuickRange::Days7));
    assert!(json.contains("\"lastWeek\""));
    assert_eq!(slider.active_quick_range(), Some(QuickRange::Days7));
    assert_eq!(slider.selection_summary().as_deref(), Some("7 Tage"));
}

#[test]
fn unbound_slider_snapshot_is_empty() {
    let slider = TimelineSlider::new(TimelineSliderConfig::default()).expect("slider init");
    let snapshot = slider.snapshot();

    assert!(snapshot.domain.is_none());
    assert!(snapshot.preview_range.is_none());
    assert!(snapshot.markers.is_empty());
    assert_eq!(snapshot.drag_mode, DragMode::Idle);
    assert!(slider.selection_summary().is_none());
}
