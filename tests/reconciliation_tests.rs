use std::time::{Duration, Instant};

use approx::assert_relative_eq;
use chrono::{DateTime, TimeZone, Utc};
use timeline_rs::core::{Domain, QuickRange, TimeRange};
use timeline_rs::interaction::{DragTarget, PointerEvent};
use timeline_rs::{RangeSelectionKind, TimelineSlider, TimelineSliderConfig};

fn utc(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, hour, 0, 0)
        .single()
        .expect("valid utc time")
}

fn pre_drag_range() -> TimeRange {
    TimeRange::new(utc(2, 0), utc(5, 0))
}

/// One week on 700px: 100px per day.
fn week_slider() -> TimelineSlider {
    TimelineSlider::with_state(
        TimelineSliderConfig::default(),
        Domain::new(utc(1, 0), utc(8, 0)),
        Some(pre_drag_range()),
        700.0,
    )
    .expect("slider init")
}

fn assert_handles(slider: &TimelineSlider, start_px: f64, end_px: f64) {
    let handles = slider.handles();
    assert_relative_eq!(handles.start_px, start_px, epsilon = 1e-9);
    assert_relative_eq!(handles.end_px, end_px, epsilon = 1e-9);
}

#[test]
fn pre_drag_echo_mid_drag_does_not_reset_handles() {
    let mut slider = week_slider();

    assert!(slider.pointer_down(DragTarget::Band, PointerEvent::mouse(250.0)));
    assert!(slider.pointer_move(PointerEvent::mouse(350.0)));
    assert_handles(&slider, 200.0, 500.0);

    slider.set_external_range(pre_drag_range());
    assert_handles(&slider, 200.0, 500.0);
    assert_eq!(slider.external_range(), Some(pre_drag_range()));
    assert!(slider.is_dragging());
}

#[test]
fn pre_drag_value_received_mid_drag_is_superseded_by_release() {
    let mut slider = week_slider();
    let now = Instant::now();

    assert!(slider.pointer_down(DragTarget::Band, PointerEvent::mouse(250.0)));
    assert!(slider.pointer_move(PointerEvent::mouse(350.0)));
    slider.set_external_range(pre_drag_range());
    let change = slider
        .pointer_up(PointerEvent::mouse(350.0), now)
        .expect("release emits");

    assert!(slider.poll_settle(now + Duration::from_millis(100)));
    assert_handles(&slider, 200.0, 500.0);
    assert_eq!(slider.selection(), Some(change.range));
}

#[test]
fn echo_during_settle_window_is_ignored_and_release_keeps_handles() {
    let mut slider = week_slider();
    let now = Instant::now();

    assert!(slider.pointer_down(DragTarget::EndHandle, PointerEvent::mouse(400.0)));
    assert!(slider.pointer_move(PointerEvent::mouse(550.0)));
    let change = slider
        .pointer_up(PointerEvent::mouse(550.0), now)
        .expect("release emits");

    slider.set_external_range(change.range);
    assert!(slider.is_guard_engaged());
    assert_handles(&slider, 100.0, 550.0);

    assert!(!slider.poll_settle(now + Duration::from_millis(50)));
    assert!(slider.poll_settle(now + Duration::from_millis(100)));
    assert!(!slider.is_guard_engaged());
    assert_handles(&slider, 100.0, 550.0);
}

#[test]
fn external_updates_apply_immediately_once_guard_is_clear() {
    let mut slider = week_slider();

    slider.set_external_range(TimeRange::new(utc(3, 0), utc(4, 0)));
    assert_handles(&slider, 200.0, 300.0);

    // Out-of-domain values are clamped, not rejected.
    slider.set_external_range(TimeRange::new(utc(6, 0), utc(20, 0)));
    assert_handles(&slider, 500.0, 700.0);
}

#[test]
fn host_rewrite_during_settle_window_is_applied_on_release() {
    let mut slider = week_slider();
    let now = Instant::now();

    slider
        .apply_quick_range(QuickRange::Days1, now)
        .expect("domain known");
    assert_handles(&slider, 600.0, 700.0);

    let rewritten = TimeRange::new(utc(6, 12), utc(8, 0));
    slider.set_external_range(rewritten);
    assert_handles(&slider, 600.0, 700.0);

    assert!(slider.poll_settle(now + Duration::from_millis(100)));
    assert_handles(&slider, 550.0, 700.0);
    assert_eq!(slider.selection(), Some(rewritten));
    assert_eq!(slider.selection_kind(), RangeSelectionKind::Custom);
}

#[test]
fn superseded_settle_ticket_cannot_release_the_guard() {
    let mut slider = week_slider();
    let now = Instant::now();

    slider.apply_quick_range(QuickRange::Days1, now);
    let first = slider.pending_settle().expect("settle armed");

    slider.apply_quick_range(QuickRange::Days7, now + Duration::from_millis(60));
    let second = slider.pending_settle().expect("settle armed");
    assert_ne!(first, second);

    assert!(!slider.settle(first));
    assert!(slider.is_guard_engaged());
    assert!(!slider.poll_settle(now + Duration::from_millis(120)));
    assert!(slider.settle(second));
    assert!(!slider.is_guard_engaged());
}

#[test]
fn new_drag_cancels_pending_settle_timer() {
    let mut slider = week_slider();
    let now = Instant::now();

    slider.apply_quick_range(QuickRange::Days1, now);
    let ticket = slider.pending_settle().expect("settle armed");

    assert!(slider.pointer_down(DragTarget::StartHandle, PointerEvent::mouse(600.0)));
    assert!(slider.pending_settle().is_none());
    assert!(!slider.settle(ticket));
    assert!(!slider.poll_settle(now + Duration::from_secs(10)));
    assert!(slider.is_guard_engaged());
}

#[test]
fn resize_mid_drag_keeps_handle_instants() {
    let mut slider = week_slider();
    let now = Instant::now();

    assert!(slider.pointer_down(DragTarget::Band, PointerEvent::mouse(250.0)));
    slider.set_track_width(1_400.0);
    assert_handles(&slider, 200.0, 800.0);

    let change = slider
        .pointer_up(PointerEvent::mouse(250.0), now)
        .expect("release emits");
    assert_eq!(change.range, pre_drag_range());

    assert!(slider.poll_settle(now + Duration::from_millis(100)));
    assert_handles(&slider, 200.0, 800.0);
}

#[test]
fn shrinking_track_mid_drag_keeps_min_gap_inside_track() {
    let mut slider = week_slider();
    let now = Instant::now();

    slider.set_external_range(TimeRange::new(utc(8, 0), utc(8, 0)));
    assert_handles(&slider, 692.0, 700.0);

    assert!(slider.pointer_down(DragTarget::EndHandle, PointerEvent::mouse(700.0)));
    slider.set_track_width(70.0);
    assert_handles(&slider, 62.0, 70.0);

    assert!(slider.pointer_move(PointerEvent::mouse(60.0)));
    assert_handles(&slider, 62.0, 70.0);
    assert!(slider.pointer_move(PointerEvent::mouse(5_000.0)));
    assert_handles(&slider, 62.0, 70.0);

    let change = slider
        .pointer_up(PointerEvent::mouse(5_000.0), now)
        .expect("release emits");
    assert!(change.range.start < change.range.end);
    assert_eq!(change.range.end, utc(8, 0));
}

#[test]
fn domain_change_mid_drag_is_laid_out_after_settle() {
    let mut slider = week_slider();
    let now = Instant::now();

    assert!(slider.pointer_down(DragTarget::Band, PointerEvent::mouse(250.0)));
    slider.set_domain(Domain::new(utc(1, 0), utc(15, 0)));
    assert_handles(&slider, 100.0, 400.0);

    let change = slider
        .pointer_up(PointerEvent::mouse(250.0), now)
        .expect("release emits");
    assert_eq!(change.range, TimeRange::new(utc(3, 0), utc(9, 0)));

    assert!(slider.poll_settle(now + Duration::from_millis(100)));
    assert_handles(&slider, 100.0, 400.0);
}

#[test]
fn resize_during_settle_window_keeps_local_selection() {
    let mut slider = week_slider();
    let now = Instant::now();

    slider.apply_quick_range(QuickRange::Days1, now);
    slider.set_track_width(350.0);
    assert_handles(&slider, 300.0, 350.0);
    assert!(slider.is_guard_engaged());
}

#[test]
fn domain_change_relayouts_idle_handles() {
    let mut slider = week_slider();

    slider.set_domain(Domain::new(utc(1, 0), utc(15, 0)));
    assert_handles(&slider, 50.0, 200.0);
}

#[test]
fn missing_range_defaults_to_whole_track() {
    let slider = TimelineSlider::with_state(
        TimelineSliderConfig::default(),
        Domain::new(utc(1, 0), utc(8, 0)),
        None,
        700.0,
    )
    .expect("slider init");

    assert_handles(&slider, 0.0, 700.0);
    assert!(slider.selection().is_none());
}

#[test]
fn collapsed_host_range_is_widened_to_min_gap() {
    let mut slider = week_slider();

    slider.set_external_range(TimeRange::new(utc(8, 0), utc(8, 0)));
    assert_handles(&slider, 692.0, 700.0);
}
