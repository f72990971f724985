// Host-side tests for pointer geometry helpers.

use abresh_site::pointer::{relative_offset, relative_percent, viewport_fraction};

#[test]
fn offset_is_relative_to_origin() {
    assert_eq!(relative_offset((120.0, 80.0), (100.0, 50.0)), (20.0, 30.0));
}

#[test]
fn percent_of_extent() {
    assert_eq!(relative_percent(150.0, 100.0, 200.0), 25.0);
    assert_eq!(relative_percent(100.0, 100.0, 200.0), 0.0);
    assert_eq!(relative_percent(300.0, 100.0, 200.0), 100.0);
}

#[test]
fn collapsed_extent_reports_zero_percent() {
    assert_eq!(relative_percent(150.0, 100.0, 0.0), 0.0);
    assert_eq!(relative_percent(150.0, 100.0, -5.0), 0.0);
}

#[test]
fn viewport_fraction_rejects_empty_viewport() {
    assert_eq!(viewport_fraction(512.0, 1024.0), Some(0.5));
    assert_eq!(viewport_fraction(512.0, 0.0), None);
    assert_eq!(viewport_fraction(512.0, f64::NAN), None);
}
