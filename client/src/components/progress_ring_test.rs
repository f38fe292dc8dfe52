use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn dash_offset_full_ring_at_zero() {
    assert!(close(ring_dash_offset(0), ring_circumference()));
}

#[test]
fn dash_offset_empty_at_hundred() {
    assert!(close(ring_dash_offset(100), 0.0));
}

#[test]
fn dash_offset_half_at_fifty() {
    assert!(close(ring_dash_offset(50), ring_circumference() / 2.0));
}

#[test]
fn dash_offset_clamps_above_hundred() {
    assert!(close(ring_dash_offset(180), 0.0));
}

#[test]
fn ring_label_appends_percent_sign() {
    assert_eq!(ring_label(50), "50%");
    assert_eq!(ring_label(0), "0%");
}
