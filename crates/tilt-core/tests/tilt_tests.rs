// Host-side tests for the pointer -> tilt mapping.

use tilt_core::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

fn card() -> CardGeometry {
    CardGeometry::new(200.0, 100.0)
}

#[test]
fn corner_pointer_matches_reference_values() {
    let s = TiltState::at(PointerSample::new(180.0, 90.0), card());
    assert!(approx(s.pointer_x_percent, 90.0));
    assert!(approx(s.pointer_y_percent, 90.0));
    assert!(approx(s.center_x, 40.0));
    assert!(approx(s.center_y, 40.0));
    assert!(approx(s.rotate_x_deg, -13.333), "rotate_x = {}", s.rotate_x_deg);
    assert!(approx(s.rotate_y_deg, 16.0), "rotate_y = {}", s.rotate_y_deg);
    assert!(approx(s.pointer_from_top, 0.9));
    assert!(approx(s.pointer_from_left, 0.9));
    // hypot(40, 40) / 50 > 1, so it saturates
    assert_eq!(s.pointer_from_center, 1.0);
}

#[test]
fn out_of_bounds_left_clamps_to_zero() {
    let s = TiltState::at(PointerSample::new(-50.0, 50.0), card());
    assert_eq!(s.pointer_x_percent, 0.0);
    assert!(approx(s.pointer_y_percent, 50.0));
}

#[test]
fn percentages_are_clamped_for_any_offset() {
    let g = card();
    for i in -20..=40 {
        let x = i as f32 * 17.0;
        let y = i as f32 * -9.0;
        let s = TiltState::at(PointerSample::new(x, y), g);
        assert!((0.0..=100.0).contains(&s.pointer_x_percent), "x {x} -> {}", s.pointer_x_percent);
        assert!((0.0..=100.0).contains(&s.pointer_y_percent), "y {y} -> {}", s.pointer_y_percent);
        assert!((0.0..=1.0).contains(&s.pointer_from_center));
    }
}

#[test]
fn background_stays_in_compressed_band() {
    let g = card();
    for i in -10..=30 {
        let s = TiltState::at(PointerSample::new(i as f32 * 10.0, i as f32 * 5.0), g);
        assert!((35.0..=65.0).contains(&s.background_x_percent), "bg x {}", s.background_x_percent);
        assert!((35.0..=65.0).contains(&s.background_y_percent), "bg y {}", s.background_y_percent);
    }
}

#[test]
fn center_is_symmetric_rest() {
    let g = card();
    let s = TiltState::at(g.center(), g);
    assert_eq!(s.pointer_from_center, 0.0);
    assert_eq!(s.rotate_x_deg, 0.0);
    assert_eq!(s.rotate_y_deg, 0.0);
}

#[test]
fn zero_area_box_is_neutral() {
    let neutral = TiltState::neutral();
    for g in [
        CardGeometry::new(0.0, 100.0),
        CardGeometry::new(200.0, 0.0),
        CardGeometry::new(f32::NAN, 10.0),
    ] {
        let s = TiltState::at(PointerSample::new(180.0, 90.0), g);
        assert_eq!(s, neutral, "geometry {g:?}");
    }
}

#[test]
fn non_finite_offset_falls_back_to_center_axis() {
    let s = TiltState::at(PointerSample::new(f32::NAN, 90.0), card());
    assert_eq!(s.pointer_x_percent, 50.0);
    assert!(approx(s.pointer_y_percent, 90.0));
}

#[test]
fn custom_tuning_changes_rotation_only() {
    let tuning = TiltTuning {
        rotate_x_divisor: 4.0,
        rotate_y_divisor: 4.0,
        ..TiltTuning::default()
    };
    let s = compute_tilt(PointerSample::new(180.0, 90.0), card(), &tuning);
    assert!(approx(s.rotate_x_deg, -10.0));
    assert!(approx(s.rotate_y_deg, 10.0));
    assert!(approx(s.pointer_x_percent, 90.0));
}

#[test]
fn rotation_signs_follow_pointer() {
    let g = card();
    let left_top = TiltState::at(PointerSample::new(20.0, 10.0), g);
    assert!(left_top.rotate_x_deg > 0.0);
    assert!(left_top.rotate_y_deg < 0.0);
    let right_bottom = TiltState::at(PointerSample::new(180.0, 90.0), g);
    assert!(right_bottom.rotate_x_deg < 0.0);
    assert!(right_bottom.rotate_y_deg > 0.0);
}
