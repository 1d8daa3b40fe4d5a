use super::*;

#[test]
fn mirror_x_only_flips_horizontal_component() {
    let v = Vec2::new(0.25, -0.5);
    assert_eq!(mirror_x(v), Vec2::new(-0.25, -0.5));
    assert_eq!(mirror_x(mirror_x(v)), v);
}

#[test]
fn finiteness_checks_reject_nan_and_infinity() {
    assert!(is_finite_vec2(Vec2::new(1.0, 2.0)));
    assert!(!is_finite_vec2(Vec2::new(f64::NAN, 2.0)));
    assert!(!is_finite_vec2(Vec2::new(0.0, f64::INFINITY)));
}
