use approx::assert_relative_eq;

use crate::forces::gravity::gravitational_force;
use crate::forces::G;
use crate::vector::Vector2;

#[test]
fn test_force_points_toward_other_body() {
    let force = gravitational_force(1.0, Vector2::zeros(), 1.0, Vector2::new(10.0, 0.0));

    assert!(force.x() > 0.0);
    assert_eq!(force.y(), 0.0);
}

#[test]
fn test_inverse_square_magnitude() {
    let near = gravitational_force(5e24, Vector2::zeros(), 7e22, Vector2::new(0.0, 4e8));
    let far = gravitational_force(5e24, Vector2::zeros(), 7e22, Vector2::new(0.0, 8e8));

    assert_relative_eq!(near.norm(), G * 5e24 * 7e22 / 16e16, max_relative = 1e-12);
    assert_relative_eq!(near.norm() / far.norm(), 4.0, max_relative = 1e-12);
}

#[test]
fn test_reference_star_planet_pair() {
    let a = Vector2::zeros();
    let b = Vector2::new(100.0, 100.0);

    let on_a = gravitational_force(1e52, a, 1e23, b);
    let on_b = gravitational_force(1e23, b, 1e52, a);

    assert_eq!(on_a.to_string(), "[2.35971e+60 2.35971e+60]");
    assert_eq!(on_b.to_string(), "[-2.35971e+60 -2.35971e+60]");
}

#[test]
fn test_sun_earth_pair() {
    let sun = Vector2::zeros();
    let earth = Vector2::new(-8.1519460488671951e10 - 1.2543598125392383e11, 0.0);

    let on_earth = gravitational_force(5.9742e24, earth, 1.98892e30, sun);
    let on_sun = gravitational_force(1.98892e30, sun, 5.9742e24, earth);

    assert_eq!(on_earth.to_string(), "[1.8516e+22 0]");
    assert_eq!(on_sun.to_string(), "[-1.8516e+22 0]");
}

#[test]
fn test_coincident_positions_give_zero() {
    let p = Vector2::new(1e11, -2e11);
    let force = gravitational_force(1e30, p, 1e24, p);

    assert_eq!(force, Vector2::zeros());
}

#[test]
fn test_direction_matches_normalized_separation() {
    let from = Vector2::new(3e10, -4e10);
    let to = Vector2::new(-1e10, 2e10);
    let force = gravitational_force(2e24, from, 3e26, to);

    let separation = to - from;
    let expected = (G * 2e24 * 3e26 / separation.norm_sq()) * separation.normalize().unwrap();
    assert_eq!(force.x().to_bits(), expected.x().to_bits());
    assert_eq!(force.y().to_bits(), expected.y().to_bits());
}

#[test]
fn test_tiny_separations_stay_finite() {
    let close = gravitational_force(1.0, Vector2::zeros(), 1.0, Vector2::new(1e-150, 0.0));
    assert!(close.x().is_finite() && close.x() > 0.0);
    assert_eq!(close.y(), 0.0);

    // Squared distance underflows to zero; treated as coincident
    let underflow = gravitational_force(1.0, Vector2::zeros(), 1.0, Vector2::new(1e-170, 0.0));
    assert_eq!(underflow, Vector2::zeros());
    assert!(!underflow.x().is_nan());
}
