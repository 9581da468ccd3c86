//! Direct pairwise Newtonian gravity

use crate::forces::G;
use crate::vector::Vector2;

/// Force experienced by a body of mass `mass` at `position` due to a body of
/// mass `other_mass` at `other_position`
///
/// The result points from `position` toward `other_position` with magnitude
/// `G * mass * other_mass / r²`. Coincident positions yield the zero vector
/// instead of an infinite or NaN force.
///
/// # Examples
///
/// ```
/// use nbody::forces::gravitational_force;
/// use nbody::vector::Vector2;
///
/// let force = gravitational_force(1e52, Vector2::zeros(), 1e23, Vector2::new(100.0, 100.0));
/// assert_eq!(force.to_string(), "[2.35971e+60 2.35971e+60]");
///
/// let same_place = gravitational_force(1.0, Vector2::zeros(), 1.0, Vector2::zeros());
/// assert_eq!(same_place, Vector2::zeros());
/// ```
pub fn gravitational_force(
    mass: f64,
    position: Vector2,
    other_mass: f64,
    other_position: Vector2,
) -> Vector2 {
    let separation = other_position - position;
    let distance_sq = separation.norm_sq();
    if distance_sq == 0.0 {
        return Vector2::zeros();
    }

    // distance_sq > 0 here, so the unit direction is well defined
    let direction = separation / distance_sq.sqrt();
    let magnitude = G * mass * other_mass / distance_sq;
    magnitude * direction
}
