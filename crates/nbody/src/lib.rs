//! Two-dimensional Newtonian gravity simulation
//!
//! A [`universe::Universe`] owns an ordered set of bodies (stars, planets,
//! asteroids and comets) created through its [`factory::BodyFactory`]. Each
//! call to [`universe::Universe::step_simulation`] sums pairwise gravity in
//! O(n²) and advances every body except the first with explicit Euler.
//! Renderers consume bodies through the [`visitor::Visitor`] trait.
//!
//! ```
//! use nbody::universe::Universe;
//!
//! let mut universe = Universe::new();
//! let mut factory = universe.factory();
//! factory.make_sun();
//! let earth = factory.make_earth();
//!
//! universe.integrate(3_600.0, 24);
//!
//! let sun = universe.anchor().unwrap();
//! assert_eq!(sun.position().to_string(), "[0 0]");
//! assert!(universe.get(earth).unwrap().position().y() > 0.0);
//! ```

pub mod body;
pub mod error;
pub mod factory;
pub mod forces;
pub mod format;
pub mod integrator;
pub mod solar_system;
pub mod universe;
pub mod vector;
pub mod visitor;

#[cfg(test)]
mod format_test;
#[cfg(test)]
mod integrator_test;

pub use body::{Body, BodyKind, Composition};
pub use error::{NbodyError, Result};
pub use factory::BodyFactory;
pub use universe::{BodyId, Universe};
pub use vector::{Vector, Vector2, Vector3};
pub use visitor::Visitor;
