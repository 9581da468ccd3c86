//! Force laws acting between bodies
//!
//! Only Newtonian gravity is modelled. Forces are exact pairwise sums; no
//! softening or tree approximation is applied.

pub mod gravity;

#[cfg(test)]
mod gravity_test;

pub use gravity::gravitational_force;

/// Gravitational constant in m³ kg⁻¹ s⁻²
pub const G: f64 = 6.67428e-11;
