//! Time integration for the universe
//!
//! The only integrator is fixed-step explicit Euler. Reference trajectories
//! were generated with it, so its update order is part of the contract.

use crate::universe::Universe;

/// A time integrator for a [`Universe`]
pub trait Integrator {
    /// Advance the universe by one timestep of `dt` seconds
    fn step(&self, universe: &mut Universe, dt: f64);

    /// Advance the universe by `n_steps` timesteps
    ///
    /// # Returns
    ///
    /// Simulated time after integration, in seconds
    fn integrate(&self, universe: &mut Universe, dt: f64, n_steps: usize) -> f64 {
        for _ in 0..n_steps {
            self.step(universe, dt);
        }
        universe.time()
    }
}

/// Forward Euler with a pinned anchor
///
/// Bodies after the first are updated one at a time, in insertion order:
///
/// 1. `position += dt * velocity` using the velocity from before this step
/// 2. `velocity += dt * sum_force / mass`, the force evaluated at the body's
///    pre-step position against the current positions of all other bodies
///
/// Bodies later in the sequence therefore see the already-updated positions
/// of earlier ones. The anchor (first body) is never modified.
///
/// # Examples
///
/// ```
/// use nbody::integrator::{ExplicitEuler, Integrator};
/// use nbody::universe::Universe;
/// use nbody::vector::Vector2;
///
/// let mut universe = Universe::new();
/// let mut factory = universe.factory();
/// factory.make_star("sun", 1e30).unwrap();
/// let body = factory
///     .make_planet("obj", 1e22, Vector2::new(1e10, 1e10), Vector2::new(1e6, 0.0))
///     .unwrap();
///
/// ExplicitEuler.step(&mut universe, 1.0);
///
/// // Position moved with the pre-step velocity
/// assert_eq!(universe.get(body).unwrap().position(), Vector2::new(1.0001e10, 1e10));
/// assert_eq!(universe.time(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplicitEuler;

impl Integrator for ExplicitEuler {
    fn step(&self, universe: &mut Universe, dt: f64) {
        log::trace!("euler step of {} s over {} bodies", dt, universe.len());

        for idx in 1..universe.len() {
            let force = universe.sum_force_at(idx);
            let body = universe.body_at_mut(idx);

            let velocity = body.velocity();
            let position = body.position() + dt * velocity;
            let acceleration = force / body.mass();

            body.set_position(position);
            body.set_velocity(velocity + dt * acceleration);
        }

        universe.advance_time(dt);
    }
}
