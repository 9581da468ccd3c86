//! Validated construction and registration of bodies
//!
//! Every constructor checks its inputs before anything is registered, so a
//! failed call leaves the universe unchanged.

use crate::body::Body;
use crate::error::{NbodyError, Result};
use crate::solar_system::{self, ReferenceBody, ReferenceComet};
use crate::universe::{BodyId, Universe};
use crate::vector::Vector2;

/// Planets must be at least this massive (kg); asteroids must be lighter
pub const PLANET_MIN_MASS: f64 = 1e21;

/// Minimum stellar mass (kg)
pub const STAR_MIN_MASS: f64 = 1e30;

/// Builds bodies and registers them with a borrowed [`Universe`]
///
/// The universe keeps ownership; callers get a [`BodyId`] back.
///
/// # Examples
///
/// ```
/// use nbody::universe::Universe;
/// use nbody::vector::Vector2;
///
/// let mut universe = Universe::new();
/// let mut factory = universe.factory();
///
/// let sun = factory.make_sun();
/// let rock = factory
///     .make_asteroid("rock", 1e18, Vector2::new(4e11, 0.0), Vector2::new(0.0, 18_000.0))
///     .unwrap();
///
/// let err = factory
///     .make_planet("pebble", 10.0, Vector2::zeros(), Vector2::zeros())
///     .unwrap_err();
/// assert!(err.to_string().contains("Mass must be greater than"));
///
/// assert_eq!(universe.len(), 2);
/// assert_eq!(universe.get(sun).unwrap().name(), "sun");
/// assert!(universe.contains(rock));
/// ```
pub struct BodyFactory<'u> {
    universe: &'u mut Universe,
}

impl<'u> BodyFactory<'u> {
    pub fn new(universe: &'u mut Universe) -> Self {
        Self { universe }
    }

    /// Fails with `InvalidArgument` when `mass < 1e21`
    pub fn make_planet(
        &mut self,
        name: &str,
        mass: f64,
        position: Vector2,
        velocity: Vector2,
    ) -> Result<BodyId> {
        check_min_mass(mass, PLANET_MIN_MASS)?;
        Ok(self.register(Body::planet(name, mass, position, velocity)))
    }

    /// A star fixed at the origin with zero velocity
    ///
    /// Fails with `InvalidArgument` when `mass < 1e30`.
    pub fn make_star(&mut self, name: &str, mass: f64) -> Result<BodyId> {
        check_min_mass(mass, STAR_MIN_MASS)?;
        Ok(self.register(Body::star(name, mass)))
    }

    /// Fails with `InvalidArgument` when `mass >= 1e21`
    pub fn make_asteroid(
        &mut self,
        name: &str,
        mass: f64,
        position: Vector2,
        velocity: Vector2,
    ) -> Result<BodyId> {
        check_max_mass(mass, PLANET_MIN_MASS)?;
        Ok(self.register(Body::asteroid(name, mass, position, velocity)))
    }

    /// Any mass is accepted; `composition` must be `ice`, `dust` or `rock`
    pub fn make_comet(
        &mut self,
        name: &str,
        mass: f64,
        position: Vector2,
        velocity: Vector2,
        composition: &str,
    ) -> Result<BodyId> {
        let comet = Body::comet(name, mass, position, velocity, composition)?;
        Ok(self.register(comet))
    }

    fn register(&mut self, body: Body) -> BodyId {
        self.universe.add_object(body)
    }

    // Reference bodies satisfy their kind's bounds, so they skip validation.

    fn reference_planet(&mut self, reference: &ReferenceBody) -> BodyId {
        self.register(Body::planet(
            reference.name,
            reference.mass,
            reference.position(),
            reference.velocity(),
        ))
    }

    fn reference_asteroid(&mut self, reference: &ReferenceBody) -> BodyId {
        self.register(Body::asteroid(
            reference.name,
            reference.mass,
            reference.position(),
            reference.velocity(),
        ))
    }

    fn reference_comet(&mut self, reference: &ReferenceComet) -> BodyId {
        let body = &reference.body;
        self.register(Body::comet_of(
            body.name,
            body.mass,
            body.position(),
            body.velocity(),
            reference.composition,
        ))
    }

    pub fn make_sun(&mut self) -> BodyId {
        self.register(Body::star(solar_system::SUN.name, solar_system::SUN.mass))
    }

    pub fn make_mercury(&mut self) -> BodyId {
        self.reference_planet(&solar_system::MERCURY)
    }

    pub fn make_venus(&mut self) -> BodyId {
        self.reference_planet(&solar_system::VENUS)
    }

    pub fn make_earth(&mut self) -> BodyId {
        self.reference_planet(&solar_system::EARTH)
    }

    pub fn make_mars(&mut self) -> BodyId {
        self.reference_planet(&solar_system::MARS)
    }

    pub fn make_jupiter(&mut self) -> BodyId {
        self.reference_planet(&solar_system::JUPITER)
    }

    pub fn make_saturn(&mut self) -> BodyId {
        self.reference_planet(&solar_system::SATURN)
    }

    pub fn make_uranus(&mut self) -> BodyId {
        self.reference_planet(&solar_system::URANUS)
    }

    pub fn make_neptune(&mut self) -> BodyId {
        self.reference_planet(&solar_system::NEPTUNE)
    }

    pub fn make_ceres(&mut self) -> BodyId {
        self.reference_asteroid(&solar_system::CERES)
    }

    pub fn make_pallas(&mut self) -> BodyId {
        self.reference_asteroid(&solar_system::PALLAS)
    }

    pub fn make_vesta(&mut self) -> BodyId {
        self.reference_asteroid(&solar_system::VESTA)
    }

    pub fn make_hygiea(&mut self) -> BodyId {
        self.reference_asteroid(&solar_system::HYGIEA)
    }

    pub fn make_interamnia(&mut self) -> BodyId {
        self.reference_asteroid(&solar_system::INTERAMNIA)
    }

    pub fn make_halley(&mut self) -> BodyId {
        self.reference_comet(&solar_system::HALLEY)
    }

    pub fn make_hale_bopp(&mut self) -> BodyId {
        self.reference_comet(&solar_system::HALE_BOPP)
    }

    /// The Sun followed by the eight planets, innermost first
    pub fn make_solar_system(&mut self) -> Vec<BodyId> {
        let mut ids = vec![self.make_sun()];
        ids.extend(
            solar_system::PLANETS
                .iter()
                .map(|planet| self.reference_planet(planet)),
        );
        ids
    }

    /// [`BodyFactory::make_solar_system`] plus the five largest asteroids and
    /// the two reference comets
    pub fn make_extended_solar_system(&mut self) -> Vec<BodyId> {
        let mut ids = self.make_solar_system();
        for asteroid in &solar_system::ASTEROIDS {
            ids.push(self.reference_asteroid(asteroid));
        }
        for comet in &solar_system::COMETS {
            ids.push(self.reference_comet(comet));
        }
        ids
    }
}

fn check_min_mass(mass: f64, limit: f64) -> Result<()> {
    if mass < limit {
        return Err(NbodyError::invalid_argument(format!(
            "Mass must be greater than {:.6}",
            limit
        )));
    }
    Ok(())
}

fn check_max_mass(mass: f64, limit: f64) -> Result<()> {
    if mass >= limit {
        return Err(NbodyError::invalid_argument(format!(
            "Mass must be less than {:.6}",
            limit
        )));
    }
    Ok(())
}
