use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{NbodyError, Result};
use crate::forces::gravitational_force;
use crate::vector::Vector2;
use crate::visitor::Visitor;

/// Material classification of a comet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Composition {
    Ice,
    Dust,
    Rock,
}

impl Composition {
    pub const ALL: [Composition; 3] = [Self::Ice, Self::Dust, Self::Rock];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ice => "ice",
            Self::Dust => "dust",
            Self::Rock => "rock",
        }
    }
}

impl FromStr for Composition {
    type Err = NbodyError;

    /// Accepts exactly `ice`, `dust` or `rock`
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| NbodyError::invalid_argument(format!("Invalid composition: {}", s)))
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The closed set of body variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "composition", rename_all = "lowercase")]
pub enum BodyKind {
    /// Pinned at the origin with zero velocity when created
    Star,
    Planet,
    /// Same shape as a planet, below the planet mass floor
    Asteroid,
    Comet(Composition),
}

impl BodyKind {
    /// Capitalised name used by text renderers
    pub fn label(&self) -> &'static str {
        match self {
            Self::Star => "Star",
            Self::Planet => "Planet",
            Self::Asteroid => "Asteroid",
            Self::Comet(_) => "Comet",
        }
    }
}

/// A simulated body
///
/// Mass is in kilograms, position in meters and velocity in meters per
/// second. Bodies are created through [`crate::factory::BodyFactory`], which
/// validates them and hands ownership to a [`crate::universe::Universe`].
/// `Clone` produces an independent deep copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    name: String,
    mass: f64,
    position: Vector2,
    velocity: Vector2,
    kind: BodyKind,
}

impl Body {
    fn with_kind(
        name: impl Into<String>,
        mass: f64,
        position: Vector2,
        velocity: Vector2,
        kind: BodyKind,
    ) -> Self {
        Self {
            name: name.into(),
            mass,
            position,
            velocity,
            kind,
        }
    }

    pub(crate) fn star(name: impl Into<String>, mass: f64) -> Self {
        Self::with_kind(name, mass, Vector2::zeros(), Vector2::zeros(), BodyKind::Star)
    }

    pub(crate) fn planet(
        name: impl Into<String>,
        mass: f64,
        position: Vector2,
        velocity: Vector2,
    ) -> Self {
        Self::with_kind(name, mass, position, velocity, BodyKind::Planet)
    }

    pub(crate) fn asteroid(
        name: impl Into<String>,
        mass: f64,
        position: Vector2,
        velocity: Vector2,
    ) -> Self {
        Self::with_kind(name, mass, position, velocity, BodyKind::Asteroid)
    }

    /// Fails with [`NbodyError::InvalidArgument`] unless `composition` is
    /// `ice`, `dust` or `rock`
    pub(crate) fn comet(
        name: impl Into<String>,
        mass: f64,
        position: Vector2,
        velocity: Vector2,
        composition: &str,
    ) -> Result<Self> {
        let composition = composition.parse::<Composition>()?;
        Ok(Self::comet_of(name, mass, position, velocity, composition))
    }

    pub(crate) fn comet_of(
        name: impl Into<String>,
        mass: f64,
        position: Vector2,
        velocity: Vector2,
        composition: Composition,
    ) -> Self {
        Self::with_kind(name, mass, position, velocity, BodyKind::Comet(composition))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn position(&self) -> Vector2 {
        self.position
    }

    pub fn velocity(&self) -> Vector2 {
        self.velocity
    }

    pub fn kind(&self) -> BodyKind {
        self.kind
    }

    /// The comet composition, `None` for every other kind
    pub fn composition(&self) -> Option<Composition> {
        match self.kind {
            BodyKind::Comet(composition) => Some(composition),
            _ => None,
        }
    }

    pub fn set_position(&mut self, position: Vector2) {
        self.position = position;
    }

    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    /// Gravitational force experienced by `self` due to `other`
    ///
    /// Directed from `self` toward `other`; negate it to get the force on
    /// `other`. Bodies sharing a position exert no force on each other.
    pub fn force_from(&self, other: &Body) -> Vector2 {
        gravitational_force(self.mass, self.position, other.mass, other.position)
    }

    pub fn momentum(&self) -> Vector2 {
        self.velocity * self.mass
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (other.position - self.position).norm()
    }

    /// Double-dispatch entry point: calls the visitor method matching this
    /// body's kind
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match self.kind {
            BodyKind::Star => visitor.visit_star(self),
            BodyKind::Planet => visitor.visit_planet(self),
            BodyKind::Asteroid => visitor.visit_asteroid(self),
            BodyKind::Comet(composition) => visitor.visit_comet(self, composition),
        }
    }
}

/// Member-wise equality over name, mass, position and velocity
impl PartialEq for Body {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.mass == other.mass
            && self.position == other.position
            && self.velocity == other.velocity
    }
}
