//! Reference bodies of the solar system in SI units
//!
//! These are fixed initial conditions, not derived values. Planets start on
//! the positive x axis moving along +y. Asteroid and comet entries use
//! published masses with representative orbital radii and speeds.

use crate::body::Composition;
use crate::vector::Vector2;

/// Initial conditions of a named body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceBody {
    pub name: &'static str,
    /// kg
    pub mass: f64,
    /// m
    pub position: [f64; 2],
    /// m/s
    pub velocity: [f64; 2],
}

impl ReferenceBody {
    pub fn position(&self) -> Vector2 {
        Vector2::from(self.position)
    }

    pub fn velocity(&self) -> Vector2 {
        Vector2::from(self.velocity)
    }
}

/// A reference comet and its composition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceComet {
    pub body: ReferenceBody,
    pub composition: Composition,
}

pub const SUN: ReferenceBody = ReferenceBody {
    name: "sun",
    mass: 1.98892e30,
    position: [0.0, 0.0],
    velocity: [0.0, 0.0],
};

pub const MERCURY: ReferenceBody = ReferenceBody {
    name: "mercury",
    mass: 3.3011e23,
    position: [60_000_000_000.0, 0.0],
    velocity: [0.0, 47_360.0],
};

pub const VENUS: ReferenceBody = ReferenceBody {
    name: "venus",
    mass: 4.8675e24,
    position: [108_000_000_000.0, 0.0],
    velocity: [0.0, 35_020.0],
};

pub const EARTH: ReferenceBody = ReferenceBody {
    name: "earth",
    mass: 5.9742e24,
    position: [149_597_870_700.0, 0.0],
    velocity: [0.0, 29_788.4676],
};

pub const MARS: ReferenceBody = ReferenceBody {
    name: "mars",
    mass: 6.417e23,
    position: [228_000_000_000.0, 0.0],
    velocity: [0.0, 24_070.0],
};

pub const JUPITER: ReferenceBody = ReferenceBody {
    name: "jupiter",
    mass: 1.8982e27,
    position: [780_000_000_000.0, 0.0],
    velocity: [0.0, 13_070.0],
};

pub const SATURN: ReferenceBody = ReferenceBody {
    name: "saturn",
    mass: 5.6834e26,
    position: [1_450_000_000_000.0, 0.0],
    velocity: [0.0, 9_680.0],
};

pub const URANUS: ReferenceBody = ReferenceBody {
    name: "uranus",
    mass: 8.6810e25,
    position: [2_850_000_000_000.0, 0.0],
    velocity: [0.0, 6_800.0],
};

pub const NEPTUNE: ReferenceBody = ReferenceBody {
    name: "neptune",
    mass: 1.02409e26,
    position: [4_500_000_000_000.0, 0.0],
    velocity: [0.0, 5_430.0],
};

/// The eight classical planets, innermost first
pub const PLANETS: [ReferenceBody; 8] = [
    MERCURY, VENUS, EARTH, MARS, JUPITER, SATURN, URANUS, NEPTUNE,
];

pub const CERES: ReferenceBody = ReferenceBody {
    name: "ceres",
    mass: 9.3835e20,
    position: [414_000_000_000.0, 0.0],
    velocity: [0.0, 17_882.0],
};

pub const PALLAS: ReferenceBody = ReferenceBody {
    name: "pallas",
    mass: 2.04e20,
    position: [-415_000_000_000.0, 0.0],
    velocity: [0.0, -17_650.0],
};

pub const VESTA: ReferenceBody = ReferenceBody {
    name: "vesta",
    mass: 2.59076e20,
    position: [353_000_000_000.0, 0.0],
    velocity: [0.0, 19_340.0],
};

pub const HYGIEA: ReferenceBody = ReferenceBody {
    name: "hygiea",
    mass: 8.32e19,
    position: [0.0, 470_000_000_000.0],
    velocity: [-16_760.0, 0.0],
};

pub const INTERAMNIA: ReferenceBody = ReferenceBody {
    name: "interamnia",
    mass: 3.5e19,
    position: [0.0, -459_000_000_000.0],
    velocity: [16_920.0, 0.0],
};

/// The five most massive main-belt asteroids
pub const ASTEROIDS: [ReferenceBody; 5] = [CERES, PALLAS, VESTA, HYGIEA, INTERAMNIA];

/// Halley's comet at perihelion
pub const HALLEY: ReferenceComet = ReferenceComet {
    body: ReferenceBody {
        name: "halley's",
        mass: 2.2e14,
        position: [87_660_000_000.0, 0.0],
        velocity: [0.0, 54_550.0],
    },
    composition: Composition::Ice,
};

/// Hale-Bopp at perihelion, on a near-parabolic orbit
pub const HALE_BOPP: ReferenceComet = ReferenceComet {
    body: ReferenceBody {
        name: "hale-bopp",
        mass: 1.3e16,
        position: [-136_800_000_000.0, 0.0],
        velocity: [0.0, -44_000.0],
    },
    composition: Composition::Dust,
};

pub const COMETS: [ReferenceComet; 2] = [HALLEY, HALE_BOPP];
