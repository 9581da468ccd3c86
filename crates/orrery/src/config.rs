//! Loading bodies from a JSON document
//!
//! The document is an array of entries:
//!
//! ```json
//! [
//!   { "name": "sun", "mass": 1.98892e30 },
//!   { "name": "earth", "mass": 5.9742e24, "pos": [149597870700, 0], "vel": [0, 29788.4676] },
//!   { "name": "halley's", "mass": 2.2e14, "pos": [8.766e10, 0], "vel": [0, 54550], "comp": "ice" }
//! ]
//! ```
//!
//! An entry without `pos` is a star. An entry with `pos`, `vel` and `comp` is a
//! comet. Otherwise it is a planet when its mass reaches the planet floor and
//! an asteroid below it.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use nbody::factory::{BodyFactory, PLANET_MIN_MASS};
use nbody::{BodyId, Universe, Vector2};

/// One entry of the configuration array
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,
    pub mass: f64,
    pub pos: Option<[f64; 2]>,
    pub vel: Option<[f64; 2]>,
    pub comp: Option<String>,
}

impl BodyConfig {
    /// Registers this entry with `factory`, choosing the kind from the fields present
    pub fn register(&self, factory: &mut BodyFactory<'_>) -> Result<BodyId> {
        let id = match (self.pos, self.vel) {
            (None, None) => factory.make_star(&self.name, self.mass)?,
            (Some(pos), Some(vel)) => {
                let (pos, vel) = (Vector2::from(pos), Vector2::from(vel));
                match &self.comp {
                    Some(comp) => factory.make_comet(&self.name, self.mass, pos, vel, comp)?,
                    None if self.mass >= PLANET_MIN_MASS => {
                        factory.make_planet(&self.name, self.mass, pos, vel)?
                    }
                    None => factory.make_asteroid(&self.name, self.mass, pos, vel)?,
                }
            }
            (Some(_), None) => bail!("'pos' given without 'vel'"),
            (None, Some(_)) => bail!("'vel' given without 'pos'"),
        };
        Ok(id)
    }
}

/// Parses a configuration document without touching any universe
pub fn parse(json: &str) -> Result<Vec<BodyConfig>> {
    serde_json::from_str(json).context("invalid body configuration")
}

/// Registers every entry of `json` with `universe`, in document order
///
/// Returns the number of bodies added. Entries before a failing one stay
/// registered.
pub fn load_str(json: &str, universe: &mut Universe) -> Result<usize> {
    let entries = parse(json)?;
    let mut factory = universe.factory();
    for entry in &entries {
        entry
            .register(&mut factory)
            .with_context(|| format!("cannot create body '{}'", entry.name))?;
    }
    log::info!("loaded {} bodies", entries.len());
    Ok(entries.len())
}

/// Reads `path` and hands its contents to [`load_str`]
pub fn load_file(path: impl AsRef<Path>, universe: &mut Universe) -> Result<usize> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("Parser not able to open file: {}", path.display()))?;
    log::debug!("read configuration from {}", path.display());
    load_str(&json, universe).with_context(|| format!("while loading {}", path.display()))
}
