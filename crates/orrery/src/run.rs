//! Stepping a loaded universe and writing its state

use std::io::Write;

use anyhow::Result;

use nbody::Universe;
use nbody_render::{dump, AsciiVisualizer};

/// What to simulate and what to print
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    /// Time step in seconds
    pub dt: f64,
    pub steps: u64,
    /// Print an ASCII frame every this many steps; 0 disables
    pub frame_every: u64,
    /// Print a final ASCII frame
    pub visualize: bool,
    pub color: bool,
    /// Final state as a JSON array instead of the text dump
    pub json: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            dt: 3_600.0,
            steps: 0,
            frame_every: 0,
            visualize: false,
            color: false,
            json: false,
        }
    }
}

/// Advances `universe` by `options.steps` and writes the requested output to `out`
pub fn run<W: Write>(universe: &mut Universe, options: &RunOptions, out: &mut W) -> Result<()> {
    let mut visualizer = if options.color {
        AsciiVisualizer::with_colors()
    } else {
        AsciiVisualizer::new()
    };

    log::info!(
        "stepping {} bodies {} times with dt = {}s",
        universe.len(),
        options.steps,
        options.dt
    );

    for step in 1..=options.steps {
        universe.step_simulation(options.dt);
        if options.frame_every > 0 && step % options.frame_every == 0 {
            writeln!(out, "t = {}s", nbody::format::general(universe.time()))?;
            write!(out, "{}", visualizer.frame(universe))?;
        }
    }

    if options.json {
        serde_json::to_writer_pretty(&mut *out, &universe.snapshot())?;
        writeln!(out)?;
    } else {
        write!(out, "{}", dump(universe))?;
    }

    if options.visualize {
        write!(out, "{}", visualizer.frame(universe))?;
    }

    Ok(())
}
