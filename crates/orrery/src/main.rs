use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use nbody::Universe;
use orrery::{load_file, run, RunOptions};

/// Simulate a planetary system described by a JSON file
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON array of bodies
    file: PathBuf,

    /// Time step in seconds
    #[arg(long, default_value_t = 3_600.0)]
    dt: f64,

    /// Number of steps to simulate
    #[arg(long, default_value_t = 0)]
    steps: u64,

    /// Print an ASCII frame every N steps (0 disables)
    #[arg(long, default_value_t = 0, value_name = "N")]
    frame_every: u64,

    /// Print an ASCII frame of the final state
    #[arg(long)]
    visualize: bool,

    /// Color frame markers with ANSI escapes
    #[arg(long)]
    color: bool,

    /// Print the final state as JSON instead of text
    #[arg(long)]
    json: bool,
}

impl Args {
    fn options(&self) -> RunOptions {
        RunOptions {
            dt: self.dt,
            steps: self.steps,
            frame_every: self.frame_every,
            visualize: self.visualize,
            color: self.color,
            json: self.json,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    log::debug!("{:?}", args);

    let mut universe = Universe::new();
    load_file(&args.file, &mut universe)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run(&mut universe, &args.options(), &mut out)?;
    out.flush()?;

    Ok(())
}
