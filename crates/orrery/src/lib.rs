//! Configuration loading and run loop behind the `orrery` binary

pub mod config;
pub mod run;

pub use config::{load_file, load_str, BodyConfig};
pub use run::{run, RunOptions};
