//! One year of the inner solar system with explicit Euler
//!
//! Steps the Sun and eight planets hourly for a year and reports how far
//! each orbit has drifted from its starting radius.
//!
//! Run with: cargo run --package nbody --example earth_year

use nbody::format::general;
use nbody::Universe;

fn main() {
    println!("Solar system, one year in one-hour steps\n");
    println!("{}", "=".repeat(60));

    let mut universe = Universe::new();
    universe.factory().make_solar_system();

    let initial: Vec<f64> = universe.iter().map(|b| b.position().norm()).collect();

    let dt = 3_600.0;
    let year = 31_554_195.0;
    let n_steps = (year / dt) as usize;
    let elapsed = universe.integrate(dt, n_steps);

    println!("Elapsed: {} s ({} steps)\n", general(elapsed), n_steps);
    println!("{:<10} {:>14} {:>14} {:>10}", "body", "r0 (m)", "r (m)", "drift");
    for (body, r0) in universe.iter().zip(initial).skip(1) {
        let r = body.position().norm();
        println!(
            "{:<10} {:>14} {:>14} {:>9.3}%",
            body.name(),
            general(r0),
            general(r),
            100.0 * (r - r0) / r0
        );
    }
}
