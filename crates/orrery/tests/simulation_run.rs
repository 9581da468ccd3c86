//! Driving the run loop end to end and checking what it writes.

use approx::assert_relative_eq;

use nbody::{Body, Universe, Vector2};
use orrery::{load_str, run, RunOptions};

const EARTH_ONLY: &str = r#"[
    { "name": "sun", "mass": 1.98892e30 },
    { "name": "earth", "mass": 5.9742e24, "pos": [149597870700, 0], "vel": [0, 29788.4676] }
]"#;

fn run_to_string(universe: &mut Universe, options: &RunOptions) -> String {
    let mut out = Vec::new();
    run(universe, options, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn earth_system() -> Universe {
    let mut universe = Universe::new();
    load_str(EARTH_ONLY, &mut universe).unwrap();
    universe
}

#[test]
fn zero_steps_prints_initial_dump() {
    let mut universe = earth_system();
    let output = run_to_string(&mut universe, &RunOptions::default());

    assert_eq!(
        output,
        "Star: sun 1.98892e+30kg\n\
         Planet: earth 5.9742e+24kg [1.49598e+11 0][0 29788.5]\n"
    );
    assert_eq!(universe.time(), 0.0);
}

#[test]
fn steps_advance_time() {
    let mut universe = earth_system();
    let options = RunOptions {
        steps: 24,
        ..RunOptions::default()
    };
    run_to_string(&mut universe, &options);

    assert_relative_eq!(universe.time(), 86_400.0);
    let earth = universe.iter().nth(1).unwrap();
    let expected_y = 24.0 * 3_600.0 * 29_788.4676;
    assert_relative_eq!(earth.position().y(), expected_y, max_relative = 1e-3);
    assert_eq!(universe.anchor().unwrap().position(), Vector2::zeros());
}

#[test]
fn json_output_round_trips() {
    let mut universe = earth_system();
    let options = RunOptions {
        steps: 3,
        json: true,
        ..RunOptions::default()
    };
    let output = run_to_string(&mut universe, &options);

    let bodies: Vec<Body> = serde_json::from_str(&output).unwrap();
    assert_eq!(bodies, universe.snapshot());
    assert!(output.contains("\"kind\": \"planet\""));
}

#[test]
fn periodic_frames_are_printed() {
    let mut universe = earth_system();
    let options = RunOptions {
        steps: 6,
        frame_every: 2,
        ..RunOptions::default()
    };
    let output = run_to_string(&mut universe, &options);

    assert_eq!(output.matches("t = ").count(), 3);
    assert!(output.contains("t = 7200s\n"));
    assert!(output.contains("t = 21600s\n"));
    assert!(output.contains("Planet: earth"));
}

#[test]
fn final_frame_follows_dump() {
    let mut universe = earth_system();
    let options = RunOptions {
        visualize: true,
        ..RunOptions::default()
    };
    let output = run_to_string(&mut universe, &options);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 2 + 16);
    assert_eq!(lines[2], "*".repeat(64));
    assert!(!output.contains('\x1b'));
}

#[test]
fn colored_frame_uses_escapes() {
    let mut universe = earth_system();
    let options = RunOptions {
        visualize: true,
        color: true,
        ..RunOptions::default()
    };
    let output = run_to_string(&mut universe, &options);

    assert!(output.contains("\x1b[33mS\x1b[0m"));
    assert!(output.contains("\x1b[36mE\x1b[0m"));
}
