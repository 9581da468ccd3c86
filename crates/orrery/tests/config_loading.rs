//! Loading body configurations from JSON and comparing against the
//! built-in reference systems.

use std::path::PathBuf;

use nbody::{BodyKind, Composition, NbodyError, Universe};
use nbody_render::dump;
use orrery::{load_file, load_str};

fn data_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn nbody_error(err: &anyhow::Error) -> Option<&NbodyError> {
    err.chain().find_map(|cause| cause.downcast_ref::<NbodyError>())
}

#[test]
fn solar_system_file_matches_factory() {
    let mut loaded = Universe::new();
    let count = load_file(data_file("solar_system.json"), &mut loaded).unwrap();

    let mut built = Universe::new();
    built.factory().make_solar_system();

    assert_eq!(count, 9);
    assert_eq!(dump(&loaded), dump(&built));
    assert_eq!(loaded.snapshot(), built.snapshot());
}

#[test]
fn extended_solar_system_file_matches_factory() {
    let mut loaded = Universe::new();
    let count = load_file(data_file("extended_solar_system.json"), &mut loaded).unwrap();

    let mut built = Universe::new();
    built.factory().make_extended_solar_system();

    assert_eq!(count, 16);
    assert_eq!(dump(&loaded), dump(&built));

    let kinds: Vec<BodyKind> = loaded.iter().map(|b| b.kind()).collect();
    let count_of = |kind: BodyKind| kinds.iter().filter(|k| **k == kind).count();
    assert_eq!(count_of(BodyKind::Star), 1);
    assert_eq!(count_of(BodyKind::Planet), 8);
    assert_eq!(count_of(BodyKind::Asteroid), 5);
    assert_eq!(count_of(BodyKind::Comet(Composition::Ice)), 1);
    assert_eq!(count_of(BodyKind::Comet(Composition::Dust)), 1);
}

#[test]
fn loaded_masses_are_bit_exact() {
    let mut loaded = Universe::new();
    load_file(data_file("extended_solar_system.json"), &mut loaded).unwrap();

    let mut built = Universe::new();
    built.factory().make_extended_solar_system();

    for (a, b) in loaded.iter().zip(built.iter()) {
        assert_eq!(a.mass().to_bits(), b.mass().to_bits(), "{}", a.name());
        assert_eq!(a.position(), b.position(), "{}", a.name());
        assert_eq!(a.velocity(), b.velocity(), "{}", a.name());
    }
    let sun = loaded.anchor().unwrap();
    assert_eq!(sun.mass().to_bits(), 1.98892e30_f64.to_bits());
}

#[test]
fn loaded_systems_evolve_identically() {
    let mut loaded = Universe::new();
    load_file(data_file("solar_system.json"), &mut loaded).unwrap();
    let mut built = Universe::new();
    built.factory().make_solar_system();

    loaded.integrate(3_600.0, 48);
    built.integrate(3_600.0, 48);

    assert_eq!(dump(&loaded), dump(&built));
}

#[test]
fn mass_routes_between_planet_and_asteroid() {
    let json = r#"[
        { "name": "sun", "mass": 2e30 },
        { "name": "big", "mass": 1e21, "pos": [1e11, 0], "vel": [0, 3e4] },
        { "name": "small", "mass": 9.99e20, "pos": [2e11, 0], "vel": [0, 2e4] },
        { "name": "icy", "mass": 1e25, "pos": [3e11, 0], "vel": [0, 1e4], "comp": "rock" }
    ]"#;
    let mut universe = Universe::new();
    assert_eq!(load_str(json, &mut universe).unwrap(), 4);

    let kinds: Vec<BodyKind> = universe.iter().map(|b| b.kind()).collect();
    assert_eq!(
        kinds,
        [
            BodyKind::Star,
            BodyKind::Planet,
            BodyKind::Asteroid,
            BodyKind::Comet(Composition::Rock),
        ]
    );
}

#[test]
fn missing_file_is_reported() {
    let mut universe = Universe::new();
    let err = load_file(data_file("no_such_system.json"), &mut universe).unwrap_err();

    assert!(err.to_string().starts_with("Parser not able to open file: "));
    assert!(err.to_string().ends_with("no_such_system.json"));
    assert!(universe.is_empty());
}

#[test]
fn malformed_document_is_rejected() {
    let mut universe = Universe::new();

    assert!(load_str("{ \"name\": \"sun\" }", &mut universe).is_err());
    assert!(load_str("[ { \"name\": \"sun\" } ]", &mut universe).is_err());
    assert!(universe.is_empty());
}

#[test]
fn position_without_velocity_is_rejected() {
    let mut universe = Universe::new();
    let err = load_str(r#"[{ "name": "drift", "mass": 1e24, "pos": [1, 2] }]"#, &mut universe)
        .unwrap_err();

    let message = format!("{:#}", err);
    assert!(message.contains("drift"));
    assert!(message.contains("'pos' given without 'vel'"));
    assert!(universe.is_empty());
}

#[test]
fn factory_errors_keep_their_kind() {
    let mut universe = Universe::new();
    let err = load_str(
        r#"[
            { "name": "sun", "mass": 2e30 },
            { "name": "dim", "mass": 5e29 }
        ]"#,
        &mut universe,
    )
    .unwrap_err();

    assert!(matches!(
        nbody_error(&err),
        Some(NbodyError::InvalidArgument(message)) if message.starts_with("Mass must be greater than")
    ));
    // Entries before the failing one stay registered
    assert_eq!(universe.len(), 1);
}

#[test]
fn invalid_composition_is_rejected() {
    let mut universe = Universe::new();
    let err = load_str(
        r#"[{ "name": "odd", "mass": 1e14, "pos": [1, 0], "vel": [0, 1], "comp": "plasma" }]"#,
        &mut universe,
    )
    .unwrap_err();

    assert_eq!(
        nbody_error(&err).map(|e| e.message()),
        Some("Invalid composition: plasma")
    );
    assert!(universe.is_empty());
}
