use crate::factory::BodyFactory;
use crate::integrator::{ExplicitEuler, Integrator};
use crate::solar_system;
use crate::universe::Universe;
use crate::vector::Vector2;

fn assert_vector_near(actual: Vector2, expected: Vector2, tolerance: f64) {
    let miss = (expected - actual).norm();
    assert!(
        miss <= tolerance,
        "expected {expected}, got {actual} (off by {miss} m)"
    );
}

#[test]
fn test_free_body_trajectory() {
    let mut universe = Universe::new();
    let mut factory = BodyFactory::new(&mut universe);
    factory.make_star("sun", 1e30).unwrap();
    let obj = factory
        .make_planet("obj", 1e22, Vector2::new(1e10, 1e10), Vector2::new(1e6, 0.0))
        .unwrap();

    let expected = [
        Vector2::new(1e10, 1e10),
        Vector2::new(1.0001e10, 1e10),
        Vector2::new(10001999999.764029, 9999999999.7640285),
        Vector2::new(10002999999.292097, 9999999999.2921219),
        Vector2::new(10003999998.584219, 9999999998.5843143),
        Vector2::new(10004999997.640404, 9999999997.6406402),
        Vector2::new(10005999996.460665, 9999999996.4611377),
        Vector2::new(10006999995.045013, 9999999995.0458393),
        Vector2::new(10007999993.393461, 9999999993.394783),
        Vector2::new(10008999991.50602, 9999999991.5080013),
    ];

    for position in expected {
        assert_vector_near(universe.get(obj).unwrap().position(), position, 1e-3);
        universe.step_simulation(1.0);
    }
}

#[test]
fn test_position_uses_pre_step_velocity() {
    let mut universe = Universe::new();
    let mut factory = universe.factory();
    factory.make_star("sun", 2e30).unwrap();
    let p = factory
        .make_planet("p", 1e24, Vector2::new(1e11, 0.0), Vector2::new(0.0, 0.0))
        .unwrap();

    universe.step_simulation(1_000.0);

    // Starting at rest, explicit Euler leaves the position unchanged on the
    // first step while the velocity picks up the inward acceleration.
    let body = universe.get(p).unwrap();
    assert_eq!(body.position(), Vector2::new(1e11, 0.0));
    assert!(body.velocity().x() < 0.0);
}

#[test]
fn test_integrate_returns_final_time() {
    let mut universe = Universe::new();
    universe.factory().make_solar_system();

    let t = ExplicitEuler.integrate(&mut universe, 3_600.0, 24);

    assert_eq!(t, 86_400.0);
    assert_eq!(universe.time(), 86_400.0);
    assert_eq!(universe.integrate(3_600.0, 24), 172_800.0);
}

#[test]
fn test_empty_and_single_body_universes() {
    let mut universe = Universe::new();
    universe.step_simulation(10.0);
    assert!(universe.is_empty());

    universe.factory().make_sun();
    universe.step_simulation(10.0);
    assert_eq!(universe.anchor().unwrap().position(), Vector2::zeros());
    assert_eq!(universe.time(), 20.0);
}

#[test]
fn test_earth_year_stays_near_one_au() {
    let mut universe = Universe::new();
    let mut factory = universe.factory();
    factory.make_sun();
    let earth = factory.make_earth();

    let r0 = solar_system::EARTH.position().norm();
    let hours_per_year = 31_557_600 / 3_600;
    universe.integrate(3_600.0, hours_per_year);

    let r = universe.get(earth).unwrap().position().norm();
    assert!(((r - r0) / r0).abs() < 0.01, "drifted to {r} m");
}
