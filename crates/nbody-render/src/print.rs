//! One-line-per-body text dump

use nbody::format::general;
use nbody::{Body, Composition, Universe, Visitor};

/// Formats each visited body as a line of text
///
/// ```text
/// Star: sun 1.98892e+30kg
/// Planet: earth 5.9742e+24kg [1.49598e+11 0][0 29788.5]
/// Comet: halley's 2.2e+14kg [8.766e+10 0][0 54550] ice
/// ```
///
/// # Examples
///
/// ```
/// use nbody::Universe;
/// use nbody_render::PrintVisitor;
///
/// let mut universe = Universe::new();
/// let mut factory = universe.factory();
/// factory.make_sun();
/// factory.make_mercury();
///
/// let mut printer = PrintVisitor::new();
/// universe.accept(&mut printer);
///
/// assert_eq!(
///     printer.output(),
///     "Star: sun 1.98892e+30kg\nPlanet: mercury 3.3011e+23kg [6e+10 0][0 47360]\n"
/// );
/// ```
#[derive(Debug, Default)]
pub struct PrintVisitor {
    output: String,
}

impl PrintVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything printed so far
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }

    fn moving_body(body: &Body) -> String {
        format!(
            "{}: {} {}kg {}{}",
            body.kind().label(),
            body.name(),
            general(body.mass()),
            body.position(),
            body.velocity()
        )
    }

    fn push_line(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }
}

impl Visitor for PrintVisitor {
    fn visit_star(&mut self, star: &Body) {
        let line = format!(
            "{}: {} {}kg",
            star.kind().label(),
            star.name(),
            general(star.mass())
        );
        self.push_line(&line);
    }

    fn visit_planet(&mut self, planet: &Body) {
        self.push_line(&Self::moving_body(planet));
    }

    fn visit_asteroid(&mut self, asteroid: &Body) {
        self.push_line(&Self::moving_body(asteroid));
    }

    fn visit_comet(&mut self, comet: &Body, composition: Composition) {
        let line = format!("{} {}", Self::moving_body(comet), composition);
        self.push_line(&line);
    }
}

/// Text dump of every body in `universe`, in insertion order
pub fn dump(universe: &Universe) -> String {
    let mut printer = PrintVisitor::new();
    universe.accept(&mut printer);
    printer.into_output()
}
