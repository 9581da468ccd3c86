//! Per-kind processing of bodies without the core knowing the consumer
//!
//! Renderers implement [`Visitor`]; [`crate::body::Body::accept`] routes each
//! body to the method for its kind.

use crate::body::{Body, Composition};

/// One callback per body kind
///
/// # Examples
///
/// ```
/// use nbody::body::{Body, Composition};
/// use nbody::universe::Universe;
/// use nbody::visitor::Visitor;
///
/// #[derive(Default)]
/// struct KindCounter {
///     stars: usize,
///     others: usize,
/// }
///
/// impl Visitor for KindCounter {
///     fn visit_star(&mut self, _star: &Body) {
///         self.stars += 1;
///     }
///     fn visit_planet(&mut self, _planet: &Body) {
///         self.others += 1;
///     }
///     fn visit_asteroid(&mut self, _asteroid: &Body) {
///         self.others += 1;
///     }
///     fn visit_comet(&mut self, _comet: &Body, _composition: Composition) {
///         self.others += 1;
///     }
/// }
///
/// let mut universe = Universe::new();
/// universe.factory().make_solar_system();
///
/// let mut counter = KindCounter::default();
/// universe.accept(&mut counter);
/// assert_eq!((counter.stars, counter.others), (1, 8));
/// ```
pub trait Visitor {
    fn visit_star(&mut self, star: &Body);

    fn visit_planet(&mut self, planet: &Body);

    fn visit_asteroid(&mut self, asteroid: &Body);

    fn visit_comet(&mut self, comet: &Body, composition: Composition);
}
