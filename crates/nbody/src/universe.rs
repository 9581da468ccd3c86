use serde::{Deserialize, Serialize};

use crate::body::Body;
use crate::factory::BodyFactory;
use crate::integrator::{ExplicitEuler, Integrator};
use crate::vector::Vector2;
use crate::visitor::Visitor;

/// Handle to a body registered with a [`Universe`]
///
/// Ids are never reused by a universe. After [`Universe::swap`] or teardown
/// an old id simply resolves to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BodyId(pub u64);

#[derive(Debug)]
struct Slot {
    id: BodyId,
    body: Body,
}

/// The authoritative store of all simulated bodies
///
/// Bodies are kept in insertion order. The first registered body is the
/// anchor: [`Universe::step_simulation`] never moves it. Dropping the
/// universe releases every body; a fresh `Universe::new()` starts empty.
#[derive(Debug, Default)]
pub struct Universe {
    /// Simulated time in seconds
    time: f64,
    slots: Vec<Slot>,
    next_id: u64,
}

impl Universe {
    /// Creates an empty universe
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::universe::Universe;
    ///
    /// let universe = Universe::new();
    /// assert!(universe.is_empty());
    /// assert_eq!(universe.time(), 0.0);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// A validating factory that registers into this universe
    pub fn factory(&mut self) -> BodyFactory<'_> {
        BodyFactory::new(self)
    }

    /// Registers a body and returns its handle
    pub(crate) fn add_object(&mut self, body: Body) -> BodyId {
        let id = self.issue_id();
        log::debug!(
            "registered {} '{}' as {:?}",
            body.kind().label(),
            body.name(),
            id
        );
        self.slots.push(Slot { id, body });
        id
    }

    /// # Panics
    ///
    /// Panics once the id space is exhausted rather than reusing an id.
    fn issue_id(&mut self) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id = match self.next_id.checked_add(1) {
            Some(next) => next,
            None => panic!("body id space exhausted"),
        };
        id
    }

    /// An empty universe whose next issued id is `next_id`
    #[cfg(test)]
    pub(crate) fn with_next_id(next_id: u64) -> Self {
        let mut universe = Self::default();
        universe.next_id = next_id;
        universe
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Simulated seconds elapsed through [`Universe::step_simulation`]
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.slots.iter().find(|s| s.id == id).map(|s| &s.body)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.slots
            .iter_mut()
            .find(|s| s.id == id)
            .map(|s| &mut s.body)
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.index_of(id).is_some()
    }

    fn index_of(&self, id: BodyId) -> Option<usize> {
        self.slots.iter().position(|s| s.id == id)
    }

    /// The first registered body, if any
    pub fn anchor(&self) -> Option<&Body> {
        self.slots.first().map(|s| &s.body)
    }

    /// Handles in insertion order
    pub fn ids(&self) -> impl Iterator<Item = BodyId> + '_ {
        self.slots.iter().map(|s| s.id)
    }

    /// Bodies in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.slots.iter().map(|s| &s.body)
    }

    /// Mutable bodies in insertion order
    ///
    /// Positions and velocities may be edited freely for setup purposes.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Body> {
        self.slots.iter_mut().map(|s| &mut s.body)
    }

    /// Handles paired with their bodies, in insertion order
    pub fn entries(&self) -> impl Iterator<Item = (BodyId, &Body)> {
        self.slots.iter().map(|s| (s.id, &s.body))
    }

    pub fn total_mass(&self) -> f64 {
        self.iter().map(|b| b.mass()).sum()
    }

    /// Deep copies of every body, in the same order as the live sequence
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::universe::Universe;
    ///
    /// let mut universe = Universe::new();
    /// universe.factory().make_solar_system();
    ///
    /// let snapshot = universe.snapshot();
    /// assert_eq!(snapshot.len(), universe.len());
    /// assert!(snapshot.iter().zip(universe.iter()).all(|(a, b)| a == b));
    /// ```
    pub fn snapshot(&self) -> Vec<Body> {
        self.iter().cloned().collect()
    }

    /// Replaces the live bodies with `bodies`, releasing the previous ones
    ///
    /// Every new body receives a fresh id; ids issued before the swap no
    /// longer resolve.
    pub fn swap(&mut self, bodies: Vec<Body>) {
        let slots = bodies
            .into_iter()
            .map(|body| Slot {
                id: self.issue_id(),
                body,
            })
            .collect();
        let released = std::mem::replace(&mut self.slots, slots);
        log::debug!(
            "swapped in {} bodies, released {}",
            self.slots.len(),
            released.len()
        );
    }

    /// Net force on the body `id` from every other registered body
    ///
    /// Other bodies are excluded by identity, so two bodies with identical
    /// state still attract each other (with zero force when they coincide).
    /// Returns `None` for an unknown id.
    pub fn sum_force(&self, id: BodyId) -> Option<Vector2> {
        self.index_of(id).map(|idx| self.sum_force_at(idx))
    }

    pub(crate) fn sum_force_at(&self, idx: usize) -> Vector2 {
        let body = &self.slots[idx].body;
        self.slots
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != idx)
            .map(|(_, other)| body.force_from(&other.body))
            .sum()
    }

    pub(crate) fn body_at_mut(&mut self, idx: usize) -> &mut Body {
        &mut self.slots[idx].body
    }

    pub(crate) fn advance_time(&mut self, dt: f64) {
        self.time += dt;
    }

    /// Advances every body except the anchor by `dt` seconds
    ///
    /// See [`ExplicitEuler`] for the exact update order.
    pub fn step_simulation(&mut self, dt: f64) {
        ExplicitEuler.step(self, dt);
    }

    /// Takes `n_steps` steps of `dt` seconds and returns the final time
    pub fn integrate(&mut self, dt: f64, n_steps: usize) -> f64 {
        ExplicitEuler.integrate(self, dt, n_steps)
    }

    /// Visits every body in insertion order
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        self.iter().for_each(|body| body.accept(visitor));
    }
}

impl Drop for Universe {
    fn drop(&mut self) {
        if !self.slots.is_empty() {
            log::debug!("universe torn down, releasing {} bodies", self.slots.len());
        }
    }
}

impl<'a> IntoIterator for &'a Universe {
    type Item = &'a Body;
    type IntoIter = Box<dyn Iterator<Item = &'a Body> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl<'a> IntoIterator for &'a mut Universe {
    type Item = &'a mut Body;
    type IntoIter = Box<dyn Iterator<Item = &'a mut Body> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter_mut())
    }
}
