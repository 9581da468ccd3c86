//! Bordered ASCII projection of body positions
//!
//! The first visited body sits at the centre of the frame. Positions are
//! scaled so the body farthest from the centre still lands inside the
//! interior, and each body is drawn with a single-letter marker taken from
//! its name.

use std::collections::{HashMap, HashSet};

use nbody::{Body, Composition, Universe, Vector2, Visitor};

/// Total frame width including the border
pub const FRAME_WIDTH: usize = 64;
/// Total frame height including the border
pub const FRAME_HEIGHT: usize = 16;

const INNER_WIDTH: usize = FRAME_WIDTH - 2;
const INNER_HEIGHT: usize = FRAME_HEIGHT - 2;
const BORDER: char = '*';
const UNKNOWN_MARKER: char = '?';

/// ANSI foreground codes handed out to bodies in order
const PALETTE: [u8; 6] = [33, 36, 32, 35, 31, 34];

#[derive(Debug, Clone)]
struct Sighting {
    name: String,
    position: Vector2,
}

#[derive(Debug, Clone, Copy)]
struct Cell {
    marker: char,
    color: Option<u8>,
}

/// Collects bodies through [`Visitor`] and renders them as a 64x16 frame
///
/// With colors enabled, each body name is given a palette entry the first
/// time it is seen and keeps it for the lifetime of the visualizer, so a
/// body stays the same color across frames.
///
/// # Examples
///
/// ```
/// use nbody::Universe;
/// use nbody_render::AsciiVisualizer;
///
/// let mut universe = Universe::new();
/// universe.factory().make_solar_system();
///
/// let mut visualizer = AsciiVisualizer::new();
/// universe.accept(&mut visualizer);
/// let frame = visualizer.render();
///
/// let lines: Vec<&str> = frame.lines().collect();
/// assert_eq!(lines.len(), 16);
/// assert!(lines.iter().all(|line| line.chars().count() == 64));
/// assert_eq!(lines[8].chars().nth(32), Some('S'));
/// ```
#[derive(Debug, Default)]
pub struct AsciiVisualizer {
    sightings: Vec<Sighting>,
    colors_enabled: bool,
    colors: HashMap<String, u8>,
}

impl AsciiVisualizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A visualizer that wraps markers in ANSI color escapes
    pub fn with_colors() -> Self {
        Self {
            colors_enabled: true,
            ..Self::default()
        }
    }

    /// Collects every body of `universe` and renders the frame
    pub fn frame(&mut self, universe: &Universe) -> String {
        self.clear();
        universe.accept(self);
        self.render()
    }

    /// Forgets the bodies collected so far; assigned colors are kept
    pub fn clear(&mut self) {
        self.sightings.clear();
    }

    /// Palette code assigned to `name`, if colors are enabled and it was seen
    pub fn color_of(&self, name: &str) -> Option<u8> {
        self.colors.get(name).copied()
    }

    fn record(&mut self, body: &Body) {
        if self.colors_enabled {
            self.assign_color(body.name());
        }
        self.sightings.push(Sighting {
            name: body.name().to_string(),
            position: body.position(),
        });
    }

    /// First palette entry no other body holds; wraps around once all are taken
    fn assign_color(&mut self, name: &str) {
        if self.colors.contains_key(name) {
            return;
        }
        let taken: HashSet<u8> = self.colors.values().copied().collect();
        let color = PALETTE
            .iter()
            .copied()
            .find(|c| !taken.contains(c))
            .unwrap_or(PALETTE[self.colors.len() % PALETTE.len()]);
        self.colors.insert(name.to_string(), color);
    }

    /// Renders the collected bodies; empty when nothing was visited
    pub fn render(&self) -> String {
        let Some(center) = self.sightings.first().map(|s| s.position) else {
            return String::new();
        };

        let max_distance = self
            .sightings
            .iter()
            .map(|s| (s.position - center).norm())
            .fold(0.0, f64::max);
        let max_distance = if max_distance == 0.0 { 1.0 } else { max_distance };

        // One scale for both axes keeps the aspect ratio; the short height
        // is the binding constraint.
        let radius_x = INNER_WIDTH as f64 / 2.0;
        let radius_y = INNER_HEIGHT as f64 / 2.0;
        let scale = (max_distance / radius_x).max(max_distance / radius_y);

        let cx = (INNER_WIDTH / 2) as i64;
        let cy = (INNER_HEIGHT / 2) as i64;

        let mut grid = vec![vec![None::<Cell>; INNER_WIDTH]; INNER_HEIGHT];
        let mut used = HashSet::new();

        for sighting in &self.sightings {
            let relative = sighting.position - center;
            let col = cx + (relative.x() / scale).round() as i64;
            let row = cy - (relative.y() / scale).round() as i64;
            // A body at the full distance straight below the centre rounds
            // to one row past the interior; it is drawn on the edge row.
            let col = col.clamp(0, INNER_WIDTH as i64 - 1) as usize;
            let row = row.clamp(0, INNER_HEIGHT as i64 - 1) as usize;

            let marker = choose_marker(&sighting.name, &mut used);
            let cell = Cell {
                marker,
                color: self.color_of(&sighting.name),
            };

            // Shift right past occupied cells; drop the body if the row is full
            match (col..INNER_WIDTH).find(|&c| grid[row][c].is_none()) {
                Some(free) => grid[row][free] = Some(cell),
                None => log::debug!("no room for '{}' on row {}", sighting.name, row),
            }
        }

        let mut out = String::new();
        let border: String = std::iter::repeat(BORDER).take(FRAME_WIDTH).collect();
        out.push_str(&border);
        out.push('\n');
        for row in &grid {
            out.push(BORDER);
            for cell in row {
                match cell {
                    None => out.push(' '),
                    Some(Cell {
                        marker,
                        color: Some(code),
                    }) => out.push_str(&format!("\x1b[{}m{}\x1b[0m", code, marker)),
                    Some(Cell { marker, color: None }) => out.push(*marker),
                }
            }
            out.push(BORDER);
            out.push('\n');
        }
        out.push_str(&border);
        out.push('\n');
        out
    }
}

/// Uppercased first character of `name` if unused, else the first unused
/// uppercased character later in the name (spaces skipped), else `'?'`
fn choose_marker(name: &str, used: &mut HashSet<char>) -> char {
    let mut chars = name.chars().map(|c| c.to_ascii_uppercase());
    let marker = match chars.next() {
        None => UNKNOWN_MARKER,
        Some(first) if !used.contains(&first) => first,
        Some(_) => chars
            .filter(|c| *c != ' ')
            .find(|c| !used.contains(c))
            .unwrap_or(UNKNOWN_MARKER),
    };
    used.insert(marker);
    marker
}

impl Visitor for AsciiVisualizer {
    fn visit_star(&mut self, star: &Body) {
        self.record(star);
    }

    fn visit_planet(&mut self, planet: &Body) {
        self.record(planet);
    }

    fn visit_asteroid(&mut self, asteroid: &Body) {
        self.record(asteroid);
    }

    fn visit_comet(&mut self, comet: &Body, _composition: Composition) {
        self.record(comet);
    }
}
