//! Renderers for [`nbody`] universes
//!
//! Both renderers are [`nbody::Visitor`] implementations, so they work on a
//! whole universe through [`nbody::Universe::accept`] or on single bodies
//! through [`nbody::Body::accept`].

pub mod print;
pub mod visualizer;


pub use print::{dump, PrintVisitor};
pub use visualizer::{AsciiVisualizer, FRAME_HEIGHT, FRAME_WIDTH};
