//! Pure math/data for drawing & geometry in Autotext
//!
//! This crate contains geometry primitives, color definitions and the
//! draw primitives emitted by the text view widgets.

mod color;
mod draw;
mod geometry;

pub use color::*;
pub use draw::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::draw::{DrawPrimitive, DrawScope};
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
}
