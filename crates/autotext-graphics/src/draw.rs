//! Draw primitives recorded by widgets.

use crate::color::Color;
use crate::geometry::{Rect, Size};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawPrimitive {
    Rect {
        rect: Rect,
        color: Color,
    },
    Text {
        rect: Rect,
        text: String,
        color: Color,
    },
}

pub trait DrawScope {
    fn size(&self) -> Size;
    fn draw_rect_at(&mut self, rect: Rect, color: Color);
    /// Draws `text` laid out inside `rect`.
    fn draw_text_in(&mut self, rect: Rect, text: &str, color: Color);
    fn into_primitives(self) -> Vec<DrawPrimitive>;
}

#[derive(Default)]
pub struct DrawScopeDefault {
    size: Size,
    primitives: Vec<DrawPrimitive>,
}

impl DrawScopeDefault {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            primitives: Vec::new(),
        }
    }

    pub fn primitives(&self) -> &[DrawPrimitive] {
        &self.primitives
    }
}

impl DrawScope for DrawScopeDefault {
    fn size(&self) -> Size {
        self.size
    }

    fn draw_rect_at(&mut self, rect: Rect, color: Color) {
        self.primitives.push(DrawPrimitive::Rect { rect, color });
    }

    fn draw_text_in(&mut self, rect: Rect, text: &str, color: Color) {
        self.primitives.push(DrawPrimitive::Text {
            rect,
            text: text.to_owned(),
            color,
        });
    }

    fn into_primitives(self) -> Vec<DrawPrimitive> {
        self.primitives
    }
}
