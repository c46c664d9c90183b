//! Geometric primitives: Point, Size, Rect, EdgeInsets

use std::ops::AddAssign;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            width: self.width,
            height: self.height,
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && y >= self.y && x <= self.max_x() && y <= self.max_y()
    }

    /// Shrinks the rect by `insets` on each edge.
    ///
    /// Width and height never go below zero, so oversized insets collapse the
    /// rect instead of flipping it.
    pub fn inset_by(&self, insets: EdgeInsets) -> Self {
        Self {
            x: self.x + insets.left,
            y: self.y + insets.top,
            width: (self.width - insets.horizontal_sum()).max(0.0),
            height: (self.height - insets.vertical_sum()).max(0.0),
        }
    }

    /// Returns the overlapping region of two rects, or `None` when they
    /// do not overlap with a positive area.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.max_x().min(other.max_x());
        let bottom = self.max_y().min(other.max_y());
        if right > left && bottom > top {
            Some(Rect::new(left, top, right - left, bottom - top))
        } else {
            None
        }
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.intersection(other).is_some()
    }
}

/// Padding values for each edge of a rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    pub fn uniform(all: f32) -> Self {
        Self {
            left: all,
            top: all,
            right: all,
            bottom: all,
        }
    }

    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            left: horizontal,
            right: horizontal,
            top: vertical,
            bottom: vertical,
        }
    }

    pub const fn from_components(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.left == 0.0 && self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0
    }

    pub fn horizontal_sum(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical_sum(&self) -> f32 {
        self.top + self.bottom
    }
}

impl AddAssign for EdgeInsets {
    fn add_assign(&mut self, rhs: Self) {
        self.left += rhs.left;
        self.top += rhs.top;
        self.right += rhs.right;
        self.bottom += rhs.bottom;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_by_shrinks_each_edge() {
        let rect = Rect::new(0.0, 0.0, 100.0, 40.0);
        let insets = EdgeInsets::from_components(4.0, 8.0, 0.0, 0.0);
        assert_eq!(rect.inset_by(insets), Rect::new(4.0, 8.0, 96.0, 32.0));
    }

    #[test]
    fn inset_by_collapses_instead_of_flipping() {
        let rect = Rect::new(10.0, 10.0, 6.0, 6.0);
        let inset = rect.inset_by(EdgeInsets::uniform(5.0));
        assert_eq!(inset.width, 0.0);
        assert_eq!(inset.height, 0.0);
        assert!(inset.is_empty());
    }

    #[test]
    fn intersection_of_overlapping_rects() {
        let view = Rect::new(0.0, 400.0, 320.0, 100.0);
        let keyboard = Rect::new(0.0, 460.0, 320.0, 216.0);
        assert_eq!(
            view.intersection(&keyboard),
            Some(Rect::new(0.0, 460.0, 320.0, 40.0))
        );
    }

    #[test]
    fn touching_rects_do_not_intersect() {
        let top = Rect::new(0.0, 0.0, 10.0, 10.0);
        let bottom = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!top.intersects(&bottom));
    }

    #[test]
    fn add_assign_sums_edges() {
        let mut insets = EdgeInsets::symmetric(1.0, 2.0);
        insets += EdgeInsets::uniform(1.0);
        assert_eq!(insets, EdgeInsets::from_components(2.0, 3.0, 2.0, 3.0));
    }
}
