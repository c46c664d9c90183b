//! Layout constraints owned by the host view hierarchy.
//!
//! Widgets never own a constraint: the hierarchy keeps the `Rc`, widgets
//! keep a [`ConstraintRef`] and only read or write its constant.

use std::cell::Cell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::ViewId;

/// Non-owning reference to a constraint held by a widget.
pub type ConstraintRef = Weak<LayoutConstraint>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayoutAttribute {
    Left,
    Right,
    Top,
    Bottom,
    Leading,
    Trailing,
    Width,
    Height,
    CenterX,
    CenterY,
    NotAnAttribute,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayoutRelation {
    LessThanOrEqual,
    Equal,
    GreaterThanOrEqual,
}

/// Something a constraint can pin: a view, or one of a view controller's
/// layout guides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayoutItem {
    View(ViewId),
    TopLayoutGuide,
    BottomLayoutGuide,
    /// The safe-area guide of the given view.
    SafeArea(ViewId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayoutAnchor {
    pub item: LayoutItem,
    pub attribute: LayoutAttribute,
}

impl LayoutAnchor {
    pub const fn new(item: LayoutItem, attribute: LayoutAttribute) -> Self {
        Self { item, attribute }
    }

    pub const fn view(view: ViewId, attribute: LayoutAttribute) -> Self {
        Self::new(LayoutItem::View(view), attribute)
    }
}

/// `first <relation> second + constant`
pub struct LayoutConstraint {
    first: LayoutAnchor,
    relation: LayoutRelation,
    second: Option<LayoutAnchor>,
    constant: Cell<f32>,
}

impl LayoutConstraint {
    pub fn new(
        first: LayoutAnchor,
        relation: LayoutRelation,
        second: Option<LayoutAnchor>,
        constant: f32,
    ) -> Self {
        Self {
            first,
            relation,
            second,
            constant: Cell::new(constant),
        }
    }

    /// `view.height == constant`
    pub fn height(view: ViewId, constant: f32) -> Rc<Self> {
        Rc::new(Self::new(
            LayoutAnchor::view(view, LayoutAttribute::Height),
            LayoutRelation::Equal,
            None,
            constant,
        ))
    }

    /// `guide.edge == view.bottom + constant`, the usual way a view is pinned
    /// above the bottom layout guide (its top edge) or a safe area (its
    /// bottom edge).
    pub fn bottom_to_guide(view: ViewId, guide: LayoutItem, constant: f32) -> Rc<Self> {
        let edge = match guide {
            LayoutItem::BottomLayoutGuide => LayoutAttribute::Top,
            _ => LayoutAttribute::Bottom,
        };
        Rc::new(Self::new(
            LayoutAnchor::new(guide, edge),
            LayoutRelation::Equal,
            Some(LayoutAnchor::view(view, LayoutAttribute::Bottom)),
            constant,
        ))
    }

    pub fn first(&self) -> LayoutAnchor {
        self.first
    }

    pub fn second(&self) -> Option<LayoutAnchor> {
        self.second
    }

    pub fn constant(&self) -> f32 {
        self.constant.get()
    }

    pub fn set_constant(&self, constant: f32) {
        self.constant.set(constant);
    }
}

impl fmt::Debug for LayoutConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutConstraint")
            .field("first", &self.first)
            .field("relation", &self.relation)
            .field("second", &self.second)
            .field("constant", &self.constant.get())
            .finish()
    }
}
