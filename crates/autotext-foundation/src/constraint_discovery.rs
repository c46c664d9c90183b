//! Locating the constraint that pins a view's bottom edge to the bottom
//! layout guide (or a safe-area guide).
//!
//! The search runs over an explicit candidate list, normally the
//! constraints installed on the view's parent, so it needs no live view
//! hierarchy.

use std::rc::Rc;

use autotext_core::{LayoutAnchor, LayoutAttribute, LayoutConstraint, LayoutItem, ViewId};

fn is_view_bottom(anchor: LayoutAnchor, view: ViewId) -> bool {
    anchor.item == LayoutItem::View(view) && anchor.attribute == LayoutAttribute::Bottom
}

fn is_bottom_guide_edge(anchor: LayoutAnchor) -> bool {
    match anchor.item {
        LayoutItem::BottomLayoutGuide => matches!(
            anchor.attribute,
            LayoutAttribute::Top | LayoutAttribute::Bottom
        ),
        LayoutItem::SafeArea(_) => anchor.attribute == LayoutAttribute::Bottom,
        LayoutItem::View(_) | LayoutItem::TopLayoutGuide => false,
    }
}

/// True if `constraint` relates `view`'s bottom edge to a bottom guide edge,
/// in either order.
pub fn is_bottom_layout_guide_constraint(view: ViewId, constraint: &LayoutConstraint) -> bool {
    let Some(second) = constraint.second() else {
        return false;
    };
    let first = constraint.first();
    (is_view_bottom(first, view) && is_bottom_guide_edge(second))
        || (is_view_bottom(second, view) && is_bottom_guide_edge(first))
}

/// Returns the first candidate pinning `view` to the bottom guide.
pub fn find_bottom_layout_guide_constraint<'a, I>(
    view: ViewId,
    candidates: I,
) -> Option<&'a Rc<LayoutConstraint>>
where
    I: IntoIterator<Item = &'a Rc<LayoutConstraint>>,
{
    candidates
        .into_iter()
        .find(|constraint| is_bottom_layout_guide_constraint(view, constraint))
}

#[cfg(test)]
#[path = "tests/constraint_discovery_tests.rs"]
mod tests;
