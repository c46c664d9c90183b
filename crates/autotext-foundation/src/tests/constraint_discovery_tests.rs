use super::*;

use autotext_core::LayoutRelation;

fn pin(first: LayoutAnchor, second: LayoutAnchor) -> Rc<LayoutConstraint> {
    Rc::new(LayoutConstraint::new(first, LayoutRelation::Equal, Some(second), 0.0))
}

#[test]
fn finds_guide_top_to_view_bottom() {
    let view = ViewId::next();
    let other = ViewId::next();
    let candidates = vec![
        LayoutConstraint::height(view, 40.0),
        LayoutConstraint::bottom_to_guide(other, LayoutItem::BottomLayoutGuide, 0.0),
        LayoutConstraint::bottom_to_guide(view, LayoutItem::BottomLayoutGuide, 0.0),
    ];

    let found = find_bottom_layout_guide_constraint(view, &candidates).expect("found");
    assert!(Rc::ptr_eq(found, &candidates[2]));
}

#[test]
fn matches_view_bottom_first_and_safe_area_second() {
    let view = ViewId::next();
    let parent = ViewId::next();
    let constraint = pin(
        LayoutAnchor::view(view, LayoutAttribute::Bottom),
        LayoutAnchor::new(LayoutItem::SafeArea(parent), LayoutAttribute::Bottom),
    );
    assert!(is_bottom_layout_guide_constraint(view, &constraint));
}

#[test]
fn ignores_view_to_view_and_top_guide_constraints() {
    let view = ViewId::next();
    let sibling = ViewId::next();
    let candidates = vec![
        pin(
            LayoutAnchor::view(view, LayoutAttribute::Bottom),
            LayoutAnchor::view(sibling, LayoutAttribute::Top),
        ),
        pin(
            LayoutAnchor::view(view, LayoutAttribute::Bottom),
            LayoutAnchor::new(LayoutItem::TopLayoutGuide, LayoutAttribute::Bottom),
        ),
        pin(
            LayoutAnchor::view(view, LayoutAttribute::Top),
            LayoutAnchor::new(LayoutItem::BottomLayoutGuide, LayoutAttribute::Top),
        ),
    ];
    assert!(find_bottom_layout_guide_constraint(view, &candidates).is_none());
}

#[test]
fn first_match_wins() {
    let view = ViewId::next();
    let candidates = vec![
        LayoutConstraint::bottom_to_guide(view, LayoutItem::BottomLayoutGuide, 4.0),
        LayoutConstraint::bottom_to_guide(view, LayoutItem::SafeArea(ViewId::next()), 8.0),
    ];
    let found = find_bottom_layout_guide_constraint(view, candidates.iter()).expect("found");
    assert_eq!(found.constant(), 4.0);
}
