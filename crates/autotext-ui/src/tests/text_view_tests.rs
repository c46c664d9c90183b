use super::*;

use std::cell::Cell;

use autotext_foundation::{NotificationCenter, NotificationName, Subscription};

fn center() -> Rc<dyn NotificationSource> {
    Rc::new(NotificationCenter::new())
}

#[test]
fn set_text_posts_only_on_change() {
    let notifications = center();
    let view = TextView::new(Rc::clone(&notifications));
    let posts = Rc::new(Cell::new(0));
    let counter = Rc::clone(&posts);
    let _subscription = Subscription::new(
        &notifications,
        NotificationName::TextDidChange,
        Some(view.id()),
        move |_| counter.set(counter.get() + 1),
    );

    view.set_text("hello");
    view.set_text("hello");
    view.insert_text(" world");
    view.edit(|_| {});

    assert_eq!(posts.get(), 2);
    assert_eq!(view.text(), "hello world");
}

#[test]
fn notifications_from_other_views_are_filtered() {
    let notifications = center();
    let first = TextView::new(Rc::clone(&notifications));
    let second = TextView::new(Rc::clone(&notifications));
    let posts = Rc::new(Cell::new(0));
    let counter = Rc::clone(&posts);
    let _subscription = Subscription::new(
        &notifications,
        NotificationName::TextDidChange,
        Some(first.id()),
        move |_| counter.set(counter.get() + 1),
    );

    second.set_text("ignored");
    assert_eq!(posts.get(), 0);
    first.set_text("seen");
    assert_eq!(posts.get(), 1);
}

#[test]
fn content_height_wraps_at_frame_width_and_adds_insets() {
    let view = TextView::new(center())
        .with_frame(Rect::new(0.0, 0.0, 80.0, 36.0))
        .with_measurer(MonospacedTextMeasurer::new(8.0, 20.0));

    // Empty text still occupies one line.
    assert_eq!(view.content_height(), 36.0);

    // 10 characters per line at width 80.
    view.set_text("x".repeat(25));
    assert_eq!(view.content_height(), 3.0 * 20.0 + 16.0);

    view.set_text_container_inset(EdgeInsets::ZERO);
    assert_eq!(view.content_height(), 60.0);
}

#[test]
fn superview_constraints_are_held_weakly() {
    let view = TextView::new(center());
    let kept = LayoutConstraint::height(view.id(), 40.0);
    let dropped = LayoutConstraint::height(view.id(), 10.0);
    view.set_superview_constraints([&kept, &dropped]);
    drop(dropped);

    let alive = view.superview_constraints();
    assert_eq!(alive.len(), 1);
    assert!(Rc::ptr_eq(&alive[0], &kept));
}

#[test]
fn display_and_layout_requests_are_recorded() {
    let view = TextView::new(center());
    assert!(!view.needs_display());
    view.set_needs_display();
    assert!(view.take_needs_display());
    assert!(!view.needs_display());

    view.set_needs_layout();
    view.set_needs_layout();
    assert_eq!(view.layout_requests(), 2);
}
