use super::*;

use autotext_foundation::{NotificationCenter, NotificationSource};
use autotext_graphics::{DrawPrimitive, DrawScopeDefault, Size};

fn host() -> Rc<TextView> {
    let notifications: Rc<dyn NotificationSource> = Rc::new(NotificationCenter::new());
    Rc::new(TextView::new(notifications).with_frame(Rect::new(0.0, 0.0, 200.0, 40.0)))
}

#[test]
fn defaults() {
    let view = PlaceholderTextView::new(host());
    assert_eq!(view.placeholder(), None);
    assert_eq!(view.placeholder_color(), Color::LIGHT_GRAY);
    let insets = view.placeholder_insets();
    assert_eq!((insets.top, insets.left, insets.bottom, insets.right), (8.0, 4.0, 0.0, 0.0));
}

#[test]
fn should_draw_requires_placeholder_and_empty_text() {
    let view = PlaceholderTextView::new(host());

    // no placeholder, empty text
    assert!(!view.should_draw_placeholder());

    view.set_placeholder(Some(""));
    assert!(!view.should_draw_placeholder());

    view.set_placeholder(Some("Write a message"));
    assert!(view.should_draw_placeholder());

    view.text_view().set_text("hi");
    assert!(!view.should_draw_placeholder());

    view.set_placeholder(None);
    assert!(!view.should_draw_placeholder());

    view.text_view().set_text("");
    assert!(!view.should_draw_placeholder());
}

#[test]
fn placeholder_rect_is_inset_on_every_edge() {
    let view = PlaceholderTextView::new(host());
    view.set_placeholder_insets(EdgeInsets::from_components(4.0, 8.0, 2.0, 6.0));
    let rect = view.placeholder_rect(Rect::new(10.0, 20.0, 100.0, 50.0));
    assert_eq!(rect, Rect::new(14.0, 28.0, 90.0, 40.0));
}

#[test]
fn text_changes_mark_host_for_display() {
    let view = PlaceholderTextView::new(host());
    let text_view = view.text_view();
    text_view.take_needs_display();

    text_view.set_text("a");
    assert!(text_view.take_needs_display());
    text_view.set_text("");
    assert!(text_view.take_needs_display());

    view.set_placeholder_color(Color::BLACK);
    assert!(text_view.take_needs_display());
}

#[test]
fn draw_emits_placeholder_text_only_while_empty() {
    let view = PlaceholderTextView::with_options(
        host(),
        PlaceholderOptions {
            placeholder: Some("Search".to_owned()),
            ..PlaceholderOptions::default()
        },
    );

    let mut scope = DrawScopeDefault::new(Size::new(200.0, 40.0));
    view.draw(&mut scope);
    assert_eq!(
        scope.primitives(),
        &[DrawPrimitive::Text {
            rect: Rect::new(4.0, 8.0, 196.0, 32.0),
            text: "Search".to_owned(),
            color: Color::LIGHT_GRAY,
        }]
    );

    view.text_view().set_text("query");
    let mut scope = DrawScopeDefault::new(Size::new(200.0, 40.0));
    view.draw(&mut scope);
    assert!(scope.primitives().is_empty());
}
