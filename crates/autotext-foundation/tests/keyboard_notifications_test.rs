//! Keyboard notifications flowing through a shared center to observers that
//! find and adjust their own bottom constraint.

use std::cell::RefCell;
use std::rc::Rc;

use autotext_core::{LayoutConstraint, LayoutItem, ViewId};
use autotext_foundation::{
    find_bottom_layout_guide_constraint, keyboard_overlap, KeyboardInfo, Notification,
    NotificationCenter, NotificationName, NotificationSource, Subscription,
};
use autotext_graphics::Rect;

#[test]
fn observers_adjust_their_discovered_constraints() {
    let center = Rc::new(NotificationCenter::new());
    let source: Rc<dyn NotificationSource> = center.clone();

    let view = ViewId::next();
    let view_frame = Rect::new(0.0, 0.0, 320.0, 480.0);
    let candidates = vec![
        LayoutConstraint::height(view, 44.0),
        LayoutConstraint::bottom_to_guide(ViewId::next(), LayoutItem::BottomLayoutGuide, 0.0),
        LayoutConstraint::bottom_to_guide(view, LayoutItem::BottomLayoutGuide, 0.0),
    ];
    let bottom = Rc::clone(
        find_bottom_layout_guide_constraint(view, &candidates).expect("bottom constraint"),
    );
    assert!(Rc::ptr_eq(&bottom, &candidates[2]));

    let insets = Rc::new(RefCell::new(Vec::new()));
    let _show = {
        let bottom = Rc::clone(&bottom);
        let insets = Rc::clone(&insets);
        Subscription::new(&source, NotificationName::KeyboardWillShow, None, move |n| {
            if let Some(info) = n.keyboard_info() {
                let overlap = keyboard_overlap(view_frame, info.frame_end);
                bottom.set_constant(overlap);
                insets.borrow_mut().push(overlap);
            }
        })
    };
    let _hide = {
        let bottom = Rc::clone(&bottom);
        let insets = Rc::clone(&insets);
        Subscription::new(&source, NotificationName::KeyboardWillHide, None, move |_| {
            bottom.set_constant(0.0);
            insets.borrow_mut().push(0.0);
        })
    };

    let keyboard = KeyboardInfo::new(
        Rect::new(0.0, 480.0, 320.0, 216.0),
        Rect::new(0.0, 264.0, 320.0, 216.0),
    );
    center.post(&Notification::KeyboardWillShow(keyboard));
    assert_eq!(bottom.constant(), 216.0);
    center.post(&Notification::KeyboardWillHide(keyboard));
    assert_eq!(bottom.constant(), 0.0);

    // Text changes are not keyboard events.
    center.post(&Notification::TextDidChange { sender: view });
    assert_eq!(insets.borrow().as_slice(), &[216.0, 0.0]);
}
