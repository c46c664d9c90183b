//! Placeholder drawn over an empty text view.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use autotext_foundation::{NotificationName, Subscription};
use autotext_graphics::{Color, DrawScope, EdgeInsets, Rect};

use crate::TextView;

/// Default placeholder insets: 8 from the top, 4 from the left.
pub const DEFAULT_PLACEHOLDER_INSETS: EdgeInsets = EdgeInsets::from_components(4.0, 8.0, 0.0, 0.0);

/// Placeholder configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceholderOptions {
    /// Text shown while the host is empty. `None` or empty disables it.
    pub placeholder: Option<String>,
    pub color: Color,
    pub insets: EdgeInsets,
}

impl Default for PlaceholderOptions {
    fn default() -> Self {
        Self {
            placeholder: None,
            color: Color::LIGHT_GRAY,
            insets: DEFAULT_PLACEHOLDER_INSETS,
        }
    }
}

/// Adds a placeholder to a host [`TextView`].
///
/// The host is marked for display whenever its text or the placeholder
/// configuration changes, so the placeholder appears and disappears with
/// the first and last character.
pub struct PlaceholderTextView {
    host: Rc<TextView>,
    options: RefCell<PlaceholderOptions>,
    _text_changes: Subscription,
}

impl PlaceholderTextView {
    pub fn new(host: Rc<TextView>) -> Self {
        Self::with_options(host, PlaceholderOptions::default())
    }

    pub fn with_options(host: Rc<TextView>, options: PlaceholderOptions) -> Self {
        let weak: Weak<TextView> = Rc::downgrade(&host);
        let text_changes = Subscription::new(
            host.notifications(),
            NotificationName::TextDidChange,
            Some(host.id()),
            move |_| {
                if let Some(host) = weak.upgrade() {
                    host.set_needs_display();
                }
            },
        );
        Self {
            host,
            options: RefCell::new(options),
            _text_changes: text_changes,
        }
    }

    pub fn text_view(&self) -> &Rc<TextView> {
        &self.host
    }

    pub fn options(&self) -> PlaceholderOptions {
        self.options.borrow().clone()
    }

    pub fn placeholder(&self) -> Option<String> {
        self.options.borrow().placeholder.clone()
    }

    pub fn set_placeholder(&self, placeholder: Option<&str>) {
        self.options.borrow_mut().placeholder = placeholder.map(str::to_owned);
        self.host.set_needs_display();
    }

    pub fn placeholder_color(&self) -> Color {
        self.options.borrow().color
    }

    pub fn set_placeholder_color(&self, color: Color) {
        self.options.borrow_mut().color = color;
        self.host.set_needs_display();
    }

    pub fn placeholder_insets(&self) -> EdgeInsets {
        self.options.borrow().insets
    }

    pub fn set_placeholder_insets(&self, insets: EdgeInsets) {
        self.options.borrow_mut().insets = insets;
        self.host.set_needs_display();
    }

    /// True iff a non-empty placeholder is set and the host has no text.
    pub fn should_draw_placeholder(&self) -> bool {
        let has_placeholder = self
            .options
            .borrow()
            .placeholder
            .as_deref()
            .is_some_and(|text| !text.is_empty());
        has_placeholder && !self.host.has_text()
    }

    /// `rect` shrunk by the placeholder insets.
    pub fn placeholder_rect(&self, rect: Rect) -> Rect {
        rect.inset_by(self.options.borrow().insets)
    }

    /// Draws the placeholder into `scope` when [`should_draw_placeholder`]
    /// holds.
    ///
    /// [`should_draw_placeholder`]: Self::should_draw_placeholder
    pub fn draw(&self, scope: &mut dyn DrawScope) {
        if !self.should_draw_placeholder() {
            return;
        }
        let rect = self.placeholder_rect(Rect::from_size(scope.size()));
        let options = self.options.borrow();
        if let Some(text) = options.placeholder.as_deref() {
            scope.draw_text_in(rect, text, options.color);
        }
    }
}

#[cfg(test)]
#[path = "../tests/placeholder_text_view_tests.rs"]
mod tests;
