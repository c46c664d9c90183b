use std::cell::RefCell;

/// Text content of a host text view.
///
/// Uses interior mutability and is meant for the UI thread only.
#[derive(Debug, Default)]
pub struct TextViewState {
    text: RefCell<String>,
}

impl TextViewState {
    pub fn new(initial_text: impl Into<String>) -> Self {
        Self {
            text: RefCell::new(initial_text.into()),
        }
    }

    /// Returns a copy of the current text.
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    /// Runs `f` with the current text without copying it.
    pub fn with_text<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        f(&self.text.borrow())
    }

    pub fn is_empty(&self) -> bool {
        self.text.borrow().is_empty()
    }

    /// Replaces the text. Returns `true` if the content changed.
    pub fn set_text(&self, text: impl Into<String>) -> bool {
        let text = text.into();
        let changed = *self.text.borrow() != text;
        if changed {
            *self.text.borrow_mut() = text;
        }
        changed
    }

    /// Edits the text in place. Returns `true` if the content changed.
    pub fn edit(&self, f: impl FnOnce(&mut String)) -> bool {
        let mut text = self.text.borrow_mut();
        let before = text.clone();
        f(&mut text);
        *text != before
    }
}
