//! Host text view the widgets augment.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use autotext_core::{ConstraintRef, LayoutConstraint, ViewId};
use autotext_foundation::text::{MonospacedTextMeasurer, TextMeasurer, TextViewState};
use autotext_foundation::{Notification, NotificationSource};
use autotext_graphics::{EdgeInsets, Rect};

/// Inset between the view's bounds and its text container.
pub const DEFAULT_TEXT_CONTAINER_INSET: EdgeInsets =
    EdgeInsets::from_components(0.0, 8.0, 0.0, 8.0);

/// Editable text host.
///
/// Owns the text, its frame and a text measurer. Every text change posts
/// [`Notification::TextDidChange`] to the notification source it was built
/// with. Layout and display are requested through flags the hosting layout
/// engine consumes.
pub struct TextView {
    id: ViewId,
    state: TextViewState,
    frame: Cell<Rect>,
    text_container_inset: Cell<EdgeInsets>,
    measurer: Box<dyn TextMeasurer>,
    notifications: Rc<dyn NotificationSource>,
    superview_constraints: RefCell<Vec<ConstraintRef>>,
    needs_display: Cell<bool>,
    layout_requests: Cell<u64>,
}

impl TextView {
    pub fn new(notifications: Rc<dyn NotificationSource>) -> Self {
        Self {
            id: ViewId::next(),
            state: TextViewState::default(),
            frame: Cell::new(Rect::default()),
            text_container_inset: Cell::new(DEFAULT_TEXT_CONTAINER_INSET),
            measurer: Box::new(MonospacedTextMeasurer::default()),
            notifications,
            superview_constraints: RefCell::new(Vec::new()),
            needs_display: Cell::new(false),
            layout_requests: Cell::new(0),
        }
    }

    pub fn with_frame(self, frame: Rect) -> Self {
        self.frame.set(frame);
        self
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.state.set_text(text);
        self
    }

    pub fn with_measurer(mut self, measurer: impl TextMeasurer + 'static) -> Self {
        self.measurer = Box::new(measurer);
        self
    }

    pub fn with_text_container_inset(self, inset: EdgeInsets) -> Self {
        self.text_container_inset.set(inset);
        self
    }

    pub fn id(&self) -> ViewId {
        self.id
    }

    pub fn notifications(&self) -> &Rc<dyn NotificationSource> {
        &self.notifications
    }

    pub fn text(&self) -> String {
        self.state.text()
    }

    pub fn has_text(&self) -> bool {
        !self.state.is_empty()
    }

    /// Replaces the text, posting a change notification if it differs.
    pub fn set_text(&self, text: impl Into<String>) {
        if self.state.set_text(text) {
            self.text_did_change();
        }
    }

    /// Edits the text in place, posting a change notification if it differs.
    pub fn edit(&self, f: impl FnOnce(&mut String)) {
        if self.state.edit(f) {
            self.text_did_change();
        }
    }

    /// Appends `text` at the end, as typing would.
    pub fn insert_text(&self, text: &str) {
        self.edit(|buffer| buffer.push_str(text));
    }

    fn text_did_change(&self) {
        self.notifications
            .post(&Notification::TextDidChange { sender: self.id });
    }

    pub fn frame(&self) -> Rect {
        self.frame.get()
    }

    /// Set by the layout engine after each layout pass.
    pub fn set_frame(&self, frame: Rect) {
        self.frame.set(frame);
    }

    pub fn text_container_inset(&self) -> EdgeInsets {
        self.text_container_inset.get()
    }

    pub fn set_text_container_inset(&self, inset: EdgeInsets) {
        self.text_container_inset.set(inset);
        self.set_needs_display();
    }

    /// Height the current text wants at the current frame width, including
    /// the text container inset.
    pub fn content_height(&self) -> f32 {
        let inset = self.text_container_inset.get();
        let width = (self.frame.get().width - inset.horizontal_sum()).max(0.0);
        let metrics = self
            .state
            .with_text(|text| self.measurer.measure(text, width));
        metrics.height + inset.vertical_sum()
    }

    /// Constraints installed on this view's parent. Held weakly: the layout
    /// tree owns them.
    pub fn set_superview_constraints<'a>(
        &self,
        constraints: impl IntoIterator<Item = &'a Rc<LayoutConstraint>>,
    ) {
        *self.superview_constraints.borrow_mut() =
            constraints.into_iter().map(Rc::downgrade).collect();
    }

    /// The parent's constraints that are still alive.
    pub fn superview_constraints(&self) -> Vec<Rc<LayoutConstraint>> {
        self.superview_constraints
            .borrow()
            .iter()
            .filter_map(|constraint| constraint.upgrade())
            .collect()
    }

    pub fn set_needs_display(&self) {
        self.needs_display.set(true);
    }

    pub fn needs_display(&self) -> bool {
        self.needs_display.get()
    }

    /// Clears and returns the display flag; called by the renderer.
    pub fn take_needs_display(&self) -> bool {
        self.needs_display.replace(false)
    }

    pub fn set_needs_layout(&self) {
        self.layout_requests.set(self.layout_requests.get() + 1);
    }

    /// Number of layout passes requested so far.
    pub fn layout_requests(&self) -> u64 {
        self.layout_requests.get()
    }
}

impl fmt::Debug for TextView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextView")
            .field("id", &self.id)
            .field("text", &self.state.text())
            .field("frame", &self.frame.get())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/text_view_tests.rs"]
mod tests;
