//! Text view that lifts its bottom edge above the on-screen keyboard.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use autotext_core::{ConfigurationError, ConstraintRef, LayoutConstraint};
use autotext_foundation::{
    find_bottom_layout_guide_constraint, keyboard_overlap, KeyboardInfo, NotificationName,
    Subscription,
};
use autotext_graphics::Rect;

use super::placeholder_text_view::{PlaceholderOptions, PlaceholderTextView};
use super::raise;
use crate::TextView;

/// Result of handling a keyboard event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyboardChange {
    /// The bottom constraint was set to `inset` and a layout pass requested.
    Applied { inset: f32 },
    /// The constraint already held `inset`, or the keyboard frame matched the
    /// one last applied.
    Unchanged { inset: f32 },
}

impl KeyboardChange {
    pub fn inset(&self) -> f32 {
        match *self {
            KeyboardChange::Applied { inset } | KeyboardChange::Unchanged { inset } => inset,
        }
    }
}

struct Avoider {
    host: Rc<TextView>,
    bottom_constraint: RefCell<Option<ConstraintRef>>,
    resolved: Cell<bool>,
    discovery_attempted: Cell<bool>,
    bottom_inset: Cell<f32>,
    applied_keyboard_frame: Cell<Option<Rect>>,
}

impl Avoider {
    fn missing(&self) -> ConfigurationError {
        ConfigurationError::MissingBottomConstraint {
            view: self.host.id(),
        }
    }

    fn resolve(&self) -> Result<Rc<LayoutConstraint>, ConfigurationError> {
        let current = self
            .bottom_constraint
            .borrow()
            .as_ref()
            .map(|constraint| constraint.upgrade());
        match current {
            Some(Some(constraint)) => {
                self.resolved.set(true);
                return Ok(constraint);
            }
            Some(None) => return Err(self.missing()),
            None => {}
        }

        if self.discovery_attempted.replace(true) {
            return Err(self.missing());
        }
        let candidates = self.host.superview_constraints();
        let Some(found) = find_bottom_layout_guide_constraint(self.host.id(), &candidates) else {
            log::warn!(
                "{}: no bottom layout guide constraint among {} candidates",
                self.host.id(),
                candidates.len()
            );
            return Err(self.missing());
        };
        log::debug!("{}: discovered bottom constraint {:?}", self.host.id(), found);
        *self.bottom_constraint.borrow_mut() = Some(Rc::downgrade(found));
        self.resolved.set(true);
        Ok(Rc::clone(found))
    }

    fn apply(&self, constraint: &LayoutConstraint, inset: f32) -> KeyboardChange {
        if constraint.constant() == inset {
            self.bottom_inset.set(inset);
            return KeyboardChange::Unchanged { inset };
        }
        log::debug!(
            "{}: bottom inset {} -> {inset}",
            self.host.id(),
            constraint.constant()
        );
        constraint.set_constant(inset);
        self.bottom_inset.set(inset);
        self.host.set_needs_layout();
        KeyboardChange::Applied { inset }
    }

    fn on_keyboard_will_show(
        &self,
        info: &KeyboardInfo,
    ) -> Result<KeyboardChange, ConfigurationError> {
        let constraint = self.resolve()?;
        if self.applied_keyboard_frame.get() == Some(info.frame_end) {
            log::trace!("{}: keyboard frame unchanged", self.host.id());
            return Ok(KeyboardChange::Unchanged {
                inset: constraint.constant(),
            });
        }
        let overlap = keyboard_overlap(self.host.frame(), info.frame_end).max(0.0);
        let change = self.apply(&constraint, overlap);
        self.applied_keyboard_frame.set(Some(info.frame_end));
        Ok(change)
    }

    fn on_keyboard_will_hide(
        &self,
        _info: &KeyboardInfo,
    ) -> Result<KeyboardChange, ConfigurationError> {
        let constraint = self.resolve()?;
        constraint.set_constant(0.0);
        self.bottom_inset.set(0.0);
        self.applied_keyboard_frame.set(None);
        self.host.set_needs_layout();
        log::debug!("{}: bottom inset reset", self.host.id());
        Ok(KeyboardChange::Applied { inset: 0.0 })
    }
}

/// [`PlaceholderTextView`] that keeps its bottom edge clear of the keyboard.
///
/// The bottom constraint can be supplied with
/// [`set_bottom_constraint`](Self::set_bottom_constraint); otherwise it is
/// looked up once among the host's superview constraints on the first
/// keyboard event.
pub struct KeyboardAvoidingTextView {
    base: PlaceholderTextView,
    avoider: Rc<Avoider>,
    _keyboard_subscriptions: [Subscription; 2],
}

impl KeyboardAvoidingTextView {
    pub fn new(host: Rc<TextView>) -> Self {
        Self::with_options(host, PlaceholderOptions::default())
    }

    pub fn with_options(host: Rc<TextView>, placeholder: PlaceholderOptions) -> Self {
        let base = PlaceholderTextView::with_options(Rc::clone(&host), placeholder);
        let avoider = Rc::new(Avoider {
            host: Rc::clone(&host),
            bottom_constraint: RefCell::new(None),
            resolved: Cell::new(false),
            discovery_attempted: Cell::new(false),
            bottom_inset: Cell::new(0.0),
            applied_keyboard_frame: Cell::new(None),
        });

        let weak = Rc::downgrade(&avoider);
        let will_show = Subscription::new(
            host.notifications(),
            NotificationName::KeyboardWillShow,
            None,
            move |notification| {
                let (Some(avoider), Some(info)) = (weak.upgrade(), notification.keyboard_info())
                else {
                    return;
                };
                if let Err(error) = avoider.on_keyboard_will_show(info) {
                    raise(error);
                }
            },
        );
        let weak = Rc::downgrade(&avoider);
        let will_hide = Subscription::new(
            host.notifications(),
            NotificationName::KeyboardWillHide,
            None,
            move |notification| {
                let (Some(avoider), Some(info)) = (weak.upgrade(), notification.keyboard_info())
                else {
                    return;
                };
                if let Err(error) = avoider.on_keyboard_will_hide(info) {
                    raise(error);
                }
            },
        );

        Self {
            base,
            avoider,
            _keyboard_subscriptions: [will_show, will_hide],
        }
    }

    pub fn placeholder(&self) -> &PlaceholderTextView {
        &self.base
    }

    pub fn text_view(&self) -> &Rc<TextView> {
        self.base.text_view()
    }

    /// Supplies the bottom constraint explicitly.
    ///
    /// Ignored once a constraint has been resolved; the resolved reference
    /// stays fixed for the view's lifetime.
    pub fn set_bottom_constraint(&self, constraint: &Rc<LayoutConstraint>) {
        if self.avoider.resolved.get() {
            log::warn!(
                "{}: bottom constraint already resolved, keeping it",
                self.avoider.host.id()
            );
            return;
        }
        *self.avoider.bottom_constraint.borrow_mut() = Some(Rc::downgrade(constraint));
    }

    /// Returns the bottom constraint, discovering it on first use.
    pub fn resolve_bottom_constraint(&self) -> Result<Rc<LayoutConstraint>, ConfigurationError> {
        self.avoider.resolve()
    }

    /// Sets the bottom constraint to the keyboard's overlap with the view's
    /// frame. A keyboard frame equal to the one last applied is a no-op.
    pub fn on_keyboard_will_show(
        &self,
        info: &KeyboardInfo,
    ) -> Result<KeyboardChange, ConfigurationError> {
        self.avoider.on_keyboard_will_show(info)
    }

    /// Resets the bottom constraint to zero.
    pub fn on_keyboard_will_hide(
        &self,
        info: &KeyboardInfo,
    ) -> Result<KeyboardChange, ConfigurationError> {
        self.avoider.on_keyboard_will_hide(info)
    }

    /// Inset last applied to the bottom constraint.
    pub fn current_bottom_inset(&self) -> f32 {
        self.avoider.bottom_inset.get()
    }
}

#[cfg(test)]
#[path = "../tests/keyboard_avoiding_text_view_tests.rs"]
mod tests;
