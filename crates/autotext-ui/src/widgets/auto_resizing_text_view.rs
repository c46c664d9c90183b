//! Text view that animates its height constraint to fit its content.
//!
//! Every text change re-measures the host, clamps the result to the
//! configured bounds and, when the clamped height differs from the height
//! constraint's current constant, runs one [`HeightTransition`]:
//!
//! 1. the delegate's `will_change_height` fires synchronously,
//! 2. the constraint animates from its current constant to the new height,
//! 3. on completion the delegate's `did_change_height` fires.
//!
//! A change arriving mid-animation starts its transition from the
//! constraint's in-flight value. The superseded transition still reports
//! its own `did_change_height`, in initiation order.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use autotext_animation::{AnimationOutcome, AnimationSpec, ConstraintAnimator, Easing};
use autotext_core::{ConfigurationError, ConstraintRef, LayoutConstraint, RuntimeHandle};
use autotext_foundation::{NotificationName, Subscription};

use super::placeholder_text_view::{PlaceholderOptions, PlaceholderTextView};
use super::raise;
use crate::TextView;

/// Maximum height meaning "no upper bound".
pub const UNBOUNDED_HEIGHT: f32 = f32::MAX;

/// Applies `minimum` first, then `maximum`.
///
/// Bounds are not reconciled: with `minimum > maximum` the result is
/// `maximum`, even though that is below `minimum`.
pub fn clamp_height(measured: f32, minimum: f32, maximum: f32) -> f32 {
    measured.max(minimum).min(maximum)
}

/// Minimum and maximum height, normalized on assignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightBounds {
    minimum: f32,
    maximum: f32,
}

impl HeightBounds {
    pub fn new(minimum: f32, maximum: f32) -> Self {
        let mut bounds = Self::default();
        bounds.set_minimum(minimum);
        bounds.set_maximum(maximum);
        bounds
    }

    pub fn minimum(&self) -> f32 {
        self.minimum
    }

    pub fn maximum(&self) -> f32 {
        self.maximum
    }

    /// Negative (or NaN) minimums become `0`.
    pub fn set_minimum(&mut self, minimum: f32) {
        self.minimum = if minimum >= 0.0 { minimum } else { 0.0 };
    }

    /// Negative (or NaN) maximums become [`UNBOUNDED_HEIGHT`].
    pub fn set_maximum(&mut self, maximum: f32) {
        self.maximum = if maximum >= 0.0 {
            maximum
        } else {
            UNBOUNDED_HEIGHT
        };
    }

    pub fn clamp(&self, measured: f32) -> f32 {
        clamp_height(measured, self.minimum, self.maximum)
    }
}

impl Default for HeightBounds {
    fn default() -> Self {
        Self {
            minimum: 0.0,
            maximum: UNBOUNDED_HEIGHT,
        }
    }
}

/// Auto-resizing configuration.
///
/// Fields may hold any value; [`normalized`](Self::normalized) applies the
/// same coercions as the widget's setters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoResizingOptions {
    pub minimum_height: f32,
    pub maximum_height: f32,
    /// Zero applies height changes without animation.
    pub animation_duration: Duration,
    pub easing: Easing,
}

impl AutoResizingOptions {
    pub fn normalized(self) -> Self {
        let bounds = self.bounds();
        Self {
            minimum_height: bounds.minimum(),
            maximum_height: bounds.maximum(),
            ..self
        }
    }

    pub fn bounds(&self) -> HeightBounds {
        HeightBounds::new(self.minimum_height, self.maximum_height)
    }

    pub fn animation_spec(&self) -> AnimationSpec {
        AnimationSpec::tween(self.animation_duration, self.easing)
    }
}

impl Default for AutoResizingOptions {
    fn default() -> Self {
        Self {
            minimum_height: 0.0,
            maximum_height: UNBOUNDED_HEIGHT,
            animation_duration: AnimationSpec::DEFAULT_DURATION,
            easing: Easing::EaseInOut,
        }
    }
}

/// Observer of height changes. Both methods are optional.
pub trait AutoResizingTextViewDelegate {
    /// Called synchronously, before the height animation starts.
    fn will_change_height(&self, _text_view: &TextView, _old_height: f32, _new_height: f32) {}

    /// Called once the transition completes or is superseded.
    fn did_change_height(&self, _text_view: &TextView, _old_height: f32, _new_height: f32) {}
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightTransition {
    pub old_height: f32,
    pub new_height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeState {
    Idle,
    Animating(HeightTransition),
}

/// Result of re-measuring the content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContentChange {
    /// The clamped height equals the current height; nothing happened.
    Unchanged { height: f32 },
    /// A transition was started.
    Resized(HeightTransition),
}

struct Resizer {
    host: Rc<TextView>,
    options: Cell<AutoResizingOptions>,
    height_constraint: RefCell<Option<ConstraintRef>>,
    delegate: RefCell<Option<Weak<dyn AutoResizingTextViewDelegate>>>,
    state: Cell<ResizeState>,
    old_height: Cell<f32>,
    new_height: Cell<f32>,
    generation: Cell<u64>,
    animator: ConstraintAnimator,
}

impl Resizer {
    fn height_constraint(&self) -> Option<Rc<LayoutConstraint>> {
        self.height_constraint
            .borrow()
            .as_ref()
            .and_then(Weak::upgrade)
    }

    fn delegate(&self) -> Option<Rc<dyn AutoResizingTextViewDelegate>> {
        self.delegate.borrow().as_ref().and_then(Weak::upgrade)
    }

    fn on_content_changed(self: &Rc<Self>) -> Result<ContentChange, ConfigurationError> {
        let options = self.options.get();
        let desired = options.bounds().clamp(self.host.content_height());
        let constraint = self.height_constraint();
        let old_height = constraint
            .as_ref()
            .map(|constraint| constraint.constant())
            .unwrap_or_else(|| self.host.frame().height);

        if desired == old_height {
            log::trace!("{}: content height unchanged at {desired}", self.host.id());
            return Ok(ContentChange::Unchanged { height: desired });
        }

        let Some(constraint) = constraint else {
            return Err(ConfigurationError::MissingHeightConstraint {
                view: self.host.id(),
            });
        };

        let transition = HeightTransition {
            old_height,
            new_height: desired,
        };
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        self.old_height.set(old_height);
        self.new_height.set(desired);
        self.state.set(ResizeState::Animating(transition));
        log::debug!(
            "{}: height {old_height} -> {desired} over {:?}",
            self.host.id(),
            options.animation_duration
        );

        if let Some(delegate) = self.delegate() {
            delegate.will_change_height(&self.host, old_height, desired);
        }

        self.host.set_needs_layout();
        let weak = Rc::downgrade(self);
        let target = Rc::downgrade(&constraint);
        self.animator.animate_to(
            &constraint,
            desired,
            options.animation_spec(),
            move |outcome| {
                if let Some(resizer) = weak.upgrade() {
                    resizer.finish_transition(generation, transition, &target, outcome);
                }
            },
        );

        Ok(ContentChange::Resized(transition))
    }

    fn finish_transition(
        &self,
        generation: u64,
        transition: HeightTransition,
        constraint: &ConstraintRef,
        outcome: AnimationOutcome,
    ) {
        // A superseded transition leaves the constraint to its successor.
        if outcome.is_finished() {
            if let Some(constraint) = constraint.upgrade() {
                constraint.set_constant(transition.new_height);
            }
            self.host.set_needs_layout();
        }
        log::debug!(
            "{}: height transition {} -> {} {:?}",
            self.host.id(),
            transition.old_height,
            transition.new_height,
            outcome
        );

        if let Some(delegate) = self.delegate() {
            delegate.did_change_height(&self.host, transition.old_height, transition.new_height);
        }

        if self.generation.get() == generation {
            self.state.set(ResizeState::Idle);
        }
    }
}

/// [`PlaceholderTextView`] that grows and shrinks with its content.
///
/// The height constraint is required before the first content change that
/// alters the height; without it that change is a
/// [`ConfigurationError::MissingHeightConstraint`].
pub struct AutoResizingTextView {
    base: PlaceholderTextView,
    resizer: Rc<Resizer>,
    _text_changes: Subscription,
}

impl AutoResizingTextView {
    pub fn new(host: Rc<TextView>, runtime: RuntimeHandle) -> Self {
        Self::with_options(
            host,
            runtime,
            PlaceholderOptions::default(),
            AutoResizingOptions::default(),
        )
    }

    pub fn with_options(
        host: Rc<TextView>,
        runtime: RuntimeHandle,
        placeholder: PlaceholderOptions,
        options: AutoResizingOptions,
    ) -> Self {
        let base = PlaceholderTextView::with_options(Rc::clone(&host), placeholder);
        let resizer = Rc::new(Resizer {
            host: Rc::clone(&host),
            options: Cell::new(options.normalized()),
            height_constraint: RefCell::new(None),
            delegate: RefCell::new(None),
            state: Cell::new(ResizeState::Idle),
            old_height: Cell::new(0.0),
            new_height: Cell::new(0.0),
            generation: Cell::new(0),
            animator: ConstraintAnimator::new(runtime),
        });

        let weak = Rc::downgrade(&resizer);
        let text_changes = Subscription::new(
            host.notifications(),
            NotificationName::TextDidChange,
            Some(host.id()),
            move |_| {
                if let Some(resizer) = weak.upgrade() {
                    if let Err(error) = resizer.on_content_changed() {
                        raise(error);
                    }
                }
            },
        );

        Self {
            base,
            resizer,
            _text_changes: text_changes,
        }
    }

    pub fn placeholder(&self) -> &PlaceholderTextView {
        &self.base
    }

    pub fn text_view(&self) -> &Rc<TextView> {
        self.base.text_view()
    }

    /// Re-measures the content and starts a height transition if needed.
    ///
    /// Text changes on the host call this automatically; call it directly
    /// after changing the frame width or the bounds.
    pub fn on_content_changed(&self) -> Result<ContentChange, ConfigurationError> {
        self.resizer.on_content_changed()
    }

    pub fn set_height_constraint(&self, constraint: &Rc<LayoutConstraint>) {
        *self.resizer.height_constraint.borrow_mut() = Some(Rc::downgrade(constraint));
    }

    pub fn height_constraint(&self) -> Option<Rc<LayoutConstraint>> {
        self.resizer.height_constraint()
    }

    /// The delegate is held weakly; keep it alive elsewhere.
    pub fn set_delegate(&self, delegate: &Rc<dyn AutoResizingTextViewDelegate>) {
        *self.resizer.delegate.borrow_mut() = Some(Rc::downgrade(delegate));
    }

    pub fn clear_delegate(&self) {
        self.resizer.delegate.borrow_mut().take();
    }

    pub fn options(&self) -> AutoResizingOptions {
        self.resizer.options.get()
    }

    fn update_options(&self, f: impl FnOnce(&mut AutoResizingOptions)) {
        let mut options = self.resizer.options.get();
        f(&mut options);
        self.resizer.options.set(options.normalized());
    }

    pub fn minimum_height(&self) -> f32 {
        self.options().minimum_height
    }

    /// Negative values become `0`.
    pub fn set_minimum_height(&self, minimum: f32) {
        self.update_options(|options| options.minimum_height = minimum);
    }

    pub fn maximum_height(&self) -> f32 {
        self.options().maximum_height
    }

    /// Negative values become [`UNBOUNDED_HEIGHT`].
    pub fn set_maximum_height(&self, maximum: f32) {
        self.update_options(|options| options.maximum_height = maximum);
    }

    pub fn autoresizing_animation_duration(&self) -> Duration {
        self.options().animation_duration
    }

    pub fn set_autoresizing_animation_duration(&self, duration: Duration) {
        self.update_options(|options| options.animation_duration = duration);
    }

    /// Seconds variant; negative or non-finite values disable animation.
    pub fn set_autoresizing_animation_duration_secs(&self, seconds: f64) {
        let duration = Duration::try_from_secs_f64(seconds).unwrap_or(Duration::ZERO);
        self.set_autoresizing_animation_duration(duration);
    }

    pub fn set_easing(&self, easing: Easing) {
        self.update_options(|options| options.easing = easing);
    }

    pub fn state(&self) -> ResizeState {
        self.resizer.state.get()
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state(), ResizeState::Animating(_))
    }

    /// Height the latest transition started from.
    pub fn old_height(&self) -> f32 {
        self.resizer.old_height.get()
    }

    /// Height the latest transition is heading to.
    pub fn new_height(&self) -> f32 {
        self.resizer.new_height.get()
    }
}

#[cfg(test)]
#[path = "../tests/auto_resizing_text_view_tests.rs"]
mod tests;
