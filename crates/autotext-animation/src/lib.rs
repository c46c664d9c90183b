//! Animation system for Autotext
//!
//! Provides time-based tweens with easing curves, and a
//! [`ConstraintAnimator`] that drives a layout constraint's constant from its
//! current value to a target across frames.

mod animation;
mod constraint_animator;

pub use animation::{AnimationSpec, CubicBezier, Easing, Lerp};
pub use constraint_animator::{AnimationOutcome, ConstraintAnimator};
