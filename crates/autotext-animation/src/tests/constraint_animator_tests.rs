use super::*;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use autotext_core::{LayoutConstraint, Runtime, ViewId};

use crate::Easing;

const FRAME_NANOS: u64 = 16_666_667;

fn linear(millis: u64) -> AnimationSpec {
    AnimationSpec::tween(Duration::from_millis(millis), Easing::Linear)
}

fn immediate() -> AnimationSpec {
    AnimationSpec::tween(Duration::ZERO, Easing::Linear)
}

type Outcomes = Rc<RefCell<Vec<(&'static str, AnimationOutcome)>>>;

fn record(outcomes: &Outcomes, label: &'static str) -> impl FnOnce(AnimationOutcome) + 'static {
    let outcomes = Rc::clone(outcomes);
    move |outcome| outcomes.borrow_mut().push((label, outcome))
}

#[test]
fn tween_reaches_target_through_intermediate_values() {
    let runtime = Runtime::headless();
    let handle = runtime.handle();
    let constraint = LayoutConstraint::height(ViewId::next(), 40.0);
    let animator = ConstraintAnimator::new(handle.clone());
    let outcomes = Rc::new(RefCell::new(Vec::new()));

    animator.animate_to(
        &constraint,
        80.0,
        linear(100),
        record(&outcomes, "a"),
    );
    assert!(handle.has_frame_callbacks());
    assert_eq!(constraint.constant(), 40.0);

    let mut frame_time = 0u64;
    let mut saw_midpoint = false;
    for _ in 0..32 {
        if !handle.has_frame_callbacks() {
            break;
        }
        frame_time += FRAME_NANOS;
        handle.drain_frame_callbacks(frame_time);
        let value = constraint.constant();
        if value > 40.0 && value < 80.0 {
            saw_midpoint = true;
        }
    }

    assert!(saw_midpoint, "animation should report intermediate values");
    assert_eq!(constraint.constant(), 80.0);
    assert!(!handle.has_frame_callbacks());
    assert_eq!(
        outcomes.borrow().as_slice(),
        &[("a", AnimationOutcome::Finished)]
    );
}

#[test]
fn immediate_spec_completes_synchronously() {
    let runtime = Runtime::headless();
    let constraint = LayoutConstraint::height(ViewId::next(), 10.0);
    let animator = ConstraintAnimator::new(runtime.handle());
    let outcomes = Rc::new(RefCell::new(Vec::new()));

    animator.animate_to(&constraint, 30.0, immediate(), record(&outcomes, "a"));

    assert_eq!(constraint.constant(), 30.0);
    assert!(!runtime.handle().has_frame_callbacks());
    assert_eq!(
        outcomes.borrow().as_slice(),
        &[("a", AnimationOutcome::Finished)]
    );
}

#[test]
fn retarget_starts_from_current_value_and_interrupts_previous() {
    let runtime = Runtime::headless();
    let handle = runtime.handle();
    let constraint = LayoutConstraint::height(ViewId::next(), 0.0);
    let animator = ConstraintAnimator::new(handle.clone());
    let outcomes = Rc::new(RefCell::new(Vec::new()));
    let spec = linear(100);

    animator.animate_to(&constraint, 100.0, spec, record(&outcomes, "a"));
    handle.drain_frame_callbacks(0);
    handle.drain_frame_callbacks(50_000_000);
    let midway = constraint.constant();
    assert!((midway - 50.0).abs() < 0.01);

    animator.animate_to(&constraint, 20.0, spec, record(&outcomes, "b"));
    assert_eq!(
        outcomes.borrow().as_slice(),
        &[("a", AnimationOutcome::Interrupted)]
    );
    assert_eq!(constraint.constant(), midway);

    handle.drain_frame_callbacks(60_000_000);
    assert_eq!(constraint.constant(), midway);
    handle.drain_frame_callbacks(110_000_000);
    assert!((constraint.constant() - (midway + (20.0 - midway) * 0.5)).abs() < 0.01);
    handle.drain_frame_callbacks(170_000_000);

    assert_eq!(constraint.constant(), 20.0);
    assert_eq!(
        outcomes.borrow().as_slice(),
        &[
            ("a", AnimationOutcome::Interrupted),
            ("b", AnimationOutcome::Finished)
        ]
    );
}

#[test]
fn dropped_constraint_interrupts_animation() {
    let runtime = Runtime::headless();
    let handle = runtime.handle();
    let constraint = LayoutConstraint::height(ViewId::next(), 0.0);
    let animator = ConstraintAnimator::new(handle.clone());
    let outcomes = Rc::new(RefCell::new(Vec::new()));

    animator.animate_to(&constraint, 50.0, AnimationSpec::default(), record(&outcomes, "a"));
    drop(constraint);
    handle.drain_frame_callbacks(FRAME_NANOS);

    assert!(!handle.has_frame_callbacks());
    assert_eq!(
        outcomes.borrow().as_slice(),
        &[("a", AnimationOutcome::Interrupted)]
    );
}

#[test]
fn completion_may_start_another_animation() {
    let runtime = Runtime::headless();
    let handle = runtime.handle();
    let constraint = LayoutConstraint::height(ViewId::next(), 0.0);
    let animator = ConstraintAnimator::new(handle.clone());

    {
        let chained = animator.clone();
        let target = Rc::clone(&constraint);
        animator.animate_to(&constraint, 10.0, immediate(), move |_| {
            chained.animate_to(&target, 20.0, immediate(), |_| {});
        });
    }

    assert_eq!(constraint.constant(), 20.0);
    assert!(!handle.has_frame_callbacks());
}
