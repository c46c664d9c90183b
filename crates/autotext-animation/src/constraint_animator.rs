//! Animates a layout constraint's constant across frames.
//!
//! Each call to [`ConstraintAnimator::animate_to`] starts from the value the
//! constraint holds *right now*, so a retargeted animation continues from
//! wherever the view visually is. Every animation's completion runs exactly
//! once: with [`AnimationOutcome::Finished`] when it settles, or
//! [`AnimationOutcome::Interrupted`] when a newer animation replaces it or
//! its constraint is dropped.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use autotext_core::{ConstraintRef, FrameRequest, LayoutConstraint, RuntimeHandle};

use crate::animation::{AnimationSpec, Lerp};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationOutcome {
    Finished,
    Interrupted,
}

impl AnimationOutcome {
    pub fn is_finished(&self) -> bool {
        matches!(self, AnimationOutcome::Finished)
    }
}

type Completion = Box<dyn FnOnce(AnimationOutcome)>;

struct Running {
    constraint: ConstraintRef,
    start: f32,
    target: f32,
    spec: AnimationSpec,
    start_time_nanos: Option<u64>,
    frame_request: Option<FrameRequest>,
    completion: Option<Completion>,
}

struct AnimatorInner {
    runtime: RuntimeHandle,
    running: Option<Running>,
}

/// Frame-clock driven tween for a single constraint at a time.
pub struct ConstraintAnimator {
    inner: Rc<RefCell<AnimatorInner>>,
}

impl ConstraintAnimator {
    pub fn new(runtime: RuntimeHandle) -> Self {
        Self {
            inner: Rc::new(RefCell::new(AnimatorInner {
                runtime,
                running: None,
            })),
        }
    }

    /// Animates `constraint` from its current constant to `target`.
    ///
    /// An immediate `spec` writes the target and runs `completion`
    /// synchronously. A previous animation still in flight is interrupted
    /// after the new one is in place, and its completion runs before this
    /// call returns.
    pub fn animate_to(
        &self,
        constraint: &Rc<LayoutConstraint>,
        target: f32,
        spec: AnimationSpec,
        completion: impl FnOnce(AnimationOutcome) + 'static,
    ) {
        let start = constraint.constant();
        let previous = self.inner.borrow_mut().running.take();

        if spec.is_immediate() {
            constraint.set_constant(target);
            Self::interrupt(previous);
            completion(AnimationOutcome::Finished);
            return;
        }

        log::trace!("animating constraint {start} -> {target} over {:?}", spec.duration);
        self.inner.borrow_mut().running = Some(Running {
            constraint: Rc::downgrade(constraint),
            start,
            target,
            spec,
            start_time_nanos: None,
            frame_request: None,
            completion: Some(Box::new(completion)),
        });
        Self::schedule_frame(&self.inner);
        Self::interrupt(previous);
    }

    fn interrupt(previous: Option<Running>) {
        if let Some(mut running) = previous {
            if let Some(request) = running.frame_request.take() {
                request.cancel();
            }
            if let Some(completion) = running.completion.take() {
                completion(AnimationOutcome::Interrupted);
            }
        }
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatorInner>>) {
        let runtime = this.borrow().runtime.clone();
        let weak = Rc::downgrade(this);
        let request = runtime.frame_clock().request_frame(move |time| {
            if let Some(strong) = Weak::upgrade(&weak) {
                Self::on_frame(&strong, time);
            }
        });
        if let Some(running) = this.borrow_mut().running.as_mut() {
            running.frame_request = Some(request);
        }
    }

    fn on_frame(this: &Rc<RefCell<AnimatorInner>>, frame_time_nanos: u64) {
        let finished = {
            let mut inner = this.borrow_mut();
            let Some(running) = inner.running.as_mut() else {
                return;
            };
            running.frame_request = None;

            match running.constraint.upgrade() {
                None => Some(AnimationOutcome::Interrupted),
                Some(constraint) => {
                    let start_time = *running.start_time_nanos.get_or_insert(frame_time_nanos);
                    let elapsed = frame_time_nanos.saturating_sub(start_time);
                    let duration = running.spec.duration_nanos().max(1);
                    let linear = (elapsed as f32 / duration as f32).clamp(0.0, 1.0);
                    if linear >= 1.0 {
                        constraint.set_constant(running.target);
                        Some(AnimationOutcome::Finished)
                    } else {
                        let progress = running.spec.easing.transform(linear);
                        constraint.set_constant(running.start.lerp(&running.target, progress));
                        None
                    }
                }
            }
        };

        match finished {
            Some(outcome) => {
                let completion = this
                    .borrow_mut()
                    .running
                    .take()
                    .and_then(|mut running| running.completion.take());
                if let Some(completion) = completion {
                    completion(outcome);
                }
            }
            None => Self::schedule_frame(this),
        }
    }
}

impl Clone for ConstraintAnimator {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/constraint_animator_tests.rs"]
mod tests;
