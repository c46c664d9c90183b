//! Core runtime for Autotext text views.
//!
//! Holds the single-threaded frame runtime that drives animations, the
//! externally owned [`LayoutConstraint`] values the widgets adjust, and the
//! [`ConfigurationError`] raised when a required constraint is missing.

mod constraint;
mod error;
mod frame_clock;
mod platform;
mod runtime;
mod std_runtime;
mod view_id;

pub use constraint::*;
pub use error::ConfigurationError;
pub use frame_clock::{FrameClock, FrameRequest};
pub use platform::{Clock, RuntimeScheduler};
pub use runtime::{FrameCallbackId, Runtime, RuntimeHandle};
pub use std_runtime::{StdClock, StdScheduler};
pub use view_id::ViewId;
