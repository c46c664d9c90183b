//! Foundation pieces shared by the Autotext widgets.
//!
//! - [`text`]: text storage and intrinsic height measurement
//! - [`notification`]: an injectable notification source for text and
//!   keyboard events, replacing any process-global event bus
//! - [`keyboard`]: keyboard geometry carried by keyboard notifications
//! - [`constraint_discovery`]: locating the constraint that pins a view to
//!   the bottom layout guide

pub mod constraint_discovery;
pub mod keyboard;
pub mod notification;
pub mod text;

pub use constraint_discovery::{
    find_bottom_layout_guide_constraint, is_bottom_layout_guide_constraint,
};
pub use keyboard::{keyboard_overlap, KeyboardInfo};
pub use notification::{
    Notification, NotificationCenter, NotificationName, NotificationSource, ObserverId,
    Subscription,
};
