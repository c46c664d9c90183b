//! Text view widgets for Autotext.
//!
//! Three layered widgets augment a host [`TextView`]:
//!
//! - [`PlaceholderTextView`] draws placeholder text while the host is empty
//! - [`AutoResizingTextView`] animates a height constraint to fit content
//! - [`KeyboardAvoidingTextView`] moves a bottom constraint out of the
//!   keyboard's way
//!
//! Constraints are owned by the host layout tree and wired after
//! construction. A missing constraint is a [`ConfigurationError`] reported
//! at first use.

mod text_view;
pub mod widgets;

pub use autotext_core::ConfigurationError;
pub use text_view::{TextView, DEFAULT_TEXT_CONTAINER_INSET};
pub use widgets::*;
