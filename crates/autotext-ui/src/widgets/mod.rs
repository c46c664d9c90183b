//! Text view widgets, layered over a host [`TextView`](crate::TextView).

mod auto_resizing_text_view;
mod keyboard_avoiding_text_view;
mod placeholder_text_view;

pub use auto_resizing_text_view::{
    clamp_height, AutoResizingOptions, AutoResizingTextView, AutoResizingTextViewDelegate,
    ContentChange, HeightBounds, HeightTransition, ResizeState, UNBOUNDED_HEIGHT,
};
pub use keyboard_avoiding_text_view::{KeyboardAvoidingTextView, KeyboardChange};
pub use placeholder_text_view::{
    PlaceholderOptions, PlaceholderTextView, DEFAULT_PLACEHOLDER_INSETS,
};

use autotext_core::ConfigurationError;

/// Notification handlers have no caller to return an error to; a missing
/// constraint there is a programmer error and stops the program.
fn raise(error: ConfigurationError) -> ! {
    log::error!("{error}");
    panic!("{error}");
}
