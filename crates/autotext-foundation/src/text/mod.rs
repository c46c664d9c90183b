//! Text storage and measurement for text views.
//!
//! - [`TextViewState`] - the text content of a host view
//! - [`TextMeasurer`] - measures wrapped text height for a given width
//! - [`MonospacedTextMeasurer`] - fixed-advance measurer used by default

mod measure;
mod state;

pub use measure::{MonospacedTextMeasurer, TextMeasurer, TextMetrics};
pub use state::TextViewState;
