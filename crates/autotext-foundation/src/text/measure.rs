/// Size of laid-out text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    pub width: f32,
    pub height: f32,
    /// Height of a single line of text
    pub line_height: f32,
    /// Number of laid-out lines, counting wrapped lines
    pub line_count: usize,
}

/// Measures text wrapped to a maximum width.
///
/// This is the intrinsic-size measurement a host text view uses to decide
/// how tall its content wants to be.
pub trait TextMeasurer {
    fn measure(&self, text: &str, max_width: f32) -> TextMetrics;
}

/// Fixed-advance measurer that wraps at character boundaries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospacedTextMeasurer {
    pub char_width: f32,
    pub line_height: f32,
}

impl MonospacedTextMeasurer {
    pub const CHAR_WIDTH: f32 = 8.0;
    pub const LINE_HEIGHT: f32 = 20.0;

    pub fn new(char_width: f32, line_height: f32) -> Self {
        Self {
            char_width,
            line_height,
        }
    }

    fn chars_per_line(&self, max_width: f32) -> Option<usize> {
        if !max_width.is_finite() || self.char_width <= 0.0 {
            return None;
        }
        Some(((max_width / self.char_width).floor() as usize).max(1))
    }
}

impl Default for MonospacedTextMeasurer {
    fn default() -> Self {
        Self::new(Self::CHAR_WIDTH, Self::LINE_HEIGHT)
    }
}

impl TextMeasurer for MonospacedTextMeasurer {
    fn measure(&self, text: &str, max_width: f32) -> TextMetrics {
        let per_line = self.chars_per_line(max_width);
        let mut line_count = 0usize;
        let mut widest = 0usize;

        // An empty paragraph still occupies one line.
        for paragraph in text.split('\n') {
            let chars = paragraph.chars().count();
            match per_line {
                Some(per_line) => {
                    line_count += chars.div_ceil(per_line).max(1);
                    widest = widest.max(chars.min(per_line));
                }
                None => {
                    line_count += 1;
                    widest = widest.max(chars);
                }
            }
        }

        TextMetrics {
            width: widest as f32 * self.char_width,
            height: line_count as f32 * self.line_height,
            line_height: self.line_height,
            line_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_one_line() {
        let metrics = MonospacedTextMeasurer::default().measure("", 100.0);
        assert_eq!(metrics.line_count, 1);
        assert_eq!(metrics.height, 20.0);
        assert_eq!(metrics.width, 0.0);
    }

    #[test]
    fn long_paragraph_wraps_to_width() {
        let measurer = MonospacedTextMeasurer::new(10.0, 20.0);
        // 10 chars per line at width 100
        let metrics = measurer.measure(&"x".repeat(25), 100.0);
        assert_eq!(metrics.line_count, 3);
        assert_eq!(metrics.height, 60.0);
        assert_eq!(metrics.width, 100.0);
    }

    #[test]
    fn newlines_start_new_lines() {
        let measurer = MonospacedTextMeasurer::new(10.0, 20.0);
        let metrics = measurer.measure("ab\n\ncd", 100.0);
        assert_eq!(metrics.line_count, 3);
    }

    #[test]
    fn unbounded_width_never_wraps() {
        let measurer = MonospacedTextMeasurer::new(10.0, 20.0);
        let metrics = measurer.measure(&"x".repeat(500), f32::INFINITY);
        assert_eq!(metrics.line_count, 1);
        assert_eq!(metrics.width, 5000.0);
    }

    #[test]
    fn narrow_width_still_fits_one_char_per_line() {
        let measurer = MonospacedTextMeasurer::new(10.0, 20.0);
        let metrics = measurer.measure("abc", 3.0);
        assert_eq!(metrics.line_count, 3);
    }
}
