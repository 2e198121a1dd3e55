//! View geometry used for pixel-to-position conversion.
//!
//! The host measures its font once and hands the editor these fixed
//! metrics. Layout is trivial for a monospace grid:
//! - x = text_origin_x + column * char_width
//! - y = first_line_offset_y + line * line_height - scroll

/// Fixed pixel geometry of the rendered text grid.
#[derive(Debug, Clone, Copy)]
pub struct ViewMetrics {
    /// Average advance width of a single character
    pub char_width: f64,
    /// Height of a line
    pub line_height: f64,
    /// Left edge of the text column
    pub text_origin_x: f64,
    /// Distance from the text column back to the right edge of the line
    /// number gutter
    pub gutter_offset_x: f64,
    /// Top padding above the first line
    pub first_line_offset_y: f64,
}

impl Default for ViewMetrics {
    fn default() -> Self {
        Self {
            char_width: 10.0,
            line_height: 26.0,
            text_origin_x: 90.0,
            gutter_offset_x: 30.0,
            first_line_offset_y: 6.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_geometry() {
        let m = ViewMetrics::default();
        assert_eq!(m.line_height, 26.0);
        assert_eq!(m.text_origin_x, 90.0);
    }
}
