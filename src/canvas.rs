//! Drawing surface geometry.

/// Space reserved around the plot area, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Geometry of the rendered grid. `Default` is the published layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    /// Extra width to the right of the outer box, room for the legends
    pub legend_allowance: f64,
    /// Fraction of each band's step left as padding
    pub band_padding: f64,
    pub legend_row_height: f64,
    pub legend_gap: f64,
    pub legend_swatch: f64,
    /// Label lines per cell, overflow line included
    pub max_label_lines: usize,
    pub label_line_height: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 600.0,
            margin: Margin {
                top: 50.0,
                right: 250.0,
                bottom: 50.0,
                left: 150.0,
            },
            legend_allowance: 150.0,
            band_padding: 0.05,
            legend_row_height: 20.0,
            legend_gap: 10.0,
            legend_swatch: 18.0,
            max_label_lines: 4,
            label_line_height: 12.0,
        }
    }
}

impl Canvas {
    pub fn plot_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    pub fn plot_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }

    /// Width attribute of the `<svg>` element
    pub fn svg_width(&self) -> f64 {
        self.plot_width() + self.margin.left + self.margin.right + self.legend_allowance
    }

    pub fn svg_height(&self) -> f64 {
        self.plot_height() + self.margin.top + self.margin.bottom
    }
}
