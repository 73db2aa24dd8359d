//! Scene renderers
//!
//! Pure drawing into the scene graph: axes, cells and legends. Interaction
//! and overlays live in `interaction` and `modal`.

pub mod axes;
pub mod cells;
pub mod legend;

pub use axes::{render_axis, AxisOrient};
pub use cells::{label_lines, render_cell, render_cells, RenderedCell};
pub use legend::{render_legends, LegendNodes};
