//! ccf-grid: a stakeholder × framework-level grid of similar work.
//!
//! A dataset of stakeholders, each listing work items per level of the
//! framework, is flattened into cells and rendered into a scene graph: an SVG
//! grid with axes and legends, a hover tooltip and a click-to-open detail
//! modal. The scene can be exported as HTML/SVG or browsed in the terminal.

pub mod app;
pub mod canvas;
pub mod cli;
pub mod controller;
pub mod error;
pub mod export;
pub mod interaction;
pub mod logging;
pub mod modal;
pub mod models;
pub mod render;
pub mod scale;
pub mod scene;
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod watcher;

pub use canvas::Canvas;
pub use controller::GridController;
pub use error::{GridError, Result};
pub use models::{flatten, CellRecord, Dataset};
