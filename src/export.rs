//! HTML and SVG export
//!
//! Serializes the controller's current scene, overlays included, into a
//! self-contained HTML document or a bare `<svg>` fragment.

use tracing::info;

use crate::controller::GridController;
use crate::scene::escape_text;

/// Default document title
pub const DEFAULT_TITLE: &str = "3CC Framework Visualization";

/// Output format for the `export` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    #[default]
    Html,
    Svg,
}

/// Render the whole document
pub fn render_document(grid: &GridController, title: &str) -> String {
    let scene = grid.scene();
    let body = scene.to_markup(scene.root());
    info!(cells = grid.cells().len(), modal = grid.modal().is_some(), "rendered document");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
{body}</html>
"#,
        title = escape_text(title),
        css = inline_css(),
        body = body,
    )
}

/// Render only the `<svg>` element holding the grid
pub fn render_svg(grid: &GridController) -> String {
    let scene = grid.scene();
    match scene.parent(grid.plot()) {
        Some(svg) => scene.to_markup(svg),
        None => String::new(),
    }
}

pub fn render(grid: &GridController, format: ExportFormat, title: &str) -> String {
    match format {
        ExportFormat::Html => render_document(grid, title),
        ExportFormat::Svg => render_svg(grid),
    }
}

fn inline_css() -> &'static str {
    r#"        body { font-family: sans-serif; margin: 0; padding: 16px; }
        .cell-icon { font-size: 14px; }
        .cell-text { font-size: 10px; text-anchor: middle; fill: #111; }
        .legend-text { font-size: 12px; }
        .legend-icon { font-size: 14px; }
        .tooltip {
            position: absolute;
            pointer-events: none;
            background: #fff;
            border: 1px solid #333;
            border-radius: 4px;
            padding: 6px 8px;
            font-size: 12px;
        }
        .modal {
            position: fixed;
            inset: 0;
            display: flex;
            align-items: center;
            justify-content: center;
            z-index: 10;
        }
        .modal-content {
            max-width: 720px;
            max-height: 80vh;
            overflow-y: auto;
            padding: 20px 24px;
            border-radius: 6px;
        }
        .modal-content a { color: inherit; }
        .close-button { float: right; font-size: 28px; cursor: pointer; }"#
}
