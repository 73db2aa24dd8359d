//! Grid rendering functions
//!
//! Cells are painted from the scene graph: fill and border weight come from
//! the cell rectangle, glyph and labels from the cell's text nodes.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::helpers::{child_with_class, truncate};
use crate::controller::GridController;
use crate::interaction::CellBinding;
use crate::models::Level;
use crate::scene::Scene;
use crate::theme::{
    Rgb, BG_PRIMARY, BG_SECONDARY, BORDER_SUBTLE, CYAN_PRIMARY, TEXT_MUTED, TEXT_ON_STATUS,
    TEXT_PRIMARY,
};

/// Render the stakeholder × level grid.
/// Returns the screen area of every drawn cell, by cell index.
pub fn render_grid(frame: &mut Frame, area: Rect, grid: &GridController) -> Vec<(usize, Rect)> {
    let block = Block::default()
        .title(" Stakeholders × Levels ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_PRIMARY));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let stakeholders = grid.scales().y.domain();
    if stakeholders.is_empty() {
        return Vec::new();
    }

    let label_width = stakeholders
        .iter()
        .map(|name| name.chars().count())
        .max()
        .unwrap_or(0)
        .clamp(8, 20) as u16
        + 1;
    let columns = [
        Constraint::Length(label_width),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ];

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);
    let header_area = vertical[0];
    let body_area = vertical[1];

    // Column headers: levels in fixed order
    let header_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(columns)
        .split(header_area);
    for level in Level::ALL {
        let col_area = header_cols[level.column() + 1];
        let header = Paragraph::new(truncate(level.label(), col_area.width as usize))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(CYAN_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(header, col_area);
    }

    let row_constraints: Vec<Constraint> = stakeholders
        .iter()
        .map(|_| Constraint::Ratio(1, stakeholders.len() as u32))
        .collect();
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(body_area);

    let mut cell_grid: Vec<Vec<Rect>> = Vec::with_capacity(row_areas.len());
    for (row, name) in stakeholders.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(columns)
            .split(row_areas[row]);

        // Row label, vertically centered
        let label_area = cols[0];
        let middle = Rect::new(
            label_area.x,
            label_area.y + label_area.height / 2,
            label_area.width,
            label_area.height.min(1),
        );
        let label = Paragraph::new(truncate(name, label_area.width.saturating_sub(1) as usize))
            .style(Style::default().fg(TEXT_MUTED));
        frame.render_widget(label, middle);

        cell_grid.push(cols[1..].to_vec());
    }

    let mut drawn = Vec::with_capacity(grid.cells().len());
    for (index, binding) in grid.cells().iter().enumerate() {
        let Some((row, col)) = grid.grid_position(index) else {
            continue;
        };
        let Some(cell_area) = cell_grid.get(row).and_then(|cols| cols.get(col)).copied() else {
            continue;
        };
        render_cell(frame, cell_area, grid.scene(), binding);
        drawn.push((index, cell_area));
    }

    drawn
}

/// Paint one cell from its scene nodes
fn render_cell(frame: &mut Frame, area: Rect, scene: &Scene, binding: &CellBinding) {
    let rect = binding.rect();
    let fill = scene
        .attr(rect, "fill")
        .and_then(Rgb::from_hex)
        .map(Color::from)
        .unwrap_or(BG_SECONDARY);
    let hovered = scene.attr(rect, "stroke-width") == Some("2");
    let (border_type, border_color) = if hovered {
        (BorderType::Thick, TEXT_PRIMARY)
    } else {
        (BorderType::Plain, Color::Black)
    };

    let group = binding.group();
    let icon = child_with_class(scene, group, "cell-icon")
        .map(|node| scene.text_content(node))
        .unwrap_or_default();
    let labels: Vec<String> = child_with_class(scene, group, "cell-text")
        .map(|text| {
            scene
                .child_elements(text)
                .into_iter()
                .map(|tspan| scene.text_content(tspan))
                .collect()
        })
        .unwrap_or_default();

    let inner_width = area.width.saturating_sub(2) as usize;
    let inner_height = area.height.saturating_sub(2) as usize;

    let mut lines = vec![Line::from(icon).left_aligned()];
    let free = inner_height.saturating_sub(1 + labels.len());
    lines.extend((0..free / 2).map(|_| Line::default()));
    lines.extend(
        labels
            .iter()
            .map(|label| Line::from(truncate(label, inner_width)).centered()),
    );

    let cell_block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(border_color));
    let paragraph = Paragraph::new(lines)
        .block(cell_block)
        .style(Style::default().bg(fill).fg(TEXT_ON_STATUS));
    frame.render_widget(paragraph, area);
}
