//! UI module for ccf-grid
//!
//! This module contains the ratatui rendering of a mounted grid: the cell
//! matrix, the legend panel, the tooltip and the detail modal.

mod grid;
mod helpers;
mod legend;
mod overlay;

use ratatui::{prelude::*, widgets::Paragraph};

use crate::app::App;
use crate::theme::{BG_SECONDARY, CYAN_PRIMARY, RED_ERROR, TEXT_MUTED};

pub use grid::render_grid;
pub use helpers::{centered_rect, truncate, wrap_text};
pub use legend::render_legend;
pub use overlay::{modal_lines, render_modal, render_tooltip};

/// Draw one frame and record the cell areas for mouse hit-testing
pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(3),    // Grid and legend
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            " 3CC Framework ",
            Style::default()
                .fg(CYAN_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            app.dataset_path.display().to_string(),
            Style::default().fg(TEXT_MUTED),
        ),
    ]))
    .style(Style::default().bg(BG_SECONDARY));
    frame.render_widget(title, main_layout[0]);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(30)])
        .split(main_layout[1]);

    app.cell_areas = render_grid(frame, panels[0], &app.grid);
    render_legend(frame, panels[1], &app.grid);

    let bottom_bar = match &app.status_message {
        Some(message) => Paragraph::new(Span::styled(
            format!(" {}", message),
            Style::default().fg(RED_ERROR),
        )),
        None => {
            let hints = if app.grid.modal().is_some() {
                " Esc/x close  ↑↓ PgUp/PgDn scroll  q quit"
            } else {
                " ←↓↑→/hjkl move  Enter details  Esc leave  q quit"
            };
            Paragraph::new(Span::styled(hints, Style::default().fg(TEXT_MUTED)))
        }
    };
    frame.render_widget(bottom_bar.style(Style::default().bg(BG_SECONDARY)), main_layout[2]);

    render_tooltip(frame, &app.grid, &app.cell_areas);
    render_modal(frame, main_layout[1], &app.grid, &mut app.modal_scroll);
}
