//! Legend panel

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::helpers::child_with_class;
use crate::controller::GridController;
use crate::scene::{NodeId, Scene};
use crate::theme::{Rgb, BG_PRIMARY, BORDER_SUBTLE, CYAN_PRIMARY, TEXT_PRIMARY};

/// Render the status color legend followed by the glyph legend
pub fn render_legend(frame: &mut Frame, area: Rect, grid: &GridController) {
    let scene = grid.scene();
    let legends = grid.legends();

    let mut lines = vec![Line::from(Span::styled(
        "Status",
        Style::default()
            .fg(CYAN_PRIMARY)
            .add_modifier(Modifier::BOLD),
    ))];
    for row in &legends.color_rows {
        let swatch = scene
            .find_child(*row, "rect")
            .and_then(|rect| scene.style(rect, "fill"))
            .and_then(Rgb::from_hex)
            .map(Color::from)
            .unwrap_or(TEXT_PRIMARY);
        lines.push(Line::from(vec![
            Span::styled("██", Style::default().fg(swatch)),
            Span::raw(" "),
            Span::styled(legend_text(scene, *row), Style::default().fg(TEXT_PRIMARY)),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Icons",
        Style::default()
            .fg(CYAN_PRIMARY)
            .add_modifier(Modifier::BOLD),
    )));
    for row in &legends.icon_rows {
        let icon = child_with_class(scene, *row, "legend-icon")
            .map(|node| scene.text_content(node))
            .unwrap_or_default();
        lines.push(Line::from(vec![
            Span::raw(icon),
            Span::raw(" "),
            Span::styled(legend_text(scene, *row), Style::default().fg(TEXT_PRIMARY)),
        ]));
    }

    let block = Block::default()
        .title(" Legend ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_PRIMARY));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn legend_text(scene: &Scene, row: NodeId) -> String {
    child_with_class(scene, row, "legend-text")
        .map(|node| scene.text_content(node))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use crate::models::Dataset;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_render_legend_lists_every_status() {
        let data = r#"[{"stakeholder": "Patients", "levels": [
            {"level": "Cognitive Companions", "similarWork": [
                {"name": "X", "link": "https://example.org/x", "benefits": "b", "challenges": "c",
                 "technologies": "t", "ethicalConsiderations": "e",
                 "implementationStatus": "Emerging", "impact": "i"}
            ]}
        ]}]"#;
        let dataset = Dataset::from_source(data, "inline").unwrap();
        let grid = GridController::mount(&dataset, Canvas::default()).unwrap();

        let mut terminal = Terminal::new(TestBackend::new(30, 14)).unwrap();
        terminal
            .draw(|frame| render_legend(frame, frame.area(), &grid))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        for label in ["Widely adopted", "Growing adoption", "Emerging"] {
            assert_eq!(text.matches(label).count(), 2, "{label}");
        }
    }
}
