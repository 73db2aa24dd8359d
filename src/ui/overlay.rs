//! Tooltip and detail modal overlays
//!
//! Both are drawn from the overlay nodes held by the controller, so the
//! terminal shows exactly what an HTML export of the same state would.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::helpers::{centered_rect, wrap_text};
use crate::controller::GridController;
use crate::scene::{NodeId, NodeKind, Scene};
use crate::theme::{Rgb, BG_SECONDARY, BORDER_SUBTLE, TEXT_PRIMARY};

/// Draw the tooltip next to the hovered cell, if it is visible
pub fn render_tooltip(frame: &mut Frame, grid: &GridController, cell_areas: &[(usize, Rect)]) {
    let scene = grid.scene();
    let Some(tooltip) = grid.tooltip() else {
        return;
    };
    if !tooltip.is_visible(scene) {
        return;
    }
    let Some(hovered) = grid.hovered() else {
        return;
    };
    let Some((_, cell_area)) = cell_areas.iter().find(|(index, _)| *index == hovered) else {
        return;
    };

    let node = tooltip.node();
    let title = scene
        .find_child(node, "strong")
        .map(|strong| scene.text_content(strong))
        .unwrap_or_default();
    let hint: String = scene
        .children(node)
        .iter()
        .filter_map(|child| match scene.kind(*child) {
            Some(NodeKind::Text(text)) => Some(text.as_str()),
            _ => None,
        })
        .collect();

    let lines = vec![
        Line::from(Span::styled(
            title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(hint.clone()),
    ];

    let frame_area = frame.area();
    let width = (title.chars().count().max(hint.chars().count()) as u16 + 2).min(frame_area.width);
    let height = 4u16.min(frame_area.height);

    // Below and to the right of the cell center, pulled back inside the frame
    let x = (cell_area.x + cell_area.width / 2 + 1).min(frame_area.right().saturating_sub(width));
    let y = (cell_area.y + cell_area.height / 2 + 1).min(frame_area.bottom().saturating_sub(height));
    let area = Rect::new(x, y, width, height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY).fg(TEXT_PRIMARY));
    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Draw the detail modal over `area`. `scroll` is clamped to the content.
pub fn render_modal(frame: &mut Frame, area: Rect, grid: &GridController, scroll: &mut u16) {
    let scene = grid.scene();
    let Some(modal) = grid.modal() else {
        return;
    };
    let content = modal.content();

    let background = scene
        .style(content, "background-color")
        .and_then(Rgb::from_hex)
        .map(Color::from)
        .unwrap_or(BG_SECONDARY);
    let foreground = scene
        .style(content, "color")
        .and_then(Rgb::from_hex)
        .map(Color::from)
        .unwrap_or(TEXT_PRIMARY);

    let popup = centered_rect(80, 80, area);
    let block = Block::default()
        .title(" × close (Esc) ")
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .style(Style::default().bg(background).fg(foreground));
    let inner = block.inner(popup);

    let lines = modal_lines(scene, content, inner.width.saturating_sub(1) as usize);
    let max_scroll = lines.len().saturating_sub(inner.height as usize);
    *scroll = (*scroll).min(max_scroll.min(u16::MAX as usize) as u16);

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(block).scroll((*scroll, 0)),
        popup,
    );
}

/// Lay out the modal content as terminal lines wrapped to `width`
pub fn modal_lines(scene: &Scene, content: NodeId, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for child in scene.child_elements(content) {
        match scene.tag(child) {
            Some("h2") => {
                let style = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
                push_wrapped(&mut lines, &scene.text_content(child), width, style);
                lines.push(Line::default());
            }
            Some("div") if scene.has_class(child, "work-details") => {
                work_detail_lines(scene, child, width, &mut lines);
            }
            _ => {}
        }
    }

    lines
}

fn push_wrapped(lines: &mut Vec<Line<'static>>, text: &str, width: usize, style: Style) {
    lines.extend(
        wrap_text(text, width)
            .into_iter()
            .map(|line| Line::from(Span::styled(line, style))),
    );
}

fn work_detail_lines(scene: &Scene, details: NodeId, width: usize, lines: &mut Vec<Line<'static>>) {
    for child in scene.child_elements(details) {
        match scene.tag(child) {
            Some("h3") => {
                let style = Style::default().add_modifier(Modifier::BOLD);
                push_wrapped(lines, &scene.text_content(child), width, style);
                if let Some(href) = scene
                    .find_child(child, "a")
                    .and_then(|link| scene.attr(link, "href"))
                {
                    lines.push(Line::from(Span::styled(
                        href.to_string(),
                        Style::default().add_modifier(Modifier::ITALIC),
                    )));
                }
            }
            Some("p") => {
                let label = scene
                    .find_child(child, "strong")
                    .map(|strong| scene.text_content(strong))
                    .unwrap_or_default();
                for (i, line) in wrap_text(&scene.text_content(child), width)
                    .into_iter()
                    .enumerate()
                {
                    // Bold label only when it was not split by wrapping
                    if i == 0 && !label.is_empty() && line.starts_with(label.as_str()) {
                        let rest = line[label.len()..].to_string();
                        lines.push(Line::from(vec![
                            Span::styled(label.clone(), Style::default().add_modifier(Modifier::BOLD)),
                            Span::raw(rest),
                        ]));
                    } else {
                        lines.push(Line::from(line));
                    }
                }
            }
            Some("hr") => lines.push(Line::from("─".repeat(width))),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use crate::interaction::PagePoint;
    use crate::models::Dataset;
    use ratatui::{backend::TestBackend, Terminal};

    const DATA: &str = r#"[{"stakeholder": "Patients", "levels": [
        {"level": "Cognitive Companions", "similarWork": [
            {"name": "Symptom Checker", "link": "https://example.org/x", "benefits": "Faster triage",
             "challenges": "Accuracy", "technologies": "NLP", "ethicalConsiderations": "Consent",
             "implementationStatus": "Emerging", "impact": "High"},
            {"name": "Care Companion", "link": "https://example.org/y", "benefits": "Support",
             "challenges": "Trust", "technologies": "LLM", "ethicalConsiderations": "Privacy",
             "implementationStatus": "Growing adoption", "impact": "Medium"}
        ]}
    ]}]"#;

    fn grid() -> GridController {
        let dataset = Dataset::from_source(DATA, "inline").unwrap();
        GridController::mount(&dataset, Canvas::default()).unwrap()
    }

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_modal_lines_follow_content() {
        let mut grid = grid();
        grid.click(0);
        let content = grid.modal().unwrap().content();
        let lines: Vec<String> = modal_lines(grid.scene(), content, 80)
            .iter()
            .map(text_of)
            .collect();

        assert_eq!(lines[0], "Patients - Cognitive Companions");
        assert!(lines.contains(&"Symptom Checker".to_string()));
        assert!(lines.contains(&"https://example.org/y".to_string()));
        assert!(lines.contains(&"Benefits: Faster triage".to_string()));
        assert!(lines.contains(&"Implementation Status: Growing adoption".to_string()));
        assert_eq!(lines.iter().filter(|line| line.starts_with('─')).count(), 2);
    }

    #[test]
    fn test_modal_lines_wrap_long_values() {
        let mut grid = grid();
        grid.click(0);
        let content = grid.modal().unwrap().content();
        let lines: Vec<String> = modal_lines(grid.scene(), content, 12)
            .iter()
            .map(text_of)
            .collect();
        let benefits = lines.iter().position(|line| line == "Benefits:").unwrap();
        assert_eq!(lines[benefits + 1], "Faster");
        assert_eq!(lines[benefits + 2], "triage");
    }

    #[test]
    fn test_render_modal_clamps_scroll() {
        let mut grid = grid();
        grid.click(0);
        let mut scroll = 500;
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal
            .draw(|frame| render_modal(frame, frame.area(), &grid, &mut scroll))
            .unwrap();
        assert!(scroll < 500);
    }

    #[test]
    fn test_tooltip_only_when_hovered() {
        let mut grid = grid();
        let areas = vec![(0, Rect::new(10, 2, 30, 8))];
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();

        terminal
            .draw(|frame| render_tooltip(frame, &grid, &areas))
            .unwrap();
        let before: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(!before.contains("Click for more details."));

        grid.move_pointer(Some(0), PagePoint { x: 0.0, y: 0.0 });
        terminal
            .draw(|frame| render_tooltip(frame, &grid, &areas))
            .unwrap();
        let after: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(after.contains("Click for more details."));
        assert!(after.contains("Patients - Cognitive Companions"));
    }
}
