//! UI helper functions

use ratatui::layout::Rect;

use crate::scene::{NodeId, Scene};

/// Simple text wrapping helper
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.chars().count() + 1 + word.chars().count() <= max_width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(current_line);
            current_line = word.to_string();
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Truncate to `max_width` characters, marking the cut with "..."
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.chars().count() <= max_width {
        return text.to_string();
    }
    let take_chars = max_width.saturating_sub(3);
    let truncated: String = text.chars().take(take_chars).collect();
    format!("{}...", truncated)
}

/// A rect of `percent_x` × `percent_y` of `area`, centered in it
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width.saturating_mul(percent_x.min(100)) / 100;
    let height = area.height.saturating_mul(percent_y.min(100)) / 100;
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// First child element of `node` carrying `class`
pub fn child_with_class(scene: &Scene, node: NodeId, class: &str) -> Option<NodeId> {
    scene
        .child_elements(node)
        .into_iter()
        .find(|child| scene.has_class(*child, class))
}
