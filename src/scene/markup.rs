//! Markup serialization for the scene graph

use std::fmt::Write;

use super::{NodeId, NodeKind, Scene};

/// Elements written without a closing tag
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "meta"];

/// SVG shapes written self-closing when they have no children
const SELF_CLOSING_SHAPES: &[&str] = &["rect", "line", "path", "circle"];

/// HTML-escape text content
pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// HTML-escape an attribute value (double-quoted)
pub fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

impl Scene {
    /// Serialize `id` and its subtree, indenting nested elements by two spaces
    pub fn to_markup(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_node(&mut out, id, 0);
        out
    }

    fn write_node(&self, out: &mut String, id: NodeId, depth: usize) {
        let indent = "  ".repeat(depth);
        let Some(kind) = self.kind(id) else {
            return;
        };

        let (tag, attrs, styles) = match kind {
            NodeKind::Text(text) => {
                let _ = writeln!(out, "{}{}", indent, escape_text(text));
                return;
            }
            NodeKind::Element { tag, attrs, styles } => (tag, attrs, styles),
        };

        let mut open = format!("<{}", tag);
        for (name, value) in attrs {
            let _ = write!(open, " {}=\"{}\"", name, escape_attr(value));
        }
        if !styles.is_empty() {
            let declarations: Vec<String> = styles
                .iter()
                .map(|(name, value)| format!("{}: {}", name, value))
                .collect();
            let _ = write!(open, " style=\"{}\"", escape_attr(&declarations.join("; ")));
        }

        let children = self.children(id);
        if VOID_ELEMENTS.contains(&tag.as_str()) {
            let _ = writeln!(out, "{}{}>", indent, open);
            return;
        }
        if children.is_empty() && SELF_CLOSING_SHAPES.contains(&tag.as_str()) {
            let _ = writeln!(out, "{}{}/>", indent, open);
            return;
        }

        // Text-only elements stay on one line
        let text_only = children
            .iter()
            .all(|child| matches!(self.kind(*child), Some(NodeKind::Text(_))));
        if text_only {
            let _ = writeln!(
                out,
                "{}{}>{}</{}>",
                indent,
                open,
                escape_text(&self.text_content(id)),
                tag
            );
            return;
        }

        let _ = writeln!(out, "{}{}>", indent, open);
        for child in children {
            self.write_node(out, *child, depth + 1);
        }
        let _ = writeln!(out, "{}</{}>", indent, tag);
    }
}
