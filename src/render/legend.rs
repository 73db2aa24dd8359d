//! Color and glyph legends, stacked to the right of the plot.

use crate::canvas::Canvas;
use crate::scale::ColorScale;
use crate::scene::{format_number, NodeId, Scene};
use crate::theme;

/// Row groups of both legends, top to bottom
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LegendNodes {
    pub color_rows: Vec<NodeId>,
    pub icon_rows: Vec<NodeId>,
}

/// Vertical offset of icon legend row `row`
pub fn icon_row_offset(color_rows: usize, row: usize, canvas: &Canvas) -> f64 {
    color_rows as f64 * canvas.legend_row_height
        + row as f64 * canvas.legend_row_height
        + canvas.legend_gap
}

pub fn render_legends(
    scene: &mut Scene,
    plot: NodeId,
    color: &ColorScale,
    canvas: &Canvas,
) -> LegendNodes {
    let swatch_x = canvas.plot_width() + 20.0;
    let icon_x = canvas.plot_width() + 25.0;
    let label_x = canvas.plot_width() + 45.0;
    let mut nodes = LegendNodes::default();

    for (row, status) in color.domain().iter().enumerate() {
        let offset = row as f64 * canvas.legend_row_height;
        let group = scene
            .append(plot, "g")
            .class("legend")
            .attr("transform", format!("translate(0, {})", format_number(offset)))
            .node();
        scene
            .append(group, "rect")
            .attr("x", swatch_x)
            .attr("width", canvas.legend_swatch)
            .attr("height", canvas.legend_swatch)
            .style("fill", color.color(*status).to_hex());
        legend_label(scene, group, label_x, status.label());
        nodes.color_rows.push(group);
    }

    let color_rows = color.domain().len();
    for (row, status) in color.domain().iter().enumerate() {
        let offset = icon_row_offset(color_rows, row, canvas);
        let group = scene
            .append(plot, "g")
            .class("icon-legend")
            .attr("transform", format!("translate(0, {})", format_number(offset)))
            .node();
        scene
            .append(group, "text")
            .class("legend-icon")
            .attr("x", icon_x)
            .attr("y", 9.0)
            .attr("dy", ".35em")
            .text(theme::status_glyph(*status));
        legend_label(scene, group, label_x, status.label());
        nodes.icon_rows.push(group);
    }

    nodes
}

fn legend_label(scene: &mut Scene, group: NodeId, x: f64, label: &str) {
    scene
        .append(group, "text")
        .class("legend-text")
        .attr("x", x)
        .attr("y", 9.0)
        .attr("dy", ".35em")
        .text(label);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render() -> (Scene, LegendNodes) {
        let mut scene = Scene::new("g");
        let plot = scene.root();
        let nodes = render_legends(&mut scene, plot, &ColorScale, &Canvas::default());
        (scene, nodes)
    }

    #[test]
    fn test_color_legend_rows() {
        let (scene, nodes) = render();
        assert_eq!(nodes.color_rows.len(), 3);
        let transforms: Vec<&str> = nodes
            .color_rows
            .iter()
            .map(|row| scene.attr(*row, "transform").unwrap())
            .collect();
        assert_eq!(
            transforms,
            vec!["translate(0, 0)", "translate(0, 20)", "translate(0, 40)"]
        );

        let first = nodes.color_rows[0];
        let swatch = scene.find_child(first, "rect").unwrap();
        assert_eq!(scene.style(swatch, "fill"), Some("#4CAF50"));
        assert_eq!(scene.attr(swatch, "x"), Some("620"));
        assert_eq!(scene.text_content(first), "Widely adopted");
    }

    #[test]
    fn test_icon_legend_sits_below_color_legend() {
        let (scene, nodes) = render();
        let transforms: Vec<&str> = nodes
            .icon_rows
            .iter()
            .map(|row| scene.attr(*row, "transform").unwrap())
            .collect();
        assert_eq!(
            transforms,
            vec!["translate(0, 70)", "translate(0, 90)", "translate(0, 110)"]
        );
        assert_eq!(scene.text_content(nodes.icon_rows[2]), "✨Emerging");
    }

    #[test]
    fn test_icon_row_offset() {
        let canvas = Canvas::default();
        assert_eq!(icon_row_offset(3, 0, &canvas), 70.0);
        assert_eq!(icon_row_offset(3, 1, &canvas), 90.0);
    }
}
