//! Cell rendering
//!
//! Each cell becomes a translated group holding the status-colored
//! rectangle, the status glyph and a vertically centered block of work
//! names. Drawing is additive: rendering the same records twice yields
//! duplicate groups.

use crate::canvas::Canvas;
use crate::error::{GridError, Result};
use crate::models::CellRecord;
use crate::scale::Scales;
use crate::scene::{format_number, NodeId, Scene};
use crate::theme::{self, Rgb};

/// Scene nodes produced for one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedCell {
    pub group: NodeId,
    pub rect: NodeId,
    pub fill: Rgb,
}

/// Lines shown inside a cell. When the names do not fit, the last slot
/// becomes an "and N more" line counting every name not shown.
pub fn label_lines<'a, I>(names: I, max_lines: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let names: Vec<&str> = names.into_iter().collect();
    if names.len() <= max_lines {
        return names.into_iter().map(str::to_string).collect();
    }
    if max_lines == 0 {
        return Vec::new();
    }

    let shown = max_lines - 1;
    let mut lines: Vec<String> = names[..shown].iter().map(|name| name.to_string()).collect();
    lines.push(format!("and {} more", names.len() - shown));
    lines
}

/// Draw one cell into `plot`
pub fn render_cell(
    scene: &mut Scene,
    plot: NodeId,
    index: usize,
    cell: &CellRecord,
    scales: &Scales,
    canvas: &Canvas,
) -> Result<RenderedCell> {
    let status = cell
        .primary_status()
        .ok_or_else(|| GridError::MalformedCell {
            stakeholder: cell.stakeholder.clone(),
            level: cell.level,
        })?;
    let (x, y) = scales
        .origin(&cell.stakeholder, cell.level)
        .ok_or_else(|| GridError::CellNotFound {
            stakeholder: cell.stakeholder.clone(),
            level: cell.level,
        })?;
    let band_width = scales.x.bandwidth();
    let band_height = scales.y.bandwidth();
    let fill = scales.color.color(status);

    let group = scene
        .append(plot, "g")
        .class("cell")
        .attr(
            "transform",
            format!("translate({}, {})", format_number(x), format_number(y)),
        )
        .attr("data-index", index)
        .node();

    let rect = scene
        .append(group, "rect")
        .attr("width", band_width)
        .attr("height", band_height)
        .attr("stroke", theme::CELL_STROKE)
        .attr("stroke-width", 1.0)
        .attr("fill", fill.to_hex())
        .node();

    scene
        .append(group, "text")
        .class("cell-icon")
        .attr("x", 5.0)
        .attr("y", 15.0)
        .attr("text-anchor", "start")
        .attr("alignment-baseline", "hanging")
        .text(theme::status_glyph(status));

    let lines = label_lines(cell.work_names(), canvas.max_label_lines);
    let half_line = canvas.label_line_height / 2.0;
    let block_top = band_height / 2.0 - lines.len().saturating_sub(1) as f64 * half_line;
    let text = scene
        .append(group, "text")
        .class("cell-text")
        .attr("x", band_width / 2.0)
        .attr("y", block_top)
        .attr("dy", 0.0)
        .node();
    for (line_index, line) in lines.iter().enumerate() {
        let dy = if line_index == 0 {
            0.0
        } else {
            canvas.label_line_height
        };
        scene
            .append(text, "tspan")
            .attr("x", band_width / 2.0)
            .attr("dy", dy)
            .text(line);
    }

    Ok(RenderedCell { group, rect, fill })
}

/// Draw every record, in order
pub fn render_cells(
    scene: &mut Scene,
    plot: NodeId,
    cells: &[CellRecord],
    scales: &Scales,
    canvas: &Canvas,
) -> Result<Vec<RenderedCell>> {
    cells
        .iter()
        .enumerate()
        .map(|(index, cell)| render_cell(scene, plot, index, cell, scales, canvas))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Dataset, ImplementationStatus, Level, WorkItem};

    fn work(name: &str, status: ImplementationStatus) -> WorkItem {
        WorkItem {
            name: name.to_string(),
            link: String::new(),
            benefits: String::new(),
            challenges: String::new(),
            technologies: String::new(),
            ethical_considerations: String::new(),
            implementation_status: status,
            impact: String::new(),
        }
    }

    fn setup(cell: &CellRecord) -> (Scene, NodeId, Scales, Canvas) {
        let json = format!(
            r#"[{{"stakeholder": "{}", "levels": []}}]"#,
            cell.stakeholder
        );
        let dataset = Dataset::from_source(&json, "inline").unwrap();
        let canvas = Canvas::default();
        let scales = Scales::build(&dataset, &canvas);
        let scene = Scene::new("g");
        let plot = scene.root();
        (scene, plot, scales, canvas)
    }

    fn tspans(scene: &Scene, group: NodeId) -> Vec<String> {
        let text = scene
            .child_elements(group)
            .into_iter()
            .find(|node| scene.has_class(*node, "cell-text"))
            .unwrap();
        scene
            .child_elements(text)
            .into_iter()
            .map(|tspan| scene.text_content(tspan))
            .collect()
    }

    #[test]
    fn test_label_lines_fits() {
        let names = ["a", "b", "c", "d"];
        assert_eq!(label_lines(names, 4), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_label_lines_overflow() {
        let names = ["a", "b", "c", "d", "e"];
        assert_eq!(label_lines(names, 4), vec!["a", "b", "c", "and 2 more"]);
        let many = ["a", "b", "c", "d", "e", "f", "g"];
        assert_eq!(label_lines(many, 4).last().unwrap(), "and 4 more");
    }

    #[test]
    fn test_label_lines_zero_cap() {
        assert!(label_lines(["a"], 0).is_empty());
        assert!(label_lines(Vec::<&str>::new(), 0).is_empty());
    }

    #[test]
    fn test_render_cell_structure() {
        let cell = CellRecord {
            stakeholder: "Patients".to_string(),
            level: Level::Colleagues,
            similar_work: vec![
                work("One", ImplementationStatus::GrowingAdoption),
                work("Two", ImplementationStatus::Emerging),
            ],
        };
        let (mut scene, plot, scales, canvas) = setup(&cell);
        let rendered = render_cell(&mut scene, plot, 0, &cell, &scales, &canvas).unwrap();

        assert_eq!(rendered.fill.to_hex(), "#FFC107");
        assert_eq!(scene.attr(rendered.rect, "fill"), Some("#FFC107"));
        assert_eq!(scene.attr(rendered.rect, "stroke"), Some("black"));
        assert_eq!(scene.attr(rendered.rect, "stroke-width"), Some("1"));

        let x = format_number(scales.x.position("Cognitive Colleagues").unwrap());
        let y = format_number(scales.y.position("Patients").unwrap());
        assert_eq!(
            scene.attr(rendered.group, "transform"),
            Some(format!("translate({}, {})", x, y).as_str())
        );

        let icon = scene
            .child_elements(rendered.group)
            .into_iter()
            .find(|node| scene.has_class(*node, "cell-icon"))
            .unwrap();
        assert_eq!(scene.text_content(icon), "🔄");
        assert_eq!(tspans(&scene, rendered.group), vec!["One", "Two"]);
    }

    #[test]
    fn test_render_cell_label_block_is_centered() {
        let cell = CellRecord {
            stakeholder: "Patients".to_string(),
            level: Level::Companions,
            similar_work: (0..3)
                .map(|i| work(&format!("W{}", i), ImplementationStatus::Emerging))
                .collect(),
        };
        let (mut scene, plot, scales, canvas) = setup(&cell);
        let rendered = render_cell(&mut scene, plot, 0, &cell, &scales, &canvas).unwrap();
        let text = scene.child_elements(rendered.group)[2];
        let expected = scales.y.bandwidth() / 2.0 - 12.0;
        assert_eq!(scene.attr(text, "y"), Some(format_number(expected).as_str()));
        let dys: Vec<&str> = scene
            .child_elements(text)
            .into_iter()
            .map(|tspan| scene.attr(tspan, "dy").unwrap())
            .collect();
        assert_eq!(dys, vec!["0", "12", "12"]);
    }

    #[test]
    fn test_render_cell_overflow_line() {
        let cell = CellRecord {
            stakeholder: "Patients".to_string(),
            level: Level::Collectives,
            similar_work: (0..5)
                .map(|i| work(&format!("W{}", i), ImplementationStatus::WidelyAdopted))
                .collect(),
        };
        let (mut scene, plot, scales, canvas) = setup(&cell);
        let rendered = render_cell(&mut scene, plot, 0, &cell, &scales, &canvas).unwrap();
        assert_eq!(
            tspans(&scene, rendered.group),
            vec!["W0", "W1", "W2", "and 2 more"]
        );
    }

    #[test]
    fn test_render_cell_empty_work_fails() {
        let cell = CellRecord {
            stakeholder: "Patients".to_string(),
            level: Level::Companions,
            similar_work: Vec::new(),
        };
        let (mut scene, plot, scales, canvas) = setup(&cell);
        let result = render_cell(&mut scene, plot, 0, &cell, &scales, &canvas);
        assert!(matches!(result, Err(GridError::MalformedCell { .. })));
    }

    #[test]
    fn test_render_cell_unknown_stakeholder_fails() {
        let cell = CellRecord {
            stakeholder: "Patients".to_string(),
            level: Level::Companions,
            similar_work: vec![work("X", ImplementationStatus::Emerging)],
        };
        let (mut scene, plot, scales, canvas) = setup(&cell);
        let stranger = CellRecord {
            stakeholder: "Regulators".to_string(),
            ..cell
        };
        let result = render_cell(&mut scene, plot, 0, &stranger, &scales, &canvas);
        assert!(matches!(result, Err(GridError::CellNotFound { .. })));
    }
}
