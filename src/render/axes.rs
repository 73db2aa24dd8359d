//! Band axes: levels along the bottom, stakeholders down the left side.

use crate::scale::BandScale;
use crate::scene::{format_number, NodeId, Scene};

const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrient {
    Bottom,
    Left,
}

/// Draw an axis for `scale` into `parent`; returns the axis group
pub fn render_axis(
    scene: &mut Scene,
    parent: NodeId,
    scale: &BandScale,
    orient: AxisOrient,
    offset: f64,
    range_end: f64,
) -> NodeId {
    let (class, transform, anchor, domain_path) = match orient {
        AxisOrient::Bottom => (
            "axis axis--x",
            format!("translate(0, {})", format_number(offset)),
            "middle",
            format!(
                "M0,{tick}V0H{end}V{tick}",
                tick = format_number(TICK_SIZE),
                end = format_number(range_end)
            ),
        ),
        AxisOrient::Left => (
            "axis axis--y",
            format!("translate({}, 0)", format_number(offset)),
            "end",
            format!(
                "M-{tick},0H0V{end}H-{tick}",
                tick = format_number(TICK_SIZE),
                end = format_number(range_end)
            ),
        ),
    };

    let axis = scene
        .append(parent, "g")
        .class(class)
        .attr("transform", transform)
        .attr("fill", "none")
        .attr("font-size", 10.0)
        .attr("font-family", "sans-serif")
        .attr("text-anchor", anchor)
        .node();
    scene
        .append(axis, "path")
        .class("domain")
        .attr("stroke", "currentColor")
        .attr("d", domain_path);

    for name in scale.domain() {
        let Some(position) = scale.position(name) else {
            continue;
        };
        let center = position + scale.bandwidth() / 2.0;
        let tick_transform = match orient {
            AxisOrient::Bottom => format!("translate({}, 0)", format_number(center)),
            AxisOrient::Left => format!("translate(0, {})", format_number(center)),
        };
        let tick = scene
            .append(axis, "g")
            .class("tick")
            .attr("transform", tick_transform)
            .node();

        match orient {
            AxisOrient::Bottom => {
                scene
                    .append(tick, "line")
                    .attr("stroke", "currentColor")
                    .attr("y2", TICK_SIZE);
                scene
                    .append(tick, "text")
                    .attr("fill", "currentColor")
                    .attr("y", TICK_SIZE + TICK_PADDING)
                    .attr("dy", "0.71em")
                    .text(name);
            }
            AxisOrient::Left => {
                scene
                    .append(tick, "line")
                    .attr("stroke", "currentColor")
                    .attr("x2", -TICK_SIZE);
                scene
                    .append(tick, "text")
                    .attr("fill", "currentColor")
                    .attr("x", -(TICK_SIZE + TICK_PADDING))
                    .attr("dy", "0.32em")
                    .text(name);
            }
        }
    }

    axis
}
