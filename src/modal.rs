//! Detail modal
//!
//! A full-screen dimmed overlay listing every work item of one cell. At most
//! one overlay is attached at a time: opening a new one first removes the
//! previous one, and the only way to dismiss it is its close control.

use tracing::info;

use crate::models::{CellRecord, WorkItem};
use crate::scene::{NodeId, Scene};
use crate::theme::{self, Rgb};

/// Glyph of the close control
pub const CLOSE_GLYPH: &str = "×";

/// Nodes of an open modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalHandle {
    overlay: NodeId,
    content: NodeId,
    close: NodeId,
}

impl ModalHandle {
    pub fn overlay(&self) -> NodeId {
        self.overlay
    }

    /// The tinted panel inside the overlay
    pub fn content(&self) -> NodeId {
        self.content
    }

    pub fn close_control(&self) -> NodeId {
        self.close
    }
}

/// Replace whatever modal is open with one describing `cell`
pub fn open_modal(
    scene: &mut Scene,
    current: &mut Option<ModalHandle>,
    cell: &CellRecord,
    fill: Rgb,
) -> ModalHandle {
    close_modal(scene, current);
    for stray in scene.find_by_class("modal") {
        scene.remove(stray);
    }

    let root = scene.root();
    let overlay = scene
        .append(root, "div")
        .class("modal")
        .style("background-color", theme::OVERLAY_DIM)
        .node();
    let content = scene
        .append(overlay, "div")
        .class("modal-content")
        .style("background-color", fill.to_hex())
        .style("color", theme::FOREGROUND_ON_STATUS)
        .node();
    let close = scene
        .append(content, "span")
        .class("close-button")
        .attr("role", "button")
        .text(CLOSE_GLYPH)
        .node();
    scene.append(content, "h2").text(&cell.title());

    for work in &cell.similar_work {
        render_work_details(scene, content, work);
    }

    info!(
        stakeholder = %cell.stakeholder,
        level = %cell.level,
        items = cell.similar_work.len(),
        "opened detail modal"
    );

    let handle = ModalHandle {
        overlay,
        content,
        close,
    };
    *current = Some(handle);
    handle
}

/// Remove the open modal, if any. Returns whether one was open.
pub fn close_modal(scene: &mut Scene, current: &mut Option<ModalHandle>) -> bool {
    match current.take() {
        Some(handle) => {
            scene.remove(handle.overlay);
            info!("closed detail modal");
            true
        }
        None => false,
    }
}

fn render_work_details(scene: &mut Scene, content: NodeId, work: &WorkItem) {
    let details = scene.append(content, "div").class("work-details").node();
    scene
        .append(details, "h3")
        .append("a")
        .attr("href", &work.link)
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
        .text(&work.name);

    let fields = [
        ("Benefits", work.benefits.as_str()),
        ("Challenges", work.challenges.as_str()),
        ("Technologies", work.technologies.as_str()),
        ("Ethical Considerations", work.ethical_considerations.as_str()),
        ("Implementation Status", work.implementation_status.label()),
        ("Impact", work.impact.as_str()),
    ];
    for (label, value) in fields {
        let paragraph = scene.append(details, "p").node();
        scene.append(paragraph, "strong").text(&format!("{}:", label));
        scene.append_text(paragraph, &format!(" {}", value));
    }

    scene.append(details, "hr");
}
