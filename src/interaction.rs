//! Pointer interaction for grid cells
//!
//! Every rendered cell is paired with a `CellBinding` that carries the cell's
//! data and reacts to enter, leave and click. The tooltip and the modal are
//! shared by all cells and live in `Overlays`, owned by the controller and
//! lent to whichever binding is handling an event.

use tracing::debug;

use crate::models::{CellRecord, HoverState};
use crate::modal::{self, ModalHandle};
use crate::render::RenderedCell;
use crate::scene::{format_number, NodeId, Scene};
use crate::theme::Rgb;

/// Second tooltip line
pub const TOOLTIP_HINT: &str = "Click for more details.";

/// Distance between the pointer and the tooltip's top-left corner
pub const TOOLTIP_OFFSET: f64 = 10.0;

/// Pointer position in page coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PagePoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Enter(PagePoint),
    Leave,
    Click,
}

/// The single floating tooltip: `<strong>title</strong><br>hint`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooltipHandle {
    node: NodeId,
    title: NodeId,
}

impl TooltipHandle {
    /// Append a hidden, untitled tooltip to `parent`
    pub fn create(scene: &mut Scene, parent: NodeId) -> Self {
        let node = scene
            .append(parent, "div")
            .class("tooltip")
            .style("opacity", 0.0)
            .node();
        let title = scene.append(node, "strong").node();
        scene.append(node, "br");
        scene.append_text(node, TOOLTIP_HINT);
        Self { node, title }
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Retitle, move next to `at` and reveal
    pub fn show(&self, scene: &mut Scene, title: &str, at: PagePoint) {
        scene.select(self.title).text(title);
        scene
            .select(self.node)
            .style("opacity", 1.0)
            .style("left", format!("{}px", format_number(at.x + TOOLTIP_OFFSET)))
            .style("top", format!("{}px", format_number(at.y + TOOLTIP_OFFSET)));
    }

    /// Hide without removing; content and position are kept
    pub fn hide(&self, scene: &mut Scene) {
        scene.select(self.node).style("opacity", 0.0);
    }

    pub fn is_visible(&self, scene: &Scene) -> bool {
        scene.style(self.node, "opacity") == Some("1")
    }
}

/// Shared overlay singletons
#[derive(Debug, Clone, Default)]
pub struct Overlays {
    pub tooltip: Option<TooltipHandle>,
    pub modal: Option<ModalHandle>,
}

/// One cell's data plus its enter/leave/click behavior
#[derive(Debug, Clone)]
pub struct CellBinding {
    data: CellRecord,
    nodes: RenderedCell,
    hover: HoverState,
}

impl CellBinding {
    pub fn new(data: CellRecord, nodes: RenderedCell) -> Self {
        Self {
            data,
            nodes,
            hover: HoverState::Idle,
        }
    }

    pub fn data(&self) -> &CellRecord {
        &self.data
    }

    pub fn group(&self) -> NodeId {
        self.nodes.group
    }

    /// Event target of the cell
    pub fn rect(&self) -> NodeId {
        self.nodes.rect
    }

    pub fn fill(&self) -> Rgb {
        self.nodes.fill
    }

    pub fn hover(&self) -> HoverState {
        self.hover
    }

    pub fn handle(&mut self, event: PointerEvent, scene: &mut Scene, overlays: &mut Overlays) {
        match event {
            PointerEvent::Enter(at) => self.on_enter(scene, overlays, at),
            PointerEvent::Leave => self.on_leave(scene, overlays),
            PointerEvent::Click => self.on_click(scene, overlays),
        }
    }

    /// Show the tooltip near the pointer and thicken the border. The tooltip
    /// is created here if the overlays were not mounted with one.
    pub fn on_enter(&mut self, scene: &mut Scene, overlays: &mut Overlays, at: PagePoint) {
        let root = scene.root();
        let tooltip = *overlays
            .tooltip
            .get_or_insert_with(|| TooltipHandle::create(scene, root));
        tooltip.show(scene, &self.data.title(), at);
        scene.select(self.nodes.rect).attr("stroke-width", 2.0);
        self.hover = HoverState::Hovered;
        debug!(stakeholder = %self.data.stakeholder, level = %self.data.level, "pointer enter");
    }

    /// Hide the tooltip and restore the border
    pub fn on_leave(&mut self, scene: &mut Scene, overlays: &mut Overlays) {
        if let Some(tooltip) = overlays.tooltip {
            tooltip.hide(scene);
        }
        scene.select(self.nodes.rect).attr("stroke-width", 1.0);
        self.hover = HoverState::Idle;
        debug!(stakeholder = %self.data.stakeholder, level = %self.data.level, "pointer leave");
    }

    /// Open the detail modal for this cell; hover state is untouched
    pub fn on_click(&self, scene: &mut Scene, overlays: &mut Overlays) {
        modal::open_modal(scene, &mut overlays.modal, &self.data, self.nodes.fill);
    }
}
