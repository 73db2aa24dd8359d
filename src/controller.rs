//! Top-level rendering controller
//!
//! `GridController` mounts a dataset into a document: it builds the scales,
//! flattens the cells, draws axes, cells and legends once, and then owns the
//! scene together with the per-cell bindings and the tooltip/modal
//! singletons. All pointer input goes through it.

use tracing::info;

use crate::canvas::Canvas;
use crate::error::{GridError, Result};
use crate::interaction::{CellBinding, Overlays, PagePoint, PointerEvent, TooltipHandle};
use crate::modal::{self, ModalHandle};
use crate::models::{flatten, Dataset, HoverState, Level};
use crate::render::{render_axis, render_cells, render_legends, AxisOrient, LegendNodes};
use crate::scale::Scales;
use crate::scene::{format_number, NodeId, Scene, MOUNT_ID};

#[derive(Debug, Clone)]
pub struct GridController {
    canvas: Canvas,
    scene: Scene,
    scales: Scales,
    plot: NodeId,
    legends: LegendNodes,
    cells: Vec<CellBinding>,
    overlays: Overlays,
}

impl GridController {
    /// Render `dataset` into a fresh document at `#grid-container`
    pub fn mount(dataset: &Dataset, canvas: Canvas) -> Result<Self> {
        Self::mount_into(Scene::document(), MOUNT_ID, dataset, canvas)
    }

    /// Render `dataset` into the element of `scene` whose id is `mount_id`
    pub fn mount_into(
        mut scene: Scene,
        mount_id: &str,
        dataset: &Dataset,
        canvas: Canvas,
    ) -> Result<Self> {
        let mount = scene
            .find_by_id(mount_id)
            .ok_or_else(|| GridError::MountPointMissing(mount_id.to_string()))?;
        let scales = Scales::build(dataset, &canvas);

        let svg = scene
            .append(mount, "svg")
            .attr("width", canvas.svg_width())
            .attr("height", canvas.svg_height())
            .node();
        let plot = scene
            .append(svg, "g")
            .attr(
                "transform",
                format!(
                    "translate({}, {})",
                    format_number(canvas.margin.left),
                    format_number(canvas.margin.top)
                ),
            )
            .node();

        render_axis(
            &mut scene,
            plot,
            &scales.x,
            AxisOrient::Bottom,
            canvas.plot_height(),
            canvas.plot_width(),
        );
        render_axis(
            &mut scene,
            plot,
            &scales.y,
            AxisOrient::Left,
            0.0,
            canvas.plot_height(),
        );

        let records = flatten(dataset);
        let rendered = render_cells(&mut scene, plot, &records, &scales, &canvas)?;
        let cells: Vec<CellBinding> = records
            .into_iter()
            .zip(rendered)
            .map(|(record, nodes)| CellBinding::new(record, nodes))
            .collect();

        let legends = render_legends(&mut scene, plot, &scales.color, &canvas);
        let root = scene.root();
        let tooltip = TooltipHandle::create(&mut scene, root);

        info!(
            stakeholders = scales.y.len(),
            cells = cells.len(),
            "mounted grid"
        );

        Ok(Self {
            canvas,
            scene,
            scales,
            plot,
            legends,
            cells,
            overlays: Overlays {
                tooltip: Some(tooltip),
                modal: None,
            },
        })
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn scales(&self) -> &Scales {
        &self.scales
    }

    /// The translated plot group
    pub fn plot(&self) -> NodeId {
        self.plot
    }

    pub fn legends(&self) -> &LegendNodes {
        &self.legends
    }

    /// Bindings in flattening order
    pub fn cells(&self) -> &[CellBinding] {
        &self.cells
    }

    pub fn tooltip(&self) -> Option<TooltipHandle> {
        self.overlays.tooltip
    }

    pub fn modal(&self) -> Option<ModalHandle> {
        self.overlays.modal
    }

    /// First cell for the pair, in flattening order
    pub fn cell_index(&self, stakeholder: &str, level: Level) -> Option<usize> {
        self.cells
            .iter()
            .position(|cell| cell.data().stakeholder == stakeholder && cell.data().level == level)
    }

    /// Cell at a (row, column) grid position, rows in stakeholder band order
    pub fn cell_at(&self, row: usize, column: usize) -> Option<usize> {
        let stakeholder = self.scales.y.domain().get(row)?;
        let level = *Level::ALL.get(column)?;
        self.cell_index(stakeholder, level)
    }

    /// (row, column) grid position of a cell
    pub fn grid_position(&self, index: usize) -> Option<(usize, usize)> {
        let cell = self.cells.get(index)?;
        let row = self.scales.y.index_of(&cell.data().stakeholder)?;
        Some((row, cell.data().level.column()))
    }

    /// Cell currently under the pointer
    pub fn hovered(&self) -> Option<usize> {
        self.cells
            .iter()
            .position(|cell| cell.hover() == HoverState::Hovered)
    }

    /// Center of a cell in page coordinates
    pub fn cell_center(&self, index: usize) -> Option<PagePoint> {
        let cell = self.cells.get(index)?;
        let (x, y) = self
            .scales
            .origin(&cell.data().stakeholder, cell.data().level)?;
        Some(PagePoint {
            x: self.canvas.margin.left + x + self.scales.x.bandwidth() / 2.0,
            y: self.canvas.margin.top + y + self.scales.y.bandwidth() / 2.0,
        })
    }

    /// Deliver a pointer event to the element it targets. Returns false when
    /// nothing handles events on `target`.
    pub fn dispatch(&mut self, target: NodeId, event: PointerEvent) -> bool {
        if let Some(modal) = self.overlays.modal {
            if target == modal.close_control() {
                return matches!(event, PointerEvent::Click) && self.close_modal();
            }
        }
        match self.cells.iter().position(|cell| cell.rect() == target) {
            Some(index) => self.dispatch_cell(index, event),
            None => false,
        }
    }

    /// Deliver a pointer event to cell `index`
    pub fn dispatch_cell(&mut self, index: usize, event: PointerEvent) -> bool {
        let Self {
            scene,
            cells,
            overlays,
            ..
        } = self;
        match cells.get_mut(index) {
            Some(cell) => {
                cell.handle(event, scene, overlays);
                true
            }
            None => false,
        }
    }

    /// Move the pointer onto `target` (or off the grid), leaving the
    /// previously hovered cell first
    pub fn move_pointer(&mut self, target: Option<usize>, at: PagePoint) {
        let current = self.hovered();
        if current == target {
            return;
        }
        if let Some(previous) = current {
            self.dispatch_cell(previous, PointerEvent::Leave);
        }
        if let Some(next) = target {
            self.dispatch_cell(next, PointerEvent::Enter(at));
        }
    }

    /// Click cell `index`, opening its detail modal
    pub fn click(&mut self, index: usize) -> bool {
        self.dispatch_cell(index, PointerEvent::Click)
    }

    /// Activate the modal's close control
    pub fn close_modal(&mut self) -> bool {
        modal::close_modal(&mut self.scene, &mut self.overlays.modal)
    }
}
