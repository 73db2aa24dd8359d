//! Flattened grid cells
//!
//! The nested per-stakeholder/per-level dataset is flattened into one
//! record per visual cell before rendering.

use serde::Serialize;

use super::dataset::{Dataset, WorkItem};
use super::enums::{ImplementationStatus, Level};

/// One (stakeholder, level) pair and its work items
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellRecord {
    pub stakeholder: String,
    pub level: Level,
    pub similar_work: Vec<WorkItem>,
}

impl CellRecord {
    /// Status of the first work item; the only one that drives color and glyph
    pub fn primary_status(&self) -> Option<ImplementationStatus> {
        self.similar_work
            .first()
            .map(|work| work.implementation_status)
    }

    /// "{stakeholder} - {level}", used by the tooltip and the modal heading
    pub fn title(&self) -> String {
        format!("{} - {}", self.stakeholder, self.level)
    }

    pub fn work_names(&self) -> impl Iterator<Item = &str> {
        self.similar_work.iter().map(|work| work.name.as_str())
    }
}

/// Flatten stakeholders in order and, within each, levels in their given order
pub fn flatten(dataset: &Dataset) -> Vec<CellRecord> {
    dataset
        .stakeholders
        .iter()
        .flat_map(|record| {
            record.levels.iter().map(move |entry| CellRecord {
                stakeholder: record.stakeholder.clone(),
                level: entry.level,
                similar_work: entry.similar_work.clone(),
            })
        })
        .collect()
}
