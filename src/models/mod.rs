//! Data models for the grid
//!
//! This module contains the core data structures:
//! - Dataset types for loading the similar-work matrix
//! - Flattened cell records bound one-to-one to visual cells
//! - Enums for statuses, levels and hover state

pub mod cell;
pub mod dataset;
pub mod enums;

// Re-exports for convenient access
pub use cell::{flatten, CellRecord};
pub use dataset::{Dataset, LevelEntry, StakeholderRecord, WorkItem};
pub use enums::{HoverState, ImplementationStatus, Level};
