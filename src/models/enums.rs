//! Enums used throughout the grid
//!
//! Statuses and levels are closed sets: the dataset loader rejects anything
//! else, so every color, glyph and column lookup is an exhaustive match.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Adoption status of a similar-work item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImplementationStatus {
    #[serde(rename = "Widely adopted")]
    WidelyAdopted,
    #[serde(rename = "Growing adoption")]
    GrowingAdoption,
    #[serde(rename = "Emerging")]
    Emerging,
}

impl ImplementationStatus {
    /// Legend order
    pub const ALL: [ImplementationStatus; 3] = [
        ImplementationStatus::WidelyAdopted,
        ImplementationStatus::GrowingAdoption,
        ImplementationStatus::Emerging,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ImplementationStatus::WidelyAdopted => "Widely adopted",
            ImplementationStatus::GrowingAdoption => "Growing adoption",
            ImplementationStatus::Emerging => "Emerging",
        }
    }
}

impl fmt::Display for ImplementationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Framework tier, one grid column each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    #[serde(rename = "Cognitive Companions")]
    Companions,
    #[serde(rename = "Cognitive Colleagues")]
    Colleagues,
    #[serde(rename = "Cognitive Collectives")]
    Collectives,
}

impl Level {
    /// Column order; fixed, never derived from the data
    pub const ALL: [Level; 3] = [Level::Companions, Level::Colleagues, Level::Collectives];

    pub fn label(&self) -> &'static str {
        match self {
            Level::Companions => "Cognitive Companions",
            Level::Colleagues => "Cognitive Colleagues",
            Level::Collectives => "Cognitive Collectives",
        }
    }

    /// Look up a level by its display label
    pub fn from_label(label: &str) -> Option<Level> {
        Level::ALL.into_iter().find(|level| level.label() == label.trim())
    }

    /// Column index within `Level::ALL`
    pub fn column(&self) -> usize {
        match self {
            Level::Companions => 0,
            Level::Colleagues => 1,
            Level::Collectives => 2,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Pointer state of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverState {
    #[default]
    Idle,
    Hovered,
}
