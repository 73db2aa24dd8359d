//! Error type shared by the dataset loader, the renderers and the controller.

use thiserror::Error;

use crate::models::Level;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse dataset from {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Dataset contains no stakeholders")]
    EmptyDataset,

    #[error("Cell {stakeholder} - {level} has no similar work")]
    MalformedCell { stakeholder: String, level: Level },

    #[error("Mount point #{0} not found in document")]
    MountPointMissing(String),

    #[error("No cell for {stakeholder} - {level}")]
    CellNotFound { stakeholder: String, level: Level },

    #[error("Invalid cell selector {0:?}: expected STAKEHOLDER::LEVEL")]
    InvalidSelector(String),
}

pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_cell_message() {
        let err = GridError::MalformedCell {
            stakeholder: "Patients".to_string(),
            level: Level::Companions,
        };
        assert_eq!(
            err.to_string(),
            "Cell Patients - Cognitive Companions has no similar work"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: GridError = io.into();
        assert!(matches!(err, GridError::Io(_)));
    }
}
