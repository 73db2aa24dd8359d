//! Similar-work dataset structures
//!
//! The dataset is a JSON array of stakeholder records, each holding one
//! entry per framework level with the similar work found for that pair.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::enums::{ImplementationStatus, Level};
use crate::error::{GridError, Result};

/// One similar/related work entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
    pub name: String,
    pub link: String,
    pub benefits: String,
    pub challenges: String,
    pub technologies: String,
    pub ethical_considerations: String,
    pub implementation_status: ImplementationStatus,
    pub impact: String,
}

/// Work found for one stakeholder at one level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelEntry {
    pub level: Level,
    pub similar_work: Vec<WorkItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeholderRecord {
    pub stakeholder: String,
    pub levels: Vec<LevelEntry>,
}

/// The full matrix, in dataset order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    pub stakeholders: Vec<StakeholderRecord>,
}

impl Dataset {
    /// Load and validate a dataset file (plain JSON or a `const data = [...]` script)
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let dataset = Self::from_source(&content, &path.display().to_string())?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Parse a dataset from JSON text, or from a script that assigns a JSON
    /// array literal to a variable. Does not validate.
    pub fn from_source(source: &str, origin: &str) -> Result<Self> {
        let parse_error = |source| GridError::Parse {
            origin: origin.to_string(),
            source,
        };

        let trimmed = source.trim_start();
        if trimmed.starts_with('[') {
            return serde_json::from_str(trimmed).map_err(parse_error);
        }
        match assigned_array_literal(source) {
            // Stop at the end of the literal; the rest of the statement is ignored
            Some(literal) => {
                let mut deserializer = serde_json::Deserializer::from_str(literal);
                Dataset::deserialize(&mut deserializer).map_err(parse_error)
            }
            None => serde_json::from_str(trimmed).map_err(parse_error),
        }
    }

    /// Check the preconditions the renderers rely on
    pub fn validate(&self) -> Result<()> {
        if self.stakeholders.is_empty() {
            return Err(GridError::EmptyDataset);
        }

        let mut seen: HashSet<(&str, Level)> = HashSet::new();
        for record in &self.stakeholders {
            if record.levels.is_empty() {
                warn!(stakeholder = %record.stakeholder, "stakeholder has no level entries");
            }
            for entry in &record.levels {
                if entry.similar_work.is_empty() {
                    return Err(GridError::MalformedCell {
                        stakeholder: record.stakeholder.clone(),
                        level: entry.level,
                    });
                }
                if !seen.insert((record.stakeholder.as_str(), entry.level)) {
                    warn!(
                        stakeholder = %record.stakeholder,
                        level = %entry.level,
                        "duplicate cell in dataset"
                    );
                }
            }
        }

        Ok(())
    }

    /// Stakeholder names in dataset order (duplicates included)
    pub fn stakeholder_names(&self) -> Vec<&str> {
        self.stakeholders
            .iter()
            .map(|record| record.stakeholder.as_str())
            .collect()
    }

    /// Total number of work items across all cells
    pub fn work_item_count(&self) -> usize {
        self.stakeholders
            .iter()
            .flat_map(|record| &record.levels)
            .map(|entry| entry.similar_work.len())
            .sum()
    }
}

/// Text starting at the array literal on the right of the first `=` that is
/// not inside a `//` line comment
fn assigned_array_literal(source: &str) -> Option<&str> {
    let mut offset = 0;
    for line in source.split_inclusive('\n') {
        let code = match line.find("//") {
            Some(comment) => &line[..comment],
            None => line,
        };
        if let Some(eq) = code.find('=') {
            let rest = source[offset + eq + 1..].trim_start();
            if rest.starts_with('[') {
                return Some(rest);
            }
        }
        offset += line.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"[
        {
            "stakeholder": "Patients",
            "levels": [
                {
                    "level": "Cognitive Companions",
                    "similarWork": [
                        {
                            "name": "Symptom Checker",
                            "link": "https://example.org/checker",
                            "benefits": "Early triage",
                            "challenges": "Accuracy",
                            "technologies": "NLP",
                            "ethicalConsiderations": "Consent",
                            "implementationStatus": "Widely adopted",
                            "impact": "Fewer unnecessary visits"
                        }
                    ]
                }
            ]
        }
    ]"#;

    fn create_temp_dataset_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_dataset_from_json() {
        let dataset = Dataset::from_source(SAMPLE, "inline").unwrap();
        assert_eq!(dataset.stakeholders.len(), 1);
        let entry = &dataset.stakeholders[0].levels[0];
        assert_eq!(entry.level, Level::Companions);
        assert_eq!(entry.similar_work[0].name, "Symptom Checker");
        assert_eq!(entry.similar_work[0].ethical_considerations, "Consent");
        assert_eq!(
            entry.similar_work[0].implementation_status,
            ImplementationStatus::WidelyAdopted
        );
    }

    #[test]
    fn test_dataset_from_script_assignment() {
        let script = format!("// generated\nconst data = {};\n", SAMPLE);
        let dataset = Dataset::from_source(&script, "data.js").unwrap();
        assert_eq!(dataset.stakeholder_names(), vec!["Patients"]);
    }

    #[test]
    fn test_script_header_comment_with_brackets() {
        let script = format!("// Dataset [v2], see data[0]\nconst data = {};\n", SAMPLE);
        let dataset = Dataset::from_source(&script, "data.js").unwrap();
        assert_eq!(dataset.stakeholder_names(), vec!["Patients"]);
    }

    #[test]
    fn test_script_trailing_comment_with_brackets() {
        let script = format!("const data = {}; // see [1]\n/* [appendix] */\n", SAMPLE);
        let dataset = Dataset::from_source(&script, "data.js").unwrap();
        assert_eq!(dataset.work_item_count(), 1);
    }

    #[test]
    fn test_script_commented_assignment_is_skipped() {
        let script = format!("// usage: data = [records]\nlet data={}\nexport default data;\n", SAMPLE);
        let dataset = Dataset::from_source(&script, "data.js").unwrap();
        assert_eq!(dataset.stakeholder_names(), vec!["Patients"]);
    }

    #[test]
    fn test_script_without_array_fails() {
        let err = Dataset::from_source("const data = null;", "data.js").unwrap_err();
        assert!(matches!(err, GridError::Parse { .. }));
    }

    #[test]
    fn test_dataset_unknown_status_fails() {
        let json = SAMPLE.replace("Widely adopted", "Sunsetting");
        let err = Dataset::from_source(&json, "inline").unwrap_err();
        assert!(matches!(err, GridError::Parse { .. }));
        assert!(err.to_string().contains("inline"));
    }

    #[test]
    fn test_dataset_unknown_level_fails() {
        let json = SAMPLE.replace("Cognitive Companions", "Cognitive Crowds");
        assert!(Dataset::from_source(&json, "inline").is_err());
    }

    #[test]
    fn test_validate_empty_dataset() {
        let dataset = Dataset::from_source("[]", "inline").unwrap();
        assert!(matches!(dataset.validate(), Err(GridError::EmptyDataset)));
    }

    #[test]
    fn test_validate_empty_cell() {
        let json = r#"[{"stakeholder": "Clinicians", "levels": [
            {"level": "Cognitive Colleagues", "similarWork": []}
        ]}]"#;
        let dataset = Dataset::from_source(json, "inline").unwrap();
        match dataset.validate() {
            Err(GridError::MalformedCell { stakeholder, level }) => {
                assert_eq!(stakeholder, "Clinicians");
                assert_eq!(level, Level::Colleagues);
            }
            other => panic!("expected MalformedCell, got {:?}", other),
        }
    }

    #[test]
    fn test_dataset_load_success() {
        let file = create_temp_dataset_file(SAMPLE);
        let dataset = Dataset::load(file.path()).unwrap();
        assert_eq!(dataset.work_item_count(), 1);
    }

    #[test]
    fn test_dataset_load_file_not_found() {
        let result = Dataset::load(Path::new("/nonexistent/path/data.json"));
        assert!(matches!(result, Err(GridError::Io(_))));
    }

    #[test]
    fn test_dataset_load_invalid_json() {
        let file = create_temp_dataset_file("{ not valid json }");
        assert!(matches!(
            Dataset::load(file.path()),
            Err(GridError::Parse { .. })
        ));
    }
}
