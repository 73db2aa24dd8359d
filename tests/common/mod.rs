//! Shared dataset builders for integration tests.

#![allow(dead_code)]

use ccf_grid::models::{Dataset, ImplementationStatus, Level, LevelEntry, StakeholderRecord, WorkItem};

pub fn work(name: &str, status: ImplementationStatus) -> WorkItem {
    WorkItem {
        name: name.to_string(),
        link: format!("https://example.org/{}", name.to_lowercase().replace(' ', "-")),
        benefits: format!("{name} benefits"),
        challenges: format!("{name} challenges"),
        technologies: format!("{name} technologies"),
        ethical_considerations: format!("{name} ethics"),
        implementation_status: status,
        impact: format!("{name} impact"),
    }
}

pub fn entry(level: Level, items: Vec<WorkItem>) -> LevelEntry {
    LevelEntry {
        level,
        similar_work: items,
    }
}

pub fn stakeholder(name: &str, levels: Vec<LevelEntry>) -> StakeholderRecord {
    StakeholderRecord {
        stakeholder: name.to_string(),
        levels,
    }
}

pub fn dataset(stakeholders: Vec<StakeholderRecord>) -> Dataset {
    Dataset { stakeholders }
}

/// Patients and Clinicians, four cells, one of them with five items
pub fn sample() -> Dataset {
    use ImplementationStatus::*;
    dataset(vec![
        stakeholder(
            "Patients",
            vec![
                entry(Level::Companions, vec![work("X", Emerging)]),
                entry(
                    Level::Colleagues,
                    vec![work("Decision Aid", GrowingAdoption), work("Coach", Emerging)],
                ),
            ],
        ),
        stakeholder(
            "Clinicians",
            vec![
                entry(
                    Level::Companions,
                    vec![
                        work("A", WidelyAdopted),
                        work("B", Emerging),
                        work("C", Emerging),
                        work("D", GrowingAdoption),
                        work("E", Emerging),
                    ],
                ),
                entry(Level::Collectives, vec![work("Board", GrowingAdoption)]),
            ],
        ),
    ])
}
