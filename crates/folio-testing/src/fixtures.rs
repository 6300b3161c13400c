//! Sample records and interchange-file placement.

use anyhow::Result;
use folio_types::{
    EntryId, ExperienceEntry, Layout, Portfolio, ProjectEntry, SocialLinks, Theme,
};
use std::path::{Path, PathBuf};

/// A fully-populated record that is not the starter, so tests can tell
/// "seeded from file" apart from "seeded from the default".
pub fn sample_portfolio() -> Portfolio {
    Portfolio {
        name: "Jordan Reyes".to_string(),
        title: "Systems Engineer".to_string(),
        bio: "Ships reliable infrastructure and writes about it.".to_string(),
        email: "jordan@reyes.dev".to_string(),
        phone: "+44 20 7946 0000".to_string(),
        location: "London, UK".to_string(),
        skills: ["Rust", "Kubernetes", "PostgreSQL"]
            .into_iter()
            .map(String::from)
            .collect(),
        experience: vec![
            ExperienceEntry {
                id: EntryId::new("exp-raft"),
                company: "Raft Labs".to_string(),
                position: "Staff Engineer".to_string(),
                duration: "2021 - Present".to_string(),
                description: "Owns the storage layer.".to_string(),
            },
            ExperienceEntry {
                id: EntryId::new("exp-wire"),
                company: "Wireframe".to_string(),
                position: "Backend Engineer".to_string(),
                duration: "2018 - 2021".to_string(),
                description: "Built the billing pipeline.".to_string(),
            },
        ],
        projects: vec![ProjectEntry {
            id: EntryId::new("proj-ledger"),
            title: "Ledger".to_string(),
            description: "Append-only audit log with verified replay.".to_string(),
            technologies: "Rust, RocksDB".to_string(),
            link: Some("https://github.com/jordanreyes/ledger".to_string()),
        }],
        social: SocialLinks {
            github: Some("https://github.com/jordanreyes".to_string()),
            linkedin: None,
            twitter: None,
            website: Some("https://reyes.dev".to_string()),
        },
        theme: Theme::Light,
        layout: Layout::Minimal,
    }
}

/// Write `record` as an interchange file under `dir` and return its path.
pub fn write_portfolio(dir: &Path, file_name: &str, record: &Portfolio) -> Result<PathBuf> {
    let path = dir.join(file_name);
    std::fs::write(&path, serde_json::to_string_pretty(record)?)?;
    Ok(path)
}

/// Write a file that is not valid interchange JSON.
pub fn write_malformed(dir: &Path, file_name: &str) -> Result<PathBuf> {
    let path = dir.join(file_name);
    std::fs::write(&path, "{ \"name\": \"truncated\",")?;
    Ok(path)
}
