//! Experience collection: raw JSON records mapped to timeline entries.
//!
//! DESIGN
//! ======
//! The JSON collection mirrors the editing format (camelCase keys, optional
//! fields, source-tree logo paths); the view model is what the timeline
//! component renders. Mapping resolves logos through the asset map and
//! orders entries newest-first. A collection that fails to parse renders as
//! an empty timeline rather than breaking the page.

#[cfg(test)]
#[path = "experience_test.rs"]
mod experience_test;

use serde::Deserialize;

use crate::content::assets::{self, AssetRef};

const EXPERIENCE_JSON: &str = include_str!("../../collections/experience.json");

#[derive(Debug, Default, Deserialize)]
struct ExperienceFile {
    #[serde(default)]
    experience: Vec<ExperienceRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExperienceRecord {
    id: String,
    role: String,
    company: String,
    #[serde(default)]
    location: Option<String>,
    /// ISO date (`YYYY-MM` or `YYYY-MM-DD`).
    start_date: String,
    #[serde(default)]
    end_date: Option<String>,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    highlights: Vec<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    logo_path: Option<String>,
}

/// One entry on the experience timeline.
#[derive(Clone, Debug, PartialEq)]
pub struct ExperienceEntry {
    pub id: String,
    pub role: String,
    pub company: String,
    pub location: Option<String>,
    pub start_date: String,
    /// `None` while the position is current.
    pub end_date: Option<String>,
    pub summary: Option<String>,
    pub highlights: Vec<String>,
    pub tags: Vec<String>,
    pub logo: Option<AssetRef>,
}

/// The experience timeline, newest first.
#[must_use]
pub fn experience() -> Vec<ExperienceEntry> {
    entries_from_json(EXPERIENCE_JSON)
}

fn entries_from_json(raw: &str) -> Vec<ExperienceEntry> {
    let file: ExperienceFile = serde_json::from_str(raw).unwrap_or_default();
    let mut entries: Vec<ExperienceEntry> = file
        .experience
        .into_iter()
        .map(|record| ExperienceEntry {
            logo: assets::resolve(record.logo_path.as_deref()),
            id: record.id,
            role: record.role,
            company: record.company,
            location: record.location,
            start_date: record.start_date,
            end_date: record.end_date,
            summary: record.summary,
            highlights: record.highlights,
            tags: record.tags,
        })
        .collect();
    // ISO dates order lexicographically.
    entries.sort_by(|a, b| b.start_date.cmp(&a.start_date));
    entries
}
