//! Projects collection: cards for the list pages and full detail records.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use serde::Deserialize;

use crate::content::assets::{self, AssetRef};

const PROJECTS_JSON: &str = include_str!("../../collections/projects.json");

/// A highlighted capability on the project detail page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct KeyFeature {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Default, Deserialize)]
struct ProjectsFile {
    #[serde(default)]
    projects: Vec<ProjectRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectRecord {
    id: String,
    title: String,
    description: String,
    category: String,
    date: String,
    #[serde(default)]
    detailed_description: Option<String>,
    #[serde(default)]
    key_features: Vec<KeyFeature>,
    #[serde(default)]
    challenges: Option<String>,
    #[serde(default)]
    learnings: Option<String>,
    #[serde(default)]
    project_url: Option<String>,
    #[serde(default)]
    repo_url: Option<String>,
    #[serde(default)]
    image_path: Option<String>,
    #[serde(default)]
    image_alt: Option<String>,
}

/// A project as rendered by cards and the detail page.
#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub date: String,
    pub detailed_description: Option<String>,
    pub key_features: Vec<KeyFeature>,
    pub challenges: Option<String>,
    pub learnings: Option<String>,
    pub project_url: Option<String>,
    pub repo_url: Option<String>,
    pub image: Option<AssetRef>,
    pub image_alt: Option<String>,
}

/// All projects in collection order.
#[must_use]
pub fn projects() -> Vec<Project> {
    projects_from_json(PROJECTS_JSON)
}

/// Detail lookup for the `/projects/:id` route.
#[must_use]
pub fn project_by_id(id: &str) -> Option<Project> {
    projects().into_iter().find(|project| project.id == id)
}

fn projects_from_json(raw: &str) -> Vec<Project> {
    let file: ProjectsFile = serde_json::from_str(raw).unwrap_or_default();
    file.projects
        .into_iter()
        .map(|record| Project {
            image: assets::resolve(record.image_path.as_deref()),
            id: record.id,
            title: record.title,
            description: record.description,
            category: record.category,
            date: record.date,
            detailed_description: record.detailed_description,
            key_features: record.key_features,
            challenges: record.challenges,
            learnings: record.learnings,
            project_url: record.project_url,
            repo_url: record.repo_url,
            image_alt: record.image_alt,
        })
        .collect()
}
