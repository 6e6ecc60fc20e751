//! Skills collection: categorized technology lists for the skills grid.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

use serde::Deserialize;

const SKILLS_JSON: &str = include_str!("../../collections/skills.json");

/// A single named technology inside a category.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Technology {
    pub id: String,
    pub name: String,
}

/// A skill category with its icon and technologies.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategory {
    pub id: String,
    pub icon_name: String,
    #[serde(default)]
    pub technologies: Vec<Technology>,
}

#[derive(Debug, Default, Deserialize)]
struct SkillsFile {
    #[serde(default)]
    skills: Vec<SkillCategory>,
}

/// All skill categories in collection order.
#[must_use]
pub fn skills() -> Vec<SkillCategory> {
    categories_from_json(SKILLS_JSON)
}

fn categories_from_json(raw: &str) -> Vec<SkillCategory> {
    let file: SkillsFile = serde_json::from_str(raw).unwrap_or_default();
    file.skills
}
