use super::*;

#[test]
fn shipped_collection_parses_and_is_not_empty() {
    let all = projects();
    assert!(!all.is_empty());
    for project in &all {
        assert!(!project.id.is_empty());
        assert!(!project.title.is_empty());
        assert!(!project.description.is_empty());
        assert!(!project.category.is_empty());
    }
}

#[test]
fn lookup_finds_each_shipped_project_by_id() {
    for project in projects() {
        let found = project_by_id(&project.id).expect("lookup");
        assert_eq!(found, project);
    }
}

#[test]
fn lookup_misses_unknown_ids() {
    assert_eq!(project_by_id("no-such-project"), None);
}

#[test]
fn mapping_resolves_images_and_defaults_optional_fields() {
    let raw = r#"{
        "projects": [
            {
                "id": "demo",
                "title": "Demo",
                "description": "A demo project.",
                "category": "Tooling",
                "date": "March 2025",
                "imagePath": "/src/assets/projects/demo.webp",
                "keyFeatures": [
                    { "title": "Fast", "description": "Quite fast." }
                ]
            }
        ]
    }"#;

    let all = projects_from_json(raw);
    assert_eq!(all.len(), 1);
    let project = &all[0];
    assert_eq!(
        project.image.as_ref().map(|a| a.src.clone()),
        Some("/assets/projects/demo.webp".to_owned())
    );
    assert_eq!(project.key_features.len(), 1);
    assert_eq!(project.challenges, None);
    assert_eq!(project.project_url, None);
}

#[test]
fn malformed_collection_degrades_to_empty() {
    assert!(projects_from_json("null").is_empty());
    assert!(projects_from_json("{}").is_empty());
}
