use super::*;

#[test]
fn shipped_collection_parses_and_is_not_empty() {
    let categories = skills();
    assert!(!categories.is_empty());
    for category in &categories {
        assert!(!category.id.is_empty());
        assert!(!category.icon_name.is_empty());
        assert!(!category.technologies.is_empty());
    }
}

#[test]
fn category_fields_map_from_camel_case() {
    let raw = r#"{
        "skills": [
            {
                "id": "containers",
                "iconName": "box",
                "technologies": [
                    { "id": "docker", "name": "Docker" },
                    { "id": "k8s", "name": "Kubernetes" }
                ]
            }
        ]
    }"#;

    let categories = categories_from_json(raw);
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].icon_name, "box");
    assert_eq!(categories[0].technologies[1].name, "Kubernetes");
}

#[test]
fn malformed_collection_degrades_to_empty() {
    assert!(categories_from_json("[]").is_empty());
    assert!(categories_from_json("{}").is_empty());
}
