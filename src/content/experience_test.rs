use super::*;

#[test]
fn shipped_collection_parses_and_is_not_empty() {
    let entries = experience();
    assert!(!entries.is_empty());
    for entry in &entries {
        assert!(!entry.id.is_empty());
        assert!(!entry.role.is_empty());
        assert!(!entry.company.is_empty());
        assert!(!entry.start_date.is_empty());
    }
}

#[test]
fn shipped_collection_is_sorted_newest_first() {
    let entries = experience();
    for pair in entries.windows(2) {
        assert!(pair[0].start_date >= pair[1].start_date);
    }
}

#[test]
fn mapping_resolves_logo_paths_and_sorts_descending() {
    let raw = r#"{
        "experience": [
            {
                "id": "older",
                "role": "Engineer",
                "company": "Acme",
                "startDate": "2019-08-01",
                "endDate": "2021-01-31",
                "logoPath": "/src/assets/logos/acme.webp"
            },
            {
                "id": "newer",
                "role": "Senior Engineer",
                "company": "Globex",
                "startDate": "2023-02-01",
                "endDate": null,
                "highlights": ["Led migration"],
                "tags": ["Kubernetes"]
            }
        ]
    }"#;

    let entries = entries_from_json(raw);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, "newer");
    assert_eq!(entries[0].end_date, None);
    assert_eq!(entries[0].highlights, vec!["Led migration".to_owned()]);
    assert_eq!(entries[1].id, "older");
    assert_eq!(
        entries[1].logo.as_ref().map(|a| a.src.clone()),
        Some("/assets/logos/acme.webp".to_owned())
    );
}

#[test]
fn optional_fields_default_when_missing() {
    let raw = r#"{
        "experience": [
            { "id": "min", "role": "Dev", "company": "Solo", "startDate": "2024-01-01" }
        ]
    }"#;

    let entries = entries_from_json(raw);
    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert_eq!(entry.location, None);
    assert_eq!(entry.end_date, None);
    assert_eq!(entry.summary, None);
    assert!(entry.highlights.is_empty());
    assert!(entry.tags.is_empty());
    assert_eq!(entry.logo, None);
}

#[test]
fn malformed_collection_degrades_to_empty() {
    assert!(entries_from_json("not json").is_empty());
    assert!(entries_from_json("{}").is_empty());
}
