use super::*;

#[test]
fn clicking_a_new_tag_selects_it() {
    assert_eq!(toggle_tag(None, "rust"), Some("rust".to_owned()));
    assert_eq!(toggle_tag(Some("devops"), "rust"), Some("rust".to_owned()));
}

#[test]
fn clicking_the_selected_tag_clears_the_filter() {
    assert_eq!(toggle_tag(Some("rust"), "rust"), None);
}
