use super::*;

#[test]
fn registering_a_filename_creates_a_filtered_entry() {
    let mut registry = Registry::new();
    registry.register(1, "/data/project", Some("notes.txt".to_string()));

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.directory(1), Some(Path::new("/data/project")));
    assert_eq!(
        registry.filter(1),
        Some(&Filter::Names(vec!["notes.txt".to_string()]))
    );
}

#[test]
fn registering_without_a_filename_watches_the_whole_directory() {
    let mut registry = Registry::new();
    registry.register(1, "/data/project", None);

    assert_eq!(registry.filter(1), Some(&Filter::WholeDirectory));
}

#[test]
fn filenames_accumulate_and_duplicates_are_kept() {
    let mut registry = Registry::new();
    registry.register(1, "/data/project", Some("a.txt".to_string()));
    registry.register(1, "/data/project", Some("b.txt".to_string()));
    registry.register(1, "/data/project", Some("a.txt".to_string()));

    assert_eq!(registry.len(), 1);
    assert_eq!(
        registry.filter(1),
        Some(&Filter::Names(vec![
            "a.txt".to_string(),
            "b.txt".to_string(),
            "a.txt".to_string(),
        ]))
    );
}

#[test]
fn directory_interest_widens_a_name_filter() {
    let mut registry = Registry::new();
    registry.register(1, "/data/project", Some("a.txt".to_string()));
    registry.register(1, "/data/project", None);

    assert_eq!(registry.filter(1), Some(&Filter::WholeDirectory));
}

#[test]
fn directory_interest_absorbs_later_names() {
    let mut registry = Registry::new();
    registry.register(1, "/data/project", None);
    registry.register(1, "/data/project", Some("a.txt".to_string()));

    assert_eq!(registry.filter(1), Some(&Filter::WholeDirectory));
}

#[test]
fn unknown_handles_are_not_found() {
    let registry = Registry::new();
    assert!(registry.get(42).is_none());
    assert!(registry.directory(42).is_none());
    assert!(registry.filter(42).is_none());
}

#[test]
fn whole_directory_matches_every_name() {
    assert!(Filter::WholeDirectory.matches("anything"));
    assert!(Filter::WholeDirectory.matches(""));
}

#[test]
fn name_filters_match_only_listed_names() {
    let filter = Filter::Names(vec!["a.txt".to_string()]);
    assert!(filter.matches("a.txt"));
    assert!(!filter.matches("b.txt"));
    assert!(!filter.matches(""));
}
