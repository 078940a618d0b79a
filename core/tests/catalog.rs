use dinopuzzle_core::catalog::{
    puzzle_by_label, puzzle_by_slug, puzzle_info, DEFAULT_PUZZLE_SLUG, PUZZLE_CATALOG,
};
use dinopuzzle_core::PuzzleImageRef;

#[test]
fn catalog_slugs_are_distinct_and_nonempty() {
    for entry in PUZZLE_CATALOG {
        assert!(!entry.slug.is_empty());
        assert!(!entry.label.is_empty());
        assert!(entry.width > 0 && entry.height > 0);
    }
    let mut slugs: Vec<&str> = PUZZLE_CATALOG.iter().map(|entry| entry.slug).collect();
    slugs.sort_unstable();
    slugs.dedup();
    assert_eq!(slugs.len(), PUZZLE_CATALOG.len());
}

#[test]
fn default_slug_resolves() {
    assert!(puzzle_by_slug(DEFAULT_PUZZLE_SLUG).is_some());
}

#[test]
fn lookups_ignore_case_and_whitespace() {
    let by_slug = puzzle_by_slug("  TRICERATOPS ");
    assert!(by_slug.is_some_and(|entry| entry.slug == "triceratops"));
    let by_label = puzzle_by_label("triceratops");
    assert!(by_label.is_some_and(|entry| entry.slug == "triceratops"));
    assert!(puzzle_by_slug("mosasaurus").is_none());
}

#[test]
fn puzzle_info_carries_a_built_in_ref() {
    let info = match puzzle_info("velociraptor") {
        Some(info) => info,
        None => panic!("missing catalog entry"),
    };
    assert_eq!(info.label, "Velociraptor");
    assert_eq!(
        info.image_ref,
        PuzzleImageRef::BuiltIn {
            slug: "velociraptor".to_string(),
        }
    );
}
