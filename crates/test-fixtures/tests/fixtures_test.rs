use test_fixtures::*;

#[test]
fn reference_fixture_exists_and_parses() {
    assert!(fixture_exists(REFERENCE_SETUPS));
    let refs = reference_setups();
    assert!(refs.len() >= 5);
    for r in &refs {
        assert!(r.setup.validate().is_ok(), "{} has an invalid setup", r.name);
        assert!((0.0..=100.0).contains(&r.expected_confidence));
        assert!(r.expected_score >= 0.0);
    }
}

#[test]
fn names_are_unique() {
    let refs = reference_setups();
    let mut names: Vec<_> = refs.iter().map(|r| r.name.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), refs.len());
}

#[test]
fn lookup_by_name() {
    let neutral = reference_setup("neutral");
    assert_eq!(neutral.expected_confidence, 35.0);
}
