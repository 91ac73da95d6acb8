use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Letter {
    A,
    B,
    Z,
}

impl NodeKey for Letter {
    const ALL: &'static [Self] = &[Self::A, Self::B, Self::Z];

    fn tag(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::Z => "Z",
        }
    }
}

fn alpha_beta() -> ContentRegistry<Letter> {
    ContentRegistry::build([
        (Letter::A, DisplayRecord::new("Alpha", "a")),
        (Letter::B, DisplayRecord::new("Beta", "b")),
    ])
    .unwrap()
}

// =============================================================
// build
// =============================================================

#[test]
fn build_rejects_duplicate_keys() {
    let err = ContentRegistry::build([
        (Letter::A, DisplayRecord::new("Alpha", "a")),
        (Letter::A, DisplayRecord::new("Again", "a2")),
    ])
    .unwrap_err();
    assert_eq!(err, RegistryError::DuplicateKey("A"));
}

#[test]
fn build_accepts_empty_table() {
    let registry = ContentRegistry::<Letter>::build([]).unwrap();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
}

// =============================================================
// lookup
// =============================================================

#[test]
fn lookup_returns_record_for_present_key() {
    let registry = alpha_beta();
    assert_eq!(registry.lookup(Letter::A), Some(DisplayRecord::new("Alpha", "a")));
    assert_eq!(registry.lookup(Letter::B), Some(DisplayRecord::new("Beta", "b")));
}

#[test]
fn lookup_is_none_for_known_key_without_entry() {
    let registry = alpha_beta();
    assert_eq!(registry.lookup(Letter::Z), None);
    assert!(!registry.contains(Letter::Z));
}

#[test]
fn lookup_tag_parses_and_looks_up() {
    let registry = alpha_beta();
    assert_eq!(registry.lookup_tag("B"), Some((Letter::B, DisplayRecord::new("Beta", "b"))));
}

#[test]
fn lookup_tag_is_none_for_unknown_or_unbacked_tags() {
    let registry = alpha_beta();
    assert_eq!(registry.lookup_tag("Q"), None);
    assert_eq!(registry.lookup_tag("Z"), None);
    assert_eq!(registry.lookup_tag("a"), None);
    assert_eq!(registry.lookup_tag(""), None);
}

// =============================================================
// iter
// =============================================================

#[test]
fn iter_keeps_declaration_order() {
    let registry = ContentRegistry::build([
        (Letter::B, DisplayRecord::new("Beta", "b")),
        (Letter::A, DisplayRecord::new("Alpha", "a")),
    ])
    .unwrap();
    let keys: Vec<Letter> = registry.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, vec![Letter::B, Letter::A]);
}

#[test]
fn from_tag_is_case_sensitive() {
    assert_eq!(Letter::from_tag("A"), Some(Letter::A));
    assert_eq!(Letter::from_tag("a"), None);
}

#[test]
fn record_serializes_title_and_body() {
    let json = serde_json::to_value(DisplayRecord::new("Alpha", "a")).unwrap();
    assert_eq!(json, serde_json::json!({ "title": "Alpha", "body": "a" }));
}
