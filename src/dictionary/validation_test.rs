use super::*;

fn entries(pairs: &[(&str, &str)]) -> Vec<DictionaryEntry> {
    pairs.iter().map(|(f, r)| DictionaryEntry::new(*f, *r)).collect()
}

#[test]
fn test_empty_find_always_rejected() {
    let policy = ValidationPolicy::default();
    let result = policy.check("", "dog", &[]);
    assert!(matches!(result, Err(DictionaryError::Validation { .. })));
}

#[test]
fn test_default_policy_allows_unequal_and_overlapping() {
    let policy = ValidationPolicy::default();
    let existing = entries(&[("cat", "dog")]);

    assert!(policy.check("cats", "puppies", &existing).is_ok());
    assert!(policy.check("cat", "dog", &existing).is_ok());
}

#[test]
fn test_equal_length_counts_characters_not_bytes() {
    let policy = ValidationPolicy {
        require_equal_length: true,
        reject_overlapping: false,
    };

    // "é" is two bytes but one character
    assert!(policy.check("é", "e", &[]).is_ok());
    assert!(policy.check("ab", "abc", &[]).is_err());
}

#[test]
fn test_overlapping_find_rejected_both_directions() {
    let policy = ValidationPolicy {
        require_equal_length: false,
        reject_overlapping: true,
    };
    let existing = entries(&[("cat", "dog")]);

    assert!(policy.check("cats", "x", &existing).is_err());
    assert!(policy.check("ca", "y", &existing).is_err());
    assert!(policy.check("bird", "fish", &existing).is_ok());
}

#[test]
fn test_overlapping_replace_rejected() {
    let policy = ValidationPolicy::strict();
    let existing = entries(&[("cat", "dog")]);

    let result = policy.check("pig", "dog", &existing);
    match result {
        Err(DictionaryError::Validation { reason }) => assert!(reason.contains("replacement")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_empty_replacements_do_not_overlap_each_other() {
    let policy = ValidationPolicy {
        require_equal_length: false,
        reject_overlapping: true,
    };
    let existing = entries(&[("um", "")]);

    assert!(policy.check("uh", "", &existing).is_ok());
}

#[test]
fn test_policy_deserializes_with_defaults() {
    let policy: ValidationPolicy = serde_json::from_str(r#"{"requireEqualLength":true}"#).unwrap();
    assert!(policy.require_equal_length);
    assert!(!policy.reject_overlapping);
}
