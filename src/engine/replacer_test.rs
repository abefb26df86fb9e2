use super::*;

fn dict(pairs: &[(&str, &str)]) -> Vec<DictionaryEntry> {
    pairs.iter().map(|(f, r)| DictionaryEntry::new(*f, *r)).collect()
}

#[test]
fn test_forward_and_reverse_single_entry() {
    let d = dict(&[("cat", "dog")]);

    assert_eq!(replace("cat cat", &d), "dog dog");
    assert_eq!(reverse_replace("dog dog", &d), "cat cat");
}

#[test]
fn test_empty_dictionary_is_identity() {
    let d = dict(&[("cat", "dog"), ("red", "blue")]);
    let once = replace("the red cat", &d);

    assert_eq!(once, "the blue dog");
    assert_eq!(replace(&once, &[]), once);
    assert_eq!(reverse_replace(&once, &[]), once);
}

#[test]
fn test_entries_cascade_in_dictionary_order() {
    // First entry's output is rewritten by the second
    let d = dict(&[("a", "b"), ("b", "c")]);
    assert_eq!(replace("ab", &d), "cc");

    // Reversed order gives a different result
    let d = dict(&[("b", "c"), ("a", "b")]);
    assert_eq!(replace("ab", &d), "bc");
}

#[test]
fn test_reverse_uses_same_entry_order() {
    let d = dict(&[("a", "b"), ("b", "c")]);
    // Reverse pass: "b"→"a" first, then "c"→"b"
    assert_eq!(reverse_replace("bc", &d), "ab");
}

#[test]
fn test_non_overlapping_left_to_right() {
    let d = dict(&[("aa", "x")]);
    assert_eq!(replace("aaa", &d), "xa");
    assert_eq!(replace("aaaa", &d), "xx");
}

#[test]
fn test_non_cascading_dictionary_round_trips() {
    let d = dict(&[("cat", "dog"), ("red", "blue"), ("你好", "hello")]);
    let text = "a red cat says 你好";

    let forward = replace(text, &d);
    assert_eq!(forward, "a blue dog says hello");
    assert_eq!(reverse_replace(&forward, &d), text);
}

#[test]
fn test_empty_replace_deletes_forward_and_is_skipped_in_reverse() {
    let d = dict(&[("um ", "")]);

    assert_eq!(replace("um hello um there", &d), "hello there");
    assert_eq!(reverse_replace("hello there", &d), "hello there");
}

#[test]
fn test_empty_text_returns_empty() {
    let d = dict(&[("cat", "dog")]);
    assert_eq!(replace("", &d), "");
    assert_eq!(apply("", &d, Direction::Reverse), "");
}
