// Tests for the shell-facing commands
// The shell owns the store; these tests play the shell's part.

use super::*;
use crate::dictionary::{DictionaryStore, ValidationPolicy};
use crate::engine::SystemFileIo;
use crate::Settings;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_dictionary_error_messages_carry_context() {
    let message = dictionary_error_message(&DictionaryError::IndexOutOfRange { index: 5, len: 2 });
    assert!(message.contains('5'));
    assert!(message.contains('2'));

    let message = dictionary_error_message(&DictionaryError::NotFound("abc123".to_string()));
    assert!(message.contains("abc123"));
    assert!(message.contains("not found"));

    let message = dictionary_error_message(&DictionaryError::PersistenceError("disk full".to_string()));
    assert!(message.contains("save"));
    assert!(message.contains("disk full"));

    let message = dictionary_error_message(&DictionaryError::LoadError("corrupt file".to_string()));
    assert!(message.contains("load"));
    assert!(message.contains("corrupt file"));
}

#[test]
fn test_engine_error_messages_carry_context() {
    let message = engine_error_message(&EngineError::Format {
        offset: 7,
        fragment: "\\uZZ".to_string(),
    });
    assert!(message.contains("\\uZZ"));
    assert!(message.contains('7'));

    let message = engine_error_message(&EngineError::Io {
        path: PathBuf::from("/tmp/in.txt"),
        message: "permission denied".to_string(),
    });
    assert!(message.contains("/tmp/in.txt"));
    assert!(message.contains("permission denied"));

    let message = engine_error_message(&EngineError::Document {
        path: PathBuf::from("/tmp/report.docx"),
        message: "not a DOCX archive: invalid Zip archive".to_string(),
    });
    assert!(message.contains("/tmp/report.docx"));
    assert!(message.contains("not a DOCX archive"));
}

#[test]
fn test_text_workflow() {
    let mut store = DictionaryStore::in_memory();
    let settings = Settings::default();

    add_entry(&mut store, "cat".to_string(), "dog".to_string()).unwrap();
    import_batch_text(&mut store, "# more\nhéllo\tbonjour\n").unwrap();
    assert_eq!(list_entries(&store).len(), 2);

    assert_eq!(replace_text(&store, "cat cat"), "dog dog");
    assert_eq!(reverse_replace_text(&store, "dog dog"), "cat cat");

    let encoded = convert_to_unicode(&settings, "héllo dog");
    assert_eq!(encoded, "h\\u00e9llo dog");
    assert_eq!(
        unicode_to_text_and_reverse_replace(&store, "bonjour \\u00e9").unwrap(),
        "héllo é"
    );
}

#[test]
fn test_convert_uses_configured_case() {
    let settings = Settings {
        unicode_case: crate::HexCase::Upper,
        ..Settings::default()
    };
    assert_eq!(convert_to_unicode(&settings, "é"), "\\u00E9");
}

#[test]
fn test_errors_become_messages() {
    let mut store = DictionaryStore::in_memory().with_policy(ValidationPolicy::strict());

    let err = add_entry(&mut store, String::new(), "dog".to_string()).unwrap_err();
    assert!(err.contains("empty"));

    let err = add_entry(&mut store, "cat".to_string(), "horse".to_string()).unwrap_err();
    assert!(err.contains("lengths must match"));

    let err = delete_entry(&mut store, 5).unwrap_err();
    assert!(err.contains("position 5"));

    let err = delete_entry_by_id(&mut store, "missing").unwrap_err();
    assert!(err.contains("missing"));

    let err = import_batch_text(&mut store, "no tab here").unwrap_err();
    assert!(err.contains("line 1"));

    let err = unicode_to_text_and_reverse_replace(&store, "\\u12").unwrap_err();
    assert!(err.contains("Invalid Unicode escape"));
}

#[test]
fn test_batch_add_entries_is_atomic() {
    let mut store = DictionaryStore::in_memory();
    add_entry(&mut store, "cat".to_string(), "dog".to_string()).unwrap();

    let result = batch_add_entries(
        &mut store,
        vec![
            ("red".to_string(), "blue".to_string()),
            (String::new(), "nothing".to_string()),
        ],
    );

    assert!(result.is_err());
    assert_eq!(list_entries(&store).len(), 1);
}

#[test]
fn test_file_workflow_with_dictionary_file() {
    let temp_dir = TempDir::new().unwrap();
    let settings = Settings {
        dictionary_path: Some(temp_dir.path().join("dictionary.json")),
        ..Settings::default()
    };

    let mut store = DictionaryStore::from_settings(&settings).unwrap();
    add_entry(&mut store, "cat".to_string(), "dog".to_string()).unwrap();

    let source = temp_dir.path().join("story.txt");
    std::fs::write(&source, "the cat sat").unwrap();

    let saved = execute_replace_and_save(&store, &settings, &SystemFileIo, &source, None).unwrap();
    assert_eq!(saved, temp_dir.path().join("story_processed.txt"));
    assert_eq!(std::fs::read_to_string(&saved).unwrap(), "the dog sat");

    let restored = temp_dir.path().join("restored.txt");
    let saved = reverse_replace_and_save(&store, &settings, &SystemFileIo, &saved, Some(&restored))
        .unwrap();
    assert_eq!(saved, restored);
    assert_eq!(std::fs::read_to_string(&restored).unwrap(), "the cat sat");

    let err = execute_replace_and_save(
        &store,
        &settings,
        &SystemFileIo,
        &temp_dir.path().join("missing.txt"),
        None,
    )
    .unwrap_err();
    assert!(err.contains("missing.txt"));
}

#[test]
fn test_open_dictionary_switches_files() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("first.json");
    let second = temp_dir.path().join("second.json");

    let mut store = DictionaryStore::new(first.clone());
    add_entry(&mut store, "cat".to_string(), "dog".to_string()).unwrap();

    let mut other = DictionaryStore::new(second.clone());
    add_entry(&mut other, "red".to_string(), "blue".to_string()).unwrap();
    add_entry(&mut other, "sun".to_string(), "moon".to_string()).unwrap();

    assert_eq!(open_dictionary(&mut store, second).unwrap(), 2);
    assert_eq!(replace_text(&store, "red sun cat"), "blue moon cat");

    assert_eq!(open_dictionary(&mut store, first).unwrap(), 1);
    assert_eq!(replace_text(&store, "red sun cat"), "red sun dog");
}
