// Shell-facing commands
//
// The GUI shell owns one DictionaryStore and passes it by reference into every
// command. Commands log the outcome and turn typed errors into messages the shell
// can show as-is.

mod dictionary;
mod replace;

pub use dictionary::{
    add_entry, batch_add_entries, delete_entry, delete_entry_by_id, import_batch_text,
    list_entries, open_dictionary,
};
pub use replace::{
    convert_to_unicode, execute_replace_and_save, replace_text, reverse_replace_and_save,
    reverse_replace_text, unicode_to_text_and_reverse_replace,
};

use crate::dictionary::DictionaryError;
use crate::engine::EngineError;

/// Map DictionaryError to user-friendly error messages
pub fn dictionary_error_message(error: &DictionaryError) -> String {
    match error {
        DictionaryError::Validation { reason } => format!("Invalid entry: {}", reason),
        DictionaryError::IndexOutOfRange { index, len } => format!(
            "No entry at position {} (dictionary has {} entries)",
            index, len
        ),
        DictionaryError::NotFound(id) => format!("Entry with ID '{}' not found", id),
        DictionaryError::PersistenceError(msg) => format!("Failed to save dictionary: {}", msg),
        DictionaryError::LoadError(msg) => format!("Failed to load dictionary: {}", msg),
    }
}

/// Map EngineError to user-friendly error messages
pub fn engine_error_message(error: &EngineError) -> String {
    match error {
        EngineError::Format { offset, fragment } => format!(
            "Invalid Unicode escape '{}' at position {}",
            fragment, offset
        ),
        EngineError::Io { path, message } => {
            format!("Error processing file {}: {}", path.display(), message)
        }
        EngineError::Document { path, message } => {
            format!("Invalid Word document {}: {}", path.display(), message)
        }
    }
}

fn dictionary_failure(error: DictionaryError) -> String {
    let message = dictionary_error_message(&error);
    crate::warn!("{}", message);
    message
}

fn engine_failure(error: EngineError) -> String {
    let message = engine_error_message(&error);
    crate::warn!("{}", message);
    message
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
