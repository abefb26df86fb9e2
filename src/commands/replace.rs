// Replacement commands - text and file transforms against the shell-owned store

use std::path::{Path, PathBuf};

use super::engine_failure;
use crate::dictionary::DictionaryStore;
use crate::engine::{self, FileIo};
use crate::Settings;

/// Apply the dictionary forward
pub fn replace_text(store: &DictionaryStore, input: &str) -> String {
    engine::replace(input, store.list())
}

/// Apply the dictionary in reverse
pub fn reverse_replace_text(store: &DictionaryStore, input: &str) -> String {
    engine::reverse_replace(input, store.list())
}

/// Escape non-ASCII characters using the configured hex case
pub fn convert_to_unicode(settings: &Settings, input: &str) -> String {
    engine::to_unicode_with_case(input, settings.unicode_case)
}

/// Decode Unicode escapes, then apply the dictionary in reverse
pub fn unicode_to_text_and_reverse_replace(
    store: &DictionaryStore,
    input: &str,
) -> Result<String, String> {
    engine::unicode_to_text_and_reverse_replace(input, store.list()).map_err(engine_failure)
}

/// Replace in a file and save the output
///
/// # Arguments
/// * `file_path` - Source file
/// * `destination` - Output path; `None` saves next to the source with the
///   configured forward suffix
///
/// # Returns
/// Path the output was saved to
pub fn execute_replace_and_save<I: FileIo + ?Sized>(
    store: &DictionaryStore,
    settings: &Settings,
    io: &I,
    file_path: &Path,
    destination: Option<&Path>,
) -> Result<PathBuf, String> {
    engine::execute_replace_and_save(io, file_path, destination, store.list(), &settings.output)
        .map_err(engine_failure)
}

/// Reverse-replace in a file and save the output
///
/// Same contract as [`execute_replace_and_save`], using the reverse suffix.
pub fn reverse_replace_and_save<I: FileIo + ?Sized>(
    store: &DictionaryStore,
    settings: &Settings,
    io: &I,
    file_path: &Path,
    destination: Option<&Path>,
) -> Result<PathBuf, String> {
    engine::reverse_replace_and_save(io, file_path, destination, store.list(), &settings.output)
        .map_err(engine_failure)
}
