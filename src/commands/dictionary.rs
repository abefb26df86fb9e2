// Dictionary commands - CRUD on the shell-owned store

use std::path::PathBuf;

use super::dictionary_failure;
use crate::dictionary::{parse_batch, DictionaryEntry, DictionaryStore};

/// List all dictionary entries in match-precedence order
pub fn list_entries(store: &DictionaryStore) -> Vec<DictionaryEntry> {
    store.list().to_vec()
}

/// Add a new dictionary entry
///
/// # Arguments
/// * `find` - Text to search for (must not be empty)
/// * `replace` - Replacement text
///
/// # Returns
/// The newly created DictionaryEntry with its generated ID
pub fn add_entry(
    store: &mut DictionaryStore,
    find: String,
    replace: String,
) -> Result<DictionaryEntry, String> {
    let entry = store.add(find, replace).map_err(dictionary_failure)?;
    crate::info!("Added dictionary entry: {} -> {}", entry.find, entry.replace);
    Ok(entry)
}

/// Add several entries at once; nothing is added if any pair is invalid
pub fn batch_add_entries(
    store: &mut DictionaryStore,
    pairs: Vec<(String, String)>,
) -> Result<Vec<DictionaryEntry>, String> {
    let added = store.batch_add(pairs).map_err(dictionary_failure)?;
    crate::info!("Added {} dictionary entries", added.len());
    Ok(added)
}

/// Parse tab-separated batch text and add every line as one batch
pub fn import_batch_text(
    store: &mut DictionaryStore,
    text: &str,
) -> Result<Vec<DictionaryEntry>, String> {
    let pairs = parse_batch(text).map_err(dictionary_failure)?;
    batch_add_entries(store, pairs)
}

/// Delete the entry at `index`
pub fn delete_entry(store: &mut DictionaryStore, index: usize) -> Result<DictionaryEntry, String> {
    let removed = store.delete(index).map_err(dictionary_failure)?;
    crate::info!("Deleted dictionary entry {}: {}", index, removed.find);
    Ok(removed)
}

/// Delete the entry with the given ID
pub fn delete_entry_by_id(store: &mut DictionaryStore, id: &str) -> Result<DictionaryEntry, String> {
    let removed = store.delete_by_id(id).map_err(dictionary_failure)?;
    crate::info!("Deleted dictionary entry {}: {}", id, removed.find);
    Ok(removed)
}

/// Switch the store to another dictionary file
///
/// # Returns
/// Number of entries loaded
pub fn open_dictionary(store: &mut DictionaryStore, file_path: PathBuf) -> Result<usize, String> {
    store.open(file_path).map_err(dictionary_failure)?;
    Ok(store.len())
}
