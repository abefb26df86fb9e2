// Batch text format for bulk dictionary input
//
// - `find<TAB>replace`, one entry per line
// - replace may be empty (`find<TAB>`)
// - blank lines and `#` comment lines are skipped

use super::store::DictionaryError;

/// Parse batch text into (find, replace) pairs in line order
///
/// Fails on the first line without a tab or with an empty find, naming the
/// 1-based line number.
pub fn parse_batch(text: &str) -> Result<Vec<(String, String)>, DictionaryError> {
    let mut pairs = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        let Some((find, replace)) = line.split_once('\t') else {
            return Err(DictionaryError::Validation {
                reason: format!("line {} has no tab between find and replace text", idx + 1),
            });
        };
        if find.is_empty() {
            return Err(DictionaryError::Validation {
                reason: format!("line {} has empty find text", idx + 1),
            });
        }

        pairs.push((find.to_string(), replace.to_string()));
    }

    Ok(pairs)
}
