// Entry validation - the non-empty find rule plus opt-in reversibility checks

use serde::{Deserialize, Serialize};

use super::store::{DictionaryEntry, DictionaryError};

/// Extra rules a new entry must satisfy before it is accepted
///
/// Both checks exist to keep a dictionary safely reversible and are off by default.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationPolicy {
    /// `find` and `replace` must have the same number of characters
    pub require_equal_length: bool,
    /// A new `find` (or `replace`) must not contain or be contained in an existing one
    pub reject_overlapping: bool,
}

impl ValidationPolicy {
    /// Strict policy: both reversibility checks enabled
    pub fn strict() -> Self {
        Self {
            require_equal_length: true,
            reject_overlapping: true,
        }
    }

    /// Validate a candidate pair against the entries already accepted
    pub(crate) fn check(
        &self,
        find: &str,
        replace: &str,
        existing: &[DictionaryEntry],
    ) -> Result<(), DictionaryError> {
        if find.is_empty() {
            return Err(invalid("find text cannot be empty".to_string()));
        }

        if self.require_equal_length {
            let (find_len, replace_len) = (find.chars().count(), replace.chars().count());
            if find_len != replace_len {
                return Err(invalid(format!(
                    "'{}' has {} characters but '{}' has {}; lengths must match",
                    find, find_len, replace, replace_len
                )));
            }
        }

        if self.reject_overlapping {
            if let Some(other) = existing.iter().find(|e| overlaps(&e.find, find)) {
                return Err(invalid(format!(
                    "find text '{}' overlaps existing find text '{}'",
                    find, other.find
                )));
            }
            if !replace.is_empty() {
                if let Some(other) = existing
                    .iter()
                    .find(|e| !e.replace.is_empty() && overlaps(&e.replace, replace))
                {
                    return Err(invalid(format!(
                        "replacement '{}' overlaps existing replacement '{}'",
                        replace, other.replace
                    )));
                }
            }
        }

        Ok(())
    }
}

/// True when either string contains the other
fn overlaps(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

fn invalid(reason: String) -> DictionaryError {
    DictionaryError::Validation { reason }
}

#[cfg(test)]
#[path = "validation_test.rs"]
mod tests;
