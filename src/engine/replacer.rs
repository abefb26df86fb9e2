// Dictionary replacement - applies entries to text, forward or reversed
//
// Entries run in dictionary order, one left-to-right non-overlapping pass each.
// Later entries see the output of earlier ones.

use crate::dictionary::DictionaryEntry;

/// Which side of each entry is searched for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `find` → `replace`
    Forward,
    /// `replace` → `find`
    Reverse,
}

/// Apply every entry of `dictionary` to `text` in the given direction
pub fn apply(text: &str, dictionary: &[DictionaryEntry], direction: Direction) -> String {
    let mut output = text.to_string();

    for entry in dictionary {
        let (pattern, substitute) = match direction {
            Direction::Forward => (&entry.find, &entry.replace),
            Direction::Reverse => (&entry.replace, &entry.find),
        };

        // An empty pattern would match between every character
        if pattern.is_empty() {
            crate::trace!("Skipping entry {} with empty pattern", entry.id);
            continue;
        }

        if output.contains(pattern.as_str()) {
            output = output.replace(pattern.as_str(), substitute);
        }
    }

    output
}

/// Replace each entry's `find` with its `replace`
pub fn replace(text: &str, dictionary: &[DictionaryEntry]) -> String {
    apply(text, dictionary, Direction::Forward)
}

/// Replace each entry's `replace` with its `find`, in the same entry order
pub fn reverse_replace(text: &str, dictionary: &[DictionaryEntry]) -> String {
    apply(text, dictionary, Direction::Reverse)
}

#[cfg(test)]
#[path = "replacer_test.rs"]
mod tests;
