// File processing - read, replace, write
//
// One read and one write per call, no intermediate state. Output defaults to a
// sibling file named after the source with a direction-specific suffix.
// `.docx` sources have their document body rewritten; anything else is UTF-8 text.

use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::docx::{is_docx, replace_in_docx};
use super::io::FileIo;
use super::replacer::{apply, Direction};
use super::EngineError;
use crate::dictionary::DictionaryEntry;

/// Suffixes appended to the source file stem when no destination is given
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct OutputNaming {
    /// Used by forward replacement (e.g. `notes.txt` → `notes_processed.txt`)
    pub forward_suffix: String,
    /// Used by reverse replacement (e.g. `notes.txt` → `notes_reversed.txt`)
    pub reverse_suffix: String,
}

impl Default for OutputNaming {
    fn default() -> Self {
        Self {
            forward_suffix: "_processed".to_string(),
            reverse_suffix: "_reversed".to_string(),
        }
    }
}

impl OutputNaming {
    fn suffix(&self, direction: Direction) -> &str {
        match direction {
            Direction::Forward => &self.forward_suffix,
            Direction::Reverse => &self.reverse_suffix,
        }
    }
}

/// Output path next to `source`: `<stem><suffix>.<ext>`
pub fn default_destination(source: &Path, direction: Direction, naming: &OutputNaming) -> PathBuf {
    let mut name: OsString = source
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_default();
    name.push(naming.suffix(direction));
    if let Some(ext) = source.extension() {
        name.push(".");
        name.push(ext);
    }
    source.with_file_name(name)
}

/// Replace `find` → `replace` in a file and save the result
///
/// # Arguments
/// * `io` - File access capability
/// * `source` - File to read
/// * `destination` - Output path; `None` derives one from `source` and `naming`.
///   May equal `source` for an in-place rewrite.
/// * `dictionary` - Entries in match-precedence order
///
/// # Returns
/// The path the output was written to
pub fn execute_replace_and_save<I: FileIo + ?Sized>(
    io: &I,
    source: &Path,
    destination: Option<&Path>,
    dictionary: &[DictionaryEntry],
    naming: &OutputNaming,
) -> Result<PathBuf, EngineError> {
    process_file(io, source, destination, dictionary, naming, Direction::Forward)
}

/// Replace `replace` → `find` in a file and save the result
///
/// Same contract as [`execute_replace_and_save`].
pub fn reverse_replace_and_save<I: FileIo + ?Sized>(
    io: &I,
    source: &Path,
    destination: Option<&Path>,
    dictionary: &[DictionaryEntry],
    naming: &OutputNaming,
) -> Result<PathBuf, EngineError> {
    process_file(io, source, destination, dictionary, naming, Direction::Reverse)
}

fn process_file<I: FileIo + ?Sized>(
    io: &I,
    source: &Path,
    destination: Option<&Path>,
    dictionary: &[DictionaryEntry],
    naming: &OutputNaming,
    direction: Direction,
) -> Result<PathBuf, EngineError> {
    let destination = destination
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_destination(source, direction, naming));

    crate::debug!(
        "Processing {:?} -> {:?} ({:?}, {} entries)",
        source,
        destination,
        direction,
        dictionary.len()
    );

    let output = if is_docx(source) {
        let archive = io.read(source).map_err(|e| EngineError::io(source, &e))?;
        replace_in_docx(&archive, dictionary, direction).map_err(|message| EngineError::Document {
            path: source.to_path_buf(),
            message,
        })?
    } else {
        let contents = io
            .read_to_string(source)
            .map_err(|e| EngineError::io(source, &e))?;
        apply(&contents, dictionary, direction).into_bytes()
    };

    io.write(&destination, &output)
        .map_err(|e| EngineError::io(&destination, &e))?;

    crate::info!("File saved as {:?}", destination);
    Ok(destination)
}

#[cfg(test)]
#[path = "file_test.rs"]
mod tests;
