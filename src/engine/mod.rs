//! Replacement engine.
//!
//! Pure text transforms (`replacer`, `unicode`) plus the file variants that wrap
//! them with one read and one write through a [`FileIo`] capability.

mod docx;
mod file;
mod io;
mod replacer;
mod unicode;

pub use docx::{is_docx, replace_in_docx, DOCUMENT_XML};
pub use file::{default_destination, execute_replace_and_save, reverse_replace_and_save, OutputNaming};
pub use io::{FileIo, SystemFileIo};
pub use replacer::{apply, replace, reverse_replace, Direction};
pub use unicode::{from_unicode, to_unicode, to_unicode_with_case, unicode_to_text_and_reverse_replace, HexCase};

use std::path::PathBuf;

/// Errors surfaced by the engine
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Malformed `\u` escape while decoding
    #[error("Malformed escape '{fragment}' at byte {offset}")]
    Format { offset: usize, fragment: String },
    /// File read or write failed
    #[error("I/O error on {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },
    /// DOCX archive could not be processed
    #[error("Invalid document {}: {message}", .path.display())]
    Document { path: PathBuf, message: String },
}

impl EngineError {
    pub(crate) fn io(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        let message = match err.kind() {
            std::io::ErrorKind::PermissionDenied => format!("permission denied ({})", err),
            std::io::ErrorKind::NotFound => format!("file not found ({})", err),
            _ => err.to_string(),
        };
        EngineError::Io {
            path: path.into(),
            message,
        }
    }
}
