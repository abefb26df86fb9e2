// File access capability used by the file variants of the engine

use std::fs::{self, File};
use std::io::{Error, ErrorKind, Write};
use std::path::Path;

/// Trait for file system operations (allows mocking in tests)
pub trait FileIo {
    /// Read the full contents of a file
    fn read(&self, path: &Path) -> Result<Vec<u8>, Error>;

    /// Write `contents` to `path`, replacing any existing file
    fn write(&self, path: &Path, contents: &[u8]) -> Result<(), Error>;

    /// Read a file that must be UTF-8 text
    fn read_to_string(&self, path: &Path) -> Result<String, Error> {
        String::from_utf8(self.read(path)?)
            .map_err(|_| Error::new(ErrorKind::InvalidData, "file is not valid UTF-8 text"))
    }
}

/// Production file access on the real filesystem
///
/// Writes go to a sibling temp file which is synced and renamed over the target,
/// so a failed write never leaves a half-written output behind. The dictionary
/// store and settings persist through the same path.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemFileIo;

impl FileIo for SystemFileIo {
    #[cfg_attr(coverage_nightly, coverage(off))]
    fn read(&self, path: &Path) -> Result<Vec<u8>, Error> {
        fs::read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<(), Error> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let temp_path = path.with_file_name(format!(".{}.tmp", file_name));

        let result = (|| -> std::io::Result<()> {
            let mut file = File::create(&temp_path)?;
            file.write_all(contents)?;
            file.sync_all()?;
            fs::rename(&temp_path, path)
        })();

        if result.is_err() {
            let _ = fs::remove_file(&temp_path);
        }
        result
    }
}
