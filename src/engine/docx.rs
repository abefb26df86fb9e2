// DOCX processing - replace inside word/document.xml, copy every other part as-is
//
// Matching runs over the raw XML, so a phrase split across formatting runs
// (`<w:r>` elements) is not found.

use std::io::{Cursor, Read, Write};
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

use super::replacer::{apply, Direction};
use crate::dictionary::DictionaryEntry;

/// Archive member holding the document body
pub const DOCUMENT_XML: &str = "word/document.xml";

/// True when `path` names a Word document by extension
pub fn is_docx(path: &std::path::Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("docx"))
}

/// Rewrite the document body of a DOCX archive held in memory
///
/// Every member keeps its name, order and compression method.
///
/// # Errors
/// A message describing the archive problem (not a zip, missing document body,
/// body not UTF-8)
pub fn replace_in_docx(
    archive_bytes: &[u8],
    dictionary: &[DictionaryEntry],
    direction: Direction,
) -> Result<Vec<u8>, String> {
    let mut archive =
        ZipArchive::new(Cursor::new(archive_bytes)).map_err(|e| format!("not a DOCX archive: {}", e))?;

    let document_xml = {
        let mut file = archive
            .by_name(DOCUMENT_XML)
            .map_err(|e| format!("{} missing: {}", DOCUMENT_XML, e))?;
        let mut xml = String::new();
        file.read_to_string(&mut xml)
            .map_err(|e| format!("{} unreadable: {}", DOCUMENT_XML, e))?;
        xml
    };
    let document_xml = apply(&document_xml, dictionary, direction);

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for i in 0..archive.len() {
        let mut file = archive.by_index(i).map_err(|e| e.to_string())?;
        let name = file.name().to_string();
        let options = SimpleFileOptions::default().compression_method(file.compression());

        if file.is_dir() {
            writer.add_directory(name, options).map_err(|e| e.to_string())?;
        } else if name == DOCUMENT_XML {
            writer.start_file(name, options).map_err(|e| e.to_string())?;
            writer
                .write_all(document_xml.as_bytes())
                .map_err(|e| e.to_string())?;
        } else {
            writer.start_file(name, options).map_err(|e| e.to_string())?;
            std::io::copy(&mut file, &mut writer).map_err(|e| e.to_string())?;
        }
    }

    let cursor = writer.finish().map_err(|e| e.to_string())?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
#[path = "docx_test.rs"]
mod tests;
