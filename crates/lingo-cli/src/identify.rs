//! Classifying one path: filename first, then extension, then a bounded
//! leading byte window for magic probing.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use lingo_core::{Catalog, Lang};
use serde::Serialize;
use tracing::debug;

/// How much of the file head is read for magic probing.
pub const HEAD_WINDOW: usize = 8 * 1024;

/// Which clue produced the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Clue {
    Filename,
    Extension,
    Magic,
}

impl Clue {
    pub fn as_str(self) -> &'static str {
        match self {
            Clue::Filename => "filename",
            Clue::Extension => "extension",
            Clue::Magic => "magic",
        }
    }
}

/// The outcome of classifying one path.
#[derive(Debug, Serialize)]
pub struct Identification {
    pub path: PathBuf,
    /// `None` when nothing matched; an expected outcome, not an error.
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_by: Option<Clue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_text: Option<bool>,
}

impl Identification {
    fn matched(path: &Path, lang: Lang<'_>, clue: Clue) -> Self {
        Identification {
            path: path.to_owned(),
            language: Some(lang.name().to_owned()),
            matched_by: Some(clue),
            encoding: lang.default_encoding().map(str::to_owned),
            is_text: Some(lang.is_text()),
        }
    }

    fn unmatched(path: &Path) -> Self {
        Identification {
            path: path.to_owned(),
            language: None,
            matched_by: None,
            encoding: None,
            is_text: None,
        }
    }
}

/// Classify `path` against `catalog`.
///
/// Precedence: exact filename and filename patterns, then the extension,
/// then magic probing over the leading [`HEAD_WINDOW`] bytes. An
/// unreadable file simply ends the chain after the path-based clues.
pub fn identify(catalog: &Catalog, path: &Path, shebang_only: bool) -> Identification {
    if let Some(filename) = path.file_name().and_then(|n| n.to_str()) {
        if let Some(lang) = catalog.by_filename(filename) {
            return Identification::matched(path, lang, Clue::Filename);
        }
    }
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        if let Some(lang) = catalog.by_extension(&format!(".{ext}")) {
            return Identification::matched(path, lang, Clue::Extension);
        }
    }
    match read_head(path) {
        Ok(head) => {
            if let Some(lang) = catalog.by_magic(&head, shebang_only) {
                return Identification::matched(path, lang, Clue::Magic);
            }
        }
        Err(err) => {
            debug!(path = %path.display(), error = %err, "could not read file head");
        }
    }
    Identification::unmatched(path)
}

fn read_head(path: &Path) -> std::io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut head = Vec::with_capacity(HEAD_WINDOW);
    file.take(HEAD_WINDOW as u64).read_to_end(&mut head)?;
    Ok(head)
}
