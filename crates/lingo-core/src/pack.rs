//! Descriptor packs: TOML files contributing languages to a catalog.
//!
//! Discovery is the host's responsibility — nothing here runs during
//! catalog assembly. A host that wants directory-based extension units
//! calls [`discover_packs`] with its directory list and registers the
//! result via [`CatalogBuilder::with_descriptors`](crate::CatalogBuilder::with_descriptors).
//!
//! A pack file is named `lingo_<something>.toml` and holds `[[language]]`
//! tables:
//!
//! ```toml
//! [[language]]
//! name = "Widget"
//! conforms_to = ["Text"]
//! extensions = [".wdg"]
//! filenames = ["Widgetfile"]
//! filename_patterns = ["^[Ww]idget.*$"]
//! default_encoding = "utf-8"
//!
//! [[language.magic]]
//! offset = 0
//! format = "regex"
//! pattern = '(?im)\A#!.*widget.*$'
//!
//! [[language.magic]]
//! format = ">L"
//! value = 0xcafe0001
//!
//! [[language.doctype]]
//! name = "widget"
//! public_id = "-//W//DTD Widget//EN"
//! ```
//!
//! Magic `format` values follow the original pack convention: `"string"`
//! (literal bytes, given as `pattern` text or `pattern_hex`), `"regex"`,
//! or a fixed-width layout (`">H"`, `"<H"`, `">L"`, `"<L"`) compared
//! against `value`. A rule that fails to validate is dropped with a
//! warning; the language keeps its remaining rules. A file that fails to
//! read or parse is an error from [`load_pack`] — [`discover_packs`]
//! absorbs such errors per file and keeps going.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Deserialize;
use tracing::warn;

use crate::descriptor::{Descriptor, DoctypeRule};
use crate::error::{LingoError, LingoResult};
use crate::magic::{MagicRule, NumberLayout};

/// Fixed naming convention for discoverable pack files.
pub const PACK_PREFIX: &str = "lingo_";
pub const PACK_SUFFIX: &str = ".toml";

/// Does a file name follow the `lingo_*.toml` pack convention?
pub fn is_pack_name(name: &str) -> bool {
    name.starts_with(PACK_PREFIX) && name.ends_with(PACK_SUFFIX)
}

#[derive(Debug, Deserialize)]
struct PackFile {
    #[serde(default)]
    language: Vec<LanguageSpec>,
}

#[derive(Debug, Deserialize)]
struct LanguageSpec {
    name: String,
    #[serde(default)]
    conforms_to: Vec<String>,
    #[serde(default)]
    extensions: Vec<String>,
    #[serde(default)]
    filenames: Vec<String>,
    #[serde(default)]
    filename_patterns: Vec<String>,
    #[serde(default)]
    mode_aliases: Vec<String>,
    #[serde(default)]
    default_encoding: Option<String>,
    #[serde(default)]
    encoding_decl_pattern: Option<String>,
    #[serde(default)]
    magic: Vec<MagicSpec>,
    #[serde(default)]
    doctype: Vec<DoctypeSpec>,
}

#[derive(Debug, Deserialize)]
struct MagicSpec {
    #[serde(default)]
    offset: usize,
    #[serde(default)]
    format: Option<String>,
    #[serde(default)]
    pattern: Option<String>,
    #[serde(default)]
    pattern_hex: Option<String>,
    #[serde(default)]
    value: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct DoctypeSpec {
    #[serde(default)]
    flavour: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    public_id: Option<String>,
    #[serde(default)]
    system_id: Option<String>,
}

/// Load one pack file into descriptors.
///
/// Read and parse failures are errors; individually malformed rules inside
/// a parseable file are dropped with a warning.
pub fn load_pack(path: &Path) -> LingoResult<Vec<Descriptor>> {
    let content = fs::read_to_string(path).map_err(|source| LingoError::PackRead {
        path: path.to_owned(),
        source,
    })?;
    let pack: PackFile = toml::from_str(&content).map_err(|source| LingoError::PackParse {
        path: path.to_owned(),
        source: Box::new(source),
    })?;
    Ok(pack
        .language
        .into_iter()
        .map(descriptor_from_spec)
        .collect())
}

/// Scan each directory (non-recursive) for `lingo_*.toml` files and load
/// them all, in lexical order per directory. A directory that cannot be
/// read or a pack that fails to load is skipped with a warning — one bad
/// unit never aborts assembly.
pub fn discover_packs<I, P>(dirs: I) -> Vec<Descriptor>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut descriptors = Vec::new();
    for dir in dirs {
        let dir = dir.as_ref();
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(dir = %dir.display(), error = %err, "could not scan pack directory");
                continue;
            }
        };
        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(is_pack_name)
            })
            .collect();
        paths.sort();
        for path in paths {
            match load_pack(&path) {
                Ok(pack) => descriptors.extend(pack),
                Err(err) => {
                    warn!(pack = %path.display(), error = %err, "could not load descriptor pack (skipping it)");
                }
            }
        }
    }
    descriptors
}

fn descriptor_from_spec(spec: LanguageSpec) -> Descriptor {
    let language = spec.name.clone();
    let mut builder = Descriptor::builder(spec.name)
        .conforms_to(spec.conforms_to)
        .extensions(spec.extensions)
        .filenames(spec.filenames)
        .mode_aliases(spec.mode_aliases);

    for pattern in spec.filename_patterns {
        match Regex::new(&pattern) {
            Ok(re) => builder = builder.filename_pattern(re),
            Err(err) => warn!(
                language = %language,
                pattern = %pattern,
                error = %err,
                "invalid filename pattern (dropping it)"
            ),
        }
    }
    if let Some(encoding) = spec.default_encoding {
        builder = builder.default_encoding(encoding);
    }
    if let Some(pattern) = spec.encoding_decl_pattern {
        match Regex::new(&pattern) {
            Ok(re) => builder = builder.encoding_decl_pattern(re),
            Err(err) => warn!(
                language = %language,
                pattern = %pattern,
                error = %err,
                "invalid encoding declaration pattern (dropping it)"
            ),
        }
    }
    for magic in spec.magic {
        if let Some(rule) = magic_from_spec(magic, &language) {
            builder = builder.magic(rule);
        }
    }
    for doctype in spec.doctype {
        let Some(name) = doctype.name else {
            warn!(language = %language, "doctype rule without a name (dropping it)");
            continue;
        };
        builder = builder.doctype(DoctypeRule::new(
            doctype.flavour.as_deref(),
            &name,
            doctype.public_id.as_deref(),
            doctype.system_id.as_deref(),
        ));
    }
    builder.build()
}

fn magic_from_spec(spec: MagicSpec, language: &str) -> Option<MagicRule> {
    let Some(format) = spec.format else {
        warn!(language = %language, "magic rule without a format (dropping it)");
        return None;
    };
    match format.as_str() {
        "string" => {
            let pattern = match (spec.pattern_hex, spec.pattern) {
                (Some(hex), _) => match parse_hex(&hex) {
                    Some(bytes) => bytes,
                    None => {
                        warn!(
                            language = %language,
                            pattern_hex = %hex,
                            "invalid hex byte pattern (dropping the rule)"
                        );
                        return None;
                    }
                },
                (None, Some(text)) => text.into_bytes(),
                (None, None) => {
                    warn!(language = %language, "string magic rule without a pattern (dropping it)");
                    return None;
                }
            };
            Some(MagicRule::bytes(spec.offset, pattern))
        }
        "regex" => {
            let Some(pattern) = spec.pattern else {
                warn!(language = %language, "regex magic rule without a pattern (dropping it)");
                return None;
            };
            match MagicRule::regex(spec.offset, &pattern) {
                Ok(rule) => Some(rule),
                Err(err) => {
                    warn!(
                        language = %language,
                        pattern = %pattern,
                        error = %err,
                        "invalid magic regex (dropping the rule)"
                    );
                    None
                }
            }
        }
        other => match NumberLayout::parse(other) {
            Some(layout) => match spec.value {
                Some(value) if value >= 0 => {
                    Some(MagicRule::number(spec.offset, layout, value as u64))
                }
                _ => {
                    warn!(
                        language = %language,
                        format = %other,
                        "numeric magic rule without a non-negative value (dropping it)"
                    );
                    None
                }
            },
            None => {
                warn!(
                    language = %language,
                    format = %other,
                    "unparseable magic format (dropping the rule)"
                );
                None
            }
        },
    }
}

/// Decode a hex string (whitespace allowed between byte pairs).
fn parse_hex(hex: &str) -> Option<Vec<u8>> {
    let compact: String = hex.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() || compact.len() % 2 != 0 {
        return None;
    }
    (0..compact.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&compact[i..i + 2], 16).ok())
        .collect()
}
