//! Report rendering: plain text (colored) and JSON.

use anyhow::Result;
use colored::Colorize;
use lingo_core::Catalog;
use serde::Serialize;

use crate::identify::Identification;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn print_identifications(results: &[Identification], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for id in results {
                let path = id.path.display();
                match &id.language {
                    Some(language) => {
                        let clue = id
                            .matched_by
                            .map(|c| c.as_str())
                            .unwrap_or("unknown clue");
                        let mut details = format!("via {clue}");
                        if let Some(encoding) = &id.encoding {
                            details.push_str(&format!(", encoding {encoding}"));
                        }
                        println!("{path}: {} ({details})", language.green().bold());
                    }
                    None => println!("{path}: {}", "unknown".yellow()),
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(results)?);
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct LangRow<'a> {
    name: &'a str,
    extensions: &'a [String],
    conforms_to: &'a [String],
    is_text: bool,
}

pub fn print_langs(catalog: &Catalog, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for lang in catalog.languages() {
                let descriptor = lang.descriptor();
                print!("{}", lang.name().bold());
                if !descriptor.extensions().is_empty() {
                    print!(" [{}]", descriptor.extensions().join(" "));
                }
                if !descriptor.conforms_to().is_empty() {
                    let bases = format!("-> {}", descriptor.conforms_to().join(", "));
                    print!(" {}", bases.dimmed());
                }
                println!();
            }
        }
        OutputFormat::Json => {
            let rows: Vec<LangRow<'_>> = catalog
                .languages()
                .map(|lang| LangRow {
                    name: lang.name(),
                    extensions: lang.descriptor().extensions(),
                    conforms_to: lang.descriptor().conforms_to(),
                    is_text: lang.is_text(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }
    Ok(())
}

/// Per-language file counts from a tree scan, largest first.
pub fn print_scan_summary(counts: &[(String, usize)], total: usize) {
    for (language, count) in counts {
        println!("{:>8}  {}", count, language.bold());
    }
    println!("{:>8}  files scanned", total);
}
