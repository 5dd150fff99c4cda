//! `lingo` — identify languages and file types from static clues.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use tracing_subscriber::EnvFilter;

use lingo_core::{Catalog, CatalogBuilder};
use lingo_langs::BuiltinLanguages;

mod identify;
mod output;

use identify::{identify, Identification};
use output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "lingo",
    version,
    about = "Identify languages and file types from static clues",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Paths to identify (shorthand for `lingo identify <PATH>...`)
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,

    /// Extra descriptor pack directories, scanned for lingo_*.toml files
    /// and registered after the built-in languages
    #[arg(long = "pack-dir", value_name = "DIR", global = true)]
    pack_dirs: Vec<PathBuf>,

    /// Enable diagnostic logging (or set LINGO_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Identify the given paths
    Identify {
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<PathBuf>,

        /// Only consult shebang-style (regex) magic rules
        #[arg(long)]
        shebang_only: bool,

        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// List every language in the catalog
    Langs {
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Walk a directory tree and summarise languages per file count
    Scan {
        #[arg(value_name = "DIR", default_value = ".")]
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let catalog = build_catalog(&cli.pack_dirs);

    match cli.command {
        Some(Command::Identify {
            paths,
            shebang_only,
            format,
        }) => run_identify(&catalog, &paths, shebang_only, format),
        Some(Command::Langs { format }) => output::print_langs(&catalog, format),
        Some(Command::Scan { dir }) => run_scan(&catalog, &dir),
        None if !cli.paths.is_empty() => {
            run_identify(&catalog, &cli.paths, false, OutputFormat::Text)
        }
        None => {
            anyhow::bail!("no paths given; try `lingo <PATH>...` or `lingo --help`")
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("lingo_core=debug,lingo=debug")
    } else {
        EnvFilter::try_from_env("LINGO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Built-ins first, then whatever the pack directories contribute,
/// overriding same-named built-ins.
fn build_catalog(pack_dirs: &[PathBuf]) -> Catalog {
    CatalogBuilder::new()
        .with_provider(&BuiltinLanguages)
        .with_descriptors(lingo_core::pack::discover_packs(pack_dirs))
        .build()
}

fn run_identify(
    catalog: &Catalog,
    paths: &[PathBuf],
    shebang_only: bool,
    format: OutputFormat,
) -> Result<()> {
    let results: Vec<Identification> = paths
        .iter()
        .map(|path| identify(catalog, path, shebang_only))
        .collect();
    output::print_identifications(&results, format)
}

fn run_scan(catalog: &Catalog, dir: &PathBuf) -> Result<()> {
    let files: Vec<PathBuf> = ignore::WalkBuilder::new(dir)
        .standard_filters(true)
        .build()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_some_and(|t| t.is_file()))
        .map(|entry| entry.into_path())
        .collect();

    let languages: Vec<Option<String>> = files
        .par_iter()
        .map(|path| identify(catalog, path, false).language)
        .collect();

    let mut counts: HashMap<String, usize> = HashMap::new();
    for language in &languages {
        let key = language.as_deref().unwrap_or("unknown").to_owned();
        *counts.entry(key).or_default() += 1;
    }
    let mut sorted: Vec<(String, usize)> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    output::print_scan_summary(&sorted, files.len());
    Ok(())
}
