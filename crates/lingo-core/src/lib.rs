//! # lingo-core
//!
//! A language/file-type identification engine. Given static clues about a
//! file — extension, filename, a leading byte window, an XML doctype, or
//! an editor-mode hint — it resolves the best-matching known language
//! descriptor, and answers coarser "conforms to" questions ("is this
//! plain text?") through a small inheritance relation.
//!
//! ```
//! use lingo_core::{Catalog, Descriptor, MagicRule};
//!
//! let mut builder = Catalog::builder();
//! builder.register(
//!     Descriptor::builder("Text")
//!         .extensions([".txt"])
//!         .default_encoding("utf-8")
//!         .build(),
//! );
//! builder.register(
//!     Descriptor::builder("Ruby")
//!         .conforms_to(["Text"])
//!         .extensions([".rb"])
//!         .magic(MagicRule::regex(0, r"(?im)\A#!.*ruby.*$")?)
//!         .build(),
//! );
//! let catalog = builder.build();
//!
//! let ruby = catalog.by_magic(b"#!/usr/bin/env ruby\n", false).unwrap();
//! assert_eq!(ruby.name(), "Ruby");
//! assert!(ruby.is_text());
//! assert_eq!(ruby.default_encoding(), Some("utf-8"));
//! # Ok::<(), regex::Error>(())
//! ```
//!
//! The built-in language set lives in the `lingo-langs` crate; this crate
//! only defines the engine. Hosts that want directory-discoverable
//! extension units load them explicitly through the [`pack`] module
//! (feature `filesystem`, on by default) — the catalog itself never
//! touches the filesystem.

mod catalog;
mod conformance;
mod descriptor;
mod error;
mod index;
mod magic;
#[cfg(feature = "filesystem")]
pub mod pack;

pub use catalog::{Catalog, CatalogBuilder, CaseSensitivity, DescriptorProvider, Lang};
pub use descriptor::{Descriptor, DescriptorBuilder, DoctypeRule, FilenameRule};
pub use error::{LingoError, LingoResult};
pub use magic::{MagicRule, NumberLayout};
