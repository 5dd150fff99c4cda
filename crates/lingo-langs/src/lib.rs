//! # lingo-langs
//!
//! The built-in language descriptors for the lingo identification engine,
//! split by family:
//!
//! - programming languages (Python, Perl, the shells, ...)
//! - document and markup languages (HTML, XML, YAML, ...)
//! - binary formats (ELF, Mach-O, images, archives)
//! - template languages (RHTML, Django, Mason, ...)
//! - everything else (Makefile, CSS, diff, ...)
//!
//! Most callers want [`catalog`] or the [`BuiltinLanguages`] provider:
//!
//! ```
//! let catalog = lingo_langs::catalog();
//! let python = catalog.by_extension(".py").unwrap();
//! assert_eq!(python.name(), "Python");
//! assert!(python.is_text());
//! ```

mod binary;
mod doc;
mod other;
mod prog;
mod template;

use lingo_core::{Catalog, CatalogBuilder, Descriptor, DescriptorProvider, MagicRule};
use regex::Regex;

/// Compile a built-in pattern; the data below is static, so a failure is a
/// bug in this crate.
pub(crate) fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern must compile")
}

/// Shebang-style magic rule anchored at the window start.
pub(crate) fn shebang(pattern: &str) -> MagicRule {
    MagicRule::regex(0, pattern).expect("built-in magic pattern must compile")
}

/// The base descriptor almost everything textual conforms to.
fn text() -> Descriptor {
    Descriptor::builder("Text")
        .extensions([".txt", ".text"])
        .filenames(["README", "COPYING", "LICENSE", "MANIFEST"])
        .build()
}

/// Every built-in descriptor, in registration order: `Text` first, then
/// the families. Order matters — it is the magic-probe precedence (Tcl's
/// exec-restart shebang must be probed before Bourne shell's, which this
/// order guarantees).
pub fn builtin_descriptors() -> Vec<Descriptor> {
    let mut all = vec![text()];
    all.extend(prog::descriptors());
    all.extend(doc::descriptors());
    all.extend(binary::descriptors());
    all.extend(template::descriptors());
    all.extend(other::descriptors());
    all
}

/// [`DescriptorProvider`] handing out the built-in set, for use with
/// [`CatalogBuilder::with_provider`].
pub struct BuiltinLanguages;

impl DescriptorProvider for BuiltinLanguages {
    fn name(&self) -> &str {
        "BuiltinLanguages"
    }

    fn descriptors(&self) -> Vec<Descriptor> {
        builtin_descriptors()
    }
}

/// A catalog holding exactly the built-in languages.
pub fn catalog() -> Catalog {
    CatalogBuilder::new().with_provider(&BuiltinLanguages).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn no_duplicate_normalized_names() {
        let mut seen = HashSet::new();
        for d in builtin_descriptors() {
            assert!(
                seen.insert(d.name().to_lowercase()),
                "duplicate built-in name: {}",
                d.name()
            );
        }
    }

    #[test]
    fn every_conforms_to_base_is_registered() {
        let names: HashSet<String> = builtin_descriptors()
            .iter()
            .map(|d| d.name().to_lowercase())
            .collect();
        for d in builtin_descriptors() {
            for base in d.conforms_to() {
                assert!(
                    names.contains(&base.to_lowercase()),
                    "{} conforms to unregistered {}",
                    d.name(),
                    base
                );
            }
        }
    }

    #[test]
    fn every_extension_starts_with_a_dot() {
        for d in builtin_descriptors() {
            for ext in d.extensions() {
                assert!(ext.starts_with('.'), "{}: {}", d.name(), ext);
            }
        }
    }

    #[test]
    fn every_name_is_nonempty() {
        for d in builtin_descriptors() {
            assert!(!d.name().is_empty());
        }
    }

    #[test]
    fn text_registers_first() {
        assert_eq!(builtin_descriptors()[0].name(), "Text");
    }

    #[test]
    fn catalog_resolves_core_languages() {
        let cat = catalog();
        for name in ["Text", "Python", "Perl", "HTML", "XML", "Makefile", "ELF"] {
            assert!(cat.resolve(name).is_ok(), "missing {name}");
        }
    }

    #[test]
    fn tcl_probes_before_bourne_shell() {
        let descriptors = builtin_descriptors();
        let position = |name: &str| {
            descriptors
                .iter()
                .position(|d| d.name() == name)
                .unwrap_or_else(|| panic!("missing {name}"))
        };
        assert!(position("Tcl") < position("Bourne shell"));
    }
}
