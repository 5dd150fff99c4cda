//! The catalog: every registered [`Descriptor`], the derived lookup
//! tables, and the public query surface.
//!
//! A catalog is assembled once through [`CatalogBuilder`] — built-ins
//! first, then whatever the host contributes — and is immutable after
//! [`build`](CatalogBuilder::build). The index is derived eagerly during
//! `build`, so queries are plain reads and the catalog is freely shared
//! across threads. "Adding more descriptors later" means building a new
//! catalog.

use std::collections::HashMap;
use std::fmt;

use regex::Regex;
use tracing::{debug, warn};

use crate::conformance;
use crate::descriptor::{norm, Descriptor};
use crate::error::{LingoError, LingoResult};
use crate::index::{LangId, LanguageIndex};

/// Platform case-folding policy for extension lookups.
///
/// Filesystems on Windows and macOS are conventionally case-insensitive;
/// extensions are lower-cased both when indexed and when queried there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseSensitivity {
    Sensitive,
    Insensitive,
}

impl CaseSensitivity {
    /// The profile matching the compilation target.
    pub fn native() -> Self {
        if cfg!(any(target_os = "windows", target_os = "macos")) {
            CaseSensitivity::Insensitive
        } else {
            CaseSensitivity::Sensitive
        }
    }

    pub(crate) fn fold(self, s: &str) -> String {
        match self {
            CaseSensitivity::Sensitive => s.to_owned(),
            CaseSensitivity::Insensitive => s.to_lowercase(),
        }
    }
}

/// A source of descriptors: the redesigned "extension unit".
///
/// The catalog never discovers units itself; the host loads whatever units
/// it wants (see [`pack`](crate::pack) for the TOML loader) and registers
/// them explicitly via [`CatalogBuilder::with_provider`].
pub trait DescriptorProvider: Send + Sync {
    /// Human-readable name for this provider (used in logging).
    ///
    /// Defaults to the unqualified type name.
    fn name(&self) -> &str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }

    /// The descriptors this provider contributes, in registration order.
    fn descriptors(&self) -> Vec<Descriptor>;
}

/// Builder for [`Catalog`].
///
/// Registration order matters: it defines magic-probe and filename-pattern
/// precedence. Registering a name that is already present replaces the
/// earlier descriptor in place, keeping its slot in that order.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    slots: Vec<Descriptor>,
    by_norm_name: HashMap<String, LangId>,
    case: Option<CaseSensitivity>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the platform case-folding profile (defaults to
    /// [`CaseSensitivity::native`]).
    pub fn case_sensitivity(mut self, case: CaseSensitivity) -> Self {
        self.case = Some(case);
        self
    }

    /// Add or replace (by normalized name) a descriptor.
    pub fn register(&mut self, descriptor: Descriptor) {
        if descriptor.name().is_empty() {
            warn!("descriptor with an empty name (skipping it)");
            return;
        }
        let key = descriptor.norm_name();
        match self.by_norm_name.get(&key) {
            Some(&slot) => {
                debug!(
                    language = descriptor.name(),
                    "replacing an earlier registration with the same name"
                );
                self.slots[slot] = descriptor;
            }
            None => {
                self.by_norm_name.insert(key, self.slots.len());
                self.slots.push(descriptor);
            }
        }
    }

    /// Register every descriptor from an iterator.
    pub fn with_descriptors(mut self, descriptors: impl IntoIterator<Item = Descriptor>) -> Self {
        for descriptor in descriptors {
            self.register(descriptor);
        }
        self
    }

    /// Register everything a provider contributes.
    pub fn with_provider(mut self, provider: &dyn DescriptorProvider) -> Self {
        debug!(provider = provider.name(), "registering provider descriptors");
        for descriptor in provider.descriptors() {
            self.register(descriptor);
        }
        self
    }

    /// Derive the lookup tables and freeze the catalog.
    pub fn build(self) -> Catalog {
        let case = self.case.unwrap_or_else(CaseSensitivity::native);
        let index = LanguageIndex::build(&self.slots, case);
        Catalog {
            descriptors: self.slots,
            by_norm_name: self.by_norm_name,
            index,
            case,
        }
    }
}

/// The assembled, immutable set of known languages and the query surface
/// over it.
///
/// All lookup operations are pure reads; absence of a match is a normal
/// outcome expressed as `None`. Only [`resolve`](Catalog::resolve) can
/// fail, with [`LingoError::UnknownLanguage`].
pub struct Catalog {
    descriptors: Vec<Descriptor>,
    by_norm_name: HashMap<String, LangId>,
    index: LanguageIndex,
    case: CaseSensitivity,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// Number of registered languages.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// The case-folding profile this catalog was built with.
    pub fn case_sensitivity(&self) -> CaseSensitivity {
        self.case
    }

    /// Iterate every language in registration order.
    pub fn languages(&self) -> impl Iterator<Item = Lang<'_>> {
        self.descriptors
            .iter()
            .map(move |descriptor| Lang { catalog: self, descriptor })
    }

    /// Resolve a language by name (case-insensitive).
    pub fn resolve(&self, name: &str) -> LingoResult<Lang<'_>> {
        self.by_norm_name
            .get(&norm(name))
            .map(|&id| self.lang(id))
            .ok_or_else(|| LingoError::UnknownLanguage {
                name: name.to_owned(),
            })
    }

    /// Look up by filename extension (`".py"`). Case-folded per the
    /// catalog's platform profile.
    pub fn by_extension(&self, ext: &str) -> Option<Lang<'_>> {
        self.index
            .by_ext
            .get(&self.case.fold(ext))
            .map(|&id| self.lang(id))
    }

    /// Look up by filename: the exact-match table first, then the ordered
    /// pattern list. First matching pattern wins, not best match.
    pub fn by_filename(&self, filename: &str) -> Option<Lang<'_>> {
        if let Some(&id) = self.index.by_filename.get(filename) {
            return Some(self.lang(id));
        }
        self.index
            .filename_patterns
            .iter()
            .find(|(pattern, _)| pattern.is_match(filename))
            .map(|&(_, id)| self.lang(id))
    }

    /// Probe a leading byte window against the ordered magic table and
    /// return the first structural match.
    ///
    /// With `shebang_only` every non-regex rule is skipped — a shortcut
    /// for callers only interested in interpreter lines. A window shorter
    /// than a rule's span is a non-match for that rule, never an error.
    pub fn by_magic(&self, head: &[u8], shebang_only: bool) -> Option<Lang<'_>> {
        self.index
            .magic
            .iter()
            .filter(|(rule, _)| !shebang_only || rule.is_regex())
            .find(|(rule, _)| rule.matches(head))
            .map(|&(_, id)| self.lang(id))
    }

    /// Look up by doctype ids. A public-id match takes precedence; the
    /// system id is only consulted when the public id finds nothing.
    /// Ids are compared literally (case-sensitively).
    pub fn by_doctype(
        &self,
        public_id: Option<&str>,
        system_id: Option<&str>,
    ) -> Option<Lang<'_>> {
        if let Some(id) = public_id.and_then(|pid| self.index.by_public_id.get(pid)) {
            return Some(self.lang(*id));
        }
        system_id
            .and_then(|sid| self.index.by_system_id.get(sid))
            .map(|&id| self.lang(id))
    }

    /// Look up by editor-mode alias; an alias that happens to equal a
    /// language's own name still resolves.
    pub fn by_mode(&self, alias: &str) -> Option<Lang<'_>> {
        if let Some(&id) = self.index.by_mode.get(alias) {
            return Some(self.lang(id));
        }
        self.resolve(alias).ok()
    }

    pub(crate) fn descriptor_by_norm(&self, norm_name: &str) -> Option<&Descriptor> {
        self.by_norm_name
            .get(norm_name)
            .map(|&id| &self.descriptors[id])
    }

    fn lang(&self, id: LangId) -> Lang<'_> {
        Lang {
            catalog: self,
            descriptor: &self.descriptors[id],
        }
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("languages", &self.descriptors.len())
            .field("case", &self.case)
            .finish()
    }
}

/// A language resolved from a [`Catalog`]: a descriptor plus the catalog
/// it belongs to, so conformance questions can be answered in place.
#[derive(Clone, Copy)]
pub struct Lang<'a> {
    catalog: &'a Catalog,
    descriptor: &'a Descriptor,
}

impl<'a> Lang<'a> {
    pub fn name(&self) -> &'a str {
        self.descriptor.name()
    }

    pub fn descriptor(&self) -> &'a Descriptor {
        self.descriptor
    }

    /// Does this language conform to `target`, directly or transitively?
    pub fn conforms_to(&self, target: &str) -> bool {
        conformance::conforms_to(self.catalog, self.descriptor, target)
    }

    /// The value of an attribute, inheriting from the conforms-to bases
    /// when this language leaves it unset.
    pub fn conformant_attr<T, F>(&self, get: F) -> Option<T>
    where
        F: Fn(&'a Descriptor) -> Option<T>,
    {
        conformance::conformant_attr(self.catalog, self.descriptor, &get)
    }

    /// Convenience: does this language conform to `"Text"`?
    pub fn is_text(&self) -> bool {
        self.conforms_to("Text")
    }

    /// The mandated encoding, inherited through conformance.
    pub fn default_encoding(&self) -> Option<&'a str> {
        self.conformant_attr(|d| d.default_encoding())
    }

    /// The encoding-declaration pattern, inherited through conformance.
    pub fn encoding_decl_pattern(&self) -> Option<&'a Regex> {
        self.conformant_attr(|d| d.encoding_decl_pattern())
    }
}

impl fmt::Debug for Lang<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lang({:?})", self.descriptor.name())
    }
}

impl PartialEq for Lang<'_> {
    /// Two handles are equal when they point at the same descriptor slot.
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.descriptor, other.descriptor)
    }
}
