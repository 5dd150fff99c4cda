//! Derived lookup tables.
//!
//! One linear pass over the catalog's descriptors, in registration order,
//! yields the five tables the lookup engine reads. The pass is run eagerly
//! by [`CatalogBuilder::build`](crate::CatalogBuilder::build); afterwards
//! the tables are immutable, so queries need no synchronisation.

use std::collections::HashMap;

use regex::Regex;
use tracing::{debug, warn};

use crate::catalog::CaseSensitivity;
use crate::descriptor::{Descriptor, FilenameRule};
use crate::magic::MagicRule;

/// Index entries refer to descriptors by their slot in the catalog's
/// registration-ordered storage.
pub(crate) type LangId = usize;

#[derive(Debug, Default)]
pub(crate) struct LanguageIndex {
    /// extension (case-folded per platform profile) -> language
    pub(crate) by_ext: HashMap<String, LangId>,
    /// exact filename -> language
    pub(crate) by_filename: HashMap<String, LangId>,
    /// ordered filename patterns; first match wins
    pub(crate) filename_patterns: Vec<(Regex, LangId)>,
    /// ordered magic probe list, flattened across descriptors
    pub(crate) magic: Vec<(MagicRule, LangId)>,
    /// doctype public id -> language (literal, case-sensitive keys;
    /// last registered wins)
    pub(crate) by_public_id: HashMap<String, LangId>,
    /// doctype system id -> language (same policy)
    pub(crate) by_system_id: HashMap<String, LangId>,
    /// editor-mode alias -> language
    pub(crate) by_mode: HashMap<String, LangId>,
}

impl LanguageIndex {
    pub(crate) fn build(descriptors: &[Descriptor], case: CaseSensitivity) -> Self {
        let mut index = LanguageIndex::default();

        for (id, descriptor) in descriptors.iter().enumerate() {
            index.add_extensions(descriptor, id, case);
            index.add_filename_rules(descriptor, id);
            index.add_magic_rules(descriptor, id);
            index.add_doctype_rules(descriptor, id);
            for alias in descriptor.mode_aliases() {
                index.by_mode.insert(alias.clone(), id);
            }
        }

        index
    }

    fn add_extensions(&mut self, descriptor: &Descriptor, id: LangId, case: CaseSensitivity) {
        for ext in descriptor.extensions() {
            if !ext.starts_with('.') {
                warn!(
                    language = descriptor.name(),
                    extension = %ext,
                    "extension does not start with '.'"
                );
            }
            let key = case.fold(ext);
            if let Some(&prev) = self.by_ext.get(&key) {
                debug!(
                    extension = %key,
                    winner = descriptor.name(),
                    previous_slot = prev,
                    "extension claimed by more than one language; later registration wins"
                );
            }
            self.by_ext.insert(key, id);
        }
    }

    fn add_filename_rules(&mut self, descriptor: &Descriptor, id: LangId) {
        for rule in descriptor.filename_rules() {
            match rule {
                FilenameRule::Exact(name) => {
                    self.by_filename.insert(name.clone(), id);
                }
                FilenameRule::Pattern(pattern) => {
                    self.filename_patterns.push((pattern.clone(), id));
                }
            }
        }
    }

    fn add_magic_rules(&mut self, descriptor: &Descriptor, id: LangId) {
        for rule in descriptor.magic_rules() {
            if let MagicRule::Bytes { pattern, .. } = rule {
                if pattern.is_empty() {
                    warn!(
                        language = descriptor.name(),
                        "magic rule with empty byte pattern (dropping it)"
                    );
                    continue;
                }
            }
            self.magic.push((rule.clone(), id));
        }
    }

    fn add_doctype_rules(&mut self, descriptor: &Descriptor, id: LangId) {
        for doctype in descriptor.doctype_rules() {
            if doctype.public_id.is_none() && doctype.system_id.is_none() {
                debug!(
                    language = descriptor.name(),
                    doctype = %doctype.common_name,
                    "doctype rule carries neither public nor system id (dropping it)"
                );
                continue;
            }
            if let Some(public_id) = &doctype.public_id {
                self.by_public_id.insert(public_id.clone(), id);
            }
            if let Some(system_id) = &doctype.system_id {
                self.by_system_id.insert(system_id.clone(), id);
            }
        }
    }
}
