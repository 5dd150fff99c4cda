//! The conforms-to resolver.
//!
//! Conformance is a directed graph over normalized language names, walked
//! depth-first in declaration order. The graph is expected to be a DAG but
//! cycles must not hang the walk: a name already on the current path is
//! treated as a non-match rather than recursed into. Base names that do
//! not resolve in the catalog are non-matches too, logged at debug level —
//! unresolved references are tolerated until actually walked.

use std::collections::HashSet;

use tracing::debug;

use crate::catalog::Catalog;
use crate::descriptor::{norm, Descriptor};

/// Does `descriptor` conform to `target`? Reflexive on the normalized
/// name, then a cycle-guarded DFS over the declared bases.
pub(crate) fn conforms_to(catalog: &Catalog, descriptor: &Descriptor, target: &str) -> bool {
    let target = norm(target);
    let mut visited = HashSet::new();
    conforms_walk(catalog, descriptor, &target, &mut visited)
}

fn conforms_walk(
    catalog: &Catalog,
    descriptor: &Descriptor,
    target: &str,
    visited: &mut HashSet<String>,
) -> bool {
    if descriptor.norm_name() == target {
        return true;
    }
    if !visited.insert(descriptor.norm_name()) {
        return false;
    }
    for base in descriptor.conforms_to() {
        // A declared base name matches even when it never resolves to a
        // registered descriptor.
        if norm(base) == target {
            return true;
        }
        match catalog.descriptor_by_norm(&norm(base)) {
            Some(base_descriptor) => {
                if conforms_walk(catalog, base_descriptor, target, visited) {
                    return true;
                }
            }
            None => debug!(
                language = descriptor.name(),
                base = %base,
                "conforms-to base is not registered; treating as non-match"
            ),
        }
    }
    false
}

/// The descriptor's own value for an attribute if set, otherwise the first
/// value found along the same ordered, cycle-guarded DFS over its bases.
pub(crate) fn conformant_attr<'a, T, F>(
    catalog: &'a Catalog,
    descriptor: &'a Descriptor,
    get: &F,
) -> Option<T>
where
    F: Fn(&'a Descriptor) -> Option<T>,
{
    let mut visited = HashSet::new();
    attr_walk(catalog, descriptor, get, &mut visited)
}

fn attr_walk<'a, T, F>(
    catalog: &'a Catalog,
    descriptor: &'a Descriptor,
    get: &F,
    visited: &mut HashSet<String>,
) -> Option<T>
where
    F: Fn(&'a Descriptor) -> Option<T>,
{
    if !visited.insert(descriptor.norm_name()) {
        return None;
    }
    if let Some(value) = get(descriptor) {
        return Some(value);
    }
    for base in descriptor.conforms_to() {
        match catalog.descriptor_by_norm(&norm(base)) {
            Some(base_descriptor) => {
                if let Some(value) = attr_walk(catalog, base_descriptor, get, visited) {
                    return Some(value);
                }
            }
            None => debug!(
                language = descriptor.name(),
                base = %base,
                "conforms-to base is not registered; no attribute to inherit"
            ),
        }
    }
    None
}
