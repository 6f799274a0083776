//! Unique, URL-safe anchor ids for headings.
//!
//! Ids are issued in document order from a [`SlugRegistry`] that lives for a
//! single document build. Repeated slugs get numeric suffixes: the first
//! "Setup" heading becomes `setup`, the second `setup-1`, the third
//! `setup-2`.

use crate::heading::HeadingRecord;
use log::trace;
use std::collections::HashMap;
use tocgen_idf::{IRNode, to_plain_text};
use tocgen_types::AnchorId;

/// Ids issued so far within one document build.
#[derive(Debug, Default, Clone)]
pub struct SlugRegistry {
    /// Every taken id, mapped to the last suffix tried for it as a base.
    occurrences: HashMap<String, usize>,
}

impl SlugRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slugifies `text` and returns an id no earlier call has returned or reserved.
    pub fn slug(&mut self, text: &str) -> String {
        let base = ::slug::slugify(text);
        self.disambiguate(base)
    }

    /// Marks an explicit id as taken. Returns `false` if it already was.
    pub fn reserve(&mut self, id: &str) -> bool {
        if self.occurrences.contains_key(id) {
            return false;
        }
        self.occurrences.insert(id.to_string(), 0);
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.occurrences.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }

    fn disambiguate(&mut self, base: String) -> String {
        let mut candidate = base.clone();
        while self.occurrences.contains_key(&candidate) {
            let count = self.occurrences.entry(base.clone()).or_insert(0);
            *count += 1;
            candidate = format!("{}-{}", base, count);
        }
        self.occurrences.insert(candidate.clone(), 0);
        candidate
    }
}

/// Gives every record without an id a unique slug, in order, and writes it
/// onto the matching heading in `nodes`.
///
/// Records that already carry an id keep it untouched. All explicit ids are
/// reserved up front, so no generated slug can take one, wherever it sits in
/// the document. Two explicit ids that collide with each other are left as
/// they are.
pub fn assign_slugs(records: &mut [HeadingRecord], nodes: &mut [IRNode]) -> SlugRegistry {
    let mut registry = SlugRegistry::new();
    for id in records.iter().filter_map(|record| record.id.as_ref()) {
        registry.reserve(id.as_str());
    }

    for record in records.iter_mut().filter(|record| record.id.is_none()) {
        let source = match &record.slug_hint {
            Some(hint) => hint.clone(),
            None => to_plain_text(&record.content),
        };
        let id = AnchorId::from(registry.slug(&source));
        trace!("Assigned id '{}' to heading at position {}", id, record.position);

        if let Some(meta) = nodes.get_mut(record.position).and_then(IRNode::meta_mut) {
            meta.id = Some(id.clone());
        }
        record.id = Some(id);
    }
    registry
}
