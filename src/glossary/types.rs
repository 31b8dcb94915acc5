use crate::error::{GlossaryError, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::hash::BuildHasher;
use tracing::warn;

/// Page stem reserved for the index page.
pub const INDEX_STEM: &str = "index";

/// What to do when a term is defined more than once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// Fail with [`GlossaryError::DuplicateTerm`]
    #[default]
    Reject,
    /// Keep the later definition, the term keeps its first position
    LastWriteWins,
}

/// A definition together with the source line of its term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub definition: String,
    pub line: usize,
}

/// Read-only view of the glossary keys used while rewriting definitions.
pub trait TermLookup {
    /// Exact, case-sensitive membership test.
    fn contains_term(&self, word: &str) -> bool;
}

/// Term to definition mapping plus the order in which terms were read.
///
/// Once built, a `Glossary` cannot be mutated. The order list always has
/// exactly one element per key.
#[derive(Debug, Clone, Default)]
pub struct Glossary {
    entries: FxHashMap<String, Entry>,
    order: Vec<String>,
}

impl Glossary {
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.entries.contains_key(term)
    }

    /// Definition of `term`, if present.
    pub fn get(&self, term: &str) -> Option<&str> {
        self.entries.get(term).map(|e| e.definition.as_str())
    }

    /// Source line of `term`, if present.
    pub fn line_of(&self, term: &str) -> Option<usize> {
        self.entries.get(term).map(|e| e.line)
    }

    /// Terms in the order they first appeared in the source.
    pub fn source_order(&self) -> &[String] {
        &self.order
    }

    /// `(term, definition)` pairs in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order.iter().filter_map(|term| {
            self.entries
                .get(term)
                .map(|e| (term.as_str(), e.definition.as_str()))
        })
    }

    /// Terms sorted for the index page, see [`compare_terms`].
    pub fn sorted_terms(&self) -> Vec<&str> {
        let mut terms: Vec<&str> = self.order.iter().map(String::as_str).collect();
        terms.sort_by(|a, b| compare_terms(a, b));
        terms
    }
}

impl TermLookup for Glossary {
    fn contains_term(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl<V, S: BuildHasher> TermLookup for HashMap<String, V, S> {
    fn contains_term(&self, word: &str) -> bool {
        self.contains_key(word)
    }
}

impl<V> TermLookup for BTreeMap<String, V> {
    fn contains_term(&self, word: &str) -> bool {
        self.contains_key(word)
    }
}

impl<S: BuildHasher> TermLookup for HashSet<String, S> {
    fn contains_term(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl<T: TermLookup + ?Sized> TermLookup for &T {
    fn contains_term(&self, word: &str) -> bool {
        (**self).contains_term(word)
    }
}

/// Index ordering: case-insensitive, ties broken by exact comparison.
pub fn compare_terms(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// True if `term.html` stays inside the destination folder and does not
/// overwrite the index page.
pub fn is_safe_page_name(term: &str) -> bool {
    !term.is_empty()
        && term != "."
        && term != ".."
        && !term.eq_ignore_ascii_case(INDEX_STEM)
        && !term.contains(['/', '\\', '\0'])
}

/// Accumulates entries and produces an immutable [`Glossary`].
#[derive(Debug)]
pub struct GlossaryBuilder {
    policy: DuplicatePolicy,
    glossary: Glossary,
}

impl GlossaryBuilder {
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            glossary: Glossary::default(),
        }
    }

    /// Add one entry whose term was read on `line`.
    pub fn insert(&mut self, term: String, definition: String, line: usize) -> Result<()> {
        if !is_safe_page_name(&term) {
            return Err(GlossaryError::UnsafeTermName { term, line });
        }

        if let Some(existing) = self.glossary.entries.get_mut(&term) {
            return match self.policy {
                DuplicatePolicy::Reject => Err(GlossaryError::DuplicateTerm {
                    term,
                    first_line: existing.line,
                    line,
                }),
                DuplicatePolicy::LastWriteWins => {
                    warn!(
                        term = %term,
                        first_line = existing.line,
                        line,
                        "duplicate term, keeping the later definition"
                    );
                    *existing = Entry { definition, line };
                    Ok(())
                }
            };
        }

        self.glossary.order.push(term.clone());
        self.glossary.entries.insert(term, Entry { definition, line });
        Ok(())
    }

    pub fn finish(self) -> Glossary {
        debug_assert_eq!(self.glossary.order.len(), self.glossary.entries.len());
        self.glossary
    }
}
