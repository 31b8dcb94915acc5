use crate::glossary::{Glossary, Rewriter};
use crate::utils::SeparatorSet;
use rustc_hash::FxHashSet;

/// Findings about a glossary that do not stop a build but deserve a look.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub terms: usize,
    /// Links a build would insert
    pub links: usize,
    /// Terms no other definition links to
    pub unreferenced: Vec<String>,
    /// Terms containing separator characters; they can never be linked
    pub unlinkable: Vec<String>,
    /// Terms that link to themselves
    pub self_references: Vec<String>,
    /// Pairs that sort together but link separately, like "Cat" and "cat"
    pub case_collisions: Vec<(String, String)>,
}

impl CheckReport {
    /// True if nothing but counts was found
    pub fn is_clean(&self) -> bool {
        self.unreferenced.is_empty()
            && self.unlinkable.is_empty()
            && self.self_references.is_empty()
            && self.case_collisions.is_empty()
    }
}

/// Inspect `glossary` the way a build would see it. Lists are in index order.
pub fn check_glossary(glossary: &Glossary, separators: &SeparatorSet) -> CheckReport {
    let rewriter = Rewriter::new(glossary, separators);
    let sorted = glossary.sorted_terms();

    let mut links = 0;
    let mut referenced: FxHashSet<&str> = FxHashSet::default();
    let mut self_references = Vec::new();

    for &term in &sorted {
        let Some(definition) = glossary.get(term) else {
            continue;
        };
        let mut links_itself = false;
        for word in rewriter.linked_terms(definition) {
            links += 1;
            if word == term {
                links_itself = true;
            } else {
                referenced.insert(word);
            }
        }
        if links_itself {
            self_references.push(term.to_string());
        }
    }

    let unreferenced = sorted
        .iter()
        .filter(|term| !referenced.contains(**term))
        .map(|term| term.to_string())
        .collect();

    CheckReport {
        terms: glossary.len(),
        links,
        unreferenced,
        unlinkable: owned(unlinkable_terms(&sorted, separators)),
        self_references,
        case_collisions: case_collisions(&sorted)
            .into_iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect(),
    }
}

fn owned(terms: Vec<&str>) -> Vec<String> {
    terms.into_iter().map(str::to_string).collect()
}

/// Terms containing a separator character. No word run can ever equal them.
pub fn unlinkable_terms<'t>(terms: &[&'t str], separators: &SeparatorSet) -> Vec<&'t str> {
    terms
        .iter()
        .copied()
        .filter(|term| separators.any_in(term))
        .collect()
}

/// Neighbouring pairs of index-ordered `terms` that differ only in case.
/// Their pages share a file name on case-insensitive filesystems.
pub fn case_collisions<'t>(terms: &[&'t str]) -> Vec<(&'t str, &'t str)> {
    terms
        .windows(2)
        .filter(|pair| pair[0] != pair[1] && pair[0].to_lowercase() == pair[1].to_lowercase())
        .map(|pair| (pair[0], pair[1]))
        .collect()
}
