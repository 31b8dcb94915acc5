//! Cross-reference rewriting.
//!
//! A definition is walked run by run. Word runs that are glossary terms are
//! wrapped in a link to `<term>.html`; every other run, separators included,
//! is copied through untouched. Removing the `<a ...>`/`</a>` tags from the
//! result therefore gives back the original definition.

use crate::glossary::types::TermLookup;
use crate::utils::separators::SeparatorSet;
use crate::utils::tokenizer::{runs, words};
use tracing::debug;

/// Rewrites definitions against a fixed, read-only set of terms.
#[derive(Debug)]
pub struct Rewriter<'g, L: ?Sized> {
    terms: &'g L,
    separators: &'g SeparatorSet,
}

impl<'g, L: TermLookup + ?Sized> Rewriter<'g, L> {
    pub fn new(terms: &'g L, separators: &'g SeparatorSet) -> Self {
        Self { terms, separators }
    }

    /// Definition with every known term linked.
    pub fn rewrite<'d>(&self, definition: &'d str) -> Rewritten<'d> {
        let mut html = String::with_capacity(definition.len() + definition.len() / 2);
        let mut linked = Vec::new();
        for run in runs(definition, self.separators) {
            if run.is_word() && self.terms.contains_term(run.text) {
                push_link(&mut html, run.text);
                linked.push(run.text);
            } else {
                html.push_str(run.text);
            }
        }
        Rewritten { html, linked }
    }

    /// Rewrite the definition belonging to `term`.
    ///
    /// A term mentioning itself is linked like any other.
    pub fn rewrite_term<'d>(&self, term: &str, definition: &'d str) -> Rewritten<'d> {
        let rewritten = self.rewrite(definition);
        if rewritten.links_to(term) {
            debug!(term, "definition refers to its own term");
        }
        rewritten
    }

    /// Word runs of `definition` that [`rewrite`](Self::rewrite) turns into
    /// links, one item per occurrence.
    pub fn linked_terms<'d>(&self, definition: &'d str) -> impl Iterator<Item = &'d str> {
        words(definition, self.separators).filter(|word| self.terms.contains_term(word))
    }
}

/// Output of [`Rewriter::rewrite`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewritten<'d> {
    pub html: String,
    /// Linked word runs, one per occurrence
    pub linked: Vec<&'d str>,
}

impl Rewritten<'_> {
    pub fn links(&self) -> usize {
        self.linked.len()
    }

    pub fn links_to(&self, term: &str) -> bool {
        self.linked.iter().any(|&word| word == term)
    }
}

fn push_link(out: &mut String, term: &str) {
    out.push_str("<a href=\"");
    out.push_str(term);
    out.push_str(".html\">");
    out.push_str(term);
    out.push_str("</a>");
}

/// Rewrite the definition of `term`, linking every known term it mentions.
pub fn rewrite<L: TermLookup + ?Sized>(
    term: &str,
    definition: &str,
    terms: &L,
    separators: &SeparatorSet,
) -> String {
    Rewriter::new(terms, separators)
        .rewrite_term(term, definition)
        .html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glossary::loader::parse_glossary;
    use crate::glossary::types::DuplicatePolicy;
    use proptest::prelude::*;
    use regex::Regex;
    use std::collections::HashMap;

    fn map(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn strip_links(html: &str) -> String {
        let re = Regex::new(r#"<a href="[^"]*">|</a>"#).unwrap();
        re.replace_all(html, "").into_owned()
    }

    #[test]
    fn test_links_known_terms() {
        let m = map(&[("a", "a short word"), ("word", "a unit of language")]);
        let seps = SeparatorSet::from_chars(" ");
        let out = rewrite("a", "a short word", &m, &seps);
        assert_eq!(
            out,
            r#"<a href="a.html">a</a> short <a href="word.html">word</a>"#
        );
        assert_eq!(strip_links(&out), "a short word");
    }

    #[test]
    fn test_empty_definition() {
        let m = map(&[("a", "b")]);
        assert_eq!(rewrite("a", "", &m, &SeparatorSet::default()), "");
    }

    #[test]
    fn test_no_known_terms() {
        let m = map(&[("x", "y")]);
        assert_eq!(
            rewrite("x", "hello there", &m, &SeparatorSet::default()),
            "hello there"
        );
    }

    #[test]
    fn test_empty_mapping_passes_through() {
        let m: HashMap<String, String> = HashMap::new();
        let text = "a, b\tc";
        assert_eq!(rewrite("a", text, &m, &SeparatorSet::default()), text);
    }

    #[test]
    fn test_case_sensitive_match() {
        let m = map(&[("Cat", "a pet")]);
        let out = rewrite("dog", "Cat cat CAT", &m, &SeparatorSet::default());
        assert_eq!(out, r#"<a href="Cat.html">Cat</a> cat CAT"#);
    }

    #[test]
    fn test_separator_runs_never_linked() {
        // A key made of separators must not turn separator runs into links
        let m = map(&[(" ", "space"), (",", "comma")]);
        let out = rewrite("x", "a b,c", &m, &SeparatorSet::default());
        assert_eq!(out, "a b,c");
    }

    #[test]
    fn test_punctuation_stays_attached() {
        let m = map(&[("word", "w")]);
        let out = rewrite("x", "word, word. word", &m, &SeparatorSet::default());
        assert_eq!(
            out,
            r#"<a href="word.html">word</a>, word. <a href="word.html">word</a>"#
        );
    }

    #[test]
    fn test_self_reference_is_linked() {
        let m = map(&[("loop", "see loop")]);
        let out = rewrite("loop", "see loop", &m, &SeparatorSet::default());
        assert_eq!(out, r#"see <a href="loop.html">loop</a>"#);
    }

    #[test]
    fn test_linked_terms_counts_occurrences() {
        let m = map(&[("x", "1"), ("y", "2")]);
        let seps = SeparatorSet::default();
        let rewriter = Rewriter::new(&m, &seps);
        let linked: Vec<_> = rewriter.linked_terms("x y z x").collect();
        assert_eq!(linked, vec!["x", "y", "x"]);
    }

    #[test]
    fn test_rewrite_against_loaded_glossary() {
        let g = parse_glossary(
            "meaning\nwhat a word conveys\n\nword\na unit, with meaning\n",
            DuplicatePolicy::Reject,
        )
        .unwrap();
        let seps = SeparatorSet::default();
        let rewriter = Rewriter::new(&g, &seps);
        let rewritten = rewriter.rewrite(g.get("word").unwrap());
        assert_eq!(
            rewritten.html,
            r#"a unit, with <a href="meaning.html">meaning</a>"#
        );
        assert_eq!(rewritten.linked, vec!["meaning"]);
    }

    #[test]
    fn test_rewrite_term_reports_links() {
        let m = map(&[("loop", "see loop"), ("see", "look")]);
        let seps = SeparatorSet::default();
        let rewriter = Rewriter::new(&m, &seps);

        let rewritten = rewriter.rewrite_term("loop", "see loop, see");
        assert_eq!(rewritten.links(), 3);
        assert!(rewritten.links_to("loop"));
        assert!(!rewritten.links_to("look"));
        assert_eq!(rewritten.linked, rewriter.linked_terms("see loop, see").collect::<Vec<_>>());
    }

    proptest! {
        #[test]
        fn prop_strip_links_restores_definition(def in "[ab ,\tc]{0,48}") {
            let m = map(&[("a", "1"), ("ab", "2"), ("c", "3")]);
            let out = rewrite("a", &def, &m, &SeparatorSet::default());
            prop_assert_eq!(strip_links(&out), def);
        }

        #[test]
        fn prop_every_term_occurrence_linked_once(def in "[ab ,c]{0,48}") {
            let m = map(&[("a", "1"), ("ab", "2")]);
            let seps = SeparatorSet::default();
            let out = rewrite("a", &def, &m, &seps);

            let link = Regex::new(r#"<a href="([^"]*)\.html">([^<]*)</a>"#).unwrap();
            let mut linked = Vec::new();
            for caps in link.captures_iter(&out) {
                let (href, text) = (&caps[1], &caps[2]);
                prop_assert_eq!(href, text);
                prop_assert!(m.contains_key(text));
                linked.push(text.to_string());
            }

            let expected: Vec<String> = words(&def, &seps)
                .filter(|w| m.contains_key(*w))
                .map(str::to_string)
                .collect();
            prop_assert_eq!(out.matches("</a>").count(), expected.len());
            prop_assert_eq!(linked, expected);
        }
    }
}
