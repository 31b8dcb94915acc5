//! # glossgen - Cross-linked HTML glossaries
//!
//! glossgen reads a plain-text glossary (term line, definition lines, blank
//! line, repeated) and writes one HTML page per term plus an alphabetical
//! index page. Whenever a definition mentions another term of the glossary,
//! the mention becomes a link to that term's page.
//!
//! ## Architecture
//!
//! - [`utils`] - Separator set, word/separator tokenizer, config, progress
//! - [`glossary`] - Glossary model, source parsing, cross-reference rewriting
//! - [`site`] - Page rendering, site build and glossary checks
//! - [`output`] - Terminal reports
//! - [`error`] - Typed parse errors
//!
//! ## Quick Start
//!
//! ```
//! use glossgen::glossary::{parse_glossary, rewrite, DuplicatePolicy};
//! use glossgen::utils::SeparatorSet;
//!
//! let glossary = parse_glossary(
//!     "a\na short word\n\nword\na unit of language\n",
//!     DuplicatePolicy::Reject,
//! )
//! .unwrap();
//! let seps = SeparatorSet::from_chars(" ");
//!
//! let html = rewrite("a", glossary.get("a").unwrap(), &glossary, &seps);
//! assert_eq!(html, r#"<a href="a.html">a</a> short <a href="word.html">word</a>"#);
//! ```
//!
//! ## Rewriting
//!
//! Definitions are split into maximal runs that are either all separator
//! characters or all other characters. Only non-separator runs that exactly
//! match a term (case-sensitive) are linked; everything else is copied as is,
//! so stripping the link tags from a page gives back the source definition.

pub mod error;
pub mod glossary;
pub mod output;
pub mod site;
pub mod utils;
