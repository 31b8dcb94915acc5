//! Glossary model, parsing and cross-reference rewriting.
//!
//! - [`types`] - the immutable term/definition mapping and its term order
//! - [`loader`] - the flat-text source format
//! - [`rewrite`] - linking term occurrences inside definitions

pub mod loader;
pub mod rewrite;
pub mod types;

pub use loader::{load_glossary, parse_glossary};
pub use rewrite::{rewrite, Rewriter, Rewritten};
pub use types::*;
