//! Typed failures raised while turning glossary source text into a [`Glossary`].
//!
//! Every variant carries the 1-based line number of the offending term line so
//! the operator can jump straight to it. I/O failures are not modelled here;
//! callers wrap them in `anyhow` with the file path as context.
//!
//! [`Glossary`]: crate::glossary::Glossary

use thiserror::Error;

/// Convenience alias for results produced by glossary parsing.
pub type Result<T> = std::result::Result<T, GlossaryError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GlossaryError {
    /// A term line was followed by a blank line or the end of input.
    #[error("line {line}: term '{term}' has no definition")]
    MissingDefinition { term: String, line: usize },

    /// The same term appeared twice while duplicates are rejected.
    #[error("line {line}: duplicate term '{term}' (first defined on line {first_line})")]
    DuplicateTerm {
        term: String,
        first_line: usize,
        line: usize,
    },

    /// The term cannot be used as a page name inside the destination folder.
    #[error("line {line}: term '{term}' cannot be used as a page name")]
    UnsafeTermName { term: String, line: usize },
}

impl GlossaryError {
    /// Source line the error points at.
    pub fn line(&self) -> usize {
        match self {
            GlossaryError::MissingDefinition { line, .. }
            | GlossaryError::DuplicateTerm { line, .. }
            | GlossaryError::UnsafeTermName { line, .. } => *line,
        }
    }
}
