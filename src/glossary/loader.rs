//! Reads the flat-text glossary format.
//!
//! ```text
//! term
//! definition line
//! more of the same definition
//!
//! next term
//! ...
//! ```
//!
//! Definition lines are joined with nothing in between. An entry ends at a
//! blank line or at the end of input; extra blank lines between entries are
//! ignored.

use crate::error::{GlossaryError, Result};
use crate::glossary::types::{DuplicatePolicy, Glossary, GlossaryBuilder};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Parse glossary source text.
pub fn parse_glossary(content: &str, policy: DuplicatePolicy) -> Result<Glossary> {
    let mut builder = GlossaryBuilder::new(policy);
    let mut lines = content
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .peekable();

    while let Some((line_no, term)) = lines.by_ref().find(|(_, line)| !is_blank(line)) {
        let mut definition = String::new();
        while let Some((_, line)) = lines.next_if(|(_, line)| !is_blank(line)) {
            definition.push_str(line);
        }

        if definition.is_empty() {
            return Err(GlossaryError::MissingDefinition {
                term: term.to_string(),
                line: line_no,
            });
        }

        debug!(term, line = line_no, "read entry");
        builder.insert(term.to_string(), definition, line_no)?;
    }

    Ok(builder.finish())
}

/// Read and parse a glossary file.
pub fn load_glossary(path: &Path, policy: DuplicatePolicy) -> anyhow::Result<Glossary> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read glossary file {}", path.display()))?;

    let glossary = parse_glossary(&content, policy)
        .with_context(|| format!("Malformed glossary file {}", path.display()))?;

    info!(path = %path.display(), terms = glossary.len(), "loaded glossary");
    Ok(glossary)
}
