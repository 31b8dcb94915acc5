//! Page generation.
//!
//! - [`pages`] - HTML for the index page and the term pages
//! - [`build`] - writing a whole site into a destination folder
//! - [`check`] - reporting on a glossary without writing anything

pub mod build;
pub mod check;
pub mod pages;

pub use build::{build_site, BuildSummary, SiteOptions, INDEX_FILE};
pub use check::{case_collisions, check_glossary, unlinkable_terms, CheckReport};
