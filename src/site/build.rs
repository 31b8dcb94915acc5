use crate::glossary::{Glossary, Rewriter};
use crate::site::check::{case_collisions, unlinkable_terms};
use crate::site::pages::{blockquote, page_file_name, write_index_page, write_term_page};
use crate::utils::progress::page_bar;
use crate::utils::{AppConfig, SeparatorSet};
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const INDEX_FILE: &str = "index.html";

/// Settings for one site build
#[derive(Debug, Clone)]
pub struct SiteOptions {
    pub index_title: String,
    pub index_heading: String,
    /// Hide the progress bar
    pub quiet: bool,
}

impl SiteOptions {
    pub fn from_config(config: &AppConfig, quiet: bool) -> Self {
        Self {
            index_title: config.index_title.clone(),
            index_heading: config.index_heading.clone(),
            quiet,
        }
    }
}

/// What a site build produced
#[derive(Debug, Clone)]
pub struct BuildSummary {
    pub dest: PathBuf,
    pub index_path: PathBuf,
    /// Term pages written (the index page is not counted)
    pub pages: usize,
    /// Links inserted across all definitions
    pub links: usize,
    /// Terms that were written but can never be linked to
    pub unlinkable: Vec<String>,
    /// Pages whose file names collide on case-insensitive filesystems
    pub case_collisions: Vec<(String, String)>,
}

/// Create `path`, let `render` fill it through a buffered writer, then flush
/// and close it before returning.
fn write_page<F>(path: &Path, render: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    render(&mut out).with_context(|| format!("Failed to write {}", path.display()))?;
    out.flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Write one page per term plus the index page into `dest`.
pub fn build_site(
    glossary: &Glossary,
    separators: &SeparatorSet,
    dest: &Path,
    options: &SiteOptions,
) -> Result<BuildSummary> {
    fs::create_dir_all(dest)
        .with_context(|| format!("Failed to create destination folder {}", dest.display()))?;

    let terms = glossary.sorted_terms();
    let rewriter = Rewriter::new(glossary, separators);
    let mut links = 0;

    let unlinkable = unlinkable_terms(&terms, separators);
    for term in &unlinkable {
        warn!(term, "term contains separator characters and can never be linked");
    }
    let collisions = case_collisions(&terms);
    for (a, b) in &collisions {
        warn!(
            first = a,
            second = b,
            "pages differ only in case and overwrite each other on case-insensitive filesystems"
        );
    }

    let pb = page_bar(terms.len() as u64 + 1, options.quiet);
    pb.set_message("Writing pages...");

    for &term in &terms {
        let definition = glossary
            .get(term)
            .with_context(|| format!("Term '{term}' has no definition"))?;

        let rewritten = rewriter.rewrite_term(term, definition);
        links += rewritten.links();

        let path = dest.join(page_file_name(term));
        write_page(&path, |out| {
            write_term_page(out, term, &blockquote(&rewritten.html))
        })?;
        debug!(term, path = %path.display(), "wrote term page");
        pb.inc(1);
    }

    let index_path = dest.join(INDEX_FILE);
    write_page(&index_path, |out| {
        write_index_page(out, &options.index_title, &options.index_heading, &terms)
    })?;
    pb.inc(1);
    pb.finish_and_clear();

    info!(pages = terms.len(), links, dest = %dest.display(), "site written");

    Ok(BuildSummary {
        dest: dest.to_path_buf(),
        index_path,
        pages: terms.len(),
        links,
        unlinkable: unlinkable.iter().map(|t| t.to_string()).collect(),
        case_collisions: collisions
            .iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect(),
    })
}
