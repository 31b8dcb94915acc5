//! Terminal reports for the CLI

use crate::site::{BuildSummary, CheckReport};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

fn stdout(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

fn print_label(stdout: &mut StandardStream, label: &str, color: Color) -> io::Result<()> {
    stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(stdout, "{label}")?;
    stdout.reset()
}

/// Print the result of a site build
pub fn print_build_summary(summary: &BuildSummary, color: bool) -> io::Result<()> {
    let mut stdout = stdout(color);

    print_label(&mut stdout, "Generated", Color::Green)?;
    writeln!(
        stdout,
        " {} term pages with {} links",
        summary.pages, summary.links
    )?;

    write!(stdout, "Index: ")?;
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
    writeln!(stdout, "{}", summary.index_path.display())?;
    stdout.reset()?;

    Ok(())
}

/// Print one warning section, skipped when empty
fn print_section<T>(
    stdout: &mut StandardStream,
    title: &str,
    items: &[T],
    show: impl Fn(&T) -> String,
) -> io::Result<()> {
    if items.is_empty() {
        return Ok(());
    }

    writeln!(stdout)?;
    print_label(stdout, "warning", Color::Yellow)?;
    writeln!(stdout, ": {} ({})", title, items.len())?;
    for item in items {
        writeln!(stdout, "  {}", show(item))?;
    }
    Ok(())
}

/// Print a glossary check report
pub fn print_check_report(report: &CheckReport, color: bool) -> io::Result<()> {
    let mut stdout = stdout(color);

    writeln!(stdout, "Glossary Check")?;
    writeln!(stdout, "==============")?;
    writeln!(stdout)?;
    writeln!(stdout, "Terms:            {}", report.terms)?;
    writeln!(stdout, "Links:            {}", report.links)?;

    print_section(
        &mut stdout,
        "terms containing separators, never linked",
        &report.unlinkable,
        |t| t.clone(),
    )?;
    print_section(
        &mut stdout,
        "terms sharing a spelling up to case",
        &report.case_collisions,
        |(a, b)| format!("{a} / {b}"),
    )?;
    print_section(
        &mut stdout,
        "terms not referenced by any other definition",
        &report.unreferenced,
        |t| t.clone(),
    )?;
    print_section(
        &mut stdout,
        "definitions referring to their own term",
        &report.self_references,
        |t| t.clone(),
    )?;

    if report.is_clean() {
        writeln!(stdout)?;
        print_label(&mut stdout, "ok", Color::Green)?;
        writeln!(stdout, ": no findings")?;
    }

    Ok(())
}

/// Print terms one per line
pub fn print_terms(terms: &[&str]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for term in terms {
        writeln!(out, "{term}")?;
    }
    Ok(())
}
