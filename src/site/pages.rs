//! HTML boilerplate for the index page and the per-term pages.

use std::io::{self, Write};

/// File name of the page for `term`, relative to the destination folder.
pub fn page_file_name(term: &str) -> String {
    format!("{term}.html")
}

/// The fragment a term page embeds: the rewritten definition in a blockquote.
pub fn blockquote(body: &str) -> String {
    format!("<blockquote>{body}</blockquote>")
}

/// Write the page for one term. `fragment` comes from [`blockquote`].
pub fn write_term_page<W: Write>(out: &mut W, term: &str, fragment: &str) -> io::Result<()> {
    writeln!(out, "<html>")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<title>{term}</title>")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "<h2><b><i><font color=\"red\">{term}</font></i></b></h2>")?;
    writeln!(out, "{fragment}")?;
    writeln!(out, "<hr />")?;
    writeln!(out, "<p>Return to <a href=\"index.html\">index</a>.</p>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")?;
    Ok(())
}

/// Write the index page listing `terms` in the given order.
pub fn write_index_page<W: Write>(
    out: &mut W,
    title: &str,
    heading: &str,
    terms: &[&str],
) -> io::Result<()> {
    writeln!(out, "<html>")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<title>{title}</title>")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "<h2>{heading}</h2>")?;
    writeln!(out, "<hr />")?;
    writeln!(out, "<h3>Index</h3>")?;
    writeln!(out, "<ul>")?;
    for term in terms {
        writeln!(out, "<li><a href=\"{}\">{term}</a></li>", page_file_name(term))?;
    }
    writeln!(out, "</ul>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_blockquote() {
        assert_eq!(blockquote("a b"), "<blockquote>a b</blockquote>");
        assert_eq!(blockquote(""), "<blockquote></blockquote>");
    }

    #[test]
    fn test_term_page() {
        let html = render(|out| {
            write_term_page(out, "word", r#"<blockquote>a <a href="unit.html">unit</a></blockquote>"#)
        });
        assert!(html.starts_with("<html>\n<head>\n<title>word</title>\n</head>\n"));
        assert!(html.contains("<h2><b><i><font color=\"red\">word</font></i></b></h2>\n"));
        assert!(html.contains("<blockquote>a <a href=\"unit.html\">unit</a></blockquote>\n<hr />\n"));
        assert!(html.contains("<a href=\"index.html\">index</a>"));
        assert!(html.ends_with("</body>\n</html>\n"));
    }

    #[test]
    fn test_index_page_lists_terms_in_order() {
        let html = render(|out| write_index_page(out, "My Terms", "All terms", &["apple", "Banana"]));
        assert!(html.contains("<title>My Terms</title>"));
        assert!(html.contains("<h2>All terms</h2>"));
        let expected = "<ul>\n<li><a href=\"apple.html\">apple</a></li>\n<li><a href=\"Banana.html\">Banana</a></li>\n</ul>\n";
        assert!(html.contains(expected));
    }

    #[test]
    fn test_index_page_without_terms() {
        let html = render(|out| write_index_page(out, "t", "h", &[]));
        assert!(html.contains("<ul>\n</ul>\n"));
    }
}
