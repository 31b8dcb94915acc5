use crate::utils::separators::SeparatorSet;

/// Which scan mode produced a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunKind {
    /// Only non-separator characters
    Word,
    /// Only separator characters
    Separator,
}

/// A maximal slice of the input that is entirely word or entirely separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run<'a> {
    pub text: &'a str,
    /// Byte offset of the run inside the scanned text
    pub start: usize,
    pub kind: RunKind,
}

impl Run<'_> {
    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Runs are never empty; provided for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte offset just past the run.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    #[inline]
    pub fn is_word(&self) -> bool {
        self.kind == RunKind::Word
    }

    #[inline]
    pub fn is_separator(&self) -> bool {
        self.kind == RunKind::Separator
    }
}

/// Return the longest run starting at byte offset `position`.
///
/// The character at `position` picks the mode; the run then extends while the
/// following characters stay in that mode, stopping at the first mode switch
/// or at the end of `text`.
///
/// Returns `None` when `position` is at or past the end of `text` or does not
/// fall on a char boundary.
pub fn next_run<'a>(text: &'a str, position: usize, separators: &SeparatorSet) -> Option<Run<'a>> {
    let rest = text.get(position..)?;
    let first = rest.chars().next()?;
    let in_separator = separators.contains(first);

    let len = rest
        .char_indices()
        .find(|&(_, ch)| separators.contains(ch) != in_separator)
        .map(|(i, _)| i)
        .unwrap_or(rest.len());

    Some(Run {
        text: &rest[..len],
        start: position,
        kind: if in_separator {
            RunKind::Separator
        } else {
            RunKind::Word
        },
    })
}

/// Lazy iterator over consecutive runs of a text, see [`runs`].
#[derive(Debug, Clone)]
pub struct Runs<'a, 's> {
    text: &'a str,
    position: usize,
    separators: &'s SeparatorSet,
}

impl<'a> Iterator for Runs<'a, '_> {
    type Item = Run<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let run = next_run(self.text, self.position, self.separators)?;
        self.position = run.end();
        Some(run)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.text.len().saturating_sub(self.position);
        ((remaining > 0) as usize, Some(remaining))
    }
}

impl std::iter::FusedIterator for Runs<'_, '_> {}

/// Split `text` into runs from offset 0 to the end.
///
/// Concatenating the yielded runs reproduces `text` exactly.
pub fn runs<'a, 's>(text: &'a str, separators: &'s SeparatorSet) -> Runs<'a, 's> {
    Runs {
        text,
        position: 0,
        separators,
    }
}

/// Word runs only, in order of appearance.
pub fn words<'a, 's>(text: &'a str, separators: &'s SeparatorSet) -> impl Iterator<Item = &'a str> {
    runs(text, separators).filter(Run::is_word).map(|run| run.text)
}
