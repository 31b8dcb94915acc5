use rustc_hash::FxHashSet;

/// Characters that split a definition into words: space, tab and comma.
pub const DEFAULT_SEPARATORS: &str = " \t,";

/// Immutable set of separator characters.
///
/// Membership decides which of the two scan modes the tokenizer is in, so the
/// set is built once per run and shared read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorSet {
    chars: FxHashSet<char>,
}

impl SeparatorSet {
    /// Build a set from every character of `chars`. Repeats are ignored.
    pub fn from_chars(chars: &str) -> Self {
        chars.chars().collect()
    }

    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    /// True if `text` contains at least one separator character.
    pub fn any_in(&self, text: &str) -> bool {
        text.chars().any(|c| self.contains(c))
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Default for SeparatorSet {
    fn default() -> Self {
        Self::from_chars(DEFAULT_SEPARATORS)
    }
}

impl FromIterator<char> for SeparatorSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}
