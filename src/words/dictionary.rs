//! Word lookup.
//!
//! The engine asks exactly one question: is this string a word? `WordSet`
//! is that seam; `Dictionary` is the obvious hash-set-backed answer. Word
//! lists are injected by the host, never bundled with the engine.

use rustc_hash::FxHashSet;

/// Membership predicate over words.
///
/// Queries arrive as lowercase letter runs read straight off the board.
pub trait WordSet: Send + Sync {
    /// Is `word` in the set?
    fn has(&self, word: &str) -> bool;
}

/// Hash-set dictionary. Entries are normalized to trimmed lowercase.
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Empty dictionary; nothing matches.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an iterator of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Build from newline-separated text, e.g. a word-list file.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::from_words(text.lines())
    }

    /// Add a single word.
    pub fn insert(&mut self, word: &str) {
        let word = word.trim().to_lowercase();
        if !word.is_empty() {
            self.words.insert(word);
        }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Is the dictionary empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSet for Dictionary {
    fn has(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}
