// Character classification for word scanning and simple case mapping

use hashbrown::HashSet;

// ---------------------------------------------------------------------------
// Word / boundary classification
// ---------------------------------------------------------------------------

/// Decides which code points make up words.
///
/// A *word character* is any alphabetic code point plus the configured extra
/// word characters. A *boundary character* (typically the apostrophe) may
/// only appear inside a word, between two word characters.
///
/// The classifier is a pure lookup table; it holds no scanning state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharClassifier {
    word_chars: HashSet<char>,
    boundary_chars: HashSet<char>,
}

impl CharClassifier {
    /// Create a classifier that only accepts alphabetic word characters and
    /// has no boundary characters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add characters to the word character table.
    pub fn add_word_characters<I: IntoIterator<Item = char>>(&mut self, chars: I) {
        self.word_chars.extend(chars);
    }

    /// Add characters to the boundary character table.
    pub fn add_boundary_characters<I: IntoIterator<Item = char>>(&mut self, chars: I) {
        self.boundary_chars.extend(chars);
    }

    /// Builder form of [`add_word_characters`](Self::add_word_characters).
    pub fn with_word_characters<I: IntoIterator<Item = char>>(mut self, chars: I) -> Self {
        self.add_word_characters(chars);
        self
    }

    /// Builder form of [`add_boundary_characters`](Self::add_boundary_characters).
    pub fn with_boundary_characters<I: IntoIterator<Item = char>>(mut self, chars: I) -> Self {
        self.add_boundary_characters(chars);
        self
    }

    /// Is `c` part of a word?
    pub fn is_word_char(&self, c: char) -> bool {
        c.is_alphabetic() || self.word_chars.contains(&c)
    }

    /// May `c` appear inside a word when surrounded by word characters?
    pub fn is_boundary_char(&self, c: char) -> bool {
        self.boundary_chars.contains(&c)
    }
}

/// Printable and not whitespace (the C locale notion of "graphic").
pub fn is_graphic(c: char) -> bool {
    !c.is_whitespace() && !c.is_control()
}

// ---------------------------------------------------------------------------
// Simple case conversion
//
// The standard library's to_lowercase / to_uppercase yield iterators because
// some characters expand to several. Dictionary folding needs a one-to-one
// mapping so that character offsets survive case changes, so only the first
// character of the expansion is kept.
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
pub fn simple_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Convert a character to its simple uppercase equivalent.
pub fn simple_upper(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

/// Lowercase every character of `word` with [`simple_lower`].
pub fn lowercase(word: &str) -> String {
    word.chars().map(simple_lower).collect()
}

/// Uppercase every character of `word` with [`simple_upper`].
pub fn uppercase(word: &str) -> String {
    word.chars().map(simple_upper).collect()
}
