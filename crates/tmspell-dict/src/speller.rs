// Spelling engines behind the personal dictionaries

use std::path::Path;

use crate::DictionaryError;
use crate::index::CapitalizationIndex;

/// Trait for spelling engines.
///
/// A speller decides about a single word that the filters have already cut
/// out of its line. It is never given markup or whitespace.
pub trait Speller {
    /// Is `word` spelled correctly?
    fn check(&self, word: &str) -> bool;
}

impl<S: Speller + ?Sized> Speller for &S {
    fn check(&self, word: &str) -> bool {
        (**self).check(word)
    }
}

impl<S: Speller + ?Sized> Speller for Box<S> {
    fn check(&self, word: &str) -> bool {
        (**self).check(word)
    }
}

/// A speller that accepts the words of a plain word list, with the same
/// capitalization rules as a personal dictionary.
#[derive(Debug, Clone, Default)]
pub struct WordListSpeller {
    words: CapitalizationIndex,
}

impl WordListSpeller {
    pub fn new(words: CapitalizationIndex) -> Self {
        Self { words }
    }

    /// Read a whitespace-separated word list.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let mut words = CapitalizationIndex::new();
        words.load(path)?;
        Ok(Self { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Speller for WordListSpeller {
    fn check(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

/// Accepts every word. Useful when only personal dictionaries matter.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl Speller for AcceptAll {
    fn check(&self, _word: &str) -> bool {
        true
    }
}
