// Word acceptance pipeline: speller, then personal and session dictionaries

use std::path::Path;

use crate::DictionaryError;
use crate::index::CapitalizationIndex;
use crate::speller::Speller;

/// One spell checking run over any number of documents.
///
/// A word is accepted if it is shorter than [`min_word_length`] or if the
/// speller, the personal dictionary or the session dictionary accepts it.
/// The personal dictionary persists between runs; the session dictionary
/// lives only as long as the session.
///
/// [`min_word_length`]: SpellSession::min_word_length
#[derive(Debug, Clone)]
pub struct SpellSession<S> {
    speller: S,
    personal: CapitalizationIndex,
    session: CapitalizationIndex,
    min_word_length: usize,
}

impl<S: Speller> SpellSession<S> {
    pub fn new(speller: S) -> Self {
        Self {
            speller,
            personal: CapitalizationIndex::new(),
            session: CapitalizationIndex::new(),
            min_word_length: 0,
        }
    }

    /// Words with fewer characters than `len` are always accepted.
    pub fn with_min_word_length(mut self, len: usize) -> Self {
        self.min_word_length = len;
        self
    }

    pub fn min_word_length(&self) -> usize {
        self.min_word_length
    }

    pub fn speller(&self) -> &S {
        &self.speller
    }

    pub fn personal(&self) -> &CapitalizationIndex {
        &self.personal
    }

    pub fn session(&self) -> &CapitalizationIndex {
        &self.session
    }

    /// Is `word` acceptable?
    pub fn check_word(&self, word: &str) -> bool {
        if word.chars().count() < self.min_word_length {
            return true;
        }
        self.speller.check(word) || self.personal.contains(word) || self.session.contains(word)
    }

    /// Accept `word` from now on and remember it in the personal dictionary.
    pub fn add_personal_word(&mut self, word: &str) {
        log::debug!("adding {word:?} to the personal dictionary");
        self.personal.add(word);
    }

    /// Accept `word` for the rest of this session.
    pub fn add_session_word(&mut self, word: &str) {
        self.session.add(word);
    }

    /// Replace the personal dictionary with the contents of `path`.
    pub fn load_personal<P: AsRef<Path>>(&mut self, path: P) -> Result<(), DictionaryError> {
        self.personal.load(path)
    }

    /// Write the personal dictionary to `path` if it has new words.
    /// Returns whether the file was written.
    pub fn save_personal<P: AsRef<Path>>(&mut self, path: P) -> Result<bool, DictionaryError> {
        self.personal.save_if_changed(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speller::WordListSpeller;

    fn session() -> SpellSession<WordListSpeller> {
        SpellSession::new(WordListSpeller::new(["kissa", "koira"].into_iter().collect()))
    }

    #[test]
    fn speller_words_accepted() {
        let s = session();
        assert!(s.check_word("kissa"));
        assert!(s.check_word("Koira"));
        assert!(!s.check_word("hevonen"));
    }

    #[test]
    fn short_words_accepted() {
        let s = session().with_min_word_length(3);
        assert!(s.check_word("xy"));
        assert!(s.check_word("\u{00E4}\u{00F6}")); // two chars, four bytes
        assert!(!s.check_word("xyz"));
    }

    #[test]
    fn zero_min_length_checks_everything() {
        let s = session();
        assert_eq!(s.min_word_length(), 0);
        assert!(!s.check_word("q"));
    }

    #[test]
    fn personal_and_session_words() {
        let mut s = session();
        s.add_personal_word("Tampere");
        s.add_session_word("lehm\u{00E4}");
        assert!(s.check_word("Tampere"));
        assert!(!s.check_word("tampere"));
        assert!(s.check_word("Lehm\u{00E4}"));
        assert!(s.personal().is_changed());
        assert_eq!(s.session().len(), 1);
    }
}
