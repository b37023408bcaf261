// Case-aware word sets: personal and session dictionaries
//
// Words are stored case-folded together with the capitalization class they
// were added with. A lowercase entry accepts the capitalized and all-caps
// spellings of the same word; every other class accepts only itself.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tmspell_core::Capitalization;

use crate::DictionaryError;

/// A word together with its capitalization class.
///
/// Equality and ordering look at the folded form only: "Paris" and "paris"
/// are the same key, and an index holds at most one of them.
#[derive(Debug, Clone)]
pub struct CapitalizedWord {
    folded: String,
    class: Capitalization,
}

impl CapitalizedWord {
    pub fn new(word: &str) -> Self {
        let class = Capitalization::of(word);
        Self {
            folded: class.fold(word),
            class,
        }
    }

    /// The storage form: lowercased for `Upper` and `FirstCapital` words.
    pub fn folded(&self) -> &str {
        &self.folded
    }

    pub fn capitalization(&self) -> Capitalization {
        self.class
    }

    /// The word as it was added, e.g. "Paris" or "NATO".
    pub fn display(&self) -> String {
        self.class.render(&self.folded)
    }

    /// Does this entry accept `query`?
    pub fn accepts(&self, query: &CapitalizedWord) -> bool {
        self.folded == query.folded && self.class.accepts(query.class)
    }
}

impl PartialEq for CapitalizedWord {
    fn eq(&self, other: &Self) -> bool {
        self.folded == other.folded
    }
}

impl Eq for CapitalizedWord {}

impl PartialOrd for CapitalizedWord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CapitalizedWord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.folded.cmp(&other.folded)
    }
}

/// An ordered set of [`CapitalizedWord`]s with a dirty flag.
///
/// ```
/// use tmspell_dict::CapitalizationIndex;
///
/// let mut dict = CapitalizationIndex::new();
/// dict.add("paris");
/// assert!(dict.contains("Paris"));
/// assert!(dict.contains("PARIS"));
///
/// let mut names = CapitalizationIndex::new();
/// names.add("Paris");
/// assert!(!names.contains("paris"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CapitalizationIndex {
    words: BTreeSet<CapitalizedWord>,
    changed: bool,
}

impl CapitalizationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `word` unless an entry with the same folded form exists; the
    /// first spelling added is kept. Marks the index changed.
    pub fn add(&mut self, word: &str) {
        self.words.insert(CapitalizedWord::new(word));
        self.changed = true;
    }

    /// Remove the entry with `word`'s folded form, whatever its class. Marks
    /// the index changed even if nothing was removed.
    pub fn remove(&mut self, word: &str) {
        self.words.remove(&CapitalizedWord::new(word));
        self.changed = true;
    }

    /// Is `word` accepted by the entry with the same folded form?
    pub fn contains(&self, word: &str) -> bool {
        let query = CapitalizedWord::new(word);
        self.words
            .get(&query)
            .is_some_and(|entry| entry.accepts(&query))
    }

    /// Has the index been modified since it was created, loaded or saved?
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Entries in sort order.
    pub fn iter(&self) -> impl Iterator<Item = &CapitalizedWord> {
        self.words.iter()
    }

    pub fn clear(&mut self) {
        self.words.clear();
        self.changed = true;
    }

    /// Add every whitespace-separated word of `text`. The changed flag is
    /// left as it was.
    pub fn merge_str(&mut self, text: &str) {
        for word in text.split_whitespace() {
            self.words.insert(CapitalizedWord::new(word));
        }
    }

    /// Add every word of the file at `path`. Like
    /// [`merge_str`](Self::merge_str) this does not mark the index changed.
    pub fn merge<P: AsRef<Path>>(&mut self, path: P) -> Result<(), DictionaryError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| DictionaryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let before = self.words.len();
        self.merge_str(&text);
        log::debug!(
            "merged {} new words from {}",
            self.words.len() - before,
            path.display()
        );
        Ok(())
    }

    /// Replace the contents with the words of the file at `path`. The
    /// loaded index is unchanged.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<(), DictionaryError> {
        self.words.clear();
        self.merge(path)?;
        self.changed = false;
        Ok(())
    }

    /// Write one word per line, in sort order and display form, to `out`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for word in &self.words {
            writeln!(out, "{}", word.display())?;
        }
        Ok(())
    }

    /// Write the index to `path` and mark it unchanged.
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<(), DictionaryError> {
        let path = path.as_ref();
        let write_err = |source| DictionaryError::Write {
            path: path.to_path_buf(),
            source,
        };
        let file = File::create(path).map_err(write_err)?;
        let mut out = BufWriter::new(file);
        self.write_to(&mut out).map_err(write_err)?;
        out.flush().map_err(write_err)?;
        log::debug!("saved {} words to {}", self.words.len(), path.display());
        self.changed = false;
        Ok(())
    }

    /// [`save`](Self::save) only if the index has changed. Returns whether
    /// the file was written.
    pub fn save_if_changed<P: AsRef<Path>>(&mut self, path: P) -> Result<bool, DictionaryError> {
        if !self.changed {
            return Ok(false);
        }
        self.save(path)?;
        Ok(true)
    }
}

impl<'a> Extend<&'a str> for CapitalizationIndex {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for word in iter {
            self.add(word);
        }
    }
}

impl<'a> FromIterator<&'a str> for CapitalizationIndex {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_entry_accepts_capitalized_forms() {
        let index: CapitalizationIndex = ["paris"].into_iter().collect();
        assert!(index.contains("paris"));
        assert!(index.contains("Paris"));
        assert!(index.contains("PARIS"));
        assert!(!index.contains("pARIS"));
    }

    #[test]
    fn capitalized_entry_accepts_only_itself() {
        let index: CapitalizationIndex = ["Paris"].into_iter().collect();
        assert!(index.contains("Paris"));
        assert!(!index.contains("paris"));
        assert!(!index.contains("PARIS"));
    }

    #[test]
    fn upper_entry_accepts_only_upper() {
        let index: CapitalizationIndex = ["NATO"].into_iter().collect();
        assert!(index.contains("NATO"));
        assert!(!index.contains("Nato"));
        assert!(!index.contains("nato"));
    }

    #[test]
    fn other_entry_is_exact() {
        let index: CapitalizationIndex = ["iPhone", "mp3"].into_iter().collect();
        assert!(index.contains("iPhone"));
        assert!(!index.contains("iphone"));
        assert!(!index.contains("IPHONE"));
        assert!(index.contains("mp3"));
        assert!(!index.contains("MP3"));
    }

    #[test]
    fn first_spelling_of_a_folded_form_wins() {
        let mut index = CapitalizationIndex::new();
        index.add("Paris");
        index.add("paris");
        assert_eq!(index.len(), 1);
        assert!(index.contains("Paris"));
        assert!(!index.contains("paris"));
        assert!(!index.contains("PARIS"));
        assert_eq!(index.iter().next().map(CapitalizedWord::display), Some("Paris".into()));
    }

    #[test]
    fn remove_ignores_capitalization() {
        let mut index = CapitalizationIndex::new();
        index.add("Paris");
        index.remove("paris");
        assert!(index.is_empty());
        assert!(!index.contains("Paris"));

        index.add("nato");
        index.remove("NATO");
        assert!(!index.contains("nato"));
    }

    #[test]
    fn duplicates_collapse() {
        let index: CapitalizationIndex = ["word", "word", "WORD", "WORD"].into_iter().collect();
        assert_eq!(index.len(), 1);
        assert!(index.contains("WORD"));
    }

    #[test]
    fn empty_word() {
        let mut index = CapitalizationIndex::new();
        assert!(!index.contains(""));
        index.add("");
        assert!(index.contains(""));
    }

    #[test]
    fn display_restores_case() {
        let words: Vec<String> = ["NATO", "Paris", "iPhone", "kissa", "\u{00C4}iti"]
            .into_iter()
            .collect::<CapitalizationIndex>()
            .iter()
            .map(CapitalizedWord::display)
            .collect();
        assert_eq!(words, ["iPhone", "kissa", "NATO", "Paris", "\u{00C4}iti"]);
    }

    #[test]
    fn dirty_flag() {
        let mut index = CapitalizationIndex::new();
        assert!(!index.is_changed());
        index.add("a");
        assert!(index.is_changed());
    }

    #[test]
    fn remove_marks_changed() {
        let mut index = CapitalizationIndex::new();
        index.remove("missing");
        assert!(index.is_changed());
        assert!(index.is_empty());
    }

    #[test]
    fn merge_str_leaves_changed_flag_alone() {
        let mut index = CapitalizationIndex::new();
        index.merge_str("alpha beta");
        assert_eq!(index.len(), 2);
        assert!(!index.is_changed());

        index.add("gamma");
        index.merge_str("delta");
        assert!(index.is_changed());
    }

    #[test]
    fn merge_str_splits_on_whitespace() {
        let mut index = CapitalizationIndex::new();
        index.merge_str("one two\n\tThree\n\n");
        assert_eq!(index.len(), 3);
        assert!(index.contains("Three"));
        assert!(!index.contains("three"));
    }

    #[test]
    fn write_to_one_per_line() {
        let index: CapitalizationIndex = ["b", "A", "c"].into_iter().collect();
        let mut out = Vec::new();
        index.write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "A\nb\nc\n");
    }
}
