// Word filters: pick the parts of a line that need spell checking
//
// One `Filter` type covers all dialects. The dialect-specific state lives in
// a closed enum and is dispatched with `match`; every dialect shares the
// same character classifier and the same plain-text word rule.
//
// The filter never holds the line. Each call receives the line as a borrowed
// `&[char]` and the filter keeps an integer cursor between calls, so the
// caller may edit the line (e.g. replace a misspelled word) and re-position
// the filter with `reset_to`.

mod nroff;
mod scanner;
mod sgml;
mod tex;

use tmspell_core::{CharClassifier, FilterType, WordSpan};

use crate::config::FilterConfig;

use nroff::NroffFilter;
use scanner::Scanner;
use sgml::SgmlFilter;
use tex::TexFilter;

#[derive(Debug, Clone)]
enum Dialect {
    Plain,
    Tex(TexFilter),
    Sgml(SgmlFilter),
    Nroff(NroffFilter),
}

/// A stateful word scanner for one document stream.
///
/// ```
/// use tmspell_core::FilterType;
/// use tmspell_filter::{FilterConfig, new_filter};
///
/// let config = FilterConfig {
///     tex_command_filter: "cite P".into(),
///     ..FilterConfig::default()
/// };
/// let mut filter = new_filter(FilterType::Tex, &config);
/// let line: Vec<char> = "see \\cite{knuth84} there".chars().collect();
/// let words: Vec<String> = filter.words(&line).map(|w| w.text(&line)).collect();
/// assert_eq!(words, ["see", "there"]);
/// ```
#[derive(Debug, Clone)]
pub struct Filter {
    classes: CharClassifier,
    cursor: usize,
    dialect: Dialect,
}

/// Create a filter for `filter_type` configured by `config`.
pub fn new_filter(filter_type: FilterType, config: &FilterConfig) -> Filter {
    Filter::new(filter_type, config)
}

impl Filter {
    pub fn new(filter_type: FilterType, config: &FilterConfig) -> Self {
        let dialect = match filter_type {
            FilterType::Plain => Dialect::Plain,
            FilterType::Tex => Dialect::Tex(TexFilter::new(config)),
            FilterType::Sgml => Dialect::Sgml(SgmlFilter::new(config)),
            FilterType::Nroff => Dialect::Nroff(NroffFilter::default()),
        };
        Self {
            classes: config.classifier(),
            cursor: 0,
            dialect,
        }
    }

    /// A plain-text filter with the given classifier.
    pub fn plain(classes: CharClassifier) -> Self {
        Self {
            classes,
            cursor: 0,
            dialect: Dialect::Plain,
        }
    }

    /// The dialect this filter understands.
    pub fn filter_type(&self) -> FilterType {
        match self.dialect {
            Dialect::Plain => FilterType::Plain,
            Dialect::Tex(_) => FilterType::Tex,
            Dialect::Sgml(_) => FilterType::Sgml,
            Dialect::Nroff(_) => FilterType::Nroff,
        }
    }

    pub fn classifier(&self) -> &CharClassifier {
        &self.classes
    }

    /// Start scanning a new line from its beginning.
    ///
    /// The line itself is passed again to every [`get_next_word`] call.
    /// After editing the line in place, keep scanning it with
    /// [`reset_to`] instead: `set_line` starts the line over, so a *roff
    /// filter would parse it as a fresh control line again.
    ///
    /// [`get_next_word`]: Filter::get_next_word
    /// [`reset_to`]: Filter::reset_to
    pub fn set_line(&mut self, _line: &[char]) {
        self.cursor = 0;
        match &mut self.dialect {
            Dialect::Plain | Dialect::Sgml(_) => {}
            Dialect::Tex(tex) => tex.line_changed(),
            Dialect::Nroff(nroff) => nroff.line_changed(),
        }
    }

    /// Move the cursor back to the beginning of the line.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to `cursor`. An offset past the end of the line
    /// given to the next [`get_next_word`](Filter::get_next_word) call is
    /// clamped there.
    pub fn reset_to(&mut self, cursor: usize) {
        self.cursor = cursor;
    }

    /// Current offset into the line.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Forget any structure carried over from previous lines (open TeX
    /// environments, an unterminated SGML tag). Use between documents.
    pub fn restart(&mut self) {
        self.cursor = 0;
        match &mut self.dialect {
            Dialect::Plain => {}
            Dialect::Tex(tex) => tex.clear(),
            Dialect::Sgml(sgml) => sgml.clear(),
            Dialect::Nroff(nroff) => nroff.line_changed(),
        }
    }

    /// Find the next word to check in `line`, starting at the cursor.
    pub fn get_next_word(&mut self, line: &[char]) -> Option<WordSpan> {
        let mut sc = Scanner::new(line, self.cursor, &self.classes);
        let found = match &mut self.dialect {
            Dialect::Plain => sc.next_plain_word(),
            Dialect::Tex(tex) => tex.next_word(&mut sc),
            Dialect::Sgml(sgml) => sgml.next_word(&mut sc),
            Dialect::Nroff(nroff) => nroff.next_word(&mut sc),
        };
        self.cursor = sc.pos();
        found
    }

    /// Start `line` and iterate over all of its words.
    pub fn words<'a>(&'a mut self, line: &'a [char]) -> Words<'a> {
        self.set_line(line);
        Words { filter: self, line }
    }
}

/// Iterator over the words of one line, see [`Filter::words`].
pub struct Words<'a> {
    filter: &'a mut Filter,
    line: &'a [char],
}

impl Iterator for Words<'_> {
    type Item = WordSpan;

    fn next(&mut self) -> Option<WordSpan> {
        self.filter.get_next_word(self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn texts(filter: &mut Filter, text: &str) -> Vec<String> {
        let line = chars(text);
        filter.words(&line).map(|w| w.text(&line)).collect()
    }

    fn plain(boundaries: &str) -> Filter {
        new_filter(
            FilterType::Plain,
            &FilterConfig {
                boundary_characters: boundaries.into(),
                ..FilterConfig::default()
            },
        )
    }

    #[test]
    fn plain_splits_on_non_word_chars() {
        let mut f = plain("");
        assert_eq!(texts(&mut f, "Hello, world! 42 times"), ["Hello", "world", "times"]);
    }

    #[test]
    fn plain_boundary_joins_words() {
        assert_eq!(texts(&mut plain("'"), "it's"), ["it's"]);
        assert_eq!(texts(&mut plain(""), "it's"), ["it", "s"]);
    }

    #[test]
    fn plain_trailing_boundary_excluded() {
        assert_eq!(texts(&mut plain("'"), "'quoted' words'"), ["quoted", "words"]);
    }

    #[test]
    fn plain_extra_word_characters() {
        let config = FilterConfig {
            extra_word_characters: "-".into(),
            ..FilterConfig::default()
        };
        let mut f = new_filter(FilterType::Plain, &config);
        assert_eq!(texts(&mut f, "well-known -x"), ["well-known", "-x"]);
    }

    #[test]
    fn plain_empty_line() {
        assert!(texts(&mut plain(""), "").is_empty());
        assert!(texts(&mut plain(""), "   \t ").is_empty());
    }

    #[test]
    fn spans_are_char_offsets() {
        let mut f = plain("");
        let line = chars("\u{00E4}iti ja is\u{00E4}");
        let spans: Vec<WordSpan> = f.words(&line).collect();
        assert_eq!(spans, [WordSpan::new(0, 4), WordSpan::new(5, 7), WordSpan::new(8, 11)]);
    }

    #[test]
    fn factory_selects_dialect() {
        let config = FilterConfig::default();
        for ty in [
            FilterType::Plain,
            FilterType::Tex,
            FilterType::Sgml,
            FilterType::Nroff,
        ] {
            assert_eq!(new_filter(ty, &config).filter_type(), ty);
        }
    }

    #[test]
    fn reset_rescans_line() {
        let mut f = plain("");
        let line = chars("one two");
        f.set_line(&line);
        assert_eq!(f.get_next_word(&line), Some(WordSpan::new(0, 3)));
        f.reset();
        assert_eq!(f.get_next_word(&line), Some(WordSpan::new(0, 3)));
        assert_eq!(f.cursor(), 3);
    }

    #[test]
    fn reset_to_after_replacement() {
        // The caller replaces "teh" with "the quick" and resumes after it.
        let mut f = plain("");
        let line = chars("teh fox");
        f.set_line(&line);
        let first = f.get_next_word(&line).unwrap();
        assert_eq!(first.text(&line), "teh");

        // The edited line is longer than the one given to `set_line`.
        let edited = chars("the quick fox");
        f.reset_to(9);
        assert_eq!(f.get_next_word(&edited).map(|w| w.text(&edited)), Some("fox".into()));
        assert_eq!(f.cursor(), 13);
    }

    #[test]
    fn reset_to_is_clamped_by_next_scan() {
        let mut f = plain("");
        let line = chars("abc");
        f.set_line(&line);
        f.reset_to(100);
        assert_eq!(f.get_next_word(&line), None);
        assert_eq!(f.cursor(), 3);
    }

    #[test]
    fn reset_to_keeps_nroff_request_parsed() {
        let mut f = new_filter(FilterType::Nroff, &FilterConfig::default());
        let line = chars(".ds XX teh");
        f.set_line(&line);
        assert_eq!(f.get_next_word(&line).map(|w| w.text(&line)), Some("teh".into()));

        let edited = chars(".ds XX the quick");
        f.reset_to(10);
        assert_eq!(f.get_next_word(&edited).map(|w| w.text(&edited)), Some("quick".into()));
        assert_eq!(f.get_next_word(&edited), None);
    }

    #[test]
    fn exhausted_line_keeps_returning_none() {
        let mut f = plain("");
        let line = chars("word");
        f.set_line(&line);
        assert!(f.get_next_word(&line).is_some());
        assert!(f.get_next_word(&line).is_none());
        assert!(f.get_next_word(&line).is_none());
    }

    #[test]
    fn restart_forgets_open_environment() {
        let config = FilterConfig {
            tex_environment_filter: "verbatim".into(),
            ..FilterConfig::default()
        };
        let mut f = new_filter(FilterType::Tex, &config);
        assert!(texts(&mut f, "\\begin{verbatim} hidden").is_empty());
        assert!(texts(&mut f, "still hidden").is_empty());
        f.restart();
        assert_eq!(texts(&mut f, "visible"), ["visible"]);
    }

    #[test]
    fn tex_comment_state_resets_per_line() {
        let mut f = new_filter(FilterType::Tex, &FilterConfig::default());
        assert_eq!(texts(&mut f, "a % b c"), ["a", "b"]);
        assert_eq!(texts(&mut f, "c"), ["c"]);
    }
}
