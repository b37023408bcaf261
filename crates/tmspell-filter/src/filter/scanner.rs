// Cursor over one borrowed line, shared by all filter dialects

use tmspell_core::{CharClassifier, WordSpan};

/// A position within a borrowed line plus the character tables used to
/// recognize words.
///
/// A scanner lives for one `get_next_word` call. The owning filter keeps
/// only the integer offset between calls, so the caller is free to mutate
/// or replace the line in between.
pub(crate) struct Scanner<'a> {
    line: &'a [char],
    pos: usize,
    classes: &'a CharClassifier,
}

impl<'a> Scanner<'a> {
    /// Create a scanner at `pos`, clamped to the end of `line`.
    pub fn new(line: &'a [char], pos: usize, classes: &'a CharClassifier) -> Self {
        Self {
            line,
            pos: pos.min(line.len()),
            classes,
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn set_pos(&mut self, pos: usize) {
        self.pos = pos.min(self.line.len());
    }

    pub fn line(&self) -> &'a [char] {
        self.line
    }

    /// The character under the cursor.
    pub fn peek(&self) -> Option<char> {
        self.line.get(self.pos).copied()
    }

    pub fn is_at(&self, c: char) -> bool {
        self.peek() == Some(c)
    }

    /// Does `s` occur at the cursor?
    pub fn is_at_str(&self, s: &str) -> bool {
        self.is_str_at(self.pos, s)
    }

    /// Does `s` occur at offset `at`?
    pub fn is_str_at(&self, at: usize, s: &str) -> bool {
        let mut i = at;
        for c in s.chars() {
            if self.line.get(i) != Some(&c) {
                return false;
            }
            i += 1;
        }
        true
    }

    pub fn is_at_word(&self) -> bool {
        self.peek().is_some_and(|c| self.classes.is_word_char(c))
    }

    pub fn is_at_boundary(&self) -> bool {
        self.peek().is_some_and(|c| self.classes.is_boundary_char(c))
    }

    /// Step over one character, if any.
    pub fn advance(&mut self) {
        self.skip_n(1);
    }

    /// Step over up to `n` characters.
    pub fn skip_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.line.len());
    }

    /// Step over characters while `pred` holds.
    pub fn skip_while<F: Fn(char) -> bool>(&mut self, pred: F) {
        while self.peek().is_some_and(&pred) {
            self.pos += 1;
        }
    }

    pub fn skip_whitespace(&mut self) {
        self.skip_while(char::is_whitespace);
    }

    pub fn skip_non_whitespace(&mut self) {
        self.skip_while(|c| !c.is_whitespace());
    }

    pub fn skip_word_characters(&mut self) {
        let classes = self.classes;
        self.skip_while(|c| classes.is_word_char(c));
    }

    pub fn skip_non_word_characters(&mut self) {
        let classes = self.classes;
        self.skip_while(|c| !classes.is_word_char(c));
    }

    /// Step over a word: runs of word characters joined by single boundary
    /// characters. A boundary character not followed by a word character
    /// is left in place.
    pub fn skip_over_word(&mut self) {
        loop {
            self.skip_word_characters();
            if !self.is_at_boundary() {
                break;
            }
            let joined = self
                .line
                .get(self.pos + 1)
                .is_some_and(|&c| self.classes.is_word_char(c));
            if !joined {
                break;
            }
            self.pos += 1;
        }
    }

    /// The plain-text rule: skip to the next word and return its span.
    pub fn next_plain_word(&mut self) -> Option<WordSpan> {
        self.skip_non_word_characters();
        let begin = self.pos;
        self.skip_over_word();
        (self.pos != begin).then(|| WordSpan::new(begin, self.pos))
    }
}
