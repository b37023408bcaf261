// WordSpan: one candidate word within a line

/// A half-open range `[begin, end)` of character offsets into a line.
///
/// Offsets count `char`s, not bytes, so a span can be applied directly to
/// the `&[char]` the filter scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordSpan {
    /// Offset of the first character of the word.
    pub begin: usize,

    /// Offset one past the last character of the word.
    pub end: usize,
}

impl WordSpan {
    /// Create a new span. `begin` must not exceed `end`.
    pub fn new(begin: usize, end: usize) -> Self {
        debug_assert!(begin <= end, "span begins after it ends");
        Self { begin, end }
    }

    /// Length of the span in characters.
    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// The characters of `line` covered by this span.
    pub fn slice<'a>(&self, line: &'a [char]) -> &'a [char] {
        &line[self.begin..self.end]
    }

    /// The covered characters as an owned string.
    pub fn text(&self, line: &[char]) -> String {
        self.slice(line).iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn span_len() {
        let span = WordSpan::new(3, 8);
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
        assert!(WordSpan::new(4, 4).is_empty());
    }

    #[test]
    fn span_text() {
        let line = chars("the cat sat");
        assert_eq!(WordSpan::new(4, 7).text(&line), "cat");
        assert_eq!(WordSpan::new(0, 3).slice(&line), &['t', 'h', 'e']);
    }

    #[test]
    fn span_offsets_are_chars_not_bytes() {
        // "äiti" is 4 characters, 5 bytes in UTF-8
        let line = chars("\u{00E4}iti on");
        assert_eq!(WordSpan::new(0, 4).text(&line), "\u{00E4}iti");
        assert_eq!(WordSpan::new(5, 7).text(&line), "on");
    }

    #[test]
    fn spans_order_by_position() {
        let a = WordSpan::new(0, 3);
        let b = WordSpan::new(4, 6);
        assert!(a < b);
    }
}
