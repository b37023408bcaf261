// *roff word filter: requests at line start and backslash escapes

use tmspell_core::WordSpan;

use super::scanner::Scanner;

/// Conditional requests whose keyword is skipped; the rest of the line is
/// ordinary text.
const CONDITIONAL_REQUESTS: [&str; 4] = ["if t", "if n", "el ", "ie "];

/// Requests followed by a name (string, macro, register) that is skipped
/// together with the keyword.
const NAMING_REQUESTS: [&str; 3] = ["ds ", "de ", "nr "];

#[derive(Debug, Clone)]
pub(crate) struct NroffFilter {
    line_changed: bool,
}

impl Default for NroffFilter {
    fn default() -> Self {
        Self { line_changed: true }
    }
}

impl NroffFilter {
    pub fn line_changed(&mut self) {
        self.line_changed = true;
    }

    /// Is `.request` (optionally `.  request` at the very start of a fresh
    /// line) at the cursor, after leading whitespace? Returns the offset
    /// just past the request keyword.
    fn request_at(&self, sc: &Scanner<'_>, request: &str) -> Option<usize> {
        let line = sc.line();
        let mut i = sc.pos();
        while line.get(i).is_some_and(|c| c.is_whitespace()) {
            i += 1;
        }
        let at_begin = self.line_changed && i == sc.pos();
        if line.get(i) != Some(&'.') {
            return None;
        }
        i += 1;
        if at_begin {
            while line.get(i).is_some_and(|c| c.is_whitespace()) {
                i += 1;
            }
        }
        sc.is_str_at(i, request)
            .then(|| (i + request.chars().count()).min(line.len()))
    }

    /// Skip the request keywords at the start of a control line.
    fn skip_request(&mut self, sc: &mut Scanner<'_>) {
        if let Some(end) = CONDITIONAL_REQUESTS
            .iter()
            .find_map(|r| self.request_at(sc, r))
        {
            sc.set_pos(end);
            sc.skip_whitespace();
            self.line_changed = false;
        }

        if let Some(end) = NAMING_REQUESTS.iter().find_map(|r| self.request_at(sc, r)) {
            sc.set_pos(end);
            sc.skip_whitespace();
            sc.skip_non_whitespace();
            sc.skip_whitespace();
            self.line_changed = false;
        }

        // Any other request: skip its name.
        if let Some(end) = self.request_at(sc, "") {
            sc.set_pos(end);
            sc.skip_non_whitespace();
        }
        self.line_changed = false;
    }

    /// Step over one escape sequence; the cursor is on the backslash.
    fn skip_escape(sc: &mut Scanner<'_>) {
        if sc.is_at_str("\\f") {
            // \f(XY, \fX, \f)
            sc.skip_n(2);
            if sc.is_at('(') {
                sc.skip_n(3);
            } else {
                sc.skip_n(1);
            }
        } else if sc.is_at_str("\\s") {
            // \s10, \s+2, \s-1, \s0
            sc.skip_n(2);
            if sc.is_at('+') || sc.is_at('-') {
                sc.advance();
            }
            sc.skip_n(1);
            if sc.peek().is_some_and(|c| c.is_ascii_digit()) {
                sc.advance();
            }
        } else if sc.is_at_str("\\(") {
            // \(XX
            sc.skip_n(4);
        } else if sc.is_at_str("\\*") {
            // \*(XX, \*X
            sc.skip_n(2);
            if sc.is_at('(') {
                sc.skip_n(3);
            } else {
                sc.skip_n(1);
            }
        } else {
            // \-, \&, \e ...: only the backslash
            sc.advance();
        }
    }

    pub fn next_word(&mut self, sc: &mut Scanner<'_>) -> Option<WordSpan> {
        if self.line_changed && sc.is_at('.') {
            self.skip_request(sc);
        }
        self.line_changed = false;

        sc.skip_whitespace();
        while let Some(c) = sc.peek() {
            if c == '\\' {
                Self::skip_escape(sc);
            } else if sc.is_at_word() {
                return sc.next_plain_word();
            } else {
                sc.advance();
            }
            sc.skip_whitespace();
        }
        None
    }
}
