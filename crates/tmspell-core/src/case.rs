// Capitalization classes used by the personal dictionaries

use crate::character::{lowercase, simple_upper, uppercase};

/// Letter-case pattern of a whole word.
///
/// Unlike a general-purpose case detector, any character that is neither
/// uppercase nor lowercase (digits, hyphens) makes the word [`Other`].
///
/// [`Other`]: Capitalization::Other
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capitalization {
    /// Every character is lowercase: "paris".
    Lower,
    /// Every character is uppercase: "PARIS", or a single uppercase letter.
    Upper,
    /// First character uppercase, the rest lowercase: "Paris".
    FirstCapital,
    /// Empty, mixed, or containing caseless characters: "iPhone", "mp3".
    Other,
}

impl Capitalization {
    /// Classify the capitalization of `word`.
    pub fn of(word: &str) -> Self {
        let mut chars = word.chars();
        let Some(first) = chars.next() else {
            return Capitalization::Other;
        };

        if first.is_uppercase() {
            let rest: Vec<char> = chars.collect();
            match rest.first() {
                None => Capitalization::Upper,
                Some(c) if c.is_lowercase() => {
                    if rest.iter().all(|c| c.is_lowercase()) {
                        Capitalization::FirstCapital
                    } else {
                        Capitalization::Other
                    }
                }
                Some(c) if c.is_uppercase() => {
                    if rest.iter().all(|c| c.is_uppercase()) {
                        Capitalization::Upper
                    } else {
                        Capitalization::Other
                    }
                }
                Some(_) => Capitalization::Other,
            }
        } else if first.is_lowercase() && chars.all(char::is_lowercase) {
            Capitalization::Lower
        } else {
            Capitalization::Other
        }
    }

    /// Would a stored word of class `self` accept a query of class `query`?
    ///
    /// Classes match themselves. A lowercase entry also accepts the
    /// sentence-initial and all-caps spellings of the same word.
    pub fn accepts(self, query: Capitalization) -> bool {
        self == query
            || (self == Capitalization::Lower
                && matches!(query, Capitalization::Upper | Capitalization::FirstCapital))
    }

    /// Storage form of a word of this class: `Upper` and `FirstCapital`
    /// words are lowercased, `Lower` and `Other` words are kept as they are.
    pub fn fold(self, word: &str) -> String {
        match self {
            Capitalization::Upper | Capitalization::FirstCapital => lowercase(word),
            Capitalization::Lower | Capitalization::Other => word.to_string(),
        }
    }

    /// Render a folded word back in this class's display form.
    pub fn render(self, folded: &str) -> String {
        match self {
            Capitalization::Lower | Capitalization::Other => folded.to_string(),
            Capitalization::Upper => uppercase(folded),
            Capitalization::FirstCapital => {
                let mut chars = folded.chars();
                match chars.next() {
                    Some(first) => {
                        let mut s = String::with_capacity(folded.len());
                        s.push(simple_upper(first));
                        s.extend(chars);
                        s
                    }
                    None => String::new(),
                }
            }
        }
    }
}
