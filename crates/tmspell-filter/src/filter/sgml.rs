// SGML/HTML/XML word filter
//
// Text outside markup is checked. Inside a tag only quoted values of
// whitelisted attributes are checked. Nesting is not tracked: the state is a
// single tag context that is updated character by character, so the filter
// survives broken markup the way browsers do.

use hashbrown::HashSet;
use tmspell_core::WordSpan;
use tmspell_core::character::is_graphic;

use super::scanner::Scanner;
use crate::config::{FilterConfig, parse_name_list};

#[derive(Debug, Clone, Default)]
pub(crate) struct SgmlFilter {
    in_markup: bool,
    quote: Option<char>,
    tag_name: String,
    attribute_name: String,
    attributes_to_check: HashSet<String>,
}

impl SgmlFilter {
    pub fn new(config: &FilterConfig) -> Self {
        Self {
            attributes_to_check: parse_name_list(&config.sgml_attributes_to_check),
            ..Self::default()
        }
    }

    /// Leave any open tag.
    pub fn clear(&mut self) {
        self.end_markup();
    }

    /// Is the current attribute value to be checked? A value with no
    /// attribute name in front of it is malformed; it is checked.
    fn in_checked_attribute(&self) -> bool {
        self.attribute_name.is_empty() || self.attributes_to_check.contains(&self.attribute_name)
    }

    fn end_markup(&mut self) {
        self.in_markup = false;
        self.quote = None;
        self.tag_name.clear();
        self.attribute_name.clear();
    }

    pub fn next_word(&mut self, sc: &mut Scanner<'_>) -> Option<WordSpan> {
        sc.skip_whitespace();
        while let Some(c) = sc.peek() {
            if c == '<' {
                sc.advance();
                if sc.is_at('/') {
                    sc.advance();
                }
                let start = sc.pos();
                sc.skip_while(|c| is_graphic(c) && c != '>');
                if self.in_markup {
                    log::trace!("'<' inside markup");
                    self.tag_name.clear();
                } else {
                    self.tag_name = sc.line()[start..sc.pos()].iter().collect();
                    log::trace!("tag <{}>", self.tag_name);
                }
                self.in_markup = true;
                self.attribute_name.clear();
            } else if c == '>' {
                sc.advance();
                self.end_markup();
            } else if c == '/' && self.in_markup && self.quote.is_none() {
                sc.advance();
                self.end_markup();
            } else if self.in_markup && (c == '"' || c == '\'') && self.quote.is_none_or(|q| q == c)
            {
                self.quote = match self.quote {
                    Some(_) => None,
                    None => Some(c),
                };
                sc.advance();
            } else if self.in_markup && self.quote.is_none() && c.is_alphanumeric() {
                let start = sc.pos();
                sc.skip_while(|c| is_graphic(c) && !matches!(c, '=' | '/' | '"' | '\'' | '>'));
                self.attribute_name = sc.line()[start..sc.pos()].iter().collect();
            } else if c == '&' && (!self.in_markup || self.quote.is_some()) {
                sc.advance();
                sc.skip_while(char::is_alphanumeric);
                if sc.is_at(';') {
                    sc.advance();
                }
            } else if sc.is_at_word() {
                if !self.in_markup || (self.quote.is_some() && self.in_checked_attribute()) {
                    return sc.next_plain_word();
                }
                sc.advance();
                sc.skip_while(char::is_alphanumeric);
            } else {
                sc.advance();
            }
            sc.skip_whitespace();
        }
        None
    }
}
