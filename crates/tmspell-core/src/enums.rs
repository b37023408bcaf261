// Shared enums: FilterType

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Document dialects understood by the word filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    /// Plain text: every word is checked.
    #[default]
    Plain,
    /// TeX and LaTeX sources.
    Tex,
    /// *roff sources (man pages, ms/mm/me documents).
    Nroff,
    /// SGML, HTML and XML.
    #[serde(alias = "html")]
    Sgml,
}

impl FilterType {
    /// Parse a filter name. Unknown names fall back to [`FilterType::Plain`].
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "tex" | "latex" => FilterType::Tex,
            "nroff" | "troff" => FilterType::Nroff,
            "sgml" | "html" => FilterType::Sgml,
            _ => FilterType::Plain,
        }
    }

    /// Guess the dialect of a file from its extension.
    ///
    /// `.ms .mm .me .man` are *roff, `.tex` is TeX, `.htm .html .sgml` are
    /// SGML. Everything else is plain text. Case is ignored.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let Some(ext) = path.as_ref().extension().and_then(|e| e.to_str()) else {
            return FilterType::Plain;
        };
        match ext.to_ascii_lowercase().as_str() {
            "ms" | "mm" | "me" | "man" => FilterType::Nroff,
            "tex" => FilterType::Tex,
            "htm" | "html" | "sgml" => FilterType::Sgml,
            _ => FilterType::Plain,
        }
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            FilterType::Plain => "plain",
            FilterType::Tex => "tex",
            FilterType::Nroff => "nroff",
            FilterType::Sgml => "sgml",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for ty in [
            FilterType::Plain,
            FilterType::Tex,
            FilterType::Nroff,
            FilterType::Sgml,
        ] {
            assert_eq!(FilterType::from_name(ty.name()), ty);
        }
    }

    #[test]
    fn unknown_name_is_plain() {
        assert_eq!(FilterType::from_name("markdown"), FilterType::Plain);
        assert_eq!(FilterType::from_name(""), FilterType::Plain);
        assert_eq!(FilterType::from_name("HTML"), FilterType::Sgml);
    }

    #[test]
    fn guess_from_extension() {
        assert_eq!(FilterType::from_path("paper.tex"), FilterType::Tex);
        assert_eq!(FilterType::from_path("PAPER.TEX"), FilterType::Tex);
        assert_eq!(FilterType::from_path("index.html"), FilterType::Sgml);
        assert_eq!(FilterType::from_path("index.htm"), FilterType::Sgml);
        assert_eq!(FilterType::from_path("doc.sgml"), FilterType::Sgml);
        assert_eq!(FilterType::from_path("ls.man"), FilterType::Nroff);
        assert_eq!(FilterType::from_path("notes.ms"), FilterType::Nroff);
        assert_eq!(FilterType::from_path("README"), FilterType::Plain);
        assert_eq!(FilterType::from_path("notes.txt"), FilterType::Plain);
    }

    #[test]
    fn default_is_plain() {
        assert_eq!(FilterType::default(), FilterType::Plain);
    }
}
