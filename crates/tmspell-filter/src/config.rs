// Filter configuration: character tables and per-dialect lists

use std::path::{Path, PathBuf};
use std::sync::Arc;

use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};
use tmspell_core::CharClassifier;

/// Error type for loading a [`FilterConfig`] from a file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for this schema.
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Everything a filter needs to know, supplied once at construction.
///
/// All fields are strings so that the struct maps one-to-one onto the
/// configuration file. Every key is optional.
///
/// ```toml
/// extra-word-characters = "-"
/// boundary-characters = "'"
/// tex-command-filter = "begin PPP, end P, emph p, cite OP, ref P"
/// tex-environment-filter = "equation align $"
/// sgml-attributes-to-check = "alt title"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FilterConfig {
    /// Characters added to the word character set (user supplied).
    pub extra_word_characters: String,

    /// Characters added to the word character set (dictionary supplied).
    pub word_characters: String,

    /// Characters that may glue two word runs together.
    pub boundary_characters: String,

    /// TeX command parameter table: `name PARAMSPEC, name PARAMSPEC, ...`.
    ///
    /// `P` required parameter, skipped; `p` required parameter, checked;
    /// `O` optional parameter, skipped; `o` optional parameter, checked.
    pub tex_command_filter: String,

    /// Whitespace-separated TeX environments whose content is skipped.
    pub tex_environment_filter: String,

    /// Whitespace-separated SGML attributes whose quoted values are checked.
    pub sgml_attributes_to_check: String,
}

impl FilterConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Build the word/boundary classifier described by this configuration.
    pub fn classifier(&self) -> CharClassifier {
        CharClassifier::new()
            .with_word_characters(self.extra_word_characters.chars())
            .with_word_characters(self.word_characters.chars())
            .with_boundary_characters(self.boundary_characters.chars())
    }
}

// ---------------------------------------------------------------------------
// TeX command parameter table
// ---------------------------------------------------------------------------

/// How one declared parameter of a TeX command is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamType {
    /// `{...}`, spell checked (`p`).
    Check,
    /// `{...}`, skipped (`P`).
    Skip,
    /// `[...]`, spell checked (`o`).
    OptionalCheck,
    /// `[...]`, skipped (`O`).
    OptionalSkip,
}

impl ParamType {
    /// Decode one PARAMSPEC character. Anything else is not a parameter.
    pub fn from_spec_char(c: char) -> Option<Self> {
        match c {
            'p' => Some(ParamType::Check),
            'P' => Some(ParamType::Skip),
            'o' => Some(ParamType::OptionalCheck),
            'O' => Some(ParamType::OptionalSkip),
            _ => None,
        }
    }

    pub fn is_optional(self) -> bool {
        matches!(self, ParamType::OptionalCheck | ParamType::OptionalSkip)
    }

    pub fn is_checked(self) -> bool {
        matches!(self, ParamType::Check | ParamType::OptionalCheck)
    }
}

/// Command name to declared parameter list.
pub type CommandTable = HashMap<String, Arc<[ParamType]>>;

/// Parse a `name PARAMSPEC, name PARAMSPEC, ...` command table.
///
/// Unknown PARAMSPEC characters are ignored one by one. The first declared
/// parameter of `begin` and `end` is dropped: the environment name that
/// follows them is consumed separately by the TeX filter.
pub fn parse_command_filter(spec: &str) -> CommandTable {
    let mut table = CommandTable::new();
    let chars: Vec<char> = spec.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        while i < chars.len() && chars[i].is_whitespace() {
            i += 1;
        }
        let name_start = i;
        while i < chars.len() && !chars[i].is_whitespace() && chars[i] != ',' {
            i += 1;
        }
        let name: String = chars[name_start..i].iter().collect();

        while i < chars.len() && chars[i].is_whitespace() {
            i += 1;
        }
        let mut params = Vec::new();
        while i < chars.len() && chars[i] != ',' {
            if let Some(param) = ParamType::from_spec_char(chars[i]) {
                params.push(param);
            }
            i += 1;
        }
        if i < chars.len() {
            i += 1; // ','
        }

        if name.is_empty() {
            continue;
        }
        if (name == "begin" || name == "end") && !params.is_empty() {
            params.remove(0);
        }
        table.insert(name, Arc::from(params));
    }
    table
}

/// Split a whitespace-separated list of names into a set.
pub fn parse_name_list(list: &str) -> HashSet<String> {
    list.split_whitespace().map(str::to_string).collect()
}
