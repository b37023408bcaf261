//! Personal dictionaries and the word acceptance pipeline.
//!
//! - [`index`] -- [`CapitalizationIndex`], a case-aware word set with
//!   load/merge/save
//! - [`speller`] -- the [`Speller`] trait and a word-list implementation
//! - [`session`] -- [`SpellSession`], backing speller plus personal and
//!   session dictionaries

pub mod index;
pub mod session;
pub mod speller;

pub use index::{CapitalizationIndex, CapitalizedWord};
pub use session::SpellSession;
pub use speller::{Speller, WordListSpeller};

use std::path::PathBuf;

/// Error type for dictionary file I/O.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("unable to open {path} for reading a dictionary: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to write dictionary {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
