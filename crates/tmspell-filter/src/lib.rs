//! Dialect-aware word filters for spell checking.
//!
//! A [`Filter`] is fed a document one line at a time and yields the
//! [`WordSpan`](tmspell_core::WordSpan)s that should be checked, skipping
//! markup, commands and configured regions:
//!
//! - plain text -- every word
//! - TeX -- command parameters per a configurable table, skipped environments,
//!   math, comments
//! - SGML/HTML -- text between tags and whitelisted quoted attribute values
//! - *roff -- text after requests and escape sequences
//!
//! Filter state carries over between lines (an open TeX environment, an
//! unterminated tag) and is reset with [`Filter::restart`].

pub mod config;
pub mod filter;

pub use config::{ConfigError, FilterConfig, ParamType};
pub use filter::{Filter, Words, new_filter};
