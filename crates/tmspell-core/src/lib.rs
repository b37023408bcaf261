//! Shared types for the tmspell workspace.
//!
//! - [`character`] -- word/boundary character classification, simple case mapping
//! - [`case`] -- capitalization classes used by the personal dictionaries
//! - [`span`] -- [`WordSpan`](span::WordSpan), the unit the filters yield
//! - [`enums`] -- [`FilterType`](enums::FilterType)

pub mod case;
pub mod character;
pub mod enums;
pub mod span;

pub use case::Capitalization;
pub use character::CharClassifier;
pub use enums::FilterType;
pub use span::WordSpan;
