//! Source routing: which files are scanned and with which grammar.

pub mod language_detect;

pub use language_detect::SourceLanguage;
