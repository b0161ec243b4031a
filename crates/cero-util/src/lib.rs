//! cero-util - Shared foundation for the Cero compiler.
//!
//! This crate holds everything the pipeline phases have in common: the
//! source model (text, names, byte offsets, line/column mapping), the
//! diagnostic message catalog, and the reporter contract through which the
//! lexer and parser surface problems.
//!
//! The crate is deliberately free of compiler phases; `cero-lex` and
//! `cero-par` depend on it, never the other way around.

mod error;
mod location;
mod message;
mod report;
mod source;

pub use error::SourceError;
pub use location::CodeLocation;
pub use message::{Message, MessageArg, MessageArgs, Severity};
pub use report::{CollectingReporter, Diagnostic, Reporter, ReporterState};
pub use source::{Source, SourceOffset, DEFAULT_TAB_SIZE, MAX_SOURCE_LENGTH, SOURCE_OFFSET_BITS};
