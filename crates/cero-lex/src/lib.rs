//! cero-lex - Lexical analysis for the Cero compiler.
//!
//! The lexer turns the raw bytes of a [`cero_util::Source`] into a compact
//! [`TokenStream`]: a vector of 32-bit units in which every token is one
//! packed header (8-bit kind, 24-bit offset) optionally followed by one
//! length word for the variable-length kinds (names, comments, literals).
//! Concatenating lexemes in stream order, together with the skipped
//! whitespace runs, reproduces the source exactly.
//!
//! Lexing is a single forward pass dispatching on the first byte of each
//! token. The interesting corners:
//!
//! - numeric literals absorb interior spaces and tabs between digits and
//!   continue as float literals across `.` when a fractional digit follows;
//! - block comments nest, so the scanner keeps a depth counter instead of
//!   searching for the first `*/`;
//! - `>>` is deliberately not a token: the parser fuses two adjacent `>`
//!   tokens when it is not inside a generic-argument list (`>>=` is still
//!   lexed whole, since no generic context ends in `>=`);
//! - identifiers accept non-ASCII code points validated against XID-start /
//!   XID-continue, decoded inline from the leading byte's run of one bits.
//!
//! Errors are reported through the [`cero_util::Reporter`] and never stop
//! the lexer; it always produces a stream ending in an `EndOfFile` token.

mod cursor;
mod lexer;
mod stream;
mod token;
mod unicode;

#[cfg(test)]
mod edge_cases;

pub use cursor::SourceCursor;
pub use stream::{TokenCursor, TokenStream, TokenUnit};
pub use token::{identify_keyword, Token, TokenKind};

use cero_util::{Reporter, Source};

/// Lexes a source input into a token stream, reporting problems through
/// `reporter`. Never fails; see the module docs for the recovery rules.
pub fn lex(source: &Source, reporter: &mut dyn Reporter) -> TokenStream {
    lexer::Lexer::new(source, reporter).lex()
}
