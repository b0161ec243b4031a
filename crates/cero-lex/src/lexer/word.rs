//! Words: keywords, names, and non-ASCII identifiers.

use cero_util::{Message, MessageArgs, SourceOffset};

use crate::lexer::Lexer;
use crate::token::{identify_keyword, TokenKind};
use crate::unicode::{decode_utf8_rest, is_ascii_word_char, is_xid_continue, is_xid_start};

impl Lexer<'_, '_> {
    /// Lexes the rest of a word whose first byte (an ASCII letter or `_`)
    /// has been consumed, then matches it against the keyword table.
    pub(super) fn lex_word(&mut self, begin_offset: SourceOffset) -> TokenKind {
        self.eat_word_rest();
        let lexeme = &self.source.text()[begin_offset as usize..self.cursor.offset() as usize];
        identify_keyword(lexeme)
    }

    /// Consumes word characters: ASCII `[A-Za-z0-9_]` or any XID-continue
    /// code point. A byte sequence that is not a valid XID-continue code
    /// point ends the word without being consumed.
    pub(super) fn eat_word_rest(&mut self) {
        while let Some(b) = self.cursor.peek() {
            if b < 0x80 {
                if !is_ascii_word_char(b) {
                    break;
                }
                self.cursor.advance();
            } else {
                let mut probe = self.cursor;
                probe.advance();
                match decode_utf8_rest(&mut probe, b) {
                    Ok(c) if is_xid_continue(c) => self.cursor = probe,
                    _ => break,
                }
            }
        }
    }

    /// Handles a byte that no other dispatch case claimed: the start of a
    /// non-ASCII identifier. On anything that is not an XID-start code
    /// point, reports `UnexpectedCharacter` with the attempted code point
    /// and leaves a short `Name` token behind so parsing stays productive.
    pub(super) fn eat_unicode_token(&mut self, leading: u8, begin_offset: SourceOffset) {
        match decode_utf8_rest(&mut self.cursor, leading) {
            Ok(c) if is_xid_start(c) => self.eat_word_rest(),
            Ok(c) => self.report(
                Message::UnexpectedCharacter,
                begin_offset,
                MessageArgs::one(c as u32),
            ),
            Err(value) => self.report(
                Message::UnexpectedCharacter,
                begin_offset,
                MessageArgs::one(value),
            ),
        }
    }
}
