//! Numeric literals.
//!
//! Cero permits spaces and tabs between the digits of a literal for
//! readability (`1 000 000`, `0x FF EC`). The scanner therefore works with
//! a lookahead copy of the cursor: the committed cursor only ever jumps to
//! a position just past an accepted digit, so trailing whitespace stays out
//! of the lexeme.

use crate::lexer::Lexer;
use crate::token::TokenKind;
use crate::unicode::{is_dec_digit, is_hex_digit, is_number_whitespace};

impl Lexer<'_, '_> {
    /// Lexes a numeric literal whose first digit has been consumed.
    pub(super) fn lex_number(&mut self, first: u8) -> TokenKind {
        if first == b'0' {
            let backup = self.cursor;
            match self.cursor.next() {
                Some(b'x') => {
                    self.eat_number_literal(is_hex_digit);
                    return TokenKind::HexIntLiteral;
                }
                Some(b'b') => {
                    self.eat_number_literal(is_dec_digit);
                    return TokenKind::BinIntLiteral;
                }
                Some(b'o') => {
                    self.eat_number_literal(is_dec_digit);
                    return TokenKind::OctIntLiteral;
                }
                _ => self.cursor = backup,
            }
        }

        self.eat_number_literal(is_dec_digit);
        let token_end = self.cursor;

        // skip whitespace before a potential fractional part
        while let Some(b) = self.cursor.peek() {
            if !is_number_whitespace(b) {
                break;
            }
            self.cursor.advance();
        }

        let at_dot = self.cursor;
        if self.cursor.next() == Some(b'.') {
            if self.eat_decimal_number() {
                return TokenKind::FloatLiteral;
            }
            // no fractional digits: the dot is not part of the literal
            self.cursor = at_dot;
        } else {
            self.cursor = token_end;
        }

        TokenKind::DecIntLiteral
    }

    /// Consumes a run of digits matching `digit`, absorbing interior
    /// whitespace between them. The committed cursor ends just past the
    /// last accepted digit.
    pub(super) fn eat_number_literal(&mut self, digit: fn(u8) -> bool) {
        let mut lookahead = self.cursor;
        while let Some(b) = lookahead.peek() {
            if digit(b) {
                self.cursor = lookahead;
                self.cursor.advance();
            } else if !is_number_whitespace(b) {
                break;
            }
            lookahead.advance();
        }
    }

    /// Like [`Lexer::eat_number_literal`] for decimal digits, but reports
    /// whether at least one digit was accepted.
    pub(super) fn eat_decimal_number(&mut self) -> bool {
        let mut matched = false;
        let mut lookahead = self.cursor;
        while let Some(b) = lookahead.peek() {
            if is_dec_digit(b) {
                self.cursor = lookahead;
                self.cursor.advance();
                matched = true;
            } else if !is_number_whitespace(b) {
                break;
            }
            lookahead.advance();
        }
        matched
    }

    /// Dispatch for `.`: an ellipsis, the start of a float literal, or a
    /// plain dot.
    pub(super) fn match_dot(&mut self) -> TokenKind {
        let backup = self.cursor;
        if self.cursor.match_byte(b'.') {
            if self.cursor.match_byte(b'.') {
                return TokenKind::Ellipsis;
            }
            // two dots are two separate tokens
            self.cursor = backup;
        } else if self.cursor.peek().is_some_and(is_dec_digit) {
            self.eat_number_literal(is_dec_digit);
            return TokenKind::FloatLiteral;
        }

        TokenKind::Dot
    }
}
