//! String and character literals.

use cero_util::{Message, MessageArgs};

use crate::lexer::Lexer;

impl Lexer<'_, '_> {
    /// Consumes a quoted sequence after its opening quote, up to and
    /// including the matching closing quote.
    ///
    /// A backslash makes the next byte inert, so `"\""` is one literal and
    /// `"\\"` ends after the second backslash. A newline before the closing
    /// quote terminates the literal there and reports `MissingClosingQuote`
    /// at the newline; the newline itself is not consumed.
    pub(super) fn eat_quoted_sequence(&mut self, quote: u8) {
        let mut ignore_quote = false;
        while let Some(b) = self.cursor.peek() {
            if b == b'\n' {
                self.report(
                    Message::MissingClosingQuote,
                    self.cursor.offset(),
                    MessageArgs::none(),
                );
                break;
            }

            self.cursor.advance();

            if b == b'\\' {
                ignore_quote = !ignore_quote;
            } else if b == quote && !ignore_quote {
                break;
            } else if ignore_quote {
                ignore_quote = false;
            }
        }
    }
}
