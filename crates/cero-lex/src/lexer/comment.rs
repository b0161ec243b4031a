//! Line and block comments.

use cero_util::{Message, MessageArgs};

use crate::lexer::Lexer;

impl Lexer<'_, '_> {
    /// Consumes a line comment up to, but not including, the newline.
    pub(super) fn eat_line_comment(&mut self) {
        while let Some(b) = self.cursor.peek() {
            if b == b'\n' {
                break;
            }
            self.cursor.advance();
        }
    }

    /// Consumes a block comment, tracking nesting depth. `/*` and `*/`
    /// must balance; `/*/**/*/` is one comment.
    pub(super) fn eat_block_comment(&mut self) {
        let comment_begin = self.cursor.offset();

        let mut unclosed_count = 1u32;
        while self.cursor.valid() {
            if self.cursor.match_byte(b'*') {
                if self.cursor.match_byte(b'/') {
                    unclosed_count -= 1;
                    if unclosed_count == 0 {
                        return;
                    }
                }
            } else if self.cursor.match_byte(b'/') {
                if self.cursor.match_byte(b'*') {
                    unclosed_count += 1;
                }
            } else {
                self.cursor.advance();
            }
        }

        self.report(
            Message::UnterminatedBlockComment,
            comment_begin,
            MessageArgs::none(),
        );
    }
}
