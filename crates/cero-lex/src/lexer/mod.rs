//! The lexer's dispatch loop.

mod comment;
mod number;
mod operator;
mod quoted;
mod word;

use cero_util::{Message, MessageArgs, Reporter, Source, SourceOffset, MAX_SOURCE_LENGTH};

use crate::cursor::SourceCursor;
use crate::stream::TokenStream;
use crate::token::TokenKind;

pub(crate) struct Lexer<'s, 'r> {
    source: &'s Source,
    reporter: &'r mut dyn Reporter,
    cursor: SourceCursor<'s>,
    stream: TokenStream,
}

impl<'s, 'r> Lexer<'s, 'r> {
    pub(crate) fn new(source: &'s Source, reporter: &'r mut dyn Reporter) -> Self {
        Self {
            source,
            reporter,
            cursor: SourceCursor::new(source),
            stream: TokenStream::new(),
        }
    }

    pub(crate) fn lex(mut self) -> TokenStream {
        if self.source.len() > MAX_SOURCE_LENGTH as usize {
            self.reporter.report(
                Message::SourceInputTooLarge,
                self.source.blank_location(),
                MessageArgs::one(MAX_SOURCE_LENGTH),
            );
        } else {
            self.lex_source();
        }

        self.stream
            .add_header(TokenKind::EndOfFile, self.cursor.offset());
        self.stream
    }

    fn lex_source(&mut self) {
        use TokenKind::*;

        while let Some(c) = self.cursor.peek() {
            let begin_offset = self.cursor.offset();
            self.cursor.advance();

            let mut variable_length = false;
            let kind = match c {
                b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r' => continue,

                b'a'..=b'z' | b'A'..=b'Z' | b'_' => {
                    let kind = self.lex_word(begin_offset);
                    variable_length = kind == Name;
                    kind
                }

                b'0'..=b'9' => {
                    variable_length = true;
                    self.lex_number(c)
                }

                b'.' => {
                    let kind = self.match_dot();
                    variable_length = kind == FloatLiteral;
                    kind
                }

                b':' => self.match_colon(),
                b',' => Comma,
                b';' => Semicolon,
                b'{' => LeftBrace,
                b'}' => RightBrace,
                b'(' => LeftParen,
                b')' => RightParen,
                b'[' => LeftBracket,
                b']' => RightBracket,
                b'<' => self.match_left_angle(),
                b'>' => self.match_right_angle(),
                b'=' => self.match_equal(),
                b'+' => self.match_plus(),
                b'-' => self.match_minus(),
                b'*' => self.match_star(),

                b'/' => {
                    let kind = self.match_slash();
                    variable_length = kind == LineComment || kind == BlockComment;
                    kind
                }

                b'%' => self.match_percent(),
                b'!' => self.match_bang(),
                b'&' => self.match_ampersand(),
                b'|' => self.match_pipe(),
                b'~' => self.match_tilde(),
                b'^' => Caret,
                b'?' => QuestionMark,
                b'@' => At,
                b'$' => Dollar,
                b'#' => Hash,

                b'"' => {
                    self.eat_quoted_sequence(b'"');
                    variable_length = true;
                    StringLiteral
                }

                b'\'' => {
                    self.eat_quoted_sequence(b'\'');
                    variable_length = true;
                    CharLiteral
                }

                _ => {
                    self.eat_unicode_token(c, begin_offset);
                    variable_length = true;
                    Name
                }
            };

            self.stream.add_header(kind, begin_offset);
            if variable_length {
                self.stream.add_length(self.cursor.offset() - begin_offset);
            }
        }
    }

    fn report(&mut self, message: Message, offset: SourceOffset, args: MessageArgs) {
        let location = self.source.locate(offset);
        self.reporter.report(message, location, args);
    }
}
