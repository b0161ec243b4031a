//! Multi-character operator matching (maximal munch).

use crate::lexer::Lexer;
use crate::token::TokenKind;

impl Lexer<'_, '_> {
    pub(super) fn match_colon(&mut self) -> TokenKind {
        if self.cursor.match_byte(b':') {
            return TokenKind::ColonColon;
        }
        TokenKind::Colon
    }

    pub(super) fn match_left_angle(&mut self) -> TokenKind {
        if self.cursor.match_byte(b'<') {
            if self.cursor.match_byte(b'=') {
                return TokenKind::LeftAngleAngleEquals;
            }
            return TokenKind::LeftAngleAngle;
        }
        if self.cursor.match_byte(b'=') {
            return TokenKind::LeftAngleEquals;
        }
        TokenKind::LeftAngle
    }

    /// `>` is special: `>>=` is one token, but `>>` stays two separate `>`
    /// tokens so the parser can close nested generic-argument lists.
    pub(super) fn match_right_angle(&mut self) -> TokenKind {
        let backup = self.cursor;
        if self.cursor.match_byte(b'>') {
            if self.cursor.match_byte(b'=') {
                return TokenKind::RightAngleAngleEquals;
            }
            self.cursor = backup;
        } else if self.cursor.match_byte(b'=') {
            return TokenKind::RightAngleEquals;
        }
        TokenKind::RightAngle
    }

    pub(super) fn match_equal(&mut self) -> TokenKind {
        if self.cursor.match_byte(b'=') {
            return TokenKind::EqualsEquals;
        }
        if self.cursor.match_byte(b'>') {
            return TokenKind::ThickArrow;
        }
        TokenKind::Equals
    }

    pub(super) fn match_plus(&mut self) -> TokenKind {
        if self.cursor.match_byte(b'+') {
            return TokenKind::PlusPlus;
        }
        if self.cursor.match_byte(b'=') {
            return TokenKind::PlusEquals;
        }
        TokenKind::Plus
    }

    pub(super) fn match_minus(&mut self) -> TokenKind {
        if self.cursor.match_byte(b'>') {
            return TokenKind::ThinArrow;
        }
        if self.cursor.match_byte(b'-') {
            return TokenKind::MinusMinus;
        }
        if self.cursor.match_byte(b'=') {
            return TokenKind::MinusEquals;
        }
        TokenKind::Minus
    }

    pub(super) fn match_star(&mut self) -> TokenKind {
        if self.cursor.match_byte(b'*') {
            if self.cursor.match_byte(b'=') {
                return TokenKind::StarStarEquals;
            }
            return TokenKind::StarStar;
        }
        if self.cursor.match_byte(b'=') {
            return TokenKind::StarEquals;
        }
        TokenKind::Star
    }

    pub(super) fn match_slash(&mut self) -> TokenKind {
        if self.cursor.match_byte(b'/') {
            self.eat_line_comment();
            return TokenKind::LineComment;
        }
        if self.cursor.match_byte(b'*') {
            self.eat_block_comment();
            return TokenKind::BlockComment;
        }
        if self.cursor.match_byte(b'=') {
            return TokenKind::SlashEquals;
        }
        TokenKind::Slash
    }

    pub(super) fn match_percent(&mut self) -> TokenKind {
        if self.cursor.match_byte(b'=') {
            return TokenKind::PercentEquals;
        }
        TokenKind::Percent
    }

    pub(super) fn match_bang(&mut self) -> TokenKind {
        if self.cursor.match_byte(b'=') {
            return TokenKind::BangEquals;
        }
        TokenKind::Bang
    }

    pub(super) fn match_ampersand(&mut self) -> TokenKind {
        if self.cursor.match_byte(b'&') {
            return TokenKind::AmpersandAmpersand;
        }
        if self.cursor.match_byte(b'=') {
            return TokenKind::AmpersandEquals;
        }
        TokenKind::Ampersand
    }

    pub(super) fn match_pipe(&mut self) -> TokenKind {
        if self.cursor.match_byte(b'|') {
            return TokenKind::PipePipe;
        }
        if self.cursor.match_byte(b'=') {
            return TokenKind::PipeEquals;
        }
        TokenKind::Pipe
    }

    pub(super) fn match_tilde(&mut self) -> TokenKind {
        if self.cursor.match_byte(b'=') {
            return TokenKind::TildeEquals;
        }
        TokenKind::Tilde
    }
}
