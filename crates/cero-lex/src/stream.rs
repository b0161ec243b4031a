//! The packed token stream and the cursor the parser reads it through.

use cero_util::{SourceOffset, SOURCE_OFFSET_BITS};
use static_assertions::assert_eq_size;

use crate::token::{Token, TokenKind};

/// One 32-bit unit of the token stream: either a packed token header (kind
/// in the low 8 bits, source offset in the high 24) or a length word
/// following the header of a variable-length token.
#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct TokenUnit(u32);

assert_eq_size!(TokenUnit, u32);

impl TokenUnit {
    #[inline]
    fn header(kind: TokenKind, offset: SourceOffset) -> Self {
        debug_assert!(offset < (1 << SOURCE_OFFSET_BITS));
        Self((kind as u32) | (offset << 8))
    }

    #[inline]
    fn length(length: u32) -> Self {
        Self(length)
    }

    #[inline]
    fn kind(self) -> TokenKind {
        TokenKind::from_raw((self.0 & 0xff) as u8)
    }

    #[inline]
    fn offset(self) -> SourceOffset {
        self.0 >> 8
    }

    #[inline]
    fn as_length(self) -> u32 {
        self.0
    }
}

/// The tokens of one source input, produced by a single lex pass and
/// read-only thereafter. Always ends with an `EndOfFile` header.
pub struct TokenStream {
    units: Vec<TokenUnit>,
    num_tokens: u32,
}

impl TokenStream {
    pub(crate) fn new() -> Self {
        Self {
            units: Vec::new(),
            num_tokens: 0,
        }
    }

    pub(crate) fn add_header(&mut self, kind: TokenKind, offset: SourceOffset) {
        self.units.push(TokenUnit::header(kind, offset));
        self.num_tokens += 1;
    }

    pub(crate) fn add_length(&mut self, length: u32) {
        self.units.push(TokenUnit::length(length));
    }

    /// Number of tokens in the stream, including the end-of-file token.
    #[inline]
    pub fn num_tokens(&self) -> u32 {
        self.num_tokens
    }

    /// The raw 32-bit units backing the stream.
    #[inline]
    pub fn raw(&self) -> &[TokenUnit] {
        &self.units
    }

    /// A cursor positioned at the first token.
    pub fn cursor(&self) -> TokenCursor<'_> {
        TokenCursor {
            units: &self.units,
            pos: 0,
        }
    }

    /// All tokens in stream order, decoded. Mostly useful for tests.
    pub fn tokens(&self) -> Vec<Token> {
        let mut tokens = Vec::with_capacity(self.num_tokens as usize);
        let mut cursor = self.cursor();
        loop {
            let token = cursor.current();
            tokens.push(token);
            if token.kind == TokenKind::EndOfFile {
                return tokens;
            }
            cursor.advance();
        }
    }
}

/// A forward-only view over a [`TokenStream`].
///
/// The cursor is `Copy`: the parser saves copies to speculate and assigns
/// them back to rewind. The comment-skipping accessors (`peek` and friends)
/// are what the grammar uses; `current` sees comment tokens too. Once the
/// cursor reaches the end-of-file token it stays there.
#[derive(Clone, Copy)]
pub struct TokenCursor<'t> {
    units: &'t [TokenUnit],
    pos: usize,
}

impl<'t> TokenCursor<'t> {
    #[inline]
    fn decode(&self, pos: usize) -> Token {
        let unit = self.units[pos];
        let kind = unit.kind();
        let length = if kind.is_variable_length() {
            self.units[pos + 1].as_length()
        } else {
            kind.fixed_lexeme().len() as u32
        };
        Token {
            kind,
            offset: unit.offset(),
            length,
        }
    }

    /// The current token, without skipping comments.
    #[inline]
    pub fn current(&self) -> Token {
        self.decode(self.pos)
    }

    /// The current token kind, without skipping comments.
    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.units[self.pos].kind()
    }

    /// Moves to the next token (comments included). Stays put at the
    /// end-of-file token.
    pub fn advance(&mut self) {
        let kind = self.units[self.pos].kind();
        if kind != TokenKind::EndOfFile {
            self.pos += if kind.is_variable_length() { 2 } else { 1 };
        }
    }

    /// Moves past any comment tokens at the current position.
    pub fn skip_comments(&mut self) {
        let mut kind = self.units[self.pos].kind();
        while kind == TokenKind::LineComment || kind == TokenKind::BlockComment {
            self.pos += 2;
            kind = self.units[self.pos].kind();
        }
    }

    /// The current token, skipping comments.
    pub fn peek(&mut self) -> Token {
        self.skip_comments();
        self.current()
    }

    /// The token after the current one, skipping comments on both.
    pub fn peek_ahead(&mut self) -> Token {
        self.skip_comments();
        let saved = self.pos;
        self.advance();
        let token = self.peek();
        self.pos = saved;
        token
    }

    /// The current token kind, skipping comments.
    pub fn peek_kind(&mut self) -> TokenKind {
        self.skip_comments();
        self.units[self.pos].kind()
    }

    /// The current token offset, skipping comments.
    pub fn peek_offset(&mut self) -> SourceOffset {
        self.skip_comments();
        self.units[self.pos].offset()
    }

    /// Returns the current non-comment token and advances past it.
    pub fn next(&mut self) -> Token {
        let token = self.peek();
        self.advance();
        token
    }

    /// Advances past the next non-comment token if it has the given kind.
    pub fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.peek_kind() == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Like [`TokenCursor::match_kind`], but returns the matched token.
    pub fn match_token(&mut self, kind: TokenKind) -> Option<Token> {
        let token = self.peek();
        if token.kind == kind {
            self.advance();
            Some(token)
        } else {
            None
        }
    }

    /// Matches a name token.
    pub fn match_name(&mut self) -> Option<Token> {
        self.match_token(TokenKind::Name)
    }
}
