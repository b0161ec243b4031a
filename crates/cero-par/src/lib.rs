//! cero-par - Syntactic analysis for the Cero compiler.
//!
//! The parser turns a [`cero_lex::TokenStream`] into a flat, pre-order
//! [`Ast`]: recursive descent for definitions, statements and types, and a
//! Pratt core (head parses keyed by the first token, tail parses keyed by
//! the token after an expression) for expressions.
//!
//! Two ambiguities need more than one token of context:
//!
//! - `name <` may open a generic-argument list or be a comparison. The
//!   parser speculatively parses the argument list with diagnostics
//!   suppressed, then decides from the token after the closing `>`;
//!   rewinding is cheap because [`cero_lex::TokenCursor`] is `Copy`.
//! - `>` may close a generic-argument list, be greater-than, or be half of
//!   `>>`. The lexer never emits a `>>` token; the parser fuses two
//!   adjacent `>` tokens only when no generic-argument list is open.
//!
//! Parse errors are reported through the [`cero_util::Reporter`] and unwind
//! as a [`ParseError`] to the nearest recovery point: statement scope
//! (resynchronize on `;` or `}`) or definition scope (resynchronize on
//! `public`, `private`, `struct`, `enum` or end of file). Nodes appended by
//! an abandoned parse are truncated so the pre-order invariant holds even
//! for erroneous input.

pub mod ast;
mod cursor;
mod expr;
mod items;
mod stmt;
mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use ast::{Ast, AstNode, AstNodeKind};
pub use cursor::{AstCursor, AstVisitor};

use cero_lex::{lex, Token, TokenCursor, TokenKind, TokenStream};
use cero_util::{CodeLocation, Message, MessageArgs, Reporter, Source};

use ast::Root;

/// The control-flow signal raised by a failed parse; it carries no data
/// because the diagnostic has already been reported (or suppressed, under
/// lookahead). Caught at statement and definition boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseError;

pub(crate) type ParseResult<T> = Result<T, ParseError>;

/// Index of a node in the parser's node buffer. Parse methods that build
/// expressions return the index of the leftmost node of the subtree they
/// produced, which is where a later `insert_parent` call puts the parent.
pub(crate) type NodeIndex = usize;

/// Parses a whole translation unit from an already-lexed token stream.
/// The returned tree borrows names from `source` only; the token stream
/// may be dropped afterwards.
pub fn parse<'s>(
    token_stream: &TokenStream,
    source: &'s Source,
    reporter: &mut dyn Reporter,
) -> Ast<'s> {
    Parser::new(token_stream, source, reporter).run()
}

/// Lexes and parses a source input in one call.
pub fn parse_source<'s>(source: &'s Source, reporter: &mut dyn Reporter) -> Ast<'s> {
    let token_stream = lex(source, reporter);
    parse(&token_stream, source, reporter)
}

pub(crate) struct Parser<'s, 't, 'r> {
    pub(crate) nodes: Vec<AstNode<'s>>,
    pub(crate) source: &'s Source,
    pub(crate) reporter: &'r mut dyn Reporter,
    pub(crate) cursor: TokenCursor<'t>,
    pub(crate) is_looking_ahead: bool,
    pub(crate) is_binding_allowed: bool,
    pub(crate) open_angles: u32,
}

impl<'s, 't, 'r> Parser<'s, 't, 'r> {
    fn new(
        token_stream: &'t TokenStream,
        source: &'s Source,
        reporter: &'r mut dyn Reporter,
    ) -> Self {
        Self {
            nodes: Vec::with_capacity(token_stream.num_tokens() as usize),
            source,
            reporter,
            cursor: token_stream.cursor(),
            is_looking_ahead: false,
            is_binding_allowed: true,
            open_angles: 0,
        }
    }

    fn run(mut self) -> Ast<'s> {
        self.store(AstNode::Root(Root::default()));

        let mut num_definitions: u16 = 0;
        while !self.cursor.match_kind(TokenKind::EndOfFile) {
            let begin = self.next_index();
            match self.parse_definition() {
                Ok(()) => num_definitions += 1,
                Err(ParseError) => {
                    self.rescind_nodes_from(begin);
                    self.recover_at_definition_scope();
                }
            }
        }

        self.nodes[0] = AstNode::Root(Root {
            offset: 0,
            num_definitions,
        });
        Ast::new(self.nodes)
    }

    // ── Node buffer ────────────────────────────────────────────────────

    pub(crate) fn store(&mut self, node: AstNode<'s>) -> NodeIndex {
        let index = self.nodes.len();
        self.nodes.push(node);
        index
    }

    /// Inserts `node` as the parent of the subtree starting at
    /// `first_descendant`, shifting later nodes by one slot. This is how a
    /// parent discovered after its first child (infix operators, bindings
    /// wrapped around a type) lands before the child in pre-order.
    pub(crate) fn insert_parent(&mut self, first_descendant: NodeIndex, node: AstNode<'s>) {
        self.nodes.insert(first_descendant, node);
    }

    pub(crate) fn next_index(&self) -> NodeIndex {
        self.nodes.len()
    }

    /// Drops every node from `first` on; used to discard speculative or
    /// abandoned parses.
    pub(crate) fn rescind_nodes_from(&mut self, first: NodeIndex) {
        self.nodes.truncate(first);
    }

    // ── Scoped parser state ────────────────────────────────────────────

    pub(crate) fn with_open_angles<T>(
        &mut self,
        value: u32,
        f: impl FnOnce(&mut Self) -> T,
    ) -> T {
        let saved = std::mem::replace(&mut self.open_angles, value);
        let result = f(self);
        self.open_angles = saved;
        result
    }

    pub(crate) fn with_binding_allowed<T>(
        &mut self,
        value: bool,
        f: impl FnOnce(&mut Self) -> T,
    ) -> T {
        let saved = std::mem::replace(&mut self.is_binding_allowed, value);
        let result = f(self);
        self.is_binding_allowed = saved;
        result
    }

    pub(crate) fn with_lookahead<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = std::mem::replace(&mut self.is_looking_ahead, true);
        let result = f(self);
        self.is_looking_ahead = saved;
        result
    }

    // ── Expectations and reporting ─────────────────────────────────────

    pub(crate) fn expect(&mut self, kind: TokenKind, message: Message) -> ParseResult<()> {
        if self.cursor.match_kind(kind) {
            Ok(())
        } else {
            let unexpected = self.cursor.peek();
            self.report_expectation(message, unexpected);
            Err(ParseError)
        }
    }

    /// Matches a name and returns its lexeme. On a mismatch the message is
    /// reported and the empty string returned; parsing continues, since
    /// most callers can proceed without the name.
    pub(crate) fn expect_name(&mut self, message: Message) -> &'s str {
        match self.cursor.match_name() {
            Some(token) => token.lexeme(self.source),
            None => {
                let unexpected = self.cursor.peek();
                self.report_expectation(message, unexpected);
                ""
            }
        }
    }

    pub(crate) fn report_expectation(&mut self, message: Message, unexpected: Token) {
        let location = unexpected.locate_in(self.source);
        let description = unexpected.describe(self.source);
        self.report(message, location, MessageArgs::one(description));
    }

    /// Reports unless a speculative parse is in progress.
    pub(crate) fn report(&mut self, message: Message, location: CodeLocation, args: MessageArgs) {
        if !self.is_looking_ahead {
            self.reporter.report(message, location, args);
        }
    }
}
