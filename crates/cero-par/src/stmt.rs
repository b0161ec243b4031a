//! Blocks, statements, bindings and statement-level control flow.

use cero_lex::{Token, TokenKind};
use cero_util::{Message, MessageArgs, SourceOffset};

use crate::ast::*;
use crate::expr::Precedence;
use crate::{NodeIndex, ParseError, ParseResult, Parser};

impl<'s> Parser<'s, '_, '_> {
    /// Parses statements up to the closing `}` of the enclosing block,
    /// recovering at statement scope on errors. Returns the statement
    /// count.
    pub(crate) fn parse_block(&mut self) -> u16 {
        self.with_open_angles(0, |p| {
            p.with_binding_allowed(true, |p| {
                let mut num_statements: u16 = 0;
                while !p.cursor.match_kind(TokenKind::RightBrace) {
                    if p.cursor.peek_kind() == TokenKind::Semicolon {
                        let semicolon = p.cursor.peek();
                        let location = semicolon.locate_in(p.source);
                        p.report(Message::UnnecessarySemicolon, location, MessageArgs::none());
                        p.cursor.advance();
                        continue;
                    }

                    let begin = p.next_index();
                    match p.parse_statement() {
                        Ok(()) => num_statements += 1,
                        Err(ParseError) => {
                            p.rescind_nodes_from(begin);
                            if p.recover_at_statement_scope() {
                                break;
                            }
                        }
                    }
                }
                num_statements
            })
        })
    }

    /// Skips to just past the next `;`, or to a `}` (left for the block to
    /// consume). Returns true when the end of the input was reached.
    fn recover_at_statement_scope(&mut self) -> bool {
        let mut kind = self.cursor.current_kind();
        while kind != TokenKind::EndOfFile {
            if kind == TokenKind::Semicolon {
                self.cursor.advance();
                return false;
            }
            if kind == TokenKind::RightBrace {
                return false;
            }

            self.cursor.advance();
            kind = self.cursor.current_kind();
        }
        true
    }

    pub(crate) fn parse_statement(&mut self) -> ParseResult<()> {
        let next = self.cursor.peek_kind();
        let parses_complete_stmt = matches!(
            next,
            TokenKind::If | TokenKind::For | TokenKind::While | TokenKind::LeftBrace
        );

        let offset = self.cursor.peek_offset();
        let prev_expr = match next {
            TokenKind::If => self.on_if_stmt()?,
            TokenKind::For => self.on_for()?,
            TokenKind::While => self.on_while()?,
            TokenKind::LeftBrace => self.on_left_brace()?,
            TokenKind::Let => self.on_let()?,
            TokenKind::Var => self.on_var()?,
            TokenKind::Const => self.on_const()?,
            TokenKind::Static => self.on_static()?,
            _ => self.parse_expression_or_binding()?,
        };

        if !parses_complete_stmt {
            if let Some(name_token) = self.cursor.match_name() {
                self.on_trailing_name(offset, prev_expr, name_token)?;
            }
            self.expect(TokenKind::Semicolon, Message::ExpectSemicolon)?;
        }
        Ok(())
    }

    /// A name right after an expression statement turns the expression into
    /// the type of a `let` binding, provided it has the shape of a type.
    fn on_trailing_name(
        &mut self,
        offset: SourceOffset,
        prev_expr: NodeIndex,
        name_token: Token,
    ) -> ParseResult<()> {
        const TYPE_EXPR_KINDS: &[AstNodeKind] = &[
            AstNodeKind::NameExpr,
            AstNodeKind::GenericNameExpr,
            AstNodeKind::MemberExpr,
            AstNodeKind::ArrayTypeExpr,
            AstNodeKind::PointerTypeExpr,
            AstNodeKind::FunctionTypeExpr,
        ];

        let kind = self.nodes[prev_expr].kind();
        if !TYPE_EXPR_KINDS.contains(&kind) {
            self.report_expectation(Message::ExpectSemicolon, name_token);
            return Err(ParseError);
        }

        let name = name_token.lexeme(self.source);

        let mut has_initializer = false;
        if self.cursor.match_kind(TokenKind::Equals) {
            self.parse_subexpression(Precedence::Statement)?;
            has_initializer = true;
        }

        self.insert_parent(
            prev_expr,
            AstNode::BindingStatement(BindingStatement {
                offset,
                specifier: BindingSpecifier::Let,
                has_type: true,
                name,
                has_initializer,
            }),
        );
        Ok(())
    }

    // ── Control flow ───────────────────────────────────────────────────

    fn on_if_stmt(&mut self) -> ParseResult<NodeIndex> {
        let token = self.cursor.next();

        let begin = self.parse_expression_or_binding()?;
        self.expect_colon_or_block();
        self.parse_statement()?;

        let mut has_else = false;
        if self.cursor.match_kind(TokenKind::Else) {
            self.parse_statement()?;
            has_else = true;
        }

        self.insert_parent(
            begin,
            AstNode::IfExpr(IfExpr {
                offset: token.offset,
                has_else,
            }),
        );
        Ok(begin)
    }

    /// An `if` in expression position requires `: value else value`.
    pub(crate) fn on_if_expr(&mut self) -> ParseResult<NodeIndex> {
        let token = self.cursor.next();

        let begin = self.parse_expression_or_binding()?;
        self.expect(TokenKind::Colon, Message::ExpectColonInIfExpr)?;
        self.parse_subexpression(Precedence::Statement)?;
        self.expect(TokenKind::Else, Message::ExpectElse)?;
        self.parse_subexpression(Precedence::Statement)?;

        self.insert_parent(
            begin,
            AstNode::IfExpr(IfExpr {
                offset: token.offset,
                has_else: true,
            }),
        );
        Ok(begin)
    }

    fn on_while(&mut self) -> ParseResult<NodeIndex> {
        let token = self.cursor.next();

        let begin = self.parse_expression_or_binding()?;
        self.expect_colon_or_block();
        self.parse_statement()?;

        self.insert_parent(
            begin,
            AstNode::WhileLoop(WhileLoop {
                offset: token.offset,
            }),
        );
        Ok(begin)
    }

    /// The reserved `for binding in range : statement` form.
    fn on_for(&mut self) -> ParseResult<NodeIndex> {
        let token = self.cursor.next();

        let begin = self.parse_expression_or_binding()?;

        if !self.cursor.match_kind(TokenKind::In) {
            // the catalog has no for-specific kind; the range expression is
            // what is missing here
            let unexpected = self.cursor.peek();
            self.report_expectation(Message::ExpectExpr, unexpected);
            return Err(ParseError);
        }
        self.parse_expression_or_binding()?;

        self.expect_colon_or_block();
        self.parse_statement()?;

        self.insert_parent(
            begin,
            AstNode::ForLoop(ForLoop {
                offset: token.offset,
            }),
        );
        Ok(begin)
    }

    fn on_left_brace(&mut self) -> ParseResult<NodeIndex> {
        let token = self.cursor.next();

        let begin = self.next_index();
        let num_statements = self.parse_block();
        self.insert_parent(
            begin,
            AstNode::BlockStatement(BlockStatement {
                offset: token.offset,
                num_statements,
            }),
        );
        Ok(begin)
    }

    /// The body of an `if`, `while` or `for` statement is introduced by a
    /// colon or a block. A colon directly before a block is allowed but
    /// flagged; a missing colon before a non-block is reported without
    /// abandoning the statement.
    fn expect_colon_or_block(&mut self) {
        if let Some(colon) = self.cursor.match_token(TokenKind::Colon) {
            if self.cursor.peek_kind() == TokenKind::LeftBrace {
                let location = colon.locate_in(self.source);
                self.report(
                    Message::UnnecessaryColonBeforeBlock,
                    location,
                    MessageArgs::none(),
                );
            }
        } else {
            let next = self.cursor.peek();
            if next.kind != TokenKind::LeftBrace {
                self.report_expectation(Message::ExpectColonOrBlock, next);
            }
        }
    }

    // ── Bindings ───────────────────────────────────────────────────────

    fn on_let(&mut self) -> ParseResult<NodeIndex> {
        let token = self.cursor.next();

        let mut begin = self.next_index();
        let name = self.expect_name(Message::ExpectNameAfterLet);

        let mut has_initializer = false;
        if self.cursor.match_kind(TokenKind::Equals) {
            begin = self.parse_subexpression(Precedence::Statement)?;
            has_initializer = true;
        }

        self.insert_parent(
            begin,
            AstNode::BindingStatement(BindingStatement {
                offset: token.offset,
                specifier: BindingSpecifier::Let,
                has_type: false,
                name,
                has_initializer,
            }),
        );
        Ok(begin)
    }

    fn on_var(&mut self) -> ParseResult<NodeIndex> {
        let token = self.cursor.next();

        if self.cursor.peek_kind() == TokenKind::LeftBrace {
            return self.parse_permission(token.offset);
        }

        self.parse_binding(token.offset, BindingSpecifier::Var)
    }

    fn on_const(&mut self) -> ParseResult<NodeIndex> {
        let token = self.cursor.next();
        self.parse_binding(token.offset, BindingSpecifier::Const)
    }

    fn on_static(&mut self) -> ParseResult<NodeIndex> {
        let token = self.cursor.next();

        let specifier = if self.cursor.match_kind(TokenKind::Var) {
            BindingSpecifier::StaticVar
        } else {
            BindingSpecifier::Static
        };
        self.parse_binding(token.offset, specifier)
    }

    /// Bindings come in two forms: `specifier name = initializer` and
    /// `specifier type name (= initializer)?`. A bounded lookahead for
    /// `name =` picks the first; everything else parses as the typed form.
    fn parse_binding(&mut self, offset: SourceOffset, specifier: BindingSpecifier) -> ParseResult<NodeIndex> {
        let mut lookahead = self.cursor;
        if let Some(name_token) = lookahead.match_name() {
            if lookahead.match_kind(TokenKind::Equals) {
                self.cursor = lookahead;

                let name = name_token.lexeme(self.source);
                let begin = self.parse_subexpression(Precedence::Statement)?;

                self.insert_parent(
                    begin,
                    AstNode::BindingStatement(BindingStatement {
                        offset,
                        specifier,
                        has_type: false,
                        name,
                        has_initializer: true,
                    }),
                );
                return Ok(begin);
            }
        }

        let begin = self.parse_type()?;
        let name = self.expect_name(Message::ExpectNameAfterDeclType);

        let mut has_initializer = false;
        if self.cursor.match_kind(TokenKind::Equals) {
            self.parse_subexpression(Precedence::Statement)?;
            has_initializer = true;
        }

        self.insert_parent(
            begin,
            AstNode::BindingStatement(BindingStatement {
                offset,
                specifier,
                has_type: true,
                name,
                has_initializer,
            }),
        );
        Ok(begin)
    }
}
