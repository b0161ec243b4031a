//! Type expressions: pointer, array and function types, and permissions.

use cero_lex::TokenKind;
use cero_util::{Message, MessageArgs, SourceOffset};

use crate::ast::*;
use crate::expr::Precedence;
use crate::{NodeIndex, ParseError, ParseResult, Parser};

impl<'s> Parser<'s, '_, '_> {
    /// Parses a type where one is syntactically required: `^` opens a
    /// pointer type, `[` an array type, `(` a function type, and anything
    /// else must be a (possibly generic) name.
    pub(crate) fn parse_type(&mut self) -> ParseResult<NodeIndex> {
        let offset = self.cursor.peek_offset();

        if self.cursor.match_kind(TokenKind::Caret) {
            return self.parse_pointer_type(offset);
        }
        if self.cursor.match_kind(TokenKind::LeftBracket) {
            return self.parse_array_type(offset);
        }
        if self.cursor.match_kind(TokenKind::LeftParen) {
            return self.parse_function_type(offset);
        }

        let name = self.expect_name(Message::ExpectType);
        self.parse_name(offset, name)
    }

    /// `^` in expression position also starts a pointer type.
    pub(crate) fn on_caret(&mut self) -> ParseResult<NodeIndex> {
        let token = self.cursor.next();
        self.parse_pointer_type(token.offset)
    }

    /// `var` in expression position is a permission.
    pub(crate) fn on_permission_head(&mut self) -> ParseResult<NodeIndex> {
        let token = self.cursor.next();
        self.parse_permission(token.offset)
    }

    /// Parses the rest of a permission after its `var`: nothing, or a
    /// braced bound list that `...` marks as unbounded.
    pub(crate) fn parse_permission(&mut self, offset: SourceOffset) -> ParseResult<NodeIndex> {
        let begin = self.next_index();

        let mut specifier = PermissionSpecifier::Var;
        let mut num_args: u16 = 0;
        if self.cursor.match_kind(TokenKind::LeftBrace) {
            self.with_open_angles(0, |p| -> ParseResult<()> {
                specifier = PermissionSpecifier::VarBounded;
                if !p.cursor.match_kind(TokenKind::RightBrace) {
                    loop {
                        p.parse_subexpression(Precedence::Statement)?;
                        num_args += 1;
                        if !p.cursor.match_kind(TokenKind::Comma) {
                            break;
                        }
                    }

                    if p.cursor.match_kind(TokenKind::Ellipsis) {
                        specifier = PermissionSpecifier::VarUnbounded;
                    }

                    p.expect(TokenKind::RightBrace, Message::ExpectBraceAfterPermission)?;
                }
                Ok(())
            })?;
        }

        self.insert_parent(
            begin,
            AstNode::PermissionExpr(PermissionExpr {
                offset,
                specifier,
                num_args,
            }),
        );
        Ok(begin)
    }

    /// Parses the rest of a pointer type after its `^`.
    fn parse_pointer_type(&mut self, offset: SourceOffset) -> ParseResult<NodeIndex> {
        let has_permission;
        let begin;
        if self.cursor.peek_kind() == TokenKind::Var {
            has_permission = true;
            begin = self.parse_subexpression(Precedence::Statement)?;
            self.parse_type()?;
        } else {
            has_permission = false;
            begin = self.parse_type()?;
        }

        self.insert_parent(
            begin,
            AstNode::PointerTypeExpr(PointerTypeExpr {
                offset,
                has_permission,
            }),
        );
        Ok(begin)
    }

    /// Parses the rest of an array type after its `[`. An empty bound
    /// (`[]T`) is an unbounded array.
    pub(crate) fn parse_array_type(&mut self, offset: SourceOffset) -> ParseResult<NodeIndex> {
        let has_bound;
        let begin;
        if self.cursor.match_kind(TokenKind::RightBracket) {
            has_bound = false;
            begin = self.parse_type()?;
        } else {
            has_bound = true;
            begin = self.parse_subexpression(Precedence::Statement)?;
            self.expect(TokenKind::RightBracket, Message::ExpectBracketAfterArrayBound)?;
            self.parse_type()?;
        }

        self.insert_parent(
            begin,
            AstNode::ArrayTypeExpr(ArrayTypeExpr { offset, has_bound }),
        );
        Ok(begin)
    }

    /// Parses the rest of a function type after its `(`.
    fn parse_function_type(&mut self, offset: SourceOffset) -> ParseResult<NodeIndex> {
        let begin = self.next_index();

        let num_parameters = self.parse_function_type_parameters()?;
        self.expect(TokenKind::ThinArrow, Message::ExpectArrowAfterFuncTypeParams)?;
        let num_outputs = self.parse_function_type_outputs()?;

        self.insert_parent(
            begin,
            AstNode::FunctionTypeExpr(FunctionTypeExpr {
                offset,
                num_parameters,
                num_outputs,
            }),
        );
        Ok(begin)
    }

    fn parse_function_type_parameters(&mut self) -> ParseResult<u16> {
        let mut num_parameters: u16 = 0;
        if !self.cursor.match_kind(TokenKind::RightParen) {
            loop {
                self.parse_function_type_parameter()?;
                num_parameters += 1;
                if !self.cursor.match_kind(TokenKind::Comma) {
                    break;
                }
            }
            self.expect(TokenKind::RightParen, Message::ExpectParenAfterParams)?;
        }
        Ok(num_parameters)
    }

    /// Like a definition parameter, but the name is optional and a default
    /// argument is rejected.
    fn parse_function_type_parameter(&mut self) -> ParseResult<()> {
        let offset = self.cursor.peek_offset();

        let mut specifier = ParameterSpecifier::None;
        if self.cursor.match_kind(TokenKind::In) {
            specifier = ParameterSpecifier::In;
        } else if self.cursor.match_kind(TokenKind::Var) {
            specifier = ParameterSpecifier::Var;
        }

        let begin = self.parse_type()?;

        let name = match self.cursor.match_name() {
            Some(token) => token.lexeme(self.source),
            None => "",
        };

        if let Some(equals) = self.cursor.match_token(TokenKind::Equals) {
            let location = equals.locate_in(self.source);
            self.report(Message::FuncTypeDefaultArgument, location, MessageArgs::none());
            return Err(ParseError);
        }

        self.insert_parent(
            begin,
            AstNode::FunctionParameter(FunctionParameter {
                offset,
                specifier,
                name,
                has_default_argument: false,
            }),
        );
        Ok(())
    }

    /// Function-type outputs: a single anonymous output, or a
    /// parenthesized comma list whose outputs may be named. A name after
    /// an unparenthesized output would be indistinguishable from the name
    /// of the binding or parameter carrying the function type.
    fn parse_function_type_outputs(&mut self) -> ParseResult<u16> {
        let mut num_outputs: u16 = 0;
        if self.cursor.match_kind(TokenKind::LeftParen) {
            loop {
                self.parse_function_type_output()?;
                num_outputs += 1;
                if !self.cursor.match_kind(TokenKind::Comma) {
                    break;
                }
            }
            self.expect(TokenKind::RightParen, Message::ExpectParenAfterOutputs)?;
        } else {
            let offset = self.cursor.peek_offset();
            let begin = self.parse_type()?;
            self.insert_parent(
                begin,
                AstNode::FunctionOutput(FunctionOutput { offset, name: None }),
            );
            num_outputs += 1;
        }
        Ok(num_outputs)
    }

    fn parse_function_type_output(&mut self) -> ParseResult<()> {
        let offset = self.cursor.peek_offset();
        let begin = self.parse_type()?;

        let name = self.cursor.match_name().map(|token| token.lexeme(self.source));

        self.insert_parent(
            begin,
            AstNode::FunctionOutput(FunctionOutput { offset, name }),
        );
        Ok(())
    }
}
