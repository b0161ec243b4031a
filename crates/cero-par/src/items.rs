//! Top-level definitions: functions, structs, enums.

use cero_lex::{Token, TokenKind};
use cero_util::{Message, SourceOffset};

use crate::ast::*;
use crate::expr::Precedence;
use crate::{ParseError, ParseResult, Parser};

impl<'s> Parser<'s, '_, '_> {
    pub(crate) fn parse_definition(&mut self) -> ParseResult<()> {
        let offset = self.cursor.peek_offset();

        let mut access = AccessSpecifier::None;
        if self.cursor.match_kind(TokenKind::Private) {
            access = AccessSpecifier::Private;
        } else if self.cursor.match_kind(TokenKind::Public) {
            access = AccessSpecifier::Public;
        }

        if let Some(name_token) = self.cursor.match_name() {
            return self.parse_function(offset, access, name_token);
        }

        if self.cursor.match_kind(TokenKind::Struct) {
            return self.parse_struct(offset, access);
        }

        if self.cursor.match_kind(TokenKind::Enum) {
            return self.parse_enum(offset, access);
        }

        let unexpected = self.cursor.peek();
        self.report_expectation(Message::ExpectFuncStructEnum, unexpected);
        Err(ParseError)
    }

    /// Skips ahead to the next plausible definition start.
    pub(crate) fn recover_at_definition_scope(&mut self) {
        const RECOVERY_TOKENS: &[TokenKind] = &[
            TokenKind::Public,
            TokenKind::Private,
            TokenKind::Struct,
            TokenKind::Enum,
            TokenKind::EndOfFile,
        ];

        loop {
            self.cursor.advance();
            if RECOVERY_TOKENS.contains(&self.cursor.current_kind()) {
                break;
            }
        }
    }

    fn parse_struct(&mut self, offset: SourceOffset, access: AccessSpecifier) -> ParseResult<()> {
        let index = self.store(AstNode::StructDefinition(Default::default()));

        let name = self.expect_name(Message::ExpectNameForStruct);

        self.nodes[index] = AstNode::StructDefinition(StructDefinition {
            offset,
            access,
            name,
        });
        Ok(())
    }

    fn parse_enum(&mut self, offset: SourceOffset, access: AccessSpecifier) -> ParseResult<()> {
        let index = self.store(AstNode::EnumDefinition(Default::default()));

        let name = self.expect_name(Message::ExpectNameForEnum);

        self.nodes[index] = AstNode::EnumDefinition(EnumDefinition {
            offset,
            access,
            name,
        });
        Ok(())
    }

    fn parse_function(
        &mut self,
        offset: SourceOffset,
        access: AccessSpecifier,
        name_token: Token,
    ) -> ParseResult<()> {
        let index = self.store(AstNode::FunctionDefinition(Default::default()));
        let name = name_token.lexeme(self.source);

        self.expect(TokenKind::LeftParen, Message::ExpectParenAfterFuncName)?;
        let num_parameters = self.parse_function_definition_parameters()?;
        let num_outputs = self.parse_function_definition_outputs()?;
        self.expect(TokenKind::LeftBrace, Message::ExpectBraceBeforeFuncBody)?;

        let num_statements = self.parse_block();

        self.nodes[index] = AstNode::FunctionDefinition(FunctionDefinition {
            offset,
            access,
            name,
            num_parameters,
            num_outputs,
            num_statements,
        });
        Ok(())
    }

    fn parse_function_definition_parameters(&mut self) -> ParseResult<u16> {
        let mut num_parameters: u16 = 0;
        if !self.cursor.match_kind(TokenKind::RightParen) {
            loop {
                self.parse_function_definition_parameter()?;
                num_parameters += 1;
                if !self.cursor.match_kind(TokenKind::Comma) {
                    break;
                }
            }
            self.expect(TokenKind::RightParen, Message::ExpectParenAfterParams)?;
        }
        Ok(num_parameters)
    }

    fn parse_function_definition_parameter(&mut self) -> ParseResult<()> {
        let index = self.store(AstNode::FunctionParameter(Default::default()));
        let offset = self.cursor.peek_offset();

        let mut specifier = ParameterSpecifier::None;
        if self.cursor.match_kind(TokenKind::In) {
            specifier = ParameterSpecifier::In;
        } else if self.cursor.match_kind(TokenKind::Var) {
            specifier = ParameterSpecifier::Var;
        }

        self.parse_type()?;
        let name = self.expect_name(Message::ExpectParamName);
        if name.is_empty() {
            // a parameter without a name throws the definition out
            return Err(ParseError);
        }

        let mut has_default_argument = false;
        if self.cursor.match_kind(TokenKind::Equals) {
            self.parse_subexpression(Precedence::Statement)?;
            has_default_argument = true;
        }

        self.nodes[index] = AstNode::FunctionParameter(FunctionParameter {
            offset,
            specifier,
            name,
            has_default_argument,
        });
        Ok(())
    }

    fn parse_function_definition_outputs(&mut self) -> ParseResult<u16> {
        let mut num_outputs: u16 = 0;
        if self.cursor.match_kind(TokenKind::ThinArrow) {
            loop {
                self.parse_function_definition_output()?;
                num_outputs += 1;
                if !self.cursor.match_kind(TokenKind::Comma) {
                    break;
                }
            }
        }
        Ok(num_outputs)
    }

    fn parse_function_definition_output(&mut self) -> ParseResult<()> {
        let index = self.store(AstNode::FunctionOutput(Default::default()));
        let offset = self.cursor.peek_offset();

        self.parse_type()?;

        let name = self.cursor.match_name().map(|token| token.lexeme(self.source));

        self.nodes[index] = AstNode::FunctionOutput(FunctionOutput { offset, name });
        Ok(())
    }
}
