//! The Pratt expression core: head parses keyed by the next token, tail
//! parses keyed by the token following an expression, and the context
//! handling for `>` and generic-argument lists.

use cero_lex::{TokenCursor, TokenKind};
use cero_util::{Message, MessageArgs, SourceOffset};

use crate::ast::*;
use crate::{NodeIndex, ParseError, ParseResult, Parser};

/// Binding strength of the construct currently being parsed, lowest first.
/// A tail parse runs only while its precedence is strictly above the
/// current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Precedence {
    Statement,
    Assignment,
    Logical,
    Comparison,
    AdditiveOrBitwise,
    Multiplicative,
    Prefix,
    Postfix,
}

/// The precedence a binary operator parses its right-hand side at. Using
/// the level below the operator's own (as the tail table ranks it) makes
/// the operator right-associative: `**` parses its right side at
/// `Multiplicative` so a nested `**` keeps going, and the assignments
/// parse theirs at `Statement` for the same reason.
fn associativity_precedence(op: BinaryOperator) -> Precedence {
    use BinaryOperator::*;
    match op {
        Add | Subtract => Precedence::AdditiveOrBitwise,
        Multiply | Divide | Remainder | Power => Precedence::Multiplicative,
        LogicalAnd | LogicalOr => Precedence::Logical,
        BitAnd | BitOr | Xor | LeftShift | RightShift => Precedence::AdditiveOrBitwise,
        Equal | NotEqual | Less | Greater | LessEqual | GreaterEqual => Precedence::Comparison,
        Assign | AddAssign | SubtractAssign | MultiplyAssign | DivideAssign | RemainderAssign
        | PowerAssign | AndAssign | OrAssign | XorAssign | LeftShiftAssign | RightShiftAssign => {
            Precedence::Statement
        }
    }
}

/// What to do with the token(s) after a finished left-hand expression.
#[derive(Clone, Copy)]
enum TailRule {
    Binary(BinaryOperator),
    /// Two adjacent `>` tokens fused into one `>>` operator.
    FusedRightShift,
    Postfix(UnaryOperator),
    Member,
    GenericScope,
    Call,
    Index,
}

impl<'s, 't> Parser<'s, 't, '_> {
    /// Parses a full expression in a position where a trailing-name binding
    /// may follow.
    pub(crate) fn parse_expression_or_binding(&mut self) -> ParseResult<NodeIndex> {
        self.with_binding_allowed(true, |p| p.parse_expression(Precedence::Statement))
    }

    /// Parses a nested expression; trailing names are not bindings here.
    pub(crate) fn parse_subexpression(&mut self, precedence: Precedence) -> ParseResult<NodeIndex> {
        self.with_binding_allowed(false, |p| p.parse_expression(precedence))
    }

    fn parse_expression(&mut self, precedence: Precedence) -> ParseResult<NodeIndex> {
        let head_offset = self.cursor.peek_offset();

        let expression = self.parse_head()?;
        while let Some(rule) = self.next_tail_rule(precedence) {
            self.apply_tail_rule(rule, expression, head_offset)?;
        }

        Ok(expression)
    }

    /// Whether a token kind can begin an expression; `break`, `return` and
    /// friends use this to decide if an operand follows.
    pub(crate) fn expression_may_follow(&mut self) -> bool {
        use TokenKind::*;
        matches!(
            self.cursor.peek_kind(),
            Name | If
                | Var
                | DecIntLiteral
                | HexIntLiteral
                | BinIntLiteral
                | OctIntLiteral
                | FloatLiteral
                | CharLiteral
                | StringLiteral
                | LeftParen
                | LeftBracket
                | Break
                | Continue
                | Return
                | Throw
                | Ampersand
                | Minus
                | Tilde
                | PlusPlus
                | MinusMinus
                | Caret
        )
    }

    fn parse_head(&mut self) -> ParseResult<NodeIndex> {
        use TokenKind::*;
        let next = self.cursor.peek();
        match next.kind {
            Name => self.on_name(),
            If => self.on_if_expr(),
            Var => self.on_permission_head(),
            DecIntLiteral => self.on_numeric_literal(NumericLiteralKind::Decimal),
            HexIntLiteral => self.on_numeric_literal(NumericLiteralKind::Hexadecimal),
            BinIntLiteral => self.on_numeric_literal(NumericLiteralKind::Binary),
            OctIntLiteral => self.on_numeric_literal(NumericLiteralKind::Octal),
            FloatLiteral => self.on_numeric_literal(NumericLiteralKind::Float),
            CharLiteral => self.on_numeric_literal(NumericLiteralKind::Character),
            StringLiteral => self.on_string_literal(),
            LeftParen => self.on_prefix_left_paren(),
            LeftBracket => self.on_prefix_left_bracket(),
            Break => self.on_break(),
            Continue => self.on_continue(),
            Return => self.on_return(),
            Throw => self.on_throw(),
            Ampersand => self.on_prefix_operator(UnaryOperator::AddressOf),
            Minus => self.on_prefix_operator(UnaryOperator::Negate),
            Tilde => self.on_prefix_operator(UnaryOperator::BitwiseNot),
            PlusPlus => self.on_prefix_operator(UnaryOperator::PreIncrement),
            MinusMinus => self.on_prefix_operator(UnaryOperator::PreDecrement),
            Caret => self.on_caret(),
            _ => {
                self.report_expectation(Message::ExpectExpr, next);
                Err(ParseError)
            }
        }
    }

    /// Looks up the tail rule for the next token and applies the
    /// precedence cutoff. Nothing is consumed here, so a stopped loop
    /// leaves the stream untouched; in particular the first `>` of a fused
    /// `>>` stays put until the rule actually runs.
    fn next_tail_rule(&mut self, current: Precedence) -> Option<TailRule> {
        use BinaryOperator::*;
        use Precedence::*;
        use TokenKind::*;

        let token = self.cursor.peek();
        let (precedence, rule) = match token.kind {
            Equals => (Assignment, TailRule::Binary(Assign)),
            PlusEquals => (Assignment, TailRule::Binary(AddAssign)),
            MinusEquals => (Assignment, TailRule::Binary(SubtractAssign)),
            StarEquals => (Assignment, TailRule::Binary(MultiplyAssign)),
            SlashEquals => (Assignment, TailRule::Binary(DivideAssign)),
            PercentEquals => (Assignment, TailRule::Binary(RemainderAssign)),
            StarStarEquals => (Assignment, TailRule::Binary(PowerAssign)),
            AmpersandEquals => (Assignment, TailRule::Binary(AndAssign)),
            PipeEquals => (Assignment, TailRule::Binary(OrAssign)),
            TildeEquals => (Assignment, TailRule::Binary(XorAssign)),
            LeftAngleAngleEquals => (Assignment, TailRule::Binary(LeftShiftAssign)),
            RightAngleAngleEquals => (Assignment, TailRule::Binary(RightShiftAssign)),
            AmpersandAmpersand => (Logical, TailRule::Binary(LogicalAnd)),
            PipePipe => (Logical, TailRule::Binary(LogicalOr)),
            EqualsEquals => (Comparison, TailRule::Binary(Equal)),
            BangEquals => (Comparison, TailRule::Binary(NotEqual)),
            LeftAngle => (Comparison, TailRule::Binary(Less)),
            LeftAngleEquals => (Comparison, TailRule::Binary(LessEqual)),
            RightAngleEquals => (Comparison, TailRule::Binary(GreaterEqual)),
            Plus => (AdditiveOrBitwise, TailRule::Binary(Add)),
            Minus => (AdditiveOrBitwise, TailRule::Binary(Subtract)),
            Ampersand => (AdditiveOrBitwise, TailRule::Binary(BitAnd)),
            Pipe => (AdditiveOrBitwise, TailRule::Binary(BitOr)),
            Tilde => (AdditiveOrBitwise, TailRule::Binary(Xor)),
            LeftAngleAngle => (AdditiveOrBitwise, TailRule::Binary(LeftShift)),
            Star => (Multiplicative, TailRule::Binary(Multiply)),
            Slash => (Multiplicative, TailRule::Binary(Divide)),
            Percent => (Multiplicative, TailRule::Binary(Remainder)),
            StarStar => (Prefix, TailRule::Binary(Power)),
            Caret => (Postfix, TailRule::Postfix(UnaryOperator::Dereference)),
            PlusPlus => (Postfix, TailRule::Postfix(UnaryOperator::PostIncrement)),
            MinusMinus => (Postfix, TailRule::Postfix(UnaryOperator::PostDecrement)),
            Dot => (Postfix, TailRule::Member),
            ColonColon => (Postfix, TailRule::GenericScope),
            LeftParen => (Postfix, TailRule::Call),
            LeftBracket => (Postfix, TailRule::Index),
            RightAngle => {
                // an open angle bracket owns the `>`: the innermost
                // generic-argument list gets closed instead of parsing a
                // greater-than expression
                if self.open_angles > 0 {
                    return None;
                }

                let next = self.cursor.peek_ahead();
                if next.kind == RightAngle && next.offset == token.offset + 1 {
                    (AdditiveOrBitwise, TailRule::FusedRightShift)
                } else {
                    (Comparison, TailRule::Binary(Greater))
                }
            }
            _ => return None,
        };

        if current >= precedence {
            None
        } else {
            Some(rule)
        }
    }

    fn apply_tail_rule(
        &mut self,
        rule: TailRule,
        expression: NodeIndex,
        offset: SourceOffset,
    ) -> ParseResult<()> {
        match rule {
            TailRule::Binary(op) => self.on_binary_operator(op, expression, offset),
            TailRule::FusedRightShift => {
                self.cursor.advance(); // the first `>`
                self.on_binary_operator(BinaryOperator::RightShift, expression, offset)
            }
            TailRule::Postfix(op) => {
                self.on_postfix_operator(op, expression, offset);
                Ok(())
            }
            TailRule::Member => self.on_dot(expression, offset),
            TailRule::GenericScope => self.on_colon_colon(expression, offset),
            TailRule::Call => self.on_infix_left_paren(expression, offset),
            TailRule::Index => self.on_infix_left_bracket(expression, offset),
        }
    }

    // ── Names and generic disambiguation ───────────────────────────────

    fn on_name(&mut self) -> ParseResult<NodeIndex> {
        let token = self.cursor.next();
        let name = token.lexeme(self.source);
        self.parse_name(token.offset, name)
    }

    pub(crate) fn parse_name(&mut self, offset: SourceOffset, name: &'s str) -> ParseResult<NodeIndex> {
        let name_start = self.cursor;
        if self.cursor.match_kind(TokenKind::LeftAngle) {
            return self.parse_generic_name(offset, name, name_start);
        }

        Ok(self.store(AstNode::NameExpr(NameExpr { offset, name })))
    }

    /// Called with the `<` after a name consumed. Speculatively parses the
    /// argument list; if the speculation rejects the generic reading, the
    /// cursor rewinds to the `<` and the name becomes a plain [`NameExpr`]
    /// whose `<` continues as a comparison.
    fn parse_generic_name(
        &mut self,
        offset: SourceOffset,
        name: &'s str,
        name_start: TokenCursor<'t>,
    ) -> ParseResult<NodeIndex> {
        self.with_open_angles(self.open_angles + 1, |p| {
            let name_begin = p.next_index();
            let mut num_generic_args: u16 = 0;
            if !p.cursor.match_kind(TokenKind::RightAngle) {
                let fall_back = p.should_fall_back_to_name()?;

                p.cursor = name_start;
                p.rescind_nodes_from(name_begin);
                if fall_back {
                    return Ok(p.store(AstNode::NameExpr(NameExpr { offset, name })));
                }

                p.cursor.advance(); // the `<`
                loop {
                    p.parse_subexpression(Precedence::Statement)?;
                    num_generic_args += 1;
                    if !p.cursor.match_kind(TokenKind::Comma) {
                        break;
                    }
                }
                p.cursor.advance(); // the closing `>`, guaranteed by the speculation
            }

            p.insert_parent(
                name_begin,
                AstNode::GenericNameExpr(GenericNameExpr {
                    offset,
                    name,
                    num_generic_args,
                }),
            );
            Ok(name_begin)
        })
    }

    /// The speculative parse behind generic-name disambiguation, run with
    /// diagnostics suppressed. Returns true when the construct should be
    /// re-parsed as a plain name followed by comparison operators.
    fn should_fall_back_to_name(&mut self) -> ParseResult<bool> {
        const FALLBACKS: &[TokenKind] = &[
            TokenKind::DecIntLiteral,
            TokenKind::HexIntLiteral,
            TokenKind::BinIntLiteral,
            TokenKind::OctIntLiteral,
            TokenKind::FloatLiteral,
            TokenKind::CharLiteral,
            TokenKind::StringLiteral,
            TokenKind::Minus,
            TokenKind::Tilde,
            TokenKind::Ampersand,
            TokenKind::PlusPlus,
            TokenKind::MinusMinus,
        ];

        self.with_lookahead(|p| {
            loop {
                p.parse_subexpression(Precedence::Statement)?;
                if !p.cursor.match_kind(TokenKind::Comma) {
                    break;
                }
            }

            if p.cursor.match_kind(TokenKind::RightAngle) {
                let kind = p.cursor.peek_kind();
                Ok((kind == TokenKind::Name && !p.is_binding_allowed)
                    || FALLBACKS.contains(&kind)
                    || (p.open_angles == 1 && kind == TokenKind::RightAngle))
            } else {
                Ok(true)
            }
        })
    }

    // ── Literals ───────────────────────────────────────────────────────

    fn on_numeric_literal(&mut self, kind: NumericLiteralKind) -> ParseResult<NodeIndex> {
        let token = self.cursor.next();
        Ok(self.store(AstNode::NumericLiteralExpr(NumericLiteralExpr {
            offset: token.offset,
            kind,
        })))
    }

    fn on_string_literal(&mut self) -> ParseResult<NodeIndex> {
        let token = self.cursor.next();
        // TODO: decode escape sequences once their semantics are settled;
        // for now the value is the lexeme verbatim
        let value = token.lexeme(self.source).to_owned();
        Ok(self.store(AstNode::StringLiteralExpr(StringLiteralExpr {
            offset: token.offset,
            value,
        })))
    }

    // ── Groups, calls, indexes ─────────────────────────────────────────

    fn on_prefix_left_paren(&mut self) -> ParseResult<NodeIndex> {
        let token = self.cursor.next();
        self.with_open_angles(0, |p| {
            let group_begin = p.next_index();

            let mut num_args: u16 = 0;
            if !p.cursor.match_kind(TokenKind::RightParen) {
                loop {
                    p.parse_subexpression(Precedence::Statement)?;
                    num_args += 1;
                    if !p.cursor.match_kind(TokenKind::Comma) {
                        break;
                    }
                }
                p.expect(TokenKind::RightParen, Message::ExpectClosingParen)?;
            }

            p.insert_parent(
                group_begin,
                AstNode::GroupExpr(GroupExpr {
                    offset: token.offset,
                    num_args,
                }),
            );
            Ok(group_begin)
        })
    }

    fn on_prefix_left_bracket(&mut self) -> ParseResult<NodeIndex> {
        let token = self.cursor.next();
        self.parse_array_type(token.offset)
    }

    fn on_infix_left_paren(&mut self, left: NodeIndex, offset: SourceOffset) -> ParseResult<()> {
        self.cursor.advance();
        self.with_open_angles(0, |p| {
            let mut num_args: u16 = 0;
            if !p.cursor.match_kind(TokenKind::RightParen) {
                loop {
                    p.parse_subexpression(Precedence::Statement)?;
                    num_args += 1;
                    if !p.cursor.match_kind(TokenKind::Comma) {
                        break;
                    }
                }
                p.expect(TokenKind::RightParen, Message::ExpectClosingParen)?;
            }
            p.insert_parent(left, AstNode::CallExpr(CallExpr { offset, num_args }));
            Ok(())
        })
    }

    fn on_infix_left_bracket(&mut self, left: NodeIndex, offset: SourceOffset) -> ParseResult<()> {
        self.cursor.advance();

        let num_args = self.parse_bracketed_arguments()?;
        self.insert_parent(left, AstNode::IndexExpr(IndexExpr { offset, num_args }));
        Ok(())
    }

    fn parse_bracketed_arguments(&mut self) -> ParseResult<u16> {
        self.with_open_angles(0, |p| {
            let mut num_args: u16 = 0;
            if !p.cursor.match_kind(TokenKind::RightBracket) {
                loop {
                    p.parse_subexpression(Precedence::Statement)?;
                    num_args += 1;
                    if !p.cursor.match_kind(TokenKind::Comma) {
                        break;
                    }
                }
                p.expect(TokenKind::RightBracket, Message::ExpectBracketAfterIndex)?;
            }
            Ok(num_args)
        })
    }

    // ── Members ────────────────────────────────────────────────────────

    fn on_dot(&mut self, left: NodeIndex, offset: SourceOffset) -> ParseResult<()> {
        self.cursor.advance();

        let member = self.expect_name(Message::ExpectNameAfterDot);
        self.insert_parent(left, AstNode::MemberExpr(MemberExpr { offset, member }));
        Ok(())
    }

    /// `target :: member <args>?`, the generic-scope form of member
    /// access. The argument list is disambiguated exactly like a generic
    /// name; on fallback the member stays a plain [`MemberExpr`] and the
    /// `<` continues as a comparison.
    fn on_colon_colon(&mut self, left: NodeIndex, offset: SourceOffset) -> ParseResult<()> {
        self.cursor.advance();

        let member = self.expect_name(Message::ExpectNameAfterDot);

        let member_start = self.cursor;
        if self.cursor.match_kind(TokenKind::LeftAngle) {
            return self.parse_generic_member(left, offset, member, member_start);
        }

        self.insert_parent(left, AstNode::MemberExpr(MemberExpr { offset, member }));
        Ok(())
    }

    fn parse_generic_member(
        &mut self,
        left: NodeIndex,
        offset: SourceOffset,
        member: &'s str,
        member_start: TokenCursor<'t>,
    ) -> ParseResult<()> {
        self.with_open_angles(self.open_angles + 1, |p| {
            let args_begin = p.next_index();
            let mut num_generic_args: u16 = 0;
            if !p.cursor.match_kind(TokenKind::RightAngle) {
                let fall_back = p.should_fall_back_to_name()?;

                p.cursor = member_start;
                p.rescind_nodes_from(args_begin);
                if fall_back {
                    p.insert_parent(left, AstNode::MemberExpr(MemberExpr { offset, member }));
                    return Ok(());
                }

                p.cursor.advance(); // the `<`
                loop {
                    p.parse_subexpression(Precedence::Statement)?;
                    num_generic_args += 1;
                    if !p.cursor.match_kind(TokenKind::Comma) {
                        break;
                    }
                }
                p.cursor.advance(); // the closing `>`
            }

            p.insert_parent(
                left,
                AstNode::GenericMemberExpr(GenericMemberExpr {
                    offset,
                    member,
                    num_generic_args,
                }),
            );
            Ok(())
        })
    }

    // ── break / continue / return / throw ──────────────────────────────

    fn on_break(&mut self) -> ParseResult<NodeIndex> {
        let token = self.cursor.next();

        let (begin, has_expression) = self.parse_optional_subexpression()?;
        self.insert_parent(
            begin,
            AstNode::BreakExpr(BreakExpr {
                offset: token.offset,
                has_expression,
            }),
        );
        Ok(begin)
    }

    fn on_continue(&mut self) -> ParseResult<NodeIndex> {
        let token = self.cursor.next();

        let (begin, has_expression) = self.parse_optional_subexpression()?;
        self.insert_parent(
            begin,
            AstNode::ContinueExpr(ContinueExpr {
                offset: token.offset,
                has_expression,
            }),
        );
        Ok(begin)
    }

    fn on_throw(&mut self) -> ParseResult<NodeIndex> {
        let token = self.cursor.next();

        let (begin, has_expression) = self.parse_optional_subexpression()?;
        self.insert_parent(
            begin,
            AstNode::ThrowExpr(ThrowExpr {
                offset: token.offset,
                has_expression,
            }),
        );
        Ok(begin)
    }

    fn on_return(&mut self) -> ParseResult<NodeIndex> {
        let token = self.cursor.next();

        let begin = self.next_index();
        let mut num_expressions: u16 = 0;
        if self.expression_may_follow() {
            loop {
                self.parse_subexpression(Precedence::Statement)?;
                num_expressions += 1;
                if !self.cursor.match_kind(TokenKind::Comma) {
                    break;
                }
            }
        }

        self.insert_parent(
            begin,
            AstNode::ReturnExpr(ReturnExpr {
                offset: token.offset,
                num_expressions,
            }),
        );
        Ok(begin)
    }

    fn parse_optional_subexpression(&mut self) -> ParseResult<(NodeIndex, bool)> {
        if self.expression_may_follow() {
            let begin = self.parse_subexpression(Precedence::Statement)?;
            Ok((begin, true))
        } else {
            Ok((self.next_index(), false))
        }
    }

    // ── Operators ──────────────────────────────────────────────────────

    fn on_prefix_operator(&mut self, op: UnaryOperator) -> ParseResult<NodeIndex> {
        let token = self.cursor.next();

        let begin = self.parse_subexpression(Precedence::Prefix)?;

        self.insert_parent(
            begin,
            AstNode::UnaryExpr(UnaryExpr {
                offset: token.offset,
                op,
            }),
        );
        Ok(begin)
    }

    fn on_postfix_operator(&mut self, op: UnaryOperator, left: NodeIndex, offset: SourceOffset) {
        self.cursor.advance();
        self.insert_parent(left, AstNode::UnaryExpr(UnaryExpr { offset, op }));
    }

    fn on_binary_operator(
        &mut self,
        op: BinaryOperator,
        left: NodeIndex,
        offset: SourceOffset,
    ) -> ParseResult<()> {
        let precedence = associativity_precedence(op);

        let operator_token = self.cursor.next();
        let right = self.parse_subexpression(precedence)?;
        self.validate_associativity(op, left, right, operator_token);

        self.insert_parent(left, AstNode::BinaryExpr(BinaryExpr { offset, op }));
        Ok(())
    }

    // ── Operator-mixing diagnostics ────────────────────────────────────

    fn validate_associativity(
        &mut self,
        op: BinaryOperator,
        left: NodeIndex,
        right: NodeIndex,
        operator_token: cero_lex::Token,
    ) {
        if let AstNode::BinaryExpr(node) = &self.nodes[right] {
            let right_op = node.op;
            self.validate_binary_associativity(op, right_op, operator_token);
        }

        match &self.nodes[left] {
            AstNode::BinaryExpr(node) => {
                let left_op = node.op;
                self.validate_binary_associativity(left_op, op, operator_token);
            }
            AstNode::UnaryExpr(node) => {
                let left_op = node.op;
                self.validate_unary_binary_associativity(left_op, op, operator_token);
            }
            _ => {}
        }
    }

    fn validate_binary_associativity(
        &mut self,
        left: BinaryOperator,
        right: BinaryOperator,
        operator_token: cero_lex::Token,
    ) {
        if associates_ambiguous_operators(left, right) {
            let location = operator_token.locate_in(self.source);
            self.report(
                Message::AmbiguousOperatorMixing,
                location,
                MessageArgs::two(left.as_str(), right.as_str()),
            );
        }
    }

    fn validate_unary_binary_associativity(
        &mut self,
        left: UnaryOperator,
        right: BinaryOperator,
        operator_token: cero_lex::Token,
    ) {
        if left == UnaryOperator::Negate && right == BinaryOperator::Power {
            let location = operator_token.locate_in(self.source);
            self.report(
                Message::AmbiguousOperatorMixing,
                location,
                MessageArgs::two("-", "**"),
            );
        }
    }
}

/// Whether two adjacent binary operators form an ambiguous mix: arithmetic
/// with bitwise, `&&` with `||`, or chained comparisons outside the
/// transitively-readable pairs.
fn associates_ambiguous_operators(left: BinaryOperator, right: BinaryOperator) -> bool {
    use BinaryOperator::*;

    const BITWISE_OPERATORS: &[BinaryOperator] = &[BitAnd, BitOr, Xor, LeftShift, RightShift];
    const ARITHMETIC_OPERATORS: &[BinaryOperator] =
        &[Add, Subtract, Multiply, Divide, Remainder, Power];
    const COMPARISON_OPERATORS: &[BinaryOperator] =
        &[Equal, NotEqual, Less, Greater, LessEqual, GreaterEqual];
    const TRANSITIVE_COMPARISONS: &[(BinaryOperator, BinaryOperator)] = &[
        (Equal, Equal),
        (Less, Less),
        (Less, LessEqual),
        (LessEqual, LessEqual),
        (LessEqual, Less),
        (Greater, Greater),
        (Greater, GreaterEqual),
        (GreaterEqual, GreaterEqual),
        (GreaterEqual, Greater),
    ];

    match left {
        Add | Subtract | Multiply | Divide | Remainder | Power => {
            BITWISE_OPERATORS.contains(&right)
        }
        BitAnd | BitOr | Xor | LeftShift | RightShift => ARITHMETIC_OPERATORS.contains(&right),
        LogicalAnd => right == LogicalOr,
        LogicalOr => right == LogicalAnd,
        Equal | NotEqual | Less | Greater | LessEqual | GreaterEqual => {
            COMPARISON_OPERATORS.contains(&right)
                && !TRANSITIVE_COMPARISONS.contains(&(left, right))
        }
        _ => false,
    }
}
