//! Expression parsing using Pratt parsing (top-down operator precedence).
//!
//! # Operator precedence (lowest to highest)
//!
//! | Level | Operators | Associativity |
//! |-------|-----------|---------------|
//! | 1 | `=`, `+=`, `-=`, `*=`, `/=`, `%=` | Right |
//! | 2 | `\|\|` | Left |
//! | 3 | `&&` | Left |
//! | 4 | `\|` | Left |
//! | 5 | `^` | Left |
//! | 6 | `&` | Left |
//! | 7 | `==`, `!=` | Left |
//! | 8 | `<`, `<=`, `>`, `>=` | Left |
//! | 9 | `<<`, `>>` | Left |
//! | 10 | `+`, `-` | Left |
//! | 11 | `*`, `/`, `%` | Left |
//! | 12 | prefix `!`, `~`, `-`, `+`, `++`, `--` | - |
//! | 13 | postfix `()`, `[]`, `.`, `++`, `--` | - |
//!
//! The bitwise levels sit between the logical operators and equality, and
//! casts are C-style `(نوع) قيمة` at prefix level, recognized only when a
//! primitive type name follows the parenthesis.

use baa_lex::TokenKind;
use baa_util::{DiagnosticCode, Symbol};

use crate::ast::*;
use crate::Parser;

/// Binding power levels for Pratt parsing.
/// Higher numbers bind tighter; left-associative operators use
/// `(level, level + 1)`, the right-associative assignments `(level, level)`.
mod bp {
    /// Start of an expression.
    pub const MIN: u8 = 0;

    /// Assignment: `=`, `+=`, `-=`, `*=`, `/=`, `%=`
    pub const ASSIGNMENT: u8 = 2;

    /// Logical OR: `||`
    pub const LOGICAL_OR: u8 = 4;

    /// Logical AND: `&&`
    pub const LOGICAL_AND: u8 = 6;

    /// Bitwise OR: `|`
    pub const BITWISE_OR: u8 = 8;

    /// Bitwise XOR: `^`
    pub const BITWISE_XOR: u8 = 10;

    /// Bitwise AND: `&`
    pub const BITWISE_AND: u8 = 12;

    /// Equality: `==`, `!=`
    pub const EQUALITY: u8 = 14;

    /// Comparison: `<`, `<=`, `>`, `>=`
    pub const COMPARISON: u8 = 16;

    /// Shift: `<<`, `>>`
    pub const SHIFT: u8 = 18;

    /// Additive: `+`, `-`
    pub const ADDITIVE: u8 = 20;

    /// Multiplicative: `*`, `/`, `%`
    pub const MULTIPLICATIVE: u8 = 22;
}

/// What an infix token builds.
enum Infix {
    Binary(BinaryOp),
    /// `None` for plain `=`, the operator for compound assignment.
    Assign(Option<BinaryOp>),
}

impl<'a> Parser<'a> {
    /// Main expression entry point.
    pub(crate) fn parse_expression(&mut self) -> Option<Expr> {
        self.parse_expr_bp(bp::MIN)
    }

    /// Pratt core: parses a prefix expression, then folds infix operators
    /// whose left binding power is at least `min_bp`.
    fn parse_expr_bp(&mut self, min_bp: u8) -> Option<Expr> {
        let mut lhs = self.parse_unary()?;

        loop {
            let Some((lbp, rbp, infix)) = self.infix_binding_power() else {
                break;
            };
            if lbp < min_bp {
                break;
            }
            self.advance(); // the operator

            let rhs = self.parse_expr_bp(rbp)?;
            let span = lhs.span().merge(rhs.span());
            lhs = match infix {
                Infix::Binary(op) => Expr::Binary(BinaryExpr {
                    op,
                    left: Box::new(lhs),
                    right: Box::new(rhs),
                    ty: DeterminedType::Unresolved,
                    span,
                }),
                Infix::Assign(op) => Expr::Assign(AssignExpr {
                    target: Box::new(lhs),
                    value: Box::new(rhs),
                    op,
                    ty: DeterminedType::Unresolved,
                    span,
                }),
            };
        }

        Some(lhs)
    }

    /// Binding powers of the current token as an infix operator.
    fn infix_binding_power(&self) -> Option<(u8, u8, Infix)> {
        use TokenKind::*;

        let entry = match self.current().kind {
            Equal => (bp::ASSIGNMENT, bp::ASSIGNMENT, Infix::Assign(None)),
            PlusEqual => (
                bp::ASSIGNMENT,
                bp::ASSIGNMENT,
                Infix::Assign(Some(BinaryOp::Add)),
            ),
            MinusEqual => (
                bp::ASSIGNMENT,
                bp::ASSIGNMENT,
                Infix::Assign(Some(BinaryOp::Sub)),
            ),
            StarEqual => (
                bp::ASSIGNMENT,
                bp::ASSIGNMENT,
                Infix::Assign(Some(BinaryOp::Mul)),
            ),
            SlashEqual => (
                bp::ASSIGNMENT,
                bp::ASSIGNMENT,
                Infix::Assign(Some(BinaryOp::Div)),
            ),
            PercentEqual => (
                bp::ASSIGNMENT,
                bp::ASSIGNMENT,
                Infix::Assign(Some(BinaryOp::Mod)),
            ),
            PipePipe => (
                bp::LOGICAL_OR,
                bp::LOGICAL_OR + 1,
                Infix::Binary(BinaryOp::Or),
            ),
            AmpAmp => (
                bp::LOGICAL_AND,
                bp::LOGICAL_AND + 1,
                Infix::Binary(BinaryOp::And),
            ),
            Pipe => (
                bp::BITWISE_OR,
                bp::BITWISE_OR + 1,
                Infix::Binary(BinaryOp::BitOr),
            ),
            Caret => (
                bp::BITWISE_XOR,
                bp::BITWISE_XOR + 1,
                Infix::Binary(BinaryOp::BitXor),
            ),
            Amp => (
                bp::BITWISE_AND,
                bp::BITWISE_AND + 1,
                Infix::Binary(BinaryOp::BitAnd),
            ),
            EqualEqual => (bp::EQUALITY, bp::EQUALITY + 1, Infix::Binary(BinaryOp::Eq)),
            BangEqual => (bp::EQUALITY, bp::EQUALITY + 1, Infix::Binary(BinaryOp::Ne)),
            Less => (
                bp::COMPARISON,
                bp::COMPARISON + 1,
                Infix::Binary(BinaryOp::Lt),
            ),
            LessEqual => (
                bp::COMPARISON,
                bp::COMPARISON + 1,
                Infix::Binary(BinaryOp::Le),
            ),
            Greater => (
                bp::COMPARISON,
                bp::COMPARISON + 1,
                Infix::Binary(BinaryOp::Gt),
            ),
            GreaterEqual => (
                bp::COMPARISON,
                bp::COMPARISON + 1,
                Infix::Binary(BinaryOp::Ge),
            ),
            ShiftLeft => (bp::SHIFT, bp::SHIFT + 1, Infix::Binary(BinaryOp::Shl)),
            ShiftRight => (bp::SHIFT, bp::SHIFT + 1, Infix::Binary(BinaryOp::Shr)),
            Plus => (bp::ADDITIVE, bp::ADDITIVE + 1, Infix::Binary(BinaryOp::Add)),
            Minus => (bp::ADDITIVE, bp::ADDITIVE + 1, Infix::Binary(BinaryOp::Sub)),
            Star => (
                bp::MULTIPLICATIVE,
                bp::MULTIPLICATIVE + 1,
                Infix::Binary(BinaryOp::Mul),
            ),
            Slash => (
                bp::MULTIPLICATIVE,
                bp::MULTIPLICATIVE + 1,
                Infix::Binary(BinaryOp::Div),
            ),
            Percent => (
                bp::MULTIPLICATIVE,
                bp::MULTIPLICATIVE + 1,
                Infix::Binary(BinaryOp::Mod),
            ),
            _ => return None,
        };
        Some(entry)
    }

    /// Prefix operators, then a postfix chain.
    fn parse_unary(&mut self) -> Option<Expr> {
        let op = match self.current().kind {
            TokenKind::Minus => UnaryOp::Neg,
            TokenKind::Plus => UnaryOp::Plus,
            TokenKind::Bang => UnaryOp::Not,
            TokenKind::Tilde => UnaryOp::BitNot,
            TokenKind::PlusPlus => UnaryOp::Inc,
            TokenKind::MinusMinus => UnaryOp::Dec,
            _ => return self.parse_postfix_chain(),
        };

        let start = self.current().span;
        self.advance();
        let operand = self.parse_unary()?;
        let span = start.merge(operand.span());
        Some(Expr::Unary(UnaryExpr {
            op,
            prefix: true,
            operand: Box::new(operand),
            ty: DeterminedType::Unresolved,
            span,
        }))
    }

    /// A primary expression followed by calls, indexing, member access and
    /// postfix increment/decrement.
    fn parse_postfix_chain(&mut self) -> Option<Expr> {
        let mut expr = self.parse_primary()?;

        loop {
            match self.current().kind {
                TokenKind::LParen => {
                    expr = self.finish_call(expr)?;
                },
                TokenKind::LBracket => {
                    self.advance();
                    let index = self.parse_expression()?;
                    self.expect(&TokenKind::RBracket, "']' after the index")?;
                    let span = expr.span().merge(self.previous().span);
                    expr = Expr::Index(IndexExpr {
                        array: Box::new(expr),
                        index: Box::new(index),
                        ty: DeterminedType::Unresolved,
                        span,
                    });
                },
                TokenKind::PlusPlus | TokenKind::MinusMinus => {
                    let op = if self.current().kind == TokenKind::PlusPlus {
                        UnaryOp::Inc
                    } else {
                        UnaryOp::Dec
                    };
                    let span = expr.span().merge(self.current().span);
                    self.advance();
                    expr = Expr::Unary(UnaryExpr {
                        op,
                        prefix: false,
                        operand: Box::new(expr),
                        ty: DeterminedType::Unresolved,
                        span,
                    });
                },
                TokenKind::Dot => {
                    if !self.dot_is_member_access() {
                        break;
                    }
                    self.advance(); // '.'
                    let member = self.expect_identifier("a member name after '.'")?;
                    let span = expr.span().merge(self.previous().span);
                    expr = Expr::Member(MemberExpr {
                        object: Box::new(expr),
                        member,
                        ty: DeterminedType::Unresolved,
                        span,
                    });
                },
                _ => break,
            }
        }

        Some(expr)
    }

    /// The `.` under the cursor is member access only when it is glued to
    /// the expression before it and an identifier directly after it;
    /// any spacing makes it the statement terminator.
    fn dot_is_member_access(&mut self) -> bool {
        let glued_left = self.previous().span.end.offset == self.current().span.start.offset;
        if !glued_left {
            return false;
        }
        let dot_end = self.current().span.end.offset;
        let next = self.peek_next();
        next.kind == TokenKind::Identifier && next.span.start.offset == dot_end
    }

    /// The argument list of a call; `اسم: قيمة` marks a named argument.
    fn finish_call(&mut self, callee: Expr) -> Option<Expr> {
        self.advance(); // '('

        let mut args = Vec::new();
        if !self.check(&TokenKind::RParen) {
            loop {
                let arg_start = self.current().span;
                let name = if self.check(&TokenKind::Identifier)
                    && self.peek_next().kind == TokenKind::Colon
                {
                    let name = Symbol::intern(&self.current().lexeme);
                    self.advance(); // name
                    self.advance(); // ':'
                    Some(name)
                } else {
                    None
                };

                let value = self.parse_expression()?;
                let span = arg_start.merge(value.span());
                args.push(Arg { name, value, span });

                if !self.match_token(&TokenKind::Comma) {
                    break;
                }
            }
        }

        self.expect(&TokenKind::RParen, "')' after the arguments")?;
        let span = callee.span().merge(self.previous().span);
        Some(Expr::Call(CallExpr {
            callee: Box::new(callee),
            args,
            ty: DeterminedType::Unresolved,
            span,
        }))
    }

    /// Literals, identifiers, casts and parenthesized expressions.
    fn parse_primary(&mut self) -> Option<Expr> {
        let span = self.current().span;

        let value = match &self.current().kind {
            TokenKind::IntLit(v) => Some(LiteralValue::Int(*v)),
            TokenKind::FloatLit(v) => Some(LiteralValue::Float(*v)),
            TokenKind::BoolLit(v) => Some(LiteralValue::Bool(*v)),
            TokenKind::CharLit(v) => Some(LiteralValue::Char(*v)),
            TokenKind::StringLit(v) => Some(LiteralValue::Str(v.clone())),
            TokenKind::Null => Some(LiteralValue::Null),
            _ => None,
        };
        if let Some(value) = value {
            self.advance();
            return Some(Expr::Literal(LiteralExpr::new(value, span)));
        }

        match self.current().kind {
            TokenKind::Identifier => {
                let name = Symbol::intern(&self.current().lexeme);
                self.advance();
                Some(Expr::Ident(IdentExpr {
                    name,
                    ty: DeterminedType::Unresolved,
                    span,
                }))
            },
            TokenKind::LParen => {
                if self.peek_next().kind.is_type_keyword() {
                    self.parse_cast(span)
                } else {
                    self.advance(); // '('
                    let inner = self.parse_expression()?;
                    self.expect(&TokenKind::RParen, "')' to close the expression")?;
                    let full = span.merge(self.previous().span);
                    Some(Expr::Grouping(GroupingExpr {
                        inner: Box::new(inner),
                        ty: DeterminedType::Unresolved,
                        span: full,
                    }))
                }
            },
            _ => {
                self.error_at_current(
                    DiagnosticCode::E_EXPECTED_EXPRESSION,
                    format!("expected expression, found {}", self.current().kind.name()),
                );
                None
            },
        }
    }

    /// `(نوع) قيمة`; the determined type is known when the target is
    /// primitive.
    fn parse_cast(&mut self, start: baa_util::Span) -> Option<Expr> {
        self.advance(); // '('
        let target = self.parse_type()?;
        self.expect(&TokenKind::RParen, "')' after the cast type")?;
        let operand = self.parse_unary()?;

        let ty = match &target {
            TypeExpr::Primitive(p) => DeterminedType::Primitive(p.kind),
            TypeExpr::Array(_) => DeterminedType::Unresolved,
        };
        let span = start.merge(operand.span());
        Some(Expr::Cast(CastExpr {
            operand: Box::new(operand),
            target,
            ty,
            span,
        }))
    }
}
