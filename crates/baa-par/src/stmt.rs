//! Statement parsing - blocks, control flow, return, switch, import.

use baa_lex::TokenKind;
use baa_util::DiagnosticCode;

use crate::ast::*;
use crate::Parser;

impl<'a> Parser<'a> {
    /// Parses a single statement, dispatching on the leading token.
    pub(crate) fn parse_statement(&mut self) -> Option<Stmt> {
        match &self.current().kind {
            TokenKind::Var | TokenKind::Function => {
                return self.parse_declaration().map(Stmt::Decl);
            },
            kind if kind.is_modifier() => {
                return self.parse_declaration().map(Stmt::Decl);
            },
            _ => {},
        }

        // Anything below is not a declaration; a buffered doc comment has
        // nothing to attach to.
        self.discard_doc();

        match self.current().kind {
            TokenKind::LBrace => self.parse_block().map(Stmt::Block),
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::Do => self.parse_do_while(),
            TokenKind::For => self.parse_for(),
            TokenKind::Return => self.parse_return(),
            TokenKind::Break => {
                let span = self.current().span;
                self.advance();
                self.expect_terminator()?;
                Some(Stmt::Break(BreakStmt {
                    span: span.merge(self.previous().span),
                }))
            },
            TokenKind::Continue => {
                let span = self.current().span;
                self.advance();
                self.expect_terminator()?;
                Some(Stmt::Continue(ContinueStmt {
                    span: span.merge(self.previous().span),
                }))
            },
            TokenKind::Switch => self.parse_switch(),
            TokenKind::HashInclude => self.parse_import(),
            _ => self.parse_expr_statement(),
        }
    }

    /// `{ جملة* }` - an empty block is legal.
    pub(crate) fn parse_block(&mut self) -> Option<Block> {
        let start = self.current().span;
        self.expect(&TokenKind::LBrace, "'{'")?;

        let mut statements = Vec::new();
        while !self.check(&TokenKind::RBrace) && !self.at_eof() {
            match self.parse_statement() {
                Some(stmt) => statements.push(stmt),
                None => self.synchronize(),
            }
        }

        self.expect(&TokenKind::RBrace, "'}' to close the block")?;
        Some(Block {
            statements,
            span: start.merge(self.previous().span),
        })
    }

    /// `إذا (شرط) جملة [وإلا جملة]` - else binds to the nearest if.
    fn parse_if(&mut self) -> Option<Stmt> {
        let start = self.current().span;
        self.advance(); // إذا

        self.expect(&TokenKind::LParen, "'(' after 'إذا'")?;
        let condition = self.parse_expression()?;
        self.expect(&TokenKind::RParen, "')' after the condition")?;

        let then_branch = Box::new(self.parse_statement()?);
        let else_branch = if self.match_token(&TokenKind::Else) {
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };

        let end = else_branch
            .as_deref()
            .map(Stmt::span)
            .unwrap_or_else(|| then_branch.span());
        Some(Stmt::If(IfStmt {
            condition,
            then_branch,
            else_branch,
            span: start.merge(end),
        }))
    }

    /// `طالما (شرط) جملة`
    fn parse_while(&mut self) -> Option<Stmt> {
        let start = self.current().span;
        self.advance(); // طالما

        self.expect(&TokenKind::LParen, "'(' after 'طالما'")?;
        let condition = self.parse_expression()?;
        self.expect(&TokenKind::RParen, "')' after the condition")?;

        let body = Box::new(self.parse_statement()?);
        let span = start.merge(body.span());
        Some(Stmt::While(WhileStmt {
            condition,
            body,
            span,
        }))
    }

    /// `افعل جملة طالما (شرط).`
    fn parse_do_while(&mut self) -> Option<Stmt> {
        let start = self.current().span;
        self.advance(); // افعل

        let body = Box::new(self.parse_statement()?);

        self.expect(&TokenKind::While, "'طالما' after the loop body")?;
        self.expect(&TokenKind::LParen, "'(' after 'طالما'")?;
        let condition = self.parse_expression()?;
        self.expect(&TokenKind::RParen, "')' after the condition")?;
        self.expect_terminator()?;

        Some(Stmt::DoWhile(DoWhileStmt {
            body,
            condition,
            span: start.merge(self.previous().span),
        }))
    }

    /// `لكل (تهيئة. شرط. خطوة) جملة` - each header part may be empty.
    fn parse_for(&mut self) -> Option<Stmt> {
        let start = self.current().span;
        self.advance(); // لكل

        self.expect(&TokenKind::LParen, "'(' after 'لكل'")?;

        // Initializer: a declaration or expression statement consumes its
        // own terminating '.'.
        let init = if self.match_token(&TokenKind::Dot) {
            None
        } else if self.current().kind == TokenKind::Var || self.current().kind.is_modifier() {
            Some(Box::new(Stmt::Decl(self.parse_declaration()?)))
        } else {
            let stmt = self.parse_expr_statement()?;
            Some(Box::new(stmt))
        };

        let condition = if self.check(&TokenKind::Dot) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(&TokenKind::Dot, "'.' after the loop condition")?;

        let step = if self.check(&TokenKind::RParen) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(&TokenKind::RParen, "')' after the loop header")?;

        let body = Box::new(self.parse_statement()?);
        let span = start.merge(body.span());
        Some(Stmt::For(ForStmt {
            init,
            condition,
            step,
            body,
            span,
        }))
    }

    /// `إرجع [قيمة].`
    fn parse_return(&mut self) -> Option<Stmt> {
        let start = self.current().span;
        self.advance(); // إرجع

        let value = if self.check(&TokenKind::Dot) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect_terminator()?;

        Some(Stmt::Return(ReturnStmt {
            value,
            span: start.merge(self.previous().span),
        }))
    }

    /// `اختر (قيمة) { حالة ثابت : جملة* ... افتراضي : جملة* }`
    fn parse_switch(&mut self) -> Option<Stmt> {
        let start = self.current().span;
        self.advance(); // اختر

        self.expect(&TokenKind::LParen, "'(' after 'اختر'")?;
        let subject = self.parse_expression()?;
        self.expect(&TokenKind::RParen, "')' after the switch subject")?;
        self.expect(&TokenKind::LBrace, "'{' to open the switch body")?;

        let mut cases = Vec::new();
        let mut default: Option<DefaultCase> = None;

        while !self.check(&TokenKind::RBrace) && !self.at_eof() {
            match self.current().kind {
                TokenKind::Case => {
                    let case_start = self.current().span;
                    self.advance();
                    let value = self.parse_expression()?;
                    self.expect(&TokenKind::Colon, "':' after the case value")?;
                    let body = self.parse_case_body();
                    let span = body
                        .last()
                        .map(|s| case_start.merge(s.span()))
                        .unwrap_or(case_start);
                    cases.push(SwitchCase { value, body, span });
                },
                TokenKind::Default => {
                    let default_start = self.current().span;
                    self.advance();
                    self.expect(&TokenKind::Colon, "':' after 'افتراضي'")?;
                    let body = self.parse_case_body();
                    if default.is_some() {
                        // The second default is parsed and dropped.
                        self.warn_at(
                            DiagnosticCode::W_DUPLICATE_DEFAULT,
                            default_start,
                            "duplicate default case ignored",
                        );
                    } else {
                        let span = body
                            .last()
                            .map(|s| default_start.merge(s.span()))
                            .unwrap_or(default_start);
                        default = Some(DefaultCase { body, span });
                    }
                },
                _ => {
                    self.error_at_current(
                        DiagnosticCode::E_UNEXPECTED_TOKEN,
                        "expected 'حالة' or 'افتراضي' in switch body",
                    );
                    self.synchronize();
                },
            }
        }

        self.expect(&TokenKind::RBrace, "'}' to close the switch")?;
        Some(Stmt::Switch(SwitchStmt {
            subject,
            cases,
            default,
            span: start.merge(self.previous().span),
        }))
    }

    /// Statements of a case arm, up to the next arm or the closing brace.
    fn parse_case_body(&mut self) -> Vec<Stmt> {
        let mut body = Vec::new();
        while !matches!(
            self.current().kind,
            TokenKind::Case | TokenKind::Default | TokenKind::RBrace | TokenKind::Eof
        ) {
            match self.parse_statement() {
                Some(stmt) => body.push(stmt),
                None => self.synchronize(),
            }
        }
        body
    }

    /// `#تضمين <مسار>.` or `#تضمين "مسار".`, with an optional
    /// `as اسم` alias; the path is recorded, not resolved.
    fn parse_import(&mut self) -> Option<Stmt> {
        let start = self.current().span;
        self.advance(); // #تضمين

        let (path, bracketed) = if self.match_token(&TokenKind::Less) {
            // Everything up to '>' is path text, concatenated as written.
            let mut path = String::new();
            while !self.check(&TokenKind::Greater) {
                if self.at_eof() || self.check(&TokenKind::Dot) {
                    self.error_at_current(
                        DiagnosticCode::E_EXPECTED_TOKEN,
                        "unterminated include path, expected '>'",
                    );
                    return None;
                }
                path.push_str(&self.current().lexeme);
                self.advance();
            }
            self.advance(); // '>'
            (path, true)
        } else if let TokenKind::StringLit(path) = &self.current().kind {
            let path = path.clone();
            self.advance();
            (path, false)
        } else {
            self.error_at_current(
                DiagnosticCode::E_EXPECTED_TOKEN,
                "expected '<' or a string after '#تضمين'",
            );
            return None;
        };

        // `as` is contextual, not reserved.
        let alias = if self.check(&TokenKind::Identifier) && self.current().lexeme == "as" {
            self.advance();
            Some(self.expect_identifier("an alias name after 'as'")?)
        } else {
            None
        };

        self.expect_terminator()?;
        Some(Stmt::Import(ImportStmt {
            path,
            bracketed,
            alias,
            span: start.merge(self.previous().span),
        }))
    }

    /// Expression followed by the `.` terminator.
    pub(crate) fn parse_expr_statement(&mut self) -> Option<Stmt> {
        let expr = self.parse_expression()?;
        self.expect_terminator()?;
        let span = expr.span().merge(self.previous().span);
        Some(Stmt::Expr(ExprStmt { expr, span }))
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::test_util::{parse_clean, parse_source};

    fn single(program: &Program) -> &Stmt {
        assert_eq!(program.items.len(), 1, "expected one item");
        &program.items[0]
    }

    #[test]
    fn test_block_statement() {
        let program = parse_clean("{ ١. ٢. }");
        match single(&program) {
            Stmt::Block(block) => assert_eq!(block.statements.len(), 2),
            other => panic!("expected block, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_block() {
        let program = parse_clean("{}");
        match single(&program) {
            Stmt::Block(block) => assert!(block.statements.is_empty()),
            other => panic!("expected block, got {other:?}"),
        }
    }

    #[test]
    fn test_if_statement() {
        let program = parse_clean("إذا (س > ٠) { إرجع س. }");
        match single(&program) {
            Stmt::If(stmt) => {
                assert!(stmt.else_branch.is_none());
                assert!(matches!(stmt.condition, Expr::Binary(_)));
            },
            other => panic!("expected if, got {other:?}"),
        }
    }

    #[test]
    fn test_if_else() {
        let program = parse_clean("إذا (شرط) { ١. } وإلا { ٢. }");
        match single(&program) {
            Stmt::If(stmt) => assert!(stmt.else_branch.is_some()),
            other => panic!("expected if, got {other:?}"),
        }
    }

    #[test]
    fn test_dangling_else_binds_nearest() {
        let program = parse_clean("إذا (أ) إذا (ب) ١. وإلا ٢.");
        match single(&program) {
            Stmt::If(outer) => {
                assert!(outer.else_branch.is_none());
                match outer.then_branch.as_ref() {
                    Stmt::If(inner) => assert!(inner.else_branch.is_some()),
                    other => panic!("expected nested if, got {other:?}"),
                }
            },
            other => panic!("expected if, got {other:?}"),
        }
    }

    #[test]
    fn test_while_statement() {
        let program = parse_clean("طالما (س < ١٠) { س += ١. }");
        assert!(matches!(single(&program), Stmt::While(_)));
    }

    #[test]
    fn test_do_while_statement() {
        let program = parse_clean("افعل { س += ١. } طالما (س < ١٠).");
        match single(&program) {
            Stmt::DoWhile(stmt) => assert!(matches!(stmt.condition, Expr::Binary(_))),
            other => panic!("expected do-while, got {other:?}"),
        }
    }

    #[test]
    fn test_for_full_header() {
        let program = parse_clean("لكل (متغير س = ٠. س < ١٠. س++) { ١. }");
        match single(&program) {
            Stmt::For(stmt) => {
                assert!(stmt.init.is_some());
                assert!(stmt.condition.is_some());
                assert!(stmt.step.is_some());
            },
            other => panic!("expected for, got {other:?}"),
        }
    }

    #[test]
    fn test_for_empty_header() {
        let program = parse_clean("لكل (. . ) { توقف. }");
        match single(&program) {
            Stmt::For(stmt) => {
                assert!(stmt.init.is_none());
                assert!(stmt.condition.is_none());
                assert!(stmt.step.is_none());
            },
            other => panic!("expected for, got {other:?}"),
        }
    }

    #[test]
    fn test_for_expression_init() {
        let program = parse_clean("لكل (س = ٠. س < ٣. س++) ١.");
        match single(&program) {
            Stmt::For(stmt) => assert!(matches!(
                stmt.init.as_deref(),
                Some(Stmt::Expr(_))
            )),
            other => panic!("expected for, got {other:?}"),
        }
    }

    #[test]
    fn test_return_with_value() {
        let program = parse_clean("إرجع س + ١.");
        match single(&program) {
            Stmt::Return(stmt) => assert!(stmt.value.is_some()),
            other => panic!("expected return, got {other:?}"),
        }
    }

    #[test]
    fn test_return_void() {
        let program = parse_clean("إرجع.");
        match single(&program) {
            Stmt::Return(stmt) => assert!(stmt.value.is_none()),
            other => panic!("expected return, got {other:?}"),
        }
    }

    #[test]
    fn test_break_continue() {
        let program = parse_clean("طالما (صحيح) { توقف. استمر. }");
        match single(&program) {
            Stmt::While(stmt) => match stmt.body.as_ref() {
                Stmt::Block(block) => {
                    assert!(matches!(block.statements[0], Stmt::Break(_)));
                    assert!(matches!(block.statements[1], Stmt::Continue(_)));
                },
                other => panic!("expected block, got {other:?}"),
            },
            other => panic!("expected while, got {other:?}"),
        }
    }

    #[test]
    fn test_switch_statement() {
        let program = parse_clean(
            "اختر (س) { حالة ١: إرجع ١. حالة ٢: إرجع ٢. افتراضي: إرجع ٠. }",
        );
        match single(&program) {
            Stmt::Switch(stmt) => {
                assert_eq!(stmt.cases.len(), 2);
                assert!(stmt.default.is_some());
            },
            other => panic!("expected switch, got {other:?}"),
        }
    }

    #[test]
    fn test_switch_duplicate_default_ignored() {
        let (program, handler) = parse_source(
            "اختر (س) { افتراضي: ١. افتراضي: ٢. }",
        );
        assert!(!handler.has_errors());
        assert_eq!(handler.warning_count(), 1);
        match &program.items[0] {
            Stmt::Switch(stmt) => {
                let default = stmt.default.as_ref().expect("first default kept");
                assert_eq!(default.body.len(), 1);
            },
            other => panic!("expected switch, got {other:?}"),
        }
    }

    #[test]
    fn test_import_bracketed() {
        let program = parse_clean("#تضمين <مكتبة/رياضيات>.");
        match single(&program) {
            Stmt::Import(stmt) => {
                assert_eq!(stmt.path, "مكتبة/رياضيات");
                assert!(stmt.bracketed);
                assert!(stmt.alias.is_none());
            },
            other => panic!("expected import, got {other:?}"),
        }
    }

    #[test]
    fn test_import_quoted_with_alias() {
        let program = parse_clean("#تضمين \"أدوات.بع\" as أدوات.");
        match single(&program) {
            Stmt::Import(stmt) => {
                assert_eq!(stmt.path, "أدوات.بع");
                assert!(!stmt.bracketed);
                assert_eq!(stmt.alias.map(|s| s.as_str()), Some("أدوات"));
            },
            other => panic!("expected import, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_terminator_reported() {
        let (_, handler) = parse_source("إرجع س");
        assert!(handler.has_errors());
    }
}
