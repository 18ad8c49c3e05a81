//! Declaration parsing - variables and function definitions.

use baa_lex::TokenKind;
use baa_util::DiagnosticCode;

use crate::ast::*;
use crate::Parser;

impl<'a> Parser<'a> {
    /// Parses a declaration: an optional modifier sequence followed by a
    /// variable or function.
    pub(crate) fn parse_declaration(&mut self) -> Option<Decl> {
        let start = self.current().span;
        let doc = self.take_doc();
        let modifiers = self.parse_modifiers();

        match self.current().kind {
            TokenKind::Var => self.parse_var_decl(start, modifiers, doc),
            TokenKind::Function => self.parse_function_decl(start, modifiers, doc),
            _ => {
                self.error_at_current(
                    DiagnosticCode::E_EXPECTED_DECLARATION,
                    "expected 'متغير' or 'دالة' after the modifiers",
                );
                None
            },
        }
    }

    /// Consumes a run of modifier keywords into a bit-set. A repeated
    /// modifier is reported once and otherwise ignored.
    fn parse_modifiers(&mut self) -> Modifiers {
        let mut modifiers = Modifiers::empty();
        loop {
            let modifier = match self.current().kind {
                TokenKind::Const => Modifiers::CONST,
                TokenKind::Static => Modifiers::STATIC,
                TokenKind::Extern => Modifiers::EXTERN,
                TokenKind::Inline => Modifiers::INLINE,
                TokenKind::Restrict => Modifiers::RESTRICT,
                TokenKind::Auto => Modifiers::AUTO,
                TokenKind::Register => Modifiers::REGISTER,
                _ => return modifiers,
            };
            if modifiers.contains(modifier) {
                let span = self.current().span;
                let lexeme = self.current().lexeme.clone();
                self.warn_at(
                    DiagnosticCode::W_DUPLICATE_MODIFIER,
                    span,
                    format!("duplicate modifier '{}'", lexeme),
                );
            }
            modifiers.insert(modifier);
            self.advance();
        }
    }

    /// `متغير اسم [: نوع] [= قيمة].`
    fn parse_var_decl(
        &mut self,
        start: baa_util::Span,
        modifiers: Modifiers,
        doc: Option<String>,
    ) -> Option<Decl> {
        self.advance(); // متغير

        let name = self.expect_identifier("a variable name after 'متغير'")?;

        let ty = if self.match_token(&TokenKind::Colon) {
            Some(self.parse_type()?)
        } else {
            None
        };

        let init = if self.match_token(&TokenKind::Equal) {
            Some(self.parse_expression()?)
        } else {
            None
        };

        self.expect_terminator()?;
        Some(Decl::Var(VarDecl {
            name,
            modifiers,
            ty,
            init,
            doc,
            span: start.merge(self.previous().span),
        }))
    }

    /// `دالة اسم(معامل: نوع, …) [-> نوع] { … }`
    fn parse_function_decl(
        &mut self,
        start: baa_util::Span,
        modifiers: Modifiers,
        doc: Option<String>,
    ) -> Option<Decl> {
        self.advance(); // دالة

        let name = self.expect_identifier("a function name after 'دالة'")?;
        let params = self.parse_params()?;

        let ret = if self.match_token(&TokenKind::Arrow) {
            Some(self.parse_type()?)
        } else {
            None
        };

        let body = self.parse_block()?;
        let span = start.merge(body.span);
        Some(Decl::Function(FunctionDecl {
            name,
            modifiers,
            params,
            ret,
            body,
            doc,
            span,
        }))
    }

    /// Parenthesized, comma-separated `اسم: نوع` parameters.
    fn parse_params(&mut self) -> Option<Vec<Param>> {
        self.expect(&TokenKind::LParen, "'(' after the function name")?;

        let mut params = Vec::new();
        if !self.check(&TokenKind::RParen) {
            loop {
                let param_start = self.current().span;
                let name = self.expect_identifier("a parameter name")?;
                self.expect(&TokenKind::Colon, "':' after the parameter name")?;
                let ty = self.parse_type()?;
                let span = param_start.merge(ty.span());
                params.push(Param { name, ty, span });

                if !self.match_token(&TokenKind::Comma) {
                    break;
                }
            }
        }

        self.expect(&TokenKind::RParen, "')' after the parameters")?;
        Some(params)
    }
}
