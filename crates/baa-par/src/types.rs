//! Type expression parsing.

use baa_lex::TokenKind;
use baa_util::DiagnosticCode;

use crate::ast::*;
use crate::Parser;

impl<'a> Parser<'a> {
    /// Parses a type: a primitive name with any number of array suffixes.
    ///
    /// `عدد_صحيح[١٠][]` is an array of ten unsized integer arrays read
    /// left to right.
    pub(crate) fn parse_type(&mut self) -> Option<TypeExpr> {
        let kind = match self.current().kind {
            TokenKind::TypeInt => PrimitiveKind::Int,
            TokenKind::TypeFloat => PrimitiveKind::Float,
            TokenKind::TypeChar => PrimitiveKind::Char,
            TokenKind::TypeVoid => PrimitiveKind::Void,
            TokenKind::TypeBool => PrimitiveKind::Bool,
            TokenKind::TypeString => PrimitiveKind::Text,
            _ => {
                self.error_at_current(DiagnosticCode::E_EXPECTED_TYPE, "expected a type name");
                return None;
            },
        };
        let start = self.current().span;
        self.advance();

        let mut ty = TypeExpr::Primitive(PrimitiveType { kind, span: start });

        while self.match_token(&TokenKind::LBracket) {
            let size = if self.check(&TokenKind::RBracket) {
                None
            } else {
                Some(Box::new(self.parse_expression()?))
            };
            self.expect(&TokenKind::RBracket, "']' to close the array type")?;
            let span = start.merge(self.previous().span);
            ty = TypeExpr::Array(ArrayType {
                elem: Box::new(ty),
                size,
                span,
            });
        }

        Some(ty)
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::test_util::parse_clean;

    fn var_type(source: &str) -> TypeExpr {
        let program = parse_clean(source);
        match &program.items[0] {
            Stmt::Decl(Decl::Var(decl)) => decl.ty.clone().expect("type annotation"),
            other => panic!("expected var declaration, got {other:?}"),
        }
    }

    #[test]
    fn test_primitive_types() {
        for (source, kind) in [
            ("متغير س: عدد_صحيح.", PrimitiveKind::Int),
            ("متغير س: عدد_حقيقي.", PrimitiveKind::Float),
            ("متغير س: حرف.", PrimitiveKind::Char),
            ("متغير س: منطقي.", PrimitiveKind::Bool),
            ("متغير س: نص.", PrimitiveKind::Text),
        ] {
            match var_type(source) {
                TypeExpr::Primitive(t) => assert_eq!(t.kind, kind),
                other => panic!("expected primitive, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_unsized_array() {
        match var_type("متغير مصفوفة: عدد_صحيح[].") {
            TypeExpr::Array(array) => {
                assert!(array.size.is_none());
                assert!(matches!(*array.elem, TypeExpr::Primitive(_)));
            },
            other => panic!("expected array, got {other:?}"),
        }
    }

    #[test]
    fn test_sized_array() {
        match var_type("متغير مصفوفة: عدد_صحيح[١٠].") {
            TypeExpr::Array(array) => match array.size.as_deref() {
                Some(Expr::Literal(lit)) => {
                    assert_eq!(lit.value, LiteralValue::Int(10));
                },
                other => panic!("expected literal size, got {other:?}"),
            },
            other => panic!("expected array, got {other:?}"),
        }
    }

    #[test]
    fn test_nested_array() {
        match var_type("متغير شبكة: عدد_حقيقي[٣][].") {
            TypeExpr::Array(outer) => {
                assert!(outer.size.is_none());
                match *outer.elem {
                    TypeExpr::Array(ref inner) => assert!(inner.size.is_some()),
                    ref other => panic!("expected inner array, got {other:?}"),
                }
            },
            other => panic!("expected array, got {other:?}"),
        }
    }
}
