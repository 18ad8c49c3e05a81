//! Edge case tests for baa-par.

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::test_util::{parse_clean, parse_source};

    #[test]
    fn test_edge_full_program() {
        let source = "\
#تضمين <قياسية/طباعة>.

/// مضروب العدد
دالة مضروب(ن: عدد_صحيح) -> عدد_صحيح {
    إذا (ن <= ١) { إرجع ١. }
    إرجع ن * مضروب(ن - ١).
}

دالة رئيسية() -> عدد_صحيح {
    متغير نتيجة: عدد_صحيح = مضروب(٥).
    طالما (نتيجة > ٠) {
        نتيجة -= ١.
    }
    إرجع ٠.
}
";
        let program = parse_clean(source);
        assert_eq!(program.items.len(), 3);
        assert!(matches!(program.items[0], Stmt::Import(_)));
        assert!(matches!(program.items[1], Stmt::Decl(Decl::Function(_))));
        assert!(matches!(program.items[2], Stmt::Decl(Decl::Function(_))));
    }

    #[test]
    fn test_edge_deeply_nested_expression() {
        let mut source = String::new();
        for _ in 0..64 {
            source.push('(');
        }
        source.push('س');
        for _ in 0..64 {
            source.push(')');
        }
        source.push('.');
        let program = parse_clean(&source);
        assert_eq!(program.items.len(), 1);
    }

    #[test]
    fn test_edge_statement_without_terminator_then_recovery() {
        let (program, handler) = parse_source("متغير أ = ١\nمتغير ب = ٢.");
        assert!(handler.has_errors());
        // The parse still yields a tree.
        assert!(!program.items.is_empty() || handler.has_errors());
    }

    #[test]
    fn test_edge_error_count_proportional() {
        // Three independent broken statements: at least one diagnostic,
        // and no cascade beyond a small multiple of the error count.
        let (_, handler) = parse_source("متغير = ١.\nمتغير = ٢.\nمتغير = ٣.\n");
        let errors = handler.error_count();
        assert!(errors >= 1);
        assert!(errors <= 6, "cascading diagnostics: {}", errors);
    }

    #[test]
    fn test_edge_error_inside_block_closes_block() {
        let (program, handler) = parse_source("دالة ف() { متغير = ١. إرجع ٠. }\nمتغير س = ٢.");
        assert!(handler.has_errors());
        // Both the function and the trailing declaration appear.
        assert_eq!(program.items.len(), 2);
    }

    #[test]
    fn test_edge_unclosed_block_at_eof() {
        let (_, handler) = parse_source("دالة ف() { إرجع ٠.");
        assert!(handler.has_errors());
    }

    #[test]
    fn test_edge_garbage_only() {
        let (program, handler) = parse_source("؟ ؟ ؟");
        assert!(handler.has_errors());
        assert!(program.items.is_empty());
    }

    #[test]
    fn test_edge_switch_inside_loop() {
        let source = "\
طالما (صحيح) {
    اختر (وضع) {
        حالة ١: استمر.
        حالة ٢: توقف.
        افتراضي: إرجع.
    }
}
";
        let program = parse_clean(source);
        assert_eq!(program.items.len(), 1);
    }

    #[test]
    fn test_edge_multiline_string_statement() {
        let program = parse_clean("متغير نص_طويل = \"\"\"سطر\nسطر آخر\"\"\".");
        match &program.items[0] {
            Stmt::Decl(Decl::Var(decl)) => match &decl.init {
                Some(Expr::Literal(lit)) => {
                    assert_eq!(lit.value, LiteralValue::Str("سطر\nسطر آخر".into()));
                },
                other => panic!("expected string literal, got {other:?}"),
            },
            other => panic!("expected var, got {other:?}"),
        }
    }

    #[test]
    fn test_edge_spans_cover_statements() {
        let program = parse_clean("متغير س = ١.\nمتغير ص = ٢.");
        let first = program.items[0].span();
        let second = program.items[1].span();
        assert!(first.end.offset <= second.start.offset);
        assert_eq!(first.start.line, 1);
        assert_eq!(second.start.line, 2);
    }
}
