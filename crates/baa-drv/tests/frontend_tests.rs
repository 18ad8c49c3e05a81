//! Frontend pipeline integration tests.
//!
//! End-to-end scenarios run through [`Session`]: source text in, token
//! stream or tree out, with the diagnostics each scenario promises.

use baa_drv::Session;
use baa_lex::TokenKind;
use baa_par::ast::*;
use baa_util::Level;

fn tokens_of(source: &str) -> (Vec<baa_lex::Token>, Session) {
    let mut session = Session::new();
    let file = session.add_source("<test>", source);
    let tokens = session.tokenize(file);
    (tokens, session)
}

fn parse(source: &str) -> (Program, Session) {
    let mut session = Session::new();
    let file = session.add_source("<test>", source);
    let program = session.parse(file);
    (program, session)
}

#[test]
fn test_scenario_empty_program() {
    let (program, session) = parse("");
    assert!(program.items.is_empty());
    assert!(!session.handler.has_errors());

    let (tokens, _) = tokens_of("");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
}

#[test]
fn test_scenario_arabic_integer_literal() {
    let (tokens, session) = tokens_of("١٢٣.");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::IntLit(123), TokenKind::Dot, TokenKind::Eof]
    );
    assert_eq!(tokens[0].lexeme, "١٢٣");
    assert!(!session.handler.has_errors());

    let (program, _) = parse("١٢٣.");
    match &program.items[0] {
        Stmt::Expr(stmt) => match &stmt.expr {
            Expr::Literal(lit) => {
                assert_eq!(lit.value, LiteralValue::Int(123));
                assert_eq!(lit.ty, DeterminedType::Primitive(PrimitiveKind::Int));
            },
            other => panic!("expected literal, got {other:?}"),
        },
        other => panic!("expected expression statement, got {other:?}"),
    }
}

#[test]
fn test_scenario_function_definition() {
    let (program, session) = parse("دالة مربع() { إرجع ٠. }");
    assert!(!session.handler.has_errors());

    match &program.items[0] {
        Stmt::Decl(Decl::Function(decl)) => {
            assert_eq!(decl.name.as_str(), "مربع");
            assert!(decl.params.is_empty());
            match &decl.body.statements[0] {
                Stmt::Return(ret) => match &ret.value {
                    Some(Expr::Literal(lit)) => {
                        assert_eq!(lit.value, LiteralValue::Int(0));
                    },
                    other => panic!("expected literal return value, got {other:?}"),
                },
                other => panic!("expected return, got {other:?}"),
            }
        },
        other => panic!("expected function, got {other:?}"),
    }
}

#[test]
fn test_scenario_raw_string_verbatim() {
    let (tokens, session) = tokens_of("خ\"C:\\Users\\name\"");
    assert!(!session.handler.has_errors());
    match &tokens[0].kind {
        TokenKind::StringLit(value) => assert_eq!(value, "C:\\Users\\name"),
        other => panic!("expected string literal, got {other:?}"),
    }
}

#[test]
fn test_scenario_hex_float() {
    let (tokens, session) = tokens_of("0x1.8p1");
    assert!(!session.handler.has_errors());
    match tokens[0].kind {
        TokenKind::FloatLit(value) => assert!((value - 3.0).abs() < 1e-12),
        ref other => panic!("expected float literal, got {other:?}"),
    }
}

#[test]
fn test_scenario_unterminated_comment() {
    let (tokens, session) = tokens_of("/* open only");
    assert_eq!(tokens[0].kind, TokenKind::Error);
    assert!(tokens[0].lexeme.contains("unterminated"));
    assert!(session.handler.has_errors());
    assert_eq!(session.handler.len(), 1);
}

#[test]
fn test_overflow_warning_travels_through_pipeline() {
    let (program, session) = parse("متغير ضخم = 9223372036854775808.");
    assert!(!session.handler.has_errors());
    assert_eq!(session.handler.warning_count(), 1);
    let warning = &session.handler.diagnostics()[0];
    assert_eq!(warning.level, Level::Warning);

    match &program.items[0] {
        Stmt::Decl(Decl::Var(decl)) => match &decl.init {
            Some(Expr::Literal(lit)) => {
                assert!(matches!(lit.value, LiteralValue::Float(_)));
            },
            other => panic!("expected literal, got {other:?}"),
        },
        other => panic!("expected var, got {other:?}"),
    }
}

#[test]
fn test_mixed_script_program_end_to_end() {
    let source = "\
دالة قوة(أساس: عدد_صحيح, أس: عدد_صحيح) -> عدد_صحيح {
    متغير ناتج = ١.
    لكل (متغير ع = ٠. ع < أس. ع++) {
        ناتج *= أساس.
    }
    إرجع ناتج.
}
";
    let (program, session) = parse(source);
    assert!(
        !session.handler.has_errors(),
        "diagnostics: {:?}",
        session.handler.diagnostics()
    );
    match &program.items[0] {
        Stmt::Decl(Decl::Function(decl)) => {
            assert_eq!(decl.params.len(), 2);
            assert_eq!(decl.body.statements.len(), 3);
        },
        other => panic!("expected function, got {other:?}"),
    }
}

#[test]
fn test_error_resilience_bounded_diagnostics() {
    // Two broken statements around a healthy one.
    let source = "متغير = ١.\nمتغير سليم = ٢.\nإرجع +.\n";
    let (program, session) = parse(source);
    let errors = session.handler.error_count();
    assert!(errors >= 1);
    assert!(errors <= 4, "cascading diagnostics: {errors}");
    assert!(program
        .items
        .iter()
        .any(|item| matches!(item, Stmt::Decl(Decl::Var(_)))));
}
