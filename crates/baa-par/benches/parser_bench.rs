//! Parser throughput benchmarks.

use baa_lex::Lexer;
use baa_par::Parser;
use baa_util::{FileId, Handler};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sample_program(functions: usize) -> String {
    let mut source = String::new();
    source.push_str("#تضمين <قياسية/طباعة>.\n\n");
    for i in 0..functions {
        source.push_str(&format!(
            "دالة حساب_{i}(س: عدد_صحيح, ص: عدد_صحيح) -> عدد_صحيح {{\n\
             \tمتغير ناتج = س * ص + (س << ١) - ص % ٣.\n\
             \tإذا (ناتج >= ٠ && س != ص) {{ إرجع ناتج. }}\n\
             \tلكل (متغير ع = ٠. ع < ١٠. ع++) {{ ناتج += ع. }}\n\
             \tإرجع ٠ - ناتج.\n\
             }}\n\n"
        ));
    }
    source
}

fn parse(source: &str) -> usize {
    let handler = Handler::new();
    let lexer = Lexer::new(source, FileId::DUMMY, &handler);
    let mut parser = Parser::new(lexer, &handler);
    let program = parser.parse_program().expect("parse");
    assert!(!parser.had_error());
    program.items.len()
}

fn bench_parser(c: &mut Criterion) {
    let small = sample_program(10);
    let large = sample_program(300);

    c.bench_function("parse_small_program", |b| {
        b.iter(|| parse(black_box(&small)))
    });

    c.bench_function("parse_large_program", |b| {
        b.iter(|| parse(black_box(&large)))
    });
}

criterion_group!(benches, bench_parser);
criterion_main!(benches);
