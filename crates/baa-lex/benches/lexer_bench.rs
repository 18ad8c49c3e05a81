//! Lexer throughput benchmarks.

use baa_lex::{Lexer, TokenKind};
use baa_util::{FileId, Handler};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sample_program(functions: usize) -> String {
    let mut source = String::new();
    for i in 0..functions {
        source.push_str(&format!(
            "دالة مربع_{i}(س: عدد_صحيح) -> عدد_صحيح {{\n\
             \tمتغير نتيجة = س * س + ١٢٣.\n\
             \tإذا (نتيجة >= ٠) {{ إرجع نتيجة. }} وإلا {{ إرجع ٠ - نتيجة. }}\n\
             }}\n\n"
        ));
    }
    source
}

fn count_tokens(source: &str) -> usize {
    let handler = Handler::new();
    let mut lexer = Lexer::new(source, FileId::DUMMY, &handler);
    let mut count = 0;
    loop {
        let token = lexer.next_token();
        if token.kind == TokenKind::Eof {
            break;
        }
        count += 1;
    }
    count
}

fn bench_lexer(c: &mut Criterion) {
    let small = sample_program(10);
    let large = sample_program(500);

    c.bench_function("lex_small_program", |b| {
        b.iter(|| count_tokens(black_box(&small)))
    });

    c.bench_function("lex_large_program", |b| {
        b.iter(|| count_tokens(black_box(&large)))
    });

    let numbers = "١٢٣ ٣٫١٤ 0xFF 0b1010 0o777 1e10 0x1.8p1 ".repeat(200);
    c.bench_function("lex_numeric_literals", |b| {
        b.iter(|| count_tokens(black_box(&numbers)))
    });
}

criterion_group!(benches, bench_lexer);
criterion_main!(benches);
