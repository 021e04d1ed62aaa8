//! Parser benchmarks: full lex-then-predictive-parse pipelines over
//! representative C-subset translation units.
//!
//! Run with: `cargo bench --package faxc-par`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use faxc_grammar::build_c_subset_grammar;
use faxc_lex::Lexer;
use faxc_par::PredictiveParser;
use faxc_util::Handler;

fn lex_all(source: &str) -> Vec<(faxc_lex::Token, faxc_util::Span)> {
    let mut handler = Handler::new();
    let mut lexer = Lexer::new(source, &mut handler);
    let mut tokens = Vec::new();
    loop {
        let tok = lexer.next_token();
        let span = lexer.token_span();
        let is_eof = tok.is_eof();
        tokens.push((tok, span));
        if is_eof {
            break;
        }
    }
    tokens
}

fn parse_source(source: &str) {
    let grammar = build_c_subset_grammar();
    let tokens = lex_all(source);
    let mut handler = Handler::new();
    let mut parser = PredictiveParser::new(&grammar, tokens, &mut handler);
    let _ = parser.parse();
}

fn bench_parser_simple_decl(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_simple");

    let source = "int x = 42;";
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("global_decl", |b| b.iter(|| parse_source(black_box(source))));

    group.finish();
}

fn bench_parser_function(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_function");

    let source = r#"
        int fibonacci(int n) {
            if (n <= 1) {
                return n;
            }
            return fibonacci(n - 1) + fibonacci(n - 2);
        }
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("recursive_function", |b| b.iter(|| parse_source(black_box(source))));

    group.finish();
}

fn bench_parser_struct(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_struct");

    let source = r#"
        struct Point {
            int x;
            int y;
        };

        struct Rectangle {
            struct Point origin;
            int width;
            int height;
        };
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("struct_decls", |b| b.iter(|| parse_source(black_box(source))));

    group.finish();
}

fn bench_parser_control_flow(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_control_flow");

    let source = r#"
        int process(int n) {
            int sum;
            int i;
            if (n < 0) {
                return -1;
            } else if (n == 0) {
                return 0;
            } else {
                sum = 0;
                for (i = 0; i < n; i = i + 1) {
                    sum = sum + i;
                }
                while (sum > 1000) {
                    sum = sum - 1000;
                }
                return sum;
            }
        }
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("if_for_while", |b| b.iter(|| parse_source(black_box(source))));

    group.finish();
}

fn bench_parser_complex(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_complex");

    let source = r#"
        struct Point {
            int x;
            int y;
        };

        int distance(struct Point a, struct Point b) {
            int dx;
            int dy;
            dx = a.x - b.x;
            dy = a.y - b.y;
            return dx * dx + dy * dy;
        }

        int main() {
            struct Point p;
            struct Point q;
            int args[10];
            int i;
            p.x = 0;
            p.y = 0;
            q.x = 3;
            q.y = 4;
            for (i = 0; i < 10; i = i + 1) {
                args[i] = i * i;
            }
            printf("%d", distance(p, q));
            return 0;
        }
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("structs_and_functions", |b| {
        b.iter(|| parse_source(black_box(source)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parser_simple_decl,
    bench_parser_function,
    bench_parser_struct,
    bench_parser_control_flow,
    bench_parser_complex
);
criterion_main!(benches);
