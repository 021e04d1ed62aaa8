//! Lexer benchmarks.
//!
//! Run with: `cargo bench --package faxc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use faxc_lex::Lexer;
use faxc_util::Handler;

fn lexer_token_count(source: &str) -> usize {
    let mut handler = Handler::new();
    let lexer = Lexer::new(source, &mut handler);
    lexer.count()
}

fn bench_lexer_keywords(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "int main() { int x = 42; return x + 1; }";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_decl", |b| b.iter(|| lexer_token_count(black_box("int x = 42;"))));
    group.bench_function("function_with_body", |b| b.iter(|| lexer_token_count(black_box(source))));

    group.finish();
}

fn bench_lexer_complex(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_complex");

    let source = r#"
        struct Point {
            int x;
            int y;
        };

        int fibonacci(int n) {
            if (n <= 1) {
                return n;
            }
            return fibonacci(n - 1) + fibonacci(n - 2);
        }

        int main() {
            struct Point p;
            p.x = 1;
            p.y = 2;
            printf("%d", fibonacci(10));
            return 0;
        }
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("complex_source", |b| b.iter(|| lexer_token_count(black_box(source))));

    group.finish();
}

fn bench_lexer_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_strings");

    group.bench_function("short_string", |b| {
        b.iter(|| lexer_token_count(black_box("char *s = \"hello\";")))
    });

    group.bench_function("long_string", |b| {
        let source = "char *s = \"This is a longer string literal used for benchmarking.\";";
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_numbers");

    group.bench_function("decimal", |b| b.iter(|| lexer_token_count(black_box("int x = 123456;"))));
    group.bench_function("float", |b| b.iter(|| lexer_token_count(black_box("float x = 3.14159;"))));
    group.bench_function("hex", |b| b.iter(|| lexer_token_count(black_box("int x = 0xDEADBEEF;"))));
    group.bench_function("octal", |b| b.iter(|| lexer_token_count(black_box("int x = 0755;"))));
    group.bench_function("bad_suffix", |b| b.iter(|| lexer_token_count(black_box("int x = 123abc;"))));

    group.finish();
}

fn bench_lexer_identifiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_identifiers");

    group.bench_function("short_ident", |b| b.iter(|| lexer_token_count(black_box("int x = 42;"))));
    group.bench_function("long_ident", |b| {
        b.iter(|| lexer_token_count(black_box("int very_long_variable_name = 42;")))
    });
    group.bench_function("many_decls", |b| {
        b.iter(|| {
            lexer_token_count(black_box(
                "int a = 1; int b = 2; int c = 3; int d = 4; int e = 5;",
            ))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_keywords,
    bench_lexer_complex,
    bench_lexer_strings,
    bench_lexer_numbers,
    bench_lexer_identifiers
);
criterion_main!(benches);
