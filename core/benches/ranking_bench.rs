use criterion::{criterion_group, criterion_main, Criterion};
use search_core::tokenizer::tokenize;
use search_core::{SearchConfig, SearchServer};

fn bench_tokenize(c: &mut Criterion) {
    let text = include_str!("../README.md");
    c.bench_function("tokenize_readme", |b| b.iter(|| tokenize(text)));
}

fn bench_rank(c: &mut Criterion) {
    let text = include_str!("../README.md");
    let server = SearchServer::from_documents("the a of and to", text.lines(), SearchConfig::default())
        .expect("readme corpus");
    c.bench_function("rank_readme_lines", |b| b.iter(|| server.find_top_documents("index query -stop")));
}

criterion_group!(benches, bench_tokenize, bench_rank);
criterion_main!(benches);
