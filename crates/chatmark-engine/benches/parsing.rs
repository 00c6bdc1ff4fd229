use chatmark_engine::parse_message;
use criterion::{Criterion, criterion_group, criterion_main};
mod common;

fn bench_full_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = common::generate_chat_message(100);
    group.bench_function("full_message", |b| {
        b.iter(|| {
            let nodes = parse_message(std::hint::black_box(&content));
            std::hint::black_box(nodes);
        });
    });

    group.finish();
}

// The chat UI re-parses the whole accumulated text after every streamed
// chunk, so cost grows with stream length; this tracks that pattern.
fn bench_streamed_reparse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = common::generate_chat_message(10);
    let chunks = common::stream_chunks(&content);
    group.bench_function("streamed_reparse", |b| {
        b.iter(|| {
            let mut accumulated = String::new();
            for chunk in &chunks {
                accumulated.push_str(chunk);
                accumulated.push('\n');
                let nodes = parse_message(std::hint::black_box(&accumulated));
                std::hint::black_box(nodes);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_full_parse, bench_streamed_reparse);
criterion_main!(benches);
