use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use wamp_wire::config::TextFrameConfig;
use wamp_wire::transport::text_frame::TextFrameAssembler;
use wamp_wire::Utf8Validator;

fn bench_utf8_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("utf8_validate");
    let ascii = "a".repeat(64 * 1024);
    let mixed = "caf\u{e9} \u{20ac} \u{1F600} ".repeat(4 * 1024);

    for (name, text) in [("ascii_64k", &ascii), ("mixed", &mixed)] {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut v = Utf8Validator::new();
                assert!(v.validate(text.as_bytes()));
            })
        });
    }

    group.bench_function("mixed_4k_fragments", |b| {
        b.iter(|| {
            let mut v = Utf8Validator::new();
            for chunk in mixed.as_bytes().chunks(4096) {
                v.validate(chunk);
            }
            assert!(v.is_valid());
        })
    });

    group.finish();
}

fn bench_text_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_frame");
    let payload = format!("[36, 1, 2, {{}}, [\"{}\"]]", "x\u{e9}".repeat(8 * 1024));

    group.bench_function("assemble_1k_fragments", |b| {
        b.iter_batched(
            || TextFrameAssembler::new(&TextFrameConfig::default()),
            |mut frames| {
                for chunk in payload.as_bytes().chunks(1024) {
                    frames.push_fragment(chunk).unwrap();
                }
                frames.finish().unwrap()
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_utf8_validate, bench_text_frame);
criterion_main!(benches);
