use arff_parser::{parse_lines, preprocess::preprocess_lines};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

const BANDS: [&str; 4] = ["vhigh", "high", "med", "low"];

fn generate_dataset(rows: usize) -> Vec<String> {
    let mut lines = vec![
        "% generated benchmark data".to_string(),
        "@RELATION cars".to_string(),
        "@ATTRIBUTE\tbuying { vhigh, high, med, low }".to_string(),
        "@ATTRIBUTE price NUMERIC".to_string(),
        "@ATTRIBUTE miles numeric".to_string(),
        "@ATTRIBUTE make STRING".to_string(),
        "@ATTRIBUTE purchased DATE".to_string(),
        "@DATA".to_string(),
    ];
    for i in 0..rows {
        lines.push(format!(
            "{},{}.5,{},Make{},2020-01-{:02}",
            BANDS[i % BANDS.len()],
            1000 + i,
            i * 17,
            i % 50,
            i % 28 + 1
        ));
    }
    lines
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_lines");

    for rows in [100, 10_000] {
        let lines = generate_dataset(rows);
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &lines, |b, lines| {
            b.iter(|| parse_lines("bench.arff", black_box(lines)).unwrap())
        });
    }

    group.finish();
}

fn bench_preprocess(c: &mut Criterion) {
    let lines = generate_dataset(10_000);
    c.bench_function("preprocess_lines/10000", |b| {
        b.iter(|| preprocess_lines(black_box(&lines)))
    });
}

criterion_group!(benches, bench_parse, bench_preprocess);
criterion_main!(benches);
