use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use portfolio_ingest::app::services::csv_parser::{ParseOptions, parse_with_options};
use portfolio_ingest::app::services::record_mapper::map_rows_to_entries;

fn generate_csv(rows: usize) -> String {
    let mut csv = String::from("name,industry,status,url,year\n");
    for i in 0..rows {
        let status = ["Invested", "exited", "closed", ""][i % 4];
        csv.push_str(&format!(
            "\"Company {i}, Ltd\",Sector {},{status},company{i}.example,{}\n",
            i % 17,
            2000 + (i % 25)
        ));
    }
    csv
}

fn bench_tokenizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("csv_parse");

    for rows in [100, 1_000, 10_000] {
        let csv = generate_csv(rows);
        group.throughput(Throughput::Bytes(csv.len() as u64));

        group.bench_with_input(BenchmarkId::new("tokenize", rows), &csv, |b, csv| {
            b.iter(|| parse_with_options(black_box(csv), &ParseOptions::default()))
        });

        group.bench_with_input(BenchmarkId::new("tokenize_and_map", rows), &csv, |b, csv| {
            b.iter(|| map_rows_to_entries(&parse_with_options(black_box(csv), &ParseOptions::default())))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tokenizer);
criterion_main!(benches);
