use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lumbung::{
    executor::{scan::Scanner, table_scan::TableScanner},
    storage::table::Table,
    types::TABLE_MAX_ROWS,
    utils::mock::{filled_table, sample_row},
};
use std::{hint::black_box, time::Instant};

const ROW_COUNTS: &[usize] = &[100, 700, TABLE_MAX_ROWS];

fn benchmark_append_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("append_throughput");
    for &row_count in ROW_COUNTS {
        group.throughput(Throughput::Elements(row_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(row_count),
            &row_count,
            |b, &size| {
                b.iter_custom(|iters| {
                    let mut total_duration = std::time::Duration::new(0, 0);
                    for _ in 0..iters {
                        let rows: Vec<_> = (0..size).map(|i| sample_row(i as u32)).collect();
                        let mut table = Table::new();
                        let start = Instant::now();
                        for row in &rows {
                            black_box(table.append(row).unwrap());
                        }
                        total_duration += start.elapsed();
                        assert_eq!(table.num_rows(), size);
                    }
                    total_duration
                });
            },
        );
    }
    group.finish();
}

fn benchmark_full_scan_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_scan_throughput");
    for &row_count in ROW_COUNTS {
        group.throughput(Throughput::Elements(row_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(row_count),
            &row_count,
            |b, &size| {
                let table = filled_table(size);
                b.iter(|| {
                    let mut scanner = TableScanner::new(&table);
                    let mut count = 0;
                    while let Some(row) = scanner.scan().unwrap() {
                        black_box(row);
                        count += 1;
                    }
                    assert_eq!(count, size);
                });
            },
        );
    }
    group.finish();
}

fn benchmark_rescan_after_reset(c: &mut Criterion) {
    let mut group = c.benchmark_group("rescan_after_reset");
    let table = filled_table(TABLE_MAX_ROWS);
    group.throughput(Throughput::Elements(TABLE_MAX_ROWS as u64 * 2));
    group.bench_function("scan_reset_scan", |b| {
        b.iter(|| {
            let mut scanner = TableScanner::new(&table);
            let mut count = 0;
            while let Some(row) = scanner.scan().unwrap() {
                black_box(row);
                count += 1;
            }
            scanner.reset();
            while let Some(row) = scanner.scan().unwrap() {
                black_box(row);
                count += 1;
            }
            assert_eq!(count, TABLE_MAX_ROWS * 2);
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_append_throughput,
    benchmark_full_scan_throughput,
    benchmark_rescan_after_reset
);
criterion_main!(benches);
