//! # Chain Migrator Benchmarks
//!
//! | Stage | Input | Measured |
//! |-------|-------|----------|
//! | mg-01 Snapshot Reader | account set | full decode of every account record |
//! | mg-03 Module Transformers | decoded snapshot | all five module stores |
//! | Pipeline | snapshot store | store to sealed genesis block |

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mg_01_snapshot_reader::{SnapshotReader, SnapshotReaderApi};
use mg_02_validator_keys::{resolve_validator_keys, HeightWindow};
use mg_03_module_transformers::{transform_modules, TransformInput};
use mg_tests::fixtures::{FixtureShape, SnapshotFixture, SNAPSHOT_HEIGHT};
use migrator_runtime::MigrationPipeline;

const ACCOUNT_COUNTS: [usize; 3] = [1_000, 10_000, 50_000];

fn shape(stakers: usize) -> FixtureShape {
    FixtureShape {
        validators: 120,
        banned: 2,
        stakers,
        multisig: stakers / 20,
        legacy_accounts: stakers / 10,
        ..Default::default()
    }
}

// ============================================================================
// MG-01: Snapshot decoding
// ============================================================================

fn bench_read_accounts(c: &mut Criterion) {
    let mut group = c.benchmark_group("mg-01-snapshot-reader");
    group.measurement_time(Duration::from_secs(10));

    for count in ACCOUNT_COUNTS {
        let fixture = SnapshotFixture::generate(count as u64, &shape(count));
        let reader = SnapshotReader::new(fixture.store());

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("read_accounts", count), &reader, |b, reader| {
            b.iter(|| black_box(reader.read_accounts().unwrap().len()))
        });
    }
    group.finish();
}

// ============================================================================
// MG-03: Module transformers
// ============================================================================

fn bench_transform_modules(c: &mut Criterion) {
    let mut group = c.benchmark_group("mg-03-module-transformers");
    group.measurement_time(Duration::from_secs(10));

    for count in ACCOUNT_COUNTS {
        let fixture = SnapshotFixture::generate(count as u64, &shape(count));
        let config = fixture.config();
        let params = config.protocol_params().unwrap();
        let reader = SnapshotReader::new(fixture.store());

        let accounts = reader.read_accounts().unwrap();
        let legacy_accounts = reader.read_legacy_accounts().unwrap();
        let vote_weights = reader.read_vote_weights().unwrap();
        let window = HeightWindow::new(fixture.previous_height, SNAPSHOT_HEIGHT).unwrap();
        let validator_keys = resolve_validator_keys(&reader, &accounts, window).unwrap();

        let input = TransformInput {
            accounts: &accounts,
            legacy_accounts: &legacy_accounts,
            vote_weights: &vote_weights,
            validator_keys: &validator_keys,
            snapshot_height: SNAPSHOT_HEIGHT,
            params: &params,
        };

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("transform_modules", count), &input, |b, input| {
            b.iter(|| black_box(transform_modules(*input).unwrap().summary.total_supply))
        });
    }
    group.finish();
}

// ============================================================================
// Full pipeline
// ============================================================================

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(20));

    for count in ACCOUNT_COUNTS {
        let fixture = SnapshotFixture::generate(count as u64, &shape(count));
        let pipeline = MigrationPipeline::new(fixture.store(), &fixture.config()).unwrap();

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("run", count), &pipeline, |b, pipeline| {
            b.iter(|| black_box(pipeline.run().unwrap().block.id))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_read_accounts,
    bench_transform_modules,
    bench_pipeline
);
criterion_main!(benches);
