//! Benchmarks for the Fialka signal path.
//!
//! Measures single-symbol routing for both NumLock settings and message
//! throughput across rotor series.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fialka::{Fialka, MachineModel, NumLockType, RotorSeries, RotorType};

/// Message used consistently across throughput benchmarks.
const BENCH_MESSAGE: &str = "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG ";

/// An M-125-3 with PROTON II cores, flipped on every other position.
fn m125_3(series: RotorSeries, numlock: NumLockType) -> Fialka {
    let mut machine = Fialka::new();
    let config = machine.configuration_mut();
    config.set_machine_model(MachineModel::M125_3);
    config.set_rotor_series(series);
    config.set_rotor_type(RotorType::ProtonII);
    config.set_numlock_type(numlock).unwrap();
    let punch_card: Vec<u8> = (0..30).rev().collect();
    config
        .set_daily_key_proton_ii(
            &[4, 5, 3, 6, 2, 7, 1, 8, 0, 9],
            &[3, 1, 4, 1, 5, 9, 2, 6, 5, 3],
            &[0; 10],
            &punch_card,
            &[9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
            &[1, -1, 1, -1, 1, -1, 1, -1, 1, -1],
            &[2, 7, 1, 8, 2, 8, 1, 8, 2, 8],
        )
        .unwrap();
    machine
}

/// Benchmarks one NumLock30 symbol, stepping included.
///
/// The machine is built once; rotor positions advance naturally between
/// iterations.
fn bench_symbol_numlock30(c: &mut Criterion) {
    let mut machine = Fialka::new();
    c.bench_function("symbol_numlock30", |b| {
        b.iter(|| machine.encrypt_symbol(black_box(7)).unwrap());
    });
}

/// Benchmarks one NumLock10 symbol, feedback loops included.
fn bench_symbol_numlock10(c: &mut Criterion) {
    let mut machine = m125_3(RotorSeries::K6, NumLockType::NumLock10);
    // Contact of the "5" key.
    let z = fialka::codec::char_to_z30(machine.configuration(), '5').unwrap();
    c.bench_function("symbol_numlock10", |b| {
        b.iter(|| machine.encrypt_symbol(black_box(z)).unwrap());
    });
}

/// Benchmarks `process()` throughput per rotor series.
fn bench_message_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("message_throughput");
    group.throughput(Throughput::Elements(BENCH_MESSAGE.len() as u64));

    for series in RotorSeries::ALL {
        let mut machine = m125_3(series, NumLockType::NumLock30);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{series:?}")),
            &series,
            |b, _| {
                b.iter(|| machine.process(black_box(BENCH_MESSAGE)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_symbol_numlock30,
    bench_symbol_numlock10,
    bench_message_throughput,
);
criterion_main!(benches);
