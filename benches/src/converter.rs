use std::{hint::black_box, num::NonZeroU8};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use tmc51x0_core::{Converter, ConverterSettings, SharedConverter};

const CLOCKS_MHZ: &[u8] = &[8, 12, 16];

fn converter(mhz: u8) -> Converter {
    Converter::with_settings(
        ConverterSettings::new()
            .with_clock_frequency_mhz(NonZeroU8::new(mhz).unwrap())
            .with_microsteps_per_real_position_unit(51200)
            .with_seconds_per_real_velocity_unit(60),
    )
}

fn velocity(c: &mut Criterion) {
    let mut group = c.benchmark_group("tmc51x0/converter/velocity");

    CLOCKS_MHZ.iter().for_each(|&mhz| {
        group.bench_with_input(
            BenchmarkId::new("real_to_chip", mhz),
            &converter(mhz),
            |b, converter| {
                b.iter(|| (0..1000).map(|v| converter.velocity_real_to_chip(black_box(v))).sum::<i32>())
            },
        );
        group.bench_with_input(
            BenchmarkId::new("tstep_to_real", mhz),
            &converter(mhz),
            |b, converter| {
                b.iter(|| (0..1000).map(|t| converter.tstep_to_velocity_real(black_box(t))).sum::<i32>())
            },
        );
    });

    group.finish();
}

fn acceleration(c: &mut Criterion) {
    let mut group = c.benchmark_group("tmc51x0/converter/acceleration");

    CLOCKS_MHZ.iter().for_each(|&mhz| {
        group.bench_with_input(
            BenchmarkId::new("real_to_chip", mhz),
            &converter(mhz),
            |b, converter| {
                b.iter(|| {
                    (0..1000)
                        .map(|a| converter.acceleration_real_to_chip(black_box(a)))
                        .fold(0i32, i32::wrapping_add)
                })
            },
        );
    });

    group.finish();
}

fn percent(c: &mut Criterion) {
    let converter = Converter::new();
    c.bench_function("tmc51x0/converter/percent", |b| {
        b.iter(|| {
            (0..=u8::MAX)
                .map(|p| {
                    u32::from(converter.percent_to_global_current_scaler(black_box(p)))
                        + u32::from(converter.percent_to_current_setting(black_box(p)))
                        + u32::from(converter.percent_to_hold_delay_setting(black_box(p)))
                })
                .sum::<u32>()
        })
    });
}

fn shared(c: &mut Criterion) {
    let shared = SharedConverter::new(converter(16));
    c.bench_function("tmc51x0/converter/shared_snapshot", |b| {
        b.iter(|| shared.snapshot().position_real_to_chip(black_box(3)))
    });
}

criterion_group!(benches, velocity, acceleration, percent, shared);
criterion_main!(benches);
