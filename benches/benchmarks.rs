/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

use cif_supercell::input::{parse_cif_str, ReaderConfig};
use cif_supercell::output::LammpsData;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const CIF: &str = include_str!("../tests/data/ti3c2f2.cif");

fn cif_parsing_benchmark(c: &mut Criterion) {
    let config = ReaderConfig::default();

    c.bench_function("parse_cif_str", |b| {
        b.iter(|| black_box(parse_cif_str(black_box(CIF), &config).unwrap()))
    });
}

fn supercell_benchmark(c: &mut Criterion) {
    let unit_cell = parse_cif_str(CIF, &ReaderConfig::default()).unwrap();
    let mut group = c.benchmark_group("Supercell");

    for factors in [[6, 6, 1], [20, 20, 1]] {
        let name = format!("make_supercell_{}x{}x{}", factors[0], factors[1], factors[2]);
        group.bench_function(name, |b| {
            b.iter(|| black_box(unit_cell.make_supercell(black_box(factors)).unwrap()))
        });
    }

    group.finish();
}

fn lammps_benchmark(c: &mut Criterion) {
    let unit_cell = parse_cif_str(CIF, &ReaderConfig::default()).unwrap();
    let supercell = unit_cell.make_supercell([20, 20, 1]).unwrap();
    let mut group = c.benchmark_group("LAMMPS data");

    group.bench_function("from_structure", |b| {
        b.iter(|| black_box(LammpsData::from_structure(black_box(&supercell)).unwrap()))
    });

    let data = LammpsData::from_structure(&supercell).unwrap();
    group.bench_function("to_data_string", |b| {
        b.iter(|| black_box(data.to_data_string().unwrap()))
    });

    group.finish();
}

criterion_group!(
    benches,
    cif_parsing_benchmark,
    supercell_benchmark,
    lammps_benchmark
);
criterion_main!(benches);
