use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use packed_bitarray::BitArray;
use rand::{SeedableRng, rngs::StdRng};
use std::hint::black_box;

fn filled(bits: usize) -> BitArray {
    let mut array = BitArray::new(bits);
    array.random_fill(&mut StdRng::seed_from_u64(0x5eed));
    array
}

fn bench_bit_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("bit_access");
    let mut array = filled(4096);

    group.bench_function("get", |b| {
        let mut i = 0;
        b.iter(|| {
            black_box(array.get(i % 4096));
            i += 7;
        });
    });

    group.bench_function("set", |b| {
        let mut i = 0;
        b.iter(|| {
            array.set(i % 4096, black_box(i & 1 == 0));
            i += 7;
        });
    });

    group.finish();
}

fn bench_rotate(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotate");

    for bits in [64, 1 << 10, 1 << 16, 1 << 20] {
        group.throughput(Throughput::Bytes((bits / 8) as u64));

        // Edges share an alignment: interior is a plain byte swap.
        group.bench_with_input(BenchmarkId::new("aligned", bits), &bits, |b, &bits| {
            let mut array = filled(bits);
            b.iter(|| array.rotate(0, bits, black_box(8)));
        });

        // Mirrored bytes straddle two storage bytes.
        group.bench_with_input(BenchmarkId::new("unaligned", bits), &bits, |b, &bits| {
            let mut array = filled(bits);
            b.iter(|| array.rotate(3, bits - 5, black_box(-13)));
        });
    }

    group.finish();
}

fn bench_reverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("reverse");

    for bits in [1 << 10, 1 << 16] {
        group.throughput(Throughput::Bytes((bits / 8) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(bits), &bits, |b, &bits| {
            let mut array = filled(bits);
            b.iter(|| array.reverse(black_box(1), bits - 2));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_bit_access, bench_rotate, bench_reverse);
criterion_main!(benches);
