use ascon320::aead::{AeadInPlace, KeyInit};
use ascon320::{xof, Ascon80pqSiv};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const CASES: &[usize] = &[0, 32, 64, 256, 1024, 16 * 1024];

fn bench_xof(c: &mut Criterion) {
    let mut group = c.benchmark_group("ascon320/xof");
    for &size in CASES {
        let msg = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| black_box(xof(&msg)));
        });
    }
    group.finish();
}

fn bench_siv_encrypt(c: &mut Criterion) {
    let cipher = Ascon80pqSiv::new_from_slice(&[0x42; 20]).expect("key length");
    let nonce = [0x24u8; 16].into();

    let mut group = c.benchmark_group("ascon320/siv_encrypt");
    for &size in CASES {
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            let mut buffer = vec![0u8; size];
            b.iter(|| {
                let tag = cipher
                    .encrypt_in_place_detached(&nonce, b"", &mut buffer)
                    .expect("encrypt");
                black_box(tag);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_xof, bench_siv_encrypt);
criterion_main!(benches);
