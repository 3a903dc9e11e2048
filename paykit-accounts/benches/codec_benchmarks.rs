//! Codec and fingerprint benchmarks
//!
//! Run with: `cargo bench --bench codec_benchmarks`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use paykit_accounts::age_witness::age_witness_hash;
use paykit_accounts::codec::{decode_account, decode_payload, encode_account, encode_payload, EncodeMode};
use paykit_accounts::test_utils::TestFixtures;
use paykit_accounts::AccountPayload;

fn bench_payload_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("payload_encode");
    let payloads: [(&str, AccountPayload); 3] = [
        ("zelle", TestFixtures::zelle().into()),
        ("sepa", TestFixtures::sepa().into()),
        ("national_bank_ar", TestFixtures::national_bank_ar().into()),
    ];
    for (name, payload) in &payloads {
        group.bench_with_input(BenchmarkId::from_parameter(name), payload, |b, payload| {
            b.iter(|| black_box(encode_payload(black_box(payload), EncodeMode::Wire)))
        });
    }
    group.finish();
}

fn bench_payload_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("payload_decode");
    let payloads: [(&str, AccountPayload); 3] = [
        ("zelle", TestFixtures::zelle().into()),
        ("sepa", TestFixtures::sepa().into()),
        ("national_bank_ar", TestFixtures::national_bank_ar().into()),
    ];
    for (name, payload) in &payloads {
        let bytes = encode_payload(payload, EncodeMode::Wire);
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &bytes, |b, bytes| {
            // Decoding includes full validation, IBAN checksum included for SEPA.
            b.iter(|| black_box(decode_payload(black_box(bytes))))
        });
    }
    group.finish();
}

fn bench_account_round_trip(c: &mut Criterion) {
    let accounts = TestFixtures::all_accounts();

    c.bench_function("account_round_trip_all_rails", |b| {
        b.iter(|| {
            for account in &accounts {
                let bytes = encode_account(black_box(account), EncodeMode::Wire);
                black_box(decode_account(&bytes).ok());
            }
        })
    });
}

fn bench_fingerprint(c: &mut Criterion) {
    let payloads = TestFixtures::all_payloads();

    c.bench_function("fingerprint_all_rails", |b| {
        b.iter(|| {
            for payload in &payloads {
                black_box(payload.fingerprint());
            }
        })
    });
}

fn bench_age_witness_hash(c: &mut Criterion) {
    let payload: AccountPayload = TestFixtures::sepa().into();

    c.bench_function("age_witness_hash_sha256", |b| {
        b.iter(|| black_box(age_witness_hash(black_box(&payload), &TestFixtures::PUBLIC_KEY)))
    });
}

criterion_group!(
    benches,
    bench_payload_encode,
    bench_payload_decode,
    bench_account_round_trip,
    bench_fingerprint,
    bench_age_witness_hash,
);
criterion_main!(benches);
