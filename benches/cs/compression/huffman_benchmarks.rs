use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use huffman_lab::cs::compression::huffman::{
    decode, encode, CodeTable, FrequencyTable, HuffmanTree,
};
use rand::Rng;

fn random_phrase(len: usize) -> String {
    const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz     ,.";
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman_build");
    for size in [100, 1_000, 10_000] {
        let phrase = random_phrase(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &phrase, |b, phrase| {
            b.iter(|| {
                let freq = FrequencyTable::from_text(black_box(phrase));
                let tree = HuffmanTree::build(&freq).unwrap();
                CodeTable::from_tree(&tree)
            })
        });
    }
    group.finish();
}

fn bench_encode_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman_codec");
    for size in [100, 1_000, 10_000] {
        let phrase = random_phrase(size);
        let tree = HuffmanTree::build(&FrequencyTable::from_text(&phrase)).unwrap();
        let codes = CodeTable::from_tree(&tree);
        let bits = encode(&phrase, &codes).unwrap();

        group.bench_with_input(BenchmarkId::new("encode", size), &phrase, |b, phrase| {
            b.iter(|| encode(black_box(phrase), &codes).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("decode", size), &bits, |b, bits| {
            b.iter(|| decode(black_box(bits), &tree).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_encode_decode);
criterion_main!(benches);
