use criterion::{criterion_group, criterion_main, Criterion};
use qa_core::{compute_idfs, rank_files, rank_sentences, split_text, tokenize, Corpus, Query};

const WORDS: &[&str] = &[
    "neural", "network", "python", "language", "probability", "theory", "search", "index",
    "sentence", "query", "memory", "safety", "compiler", "graph", "vector", "matrix",
];

fn synthetic_text(seed: usize, sentences: usize) -> String {
    let mut out = String::new();
    for s in 0..sentences {
        for w in 0..12 {
            out.push_str(WORDS[(seed * 7 + s * 3 + w * 5) % WORDS.len()]);
            out.push(' ');
        }
        out.push_str("the end. ");
    }
    out
}

fn bench_ranking(c: &mut Criterion) {
    let texts: Vec<(String, String)> = (0..200).map(|i| (format!("{i}.txt"), synthetic_text(i, 40))).collect();
    let files: Corpus = texts.iter().map(|(name, text)| (name.as_str(), tokenize(text))).collect();
    let idfs = compute_idfs(&files).expect("non-empty corpus");
    let query: Query = tokenize("neural network memory safety").into_iter().collect();

    c.bench_function("tokenize_file", |b| b.iter(|| tokenize(&texts[0].1)));
    c.bench_function("compute_idfs_200_files", |b| b.iter(|| compute_idfs(&files)));
    c.bench_function("rank_files_200", |b| b.iter(|| rank_files(&query, &files, &idfs)));

    let sentences: Corpus = split_text(&texts[0].1).into_iter().map(|s| { let t = tokenize(&s); (s, t) }).collect();
    let sentence_idfs = compute_idfs(&sentences).expect("non-empty corpus");
    c.bench_function("rank_sentences", |b| b.iter(|| rank_sentences(&query, &sentences, &sentence_idfs)));
}

criterion_group!(benches, bench_ranking);
criterion_main!(benches);
