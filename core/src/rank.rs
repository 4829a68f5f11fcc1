//! Relevance ranking at file and sentence granularity.
//!
//! Both rankers score every document, sort once with a total order and take a
//! prefix. Sorting is stable, so documents whose keys compare equal keep their
//! corpus order and results are reproducible for identical inputs.

use crate::corpus::{Corpus, DocId};
use crate::idf::IdfTable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Normalized query words. Ordered so that score sums are computed in a fixed order.
pub type Query = BTreeSet<String>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredFile {
    pub name: DocId,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSentence {
    pub text: DocId,
    /// Summed idf of every query word occurrence in the sentence.
    pub score: f64,
    /// Fraction of the sentence's tokens that are query words.
    pub density: f64,
}

/// Scores every file by TF-IDF against `query`, best first.
///
/// tf is the raw count of a query word in the file; words missing from `idfs`
/// contribute nothing.
pub fn rank_files(query: &Query, files: &Corpus, idfs: &IdfTable) -> Vec<ScoredFile> {
    let mut scored: Vec<ScoredFile> = files
        .iter()
        .map(|doc| {
            let counts = doc.term_counts();
            let score = query
                .iter()
                .map(|term| {
                    let tf = counts.get(term.as_str()).copied().unwrap_or(0);
                    tf as f64 * idfs.weight(term)
                })
                .fold(0.0, |acc, x| acc + x);
            ScoredFile { name: doc.id.clone(), score }
        })
        .collect();
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}

/// Names of the `n` files most relevant to `query`.
pub fn top_files(query: &Query, files: &Corpus, idfs: &IdfTable, n: usize) -> Vec<DocId> {
    let ranked: Vec<DocId> = rank_files(query, files, idfs)
        .into_iter()
        .take(n)
        .map(|f| f.name)
        .collect();
    tracing::debug!(candidates = files.len(), returned = ranked.len(), "ranked files");
    ranked
}

/// Scores every sentence by summed query-word idf, best first.
///
/// Equal scores are ordered by query term density, higher first, at every
/// score level.
pub fn rank_sentences(query: &Query, sentences: &Corpus, idfs: &IdfTable) -> Vec<ScoredSentence> {
    let mut scored: Vec<ScoredSentence> = sentences
        .iter()
        .map(|doc| {
            let (score, matched) = doc
                .tokens
                .iter()
                .filter(|t| query.contains(t.as_str()))
                .fold((0.0, 0usize), |(score, matched), t| (score + idfs.weight(t), matched + 1));
            let density = if doc.is_empty() { 0.0 } else { matched as f64 / doc.len() as f64 };
            ScoredSentence { text: doc.id.clone(), score, density }
        })
        .collect();
    scored.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| b.density.total_cmp(&a.density))
    });
    scored
}

/// The `n` sentences that best answer `query`. Returns all of them when `n`
/// exceeds the sentence count.
pub fn top_sentences(query: &Query, sentences: &Corpus, idfs: &IdfTable, n: usize) -> Vec<DocId> {
    let ranked: Vec<DocId> = rank_sentences(query, sentences, idfs)
        .into_iter()
        .take(n)
        .map(|s| s.text)
        .collect();
    tracing::debug!(candidates = sentences.len(), returned = ranked.len(), "ranked sentences");
    ranked
}
