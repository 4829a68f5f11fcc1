use crate::corpus::Corpus;
use crate::error::{QaError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdfWeighting {
    /// ln(N / df)
    #[default]
    Standard,
    /// ln(1 + N / df)
    Smoothed,
}

impl IdfWeighting {
    fn weigh(self, num_docs: f64, df: u32) -> f64 {
        let ratio = num_docs / df as f64;
        match self {
            IdfWeighting::Standard => ratio.ln(),
            IdfWeighting::Smoothed => (1.0 + ratio).ln(),
        }
    }
}

/// Inverse document frequency of every word seen in a corpus.
///
/// Words that never occurred have no entry; [`IdfTable::weight`] reads them as 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdfTable {
    idfs: HashMap<String, f64>,
    num_docs: usize,
}

impl IdfTable {
    pub fn get(&self, word: &str) -> Option<f64> { self.idfs.get(word).copied() }

    pub fn weight(&self, word: &str) -> f64 { self.get(word).unwrap_or(0.0) }

    pub fn contains(&self, word: &str) -> bool { self.idfs.contains_key(word) }

    pub fn len(&self) -> usize { self.idfs.len() }

    pub fn is_empty(&self) -> bool { self.idfs.is_empty() }

    /// Number of documents the table was computed over.
    pub fn num_docs(&self) -> usize { self.num_docs }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.idfs.iter().map(|(w, idf)| (w.as_str(), *idf))
    }
}

pub fn compute_idfs(corpus: &Corpus) -> Result<IdfTable> {
    compute_idfs_with(corpus, IdfWeighting::Standard)
}

pub fn compute_idfs_with(corpus: &Corpus, weighting: IdfWeighting) -> Result<IdfTable> {
    if corpus.is_empty() {
        return Err(QaError::invalid_input("cannot compute IDF over an empty corpus"));
    }

    // document frequency: presence per document, not occurrences
    let mut df: HashMap<&str, u32> = HashMap::new();
    for doc in corpus {
        let seen: HashSet<&str> = doc.tokens.iter().map(String::as_str).collect();
        for term in seen {
            *df.entry(term).or_insert(0) += 1;
        }
    }

    let n = corpus.len() as f64;
    let idfs: HashMap<String, f64> = df
        .into_iter()
        .map(|(term, df_t)| (term.to_string(), weighting.weigh(n, df_t)))
        .collect();

    tracing::debug!(num_docs = corpus.len(), num_terms = idfs.len(), ?weighting, "computed idf table");
    Ok(IdfTable { idfs, num_docs: corpus.len() })
}
