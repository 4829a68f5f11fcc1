use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A file name or, at sentence granularity, the sentence text itself.
pub type DocId = String;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    pub tokens: Vec<String>, // normalized, in reading order
}

impl Document {
    pub fn new(id: impl Into<DocId>, tokens: Vec<String>) -> Self {
        Self { id: id.into(), tokens }
    }

    pub fn len(&self) -> usize { self.tokens.len() }

    pub fn is_empty(&self) -> bool { self.tokens.is_empty() }

    /// Occurrence count of every distinct token in the document.
    pub fn term_counts(&self) -> HashMap<&str, u32> {
        let mut counts: HashMap<&str, u32> = HashMap::new();
        for token in &self.tokens {
            *counts.entry(token.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

/// Documents keyed by id, iterated in insertion order.
///
/// Ids are unique: inserting an id that is already present leaves the first
/// document in place. Sentence corpora rely on this to collapse repeated
/// sentences onto their first occurrence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    docs: Vec<Document>,
    positions: HashMap<DocId, usize>,
}

impl Corpus {
    pub fn new() -> Self { Self::default() }

    /// Returns `false` when a document with the same id was already present.
    pub fn insert(&mut self, id: impl Into<DocId>, tokens: Vec<String>) -> bool {
        let id = id.into();
        if self.positions.contains_key(&id) {
            return false;
        }
        self.positions.insert(id.clone(), self.docs.len());
        self.docs.push(Document::new(id, tokens));
        true
    }

    pub fn get(&self, id: &str) -> Option<&Document> {
        self.positions.get(id).map(|&pos| &self.docs[pos])
    }

    pub fn contains(&self, id: &str) -> bool { self.positions.contains_key(id) }

    pub fn len(&self) -> usize { self.docs.len() }

    pub fn is_empty(&self) -> bool { self.docs.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> { self.docs.iter() }

    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.docs.iter().map(|d| d.id.as_str())
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter { self.docs.iter() }
}

impl<I: Into<DocId>> FromIterator<(I, Vec<String>)> for Corpus {
    fn from_iter<T: IntoIterator<Item = (I, Vec<String>)>>(iter: T) -> Self {
        let mut corpus = Corpus::new();
        for (id, tokens) in iter {
            corpus.insert(id, tokens);
        }
        corpus
    }
}
