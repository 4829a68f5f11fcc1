use crate::corpus::Corpus;
use crate::error::{QaError, Result};
use crate::idf::{compute_idfs_with, IdfTable, IdfWeighting};
use crate::rank::{rank_files, rank_sentences, Query, ScoredFile, ScoredSentence};
use crate::sentences::split_text;
use crate::tokenizer::Tokenizer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerConfig {
    /// Files whose sentences are considered.
    pub file_matches: usize,
    /// Sentences returned.
    pub sentence_matches: usize,
    pub idf_weighting: IdfWeighting,
}

impl Default for AnswerConfig {
    fn default() -> Self {
        Self { file_matches: 1, sentence_matches: 1, idf_weighting: IdfWeighting::Standard }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub query: Vec<String>,
    pub files: Vec<ScoredFile>,
    pub sentences: Vec<ScoredSentence>,
}

/// Answers queries against one corpus held in memory.
///
/// File tokens and file-level idfs are computed once; each query builds a
/// sentence corpus from its best files and ranks those sentences with idfs
/// computed over that sentence corpus.
pub struct QuestionAnswerer {
    tokenizer: Tokenizer,
    texts: BTreeMap<String, String>,
    files: Corpus,
    file_idfs: IdfTable,
    config: AnswerConfig,
}

impl QuestionAnswerer {
    pub fn new(texts: BTreeMap<String, String>, tokenizer: Tokenizer, config: AnswerConfig) -> Result<Self> {
        if config.file_matches == 0 || config.sentence_matches == 0 {
            return Err(QaError::invalid_input("file and sentence match counts must be at least 1"));
        }
        let files: Corpus = texts
            .iter()
            .map(|(name, text)| (name.as_str(), tokenizer.tokenize(text)))
            .collect();
        let file_idfs = compute_idfs_with(&files, config.idf_weighting)?;
        tracing::info!(num_docs = files.len(), num_terms = file_idfs.len(), "indexed corpus");
        Ok(Self { tokenizer, texts, files, file_idfs, config })
    }

    pub fn files(&self) -> &Corpus { &self.files }

    pub fn file_idfs(&self) -> &IdfTable { &self.file_idfs }

    pub fn parse_query(&self, text: &str) -> Query {
        self.tokenizer.tokenize(text).into_iter().collect()
    }

    /// Sentences of the named files, tokenized. Sentences with no tokens left
    /// after normalization are dropped; a sentence repeated across files is
    /// kept once, at its first occurrence.
    pub fn sentence_corpus<'a, I>(&self, names: I) -> Corpus
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut sentences = Corpus::new();
        for name in names {
            let Some(text) = self.texts.get(name) else { continue };
            for sentence in split_text(text) {
                let tokens = self.tokenizer.tokenize(&sentence);
                if !tokens.is_empty() {
                    sentences.insert(sentence, tokens);
                }
            }
        }
        sentences
    }

    pub fn answer(&self, query_text: &str) -> Result<Answer> {
        let query = self.parse_query(query_text);

        let mut files = rank_files(&query, &self.files, &self.file_idfs);
        files.truncate(self.config.file_matches);

        let sentence_corpus = self.sentence_corpus(files.iter().map(|f| f.name.as_str()));
        let sentences = if sentence_corpus.is_empty() {
            tracing::warn!("top files contain no scorable sentences");
            Vec::new()
        } else {
            let idfs = compute_idfs_with(&sentence_corpus, self.config.idf_weighting)?;
            let mut ranked = rank_sentences(&query, &sentence_corpus, &idfs);
            ranked.truncate(self.config.sentence_matches);
            ranked
        };

        tracing::debug!(query_terms = query.len(), files = files.len(), sentences = sentences.len(), "answered query");
        Ok(Answer { query: query.into_iter().collect(), files, sentences })
    }
}
