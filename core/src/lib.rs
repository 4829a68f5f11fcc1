//! Two-stage question answering over a directory of text files.
//!
//! Files are ranked against a query by TF-IDF; the sentences of the best
//! files are then ranked by the summed idf of the query words they contain,
//! ties going to sentences with a higher query term density.

pub mod corpus;
pub mod error;
pub mod idf;
pub mod loader;
pub mod pipeline;
pub mod rank;
pub mod sentences;
pub mod tokenizer;

pub use corpus::{Corpus, DocId, Document};
pub use error::{QaError, Result};
pub use idf::{compute_idfs, compute_idfs_with, IdfTable, IdfWeighting};
pub use loader::{load_files, LoaderConfig};
pub use pipeline::{Answer, AnswerConfig, QuestionAnswerer};
pub use rank::{rank_files, rank_sentences, top_files, top_sentences, Query, ScoredFile, ScoredSentence};
pub use sentences::{split_sentences, split_text};
pub use tokenizer::{tokenize, Tokenizer, TokenizerConfig};
