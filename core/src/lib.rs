pub mod config;
pub mod error;
pub mod index;
pub mod query;
pub mod ranker;
pub mod server;
pub mod stop_words;
pub mod tokenizer;

pub type DocId = u32;
/// A token that survived tokenization and stop-word filtering. Case-sensitive, never empty.
pub type Term = String;

pub use config::{ExclusionPolicy, SearchConfig, MAX_RESULT_DOCUMENT_COUNT};
pub use error::{Result, SearchError};
pub use index::{IndexBuilder, InvertedIndex, Posting, PostingList};
pub use query::Query;
pub use ranker::Ranker;
pub use server::SearchServer;
pub use stop_words::StopWords;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredDocument {
    pub id: DocId,
    pub relevance: f64,
}
