use crate::config::SearchConfig;
use crate::index::{IndexBuilder, InvertedIndex};
use crate::query::{parse, Query};
use crate::ranker::Ranker;
use crate::{DocId, Result, ScoredDocument};

/// A built index paired with the ranker that queries it.
///
/// Immutable once constructed, so it can be shared behind an `Arc` by any number of readers.
#[derive(Debug, Clone)]
pub struct SearchServer {
    index: InvertedIndex,
    ranker: Ranker,
}

impl SearchServer {
    pub fn new(index: InvertedIndex, config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { index, ranker: Ranker::new(config) })
    }

    /// Index `documents` with ids assigned by position, after applying `stop_words`.
    pub fn from_documents<I, S>(stop_words: &str, documents: I, config: SearchConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = IndexBuilder::new();
        builder.set_stop_words(stop_words)?;
        for (id, text) in documents.into_iter().enumerate() {
            builder.add_document(id as DocId, text.as_ref())?;
        }
        Self::new(builder.build()?, config)
    }

    pub fn parse_query(&self, raw_query: &str) -> Query { parse(raw_query, self.index.stop_words()) }

    pub fn find_top_documents(&self, raw_query: &str) -> Vec<ScoredDocument> {
        let query = self.parse_query(raw_query);
        self.ranker.rank(&query, &self.index)
    }

    pub fn document_count(&self) -> u32 { self.index.document_count() }
}
