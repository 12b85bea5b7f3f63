use crate::stop_words::StopWords;
use crate::{DocId, Result, SearchError, Term};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Posting {
    pub doc_id: DocId,
    /// Occurrences of the term divided by the document's token count, in (0, 1].
    pub term_frequency: f64,
}

/// Documents containing one term, ordered by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostingList {
    entries: BTreeMap<DocId, f64>,
}

impl PostingList {
    pub fn get(&self, doc_id: DocId) -> Option<f64> { self.entries.get(&doc_id).copied() }

    pub fn contains(&self, doc_id: DocId) -> bool { self.entries.contains_key(&doc_id) }

    /// Number of documents containing the term (document frequency).
    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = Posting> + '_ {
        self.entries
            .iter()
            .map(|(&doc_id, &term_frequency)| Posting { doc_id, term_frequency })
    }

    fn insert(&mut self, doc_id: DocId, term_frequency: f64) {
        self.entries.insert(doc_id, term_frequency);
    }
}

/// Read-only term index produced by [`IndexBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    postings: HashMap<Term, PostingList>,
    stop_words: StopWords,
    num_docs: u32,
}

impl InvertedIndex {
    /// Postings for `term`, or `None` if no document contains it.
    pub fn posting_list(&self, term: &str) -> Option<&PostingList> { self.postings.get(term) }

    /// Total corpus size used for IDF normalization.
    pub fn document_count(&self) -> u32 { self.num_docs }

    pub fn term_count(&self) -> usize { self.postings.len() }

    pub fn stop_words(&self) -> &StopWords { &self.stop_words }

    /// Term frequencies of every term indexed for `doc_id`.
    pub fn document_terms(&self, doc_id: DocId) -> BTreeMap<&str, f64> {
        self.postings
            .iter()
            .filter_map(|(term, list)| list.get(doc_id).map(|tf| (term.as_str(), tf)))
            .collect()
    }
}

/// Builds an [`InvertedIndex`] in phases: stop words, then the document count, then documents.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    postings: HashMap<Term, PostingList>,
    stop_words: StopWords,
    documents: BTreeSet<DocId>,
    declared_count: Option<u32>,
}

impl IndexBuilder {
    pub fn new() -> Self { Self::default() }

    pub fn set_stop_words(&mut self, text: &str) -> Result<()> {
        if !self.documents.is_empty() {
            return Err(SearchError::StopWordsAfterDocuments);
        }
        self.stop_words.extend_from_text(text);
        Ok(())
    }

    pub fn set_document_count(&mut self, n: u32) {
        self.declared_count = Some(n);
    }

    pub fn add_document(&mut self, doc_id: DocId, text: &str) -> Result<()> {
        if !self.documents.insert(doc_id) {
            return Err(SearchError::DuplicateDocument(doc_id));
        }
        let words = self.stop_words.tokenize_without_stop_words(text);
        if words.is_empty() {
            warn!(doc_id, "document has no indexable terms");
            return Ok(());
        }

        let total = words.len() as f64;
        let mut counts: HashMap<Term, u32> = HashMap::new();
        for word in words {
            *counts.entry(word).or_insert(0) += 1;
        }
        debug!(doc_id, tokens = total, distinct = counts.len(), "indexed document");
        for (term, count) in counts {
            self.postings.entry(term).or_default().insert(doc_id, count as f64 / total);
        }
        Ok(())
    }

    pub fn build(self) -> Result<InvertedIndex> {
        let added = self.documents.len() as u32;
        let num_docs = match self.declared_count {
            Some(declared) if declared != added => {
                return Err(SearchError::DocumentCountMismatch { declared, added });
            }
            Some(declared) => declared,
            None => added,
        };
        debug!(num_docs, num_terms = self.postings.len(), "index built");
        Ok(InvertedIndex { postings: self.postings, stop_words: self.stop_words, num_docs })
    }
}
