use crate::config::{ExclusionPolicy, SearchConfig};
use crate::index::InvertedIndex;
use crate::query::Query;
use crate::{DocId, ScoredDocument};
use std::collections::BTreeMap;
use tracing::debug;

/// `ln(n / df)`. Zero when either side is zero, so an empty corpus or unseen term adds nothing.
pub fn inverse_document_frequency(document_count: u32, document_frequency: usize) -> f64 {
    if document_count == 0 || document_frequency == 0 {
        return 0.0;
    }
    (document_count as f64 / document_frequency as f64).ln()
}

/// Sum `tf * idf` over the required terms for every document containing at least one of them.
pub fn accumulate_relevance(query: &Query, index: &InvertedIndex) -> BTreeMap<DocId, f64> {
    let mut relevance: BTreeMap<DocId, f64> = BTreeMap::new();
    if query.has_no_required_terms() {
        return relevance;
    }
    for term in &query.required {
        let Some(postings) = index.posting_list(term) else { continue };
        let idf = inverse_document_frequency(index.document_count(), postings.len());
        for p in postings.iter() {
            *relevance.entry(p.doc_id).or_insert(0.0) += p.term_frequency * idf;
        }
    }
    relevance
}

/// Remove documents that contain a minus word when the policy asks for it.
pub fn apply_exclusions(
    relevance: &mut BTreeMap<DocId, f64>,
    query: &Query,
    index: &InvertedIndex,
    policy: ExclusionPolicy,
) {
    if policy == ExclusionPolicy::Ignore {
        return;
    }
    for term in &query.excluded {
        if let Some(postings) = index.posting_list(term) {
            relevance.retain(|doc_id, _| !postings.contains(*doc_id));
        }
    }
}

/// Order by relevance descending, then id ascending, and keep the first `limit`.
pub fn top_documents(relevance: BTreeMap<DocId, f64>, limit: usize) -> Vec<ScoredDocument> {
    let mut scored: Vec<ScoredDocument> = relevance
        .into_iter()
        .map(|(id, relevance)| ScoredDocument { id, relevance })
        .collect();
    scored.sort_by(|a, b| b.relevance.total_cmp(&a.relevance).then(a.id.cmp(&b.id)));
    scored.truncate(limit);
    scored
}

#[derive(Debug, Clone, Default)]
pub struct Ranker {
    config: SearchConfig,
}

impl Ranker {
    pub fn new(config: SearchConfig) -> Self { Self { config } }

    pub fn rank(&self, query: &Query, index: &InvertedIndex) -> Vec<ScoredDocument> {
        let mut relevance = accumulate_relevance(query, index);
        let matched = relevance.len();
        apply_exclusions(&mut relevance, query, index, self.config.exclusion);
        debug!(
            required = query.required.len(),
            excluded = query.excluded.len(),
            matched,
            kept = relevance.len(),
            "ranked query"
        );
        top_documents(relevance, self.config.max_results)
    }
}
