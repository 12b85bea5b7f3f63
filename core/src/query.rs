use crate::stop_words::StopWords;
use crate::Term;
use std::collections::BTreeSet;

const MINUS_MARKER: char = '-';

/// A parsed query: terms that score documents and `-terms` that exclude them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub required: BTreeSet<Term>,
    pub excluded: BTreeSet<Term>,
}

impl Query {
    /// True when nothing can match: minus words alone never select a document.
    pub fn has_no_required_terms(&self) -> bool { self.required.is_empty() }
}

/// Parse a raw query. Stop words are dropped before minus words are recognised, so `-и`
/// still excludes `и`. A lone `-` is ignored, and a term that is both required and excluded
/// is only excluded.
pub fn parse(raw: &str, stop_words: &StopWords) -> Query {
    let mut query = Query::default();
    for word in stop_words.tokenize_without_stop_words(raw) {
        match word.strip_prefix(MINUS_MARKER) {
            Some("") => continue,
            Some(minus) => {
                query.excluded.insert(minus.to_string());
            }
            None => {
                query.required.insert(word);
            }
        }
    }
    query.required.retain(|t| !query.excluded.contains(t));
    query
}
