use crate::{Result, SearchError};
use serde::{Deserialize, Serialize};

pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

/// What the ranker does with `-term` words of a query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionPolicy {
    /// Minus words are parsed but do not affect the result set.
    #[default]
    Ignore,
    /// Documents containing any minus word are dropped before sorting.
    Enforce,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub max_results: usize,
    pub exclusion: ExclusionPolicy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_results: MAX_RESULT_DOCUMENT_COUNT, exclusion: ExclusionPolicy::default() }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_results == 0 {
            return Err(SearchError::InvalidConfig("max_results must be at least 1".into()));
        }
        Ok(())
    }
}
