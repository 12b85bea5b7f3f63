use crate::DocId;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SearchError {
    #[error("stop words must be set before any document is added")]
    StopWordsAfterDocuments,

    #[error("document {0} was already added")]
    DuplicateDocument(DocId),

    #[error("declared {declared} documents but {added} were added")]
    DocumentCountMismatch { declared: u32, added: u32 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
