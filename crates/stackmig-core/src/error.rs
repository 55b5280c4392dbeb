use thiserror::Error;

/// Problems with authored migration data, found while loading it.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DataError {
    #[error("dataset is missing the technology name")]
    MissingTechnology,
    #[error("migration entry is missing {0}")]
    MissingVersion(&'static str),
    #[error("could not decode migration {from} -> {to}: {reason}")]
    Decode { from: String, to: String, reason: String },
    #[error("duplicate id {id} in {category}")]
    DuplicateId { category: &'static str, id: String },
    #[error("duplicate migration {from} -> {to}")]
    DuplicatePair { from: String, to: String },
}
