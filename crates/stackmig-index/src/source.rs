use std::sync::Arc;

use stackmig_core::{DataError, MigrationGuide};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("stored migration {technology} {from} -> {to} is malformed: {error}")]
    Malformed {
        technology: String,
        from: String,
        to: String,
        error: DataError,
    },
}

/// Anything that can answer a guide lookup. Absence is `Ok(None)`.
pub trait GuideSource: Send + Sync {
    fn lookup(
        &self,
        technology: &str,
        from_version: &str,
        to_version: &str,
    ) -> Result<Option<Arc<MigrationGuide>>, LookupError>;
}
