//! Encoding of the `articles.tags` column.
//!
//! Tags live in a single text column as a JSON array of strings. Decoding
//! an encoded value yields the exact same sequence.

use crate::domain::article::ArticleTags;
use crate::domain::errors::{DomainError, DomainResult};

pub fn encode(tags: &ArticleTags) -> DomainResult<String> {
    serde_json::to_string(tags.as_slice())
        .map_err(|err| DomainError::persistence(format!("failed to encode tags: {err}")))
}

pub fn decode(raw: &str) -> DomainResult<ArticleTags> {
    serde_json::from_str::<Vec<String>>(raw)
        .map(ArticleTags::new)
        .map_err(|err| DomainError::persistence(format!("malformed tags column: {err}")))
}
