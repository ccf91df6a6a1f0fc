//! Keyword-based chunk retrieval.
//!
//! Retrieval is intentionally simple: no scoring, no ranking, no
//! embeddings. The store is small (one user's READMEs), so a linear scan
//! that stops at the first `limit` matches in store order is enough.

use crate::error::AskError;
use crate::models::Chunk;
use crate::store::ChunkStore;

/// Lowercase the question, split on whitespace, and keep tokens longer
/// than 2 characters. Short tokens ("a", "is", "ok") match too much to be
/// useful as substrings.
pub fn keywords(question: &str) -> Vec<String> {
    question
        .to_lowercase()
        .split_whitespace()
        .filter(|w| w.chars().count() > 2)
        .map(str::to_string)
        .collect()
}

/// Scan `chunks` in order and collect those whose lowercased content
/// contains any keyword as a substring (OR semantics). Stops as soon as
/// `limit` matches are collected; later chunks are never considered.
pub fn matching_chunks(chunks: &[Chunk], keywords: &[String], limit: usize) -> Vec<Chunk> {
    let mut matches = Vec::new();
    for chunk in chunks {
        let lower = chunk.content.to_lowercase();
        if keywords.iter().any(|kw| lower.contains(kw.as_str())) {
            matches.push(chunk.clone());
            if matches.len() >= limit {
                break;
            }
        }
    }
    matches
}

/// Retrieve up to `limit` matching chunks for `question`.
///
/// Fails with `StoreEmpty` when no load has populated the store, and with
/// `EmptyQuestion` when the trimmed question is empty. An empty result is
/// not an error: the composer turns it into the fallback answer.
pub fn retrieve(store: &ChunkStore, question: &str, limit: usize) -> Result<Vec<Chunk>, AskError> {
    if store.is_empty() {
        return Err(AskError::StoreEmpty);
    }
    let question = question.trim();
    if question.is_empty() {
        return Err(AskError::EmptyQuestion);
    }

    Ok(matching_chunks(store.chunks(), &keywords(question), limit))
}
