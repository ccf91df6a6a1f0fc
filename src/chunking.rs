//! Fixed-size character chunker.
//!
//! Splits on raw character counts with no word-boundary awareness: splits
//! may fall mid-word. Downstream keyword matching is substring-based, so
//! boundary placement does not affect retrieval.

/// Split `text` into contiguous slices of exactly `size` characters,
/// except the final slice which holds the remainder. Empty input yields
/// an empty vec. Counts Unicode scalar values, not bytes.
pub fn chunk_text(text: &str, size: usize) -> Vec<String> {
    debug_assert!(size > 0, "chunk size must be positive");
    if size == 0 {
        return Vec::new();
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut count = 0usize;

    for ch in text.chars() {
        current.push(ch);
        count += 1;
        if count == size {
            chunks.push(std::mem::take(&mut current));
            count = 0;
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}
