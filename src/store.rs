//! In-memory chunk store.
//!
//! Holds every README chunk plus per-project raw content for the most
//! recent load. Both sequences are cleared together at the start of a load
//! and never merged across loads. There is no persistence: the store lives
//! and dies with the process.

use crate::chunking::chunk_text;
use crate::models::{Chunk, ProjectRecord};

#[derive(Debug, Default)]
pub struct ChunkStore {
    chunks: Vec<Chunk>,
    projects: Vec<ProjectRecord>,
}

impl ChunkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all chunks and project records as a pair.
    pub fn clear(&mut self) {
        self.chunks.clear();
        self.projects.clear();
    }

    /// Record a project's README and append its chunks in document order.
    pub fn insert_project(&mut self, name: &str, content: String, chunk_size: usize) {
        for chunk in chunk_text(&content, chunk_size) {
            self.chunks.push(Chunk {
                content: chunk,
                project: name.to_string(),
            });
        }
        self.projects.push(ProjectRecord {
            name: name.to_string(),
            content,
        });
    }

    /// Chunks in insertion order: repo list order, then chunk position.
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}
