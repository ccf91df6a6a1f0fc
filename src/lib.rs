//! # repo-assistant
//!
//! A Rust web application that loads a GitHub user's public-repository
//! README files into an in-memory chunk store and answers free-text
//! questions about those projects by forwarding keyword-matched chunks
//! to an LLM (retrieval-augmented generation).
//!
//! ## Data flow
//!
//! ```text
//!   POST /load_github_projects
//!            │
//!            ▼
//!   ┌─────────────────┐   list repos    ┌──────────────┐
//!   │   RepoLoader    │ ──────────────▶ │  GitHub API  │
//!   │  (sequential,   │ ◀────────────── │              │
//!   │  500ms pacing)  │   README.md     └──────────────┘
//!   └───────┬─────────┘
//!           │ chunk_text (500 chars)
//!           ▼
//!   ┌─────────────────┐
//!   │   ChunkStore    │  (in-memory, replaced wholesale per load)
//!   └───────┬─────────┘
//!           │ keyword match (≤5 chunks, store order)
//!           ▼
//!   ┌─────────────────┐   prompt        ┌──────────────┐
//!   │ AnswerComposer  │ ──────────────▶ │   LLM API    │
//!   │  (fallback on   │ ◀────────────── │              │
//!   │  any failure)   │   answer        └──────────────┘
//!           │
//!           ▼
//!   POST /ask_assistant response
//! ```
//!
//! ## Module Overview
//!
//! - [`config`] - Environment-based configuration for server, GitHub, and LLM settings
//! - [`models`] - Shared data types: `Chunk`, `ProjectRecord`, request/response types
//! - [`error`] - `LoadError` / `AskError` taxonomies
//! - [`store`] - The in-memory chunk store, cleared and rebuilt on every load
//! - [`chunking`] - Fixed-size character chunker (deliberately boundary-insensitive)
//! - [`github`] - Forge collaborator: repo listing and base64 README retrieval
//! - [`loader`] - Sequential load orchestration with mandatory inter-request pacing
//! - [`retrieval`] - Keyword extraction and OR-semantics chunk matching
//! - [`llm`] - LLM collaborators (Gemini, Ollama, OpenAI-compatible)
//! - [`answer`] - Prompt building and fallback answer composition
//! - [`api`] - Axum HTTP handlers for loading and asking
//! - [`state`] - Shared application state

pub mod answer;
pub mod api;
pub mod chunking;
pub mod config;
pub mod error;
pub mod github;
pub mod llm;
pub mod loader;
pub mod models;
pub mod retrieval;
pub mod state;
pub mod store;
