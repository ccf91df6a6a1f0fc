//! Sequential load orchestration.
//!
//! READMEs are fetched one at a time with a fixed pause after every fetch.
//! The pause is the rate-limit budget for the GitHub API: parallelizing or
//! batching these requests would defeat it, so the loop stays sequential.

use std::time::Duration;

use parking_lot::RwLock;

use crate::error::LoadError;
use crate::github::Forge;
use crate::store::ChunkStore;

/// Fetch `username`'s repositories and rebuild the store from their
/// READMEs. Returns the number of projects that contributed content.
///
/// The store is cleared before the first fetch, so a failed load never
/// mixes with data from a previous one. On a fatal mid-loop failure the
/// store is cleared again rather than left partially filled.
pub async fn load_projects(
    forge: &dyn Forge,
    store: &RwLock<ChunkStore>,
    username: &str,
    chunk_size: usize,
    pacing: Duration,
) -> Result<usize, LoadError> {
    store.write().clear();

    let repos = forge.list_repos(username).await?;
    if repos.is_empty() {
        return Err(LoadError::UserNotFound(username.to_string()));
    }
    tracing::info!("Loading {} repositories for {username}", repos.len());

    let mut loaded = 0usize;
    for repo in &repos {
        let fetched = forge.fetch_readme(username, &repo.name).await;
        // The pause must run on every path out of the iteration, including
        // the fatal one, so it happens before the outcome is inspected.
        tokio::time::sleep(pacing).await;

        match fetched {
            Ok(Some(content)) if !content.is_empty() => {
                store.write().insert_project(&repo.name, content, chunk_size);
                loaded += 1;
            }
            Ok(_) => {
                tracing::debug!("No readable README in {}", repo.name);
            }
            Err(LoadError::RateLimited) => {
                tracing::warn!("Rate limited while fetching {}; aborting load", repo.name);
                store.write().clear();
                return Err(LoadError::RateLimited);
            }
            Err(e) => {
                // One bad repository must not abort the load.
                tracing::warn!("Skipping {}: {e}", repo.name);
            }
        }
    }

    if store.read().is_empty() {
        return Err(LoadError::NoContent);
    }

    tracing::info!(
        "Loaded {loaded} projects ({} chunks) for {username}",
        store.read().chunk_count()
    );
    Ok(loaded)
}
