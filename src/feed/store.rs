// Feed snapshot loading.
//
// The feed is a JSON array of posts, as exported by the application's post
// store. One load is one consistent snapshot: the selector only ever sees
// the collection as it was at load time, never a half-updated view.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use super::models::Post;

/// Load a feed snapshot from a JSON file.
///
/// Returns the posts in file order. The digest selector relies on that
/// order for stable tie-breaking, so no sorting happens here.
pub fn load_feed(path: impl AsRef<Path>) -> Result<Vec<Post>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read feed snapshot at {}", path.display()))?;

    let posts: Vec<Post> = serde_json::from_str(&raw)
        .with_context(|| format!("Feed snapshot at {} is not a JSON post array", path.display()))?;

    debug!(count = posts.len(), path = %path.display(), "Loaded feed snapshot");
    Ok(posts)
}
