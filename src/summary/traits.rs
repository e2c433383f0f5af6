// Summarizer trait — the seam to the text-summarization collaborator.
//
// The digest core hands its candidates to an external service that writes
// the "here's what you missed" blurb. Implementations must be async because
// hosted providers require HTTP calls; the built-in TemplateSummarizer is
// local and deterministic.

use anyhow::Result;
use async_trait::async_trait;

use crate::feed::models::Post;

/// Trait for summarizing a set of digest candidates into one short blurb.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Produce a one-paragraph summary of the given posts.
    /// Callers must pass at least one post.
    async fn summarize(&self, posts: &[Post]) -> Result<String>;
}

/// No-op summarizer used when summarization is disabled (--no-summary).
/// Bails if actually called — ensures we don't silently fabricate a blurb.
pub struct NoopSummarizer;

#[async_trait]
impl Summarizer for NoopSummarizer {
    async fn summarize(&self, _posts: &[Post]) -> Result<String> {
        anyhow::bail!("NoopSummarizer should never be called — summarization is disabled")
    }
}
