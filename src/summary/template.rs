// Local template summarizer.
//
// Produces the same kind of blurb the hosted model is prompted for —
// author names, a short excerpt, engagement counts — but deterministically
// and offline. Also the fallback when no hosted provider is configured.

use anyhow::Result;
use async_trait::async_trait;

use super::traits::Summarizer;
use crate::feed::models::Post;
use crate::output::truncate_chars;

/// Longest post excerpt to quote in the blurb, in characters.
const EXCERPT_CHARS: usize = 80;

pub struct TemplateSummarizer;

#[async_trait]
impl Summarizer for TemplateSummarizer {
    async fn summarize(&self, posts: &[Post]) -> Result<String> {
        if posts.is_empty() {
            anyhow::bail!("Nothing to summarize — the digest selector never emits empty candidate lists");
        }

        let mut lines = Vec::with_capacity(posts.len() + 1);
        lines.push("While you were away:".to_string());
        for post in posts {
            let engagement = match (post.like_count(), post.comment_count()) {
                (0, 0) => String::new(),
                (likes, 0) => format!(" ({})", count(likes, "like")),
                (0, comments) => format!(" ({})", count(comments, "comment")),
                (likes, comments) => {
                    format!(" ({}, {})", count(likes, "like"), count(comments, "comment"))
                }
            };
            if post.text.is_empty() {
                lines.push(format!("  {} shared an update{engagement}.", post.author));
            } else {
                lines.push(format!(
                    "  {} posted \"{}\"{engagement}.",
                    post.author,
                    truncate_chars(&post.text, EXCERPT_CHARS)
                ));
            }
        }
        Ok(lines.join("\n"))
    }
}

fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {noun}")
    } else {
        format!("{n} {noun}s")
    }
}
