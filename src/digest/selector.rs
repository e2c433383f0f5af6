// Catch-up digest selector.
//
// Decides whether a returning viewer should see a digest at all, and if so
// which posts it contains. Each gate is a hard pass/fail: failing any one
// short-circuits to Suppressed with the reason attached. The function is
// pure — dismissal and last-visit state are passed in explicitly and the
// caller owns updating them.

use std::cmp::Ordering;

use tracing::debug;

use crate::feed::models::Post;
use crate::scoring::engagement::{score_post, DecayWeights};

/// Tunables for digest gating.
pub struct DigestConfig {
    /// How many top posts a digest contains (default 2).
    pub top_k: usize,
    /// The best eligible post must score above this for a digest to show
    /// at all (default 0.1). Filters out digests of barely-engaged posts.
    pub min_top_score: f64,
    /// Minimum absence before a digest is considered (default 30 minutes).
    pub revisit_window_ms: i64,
    /// When true, individual candidates at or below `min_top_score` are
    /// dropped as well, instead of the threshold gating only the
    /// all-or-nothing decision on the top score (default false — the
    /// observed behavior of the source application).
    pub per_post_minimum: bool,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            top_k: 2,
            min_top_score: 0.1,
            revisit_window_ms: 30 * 60 * 1000,
            per_post_minimum: false,
        }
    }
}

/// Why a digest was not produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuppressReason {
    /// The viewer already dismissed the digest this session.
    Dismissed,
    /// The viewer was here less than the revisit window ago.
    RecentVisit,
    /// Nothing new since the last visit that isn't the viewer's own.
    NoEligiblePosts,
    /// Even the best eligible post is barely engaged.
    LowEngagement,
}

impl SuppressReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuppressReason::Dismissed => "dismissed this session",
            SuppressReason::RecentVisit => "visited recently",
            SuppressReason::NoEligiblePosts => "no eligible posts",
            SuppressReason::LowEngagement => "low engagement",
        }
    }
}

/// The outcome of one digest selection pass.
///
/// Invariant: `Candidates` never holds an empty list — zero eligible posts
/// always come back as `Suppressed(NoEligiblePosts)`.
#[derive(Debug, Clone)]
pub enum DigestDecision {
    Suppressed(SuppressReason),
    Candidates(Vec<ScoredPost>),
}

/// A post paired with its decayed engagement score. Ephemeral — it exists
/// only in the output of one selection pass.
#[derive(Debug, Clone)]
pub struct ScoredPost {
    pub post: Post,
    pub score: f64,
}

/// Select the catch-up digest for a returning viewer.
///
/// Gates, in order: session dismissal, recency of the last visit (a
/// `last_visit_ms` of 0 means "never visited" and bypasses this gate),
/// eligibility (newer than the last visit, not authored by the viewer —
/// case-sensitive name match), and a minimum score for the best candidate.
/// Survivors are ranked by descending score, ties keeping feed order, and
/// truncated to `config.top_k`.
pub fn select_digest(
    posts: &[Post],
    viewer_name: &str,
    last_visit_ms: i64,
    now_ms: i64,
    dismissed: bool,
    weights: &DecayWeights,
    config: &DigestConfig,
) -> DigestDecision {
    if dismissed {
        return DigestDecision::Suppressed(SuppressReason::Dismissed);
    }

    if last_visit_ms != 0 && now_ms - last_visit_ms < config.revisit_window_ms {
        return DigestDecision::Suppressed(SuppressReason::RecentVisit);
    }

    let mut scored: Vec<ScoredPost> = posts
        .iter()
        .filter(|p| p.timestamp > last_visit_ms && p.author != viewer_name)
        .map(|p| ScoredPost {
            post: p.clone(),
            score: score_post(p, now_ms, weights),
        })
        .collect();

    if scored.is_empty() {
        return DigestDecision::Suppressed(SuppressReason::NoEligiblePosts);
    }

    // Stable sort: equal scores keep their feed order.
    // Scores are total for valid posts, so the comparator never sees NaN.
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    if scored[0].score <= config.min_top_score {
        return DigestDecision::Suppressed(SuppressReason::LowEngagement);
    }

    if config.per_post_minimum {
        scored.retain(|s| s.score > config.min_top_score);
    }

    debug!(
        eligible = scored.len(),
        top_score = scored[0].score,
        "Digest selected"
    );

    scored.truncate(config.top_k);
    DigestDecision::Candidates(scored)
}
