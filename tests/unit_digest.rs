// Unit tests for digest selection boundaries.
//
// The in-module tests cover each gate once; these pin down the exact
// boundary semantics: strict comparisons at the revisit window, the
// last-visit timestamp, and the minimum-score threshold, plus the
// invariant that Candidates is never empty.

use ember::digest::selector::{select_digest, DigestConfig, DigestDecision, SuppressReason};
use ember::feed::models::{Comment, Post};
use ember::scoring::engagement::DecayWeights;

const HOUR_MS: i64 = 3_600_000;
const THIRTY_MINS_MS: i64 = 30 * 60 * 1000;

fn post(id: &str, author: &str, likes: usize, comments: usize, timestamp: i64) -> Post {
    Post {
        id: id.to_string(),
        author: author.to_string(),
        text: String::new(),
        timestamp,
        liked_by: (0..likes).map(|i| format!("liker{i}")).collect(),
        comments: (0..comments)
            .map(|i| Comment {
                id: format!("{id}-c{i}"),
                author_name: String::new(),
                text: String::new(),
                timestamp,
            })
            .collect(),
    }
}

fn select(posts: &[Post], last_visit: i64, now: i64) -> DigestDecision {
    select_digest(
        posts,
        "Ada",
        last_visit,
        now,
        false,
        &DecayWeights::default(),
        &DigestConfig::default(),
    )
}

fn suppressed_because(decision: &DigestDecision) -> SuppressReason {
    match decision {
        DigestDecision::Suppressed(reason) => *reason,
        DigestDecision::Candidates(posts) => panic!("expected suppression, got {} candidates", posts.len()),
    }
}

// ============================================================
// Recency gate — strict window boundary
// ============================================================

#[test]
fn visit_one_ms_inside_window_suppresses() {
    let now = 100 * HOUR_MS;
    let posts = vec![post("p1", "Ben", 20, 10, now - 1000)];
    let decision = select(&posts, now - THIRTY_MINS_MS + 1, now);
    assert_eq!(suppressed_because(&decision), SuppressReason::RecentVisit);
}

#[test]
fn visit_exactly_at_window_boundary_passes() {
    let now = 100 * HOUR_MS;
    let posts = vec![post("p1", "Ben", 20, 10, now - 1000)];
    // now - last_visit == 30 minutes exactly: not < window, gate passes
    let decision = select(&posts, now - THIRTY_MINS_MS, now);
    assert!(matches!(decision, DigestDecision::Candidates(_)));
}

// ============================================================
// Eligibility — strict timestamp comparison
// ============================================================

#[test]
fn post_at_exactly_last_visit_is_not_eligible() {
    let now = 100 * HOUR_MS;
    let last_visit = now - 2 * HOUR_MS;
    let posts = vec![post("p1", "Ben", 20, 10, last_visit)];
    let decision = select(&posts, last_visit, now);
    assert_eq!(suppressed_because(&decision), SuppressReason::NoEligiblePosts);
}

#[test]
fn post_one_ms_after_last_visit_is_eligible() {
    let now = 100 * HOUR_MS;
    let last_visit = now - 2 * HOUR_MS;
    let posts = vec![post("p1", "Ben", 20, 10, last_visit + 1)];
    let decision = select(&posts, last_visit, now);
    assert!(matches!(decision, DigestDecision::Candidates(_)));
}

// ============================================================
// Minimum-score gate — strict threshold
// ============================================================

#[test]
fn top_score_just_above_threshold_passes() {
    let now = 100 * HOUR_MS;
    // One fresh like: 1 / 2^1.8 ≈ 0.287 > 0.1
    let posts = vec![post("p1", "Ben", 1, 0, now)];
    let decision = select(&posts, 0, now);
    assert!(matches!(decision, DigestDecision::Candidates(_)));
}

#[test]
fn custom_threshold_can_raise_the_bar() {
    let now = 100 * HOUR_MS;
    let posts = vec![post("p1", "Ben", 1, 0, now)];
    let config = DigestConfig {
        min_top_score: 0.5,
        ..DigestConfig::default()
    };
    let decision = select_digest(
        &posts,
        "Ada",
        0,
        now,
        false,
        &DecayWeights::default(),
        &config,
    );
    assert_eq!(suppressed_because(&decision), SuppressReason::LowEngagement);
}

// ============================================================
// Candidates invariant and truncation
// ============================================================

#[test]
fn candidates_are_never_empty() {
    let now = 100 * HOUR_MS;
    // Sweep a few feed shapes; every Candidates outcome must be non-empty
    let feeds: Vec<Vec<Post>> = vec![
        vec![],
        vec![post("p1", "Ada", 10, 5, now - 1000)],
        vec![post("p1", "Ben", 0, 0, now - 1000)],
        vec![post("p1", "Ben", 10, 5, now - 1000)],
    ];
    for posts in &feeds {
        if let DigestDecision::Candidates(candidates) = select(posts, 0, now) {
            assert!(!candidates.is_empty());
        }
    }
}

#[test]
fn exactly_three_eligible_returns_top_two_in_order() {
    let now = 100 * HOUR_MS;
    let posts = vec![
        post("low", "Ben", 2, 1, now - 1000),
        post("top", "Carol", 30, 15, now - 1000),
        post("mid", "Dan", 10, 4, now - 1000),
    ];
    match select(&posts, 0, now) {
        DigestDecision::Candidates(candidates) => {
            assert_eq!(candidates.len(), 2);
            assert_eq!(candidates[0].post.id, "top");
            assert_eq!(candidates[1].post.id, "mid");
            assert!(candidates[0].score >= candidates[1].score);
        }
        other => panic!("expected candidates, got {other:?}"),
    }
}

#[test]
fn larger_top_k_returns_more_candidates() {
    let now = 100 * HOUR_MS;
    let posts: Vec<Post> = (0..5usize)
        .map(|i| post(&format!("p{i}"), "Ben", 10 - i, 2, now - 1000))
        .collect();
    let config = DigestConfig {
        top_k: 4,
        ..DigestConfig::default()
    };
    match select_digest(
        &posts,
        "Ada",
        0,
        now,
        false,
        &DecayWeights::default(),
        &config,
    ) {
        DigestDecision::Candidates(candidates) => assert_eq!(candidates.len(), 4),
        other => panic!("expected candidates, got {other:?}"),
    }
}
