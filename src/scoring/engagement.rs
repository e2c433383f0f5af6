// Decayed engagement score formula.
//
// A post's score is its weighted engagement (likes + comments) divided by a
// power of its age: `engagement / (age_hours + 2)^gravity`. The +2 keeps the
// denominator base at 2 or above, so the formula is total — no divide-by-zero
// and no NaN for any valid post.

use crate::feed::models::Post;

/// Milliseconds per hour, for converting post age.
const MS_PER_HOUR: f64 = 3_600_000.0;

/// Configurable weights for the engagement decay formula.
///
/// `score = (likes * like_weight + comments * comment_weight) / (age_hours + 2)^gravity`
///
/// Comments are weighted twice as heavily as likes by default — they cost
/// the engaging user more than a tap.
#[derive(Debug, Clone)]
pub struct DecayWeights {
    /// Weight per like (default 1.0)
    pub like_weight: f64,
    /// Weight per comment (default 2.0)
    pub comment_weight: f64,
    /// Decay exponent (default 1.8). Higher values downweight older posts
    /// faster; at 1.8 a day-old post keeps roughly 1/300th of its raw score.
    pub gravity: f64,
}

impl Default for DecayWeights {
    fn default() -> Self {
        Self {
            like_weight: 1.0,
            comment_weight: 2.0,
            gravity: 1.8,
        }
    }
}

/// Age of a post in hours at evaluation time, clamped to zero.
///
/// A timestamp in the future (clock skew between writer and reader) is
/// treated as age zero, never negative.
pub fn age_hours(timestamp_ms: i64, now_ms: i64) -> f64 {
    ((now_ms - timestamp_ms) as f64 / MS_PER_HOUR).max(0.0)
}

/// Compute the decayed engagement score for a single post.
///
/// Pure and deterministic: the same post and clock always produce the same
/// score. Zero engagement scores exactly 0.0 regardless of age, and for a
/// fixed engagement the score strictly decreases as the post ages.
pub fn score_post(post: &Post, now_ms: i64, weights: &DecayWeights) -> f64 {
    let raw = post.like_count() as f64 * weights.like_weight
        + post.comment_count() as f64 * weights.comment_weight;

    raw / (age_hours(post.timestamp, now_ms) + 2.0).powf(weights.gravity)
}
