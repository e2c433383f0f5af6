// Colored terminal output for digests and feed rankings.
//
// All terminal-specific formatting lives here; main.rs delegates display
// so the library stays printable-free apart from this module.

use chrono::{Local, TimeZone};
use colored::Colorize;

use super::truncate_chars;
use crate::digest::selector::{DigestDecision, ScoredPost};
use crate::feed::models::Post;
use crate::session::VisitState;

/// Longest post text preview shown in tables.
const PREVIEW_CHARS: usize = 60;

/// Display the outcome of a digest selection pass.
pub fn display_digest(decision: &DigestDecision, viewer: &str) {
    match decision {
        DigestDecision::Suppressed(reason) => {
            println!(
                "No digest for {} ({}).",
                viewer.bold(),
                reason.as_str().dimmed()
            );
        }
        DigestDecision::Candidates(posts) => {
            println!(
                "\n{}",
                format!("=== Catch-up digest for {viewer} ===").bold()
            );
            println!();
            for (i, scored) in posts.iter().enumerate() {
                println!(
                    "  {}. {} {}",
                    i + 1,
                    scored.post.author.bold(),
                    format!("[score {:.2}]", scored.score).dimmed(),
                );
                if !scored.post.text.is_empty() {
                    println!("     \"{}\"", truncate_chars(&scored.post.text, PREVIEW_CHARS));
                }
                println!(
                    "     {}",
                    format!(
                        "{} likes, {} comments — {}",
                        scored.post.like_count(),
                        scored.post.comment_count(),
                        format_timestamp(scored.post.timestamp),
                    )
                    .dimmed()
                );
            }
            println!();
        }
    }
}

/// Display the summarizer's blurb under the digest.
pub fn display_summary(blurb: &str) {
    println!("{}", blurb.italic());
    println!();
}

/// Display the whole feed ranked by decayed engagement score.
pub fn display_ranked(ranked: &[ScoredPost]) {
    if ranked.is_empty() {
        println!("The feed snapshot is empty.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Feed ranking ({} posts) ===", ranked.len()).bold()
    );
    println!();
    println!(
        "  {:>4}  {:<20} {:>7} {:>6} {:>9}  {}",
        "Rank".dimmed(),
        "Author".dimmed(),
        "Score".dimmed(),
        "Likes".dimmed(),
        "Comments".dimmed(),
        "Text".dimmed(),
    );
    println!("  {}", "-".repeat(78).dimmed());

    for (i, scored) in ranked.iter().enumerate() {
        println!(
            "  {:>4}. {:<20} {:>7.3} {:>6} {:>9}  {}",
            i + 1,
            truncate_chars(&scored.post.author, 20),
            scored.score,
            scored.post.like_count(),
            scored.post.comment_count(),
            truncate_chars(&scored.post.text, 40).dimmed(),
        );
    }
    println!();
}

/// Display a single post's score breakdown.
pub fn display_score_detail(post: &Post, score: f64, age_hours: f64) {
    println!("\n{}", format!("=== Post {} ===", post.id).bold());
    println!("  Author:   {}", post.author);
    if !post.text.is_empty() {
        println!("  Text:     \"{}\"", truncate_chars(&post.text, PREVIEW_CHARS));
    }
    println!("  Posted:   {} ({age_hours:.1}h ago)", format_timestamp(post.timestamp));
    println!(
        "  Engagement: {} likes, {} comments",
        post.like_count(),
        post.comment_count()
    );
    println!("  {}", format!("Score: {score:.4}").bold());
    println!();
}

/// Display session and feed statistics.
pub fn display_status(viewer: &str, state: &VisitState, post_count: usize) {
    println!("Viewer: {}", viewer.bold());
    if state.last_visit_ms == 0 {
        println!("Last visit: never recorded");
    } else {
        println!("Last visit: {}", format_timestamp(state.last_visit_ms));
    }
    println!(
        "Digest dismissed this session: {}",
        if state.dismissed { "yes" } else { "no" }
    );
    println!("Feed snapshot: {post_count} posts");
}

/// Render an epoch-milliseconds timestamp in local time.
fn format_timestamp(ms: i64) -> String {
    match Local.timestamp_millis_opt(ms) {
        chrono::LocalResult::Single(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        _ => format!("{ms} ms"),
    }
}
