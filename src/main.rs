use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::info;

use ember::config::Config;
use ember::digest::selector::{select_digest, DigestDecision, ScoredPost};
use ember::feed::store::load_feed;
use ember::output::terminal;
use ember::scoring::engagement::{age_hours, score_post};
use ember::session::SessionStore;
use ember::summary::template::TemplateSummarizer;
use ember::summary::traits::Summarizer;

/// Ember: catch-up digest ranking for a small social feed.
///
/// Scores posts by decayed engagement and decides whether a returning
/// viewer should see a short digest of what they missed.
#[derive(Parser)]
#[command(name = "ember", version, about)]
struct Cli {
    /// Viewer display name (overrides EMBER_VIEWER)
    #[arg(long, global = true)]
    viewer: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the catch-up digest for the viewer
    Digest {
        /// Record this run as a visit after showing the digest
        #[arg(long)]
        mark_visit: bool,

        /// Skip the summary blurb, show only the ranked candidates
        #[arg(long)]
        no_summary: bool,

        /// Evaluation clock in epoch milliseconds (defaults to now)
        #[arg(long)]
        now: Option<i64>,
    },

    /// Rank the whole feed by decayed engagement score
    Rank {
        /// Show at most this many posts
        #[arg(long, default_value = "20")]
        limit: usize,

        /// Evaluation clock in epoch milliseconds (defaults to now)
        #[arg(long)]
        now: Option<i64>,
    },

    /// Show the score breakdown for a single post
    Score {
        /// The post id to score
        post_id: String,

        /// Evaluation clock in epoch milliseconds (defaults to now)
        #[arg(long)]
        now: Option<i64>,
    },

    /// Dismiss the digest for the rest of the session
    Dismiss,

    /// Clear the viewer's session state (dismissal and last visit)
    Reset,

    /// Show session state and feed statistics
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ember=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(viewer) = cli.viewer {
        config.viewer = viewer;
    }

    match cli.command {
        Commands::Digest {
            mark_visit,
            no_summary,
            now,
        } => {
            config.require_viewer()?;
            let now_ms = now.unwrap_or_else(now_millis);
            let posts = load_feed(&config.feed_path)?;
            let sessions = SessionStore::new(&config.state_path);
            let state = sessions.load(&config.viewer)?;

            let decision = select_digest(
                &posts,
                &config.viewer,
                state.last_visit_ms,
                now_ms,
                state.dismissed,
                &config.weights,
                &config.digest,
            );

            terminal::display_digest(&decision, &config.viewer);

            if let DigestDecision::Candidates(ref candidates) = decision {
                if !no_summary {
                    let picked: Vec<_> = candidates.iter().map(|s| s.post.clone()).collect();
                    let blurb = TemplateSummarizer.summarize(&picked).await?;
                    terminal::display_summary(&blurb);
                }
            }

            if mark_visit {
                sessions.record_visit(&config.viewer, now_ms)?;
                info!(viewer = %config.viewer, "Visit recorded");
            }
        }

        Commands::Rank { limit, now } => {
            let now_ms = now.unwrap_or_else(now_millis);
            let posts = load_feed(&config.feed_path)?;

            let mut ranked: Vec<ScoredPost> = posts
                .iter()
                .map(|p| ScoredPost {
                    post: p.clone(),
                    score: score_post(p, now_ms, &config.weights),
                })
                .collect();
            ranked.sort_by(|a, b| {
                b.score
                    .partial_cmp(&a.score)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            ranked.truncate(limit);

            terminal::display_ranked(&ranked);
        }

        Commands::Score { post_id, now } => {
            let now_ms = now.unwrap_or_else(now_millis);
            let posts = load_feed(&config.feed_path)?;

            let Some(post) = posts.iter().find(|p| p.id == post_id) else {
                anyhow::bail!("No post with id {post_id:?} in {}", config.feed_path);
            };

            let score = score_post(post, now_ms, &config.weights);
            terminal::display_score_detail(post, score, age_hours(post.timestamp, now_ms));
        }

        Commands::Dismiss => {
            config.require_viewer()?;
            let sessions = SessionStore::new(&config.state_path);
            sessions.set_dismissed(&config.viewer, true)?;
            println!("Digest dismissed for {} this session.", config.viewer);
            println!("Run `ember reset` to see it again.");
        }

        Commands::Reset => {
            config.require_viewer()?;
            let sessions = SessionStore::new(&config.state_path);
            sessions.reset(&config.viewer)?;
            println!("Session state cleared for {}.", config.viewer);
        }

        Commands::Status => {
            config.require_viewer()?;
            let sessions = SessionStore::new(&config.state_path);
            let state = sessions.load(&config.viewer)?;
            match load_feed(&config.feed_path) {
                Ok(posts) => terminal::display_status(&config.viewer, &state, posts.len()),
                Err(_) => {
                    terminal::display_status(&config.viewer, &state, 0);
                    println!("(no feed snapshot found at {})", config.feed_path);
                }
            }
        }
    }

    Ok(())
}

/// Current wall-clock time in epoch milliseconds.
fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
