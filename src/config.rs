use std::env;

use anyhow::Result;

use crate::digest::selector::DigestConfig;
use crate::scoring::engagement::DecayWeights;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Digest
/// tunables fall back to the built-in defaults when unset.
pub struct Config {
    /// Display name of the viewer the digest is computed for.
    /// Required for any command that filters by authorship.
    pub viewer: String,
    /// Path to the feed snapshot (JSON array of posts).
    pub feed_path: String,
    /// Path to the per-viewer session state file.
    pub state_path: String,
    /// Digest gating tunables, possibly overridden from the environment.
    pub digest: DigestConfig,
    /// Scoring weights, possibly overridden from the environment.
    pub weights: DecayWeights,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Only the paths have defaults — the viewer name is required for
    /// anything beyond `rank` and `status`.
    pub fn load() -> Result<Self> {
        let mut digest = DigestConfig::default();
        if let Some(k) = parse_env::<usize>("EMBER_TOP_K")? {
            if k == 0 {
                anyhow::bail!("EMBER_TOP_K must be at least 1 — a digest always carries a post");
            }
            digest.top_k = k;
        }
        if let Some(s) = parse_env("EMBER_MIN_TOP_SCORE")? {
            digest.min_top_score = s;
        }
        if let Some(mins) = parse_env::<i64>("EMBER_REVISIT_WINDOW_MINS")? {
            digest.revisit_window_ms = mins * 60 * 1000;
        }

        let mut weights = DecayWeights::default();
        if let Some(g) = parse_env("EMBER_GRAVITY")? {
            weights.gravity = g;
        }

        Ok(Self {
            viewer: env::var("EMBER_VIEWER").unwrap_or_default(),
            feed_path: env::var("EMBER_FEED_PATH").unwrap_or_else(|_| "./feed.json".to_string()),
            state_path: env::var("EMBER_STATE_PATH")
                .unwrap_or_else(|_| "./ember-state.json".to_string()),
            digest,
            weights,
        })
    }

    /// Check that the viewer name is configured.
    /// Call this before any operation that needs to identify the viewer.
    pub fn require_viewer(&self) -> Result<()> {
        if self.viewer.is_empty() {
            anyhow::bail!(
                "EMBER_VIEWER not set. Add it to your .env file or pass --viewer.\n\
                 The digest needs to know whose feed visit it is gating."
            );
        }
        Ok(())
    }
}

/// Parse an optional environment variable, surfacing parse failures
/// instead of silently falling back to the default.
fn parse_env<T: std::str::FromStr>(key: &str) -> Result<Option<T>> {
    match env::var(key) {
        Ok(raw) => match raw.parse() {
            Ok(value) => Ok(Some(value)),
            Err(_) => anyhow::bail!("{key} is set to {raw:?}, which is not a valid value"),
        },
        Err(_) => Ok(None),
    }
}
