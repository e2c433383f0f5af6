// Per-viewer session state — last visit time and digest dismissal.
//
// The source application keeps these in browser storage; the core takes
// them as explicit parameters instead, so this store is purely the CLI's
// concern. State is a JSON map keyed by viewer name, written whole on
// every update.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One viewer's session state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VisitState {
    /// Last recorded visit, milliseconds since the Unix epoch.
    /// 0 means "never visited" and bypasses the digest's recency gate.
    #[serde(default)]
    pub last_visit_ms: i64,
    /// Whether the viewer dismissed the digest this session.
    #[serde(default)]
    pub dismissed: bool,
}

/// File-backed store of per-viewer session state.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the state for one viewer. A missing file or missing viewer
    /// entry yields the defaults (never visited, not dismissed).
    pub fn load(&self, viewer: &str) -> Result<VisitState> {
        Ok(self
            .read_all()?
            .remove(viewer)
            .unwrap_or_default())
    }

    /// Record a visit for the viewer at `now_ms`.
    pub fn record_visit(&self, viewer: &str, now_ms: i64) -> Result<()> {
        self.update(viewer, |state| state.last_visit_ms = now_ms)
    }

    /// Set or clear the viewer's dismissal flag.
    pub fn set_dismissed(&self, viewer: &str, dismissed: bool) -> Result<()> {
        self.update(viewer, |state| state.dismissed = dismissed)
    }

    /// Reset the viewer to a clean session: no dismissal, never visited.
    pub fn reset(&self, viewer: &str) -> Result<()> {
        self.update(viewer, |state| *state = VisitState::default())
    }

    fn update(&self, viewer: &str, apply: impl FnOnce(&mut VisitState)) -> Result<()> {
        let mut all = self.read_all()?;
        apply(all.entry(viewer.to_string()).or_default());
        self.write_all(&all)
    }

    fn read_all(&self) -> Result<BTreeMap<String, VisitState>> {
        if !Path::new(&self.path).exists() {
            return Ok(BTreeMap::new());
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read session state at {}", self.path.display()))?;
        serde_json::from_str(&raw).with_context(|| {
            format!("Session state at {} is not valid JSON", self.path.display())
        })
    }

    fn write_all(&self, all: &BTreeMap<String, VisitState>) -> Result<()> {
        let raw = serde_json::to_string_pretty(all)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write session state at {}", self.path.display()))?;
        debug!(path = %self.path.display(), viewers = all.len(), "Session state saved");
        Ok(())
    }
}
