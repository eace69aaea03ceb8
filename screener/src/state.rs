//! Persisted run state for slot deduplication.
//!
//! The only fact persisted across runs is the last executed slot id, so a
//! timer that fires several times inside one trading slot runs the screen
//! once. Detector output is never persisted: SETUP/WAIT classifications
//! stay provisional and re-evaluate from scratch every run.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// On-disk run state.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct RunState {
    /// Slot id of the last completed run.
    pub last_slot: Option<String>,
}

impl RunState {
    /// Loads state from `path`; a missing file is fresh state.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read run state {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parse run state {}", path.display()))
    }

    /// Writes state to `path`, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create state dir {}", parent.display()))?;
        }
        let text = serde_json::to_string_pretty(self).context("serialize run state")?;
        std::fs::write(path, text).with_context(|| format!("write run state {}", path.display()))
    }

    /// Whether a run for `slot_id` already happened.
    pub fn already_ran(&self, slot_id: &str) -> bool {
        self.last_slot.as_deref() == Some(slot_id)
    }

    /// Records `slot_id` as the last completed run.
    pub fn mark_ran(&mut self, slot_id: impl Into<String>) {
        self.last_slot = Some(slot_id.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_fresh_state() {
        let state = RunState::load("/nonexistent/state.json").unwrap();
        assert!(!state.already_ran("2025-08-29_slot_0"));
    }

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");

        let mut state = RunState::default();
        state.mark_ran("2025-08-29_slot_0");
        state.save(&path).unwrap();

        let loaded = RunState::load(&path).unwrap();
        assert!(loaded.already_ran("2025-08-29_slot_0"));
        assert!(!loaded.already_ran("2025-08-30_slot_0"));
    }
}
