//! App state persistence — JSON save/load across restarts.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::app::{AppState, Overlay, Panel};

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Serialize, Deserialize)]
pub struct PersistedState {
    pub active_panel: Panel,
    pub filter_tab: usize,
    pub welcome_dismissed: bool,
    pub saved_at: DateTime<Utc>,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            active_panel: Panel::Hero,
            filter_tab: 0,
            welcome_dismissed: false,
            saved_at: Utc::now(),
        }
    }
}

/// Load persisted state from disk. Returns defaults if file is missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from AppState.
pub fn extract(app: &AppState) -> PersistedState {
    let filter_tab = match app.filter.active() {
        vitrine_core::filter::Tab::All => 0,
        vitrine_core::filter::Tab::Category(i) => i + 1,
    };
    PersistedState {
        active_panel: app.active_panel,
        filter_tab,
        welcome_dismissed: app.overlay != Overlay::Welcome,
        saved_at: Utc::now(),
    }
}

/// Apply persisted state to AppState.
pub fn apply(app: &mut AppState, state: PersistedState) {
    app.active_panel = state.active_panel;
    app.filter.select_index(0, state.filter_tab);
    if state.welcome_dismissed {
        app.overlay = Overlay::None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use vitrine_core::content::default_site;

    #[test]
    fn roundtrip() {
        let dir = std::env::temp_dir().join("vitrine_persist_test");
        let path = dir.join("state.json");

        let state = PersistedState {
            active_panel: Panel::Showcase,
            filter_tab: 2,
            welcome_dismissed: true,
            saved_at: Utc::now(),
        };

        save(&path, &state).unwrap();
        let loaded = load(&path);

        assert_eq!(loaded.active_panel, Panel::Showcase);
        assert_eq!(loaded.filter_tab, 2);
        assert!(loaded.welcome_dismissed);

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_returns_defaults() {
        let loaded = load(Path::new("/nonexistent/path/state.json"));
        assert_eq!(loaded.active_panel, Panel::Hero);
        assert!(!loaded.welcome_dismissed);
    }

    #[test]
    fn corrupt_file_returns_defaults() {
        let dir = std::env::temp_dir().join("vitrine_persist_corrupt");
        let path = dir.join("state.json");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "not json {").unwrap();

        let loaded = load(&path);
        assert_eq!(loaded.filter_tab, 0);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn apply_restores_panel_and_tab() {
        let mut app = AppState::new(
            0,
            default_site(),
            1,
            PathBuf::from("/tmp/vitrine-apply-test.json"),
        );
        let state = PersistedState {
            active_panel: Panel::Contact,
            filter_tab: 1,
            welcome_dismissed: true,
            saved_at: Utc::now(),
        };
        apply(&mut app, state);
        assert_eq!(app.active_panel, Panel::Contact);
        assert_eq!(
            app.filter.active(),
            vitrine_core::filter::Tab::Category(0)
        );
        assert_eq!(app.overlay, Overlay::None);
    }
}
