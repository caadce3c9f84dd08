//! Preference Persistence
//!
//! Display preferences (theme, date range) survive reloads via
//! `localStorage`. The campaign data itself is regenerated on every mount
//! and is deliberately not persisted.

use serde::{Deserialize, Serialize};

use crate::state::global::DateRange;
use crate::state::theme::Theme;

const STORAGE_KEY: &str = "beacon_preferences";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub date_range: DateRange,
}

/// Load preferences from `localStorage`, falling back to defaults when the
/// store is unavailable or holds something unreadable.
pub fn load() -> Preferences {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());

    stored
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default()
}

/// Persist preferences. Storage failures (private browsing, quota) are
/// ignored; the session keeps its in-memory state.
pub fn save(prefs: &Preferences) {
    if let Some(storage) = web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    {
        if let Ok(json) = serde_json::to_string(prefs) {
            let _ = storage.set_item(STORAGE_KEY, &json);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferences_round_trip() {
        let prefs = Preferences {
            theme: Theme::Light,
            date_range: DateRange::Last90Days,
        };
        let json = serde_json::to_string(&prefs).unwrap();
        assert_eq!(serde_json::from_str::<Preferences>(&json).unwrap(), prefs);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let prefs: Preferences = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs, Preferences::default());
    }
}
