//! Runtime configuration loaded from environment variables.
//!
//! All knobs have working defaults so the app runs with no configuration
//! at all; unparseable values log a warning and fall back.

use crate::theme::ThemeMode;

/// Default trailing-edge debounce window for the autocomplete input
const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Desktop app configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Debounce delay for query application and dropdown reveal, in ms
    pub debounce_ms: u64,
    /// Requested theme mode
    pub theme: ThemeMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            theme: ThemeMode::default(),
        }
    }
}

impl AppConfig {
    /// Read configuration from `ROSTER_DEBOUNCE_MS` and `ROSTER_THEME`.
    #[must_use]
    pub fn from_env() -> Self {
        let debounce_ms = match std::env::var("ROSTER_DEBOUNCE_MS") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(
                    "Invalid ROSTER_DEBOUNCE_MS value '{}', using default {}ms",
                    raw,
                    DEFAULT_DEBOUNCE_MS
                );
                DEFAULT_DEBOUNCE_MS
            }),
            Err(_) => DEFAULT_DEBOUNCE_MS,
        };

        let theme = match std::env::var("ROSTER_THEME") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Invalid ROSTER_THEME value '{}', using system", raw);
                ThemeMode::System
            }),
            Err(_) => ThemeMode::System,
        };

        Self { debounce_ms, theme }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_uses_system_theme() {
        let config = AppConfig::default();
        assert_eq!(config.debounce_ms, 300);
        assert_eq!(config.theme, ThemeMode::System);
    }
}
