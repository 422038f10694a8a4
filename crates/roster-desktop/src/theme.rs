//! Theme configuration for the desktop app

use std::str::FromStr;
use std::sync::OnceLock;

use thiserror::Error;

/// Cached system dark mode preference (detected once at startup)
static SYSTEM_DARK_MODE: OnceLock<bool> = OnceLock::new();

/// Requested theme mode, before resolving `System`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

/// Error returned when a theme mode string is unrecognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown theme mode: {0}")]
pub struct ParseThemeModeError(String);

impl FromStr for ThemeMode {
    type Err = ParseThemeModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(ParseThemeModeError(other.to_string())),
        }
    }
}

/// Resolved theme (light or dark)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

/// Color palette consumed by inline component styles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub border: &'static str,
    pub text_primary: &'static str,
    pub text_muted: &'static str,
    pub accent: &'static str,
    pub danger: &'static str,
}

const LIGHT_PALETTE: Palette = Palette {
    bg_primary: "#ffffff",
    bg_secondary: "#f5f5f4",
    border: "#d6d3d1",
    text_primary: "#1c1917",
    text_muted: "#78716c",
    accent: "#2563eb",
    danger: "#dc2626",
};

const DARK_PALETTE: Palette = Palette {
    bg_primary: "#1c1917",
    bg_secondary: "#292524",
    border: "#44403c",
    text_primary: "#fafaf9",
    text_muted: "#a8a29e",
    accent: "#60a5fa",
    danger: "#f87171",
};

impl ResolvedTheme {
    /// Get the color palette for this theme
    #[must_use]
    pub const fn palette(self) -> Palette {
        match self {
            Self::Light => LIGHT_PALETTE,
            Self::Dark => DARK_PALETTE,
        }
    }
}

/// Resolve theme mode to actual light/dark theme
#[must_use]
pub fn resolve_theme(mode: ThemeMode) -> ResolvedTheme {
    match mode {
        ThemeMode::Light => ResolvedTheme::Light,
        ThemeMode::Dark => ResolvedTheme::Dark,
        ThemeMode::System => {
            if is_system_dark_mode() {
                ResolvedTheme::Dark
            } else {
                ResolvedTheme::Light
            }
        }
    }
}

/// Detect system dark mode preference (cached after first call)
#[must_use]
pub fn is_system_dark_mode() -> bool {
    *SYSTEM_DARK_MODE.get_or_init(detect_system_dark_mode)
}

#[cfg(target_os = "windows")]
fn detect_system_dark_mode() -> bool {
    use std::process::Command;
    // AppsUseLightTheme: 0x0 means dark mode
    Command::new("reg")
        .args([
            "query",
            r"HKCU\SOFTWARE\Microsoft\Windows\CurrentVersion\Themes\Personalize",
            "/v",
            "AppsUseLightTheme",
        ])
        .output()
        .map(|output| String::from_utf8_lossy(&output.stdout).contains("0x0"))
        .unwrap_or(false)
}

#[cfg(target_os = "macos")]
fn detect_system_dark_mode() -> bool {
    use std::process::Command;
    Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .map(|output| {
            String::from_utf8_lossy(&output.stdout)
                .trim()
                .eq_ignore_ascii_case("dark")
        })
        .unwrap_or(false)
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn detect_system_dark_mode() -> bool {
    std::env::var("GTK_THEME")
        .map(|theme| theme.to_lowercase().contains("dark"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn theme_mode_parses_known_values() {
        assert_eq!("light".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert_eq!("DARK".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert_eq!(" system ".parse::<ThemeMode>().unwrap(), ThemeMode::System);
    }

    #[test]
    fn theme_mode_rejects_unknown_values() {
        assert!("solarized".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn explicit_modes_resolve_without_system_lookup() {
        assert_eq!(resolve_theme(ThemeMode::Light), ResolvedTheme::Light);
        assert_eq!(resolve_theme(ThemeMode::Dark), ResolvedTheme::Dark);
    }

    #[test]
    fn palettes_differ_between_themes() {
        assert_ne!(
            ResolvedTheme::Light.palette().bg_primary,
            ResolvedTheme::Dark.palette().bg_primary
        );
    }
}
