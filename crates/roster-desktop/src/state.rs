//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use dioxus::prelude::*;

use roster_core::Person;

use crate::config::AppConfig;
use crate::theme::ResolvedTheme;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// The loaded people dataset, read-only after startup
    pub people: Signal<Vec<Person>>,
    /// Person picked in the autocomplete, if any
    pub selected_person: Signal<Option<Person>>,
    /// Resolved theme (light/dark based on config and system preference)
    pub theme: Signal<ResolvedTheme>,
    /// Runtime configuration
    pub config: Signal<AppConfig>,
}

impl AppState {
    /// Heading text for the current selection
    #[must_use]
    pub fn selection_title(&self) -> String {
        selection_title((self.selected_person)().as_ref())
    }
}

/// Heading text for a selection
#[must_use]
pub fn selection_title(selected: Option<&Person>) -> String {
    selected.map_or_else(
        || "No person is selected".to_string(),
        std::string::ToString::to_string,
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use roster_core::{Person, Sex};

    use super::*;

    fn sample() -> Person {
        Person {
            name: "Maria Sturm".to_string(),
            sex: Sex::Female,
            born: 1682,
            died: 1741,
            mother_name: None,
            father_name: None,
            slug: "maria-sturm-1682".to_string(),
        }
    }

    #[test]
    fn selection_title_without_selection() {
        assert_eq!(selection_title(None), "No person is selected");
    }

    #[test]
    fn selection_title_shows_name_and_years() {
        assert_eq!(selection_title(Some(&sample())), "Maria Sturm (1682 - 1741)");
    }
}
