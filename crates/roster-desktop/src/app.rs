//! Main application component

use dioxus::prelude::*;

use roster_core::Person;

use crate::config::AppConfig;
use crate::state::AppState;
use crate::theme::{resolve_theme, ResolvedTheme};
use crate::views::Home;

/// Root application component
#[component]
pub fn App() -> Element {
    let mut people = use_signal(Vec::new);
    let selected_person = use_signal(|| None::<Person>);
    let config = use_signal(AppConfig::from_env);
    let mut theme = use_signal(ResolvedTheme::default);

    // Resolve theme and load the built-in dataset (config never changes,
    // so this runs once)
    use_effect(move || {
        let loaded_config = config();
        theme.set(resolve_theme(loaded_config.theme));

        match roster_core::dataset::builtin() {
            Ok(loaded) => {
                tracing::info!("Loaded {} people from built-in dataset", loaded.len());
                people.set(loaded);
            }
            Err(e) => {
                tracing::error!("Failed to load people dataset: {}", e);
            }
        }
    });

    use_context_provider(|| AppState {
        people,
        selected_person,
        theme,
        config,
    });

    let current_theme = theme();
    let colors = current_theme.palette();
    let theme_attr = match current_theme {
        ResolvedTheme::Light => "light",
        ResolvedTheme::Dark => "dark",
    };

    rsx! {
        div {
            "data-theme": "{theme_attr}",
            class: "app-container",
            style: "
                height: 100vh;
                background: {colors.bg_secondary};
                color: {colors.text_primary};
                font-family: system-ui, -apple-system, sans-serif;
            ",

            Home {}
        }
    }
}
