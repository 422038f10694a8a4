//! Home view - main application screen

use dioxus::prelude::*;

use crate::components::AutoComplete;
use crate::state::AppState;

/// Home view component - heading for the current selection plus the picker
#[component]
pub fn Home() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let title = state.selection_title();
    let delay_ms = (state.config)().debounce_ms;

    rsx! {
        div {
            class: "home-container",
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 24px;
                padding: 48px 32px;
                height: 100vh;
                box-sizing: border-box;
            ",

            h1 {
                style: "
                    margin: 0;
                    font-size: 22px;
                    font-weight: 600;
                    color: {colors.text_primary};
                ",
                "{title}"
            }

            AutoComplete {
                delay_ms,
                on_selected: move |person| state.selected_person.set(person),
            }
        }
    }
}
