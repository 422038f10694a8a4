//! Suggestion row component

use dioxus::prelude::*;

use roster_core::{Person, Sex};

use crate::state::AppState;

/// A single person row rendered in the suggestion dropdown.
///
/// Selection fires on mouse-down rather than click so it wins the race
/// against the input's blur handler closing the dropdown.
#[component]
pub fn SuggestionItem(person: Person, on_pick: EventHandler<Person>) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let name_color = match person.sex {
        Sex::Male => colors.accent,
        Sex::Female => colors.danger,
    };
    let life_span = person.life_span();

    let pick_on_mouse = {
        let person = person.clone();
        move |_| on_pick.call(person.clone())
    };
    let pick_on_key = {
        let person = person.clone();
        move |evt: Event<KeyboardData>| {
            if evt.key() == Key::Enter {
                on_pick.call(person.clone());
            }
        }
    };

    rsx! {
        div {
            class: "suggestion-item",
            role: "button",
            tabindex: "0",
            style: "
                padding: 8px 12px;
                cursor: pointer;
                border-bottom: 1px solid {colors.border};
            ",
            onmousedown: pick_on_mouse,
            onkeydown: pick_on_key,

            p {
                style: "margin: 0; font-weight: 500; color: {name_color};",
                "{person.name}"
            }

            p {
                style: "margin: 0; font-size: 12px; color: {colors.text_muted};",
                "{life_span}"
            }
        }
    }
}
