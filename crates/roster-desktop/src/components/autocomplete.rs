//! Autocomplete input with a debounced suggestion dropdown

use std::time::Duration;

use dioxus::prelude::*;

use roster_core::search::filter_by_name;
use roster_core::Person;

use super::SuggestionItem;
use crate::hooks::use_debounce;
use crate::state::AppState;

/// Text input that filters the people dataset by name substring.
///
/// The raw `query` updates on every keystroke; the suggestion list is
/// driven by `applied_query`, which trails it by `delay_ms`. The dropdown
/// reveal after typing is debounced on the same window, so suggestions
/// only (re)appear once input pauses.
#[component]
pub fn AutoComplete(on_selected: EventHandler<Option<Person>>, delay_ms: u64) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let mut query = use_signal(String::new);
    let mut applied_query = use_signal(String::new);
    let mut dropdown_open = use_signal(|| false);

    let mut apply_query = use_debounce(Duration::from_millis(delay_ms), move |value: String| {
        applied_query.set(value);
    });
    let mut reveal_dropdown = use_debounce(Duration::from_millis(delay_ms), move |open: bool| {
        dropdown_open.set(open);
    });

    // Recomputed only when the applied query (or the dataset) changes
    let suggestions = use_memo(move || filter_by_name(&(state.people)(), &applied_query()));

    let mut select = move |person: Person| {
        reveal_dropdown.cancel();
        dropdown_open.set(false);
        query.set(person.name.clone());
        on_selected.call(Some(person));
    };

    rsx! {
        div {
            class: "autocomplete",
            style: "position: relative; width: 100%; max-width: 360px;",

            input {
                r#type: "text",
                placeholder: "Enter a part of the name",
                value: "{query}",
                oninput: move |evt| {
                    let value = evt.value();
                    query.set(value.clone());
                    apply_query.action(value);
                    on_selected.call(None);
                    dropdown_open.set(false);
                    reveal_dropdown.action(true);
                },
                onfocus: move |_| dropdown_open.set(true),
                onblur: move |_| dropdown_open.set(false),
                style: "
                    width: 100%;
                    padding: 8px 12px;
                    border: 1px solid {colors.border};
                    border-radius: 6px;
                    font-size: 14px;
                    background: {colors.bg_primary};
                    color: {colors.text_primary};
                    outline: none;
                    box-sizing: border-box;
                ",
            }

            if dropdown_open() {
                div {
                    class: "suggestions",
                    role: "menu",
                    style: "
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        margin-top: 4px;
                        max-height: 280px;
                        overflow-y: auto;
                        border: 1px solid {colors.border};
                        border-radius: 6px;
                        background: {colors.bg_primary};
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
                        z-index: 10;
                    ",

                    if suggestions().is_empty() {
                        div {
                            class: "no-suggestions",
                            style: "padding: 12px; color: {colors.danger};",
                            "No matching suggestions"
                        }
                    } else {
                        for person in suggestions() {
                            SuggestionItem {
                                key: "{person.slug}",
                                person: person.clone(),
                                on_pick: move |picked| select(picked),
                            }
                        }
                    }
                }
            }
        }
    }
}
