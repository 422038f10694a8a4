//! Custom Dioxus hooks

mod debounce;

pub use debounce::{use_debounce, UseDebounce};
