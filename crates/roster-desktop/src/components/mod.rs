//! UI Components
//!
//! Reusable UI components for the desktop application.

mod autocomplete;
mod suggestion_item;

pub use autocomplete::AutoComplete;
pub use suggestion_item::SuggestionItem;
