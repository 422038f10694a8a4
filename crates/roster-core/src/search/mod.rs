//! Name filtering for the autocomplete widget
//!
//! The dataset is small and lives in memory, so filtering is a plain
//! substring scan over the full list on every applied-query change.

use crate::models::Person;

/// Filter people by case-insensitive substring match on name.
///
/// Dataset order is preserved. An empty query matches everyone, which is
/// what the dropdown wants when it opens before any text is typed.
#[must_use]
pub fn filter_by_name(people: &[Person], query: &str) -> Vec<Person> {
    let needle = query.to_lowercase();
    people
        .iter()
        .filter(|person| person.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
