//! Built-in people dataset
//!
//! The dataset ships embedded in the binary and is parsed once at startup.
//! There is no network or disk source; the list is fixed and read-only.

use crate::error::{Error, Result};
use crate::models::Person;

/// JSON source for the built-in dataset, embedded at compile time
const BUILTIN_PEOPLE: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/people.json"));

/// Parse a people dataset from a JSON array.
///
/// An empty array is rejected: a picker with nothing to pick from is a
/// packaging mistake, not a valid state.
pub fn from_json(json: &str) -> Result<Vec<Person>> {
    let people: Vec<Person> = serde_json::from_str(json)?;
    if people.is_empty() {
        return Err(Error::EmptyDataset);
    }
    tracing::debug!("Parsed {} people from dataset", people.len());
    Ok(people)
}

/// Parse the embedded built-in dataset.
pub fn builtin() -> Result<Vec<Person>> {
    from_json(BUILTIN_PEOPLE)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn builtin_dataset_parses() {
        let people = builtin().unwrap();
        assert!(!people.is_empty());
        assert_eq!(people[0].name, "Carolus Haverbeke");
    }

    #[test]
    fn builtin_slugs_are_unique() {
        let people = builtin().unwrap();
        let mut slugs: Vec<&str> = people.iter().map(|p| p.slug.as_str()).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), people.len());
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(matches!(from_json("[]"), Err(Error::EmptyDataset)));
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        assert!(matches!(
            from_json("{not json"),
            Err(Error::Serialization(_))
        ));
    }
}
