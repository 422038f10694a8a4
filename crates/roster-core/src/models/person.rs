//! Person model

use std::fmt;

use serde::{Deserialize, Serialize};

/// Biological sex as recorded in the dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    /// Serialized as `"m"`
    #[serde(rename = "m")]
    Male,
    /// Serialized as `"f"`
    #[serde(rename = "f")]
    Female,
}

/// A person in the dataset
///
/// Entries are immutable once loaded; the dataset is read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Full name, the field autocomplete matches against
    pub name: String,
    /// Sex code from the source data
    pub sex: Sex,
    /// Year of birth
    pub born: i32,
    /// Year of death
    pub died: i32,
    /// Mother's full name, when known
    #[serde(default)]
    pub mother_name: Option<String>,
    /// Father's full name, when known
    #[serde(default)]
    pub father_name: Option<String>,
    /// Unique URL-safe identifier, stable across loads
    pub slug: String,
}

impl Person {
    /// Birth and death years formatted for display
    #[must_use]
    pub fn life_span(&self) -> String {
        format!("{} - {}", self.born, self.died)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.life_span())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample() -> Person {
        Person {
            name: "Carolus Haverbeke".to_string(),
            sex: Sex::Male,
            born: 1832,
            died: 1905,
            mother_name: Some("Maria van Brussel".to_string()),
            father_name: Some("Carel Haverbeke".to_string()),
            slug: "carolus-haverbeke-1832".to_string(),
        }
    }

    #[test]
    fn life_span_formats_years() {
        assert_eq!(sample().life_span(), "1832 - 1905");
    }

    #[test]
    fn display_includes_name_and_years() {
        assert_eq!(sample().to_string(), "Carolus Haverbeke (1832 - 1905)");
    }

    #[test]
    fn deserializes_camel_case_fields() {
        let json = r#"{
            "name": "Emma de Milliano",
            "sex": "f",
            "born": 1876,
            "died": 1956,
            "fatherName": "Petrus de Milliano",
            "motherName": "Sophia van Damme",
            "slug": "emma-de-milliano-1876"
        }"#;

        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.name, "Emma de Milliano");
        assert_eq!(person.sex, Sex::Female);
        assert_eq!(person.born, 1876);
        assert_eq!(person.father_name.as_deref(), Some("Petrus de Milliano"));
    }

    #[test]
    fn parent_names_default_to_none() {
        let json = r#"{
            "name": "Anna van Hecke",
            "sex": "f",
            "born": 1607,
            "died": 1670,
            "slug": "anna-van-hecke-1607"
        }"#;

        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.mother_name, None);
        assert_eq!(person.father_name, None);
    }

    #[test]
    fn rejects_unknown_sex_code() {
        let json = r#"{
            "name": "Nobody",
            "sex": "x",
            "born": 1700,
            "died": 1750,
            "slug": "nobody-1700"
        }"#;

        assert!(serde_json::from_str::<Person>(json).is_err());
    }
}
