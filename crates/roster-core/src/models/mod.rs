//! Data models for Roster

mod person;

pub use person::{Person, Sex};
