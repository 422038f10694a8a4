//! roster-core - Core library for Roster
//!
//! This crate contains the people models, the built-in dataset, and the
//! name filtering logic shared by all Roster interfaces.

pub mod dataset;
pub mod error;
pub mod models;
pub mod search;

pub use error::{Error, Result};
pub use models::{Person, Sex};
