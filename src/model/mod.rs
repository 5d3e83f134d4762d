//! Core data model types.

pub mod address;
