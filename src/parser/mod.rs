//! Address list splitting and parsing, plus domain extraction.

pub mod address_list;
pub mod domain;
