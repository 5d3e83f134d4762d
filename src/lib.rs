//! `mailbits` — small mail-adjacent string utilities.
//!
//! The centerpiece is a quote-aware email address list parser: it splits
//! `To:`-style header values on commas (keeping commas inside quoted display
//! names) and reports every candidate as either an [`EmailAddress`] or an
//! [`AddressError`]. Smaller helpers cover domain extraction, naive CSV
//! reading, slice set operations, timestamps and label normalization.

pub mod config;
pub mod csv;
pub mod error;
pub mod model;
pub mod parser;
pub mod slices;
pub mod text;
pub mod timestamp;

pub use error::{AddressError, DomainError, MailbitsError};
pub use model::address::EmailAddress;
pub use parser::address_list::{
    parse_address_list, partition_address_list, split_address_list, Candidate,
};
pub use parser::domain::domain_from_address;
