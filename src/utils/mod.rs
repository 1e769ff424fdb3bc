//! Checksum and validation helpers.

pub mod checksum;
pub mod validation;
