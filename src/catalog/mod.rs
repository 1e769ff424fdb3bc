//! Lookup of installed reference data.
//!
//! The [`ReferenceLocator`](locator::ReferenceLocator) maps each bundled
//! reference to a path under an explicit [`PackageRoot`](crate::core::root::PackageRoot)
//! and fails fast when the installation is incomplete.
//!
//! ## Example
//!
//! ```rust,no_run
//! use default_reference::{PackageRoot, ReferenceLocator};
//!
//! let locator = ReferenceLocator::new(PackageRoot::discover().unwrap());
//!
//! let sequences = locator.reference_sequences().unwrap();
//! let mask = locator.template_alignment_column_mask();
//! println!("{} ({} mask columns)", sequences.display(), mask.len());
//! ```

pub mod locator;
