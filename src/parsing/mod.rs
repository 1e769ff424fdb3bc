//! Readers for the bundled reference formats.
//!
//! - **Aligned FASTA**: filter alignment columns through the Lane mask
//!
//! ## Example
//!
//! ```rust,no_run
//! use default_reference::core::mask::LaneMask;
//! use default_reference::parsing::fasta::filter_alignment_file;
//! use std::path::Path;
//!
//! let mut out = std::io::stdout().lock();
//! let summary =
//!     filter_alignment_file(Path::new("85_otus.fasta"), &LaneMask::default_16s(), &mut out)
//!         .unwrap();
//! eprintln!("{} records", summary.records);
//! ```

pub mod fasta;
