//! # default-reference
//!
//! Access to the default reference data used for 16S amplicon analysis: the
//! Greengenes 13_8 OTU release and the Lane mask for its template alignment.
//!
//! The data files are installed next to this component rather than compiled
//! in. `default-reference` only knows where they live: each lookup returns an
//! absolute path and fails loudly if the installation is incomplete.
//!
//! ## Features
//!
//! - **Reference lookup**: paths to the representative sequences, taxonomy and template alignment
//! - **Lane mask**: the 16S alignment column mask, compiled into the binary
//! - **Streaming MD5**: checksums of arbitrarily large streams in bounded memory
//! - **Alignment filtering**: apply the Lane mask to aligned FASTA
//!
//! ## Example
//!
//! ```rust,no_run
//! use default_reference::{PackageRoot, ReferenceLocator};
//! use default_reference::utils::checksum::{compute_digest, DEFAULT_BLOCK_SIZE};
//!
//! let locator = ReferenceLocator::new(PackageRoot::discover().unwrap());
//! let taxonomy = locator.reference_taxonomy().unwrap();
//!
//! let mut file = std::fs::File::open(&taxonomy).unwrap();
//! let digest = compute_digest(&mut file, DEFAULT_BLOCK_SIZE).unwrap();
//! println!("{}: {digest}", taxonomy.display());
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Reference file lookup under a package root
//! - [`core`]: Package root, reference identifiers and the Lane mask
//! - [`parsing`]: Aligned FASTA filtering
//! - [`utils`]: Streaming checksums and checksum validation
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use catalog::locator::{ReferenceError, ReferenceLocator};
pub use core::mask::{template_alignment_column_mask, LaneMask};
pub use core::reference::ReferenceFile;
pub use core::root::PackageRoot;
pub use utils::checksum::{compute_digest, Md5Digest, DEFAULT_BLOCK_SIZE};
