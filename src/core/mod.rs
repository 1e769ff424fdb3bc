//! Core data types for the bundled reference data.
//!
//! - [`PackageRoot`](root::PackageRoot): the install directory all reference files hang off
//! - [`ReferenceFile`](reference::ReferenceFile): the file-backed references and their relative paths
//! - [`LaneMask`](mask::LaneMask): the compiled-in 16S alignment column mask
//!
//! ## Layout
//!
//! | Reference  | Relative path                                   |
//! |------------|-------------------------------------------------|
//! | sequences  | `gg_13_8_otus/rep_set/97_otus.fasta`            |
//! | taxonomy   | `gg_13_8_otus/taxonomy/97_otu_taxonomy.txt`     |
//! | alignment  | `gg_13_8_otus/rep_set_aligned/85_otus.fasta`    |

pub mod mask;
pub mod reference;
pub mod root;
