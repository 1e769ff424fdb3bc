//! Command-line interface for default-reference.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **locate**: Print the path of an installed reference file
//! - **mask**: Print the 16S template alignment Lane mask
//! - **list**: Show every bundled reference and whether it is installed
//! - **checksum**: Compute streaming MD5 checksums of files
//! - **filter-alignment**: Apply the Lane mask to an aligned FASTA file
//!
//! ## Usage
//!
//! ```text
//! # Where are the reference sequences?
//! default-reference locate sequences
//!
//! # Check an installation against a different root
//! default-reference --root /opt/gg list --md5
//!
//! # Verify a download
//! default-reference checksum 97_otus.fasta --expect <md5>
//!
//! # Mask an alignment
//! default-reference filter-alignment aligned.fasta -o filtered.fasta
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::catalog::locator::ReferenceLocator;
use crate::core::root::PackageRoot;

pub mod checksum;
pub mod filter;
pub mod list;
pub mod locate;
pub mod mask;

#[derive(Parser)]
#[command(name = "default-reference")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Locate bundled Greengenes reference data and checksum files")]
#[command(
    long_about = "default-reference locates the Greengenes 13_8 reference data installed alongside it.\n\nIt provides:\n- Paths to the reference sequences, taxonomy and template alignment\n- The 16S Lane mask for the template alignment\n- Memory-bounded MD5 checksums for verifying large files"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Directory holding the reference data (defaults to the executable's directory)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the absolute path of a bundled reference file
    Locate(locate::LocateArgs),

    /// Print the template alignment column mask
    Mask,

    /// List bundled reference files and their installation state
    List(list::ListArgs),

    /// Compute MD5 checksums without loading files into memory
    Checksum(checksum::ChecksumArgs),

    /// Keep only the Lane mask columns of an aligned FASTA file
    FilterAlignment(filter::FilterArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Build a locator from `--root`, or from the install location when absent
pub fn locator(root: Option<PathBuf>) -> anyhow::Result<ReferenceLocator> {
    let root = match root {
        Some(path) => PackageRoot::new(path)?,
        None => PackageRoot::discover()?,
    };
    tracing::debug!(root = %root, "Using package root");
    Ok(ReferenceLocator::new(root))
}
