//! Column filtering of aligned FASTA files using noodles.
//!
//! Applies a [`LaneMask`] to every record of a multiple sequence alignment and
//! writes the retained columns back out as FASTA, one sequence per line.
//! Input ending in `.gz` or `.bgz` is decompressed on the fly.

use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;
use thiserror::Error;

use crate::core::mask::{LaneMask, MaskError};

#[derive(Error, Debug)]
pub enum AlignmentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse FASTA record {index}: {message}")]
    Record { index: usize, message: String },

    #[error(transparent)]
    Mask(#[from] MaskError),

    #[error("No sequences found in alignment")]
    Empty,
}

/// Summary of a filtering run
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct FilterSummary {
    pub records: usize,
    pub input_columns: usize,
    pub output_columns: usize,
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Filter an aligned FASTA file through `mask`, writing the result to `output`.
///
/// # Errors
///
/// Returns `AlignmentError::Io` if the file cannot be read or the output
/// cannot be written, `AlignmentError::Record` on malformed FASTA,
/// `AlignmentError::Mask` when a sequence is not as wide as the mask, or
/// `AlignmentError::Empty` if the file holds no sequences.
pub fn filter_alignment_file<W: Write>(
    path: &Path,
    mask: &LaneMask,
    output: &mut W,
) -> Result<FilterSummary, AlignmentError> {
    let file = std::fs::File::open(path)?;
    if is_gzipped(path) {
        // bgzip is a series of gzip members
        let reader = BufReader::new(MultiGzDecoder::new(file));
        filter_alignment(reader, mask, output)
    } else {
        filter_alignment(BufReader::new(file), mask, output)
    }
}

/// Filter aligned FASTA from any buffered reader.
///
/// # Errors
///
/// See [`filter_alignment_file`].
pub fn filter_alignment<R: BufRead, W: Write>(
    reader: R,
    mask: &LaneMask,
    output: &mut W,
) -> Result<FilterSummary, AlignmentError> {
    let mut fasta_reader = fasta::io::Reader::new(reader);
    let mut records = 0;

    for result in fasta_reader.records() {
        let record = result.map_err(|e| AlignmentError::Record {
            index: records,
            message: e.to_string(),
        })?;

        let name = String::from_utf8_lossy(record.name()).to_string();
        let filtered = mask.apply(&name, record.sequence().as_ref())?;

        write!(output, ">{name}")?;
        if let Some(description) = record.description() {
            write!(output, " {}", String::from_utf8_lossy(description))?;
        }
        writeln!(output)?;
        output.write_all(&filtered)?;
        writeln!(output)?;

        records += 1;
    }

    if records == 0 {
        return Err(AlignmentError::Empty);
    }

    output.flush()?;
    tracing::debug!(records, columns = mask.informative_columns(), "Filtered alignment");

    Ok(FilterSummary {
        records,
        input_columns: mask.len(),
        output_columns: mask.informative_columns(),
    })
}
