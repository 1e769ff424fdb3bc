//! The 16S alignment Lane mask.
//!
//! The mask marks which columns of the Greengenes template alignment are
//! phylogenetically informative. It is derived from Lane (1991), "16S/23S rRNA
//! sequencing", in *Nucleic Acid Techniques in Bacterial Systematics*, and was
//! taken from the Greengenes `lanemask_in_1s_and_0s` download with its
//! trailing newline removed.

use thiserror::Error;

/// Raw mask text, one '0'/'1' per alignment column. Validated by build.rs.
const LANE_MASK_16S: &str = include_str!("../../data/lane_mask.txt");

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MaskError {
    #[error("Sequence '{name}' has {actual} columns but the mask has {expected}")]
    LengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },
}

/// A fixed-length column mask over a multiple sequence alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneMask {
    mask: &'static str,
}

impl LaneMask {
    /// The 16S Lane mask matching the bundled template alignment
    pub const fn default_16s() -> Self {
        Self {
            mask: LANE_MASK_16S,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        self.mask
    }

    /// Number of alignment columns covered by the mask
    pub const fn len(&self) -> usize {
        self.mask.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.mask.is_empty()
    }

    /// Number of columns retained when the mask is applied
    pub fn informative_columns(&self) -> usize {
        self.mask.bytes().filter(|&b| b == b'1').count()
    }

    /// Whether `column` is kept. Columns past the end of the mask are not.
    pub fn is_kept(&self, column: usize) -> bool {
        self.mask.as_bytes().get(column) == Some(&b'1')
    }

    /// Keep only the columns of an aligned sequence whose mask character is '1'.
    ///
    /// # Errors
    ///
    /// Returns `MaskError::LengthMismatch` if the sequence is not exactly as
    /// wide as the mask.
    pub fn apply(&self, name: &str, aligned: &[u8]) -> Result<Vec<u8>, MaskError> {
        if aligned.len() != self.len() {
            return Err(MaskError::LengthMismatch {
                name: name.to_string(),
                expected: self.len(),
                actual: aligned.len(),
            });
        }

        Ok(aligned
            .iter()
            .zip(self.mask.bytes())
            .filter(|(_, m)| *m == b'1')
            .map(|(&base, _)| base)
            .collect())
    }
}

impl Default for LaneMask {
    fn default() -> Self {
        Self::default_16s()
    }
}

impl std::fmt::Display for LaneMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mask)
    }
}

/// Return the template alignment column mask as a string
pub fn template_alignment_column_mask() -> &'static str {
    LaneMask::default_16s().as_str()
}

#[cfg(test)]
impl LaneMask {
    pub(crate) const fn from_static(mask: &'static str) -> Self {
        Self { mask }
    }
}
