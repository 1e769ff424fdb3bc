use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::core::mask::template_alignment_column_mask;
use crate::core::reference::ReferenceFile;
use crate::core::root::PackageRoot;

#[derive(Error, Debug)]
pub enum ReferenceError {
    #[error("Reference data file {} is missing from installation.", path.display())]
    MissingReferenceFile { path: PathBuf },
}

/// Installation state of a single reference file
#[derive(Debug, Clone, Serialize)]
pub struct ReferenceStatus {
    pub reference: ReferenceFile,
    pub path: PathBuf,
    pub exists: bool,
    pub size: Option<u64>,
    /// Why the path could not be inspected, for failures other than not-found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Resolves reference-data names to files under a [`PackageRoot`]
#[derive(Debug, Clone)]
pub struct ReferenceLocator {
    root: PackageRoot,
}

impl ReferenceLocator {
    pub fn new(root: PackageRoot) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &PackageRoot {
        &self.root
    }

    /// Join `segments` to the package root and check the result exists.
    ///
    /// Existence is checked on every call; nothing is cached.
    ///
    /// # Errors
    ///
    /// Returns `ReferenceError::MissingReferenceFile` with the joined path if
    /// nothing exists there.
    pub fn resolve<I, S>(&self, segments: I) -> Result<PathBuf, ReferenceError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        let path = self.root.join(segments);
        if !path.exists() {
            return Err(ReferenceError::MissingReferenceFile { path });
        }
        tracing::debug!(path = %path.display(), "Resolved reference data file");
        Ok(path)
    }

    /// Resolve one of the bundled reference files.
    ///
    /// # Errors
    ///
    /// Returns `ReferenceError::MissingReferenceFile` if the file is not installed.
    pub fn locate(&self, reference: ReferenceFile) -> Result<PathBuf, ReferenceError> {
        self.resolve(reference.segments())
    }

    /// Absolute path to the default reference sequences
    /// (Greengenes 13_8 97% OTU representative sequences).
    ///
    /// # Errors
    ///
    /// Returns `ReferenceError::MissingReferenceFile` if the file is not installed.
    pub fn reference_sequences(&self) -> Result<PathBuf, ReferenceError> {
        self.locate(ReferenceFile::Sequences)
    }

    /// Absolute path to the default reference taxonomy
    /// (Greengenes 13_8 97% OTU taxonomic assignments).
    ///
    /// # Errors
    ///
    /// Returns `ReferenceError::MissingReferenceFile` if the file is not installed.
    pub fn reference_taxonomy(&self) -> Result<PathBuf, ReferenceError> {
        self.locate(ReferenceFile::Taxonomy)
    }

    /// Absolute path to the default template alignment
    /// (Greengenes 13_8 85% OTU aligned representative sequences).
    ///
    /// # Errors
    ///
    /// Returns `ReferenceError::MissingReferenceFile` if the file is not installed.
    pub fn template_alignment(&self) -> Result<PathBuf, ReferenceError> {
        self.locate(ReferenceFile::Alignment)
    }

    /// The 16S Lane mask for the template alignment. Never touches the filesystem.
    pub fn template_alignment_column_mask(&self) -> &'static str {
        template_alignment_column_mask()
    }

    /// Report where a reference would live and whether it is there, without failing
    pub fn status(&self, reference: ReferenceFile) -> ReferenceStatus {
        let path = self.root.join(reference.segments());
        let (size, error) = match std::fs::metadata(&path) {
            Ok(metadata) => (Some(metadata.len()), None),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(
                    reference = reference.id(),
                    path = %path.display(),
                    "Reference data file is not installed"
                );
                (None, None)
            }
            Err(e) => {
                tracing::warn!(
                    reference = reference.id(),
                    path = %path.display(),
                    error = %e,
                    "Cannot inspect reference data file"
                );
                (None, Some(e.to_string()))
            }
        };
        ReferenceStatus {
            reference,
            exists: size.is_some(),
            path,
            size,
            error,
        }
    }

    /// Status of every bundled reference file
    pub fn status_all(&self) -> Vec<ReferenceStatus> {
        ReferenceFile::all()
            .into_iter()
            .map(|reference| self.status(reference))
            .collect()
    }
}
