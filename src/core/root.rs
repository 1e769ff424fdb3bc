use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PackageRootError {
    #[error("Failed to determine install location: {0}")]
    InstallLocation(#[source] std::io::Error),

    #[error("Install location {0} has no parent directory")]
    NoParent(PathBuf),

    #[error("Package root {path} is not accessible: {source}")]
    Inaccessible {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The absolute directory under which reference data is installed.
///
/// A `PackageRoot` is computed once (normally at process start) and handed to
/// the [`ReferenceLocator`](crate::catalog::locator::ReferenceLocator). It never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRoot(PathBuf);

impl PackageRoot {
    /// Use an explicit directory as the package root.
    ///
    /// Relative paths are made absolute against the current directory, but the
    /// directory itself is not required to exist.
    ///
    /// # Errors
    ///
    /// Returns `PackageRootError::Inaccessible` if the current directory cannot
    /// be read while absolutizing a relative path.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, PackageRootError> {
        let path = path.into();
        let absolute = std::path::absolute(&path)
            .map_err(|source| PackageRootError::Inaccessible { path, source })?;
        Ok(Self(absolute))
    }

    /// Discover the root from the install location of the running executable:
    /// the canonical directory that contains it.
    ///
    /// # Errors
    ///
    /// Returns an error if the executable path cannot be determined or resolved.
    pub fn discover() -> Result<Self, PackageRootError> {
        let exe = std::env::current_exe().map_err(PackageRootError::InstallLocation)?;
        let exe = exe
            .canonicalize()
            .map_err(|source| PackageRootError::Inaccessible { path: exe, source })?;
        let dir = exe
            .parent()
            .ok_or_else(|| PackageRootError::NoParent(exe.clone()))?;

        tracing::debug!(root = %dir.display(), "Discovered package root");
        Ok(Self(dir.to_path_buf()))
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Join relative path segments onto the root.
    pub fn join<I, S>(&self, segments: I) -> PathBuf
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        let mut path = self.0.clone();
        for segment in segments {
            path.push(segment);
        }
        path
    }
}

impl AsRef<Path> for PackageRoot {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl std::fmt::Display for PackageRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_makes_relative_paths_absolute() {
        let root = PackageRoot::new("some/relative/dir").unwrap();
        assert!(root.path().is_absolute());
        assert!(root.path().ends_with("some/relative/dir"));
    }

    #[test]
    fn test_new_keeps_absolute_paths() {
        let dir = tempfile::tempdir().unwrap();
        let root = PackageRoot::new(dir.path()).unwrap();
        assert_eq!(root.path(), dir.path());
    }

    #[test]
    fn test_join_segments() {
        let dir = tempfile::tempdir().unwrap();
        let root = PackageRoot::new(dir.path()).unwrap();
        let joined = root.join(["gg_13_8_otus", "rep_set", "97_otus.fasta"]);
        assert_eq!(
            joined,
            dir.path().join("gg_13_8_otus/rep_set/97_otus.fasta")
        );
    }

    #[test]
    fn test_discover_is_absolute_directory() {
        let root = PackageRoot::discover().unwrap();
        assert!(root.path().is_absolute());
        assert!(root.path().is_dir());
    }
}
