//! Streaming MD5 checksums.
//!
//! Input is consumed in fixed-size blocks so memory use is bounded by the block
//! size, not by the length of the stream.

use std::io::{ErrorKind, Read};
use std::path::Path;

use serde::{Serialize, Serializer};

/// Default number of bytes read per block (1 MiB)
pub const DEFAULT_BLOCK_SIZE: usize = 1 << 20;

/// A finished MD5 digest
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Md5Digest(md5::Digest);

impl Md5Digest {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0 .0
    }

    /// Lowercase hexadecimal form, 32 characters
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("{self:x}")
    }
}

impl From<md5::Digest> for Md5Digest {
    fn from(digest: md5::Digest) -> Self {
        Self(digest)
    }
}

impl std::fmt::LowerHex for Md5Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::LowerHex::fmt(&self.0, f)
    }
}

impl std::fmt::Display for Md5Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:x}")
    }
}

impl std::fmt::Debug for Md5Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Md5Digest({self:x})")
    }
}

impl Serialize for Md5Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Compute the MD5 of everything remaining in `source`.
///
/// Reads at most `block_size` bytes at a time and stops at the first read that
/// returns zero bytes, leaving `source` at end of stream. The digest depends
/// only on the bytes read, never on `block_size`. A `block_size` of zero reads
/// nothing and yields the digest of the empty input.
///
/// # Errors
///
/// Propagates any read error from `source` other than `ErrorKind::Interrupted`,
/// which is retried.
///
/// # Examples
///
/// ```
/// use default_reference::utils::checksum::{compute_digest, DEFAULT_BLOCK_SIZE};
///
/// let mut source = &b"foo bar baz"[..];
/// let digest = compute_digest(&mut source, DEFAULT_BLOCK_SIZE).unwrap();
/// assert_eq!(digest.to_hex(), "ab07acbb1e496801937adfa772424bf7");
/// ```
pub fn compute_digest<R: Read + ?Sized>(
    source: &mut R,
    block_size: usize,
) -> std::io::Result<Md5Digest> {
    let mut context = md5::Context::new();
    let mut block = vec![0u8; block_size];
    let mut total: u64 = 0;

    loop {
        let n = match source.read(&mut block) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        context.consume(&block[..n]);
        total += n as u64;
    }

    let digest = Md5Digest::from(context.compute());
    tracing::debug!(bytes = total, block_size, md5 = %digest, "Computed streaming MD5");
    Ok(digest)
}

/// Open `path`, checksum its contents, and close it again.
///
/// # Errors
///
/// Returns any error from opening or reading the file.
pub fn md5_file(path: &Path, block_size: usize) -> std::io::Result<Md5Digest> {
    let mut file = std::fs::File::open(path)?;
    compute_digest(&mut file, block_size)
}
