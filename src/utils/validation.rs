//! Validation helpers for user-supplied checksums.

use crate::utils::checksum::Md5Digest;

/// Validate that a string is a valid MD5 checksum (32 hex characters).
///
/// # Examples
///
/// ```
/// use default_reference::utils::validation::is_valid_md5;
///
/// assert!(is_valid_md5("ab07acbb1e496801937adfa772424bf7"));
/// assert!(!is_valid_md5("not-an-md5"));
/// assert!(!is_valid_md5("ab07acbb1e496801937adfa772424bf")); // 31 chars
/// ```
#[must_use]
pub fn is_valid_md5(s: &str) -> bool {
    s.len() == 32 && s.chars().all(|c| c.is_ascii_hexdigit())
}

/// Normalize an MD5 string to lowercase.
/// Returns None if the input is not a valid MD5.
#[must_use]
pub fn normalize_md5(s: &str) -> Option<String> {
    let s = s.trim();
    if is_valid_md5(s) {
        Some(s.to_lowercase())
    } else {
        None
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChecksumError {
    #[error("Invalid MD5 checksum '{0}': expected 32 hexadecimal characters")]
    InvalidMd5(String),
    #[error("MD5 mismatch: expected {expected}, got {actual}")]
    Mismatch { expected: String, actual: String },
}

/// Compare a computed digest against an expected hex string (case-insensitive).
///
/// # Errors
///
/// Returns `ChecksumError::InvalidMd5` if `expected` is not an MD5, or
/// `ChecksumError::Mismatch` if the digests differ.
pub fn verify_md5(expected: &str, actual: &Md5Digest) -> Result<(), ChecksumError> {
    let expected =
        normalize_md5(expected).ok_or_else(|| ChecksumError::InvalidMd5(expected.to_string()))?;
    let actual = actual.to_hex();
    if expected == actual {
        Ok(())
    } else {
        Err(ChecksumError::Mismatch { expected, actual })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::checksum::compute_digest;

    fn digest_of(data: &[u8]) -> Md5Digest {
        let mut source = data;
        compute_digest(&mut source, 4).unwrap()
    }

    #[test]
    fn test_normalize_md5() {
        assert_eq!(
            normalize_md5(" AB07ACBB1E496801937ADFA772424BF7\n"),
            Some("ab07acbb1e496801937adfa772424bf7".to_string())
        );
        assert_eq!(normalize_md5("zz07acbb1e496801937adfa772424bf7"), None);
        assert_eq!(normalize_md5(""), None);
    }

    #[test]
    fn test_verify_md5_match() {
        let digest = digest_of(b"foo bar baz");
        assert!(verify_md5("ab07acbb1e496801937adfa772424bf7", &digest).is_ok());
        assert!(verify_md5("AB07ACBB1E496801937ADFA772424BF7", &digest).is_ok());
    }

    #[test]
    fn test_verify_md5_mismatch() {
        let digest = digest_of(b"foo bar baz");
        let err = verify_md5("d41d8cd98f00b204e9800998ecf8427e", &digest).unwrap_err();
        assert_eq!(
            err,
            ChecksumError::Mismatch {
                expected: "d41d8cd98f00b204e9800998ecf8427e".to_string(),
                actual: "ab07acbb1e496801937adfa772424bf7".to_string(),
            }
        );
    }

    #[test]
    fn test_verify_md5_invalid() {
        let digest = digest_of(b"");
        assert_eq!(
            verify_md5("xyz", &digest),
            Err(ChecksumError::InvalidMd5("xyz".to_string()))
        );
    }
}
