//! Tarball extension predicate.

use crate::grammar;

/// Report whether a string ends in a recognized tarball extension
/// (`.tar`, `.tgz`, or `.tar.gz`), case-insensitively.
///
/// A cheap suffix test, independent of full decoding, intended as a
/// pre-filter before attempting [`parse`](crate::parse).
///
/// # Examples
///
/// ```
/// use tarname::has_tarball_extension;
///
/// assert!(has_tarball_extension("my-package-1.2.3.tar.gz"));
/// assert!(has_tarball_extension("x.TAR.GZ"));
/// assert!(!has_tarball_extension("x.tar.bz2"));
/// assert!(!has_tarball_extension("package.json"));
/// ```
pub fn has_tarball_extension(value: &str) -> bool {
    grammar::extension_pattern().is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_suffixes() {
        assert!(has_tarball_extension("x.tar"));
        assert!(has_tarball_extension("x.tgz"));
        assert!(has_tarball_extension("x.tar.gz"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(has_tarball_extension("x.TAR.GZ"));
        assert!(has_tarball_extension("x.Tar"));
        assert!(has_tarball_extension("x.TGZ"));
    }

    #[test]
    fn test_unrecognized_suffixes() {
        assert!(!has_tarball_extension("x.tar.bz2"));
        assert!(!has_tarball_extension("x.zip"));
        assert!(!has_tarball_extension("x.gz"));
        assert!(!has_tarball_extension("tar"));
        assert!(!has_tarball_extension(""));
    }

    #[test]
    fn test_suffix_only() {
        // The extension must terminate the string.
        assert!(!has_tarball_extension("x.tar.gz.aa"));
        assert!(!has_tarball_extension("x.tgz.sha256"));
    }

    #[test]
    fn test_bare_extension_matches() {
        assert!(has_tarball_extension(".tar.gz"));
        assert!(has_tarball_extension(".tgz"));
    }
}
