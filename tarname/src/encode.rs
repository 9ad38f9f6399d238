//! Encoding package identities into canonical tarball filenames.
//!
//! [`make_tarball_name`] is the inverse of [`parse`](crate::parse): the
//! composed filename always ends in a recognized tarball extension, is fully
//! percent-encoded, and embeds the disambiguation signal only when a plain
//! hyphen join would be ambiguous.

use semver::Version;
use thiserror::Error;

use crate::ambiguity::is_version_ambiguous;
use crate::escape::escape_path_segment;
use crate::extension::has_tarball_extension;
use crate::grammar::{self, DISAMBIGUATION_SIGNAL};

/// Caller-supplied description of how a tarball was (or will be) obtained.
///
/// The Rust rendering of the codec's tagged descriptor record; an
/// unrecognized `type` discriminator is unrepresentable here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageSource {
    /// Registry package at a semantic version.
    Semver {
        /// Package name, possibly scoped as `@scope/name`.
        name: String,
        /// Full version string: triplet, optional pre-release, optional
        /// build metadata.
        version: String,
    },
    /// Git repository at an exact commit.
    Git {
        /// Repository host.
        domain: String,
        /// Repository path under the host.
        path: String,
        /// Full 40-character hexadecimal commit hash.
        commit: String,
    },
    /// Arbitrary URL the tarball was downloaded from.
    Url {
        /// Absolute URL with scheme, host, and a non-root path.
        url: String,
    },
}

/// Validation failures raised by [`make_tarball_name`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A required field is empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The version string does not satisfy Semantic Versioning 2.0.0.
    #[error("invalid semver version: {0}")]
    InvalidVersion(String),

    /// The commit hash is not exactly 40 hexadecimal characters.
    #[error("invalid commit hash: {0}")]
    InvalidCommit(String),

    /// The URL lacks a scheme, host, or usable path, or would not
    /// re-serialize byte-for-byte.
    #[error("unusable source url: {0}")]
    InvalidUrl(String),
}

fn require_non_empty(value: &str, field: &'static str) -> Result<(), EncodeError> {
    if value.is_empty() {
        Err(EncodeError::MissingField(field))
    } else {
        Ok(())
    }
}

/// Minimal structural URL validation: `scheme "://" host path`.
///
/// Deliberately not a full URL parser. The parts are sliced out of the
/// input, checked for presence, and required to reassemble into the input
/// byte for byte, so any URL this function accepts is one the codec would
/// never normalize differently on the way back out.
fn split_source_url(url: &str) -> Result<(&str, &str), EncodeError> {
    let invalid = || EncodeError::InvalidUrl(url.to_string());

    let (scheme, rest) = url.split_once("://").ok_or_else(invalid)?;
    let mut scheme_chars = scheme.chars();
    let scheme_ok = scheme_chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
        && scheme_chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if !scheme_ok {
        return Err(invalid());
    }

    let slash = rest.find('/').ok_or_else(invalid)?;
    let (host, path) = rest.split_at(slash);
    if host.is_empty() || path == "/" {
        return Err(invalid());
    }

    if format!("{scheme}://{host}{path}") != url {
        return Err(invalid());
    }

    Ok((host, path))
}

/// Encode a package identity into a canonical tarball filename.
///
/// The result is fully percent-encoded (safe as a URL path segment or bare
/// filename), always ends in `.tar`, `.tgz`, or `.tar.gz`, and for the
/// semver variant carries the disambiguation signal exactly when a plain
/// hyphen join would admit more than one name/version split.
///
/// # Examples
///
/// ```
/// use tarname::{make_tarball_name, PackageSource};
///
/// let plain = PackageSource::Semver {
///     name: "my-package".to_string(),
///     version: "1.2.3".to_string(),
/// };
/// assert_eq!(make_tarball_name(&plain).unwrap(), "my-package-1.2.3.tar.gz");
///
/// // This join is ambiguous, so the signal is inserted.
/// let signaled = PackageSource::Semver {
///     name: "my-package-1.2.3".to_string(),
///     version: "4.5.6".to_string(),
/// };
/// assert_eq!(
///     make_tarball_name(&signaled).unwrap(),
///     "my-package-1.2.3!4.5.6.tar.gz"
/// );
/// ```
pub fn make_tarball_name(source: &PackageSource) -> Result<String, EncodeError> {
    let raw = match source {
        PackageSource::Semver { name, version } => {
            require_non_empty(name, "name")?;
            require_non_empty(version, "version")?;
            Version::parse(version)
                .map_err(|_| EncodeError::InvalidVersion(version.clone()))?;

            // The only place the signal is ever introduced, and only when
            // the plain join would be ambiguous.
            let separator = if is_version_ambiguous(name, Some(version)) {
                DISAMBIGUATION_SIGNAL
            } else {
                '-'
            };
            format!("{name}{separator}{version}")
        }
        PackageSource::Git {
            domain,
            path,
            commit,
        } => {
            require_non_empty(domain, "domain")?;
            require_non_empty(path, "path")?;
            require_non_empty(commit, "commit")?;
            if !grammar::commit_pattern().is_match(commit) {
                return Err(EncodeError::InvalidCommit(commit.clone()));
            }
            format!("{domain}/{path}#{commit}")
        }
        PackageSource::Url { url } => {
            require_non_empty(url, "url")?;
            let (host, path) = split_source_url(url)?;
            format!("{host}{path}")
        }
    };

    // Mainly relevant to the url variant, whose source path may already
    // carry a tarball suffix.
    let named = if has_tarball_extension(&raw) {
        raw
    } else {
        format!("{raw}.tar.gz")
    };

    Ok(escape_path_segment(&named))
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMMIT: &str = "abababababababababababababababababababab";

    fn semver_source(name: &str, version: &str) -> PackageSource {
        PackageSource::Semver {
            name: name.to_string(),
            version: version.to_string(),
        }
    }

    fn git_source(domain: &str, path: &str, commit: &str) -> PackageSource {
        PackageSource::Git {
            domain: domain.to_string(),
            path: path.to_string(),
            commit: commit.to_string(),
        }
    }

    fn url_source(url: &str) -> PackageSource {
        PackageSource::Url {
            url: url.to_string(),
        }
    }

    // ========================================================================
    // Semver variant
    // ========================================================================

    #[test]
    fn test_plain_semver_name() {
        assert_eq!(
            make_tarball_name(&semver_source("my-package", "1.2.3")).unwrap(),
            "my-package-1.2.3.tar.gz"
        );
    }

    #[test]
    fn test_prerelease_and_build_embedded_verbatim() {
        assert_eq!(
            make_tarball_name(&semver_source("pkg", "1.2.3-beta.4+build.7")).unwrap(),
            "pkg-1.2.3-beta.4+build.7.tar.gz"
        );
    }

    #[test]
    fn test_signal_inserted_only_when_ambiguous() {
        assert_eq!(
            make_tarball_name(&semver_source("my-package-1.2.3", "4.5.6")).unwrap(),
            "my-package-1.2.3!4.5.6.tar.gz"
        );
        assert_eq!(
            make_tarball_name(&semver_source("pkg", "1.2.3-4.5.6")).unwrap(),
            "pkg!1.2.3-4.5.6.tar.gz"
        );
        // A pre-release alone does not trigger the signal.
        assert_eq!(
            make_tarball_name(&semver_source("pkg", "1.2.3-beta")).unwrap(),
            "pkg-1.2.3-beta.tar.gz"
        );
    }

    #[test]
    fn test_scoped_name_is_escaped() {
        assert_eq!(
            make_tarball_name(&semver_source("@scope/pkg", "1.2.3")).unwrap(),
            "@scope%2Fpkg-1.2.3.tar.gz"
        );
    }

    #[test]
    fn test_invalid_versions_rejected() {
        for version in ["1.2", "1.2.3.4", "01.2.3", "1.2.3-00", "v1.2.3", "abc"] {
            assert_eq!(
                make_tarball_name(&semver_source("pkg", version)),
                Err(EncodeError::InvalidVersion(version.to_string())),
                "version {version:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_empty_semver_fields_rejected() {
        assert_eq!(
            make_tarball_name(&semver_source("", "1.2.3")),
            Err(EncodeError::MissingField("name"))
        );
        assert_eq!(
            make_tarball_name(&semver_source("pkg", "")),
            Err(EncodeError::MissingField("version"))
        );
    }

    // ========================================================================
    // Git variant
    // ========================================================================

    #[test]
    fn test_git_filename_composition() {
        assert_eq!(
            make_tarball_name(&git_source("example.com", "user/project", COMMIT)).unwrap(),
            format!("example.com%2Fuser%2Fproject%23{COMMIT}.tar.gz")
        );
    }

    #[test]
    fn test_git_commit_length_enforced() {
        assert_eq!(
            make_tarball_name(&git_source("example.com", "user/project", &COMMIT[..39])),
            Err(EncodeError::InvalidCommit(COMMIT[..39].to_string()))
        );
        let long = format!("{COMMIT}a");
        assert_eq!(
            make_tarball_name(&git_source("example.com", "user/project", &long)),
            Err(EncodeError::InvalidCommit(long))
        );
    }

    #[test]
    fn test_git_commit_hex_enforced() {
        let bad = format!("{}g", &COMMIT[..39]);
        assert_eq!(
            make_tarball_name(&git_source("example.com", "user/project", &bad)),
            Err(EncodeError::InvalidCommit(bad))
        );
    }

    #[test]
    fn test_empty_git_fields_rejected() {
        assert_eq!(
            make_tarball_name(&git_source("", "user/project", COMMIT)),
            Err(EncodeError::MissingField("domain"))
        );
        assert_eq!(
            make_tarball_name(&git_source("example.com", "", COMMIT)),
            Err(EncodeError::MissingField("path"))
        );
        assert_eq!(
            make_tarball_name(&git_source("example.com", "user/project", "")),
            Err(EncodeError::MissingField("commit"))
        );
    }

    // ========================================================================
    // URL variant
    // ========================================================================

    #[test]
    fn test_url_keeps_existing_extension() {
        assert_eq!(
            make_tarball_name(&url_source("https://example.com/downloads/pkg.tgz")).unwrap(),
            "example.com%2Fdownloads%2Fpkg.tgz"
        );
    }

    #[test]
    fn test_url_without_extension_gets_default() {
        assert_eq!(
            make_tarball_name(&url_source("https://example.com/downloads/pkg")).unwrap(),
            "example.com%2Fdownloads%2Fpkg.tar.gz"
        );
    }

    #[test]
    fn test_url_extension_case_recognized() {
        assert_eq!(
            make_tarball_name(&url_source("https://example.com/x.TAR.GZ")).unwrap(),
            "example.com%2Fx.TAR.GZ"
        );
    }

    #[test]
    fn test_unusable_urls_rejected() {
        for url in [
            "example.com/pkg.tgz",        // no scheme
            "://example.com/pkg.tgz",     // empty scheme
            "1https://example.com/pkg",   // scheme must start alphabetic
            "https://example.com",        // no path
            "https://example.com/",       // bare root path
            "https:///pkg.tgz",           // empty host
        ] {
            assert_eq!(
                make_tarball_name(&url_source(url)),
                Err(EncodeError::InvalidUrl(url.to_string())),
                "url {url:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_empty_url_rejected() {
        assert_eq!(
            make_tarball_name(&url_source("")),
            Err(EncodeError::MissingField("url"))
        );
    }

    // ========================================================================
    // Output contract
    // ========================================================================

    #[test]
    fn test_output_always_has_tarball_extension() {
        let sources = [
            semver_source("pkg", "1.2.3"),
            git_source("example.com", "user/project", COMMIT),
            url_source("https://example.com/a/b"),
            url_source("https://example.com/a/b.tar"),
        ];
        for source in &sources {
            let filename = make_tarball_name(source).unwrap();
            assert!(
                crate::has_tarball_extension(&filename),
                "{filename:?} lacks a tarball extension"
            );
        }
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            EncodeError::MissingField("name").to_string(),
            "missing required field: name"
        );
        assert_eq!(
            EncodeError::InvalidVersion("1.2".to_string()).to_string(),
            "invalid semver version: 1.2"
        );
        assert_eq!(
            EncodeError::InvalidCommit("abc".to_string()).to_string(),
            "invalid commit hash: abc"
        );
        assert_eq!(
            EncodeError::InvalidUrl("x".to_string()).to_string(),
            "unusable source url: x"
        );
    }
}
