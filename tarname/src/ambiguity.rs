//! Name/version split ambiguity detection.
//!
//! Hyphen-delimited identifiers cannot always be split back into a name and
//! a version: `pkg-1.2.3-4.5.6` reads either as name `pkg` with version
//! `1.2.3-4.5.6` (triplet plus numeric pre-release, both legal) or as name
//! `pkg-1.2.3` with version `4.5.6`. No syntactic rule picks a winner, so
//! such joins must be signaled out-of-band by the encoder and refused by the
//! decoder's loose grammar.

use crate::grammar;

/// Report whether a name/version join admits more than one valid split.
///
/// With two values, the candidate is their hyphen-joined concatenation; with
/// one, the value is inspected as-is. The candidate is ambiguous when it
/// contains two consecutive numeric triplets joined by a hyphen, immediately
/// followed by end-of-string, a tarball extension, or a pre-release/build
/// delimiter (`-` or `+`).
///
/// A bare version's own pre-release counts: `1.2.3-4.5.6` alone is
/// ambiguous against the empty-name reading.
///
/// # Examples
///
/// ```
/// use tarname::is_version_ambiguous;
///
/// assert!(!is_version_ambiguous("my-package", Some("1.2.3")));
/// assert!(is_version_ambiguous("my-package-1.2.3", Some("4.5.6")));
/// assert!(is_version_ambiguous("my-package-1.2.3-4.5.6", None));
/// assert!(is_version_ambiguous("1.2.3-4.5.6", None));
/// ```
pub fn is_version_ambiguous(name: &str, version: Option<&str>) -> bool {
    match version {
        Some(version) => {
            let candidate = format!("{name}-{version}");
            grammar::ambiguity_pattern().is_match(&candidate)
        }
        None => grammar::ambiguity_pattern().is_match(name),
    }
}
