//! Decoding tarball filenames back into package identity descriptors.
//!
//! [`parse`] runs a deterministic priority cascade: character gate, percent
//! decode, strict-or-loose semver grammar (guarded by the ambiguity
//! detector), git grammar, generic URL shape. The ordering is load-bearing:
//! a signaled strict string must never fall through to a looser semver
//! reading, and an unsignaled-but-ambiguous string must never be silently
//! resolved as semver even though it would loosely match.

use tracing::trace;

use crate::ambiguity::is_version_ambiguous;
use crate::descriptor::{Descriptor, GitDescriptor, SemverDescriptor, UrlDescriptor};
use crate::escape::percent_decode_strict;
use crate::grammar::{self, DISAMBIGUATION_SIGNAL};

/// Characters illegal in a URL path segment. Valid inputs carry these only
/// in percent-encoded form, so their raw presence disqualifies a filename
/// before any decoding happens.
const ILLEGAL_SEGMENT_CHARS: &[char] = &[
    '#', '$', '^', '&', '{', '}', '|', ':', '"', '<', '>', '?', '`', '=', '[', ']', '\\', ';',
    ',', '/',
];

fn passes_character_gate(filename: &str) -> bool {
    if filename.starts_with('.') || filename.starts_with('_') {
        return false;
    }
    !filename
        .chars()
        .any(|c| ILLEGAL_SEGMENT_CHARS.contains(&c) || c.is_whitespace() || c.is_control())
}

/// Both composite semver grammars share one capture layout.
fn semver_from_captures(caps: &regex::Captures<'_>) -> SemverDescriptor {
    SemverDescriptor {
        package_name: caps.get(1).unwrap().as_str().to_string(),
        version_comparable: caps.get(2).unwrap().as_str().to_string(),
        version_numeric: caps.get(3).unwrap().as_str().to_string(),
        prerelease: caps.get(4).map(|m| m.as_str().to_string()),
        build: caps.get(5).map(|m| m.as_str().to_string()),
        extension: caps.get(6).unwrap().as_str().to_string(),
    }
}

/// Decode a filename into a package identity descriptor.
///
/// Returns `None` when the string is not a recognized tarball filename;
/// "no match" is the expected signal, not an error, so callers can probe
/// arbitrary strings safely.
///
/// # Examples
///
/// ```
/// use tarname::{parse, Descriptor};
///
/// match parse("my-package-1.2.3-beta.4.tar.gz") {
///     Some(Descriptor::Semver(d)) => {
///         assert_eq!(d.package_name, "my-package");
///         assert_eq!(d.version_comparable, "1.2.3-beta.4");
///         assert_eq!(d.version_numeric, "1.2.3");
///         assert_eq!(d.prerelease.as_deref(), Some("beta.4"));
///     }
///     other => panic!("unexpected: {other:?}"),
/// }
///
/// assert!(parse("package.json").is_none());
/// assert!(parse("my-package@6.6.6").is_none());
/// ```
pub fn parse(filename: &str) -> Option<Descriptor> {
    if !passes_character_gate(filename) {
        trace!(filename = %filename, "filename rejected by character gate");
        return None;
    }

    let Some(decoded) = percent_decode_strict(filename) else {
        trace!(filename = %filename, "filename carries malformed percent escapes");
        return None;
    };

    if decoded.contains(DISAMBIGUATION_SIGNAL) {
        // A signaled filename may only be read through the strict grammar.
        if let Some(caps) = grammar::strict_pattern().captures(&decoded) {
            trace!(filename = %filename, "matched strict semver grammar");
            return Some(Descriptor::Semver(semver_from_captures(&caps)));
        }
    } else if is_version_ambiguous(&decoded, None) {
        // More than one valid name/version split exists and nothing signals
        // the intended one; fail closed rather than guess.
        trace!(filename = %filename, "ambiguous name/version split, skipping semver grammars");
    } else if let Some(caps) = grammar::loose_pattern().captures(&decoded) {
        trace!(filename = %filename, "matched loose semver grammar");
        return Some(Descriptor::Semver(semver_from_captures(&caps)));
    }

    if let Some(caps) = grammar::git_pattern().captures(&decoded) {
        trace!(filename = %filename, "matched git grammar");
        return Some(Descriptor::Git(GitDescriptor {
            domain: caps.get(1).unwrap().as_str().to_string(),
            path: caps.get(2).unwrap().as_str().to_string(),
            commit: caps.get(3).unwrap().as_str().to_string(),
            extension: caps.get(4).unwrap().as_str().to_string(),
        }));
    }

    // Generic URL shape: a directory part and a final path component, both
    // non-empty. Shape only; no scheme or reachability checks.
    if let Some((dir, base)) = decoded.rsplit_once('/') {
        if !dir.is_empty() && !base.is_empty() {
            trace!(filename = %filename, "matched generic url shape");
            return Some(Descriptor::Url(UrlDescriptor { url: decoded }));
        }
    }

    None
}
