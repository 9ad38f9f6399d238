//! Pattern definitions for the tarball filename grammars.
//!
//! This module is the single source of truth for every grammar in the codec:
//! the package-name character classes, the semver fragments, the commit-hash
//! and tarball-extension grammars, and the composite filename grammars built
//! from them. All other modules obtain their compiled patterns here rather
//! than writing regexes directly.
//!
//! Patterns are compiled once per process behind `OnceLock` accessors and
//! never mutated, so concurrent use needs no coordination.

use std::sync::OnceLock;

use regex::Regex;

/// Reserved separator inserted between name and version when a plain hyphen
/// join would be ambiguous.
///
/// The character is legal in a URL path segment, is never produced by the
/// name or version grammars, and is left unescaped by the encoder, so a
/// signaled filename stays readable.
pub const DISAMBIGUATION_SIGNAL: char = '!';

/// Unscoped package name: leading alphanumeric, then word characters,
/// dots, and hyphens.
const UNSCOPED_NAME: &str = "[A-Za-z0-9][A-Za-z0-9_.-]*";

/// Lazy variant of [`UNSCOPED_NAME`] used by the loose composite grammar.
///
/// The lazy tail makes the name claim as little as possible, so the
/// name/version boundary lands on the earliest hyphen that leaves a valid
/// semver behind it.
const UNSCOPED_NAME_LAZY: &str = "[A-Za-z0-9][A-Za-z0-9_.-]*?";

/// Optional `@scope/` prefix for scoped package names.
const SCOPE_PREFIX: &str = "(?:@[A-Za-z0-9][A-Za-z0-9_.-]*/)?";

/// Three dot-separated non-negative integers, no leading zeros except the
/// literal `0`.
const NUMERIC_TRIPLET: &str = r"(?:0|[1-9]\d*)\.(?:0|[1-9]\d*)\.(?:0|[1-9]\d*)";

/// A single semver pre-release identifier: either numeric without leading
/// zeros, or alphanumeric/hyphen containing at least one non-digit.
const PRERELEASE_IDENT: &str = "(?:0|[1-9][0-9]*|[0-9]*[A-Za-z-][0-9A-Za-z-]*)";

/// A single semver build identifier: alphanumeric/hyphen, no numeric
/// restriction.
const BUILD_IDENT: &str = "[0-9A-Za-z-]+";

/// Exactly 40 hexadecimal characters.
const COMMIT_HASH: &str = "[0-9a-fA-F]{40}";

/// Recognized tarball suffixes, case-insensitive.
const TARBALL_EXTENSION: &str = r"(?i:\.tar\.gz|\.tgz|\.tar)";

fn prerelease_fragment() -> String {
    format!("{PRERELEASE_IDENT}(?:\\.{PRERELEASE_IDENT})*")
}

fn build_fragment() -> String {
    format!("{BUILD_IDENT}(?:\\.{BUILD_IDENT})*")
}

/// The shared version-and-extension tail of both composite semver grammars.
///
/// Capture groups, relative to the enclosing composite:
/// - comparable version (triplet plus optional `-prerelease`, never build)
/// - bare numeric triplet
/// - pre-release (optional)
/// - build (optional)
/// - extension, case as written
fn version_tail_fragment() -> String {
    format!(
        "(({NUMERIC_TRIPLET})(?:-({prerelease}))?)(?:\\+({build}))?({TARBALL_EXTENSION})",
        prerelease = prerelease_fragment(),
        build = build_fragment(),
    )
}

/// Strict composite filename grammar: `name!version.extension`.
///
/// Requires the explicit [`DISAMBIGUATION_SIGNAL`] between name and version.
/// Groups: 1 name, 2 comparable version, 3 numeric triplet, 4 pre-release,
/// 5 build, 6 extension.
pub(crate) fn strict_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(&format!(
            "^({SCOPE_PREFIX}{UNSCOPED_NAME}){DISAMBIGUATION_SIGNAL}{tail}$",
            tail = version_tail_fragment(),
        ))
        .unwrap()
    })
}

/// Loose composite filename grammar: `name-version.extension`.
///
/// The boundary between name and version is inferred from the name grammar's
/// lazy tail; callers must screen out ambiguous inputs first. Same group
/// layout as [`strict_pattern`].
pub(crate) fn loose_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(&format!(
            "^({SCOPE_PREFIX}{UNSCOPED_NAME_LAZY})-{tail}$",
            tail = version_tail_fragment(),
        ))
        .unwrap()
    })
}

/// Git composite filename grammar: `domain/path#commit.extension`.
///
/// Groups: 1 domain, 2 path, 3 commit, 4 extension.
pub(crate) fn git_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(&format!(
            "^([A-Za-z0-9.-]+)/([A-Za-z0-9._/-]+)#({COMMIT_HASH})({TARBALL_EXTENSION})$"
        ))
        .unwrap()
    })
}

/// Tarball-extension grammar anchored at the end of the string.
pub(crate) fn extension_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(&format!("{TARBALL_EXTENSION}$")).unwrap())
}

/// The ambiguity pattern: two numeric triplets joined by a hyphen, followed
/// immediately by end-of-string, a tarball extension, or a pre-release/build
/// delimiter.
///
/// The follower is consumed rather than asserted via lookahead (the `regex`
/// crate has none), which is equivalent for a boolean match.
pub(crate) fn ambiguity_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(&format!(
            "{NUMERIC_TRIPLET}-{NUMERIC_TRIPLET}(?:[-+]|{TARBALL_EXTENSION}$|$)"
        ))
        .unwrap()
    })
}

/// Whole-string commit-hash grammar for encoder-side validation.
pub(crate) fn commit_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(&format!("^{COMMIT_HASH}$")).unwrap())
}
