//! Package identity descriptors.
//!
//! A [`Descriptor`] records how a tarball was obtained: a registry semantic
//! version, a git commit, or an arbitrary URL. Descriptors are pure value
//! objects built fresh on every encode or decode call; they carry no
//! identity beyond their fields and are never persisted in memory.
//!
//! The serde representation is internally tagged with a `type` field
//! (`"semver"`, `"git"`, `"url"`), so tracking tools can persist parse
//! results in the same tagged-record shape the codec is defined over.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A tarball origin recovered from (or destined for) a filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Descriptor {
    /// Registry package at a semantic version.
    Semver(SemverDescriptor),
    /// Git repository at an exact commit.
    Git(GitDescriptor),
    /// Arbitrary URL, identified by shape only.
    Url(UrlDescriptor),
}

impl Descriptor {
    /// The variant tag as it appears in the serde form.
    pub fn kind(&self) -> &'static str {
        match self {
            Descriptor::Semver(_) => "semver",
            Descriptor::Git(_) => "git",
            Descriptor::Url(_) => "url",
        }
    }

    /// The captured tarball extension, if the variant records one.
    ///
    /// The URL variant holds its extension (if any) inside the URL itself.
    pub fn extension(&self) -> Option<&str> {
        match self {
            Descriptor::Semver(d) => Some(&d.extension),
            Descriptor::Git(d) => Some(&d.extension),
            Descriptor::Url(_) => None,
        }
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Descriptor::Semver(d) => d.fmt(f),
            Descriptor::Git(d) => d.fmt(f),
            Descriptor::Url(d) => d.fmt(f),
        }
    }
}

/// Registry package identity: name plus semantic version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemverDescriptor {
    /// Package name, possibly scoped as `@scope/name`.
    pub package_name: String,

    /// Numeric triplet plus optional `-prerelease`. Build metadata is never
    /// part of this field; precedence-relevant content only.
    pub version_comparable: String,

    /// Bare numeric triplet.
    pub version_numeric: String,

    /// Pre-release portion, when present.
    pub prerelease: Option<String>,

    /// Build metadata, when present. Carried separately so callers can
    /// re-attach it; it never participates in version comparison.
    pub build: Option<String>,

    /// Tarball extension, case as captured from the filename.
    pub extension: String,
}

impl fmt::Display for SemverDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} v{}", self.package_name, self.version_comparable)?;
        if let Some(build) = &self.build {
            write!(f, "+{build}")?;
        }
        Ok(())
    }
}

/// Git repository identity: host, path, and exact commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitDescriptor {
    /// Repository host, e.g. `example.com`.
    pub domain: String,

    /// Repository path under the host, e.g. `user/project`.
    pub path: String,

    /// Exactly 40 hexadecimal characters.
    pub commit: String,

    /// Tarball extension, case as captured from the filename.
    pub extension: String,
}

impl GitDescriptor {
    /// Full repository identifier, derived as `domain + "/" + path`.
    pub fn repo(&self) -> String {
        format!("{}/{}", self.domain, self.path)
    }
}

impl fmt::Display for GitDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Fields are public, so a caller-built descriptor may hold a commit
        // shorter than the abbreviation width.
        let short = self.commit.get(..7).unwrap_or(&self.commit);
        write!(f, "{}@{}", self.repo(), short)
    }
}

/// URL identity: the decoded literal host and path, scheme not guaranteed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlDescriptor {
    /// Decoded host+path string, held verbatim.
    pub url: String,
}

impl fmt::Display for UrlDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
