//! Tarname - reversible tarball filename codec.
//!
//! This library is a bidirectional codec between a structured package
//! identity (how a tarball was obtained: registry semantic version, git
//! commit, or arbitrary URL) and a single URL-safe filename, so a tarball's
//! origin can be recovered from its filename alone. It is built for
//! download-tracking and caching tools that keep tarballs in a flat
//! directory.
//!
//! # Overview
//!
//! Four public operations:
//!
//! - [`parse`]: filename → [`Descriptor`] (or `None` for "not a recognized
//!   tarball filename")
//! - [`make_tarball_name`]: [`PackageSource`] → canonical filename
//! - [`is_version_ambiguous`]: does a name/version join admit more than one
//!   valid split?
//! - [`has_tarball_extension`]: cheap suffix pre-filter
//!
//! Encode and decode are mutual inverses on required fields. The encoder's
//! output is always fully percent-encoded and always ends in `.tar`,
//! `.tgz`, or `.tar.gz`; when a plain `name-version` join would be
//! ambiguous, the reserved [`DISAMBIGUATION_SIGNAL`] separates the two
//! instead, and the decoder honors only the strict grammar for such names.
//!
//! All operations are pure functions; the only shared state is the
//! compiled-pattern table, initialized once and never mutated, so the whole
//! API is freely usable across threads.
//!
//! # Example
//!
//! ```
//! use tarname::{make_tarball_name, parse, Descriptor, PackageSource};
//!
//! let source = PackageSource::Semver {
//!     name: "my-package".to_string(),
//!     version: "1.2.3-beta.4".to_string(),
//! };
//! let filename = make_tarball_name(&source).unwrap();
//! assert_eq!(filename, "my-package-1.2.3-beta.4.tar.gz");
//!
//! match parse(&filename) {
//!     Some(Descriptor::Semver(d)) => {
//!         assert_eq!(d.package_name, "my-package");
//!         assert_eq!(d.version_comparable, "1.2.3-beta.4");
//!     }
//!     other => panic!("unexpected parse result: {other:?}"),
//! }
//! ```

mod ambiguity;
mod descriptor;
mod encode;
mod escape;
mod extension;
mod grammar;
mod parse;

// Descriptors
pub use descriptor::{Descriptor, GitDescriptor, SemverDescriptor, UrlDescriptor};

// Codec operations
pub use ambiguity::is_version_ambiguous;
pub use encode::{make_tarball_name, EncodeError, PackageSource};
pub use extension::has_tarball_extension;
pub use parse::parse;

// Grammar constants
pub use grammar::DISAMBIGUATION_SIGNAL;
