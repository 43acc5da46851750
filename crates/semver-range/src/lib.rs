//! Semantic versioning library with npm-style range satisfaction
//!
//! This crate parses `major.minor.patch[-pre][+build]` versions and range
//! expressions (caret, tilde, x-ranges, hyphen ranges, comparator lists and
//! `||` alternatives), and checks versions against them. Pre-release versions
//! only satisfy a range that explicitly targets their `major.minor.patch`,
//! unless [`SatisfyOptions::include_prerelease`] is set.

pub mod constraint;
mod error;
mod options;
mod semver;
mod version;
mod version_parser;

pub use constraint::{Comparator, ComparatorSet, Operator, Range};
pub use error::{Result, SemverError};
pub use options::SatisfyOptions;
pub use semver::Semver;
pub use version::{Identifier, Version};
pub use version_parser::VersionParser;
