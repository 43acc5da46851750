//! Semver facade providing high-level version operations

use crate::{Range, SatisfyOptions, SemverError, Version, VersionParser};

/// Main facade for semantic versioning operations
pub struct Semver;

impl Semver {
    /// Parse a full version string
    pub fn parse_version(version: &str) -> Result<Version, SemverError> {
        VersionParser::new().parse_version(version)
    }

    /// Parse a range and return a reusable representation
    pub fn parse_range(range: &str) -> Result<Range, SemverError> {
        VersionParser::new().parse_range(range)
    }

    /// Check if a version satisfies a range.
    ///
    /// An unparsable version or range never satisfies anything.
    pub fn satisfies(version: &str, range: &str, options: SatisfyOptions) -> bool {
        match Self::try_satisfies(version, range, options) {
            Ok(satisfied) => satisfied,
            Err(e) => {
                log::debug!("{}", e);
                false
            }
        }
    }

    /// Check if a version satisfies a range, surfacing parse errors
    pub fn try_satisfies(version: &str, range: &str, options: SatisfyOptions) -> Result<bool, SemverError> {
        let parser = VersionParser::new();
        let version = parser.parse_version(version)?;
        let range = parser.parse_range(range)?;

        Ok(range.satisfies(&version, options))
    }

    /// Return all versions that satisfy the given range, in input order
    pub fn satisfied_by(versions: &[&str], range: &str, options: SatisfyOptions) -> Vec<String> {
        let parser = VersionParser::new();
        let range = match parser.parse_range(range) {
            Ok(r) => r,
            Err(e) => {
                log::debug!("{}", e);
                return Vec::new();
            }
        };

        versions
            .iter()
            .filter_map(|v| {
                let version = parser.parse_version(v).ok()?;
                if range.satisfies(&version, options) {
                    Some(v.to_string())
                } else {
                    None
                }
            })
            .collect()
    }
}
