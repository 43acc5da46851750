//! Range - disjunction of comparator sets

use std::fmt;
use std::str::FromStr;

use super::ComparatorSet;
use crate::error::SemverError;
use crate::version_parser::VersionParser;
use crate::{SatisfyOptions, Version};

/// A parsed range expression such as `^1.2.3` or `>=1.0.0 <2.0.0 || 3.x`.
#[derive(Debug, Clone)]
pub struct Range {
    sets: Vec<ComparatorSet>,
    pretty_string: String,
}

impl Range {
    pub(crate) fn new(sets: Vec<ComparatorSet>, pretty_string: String) -> Self {
        Range {
            sets,
            pretty_string,
        }
    }

    /// Parse a range expression
    pub fn parse(range: &str) -> Result<Self, SemverError> {
        VersionParser::new().parse_range(range)
    }

    /// The alternatives of this range; at least one is always present
    pub fn sets(&self) -> &[ComparatorSet] {
        &self.sets
    }

    /// The range text as originally written
    pub fn pretty_string(&self) -> &str {
        &self.pretty_string
    }

    /// Check whether a version satisfies any alternative of this range
    pub fn satisfies(&self, version: &Version, options: SatisfyOptions) -> bool {
        self.sets.iter().any(|set| set.satisfies(version, options))
    }
}

impl PartialEq for Range {
    fn eq(&self, other: &Self) -> bool {
        self.sets == other.sets
    }
}

impl Eq for Range {}

impl FromStr for Range {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Range::parse(s)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sets: Vec<String> = self.sets.iter().map(|s| s.to_string()).collect();
        write!(f, "{}", sets.join(" || "))
    }
}
