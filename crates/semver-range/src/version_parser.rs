//! Version and range parsing module

use lazy_static::lazy_static;
use regex::Regex;

use crate::constraint::{Comparator, ComparatorSet, Operator, Range};
use crate::error::{Result, SemverError};
use crate::version::{Identifier, Version};

lazy_static! {
    static ref NUMERIC_REGEX: &'static str = r"0|[1-9]\d*";

    static ref PRERELEASE_REGEX: &'static str = r"[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*";

    static ref BUILD_REGEX: &'static str = r"[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*";

    // The numeric triple alone, used to point errors at the suffix
    static ref VERSION_CORE_RE: Regex = Regex::new(&format!(
        r"^v?(?:{num})\.(?:{num})\.(?:{num})[-+]",
        num = *NUMERIC_REGEX,
    )).unwrap();

    // Full version: major.minor.patch[-pre][+build]
    static ref FULL_VERSION_RE: Regex = Regex::new(&format!(
        r"^v?({num})\.({num})\.({num})(?:-({pre}))?(?:\+({build}))?$",
        num = *NUMERIC_REGEX,
        pre = *PRERELEASE_REGEX,
        build = *BUILD_REGEX,
    )).unwrap();

    // Partial version inside a range; components may be missing or x/X/*
    static ref PARTIAL_VERSION_RE: Regex = Regex::new(&format!(
        r"^v?({x})(?:\.({x})(?:\.({x})(?:-({pre}))?(?:\+{build})?)?)?$",
        x = format!(r"{}|[xX*]", *NUMERIC_REGEX),
        pre = *PRERELEASE_REGEX,
        build = *BUILD_REGEX,
    )).unwrap();

    // Alternatives are separated by ||
    static ref OR_RANGE_RE: Regex = Regex::new(r"\s*\|\|\s*").unwrap();

    // Hyphen Range
    static ref HYPHEN_RE: Regex = Regex::new(r"^(\S+)\s+-\s+(\S+)$").unwrap();

    // Whitespace between an operator and its version
    static ref OPERATOR_GAP_RE: Regex = Regex::new(r"(<=|>=|<|>|=|\^|~>?)\s+").unwrap();

    // Basic comparator
    static ref BASIC_COMPARATOR_RE: Regex = Regex::new(r"^(<=|>=|<|>|=)?(.*)$").unwrap();
}

/// A version as written inside a range, with optional components.
///
/// Once a component is missing every later one is treated as missing too,
/// so `1.x.3` behaves like `1.x`.
#[derive(Debug, Clone, Default)]
struct Partial {
    major: Option<u64>,
    minor: Option<u64>,
    patch: Option<u64>,
    pre: Vec<Identifier>,
}

impl Partial {
    fn is_full(&self) -> bool {
        self.patch.is_some()
    }

    /// Zero-fill the missing components; the pre-release is only kept on a
    /// full version.
    fn floor(&self) -> Option<Version> {
        let major = self.major?;
        let pre = if self.is_full() { self.pre.clone() } else { Vec::new() };
        Some(Version::with_parts(
            major,
            self.minor.unwrap_or(0),
            self.patch.unwrap_or(0),
            pre,
            Vec::new(),
        ))
    }
}

/// Parser for versions and range expressions
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionParser;

impl VersionParser {
    /// Create a new VersionParser
    pub fn new() -> Self {
        VersionParser
    }

    /// Check if a version string is valid
    pub fn is_valid(&self, version: &str) -> bool {
        self.parse_version(version).is_ok()
    }

    /// Parse a full `major.minor.patch[-pre][+build]` version
    pub fn parse_version(&self, version: &str) -> Result<Version> {
        let trimmed = version.trim();

        let caps = FULL_VERSION_RE.captures(trimmed).ok_or_else(|| {
            if VERSION_CORE_RE.is_match(trimmed) {
                SemverError::invalid_version(version, "invalid pre-release or build metadata")
            } else {
                SemverError::invalid_version(version, "expected major.minor.patch[-prerelease][+build]")
            }
        })?;

        let component = |index: usize| -> Result<u64> {
            let text = caps.get(index).map_or("", |m| m.as_str());
            text.parse()
                .map_err(|_| SemverError::invalid_version(version, format!("component {} is too large", text)))
        };

        let major = component(1)?;
        let minor = component(2)?;
        let patch = component(3)?;

        let pre = match caps.get(4) {
            Some(m) => parse_identifiers(m.as_str())
                .map_err(|reason| SemverError::invalid_version(version, reason))?,
            None => Vec::new(),
        };

        let build = caps
            .get(5)
            .map(|m| m.as_str().split('.').map(str::to_string).collect())
            .unwrap_or_default();

        Ok(Version::with_parts(major, minor, patch, pre, build))
    }

    /// Parse a range expression into its comparator sets
    pub fn parse_range(&self, range: &str) -> Result<Range> {
        let pretty_string = range.to_string();
        let trimmed = range.trim();

        if trimmed.is_empty() {
            log::trace!("empty range, matching any version");
            return Ok(Range::new(vec![ComparatorSet::any()], pretty_string));
        }

        let alternatives: Vec<&str> = OR_RANGE_RE.split(trimmed).collect();

        if alternatives.first().map_or(false, |s| s.is_empty()) {
            return Err(SemverError::invalid_range(range, "leading || operator"));
        }
        if alternatives.last().map_or(false, |s| s.is_empty()) {
            return Err(SemverError::invalid_range(range, "trailing || operator"));
        }

        let mut sets = Vec::with_capacity(alternatives.len());
        for alternative in alternatives {
            if alternative.is_empty() {
                return Err(SemverError::invalid_range(range, "empty alternative between || operators"));
            }
            sets.push(self.parse_comparator_set(range, alternative)?);
        }

        let parsed = Range::new(sets, pretty_string);
        log::trace!("parsed range \"{}\" as {}", range, parsed);

        Ok(parsed)
    }

    /// Parse one `||` alternative into a conjunction of comparators
    fn parse_comparator_set(&self, range: &str, alternative: &str) -> Result<ComparatorSet> {
        if let Some(caps) = HYPHEN_RE.captures(alternative) {
            let from = caps.get(1).map_or("", |m| m.as_str());
            let to = caps.get(2).map_or("", |m| m.as_str());
            return Ok(ComparatorSet::new(self.parse_hyphen_range(range, from, to)?));
        }

        let collapsed = OPERATOR_GAP_RE.replace_all(alternative, "$1");

        let mut comparators = Vec::new();
        for token in collapsed.split_whitespace() {
            comparators.extend(self.parse_comparator(range, token)?);
        }

        Ok(ComparatorSet::new(comparators))
    }

    fn parse_comparator(&self, range: &str, token: &str) -> Result<Vec<Comparator>> {
        // Caret Range
        if let Some(rest) = token.strip_prefix('^') {
            let partial = self.parse_partial(range, rest)?;
            return self.parse_caret_range(range, &partial);
        }

        // Tilde Range
        if let Some(rest) = token.strip_prefix('~') {
            let rest = rest.strip_prefix('>').unwrap_or(rest);
            let partial = self.parse_partial(range, rest)?;
            return self.parse_tilde_range(range, &partial);
        }

        // Basic comparators and x-ranges
        let caps = BASIC_COMPARATOR_RE
            .captures(token)
            .ok_or_else(|| SemverError::invalid_range(range, format!("could not parse \"{}\"", token)))?;
        let operator: Operator = caps.get(1).map_or("", |m| m.as_str()).parse()?;
        let version = caps.get(2).map_or("", |m| m.as_str());

        let partial = self.parse_partial(range, version)?;
        self.parse_primitive(range, operator, &partial)
    }

    fn parse_partial(&self, range: &str, text: &str) -> Result<Partial> {
        let caps = PARTIAL_VERSION_RE
            .captures(text)
            .ok_or_else(|| SemverError::invalid_range(range, format!("invalid version \"{}\"", text)))?;

        let mut components = [None; 3];
        for (i, slot) in components.iter_mut().enumerate() {
            let part = match caps.get(i + 1) {
                Some(m) => m.as_str(),
                None => break,
            };
            if matches!(part, "x" | "X" | "*") {
                break;
            }
            let value = part
                .parse::<u64>()
                .map_err(|_| SemverError::invalid_range(range, format!("component {} is too large", part)))?;
            *slot = Some(value);
        }

        let pre = match caps.get(4) {
            Some(m) if components[2].is_some() => {
                parse_identifiers(m.as_str()).map_err(|reason| SemverError::invalid_range(range, reason))?
            }
            _ => Vec::new(),
        };

        Ok(Partial {
            major: components[0],
            minor: components[1],
            patch: components[2],
            pre,
        })
    }

    /// `^X.Y.Z` allows changes that do not modify the left-most non-zero component
    fn parse_caret_range(&self, range: &str, partial: &Partial) -> Result<Vec<Comparator>> {
        let lower = match partial.floor() {
            Some(lower) => lower,
            None => return Ok(Vec::new()),
        };
        let major = lower.major();
        let minor = lower.minor();

        let upper = match (partial.minor, partial.patch) {
            (None, _) => Version::new(increment(range, major)?, 0, 0),
            _ if major > 0 => Version::new(increment(range, major)?, 0, 0),
            (Some(_), None) => Version::new(0, increment(range, minor)?, 0),
            _ if minor > 0 => Version::new(0, increment(range, minor)?, 0),
            (Some(_), Some(patch)) => Version::new(0, 0, increment(range, patch)?),
        };

        Ok(vec![
            Comparator::new(Operator::GreaterThanOrEqual, lower),
            Comparator::new(Operator::LessThan, upper),
        ])
    }

    /// `~X.Y.Z` allows patch-level changes, `~X` minor-level changes
    fn parse_tilde_range(&self, range: &str, partial: &Partial) -> Result<Vec<Comparator>> {
        let lower = match partial.floor() {
            Some(lower) => lower,
            None => return Ok(Vec::new()),
        };
        let upper = next_boundary(range, lower.major(), partial.minor)?;

        Ok(vec![
            Comparator::new(Operator::GreaterThanOrEqual, lower),
            Comparator::new(Operator::LessThan, upper),
        ])
    }

    /// An operator applied to a possibly partial version
    fn parse_primitive(&self, range: &str, operator: Operator, partial: &Partial) -> Result<Vec<Comparator>> {
        let major = match partial.major {
            Some(major) => major,
            None => {
                return Ok(match operator {
                    // Nothing is above or below every version
                    Operator::LessThan | Operator::GreaterThan => vec![Comparator::new(
                        Operator::LessThan,
                        Version::with_parts(0, 0, 0, vec![Identifier::Numeric(0)], Vec::new()),
                    )],
                    _ => Vec::new(),
                });
            }
        };

        let floor = match partial.floor() {
            Some(floor) if partial.is_full() => return Ok(vec![Comparator::new(operator, floor)]),
            Some(floor) => floor,
            None => return Ok(Vec::new()),
        };

        let comparators = match operator {
            Operator::Equal => vec![
                Comparator::new(Operator::GreaterThanOrEqual, floor),
                Comparator::new(Operator::LessThan, next_boundary(range, major, partial.minor)?),
            ],
            Operator::GreaterThan => vec![Comparator::new(
                Operator::GreaterThanOrEqual,
                next_boundary(range, major, partial.minor)?,
            )],
            Operator::GreaterThanOrEqual => vec![Comparator::new(Operator::GreaterThanOrEqual, floor)],
            Operator::LessThan => vec![Comparator::new(Operator::LessThan, floor)],
            Operator::LessThanOrEqual => vec![Comparator::new(
                Operator::LessThan,
                next_boundary(range, major, partial.minor)?,
            )],
        };

        Ok(comparators)
    }

    /// `A - B` is an inclusive range; a partial `B` covers its whole prefix
    fn parse_hyphen_range(&self, range: &str, from: &str, to: &str) -> Result<Vec<Comparator>> {
        let from = self.parse_partial(range, from)?;
        let to = self.parse_partial(range, to)?;

        let mut comparators = Vec::with_capacity(2);

        if let Some(lower) = from.floor() {
            comparators.push(Comparator::new(Operator::GreaterThanOrEqual, lower));
        }

        match to.floor() {
            Some(upper) if to.is_full() => {
                comparators.push(Comparator::new(Operator::LessThanOrEqual, upper));
            }
            Some(upper) => {
                let boundary = next_boundary(range, upper.major(), to.minor)?;
                comparators.push(Comparator::new(Operator::LessThan, boundary));
            }
            None => {}
        }

        Ok(comparators)
    }
}

/// The first version past the given prefix: `M` -> `(M+1).0.0`, `M.m` -> `M.(m+1).0`
fn next_boundary(range: &str, major: u64, minor: Option<u64>) -> Result<Version> {
    Ok(match minor {
        None => Version::new(increment(range, major)?, 0, 0),
        Some(minor) => Version::new(major, increment(range, minor)?, 0),
    })
}

fn increment(range: &str, value: u64) -> Result<u64> {
    value
        .checked_add(1)
        .ok_or_else(|| SemverError::invalid_range(range, format!("cannot increment {}", value)))
}

fn parse_identifiers(pre: &str) -> std::result::Result<Vec<Identifier>, String> {
    pre.split('.')
        .map(|part| {
            if part.bytes().all(|b| b.is_ascii_digit()) {
                part.parse()
                    .map(Identifier::Numeric)
                    .map_err(|_| format!("pre-release identifier {} is too large", part))
            } else {
                Ok(Identifier::AlphaNumeric(part.to_string()))
            }
        })
        .collect()
}
