//! ComparatorSet - conjunction of comparators

use std::fmt;

use super::Comparator;
use crate::{SatisfyOptions, Version};

/// Comparators that must all hold. An empty set matches every version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ComparatorSet {
    comparators: Vec<Comparator>,
}

impl ComparatorSet {
    pub fn new(comparators: Vec<Comparator>) -> Self {
        ComparatorSet { comparators }
    }

    /// A set that matches any version (`*`)
    pub fn any() -> Self {
        ComparatorSet::default()
    }

    pub fn comparators(&self) -> &[Comparator] {
        &self.comparators
    }

    pub fn is_any(&self) -> bool {
        self.comparators.is_empty()
    }

    /// Check whether the candidate satisfies every comparator.
    ///
    /// Unless `include_prerelease` is set, a pre-release candidate is only
    /// eligible when some comparator carries a pre-release on the same
    /// `major.minor.patch`.
    pub fn satisfies(&self, version: &Version, options: SatisfyOptions) -> bool {
        if !self.comparators.iter().all(|c| c.test(version)) {
            return false;
        }

        if version.is_prerelease() && !options.include_prerelease {
            return self
                .comparators
                .iter()
                .any(|c| c.admits_prerelease_of(version));
        }

        true
    }
}

impl fmt::Display for ComparatorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.comparators.is_empty() {
            return write!(f, "*");
        }

        let parts: Vec<String> = self.comparators.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::Operator;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    fn caret_one() -> ComparatorSet {
        ComparatorSet::new(vec![
            Comparator::new(Operator::GreaterThanOrEqual, v("1.0.0")),
            Comparator::new(Operator::LessThan, v("2.0.0")),
        ])
    }

    #[test]
    fn test_all_comparators_must_hold() {
        let set = caret_one();
        assert!(set.satisfies(&v("1.0.0"), SatisfyOptions::default()));
        assert!(set.satisfies(&v("1.9.9"), SatisfyOptions::default()));
        assert!(!set.satisfies(&v("2.0.0"), SatisfyOptions::default()));
        assert!(!set.satisfies(&v("0.9.0"), SatisfyOptions::default()));
    }

    #[test]
    fn test_prerelease_gated_by_default() {
        let set = caret_one();
        assert!(!set.satisfies(&v("1.1.0-canary"), SatisfyOptions::default()));
        assert!(set.satisfies(&v("1.1.0-canary"), SatisfyOptions::include_prerelease()));
    }

    #[test]
    fn test_prerelease_on_same_tuple_admitted() {
        let set = ComparatorSet::new(vec![
            Comparator::new(Operator::GreaterThanOrEqual, v("1.2.3-beta.2")),
            Comparator::new(Operator::LessThan, v("2.0.0")),
        ]);
        assert!(set.satisfies(&v("1.2.3-beta.4"), SatisfyOptions::default()));
        assert!(!set.satisfies(&v("1.2.3-beta.1"), SatisfyOptions::default()));
        assert!(!set.satisfies(&v("1.2.4-beta"), SatisfyOptions::default()));
    }

    #[test]
    fn test_any_set() {
        let any = ComparatorSet::any();
        assert!(any.is_any());
        assert!(any.satisfies(&v("0.0.1"), SatisfyOptions::default()));
        assert!(!any.satisfies(&v("1.0.0-rc.1"), SatisfyOptions::default()));
        assert!(any.satisfies(&v("1.0.0-rc.1"), SatisfyOptions::include_prerelease()));
        assert_eq!(any.to_string(), "*");
    }

    #[test]
    fn test_display() {
        assert_eq!(caret_one().to_string(), ">=1.0.0 <2.0.0");
    }
}
