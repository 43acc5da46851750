//! Single operator/version comparator (e.g. `>=1.2.3`)

use std::fmt;

use super::Operator;
use crate::Version;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Comparator {
    operator: Operator,
    version: Version,
}

impl Comparator {
    pub fn new(operator: Operator, version: Version) -> Self {
        Comparator { operator, version }
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Test a candidate using plain version ordering
    pub fn test(&self, candidate: &Version) -> bool {
        self.operator.accepts(candidate.cmp(&self.version))
    }

    /// Whether this comparator explicitly targets a pre-release of the
    /// candidate's numeric tuple
    pub fn admits_prerelease_of(&self, candidate: &Version) -> bool {
        self.version.is_prerelease() && self.version.same_triple(candidate)
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_comparator_test() {
        let gte = Comparator::new(Operator::GreaterThanOrEqual, v("1.2.3"));
        assert!(gte.test(&v("1.2.3")));
        assert!(gte.test(&v("1.2.4")));
        assert!(!gte.test(&v("1.2.3-beta")));

        let lt = Comparator::new(Operator::LessThan, v("2.0.0"));
        assert!(lt.test(&v("1.9999.9999")));
        assert!(lt.test(&v("2.0.0-alpha")));
        assert!(!lt.test(&v("2.0.0")));

        let eq = Comparator::new(Operator::Equal, v("1.0.0"));
        assert!(eq.test(&v("1.0.0+build")));
        assert!(!eq.test(&v("1.0.1")));
    }

    #[test]
    fn test_admits_prerelease_of() {
        let c = Comparator::new(Operator::GreaterThanOrEqual, v("1.2.3-beta.2"));
        assert!(c.admits_prerelease_of(&v("1.2.3-beta.4")));
        assert!(!c.admits_prerelease_of(&v("1.2.4-beta")));

        let release = Comparator::new(Operator::GreaterThanOrEqual, v("1.2.3"));
        assert!(!release.admits_prerelease_of(&v("1.2.3-beta")));
    }

    #[test]
    fn test_display() {
        let c = Comparator::new(Operator::LessThanOrEqual, v("1.2.3-rc.1"));
        assert_eq!(c.to_string(), "<=1.2.3-rc.1");
    }

    #[test]
    fn test_accessors() {
        let c = Comparator::new(Operator::LessThan, v("2.0.0"));
        assert_eq!(c.operator(), Operator::LessThan);
        assert_eq!(c.version(), &Version::new(2, 0, 0));
    }
}
