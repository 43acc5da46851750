//! Check command - test a version against a range.

use anyhow::Result;
use clap::Args;
use semver_range::{SatisfyOptions, Semver};

use crate::config::{satisfy_options, SemverConfig};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Version to test (e.g. 12.4.7-canary.1)
    #[arg(value_name = "VERSION")]
    pub version: String,

    /// Range to test against (e.g. ^12.4.6)
    #[arg(value_name = "RANGE")]
    pub range: String,

    /// Let pre-release versions satisfy ranges that don't target them
    #[arg(long)]
    pub include_prerelease: bool,
}

/// Whether `version` satisfies `range`; malformed input is an error rather than `false`
pub fn check(version: &str, range: &str, options: SatisfyOptions) -> Result<bool> {
    log::debug!("Checking {} against {} with {:?}", version, range, options);
    Ok(Semver::try_satisfies(version, range, options)?)
}

pub fn execute(args: CheckArgs, config: Option<&SemverConfig>) -> Result<i32> {
    let options = satisfy_options(args.include_prerelease, config);
    println!("{}", check(&args.version, &args.range, options)?);

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use semver_range::SemverError;

    #[test]
    fn test_check() {
        assert!(check("1.0.10-canary.1", "^1.0.0", SatisfyOptions::include_prerelease()).unwrap());
        assert!(!check("1.1.0-canary", "^1.0.0", SatisfyOptions::default()).unwrap());
    }

    #[test]
    fn test_check_invalid_range_is_an_error() {
        let err = check("1.0.0", "==1.0.0", SatisfyOptions::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SemverError>(),
            Some(SemverError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_check_invalid_version_is_an_error() {
        let err = check("1.0", "^1.0.0", SatisfyOptions::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SemverError>(),
            Some(SemverError::InvalidVersion { .. })
        ));
    }
}
