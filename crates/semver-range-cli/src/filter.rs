//! Filter command - print the versions that satisfy a range.

use anyhow::Result;
use clap::Args;
use semver_range::{Range, SatisfyOptions, Version};

use crate::config::{satisfy_options, SemverConfig};

#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Range to filter by
    #[arg(value_name = "RANGE")]
    pub range: String,

    /// Candidate versions
    #[arg(value_name = "VERSIONS", required = true)]
    pub versions: Vec<String>,

    /// Let pre-release versions satisfy ranges that don't target them
    #[arg(long)]
    pub include_prerelease: bool,
}

/// The candidates that satisfy `range`, in input order; unparsable candidates are skipped
pub fn matching<'a>(range: &str, candidates: &'a [String], options: SatisfyOptions) -> Result<Vec<&'a str>> {
    let range = Range::parse(range)?;
    let mut matched = Vec::new();

    for candidate in candidates {
        match Version::parse(candidate) {
            Ok(version) if range.satisfies(&version, options) => matched.push(candidate.as_str()),
            Ok(_) => {}
            Err(e) => log::warn!("Skipping {}", e),
        }
    }

    Ok(matched)
}

pub fn execute(args: FilterArgs, config: Option<&SemverConfig>) -> Result<i32> {
    let options = satisfy_options(args.include_prerelease, config);

    for version in matching(&args.range, &args.versions, options)? {
        println!("{}", version);
    }

    Ok(0)
}
