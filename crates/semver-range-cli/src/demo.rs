//! Demo command - walk through how pre-releases interact with caret ranges.

use anyhow::Result;
use console::style;
use semver_range::{SatisfyOptions, Semver};

pub struct DemoCase {
    pub version: &'static str,
    pub range: &'static str,
    pub include_prerelease: bool,
    pub note: &'static str,
}

pub const DEMO_CASES: &[DemoCase] = &[
    DemoCase {
        version: "12.4.7-canary.1",
        range: "^12.4.6",
        include_prerelease: false,
        note: "pre-releases are not included by default",
    },
    DemoCase {
        version: "1.1.0-canary",
        range: "^1.0.0",
        include_prerelease: false,
        note: "pre-releases are not included by default",
    },
    DemoCase {
        version: "12.4.7-canary.1",
        range: "^12.4.6",
        include_prerelease: true,
        note: "opting in lets the canary through",
    },
    DemoCase {
        version: "1.0.0-canary.1",
        range: "^1.0.0",
        include_prerelease: true,
        note: "a pre-release sorts below the version it is attached to",
    },
    DemoCase {
        version: "1.0.10-canary.1",
        range: "^1.0.0",
        include_prerelease: true,
        note: "sits above 1.0.9 and below 1.0.10",
    },
];

impl DemoCase {
    pub fn evaluate(&self) -> bool {
        let options = SatisfyOptions {
            include_prerelease: self.include_prerelease,
        };
        Semver::satisfies(self.version, self.range, options)
    }
}

pub fn execute() -> Result<i32> {
    for case in DEMO_CASES {
        let result = case.evaluate();
        let flag = if case.include_prerelease {
            " (including pre-releases)"
        } else {
            ""
        };
        let outcome = if result {
            style("true").green().bold()
        } else {
            style("false").red().bold()
        };

        println!(
            "{} satisfies {}{} {} {}",
            case.version,
            case.range,
            flag,
            style("=>").dim(),
            outcome
        );
        println!("  {}", style(case.note).dim());
    }

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_outcomes() {
        let outcomes: Vec<bool> = DEMO_CASES.iter().map(DemoCase::evaluate).collect();
        assert_eq!(outcomes, vec![false, false, true, false, true]);
    }
}
