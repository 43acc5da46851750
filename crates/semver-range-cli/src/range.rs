//! Range command - show the comparators a range expands to.

use anyhow::Result;
use clap::Args;
use console::style;
use semver_range::Range;

#[derive(Args, Debug)]
pub struct RangeArgs {
    /// Range expression (quote it to keep the shell away from `<`, `>` and `||`)
    #[arg(value_name = "RANGE")]
    pub range: String,
}

/// Operator/version pairs of each `||` alternative; an empty alternative matches anything
pub fn expand(range: &str) -> Result<Vec<Vec<(String, String)>>> {
    let range = Range::parse(range)?;

    Ok(range
        .sets()
        .iter()
        .map(|set| {
            set.comparators()
                .iter()
                .map(|c| (c.operator().to_string(), c.version().to_string()))
                .collect()
        })
        .collect())
}

pub fn execute(args: RangeArgs) -> Result<i32> {
    for set in expand(&args.range)? {
        if set.is_empty() {
            println!("*");
            continue;
        }
        let comparators: Vec<String> = set
            .iter()
            .map(|(operator, version)| format!("{}{}", style(operator).cyan(), version))
            .collect();
        println!("{}", comparators.join(" "));
    }

    Ok(0)
}
