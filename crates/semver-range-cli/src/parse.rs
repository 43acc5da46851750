//! Parse command - show the components of a version.

use anyhow::Result;
use clap::Args;
use console::style;
use semver_range::Version;

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Version to parse
    #[arg(value_name = "VERSION")]
    pub version: String,
}

/// The output lines for a version, without styling
pub fn describe(version: &str) -> Result<Vec<String>> {
    let version = Version::parse(version)?;

    let mut lines = vec![
        format!("major:      {}", version.major()),
        format!("minor:      {}", version.minor()),
        format!("patch:      {}", version.patch()),
    ];

    for id in version.pre() {
        let kind = if id.is_numeric() { "numeric" } else { "alphanumeric" };
        lines.push(format!("prerelease: {} ({})", id, kind));
    }
    if !version.build().is_empty() {
        lines.push(format!("build:      {}", version.build().join(".")));
    }

    Ok(lines)
}

pub fn execute(args: ParseArgs) -> Result<i32> {
    let lines = describe(&args.version)?;

    println!("{} {}", style("version:").bold(), args.version.trim());
    for line in lines {
        if line.starts_with("prerelease:") {
            println!("  {}", style(line).yellow());
        } else {
            println!("  {}", line);
        }
    }

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_release() {
        let lines = describe("1.2.3").unwrap();
        assert_eq!(lines, vec!["major:      1", "minor:      2", "patch:      3"]);
    }

    #[test]
    fn test_describe_prerelease_and_build() {
        let lines = describe("12.4.7-canary.1+build.5").unwrap();
        assert_eq!(
            lines[3..],
            [
                "prerelease: canary (alphanumeric)",
                "prerelease: 1 (numeric)",
                "build:      build.5",
            ]
        );
    }

    #[test]
    fn test_describe_invalid_version() {
        let err = describe("1.2").unwrap_err();
        assert!(err.to_string().contains("Invalid version string"));
    }
}
