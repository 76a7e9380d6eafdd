use crate::error::{Result, VersionError};
use git2::{DescribeOptions, Repository};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

static VERSION_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)(?:\.(\d+))?(?:\.(\d+))?").expect("version pattern is valid")
});

/// Nearest tag reachable from HEAD, as `git describe --tags` prints it
pub fn describe_tag(repo_dir: &Path) -> Result<String> {
    let repo = Repository::discover(repo_dir)?;
    let mut opts = DescribeOptions::new();
    opts.describe_tags();

    let description = repo.describe(&opts)?.format(None)?;
    Ok(description.trim().to_string())
}

/// Pull a MAJOR.MINOR.PATCH version out of free-form text.
///
/// The first run of dot-separated numbers wins and missing parts are zero, so
/// `v0.50.2-3-gabc1234` becomes `0.50.2` and `v1` becomes `1.0.0`.
pub fn coerce_version(text: &str) -> Result<String> {
    let invalid = || VersionError::VersionParse {
        input: text.trim().to_string(),
    };

    let caps = VERSION_RUN.captures(text).ok_or_else(invalid)?;
    let part = |idx: usize| -> Result<u64> {
        caps.get(idx)
            .map_or(Ok(0), |m| m.as_str().parse::<u64>())
            .map_err(|_| invalid())
    };

    Ok(format!("{}.{}.{}", part(1)?, part(2)?, part(3)?))
}
