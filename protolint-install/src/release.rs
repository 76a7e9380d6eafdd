use crate::error::{InstallError, Result};
use crate::platform::PlatformKey;

pub const DEFAULT_HOST: &str = "https://github.com";
pub const DEFAULT_PATH_TEMPLATE: &str = "yoheimuta/protolint/releases/download/";
pub const MODULE_NAME: &str = "protolint";

/// Where a versioned release asset lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseCoordinates {
    pub host: String,
    pub path_template: String,
    pub module_name: String,
    pub version: String,
}

impl ReleaseCoordinates {
    /// Build coordinates, rejecting a missing or malformed version up front
    pub fn new(host: &str, path_template: &str, version: Option<&str>) -> Result<Self> {
        let version = match version.map(str::trim) {
            Some(v) if !v.is_empty() => parse_version(v)?,
            _ => return Err(InstallError::MissingVersion),
        };

        Ok(Self {
            host: host.trim_end_matches('/').to_string(),
            path_template: path_template.trim_matches('/').to_string(),
            module_name: MODULE_NAME.to_string(),
            version,
        })
    }

    /// Name of the archive published for `platform`
    pub fn asset_name(&self, platform: &PlatformKey) -> String {
        format!(
            "{}_{}_{}_{}.tar.gz",
            self.module_name,
            self.version,
            platform.os_name(),
            platform.arch_name()
        )
    }

    /// Full download URL of the archive for `platform`
    pub fn download_url(&self, platform: &PlatformKey) -> String {
        let mut url = self.host.clone();
        if !self.path_template.is_empty() {
            url.push('/');
            url.push_str(&self.path_template);
        }
        format!("{url}/v{}/{}", self.version, self.asset_name(platform))
    }
}

/// Validate a MAJOR.MINOR.PATCH version with optional pre-release/build suffix.
/// A leading `v` is stripped.
pub fn parse_version(input: &str) -> Result<String> {
    let version = input.strip_prefix('v').unwrap_or(input);
    let invalid = |reason: &str| InstallError::VersionParse {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    let (core, suffix) = match version.find(['-', '+']) {
        Some(idx) => (&version[..idx], &version[idx + 1..]),
        None => (version, ""),
    };

    let parts: Vec<&str> = core.split('.').collect();
    if parts.len() != 3 {
        return Err(invalid("expected three numeric components"));
    }
    if parts
        .iter()
        .any(|p| p.is_empty() || !p.chars().all(|c| c.is_ascii_digit()))
    {
        return Err(invalid("components must be decimal numbers"));
    }
    if parts.iter().any(|p| p.len() > 1 && p.starts_with('0')) {
        return Err(invalid("components must not have leading zeros"));
    }

    if version.len() > core.len() {
        if suffix.is_empty() {
            return Err(invalid("empty pre-release or build suffix"));
        }
        if !suffix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '+'))
        {
            return Err(invalid("suffix contains invalid characters"));
        }
    }

    Ok(version.to_string())
}
