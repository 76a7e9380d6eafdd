use once_cell::sync::Lazy;

/// Operating system identifiers renamed to the release asset naming scheme.
const OS_MAPPING: &[(&str, &str)] = &[("win32", "windows"), ("windows", "windows"), ("macos", "darwin")];

/// CPU architecture identifiers renamed to the release asset naming scheme.
const ARCH_MAPPING: &[(&str, &str)] = &[("x64", "amd64"), ("x86_64", "amd64"), ("aarch64", "arm64")];

static CURRENT: Lazy<PlatformKey> =
    Lazy::new(|| PlatformKey::resolve(std::env::consts::OS, std::env::consts::ARCH));

/// Execution environment in the vendor's release asset vocabulary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformKey {
    os_name: String,
    arch_name: String,
}

impl PlatformKey {
    /// Map raw OS and architecture identifiers. Unknown identifiers pass through unchanged.
    pub fn resolve(os: &str, arch: &str) -> Self {
        Self {
            os_name: lookup(OS_MAPPING, os).to_string(),
            arch_name: lookup(ARCH_MAPPING, arch).to_string(),
        }
    }

    /// Platform of the running process, resolved on first use
    pub fn current() -> &'static PlatformKey {
        &CURRENT
    }

    pub fn os_name(&self) -> &str {
        &self.os_name
    }

    pub fn arch_name(&self) -> &str {
        &self.arch_name
    }

    /// File name suffix for executables on this platform
    pub fn exe_suffix(&self) -> &'static str {
        if self.os_name == "windows" {
            ".exe"
        } else {
            ""
        }
    }
}

fn lookup<'a>(table: &'a [(&str, &'a str)], key: &'a str) -> &'a str {
    table
        .iter()
        .find(|(from, _)| *from == key)
        .map(|(_, to)| *to)
        .unwrap_or(key)
}
