use crate::error::{InstallError, Result};

/// Proxy addresses available to the installer, as read from the environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProxySettings {
    /// Installer-specific override (`PROTOLINT_PROXY`)
    pub explicit: Option<String>,
    /// `HTTPS_PROXY`
    pub https: Option<String>,
    /// `HTTP_PROXY`
    pub http: Option<String>,
}

impl ProxySettings {
    /// Select the proxy for traffic to `host`.
    ///
    /// The explicit override always wins; otherwise the scheme of `host` picks
    /// between the secure and insecure system proxy. Empty values count as unset.
    pub fn resolve(&self, host: &str) -> Option<String> {
        if let Some(explicit) = non_empty(&self.explicit) {
            return Some(explicit.to_string());
        }

        let fallback = if host.starts_with("https") {
            &self.https
        } else {
            &self.http
        };
        non_empty(fallback).map(str::to_string)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Turn a proxy address into a transport-level proxy routing all traffic
pub fn build_proxy(address: &str) -> Result<reqwest::Proxy> {
    reqwest::Proxy::all(address).map_err(|e| InstallError::Proxy {
        address: address.to_string(),
        reason: e.to_string(),
    })
}
