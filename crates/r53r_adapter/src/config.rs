use serde::{Deserialize, Serialize};
use std::fmt;

/// Settings used to build the external client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// AWS region; `None` falls back to the SDK's default provider chain.
    #[serde(default)]
    pub region: Option<String>,
    /// Endpoint override (e.g. a local mock of the service).
    #[serde(default)]
    pub endpoint_url: Option<String>,
    /// Named profile from the shared AWS config files.
    #[serde(default)]
    pub profile: Option<String>,
}

impl fmt::Display for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "region '{}', endpoint '{}', profile '{}'",
            self.region.as_deref().unwrap_or("<default>"),
            self.endpoint_url.as_deref().unwrap_or("<default>"),
            self.profile.as_deref().unwrap_or("<default>"),
        )
    }
}

/// Per-command settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterConfig {
    /// Reject a missing required parameter before calling. When false the
    /// call proceeds and a warning is logged instead.
    #[serde(default)]
    pub strict_required: bool,
    /// Output projection override (`*`, `^Param`, or a response field name).
    #[serde(default)]
    pub select: Option<String>,
    #[serde(default)]
    pub client: ClientConfig,
}
