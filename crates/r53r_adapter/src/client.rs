//! Client seams — the external collaborators the adapter calls through.
//!
//! The adapter never talks to the network itself. It holds an
//! `Arc<dyn ResolverClient>` (injected, or created once by a
//! [`ClientFactory`]) and issues exactly one call per invocation.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::ClientConfig;
use crate::types::{GetResolverRuleRequest, GetResolverRuleResponse};

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{message}")]
    NameResolution {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    #[error("{message}")]
    Transport {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    #[error("{code}: {message}")]
    Service {
        code: String,
        message: String,
        #[source]
        source: Option<BoxError>,
    },
}

impl ClientError {
    pub fn name_resolution(message: impl Into<String>) -> Self {
        Self::NameResolution {
            message: message.into(),
            source: None,
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            source: None,
        }
    }

    pub fn service(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Service {
            code: code.into(),
            message: message.into(),
            source: None,
        }
    }
}

/// A client able to perform the Route 53 Resolver `GetResolverRule` call.
///
/// Implementations must be safe to share between concurrent invocations.
#[async_trait]
pub trait ResolverClient: Send + Sync {
    /// The configuration this client was built with, used to enrich
    /// name-resolution failures.
    fn config(&self) -> &ClientConfig;

    async fn get_resolver_rule(
        &self,
        request: GetResolverRuleRequest,
    ) -> Result<GetResolverRuleResponse, ClientError>;
}

#[async_trait]
pub trait ClientFactory: Send + Sync {
    async fn create(&self, config: &ClientConfig) -> Result<Arc<dyn ResolverClient>, ClientError>;
}

// Lowercased fragments that resolver libraries and the OS put in lookup errors.
const NAME_RESOLUTION_MARKERS: &[&str] = &[
    "dns error",
    "failed to lookup address",
    "name or service not known",
    "nodename nor servname",
    "no such host",
    "temporary failure in name resolution",
];

/// The first message in the cause chain that reports a failed host name lookup.
pub fn name_resolution_cause(err: &(dyn std::error::Error + 'static)) -> Option<String> {
    let mut current = Some(err);
    while let Some(e) = current {
        let text = e.to_string();
        let lower = text.to_ascii_lowercase();
        if NAME_RESOLUTION_MARKERS.iter().any(|m| lower.contains(m)) {
            return Some(text);
        }
        current = e.source();
    }
    None
}

pub fn is_name_resolution_failure(err: &(dyn std::error::Error + 'static)) -> bool {
    name_resolution_cause(err).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[derive(Debug, Error)]
    #[error("dispatch failure")]
    struct Outer(#[source] std::io::Error);

    #[test]
    fn detects_lookup_failure_deep_in_chain() {
        let inner = std::io::Error::new(
            std::io::ErrorKind::Other,
            "failed to lookup address information: Name or service not known",
        );
        let err = Outer(inner);
        assert!(is_name_resolution_failure(&err));
        assert_eq!(
            name_resolution_cause(&err).as_deref(),
            Some("failed to lookup address information: Name or service not known")
        );
    }

    #[test]
    fn ignores_other_io_failures() {
        let inner = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        assert!(!is_name_resolution_failure(&Outer(inner)));
    }

    #[test]
    fn service_error_display_includes_code() {
        let err = ClientError::service("ThrottlingException", "rate exceeded");
        assert_eq!(err.to_string(), "ThrottlingException: rate exceeded");
        assert!(err.source().is_none());
    }
}
