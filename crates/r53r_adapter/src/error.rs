use serde::Serialize;
use thiserror::Error;

use crate::client::ClientError;

#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("validation: {0}")]
    Validation(String),

    #[error("selector: {0}")]
    SelectorBinding(String),

    /// A DNS lookup for the service endpoint failed. `message` carries the
    /// client configuration; the original failure stays reachable as the source.
    #[error("{message}")]
    NameResolution {
        message: String,
        #[source]
        source: ClientError,
    },

    /// Any other failure raised by the external call, passed through as-is.
    #[error(transparent)]
    Call(ClientError),

    #[error("client: no resolver client or client factory configured")]
    NoClient,

    #[error("client factory: {0}")]
    Factory(#[source] ClientError),

    #[error("cancelled: {command} did not complete")]
    Cancelled { command: &'static str },

    #[error("runtime: {0}")]
    Runtime(#[from] std::io::Error),

    #[error("runtime: blocking invocation inside an async runtime; await invoke() instead")]
    NestedRuntime,

    #[error("serde: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AdapterError>;

/// Coarse classification used for exit codes and structured error output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    SelectorBinding,
    Transport,
    Service,
    Cancelled,
    Client,
    Internal,
}

impl AdapterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AdapterError::Validation(_) => ErrorKind::Validation,
            AdapterError::SelectorBinding(_) => ErrorKind::SelectorBinding,
            AdapterError::NameResolution { .. } => ErrorKind::Transport,
            AdapterError::Call(ClientError::Service { .. }) => ErrorKind::Service,
            AdapterError::Call(_) => ErrorKind::Transport,
            AdapterError::NoClient | AdapterError::Factory(_) => ErrorKind::Client,
            AdapterError::Cancelled { .. } => ErrorKind::Cancelled,
            AdapterError::Runtime(_) | AdapterError::NestedRuntime | AdapterError::Serde(_) => {
                ErrorKind::Internal
            }
        }
    }

    /// Service error code (e.g. `ResourceNotFoundException`), if the service produced one.
    pub fn service_code(&self) -> Option<&str> {
        match self {
            AdapterError::Call(ClientError::Service { code, .. }) => Some(code.as_str()),
            _ => None,
        }
    }
}

/// Serializable rendering of an [`AdapterError`] and its cause chain.
///
/// ```json
/// { "kind": "transport", "message": "...", "causes": ["dns error: ..."] }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub causes: Vec<String>,
}

impl From<&AdapterError> for ErrorReport {
    fn from(err: &AdapterError) -> Self {
        let mut causes = Vec::new();
        let mut current = std::error::Error::source(err);
        while let Some(cause) = current {
            causes.push(cause.to_string());
            current = cause.source();
        }
        Self {
            kind: err.kind(),
            message: err.to_string(),
            code: err.service_code().map(str::to_string),
            causes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn service_errors_keep_their_message() {
        let err = AdapterError::Call(ClientError::service(
            "ResourceNotFoundException",
            "rule rslvr-rr-1 does not exist",
        ));
        assert_eq!(err.kind(), ErrorKind::Service);
        assert_eq!(
            err.to_string(),
            "ResourceNotFoundException: rule rslvr-rr-1 does not exist"
        );
        assert_eq!(err.service_code(), Some("ResourceNotFoundException"));
    }

    #[test]
    fn transport_call_errors_classify_as_transport() {
        let err = AdapterError::Call(ClientError::transport("connection reset"));
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.to_string(), "connection reset");
        assert!(err.service_code().is_none());
    }

    #[test]
    fn name_resolution_exposes_original_as_source() {
        let err = AdapterError::NameResolution {
            message: "region 'us-east-1': dns error".into(),
            source: ClientError::name_resolution("dns error"),
        };
        assert_eq!(err.kind(), ErrorKind::Transport);
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("dns error"));
    }

    #[test]
    fn report_collects_cause_chain() {
        let err = AdapterError::NameResolution {
            message: "context: dns error".into(),
            source: ClientError::name_resolution("dns error"),
        };
        let report = ErrorReport::from(&err);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["kind"], "transport");
        assert_eq!(json["message"], "context: dns error");
        assert_eq!(json["causes"][0], "dns error");
        assert!(json.get("code").is_none());
    }

    #[test]
    fn report_omits_empty_causes() {
        let report = ErrorReport::from(&AdapterError::Validation("missing".into()));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["kind"], "validation");
        assert!(json.get("causes").is_none());
    }
}
