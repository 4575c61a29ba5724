use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Bound command inputs, keyed by their declared parameter names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InputParameters {
    #[serde(default)]
    pub resolver_rule_id: Option<String>,
}

impl InputParameters {
    /// Declared parameter names, in canonical casing.
    pub const NAMES: &'static [&'static str] = &["ResolverRuleId"];

    pub fn new(resolver_rule_id: Option<String>) -> Self {
        Self { resolver_rule_id }
    }

    /// Look up a bound value by its canonical parameter name.
    pub fn get(&self, name: &str) -> Option<&str> {
        match name {
            "ResolverRuleId" => self.resolver_rule_id.as_deref(),
            _ => None,
        }
    }
}

/// Outgoing `GetResolverRule` request. Unset fields are omitted on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetResolverRuleRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolver_rule_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetResolverRuleResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolver_rule: Option<ResolverRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_metadata: Option<ResponseMetadata>,
}

/// Call metadata the service returns alongside every response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResponseMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl GetResolverRuleResponse {
    /// Properties a selector may project, in canonical casing.
    pub const FIELDS: &'static [&'static str] = &["ResolverRule", "ResponseMetadata"];

    /// Project a single property. Unset and unknown properties project to `null`.
    pub fn field(&self, name: &str) -> serde_json::Result<Value> {
        match name {
            "ResolverRule" => serde_json::to_value(&self.resolver_rule),
            "ResponseMetadata" => serde_json::to_value(&self.response_metadata),
            _ => Ok(Value::Null),
        }
    }
}

/// A forwarding, system or recursive rule as reported by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResolverRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    /// `COMPLETE`, `DELETING`, `UPDATING` or `FAILED`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    /// `FORWARD`, `SYSTEM` or `RECURSIVE`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub target_ips: Vec<TargetAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolver_endpoint_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    /// `NOT_SHARED`, `SHARED_WITH_ME` or `SHARED_BY_ME`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modification_time: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TargetAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv6: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
}

/// Output of a successful invocation: the projected value plus the raw
/// response it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Invocation {
    pub value: Value,
    pub response: GetResolverRuleResponse,
}
