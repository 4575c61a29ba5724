//! Output projection.
//!
//! A `--select` value is resolved once, when the command is built, into one
//! of a closed set of strategies. Unknown names fail there, before any call.

use serde_json::Value;

use crate::error::{AdapterError, Result};
use crate::types::{GetResolverRuleResponse, InputParameters};

/// Property projected when no override is given.
pub const DEFAULT_SELECT: &str = "ResolverRule";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// The `ResolverRule` property of the response.
    Default,
    /// The entire response (`*`).
    WholeResponse,
    /// The value of a bound input parameter (`^Name`).
    InputEcho(&'static str),
    /// Another named property of the response (e.g. `ResponseMetadata`).
    Field(&'static str),
}

impl Selector {
    pub fn resolve(select: Option<&str>) -> Result<Self> {
        let Some(raw) = select else {
            return Ok(Selector::Default);
        };
        let select = raw.trim();
        if select.is_empty() {
            return Err(AdapterError::SelectorBinding("empty selector".into()));
        }
        if select == "*" {
            return Ok(Selector::WholeResponse);
        }
        if let Some(param) = select.strip_prefix('^') {
            return canonical(InputParameters::NAMES, param)
                .map(Selector::InputEcho)
                .ok_or_else(|| {
                    AdapterError::SelectorBinding(format!(
                        "'{param}' is not a parameter of this command (expected one of: {})",
                        InputParameters::NAMES.join(", ")
                    ))
                });
        }
        match canonical(GetResolverRuleResponse::FIELDS, select) {
            Some(DEFAULT_SELECT) => Ok(Selector::Default),
            Some(field) => Ok(Selector::Field(field)),
            None => Err(AdapterError::SelectorBinding(format!(
                "'{select}' is not a property of the response (expected '*', '^Param' or one of: {})",
                GetResolverRuleResponse::FIELDS.join(", ")
            ))),
        }
    }

    /// Project the output value. `InputEcho` never inspects the response.
    pub fn apply(&self, response: &GetResolverRuleResponse, params: &InputParameters) -> Result<Value> {
        let value = match self {
            Selector::Default => response.field(DEFAULT_SELECT)?,
            Selector::WholeResponse => serde_json::to_value(response)?,
            Selector::InputEcho(name) => params.get(name).map_or(Value::Null, Value::from),
            Selector::Field(name) => response.field(name)?,
        };
        Ok(value)
    }
}

fn canonical(names: &[&'static str], wanted: &str) -> Option<&'static str> {
    names.iter().copied().find(|n| n.eq_ignore_ascii_case(wanted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::types::{ResolverRule, ResponseMetadata};

    fn response() -> GetResolverRuleResponse {
        GetResolverRuleResponse {
            resolver_rule: Some(ResolverRule {
                id: Some("rslvr-rr-1".into()),
                name: Some("corp".into()),
                ..Default::default()
            }),
            response_metadata: Some(ResponseMetadata {
                request_id: Some("req-1".into()),
            }),
        }
    }

    #[test]
    fn resolves_each_strategy() {
        assert_eq!(Selector::resolve(None).unwrap(), Selector::Default);
        assert_eq!(Selector::resolve(Some("ResolverRule")).unwrap(), Selector::Default);
        assert_eq!(Selector::resolve(Some("*")).unwrap(), Selector::WholeResponse);
        assert_eq!(
            Selector::resolve(Some("^ResolverRuleId")).unwrap(),
            Selector::InputEcho("ResolverRuleId")
        );
    }

    #[test]
    fn other_response_properties_resolve_to_field() {
        assert_eq!(
            Selector::resolve(Some("ResponseMetadata")).unwrap(),
            Selector::Field("ResponseMetadata")
        );
        assert_eq!(
            Selector::resolve(Some("responsemetadata")).unwrap(),
            Selector::Field("ResponseMetadata")
        );
    }

    #[test]
    fn field_projects_named_property() {
        let value = Selector::Field("ResponseMetadata")
            .apply(&response(), &InputParameters::default())
            .unwrap();
        assert_eq!(value, serde_json::json!({"RequestId": "req-1"}));
    }

    #[test]
    fn names_match_case_insensitively() {
        assert_eq!(Selector::resolve(Some("resolverrule")).unwrap(), Selector::Default);
        assert_eq!(
            Selector::resolve(Some("^resolverRuleID")).unwrap(),
            Selector::InputEcho("ResolverRuleId")
        );
    }

    #[test]
    fn unknown_names_are_binding_errors() {
        for bad in ["Nope", "^Nope", "", "  "] {
            let err = Selector::resolve(Some(bad)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::SelectorBinding, "select {bad:?}");
        }
    }

    #[test]
    fn default_projects_rule() {
        let value = Selector::Default.apply(&response(), &InputParameters::default()).unwrap();
        assert_eq!(value["Id"], "rslvr-rr-1");
        assert_eq!(value["Name"], "corp");
    }

    #[test]
    fn whole_response_wraps_rule() {
        let value = Selector::WholeResponse
            .apply(&response(), &InputParameters::default())
            .unwrap();
        assert_eq!(value["ResolverRule"]["Id"], "rslvr-rr-1");
    }

    #[test]
    fn input_echo_ignores_response() {
        let params = InputParameters::new(Some("rslvr-rr-9".into()));
        let value = Selector::InputEcho("ResolverRuleId")
            .apply(&GetResolverRuleResponse::default(), &params)
            .unwrap();
        assert_eq!(value, Value::from("rslvr-rr-9"));
    }

    #[test]
    fn input_echo_of_unbound_parameter_is_null() {
        let value = Selector::InputEcho("ResolverRuleId")
            .apply(&response(), &InputParameters::default())
            .unwrap();
        assert_eq!(value, Value::Null);
    }
}
