use colored::Colorize;
use r53r_adapter::aws::AwsClientFactory;
use r53r_adapter::{
    AdapterConfig, AdapterError, ClientConfig, ErrorReport, GetResolverRuleCommand, InputParameters,
};
use serde_json::Value;
use std::io::{self, Read};
use std::sync::Arc;
use tracing::debug;

use crate::OutputFormat;

pub struct Settings {
    pub client: ClientConfig,
    pub strict: bool,
    pub output: OutputFormat,
}

// ── get-resolver-rule ───────────────────────────────────────────

pub fn get_resolver_rule(
    settings: &Settings,
    id: Option<String>,
    select: &str,
) -> Result<(), AdapterError> {
    let id = if id.as_deref() == Some("-") {
        read_stdin_id()?
    } else {
        id
    };

    let config = AdapterConfig {
        strict_required: settings.strict,
        select: Some(select.to_string()),
        client: settings.client.clone(),
    };
    let command = GetResolverRuleCommand::new(InputParameters::new(id), config)?
        .with_factory(Arc::new(AwsClientFactory));

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let invocation = runtime.block_on(command.invoke_until(interrupted()))?;

    debug!(response = ?invocation.response, "raw GetResolverRule response");

    match settings.output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&invocation.value)?);
        }
        OutputFormat::Text => print_value(&invocation.value),
    }
    Ok(())
}

/// Resolves on Ctrl-C. If the handler cannot be installed, never resolves.
async fn interrupted() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}

/// Pipeline binding: the first non-empty line of stdin is the rule id.
fn read_stdin_id() -> Result<Option<String>, AdapterError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| AdapterError::Validation(format!("read stdin: {e}")))?;
    Ok(first_line(&buf))
}

fn first_line(buf: &str) -> Option<String> {
    buf.lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(str::to_string)
}

// ── output ──────────────────────────────────────────────────────

fn print_value(value: &Value) {
    match value {
        Value::Null => println!("{}", "(no value)".dimmed()),
        Value::Object(map) => {
            let width = map.keys().map(String::len).max().unwrap_or(0);
            for (key, v) in map {
                let padded = format!("{key:<width$}");
                println!("{} {}", padded.dimmed(), render_scalar(key, v));
            }
        }
        other => println!("{}", render_scalar("", other)),
    }
}

fn render_scalar(key: &str, value: &Value) -> String {
    match value {
        Value::String(s) => match (key, s.as_str()) {
            ("Status", "COMPLETE") => s.green().bold().to_string(),
            ("Status", "FAILED") => s.red().bold().to_string(),
            ("Status", _) => s.yellow().bold().to_string(),
            ("Id" | "Arn" | "ResolverEndpointId", _) => s.cyan().to_string(),
            _ => s.clone(),
        },
        Value::Null => "—".dimmed().to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string().dimmed().to_string(),
        other => other.to_string(),
    }
}

pub fn report_error(err: &AdapterError, output: OutputFormat) {
    eprintln!("{} {}", "error:".red().bold(), err);
    let report = ErrorReport::from(err);
    match output {
        OutputFormat::Json => eprintln!("{}", render_report(&report)),
        OutputFormat::Text => {
            for cause in &report.causes {
                eprintln!("  {} {}", "caused by:".dimmed(), cause);
            }
        }
    }
}

fn render_report(report: &ErrorReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|e| {
        debug!(error = %e, "could not serialize error report");
        format!("{report:?}")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stdin_id_takes_first_non_empty_line() {
        assert_eq!(
            first_line("\n  rslvr-rr-1 \nrslvr-rr-2\n").as_deref(),
            Some("rslvr-rr-1")
        );
        assert_eq!(first_line("   \n"), None);
    }

    #[test]
    fn error_report_renders_as_json() {
        let err = AdapterError::Validation("missing required parameter 'ResolverRuleId'".into());
        let rendered = render_report(&ErrorReport::from(&err));
        let json: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(json["kind"], "validation");
        assert!(json["message"].as_str().unwrap().contains("ResolverRuleId"));
    }

    #[test]
    fn nested_values_render_as_compact_json() {
        colored::control::set_override(false);
        let v = serde_json::json!([{"Ip": "10.0.0.10", "Port": 53}]);
        assert_eq!(render_scalar("TargetIps", &v), r#"[{"Ip":"10.0.0.10","Port":53}]"#);
        assert_eq!(render_scalar("Port", &serde_json::json!(53)), "53");
    }
}
