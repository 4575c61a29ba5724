use clap::{Parser, Subcommand, ValueEnum};
use r53r_adapter::{AdapterError, ClientConfig, ErrorKind};
use std::process;
use tracing::Level;
use tracing_subscriber::EnvFilter;

mod commands;

/// Standardized exit codes for CLI.
/// 0 = OK, 2 = input error, 4 = auth, 5 = rate limit, 6 = transport, 130 = interrupted, 1 = other.
#[allow(dead_code)]
const EXIT_OK: i32 = 0;
const EXIT_OTHER: i32 = 1;
const EXIT_INPUT: i32 = 2;
const EXIT_AUTH: i32 = 4;
const EXIT_RATE: i32 = 5;
const EXIT_TRANSPORT: i32 = 6;
const EXIT_CANCELLED: i32 = 130;

#[derive(Parser)]
#[command(name = "r53rx", version, about = "Route 53 Resolver CLI — fetch resolver rules")]
struct Cli {
    /// AWS region (falls back to the SDK default chain)
    #[arg(long, env = "AWS_REGION", global = true)]
    region: Option<String>,

    /// Override the service endpoint URL
    #[arg(long, env = "AWS_ENDPOINT_URL", global = true)]
    endpoint_url: Option<String>,

    /// Named profile from the shared AWS config files
    #[arg(long, env = "AWS_PROFILE", global = true)]
    profile: Option<String>,

    /// Reject missing required parameters instead of warning
    #[arg(
        long,
        env = "R53RX_STRICT",
        global = true,
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    strict: bool,

    /// Log request and endpoint details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Json, global = true)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

#[derive(Subcommand)]
enum Commands {
    /// Get a resolver rule by id
    GetResolverRule {
        /// Resolver rule id (or - for stdin)
        #[arg(value_name = "RESOLVER_RULE_ID")]
        id: Option<String>,
        /// Resolver rule id, by name
        #[arg(long = "resolver-rule-id", conflicts_with = "id")]
        resolver_rule_id: Option<String>,
        /// Output projection: a response property, '*' for the whole response,
        /// or '^Param' to echo an input parameter
        #[arg(long, default_value = r53r_adapter::selector::DEFAULT_SELECT)]
        select: String,
    },
}

/// Map an adapter error to a process exit code.
fn exit_code_for(err: &AdapterError) -> i32 {
    match err.kind() {
        ErrorKind::Validation | ErrorKind::SelectorBinding => EXIT_INPUT,
        ErrorKind::Transport => EXIT_TRANSPORT,
        ErrorKind::Cancelled => EXIT_CANCELLED,
        ErrorKind::Service => match err.service_code() {
            Some(
                "AccessDeniedException"
                | "UnrecognizedClientException"
                | "InvalidClientTokenId"
                | "ExpiredTokenException",
            ) => EXIT_AUTH,
            Some("ThrottlingException" | "LimitExceededException") => EXIT_RATE,
            _ => EXIT_OTHER,
        },
        ErrorKind::Client | ErrorKind::Internal => EXIT_OTHER,
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = commands::Settings {
        client: ClientConfig {
            region: cli.region,
            endpoint_url: cli.endpoint_url,
            profile: cli.profile,
        },
        strict: cli.strict,
        output: cli.output,
    };

    let result = match cli.command {
        Commands::GetResolverRule {
            id,
            resolver_rule_id,
            select,
        } => commands::get_resolver_rule(&settings, id.or(resolver_rule_id), &select),
    };

    if let Err(e) = result {
        commands::report_error(&e, settings.output);
        process::exit(exit_code_for(&e));
    }
}
