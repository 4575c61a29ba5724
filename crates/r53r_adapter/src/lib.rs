//! Route 53 Resolver command adapter.
//!
//! Turns bound command inputs into a single `GetResolverRule` call and
//! projects the response into the command's output.
//!
//! # Architecture
//!
//! ```text
//! CLI / host
//!   │  InputParameters + AdapterConfig
//!   ▼
//! GetResolverRuleCommand::invoke()
//!   │  validate ─► build request ─► resolve client (lazy, reused)
//!   ▼
//! dyn ResolverClient  (AWS SDK behind the `aws` feature, or any test double)
//!   │
//!   ▼
//! Selector::apply() ─► Invocation { value, response }
//! ```
//!
//! Every invocation is independent: one request, one call, one result.

pub mod client;
pub mod command;
pub mod config;
pub mod error;
pub mod selector;
pub mod types;

#[cfg(feature = "aws")]
pub mod aws;

pub use client::{ClientError, ClientFactory, ResolverClient};
pub use command::GetResolverRuleCommand;
pub use config::{AdapterConfig, ClientConfig};
pub use error::{AdapterError, ErrorKind, ErrorReport};
pub use selector::Selector;
pub use types::{
    GetResolverRuleRequest, GetResolverRuleResponse, InputParameters, Invocation, ResolverRule,
    ResponseMetadata, TargetAddress,
};
