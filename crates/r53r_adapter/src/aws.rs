//! Route 53 Resolver client backed by the AWS SDK.

use std::sync::Arc;

use async_trait::async_trait;
use aws_config::{meta::region::RegionProviderChain, BehaviorVersion};
use aws_sdk_route53resolver::config::Region;
use aws_sdk_route53resolver::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_route53resolver::operation::RequestId;
use aws_sdk_route53resolver::{types, Client};
use tracing::debug;

use crate::client::{name_resolution_cause, ClientError, ClientFactory, ResolverClient};
use crate::config::ClientConfig;
use crate::types::{
    GetResolverRuleRequest, GetResolverRuleResponse, ResolverRule, ResponseMetadata, TargetAddress,
};

/// Builds [`AwsResolverClient`]s from the default credential provider chain.
///
/// Credentials are resolved in the SDK's usual order: environment variables,
/// shared config/credentials files (honouring `profile`), web identity
/// tokens, ECS task roles, then EC2 IMDSv2.
#[derive(Debug, Default, Clone, Copy)]
pub struct AwsClientFactory;

#[async_trait]
impl ClientFactory for AwsClientFactory {
    async fn create(&self, config: &ClientConfig) -> Result<Arc<dyn ResolverClient>, ClientError> {
        let region_provider =
            RegionProviderChain::first_try(config.region.clone().map(Region::new)).or_default_provider();
        let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region_provider);
        if let Some(profile) = &config.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }
        let sdk_config = loader.load().await;

        let resolved = ClientConfig {
            region: sdk_config.region().map(|r| r.to_string()),
            endpoint_url: config.endpoint_url.clone(),
            profile: config.profile.clone(),
        };
        if resolved.region.is_none() {
            debug!("no region configured; endpoint resolution will fail until one is set");
        }

        Ok(Arc::new(AwsResolverClient {
            client: Client::new(&sdk_config),
            config: resolved,
        }))
    }
}

pub struct AwsResolverClient {
    client: Client,
    config: ClientConfig,
}

impl AwsResolverClient {
    pub fn new(client: Client, config: ClientConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl ResolverClient for AwsResolverClient {
    fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn get_resolver_rule(
        &self,
        request: GetResolverRuleRequest,
    ) -> Result<GetResolverRuleResponse, ClientError> {
        let output = self
            .client
            .get_resolver_rule()
            .set_resolver_rule_id(request.resolver_rule_id)
            .send()
            .await
            .map_err(classify)?;

        Ok(GetResolverRuleResponse {
            resolver_rule: output.resolver_rule().map(convert_rule),
            response_metadata: Some(ResponseMetadata {
                request_id: owned(output.request_id()),
            }),
        })
    }
}

fn classify<E, R>(err: SdkError<E, R>) -> ClientError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug + Send + Sync + 'static,
{
    let service = match &err {
        SdkError::ServiceError(ctx) => Some((
            ctx.err().code().unwrap_or("Unknown").to_string(),
            ctx.err().message().unwrap_or_default().to_string(),
        )),
        _ => None,
    };
    if let Some((code, message)) = service {
        return ClientError::Service {
            code,
            message,
            source: Some(Box::new(err)),
        };
    }

    let lookup = match &err {
        SdkError::DispatchFailure(_) => name_resolution_cause(&err),
        _ => None,
    };
    if let Some(message) = lookup {
        return ClientError::NameResolution {
            message,
            source: Some(Box::new(err)),
        };
    }

    ClientError::Transport {
        message: describe(&err),
        source: Some(Box::new(err)),
    }
}

// SdkError's own Display is a bare category ("dispatch failure"); the detail
// lives further down the chain.
fn describe(err: &(dyn std::error::Error + 'static)) -> String {
    let mut parts = vec![err.to_string()];
    let mut current = err.source();
    while let Some(e) = current {
        parts.push(e.to_string());
        current = e.source();
    }
    parts.join(": ")
}

fn owned(s: Option<&str>) -> Option<String> {
    s.map(str::to_string)
}

fn convert_rule(rule: &types::ResolverRule) -> ResolverRule {
    ResolverRule {
        id: owned(rule.id()),
        creator_request_id: owned(rule.creator_request_id()),
        arn: owned(rule.arn()),
        domain_name: owned(rule.domain_name()),
        status: rule.status().map(|s| s.as_str().to_string()),
        status_message: owned(rule.status_message()),
        rule_type: rule.rule_type().map(|t| t.as_str().to_string()),
        name: owned(rule.name()),
        target_ips: rule.target_ips().iter().map(convert_target).collect(),
        resolver_endpoint_id: owned(rule.resolver_endpoint_id()),
        owner_id: owned(rule.owner_id()),
        share_status: rule.share_status().map(|s| s.as_str().to_string()),
        creation_time: owned(rule.creation_time()),
        modification_time: owned(rule.modification_time()),
    }
}

fn convert_target(target: &types::TargetAddress) -> TargetAddress {
    TargetAddress {
        ip: owned(target.ip()),
        port: target.port(),
        ipv6: owned(target.ipv6()),
        protocol: target.protocol().map(|p| p.as_str().to_string()),
    }
}
