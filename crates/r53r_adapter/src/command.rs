//! `get-resolver-rule` — binds inputs, issues one `GetResolverRule` call and
//! projects the response.
//!
//! ```text
//! InputParameters ──build_request()──► GetResolverRuleRequest
//!                                          │
//!                     ResolverClient::get_resolver_rule()   (exactly one call)
//!                                          │
//!                                          ▼
//!                  Selector::apply() ◄── GetResolverRuleResponse
//!                          │
//!                          ▼
//!              Invocation { value, response }
//! ```

use std::future::Future;
use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::client::{ClientError, ClientFactory, ResolverClient};
use crate::config::{AdapterConfig, ClientConfig};
use crate::error::{AdapterError, Result};
use crate::selector::Selector;
use crate::types::{GetResolverRuleRequest, InputParameters, Invocation};

pub struct GetResolverRuleCommand {
    params: InputParameters,
    selector: Selector,
    config: AdapterConfig,
    factory: Option<Arc<dyn ClientFactory>>,
    client: OnceCell<Arc<dyn ResolverClient>>,
}

impl GetResolverRuleCommand {
    pub const NAME: &'static str = "get-resolver-rule";

    /// Build the command. Selector overrides are bound here, so an invalid
    /// `select` fails before any client exists.
    pub fn new(params: InputParameters, config: AdapterConfig) -> Result<Self> {
        let selector = Selector::resolve(config.select.as_deref())?;
        Ok(Self {
            params,
            selector,
            config,
            factory: None,
            client: OnceCell::new(),
        })
    }

    /// Use an existing client for every invocation.
    pub fn with_client(mut self, client: Arc<dyn ResolverClient>) -> Self {
        self.client = OnceCell::from(client);
        self
    }

    /// Create the client on first invocation and reuse it afterwards.
    pub fn with_factory(mut self, factory: Arc<dyn ClientFactory>) -> Self {
        self.factory = Some(factory);
        self
    }

    pub fn params(&self) -> &InputParameters {
        &self.params
    }

    pub fn selector(&self) -> Selector {
        self.selector
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Copy bound inputs into a fresh request, enforcing required fields
    /// when `strict_required` is set.
    pub fn build_request(&self) -> Result<GetResolverRuleRequest> {
        let mut request = GetResolverRuleRequest::default();

        // Blank values count as unbound.
        match self.params.resolver_rule_id.as_deref().filter(|id| !id.trim().is_empty()) {
            Some(id) => request.resolver_rule_id = Some(id.to_string()),
            None if self.config.strict_required => {
                return Err(AdapterError::Validation(
                    "missing required parameter 'ResolverRuleId'".into(),
                ));
            }
            None => warn!(
                command = Self::NAME,
                "required parameter 'ResolverRuleId' is not set; the service will likely reject the request"
            ),
        }

        Ok(request)
    }

    async fn client(&self) -> Result<&Arc<dyn ResolverClient>> {
        self.client
            .get_or_try_init(|| async {
                let factory = self.factory.as_ref().ok_or(AdapterError::NoClient)?;
                debug!(config = %self.config.client, "creating resolver client");
                factory
                    .create(&self.config.client)
                    .await
                    .map_err(AdapterError::Factory)
            })
            .await
    }

    /// Run the command: validate, call once, project.
    pub async fn invoke(&self) -> Result<Invocation> {
        let request = self.build_request()?;
        let client = self.client().await?;

        debug!(
            command = Self::NAME,
            resolver_rule_id = request.resolver_rule_id.as_deref().unwrap_or(""),
            config = %client.config(),
            "calling GetResolverRule"
        );
        let response = client
            .get_resolver_rule(request)
            .await
            .map_err(|e| classify(e, client.config()))?;

        let value = self.selector.apply(&response, &self.params)?;
        Ok(Invocation { value, response })
    }

    /// Like [`invoke`](Self::invoke), but gives up as soon as `cancel` resolves.
    pub async fn invoke_until<F>(&self, cancel: F) -> Result<Invocation>
    where
        F: Future<Output = ()>,
    {
        tokio::select! {
            result = self.invoke() => result,
            () = cancel => Err(AdapterError::Cancelled { command: Self::NAME }),
        }
    }

    /// Blocking bridge for synchronous callers. Drives the call on a private
    /// current-thread runtime. Inside a tokio runtime use `invoke().await`.
    pub fn invoke_blocking(&self) -> Result<Invocation> {
        if tokio::runtime::Handle::try_current().is_ok() {
            return Err(AdapterError::NestedRuntime);
        }
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(self.invoke())
    }
}

fn classify(err: ClientError, config: &ClientConfig) -> AdapterError {
    match err {
        ClientError::NameResolution { .. } => AdapterError::NameResolution {
            message: format!(
                "name resolution failure attempting to reach the service ({config}); \
                 check the region and endpoint settings: {err}"
            ),
            source: err,
        },
        other => AdapterError::Call(other),
    }
}
