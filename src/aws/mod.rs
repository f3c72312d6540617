//! Cloud-provider collaborators consumed by the menu actions.
//!
//! Each trait is a narrow, synchronous view of one AWS service. The SDK-backed
//! implementations share a current-thread tokio runtime and block on every
//! call, so the menu core stays free of async.

mod alb;
mod ecs;
mod eks;

pub use alb::{highest_numbered_priority, AlbClient};
pub use ecs::{previous_revision, EcsClient};
pub use eks::EksClient;

use crate::config::AwsConfig;
use crate::error::CollaboratorError;
use aws_config::{BehaviorVersion, Region};
use std::error::Error;
use std::sync::Arc;
use tracing::debug;

/// Application Load Balancer operations.
pub trait LoadBalancerApi {
    fn list_load_balancers(&self) -> Result<Vec<String>, CollaboratorError>;
    fn list_listeners(&self, load_balancer_arn: &str) -> Result<Vec<String>, CollaboratorError>;
    /// Highest numbered rule priority on a listener; `0` when none is numbered.
    fn highest_rule_priority(&self, listener_arn: &str) -> Result<u32, CollaboratorError>;
}

/// ECS cluster and service operations.
pub trait ContainerServiceApi {
    fn list_clusters(&self) -> Result<Vec<String>, CollaboratorError>;
    fn list_services(&self, cluster: &str) -> Result<Vec<String>, CollaboratorError>;
    fn list_tasks(&self, cluster: &str, service: &str) -> Result<Vec<String>, CollaboratorError>;
    /// Task definition ARN the service currently runs.
    fn service_task_definition(
        &self,
        cluster: &str,
        service: &str,
    ) -> Result<String, CollaboratorError>;
    fn task_definition_family(&self, task_definition: &str) -> Result<String, CollaboratorError>;
    /// Newest task definition ARNs registered under `family`.
    fn list_task_definitions(&self, family: &str) -> Result<Vec<String>, CollaboratorError>;
    fn latest_deployment_status(
        &self,
        cluster: &str,
        service: &str,
    ) -> Result<String, CollaboratorError>;
    /// Force a new deployment of the current task definition.
    fn restart_service(&self, cluster: &str, service: &str) -> Result<(), CollaboratorError>;
    /// Redeploy the previous task definition revision; returns the
    /// `family:revision` now being deployed.
    fn rollback_service(&self, cluster: &str, service: &str) -> Result<String, CollaboratorError>;
}

/// EKS cluster operations.
pub trait KubernetesApi {
    fn list_clusters(&self) -> Result<Vec<String>, CollaboratorError>;
    fn cluster_status(&self, name: &str) -> Result<String, CollaboratorError>;
}

/// Every collaborator the menu tree needs, injected at startup.
#[derive(Clone)]
pub struct Collaborators {
    pub alb: Arc<dyn LoadBalancerApi>,
    pub ecs: Arc<dyn ContainerServiceApi>,
    pub eks: Arc<dyn KubernetesApi>,
}

impl Collaborators {
    /// Use one object for all three services (handy for fakes).
    pub fn from_shared<T>(shared: Arc<T>) -> Self
    where
        T: LoadBalancerApi + ContainerServiceApi + KubernetesApi + 'static,
    {
        Self {
            alb: shared.clone(),
            ecs: shared.clone(),
            eks: shared,
        }
    }
}

/// Build SDK clients for the configured region/profile.
///
/// Fails only when the runtime cannot start or no credentials provider can be
/// resolved; request-time failures surface later from individual calls.
pub fn connect(settings: &AwsConfig) -> Result<Collaborators, CollaboratorError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CollaboratorError::Init(format!("failed to start async runtime: {e}")))?;
    let runtime = Arc::new(runtime);

    let mut loader =
        aws_config::defaults(BehaviorVersion::latest()).region(Region::new(settings.region.clone()));
    if let Some(profile) = &settings.profile {
        loader = loader.profile_name(profile);
    }
    let sdk_config = runtime.block_on(loader.load());
    if sdk_config.credentials_provider().is_none() {
        return Err(CollaboratorError::Init(
            "no AWS credentials provider could be resolved".into(),
        ));
    }
    debug!(
        region = %settings.region,
        profile = settings.profile.as_deref().unwrap_or("<default>"),
        "aws clients configured"
    );

    Ok(Collaborators {
        alb: Arc::new(AlbClient::new(runtime.clone(), &sdk_config)),
        ecs: Arc::new(EcsClient::new(runtime.clone(), &sdk_config)),
        eks: Arc::new(EksClient::new(runtime, &sdk_config)),
    })
}

/// Flatten an SDK error and its source chain into one line.
pub(crate) fn request_error<E>(operation: &'static str, err: E) -> CollaboratorError
where
    E: Error,
{
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    CollaboratorError::request(operation, message)
}
