//! Elastic Container Service collaborator.

use super::{request_error, ContainerServiceApi};
use crate::error::CollaboratorError;
use aws_config::SdkConfig;
use aws_sdk_ecs::types::SortOrder;
use aws_sdk_ecs::Client;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tracing::info;

/// Newest task definitions shown for a family.
const LATEST_TASK_DEFINITIONS: i32 = 10;

pub struct EcsClient {
    runtime: Arc<Runtime>,
    client: Client,
}

impl EcsClient {
    pub fn new(runtime: Arc<Runtime>, config: &SdkConfig) -> Self {
        Self {
            runtime,
            client: Client::new(config),
        }
    }

    async fn cluster_arns(&self) -> Result<Vec<String>, CollaboratorError> {
        let mut arns = Vec::new();
        let mut token = None;
        loop {
            let page = self
                .client
                .list_clusters()
                .set_next_token(token)
                .send()
                .await
                .map_err(|e| request_error("ListClusters", e))?;
            arns.extend_from_slice(page.cluster_arns());
            match page.next_token() {
                Some(next) => token = Some(next.to_string()),
                None => return Ok(arns),
            }
        }
    }

    async fn service_arns(&self, cluster: &str) -> Result<Vec<String>, CollaboratorError> {
        let mut arns = Vec::new();
        let mut token = None;
        loop {
            let page = self
                .client
                .list_services()
                .cluster(cluster)
                .set_next_token(token)
                .send()
                .await
                .map_err(|e| request_error("ListServices", e))?;
            arns.extend_from_slice(page.service_arns());
            match page.next_token() {
                Some(next) => token = Some(next.to_string()),
                None => return Ok(arns),
            }
        }
    }

    async fn task_arns(&self, cluster: &str, service: &str) -> Result<Vec<String>, CollaboratorError> {
        let mut arns = Vec::new();
        let mut token = None;
        loop {
            let page = self
                .client
                .list_tasks()
                .cluster(cluster)
                .service_name(service)
                .set_next_token(token)
                .send()
                .await
                .map_err(|e| request_error("ListTasks", e))?;
            arns.extend_from_slice(page.task_arns());
            match page.next_token() {
                Some(next) => token = Some(next.to_string()),
                None => return Ok(arns),
            }
        }
    }

    async fn current_task_definition(
        &self,
        cluster: &str,
        service: &str,
    ) -> Result<String, CollaboratorError> {
        let out = self
            .client
            .describe_services()
            .cluster(cluster)
            .services(service)
            .send()
            .await
            .map_err(|e| request_error("DescribeServices", e))?;
        out.services()
            .first()
            .and_then(|svc| svc.task_definition())
            .map(str::to_string)
            .ok_or_else(|| {
                CollaboratorError::Missing(format!(
                    "service {service} not found in cluster {cluster}"
                ))
            })
    }

    /// `(family, revision)` of a task definition.
    async fn family_and_revision(
        &self,
        task_definition: &str,
    ) -> Result<(String, i32), CollaboratorError> {
        let out = self
            .client
            .describe_task_definition()
            .task_definition(task_definition)
            .send()
            .await
            .map_err(|e| request_error("DescribeTaskDefinition", e))?;
        let def = out.task_definition().ok_or_else(|| {
            CollaboratorError::Missing(format!("task definition {task_definition} not found"))
        })?;
        let family = def.family().ok_or_else(|| {
            CollaboratorError::Missing(format!("task definition {task_definition} has no family"))
        })?;
        Ok((family.to_string(), def.revision()))
    }

    async fn newest_task_definitions(&self, family: &str) -> Result<Vec<String>, CollaboratorError> {
        let out = self
            .client
            .list_task_definitions()
            .family_prefix(family)
            .sort(SortOrder::Desc)
            .max_results(LATEST_TASK_DEFINITIONS)
            .send()
            .await
            .map_err(|e| request_error("ListTaskDefinitions", e))?;
        Ok(out.task_definition_arns().to_vec())
    }

    async fn deployment_status(&self, cluster: &str, service: &str) -> Result<String, CollaboratorError> {
        let out = self
            .client
            .list_service_deployments()
            .cluster(cluster)
            .service(service)
            .max_results(1)
            .send()
            .await
            .map_err(|e| request_error("ListServiceDeployments", e))?;
        let latest = out.service_deployments().first().ok_or_else(|| {
            CollaboratorError::Missing(format!(
                "no service deployments found for service {service} in cluster {cluster}"
            ))
        })?;
        Ok(latest
            .status()
            .map(|s| s.as_str().to_string())
            .unwrap_or_else(|| "UNKNOWN".to_string()))
    }

    async fn force_deployment(
        &self,
        cluster: &str,
        service: &str,
        task_definition: Option<String>,
    ) -> Result<(), CollaboratorError> {
        self.client
            .update_service()
            .cluster(cluster)
            .service(service)
            .set_task_definition(task_definition)
            .force_new_deployment(true)
            .send()
            .await
            .map_err(|e| request_error("UpdateService", e))?;
        Ok(())
    }

    async fn rollback(&self, cluster: &str, service: &str) -> Result<String, CollaboratorError> {
        let current = self.current_task_definition(cluster, service).await?;
        let (family, revision) = self.family_and_revision(&current).await?;
        let target = previous_revision(&family, revision)?;
        self.force_deployment(cluster, service, Some(target.clone()))
            .await?;
        Ok(target)
    }
}

impl ContainerServiceApi for EcsClient {
    fn list_clusters(&self) -> Result<Vec<String>, CollaboratorError> {
        self.runtime.block_on(self.cluster_arns())
    }

    fn list_services(&self, cluster: &str) -> Result<Vec<String>, CollaboratorError> {
        self.runtime.block_on(self.service_arns(cluster))
    }

    fn list_tasks(&self, cluster: &str, service: &str) -> Result<Vec<String>, CollaboratorError> {
        self.runtime.block_on(self.task_arns(cluster, service))
    }

    fn service_task_definition(
        &self,
        cluster: &str,
        service: &str,
    ) -> Result<String, CollaboratorError> {
        self.runtime
            .block_on(self.current_task_definition(cluster, service))
    }

    fn task_definition_family(&self, task_definition: &str) -> Result<String, CollaboratorError> {
        self.runtime
            .block_on(self.family_and_revision(task_definition))
            .map(|(family, _)| family)
    }

    fn list_task_definitions(&self, family: &str) -> Result<Vec<String>, CollaboratorError> {
        self.runtime.block_on(self.newest_task_definitions(family))
    }

    fn latest_deployment_status(
        &self,
        cluster: &str,
        service: &str,
    ) -> Result<String, CollaboratorError> {
        self.runtime.block_on(self.deployment_status(cluster, service))
    }

    fn restart_service(&self, cluster: &str, service: &str) -> Result<(), CollaboratorError> {
        self.runtime
            .block_on(self.force_deployment(cluster, service, None))?;
        info!(cluster, service, "requested ECS service restart");
        Ok(())
    }

    fn rollback_service(&self, cluster: &str, service: &str) -> Result<String, CollaboratorError> {
        let target = self.runtime.block_on(self.rollback(cluster, service))?;
        info!(cluster, service, task_definition = %target, "requested ECS service rollback");
        Ok(target)
    }
}

/// `family:revision-1`, or an error when there is no earlier revision.
pub fn previous_revision(family: &str, revision: i32) -> Result<String, CollaboratorError> {
    if revision <= 1 {
        return Err(CollaboratorError::Missing(format!(
            "no previous revision of {family} before revision {revision}"
        )));
    }
    Ok(format!("{family}:{}", revision - 1))
}
