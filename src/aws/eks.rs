//! Elastic Kubernetes Service collaborator.

use super::{request_error, KubernetesApi};
use crate::error::CollaboratorError;
use aws_config::SdkConfig;
use aws_sdk_eks::Client;
use std::sync::Arc;
use tokio::runtime::Runtime;

pub struct EksClient {
    runtime: Arc<Runtime>,
    client: Client,
}

impl EksClient {
    pub fn new(runtime: Arc<Runtime>, config: &SdkConfig) -> Self {
        Self {
            runtime,
            client: Client::new(config),
        }
    }

    async fn cluster_names(&self) -> Result<Vec<String>, CollaboratorError> {
        let mut names = Vec::new();
        let mut token = None;
        loop {
            let page = self
                .client
                .list_clusters()
                .set_next_token(token)
                .send()
                .await
                .map_err(|e| request_error("ListClusters", e))?;
            names.extend_from_slice(page.clusters());
            match page.next_token() {
                Some(next) => token = Some(next.to_string()),
                None => return Ok(names),
            }
        }
    }

    async fn describe_status(&self, name: &str) -> Result<String, CollaboratorError> {
        let out = self
            .client
            .describe_cluster()
            .name(name)
            .send()
            .await
            .map_err(|e| request_error("DescribeCluster", e))?;
        let cluster = out
            .cluster()
            .ok_or_else(|| CollaboratorError::Missing(format!("EKS cluster {name} not found")))?;
        let status = cluster.status().map(|s| s.as_str()).unwrap_or("UNKNOWN");
        Ok(match cluster.version() {
            Some(version) => format!("{status} (Kubernetes {version})"),
            None => status.to_string(),
        })
    }
}

impl KubernetesApi for EksClient {
    fn list_clusters(&self) -> Result<Vec<String>, CollaboratorError> {
        self.runtime.block_on(self.cluster_names())
    }

    fn cluster_status(&self, name: &str) -> Result<String, CollaboratorError> {
        self.runtime.block_on(self.describe_status(name))
    }
}
