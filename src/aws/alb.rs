//! Elastic Load Balancing v2 collaborator.

use super::{request_error, LoadBalancerApi};
use crate::error::CollaboratorError;
use aws_config::SdkConfig;
use aws_sdk_elasticloadbalancingv2::Client;
use std::sync::Arc;
use tokio::runtime::Runtime;

pub struct AlbClient {
    runtime: Arc<Runtime>,
    client: Client,
}

impl AlbClient {
    pub fn new(runtime: Arc<Runtime>, config: &SdkConfig) -> Self {
        Self {
            runtime,
            client: Client::new(config),
        }
    }

    async fn load_balancer_arns(&self) -> Result<Vec<String>, CollaboratorError> {
        let mut arns = Vec::new();
        let mut marker = None;
        loop {
            let page = self
                .client
                .describe_load_balancers()
                .set_marker(marker)
                .send()
                .await
                .map_err(|e| request_error("DescribeLoadBalancers", e))?;
            arns.extend(
                page.load_balancers()
                    .iter()
                    .filter_map(|lb| lb.load_balancer_arn().map(str::to_string)),
            );
            match page.next_marker() {
                Some(next) => marker = Some(next.to_string()),
                None => return Ok(arns),
            }
        }
    }

    async fn listener_arns(&self, load_balancer_arn: &str) -> Result<Vec<String>, CollaboratorError> {
        let mut arns = Vec::new();
        let mut marker = None;
        loop {
            let page = self
                .client
                .describe_listeners()
                .load_balancer_arn(load_balancer_arn)
                .set_marker(marker)
                .send()
                .await
                .map_err(|e| request_error("DescribeListeners", e))?;
            arns.extend(
                page.listeners()
                    .iter()
                    .filter_map(|l| l.listener_arn().map(str::to_string)),
            );
            match page.next_marker() {
                Some(next) => marker = Some(next.to_string()),
                None => return Ok(arns),
            }
        }
    }

    async fn rule_priorities(&self, listener_arn: &str) -> Result<Vec<String>, CollaboratorError> {
        let mut priorities = Vec::new();
        let mut marker = None;
        loop {
            let page = self
                .client
                .describe_rules()
                .listener_arn(listener_arn)
                .set_marker(marker)
                .send()
                .await
                .map_err(|e| request_error("DescribeRules", e))?;
            priorities.extend(
                page.rules()
                    .iter()
                    .filter_map(|r| r.priority().map(str::to_string)),
            );
            match page.next_marker() {
                Some(next) => marker = Some(next.to_string()),
                None => return Ok(priorities),
            }
        }
    }
}

impl LoadBalancerApi for AlbClient {
    fn list_load_balancers(&self) -> Result<Vec<String>, CollaboratorError> {
        self.runtime.block_on(self.load_balancer_arns())
    }

    fn list_listeners(&self, load_balancer_arn: &str) -> Result<Vec<String>, CollaboratorError> {
        self.runtime.block_on(self.listener_arns(load_balancer_arn))
    }

    fn highest_rule_priority(&self, listener_arn: &str) -> Result<u32, CollaboratorError> {
        let priorities = self.runtime.block_on(self.rule_priorities(listener_arn))?;
        Ok(highest_numbered_priority(priorities.iter().map(String::as_str)))
    }
}

/// Largest numeric priority; non-numeric ones such as `default` are skipped.
pub fn highest_numbered_priority<'a>(priorities: impl IntoIterator<Item = &'a str>) -> u32 {
    priorities
        .into_iter()
        .filter_map(|p| p.parse::<u32>().ok())
        .max()
        .unwrap_or(0)
}
