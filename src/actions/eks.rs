//! Elastic Kubernetes Service menu.

use super::{pick, EKS_MENU};
use crate::aws::KubernetesApi;
use crate::menu::{ActionOutcome, ActionResult, Console, MenuNode};
use std::sync::Arc;

pub(super) fn menu(eks: &Arc<dyn KubernetesApi>) -> MenuNode {
    let list = Arc::clone(eks);
    let status = Arc::clone(eks);
    MenuNode::submenu(EKS_MENU)
        .leaf("List EKS clusters", move |console| {
            list_clusters(console, list.as_ref())
        })
        .leaf("EKS cluster status", move |console| {
            cluster_status(console, status.as_ref())
        })
}

fn list_clusters(_: &mut Console<'_>, eks: &dyn KubernetesApi) -> ActionOutcome {
    let clusters = eks.list_clusters()?;
    Ok(Some(ActionResult::new("EKS clusters", clusters)))
}

fn cluster_status(console: &mut Console<'_>, eks: &dyn KubernetesApi) -> ActionOutcome {
    let clusters = eks.list_clusters()?;
    let Some(cluster) = pick(console, "Select a cluster", &clusters, "No EKS clusters found")?
    else {
        return Ok(None);
    };
    let status = eks.cluster_status(&cluster)?;
    Ok(Some(ActionResult::new(
        "EKS cluster status",
        vec![format!("{cluster}: {status}")],
    )))
}
