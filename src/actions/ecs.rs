//! Elastic Container Service menu.

use super::{pick, ECS_MENU};
use crate::aws::ContainerServiceApi;
use crate::error::ActionError;
use crate::menu::{confirm, ActionOutcome, ActionResult, Console, MenuNode};
use std::sync::Arc;

pub(super) fn menu(ecs: &Arc<dyn ContainerServiceApi>) -> MenuNode {
    MenuNode::submenu(ECS_MENU)
        .leaf("List ECS clusters", bind(ecs, list_clusters))
        .leaf("List ECS services", bind(ecs, list_services))
        .leaf("List ECS tasks", bind(ecs, list_tasks))
        .leaf("Service task definition", bind(ecs, service_task_definition))
        .leaf("Latest task definitions", bind(ecs, latest_task_definitions))
        .leaf("Latest deployment status", bind(ecs, latest_deployment_status))
        .leaf("Restart service", bind(ecs, restart_service))
        .leaf("Rollback service", bind(ecs, rollback_service))
}

fn bind(
    ecs: &Arc<dyn ContainerServiceApi>,
    action: fn(&mut Console<'_>, &dyn ContainerServiceApi) -> ActionOutcome,
) -> impl Fn(&mut Console<'_>) -> ActionOutcome + 'static {
    let ecs = Arc::clone(ecs);
    move |console| action(console, ecs.as_ref())
}

fn pick_cluster(
    console: &mut Console<'_>,
    ecs: &dyn ContainerServiceApi,
) -> Result<Option<String>, ActionError> {
    let clusters = ecs.list_clusters()?;
    pick(console, "Select a cluster", &clusters, "No ECS clusters found")
}

/// Cluster, then a service inside it.
fn pick_service(
    console: &mut Console<'_>,
    ecs: &dyn ContainerServiceApi,
) -> Result<Option<(String, String)>, ActionError> {
    let Some(cluster) = pick_cluster(console, ecs)? else {
        return Ok(None);
    };
    let services = ecs.list_services(&cluster)?;
    let service = pick(console, "Select a service", &services, "No ECS services found")?;
    Ok(service.map(|service| (cluster, service)))
}

fn list_clusters(_: &mut Console<'_>, ecs: &dyn ContainerServiceApi) -> ActionOutcome {
    let clusters = ecs.list_clusters()?;
    Ok(Some(ActionResult::new("ECS clusters", clusters)))
}

fn list_services(console: &mut Console<'_>, ecs: &dyn ContainerServiceApi) -> ActionOutcome {
    let Some(cluster) = pick_cluster(console, ecs)? else {
        return Ok(None);
    };
    let services = ecs.list_services(&cluster)?;
    Ok(Some(ActionResult::new("ECS services", services)))
}

fn list_tasks(console: &mut Console<'_>, ecs: &dyn ContainerServiceApi) -> ActionOutcome {
    let Some((cluster, service)) = pick_service(console, ecs)? else {
        return Ok(None);
    };
    let tasks = ecs.list_tasks(&cluster, &service)?;
    Ok(Some(ActionResult::new("ECS tasks", tasks)))
}

fn service_task_definition(
    console: &mut Console<'_>,
    ecs: &dyn ContainerServiceApi,
) -> ActionOutcome {
    let Some((cluster, service)) = pick_service(console, ecs)? else {
        return Ok(None);
    };
    let task_definition = ecs.service_task_definition(&cluster, &service)?;
    Ok(Some(ActionResult::single("Task definition", task_definition)))
}

fn latest_task_definitions(
    console: &mut Console<'_>,
    ecs: &dyn ContainerServiceApi,
) -> ActionOutcome {
    let Some((cluster, service)) = pick_service(console, ecs)? else {
        return Ok(None);
    };
    let current = ecs.service_task_definition(&cluster, &service)?;
    let family = ecs.task_definition_family(&current)?;
    let arns = ecs.list_task_definitions(&family)?;
    Ok(Some(ActionResult::new(
        format!("Latest task definitions for {family}"),
        arns,
    )))
}

fn latest_deployment_status(
    console: &mut Console<'_>,
    ecs: &dyn ContainerServiceApi,
) -> ActionOutcome {
    let Some((cluster, service)) = pick_service(console, ecs)? else {
        return Ok(None);
    };
    let status = ecs.latest_deployment_status(&cluster, &service)?;
    Ok(Some(ActionResult::single("Latest deployment status", status)))
}

fn restart_service(console: &mut Console<'_>, ecs: &dyn ContainerServiceApi) -> ActionOutcome {
    let Some((cluster, service)) = pick_service(console, ecs)? else {
        return Ok(None);
    };
    if !confirm(console, &format!("Restart {service}?")) {
        return Ok(None);
    }
    ecs.restart_service(&cluster, &service)?;
    Ok(Some(ActionResult::single("Restart requested", service)))
}

fn rollback_service(console: &mut Console<'_>, ecs: &dyn ContainerServiceApi) -> ActionOutcome {
    let Some((cluster, service)) = pick_service(console, ecs)? else {
        return Ok(None);
    };
    if !confirm(console, &format!("Roll back {service} to the previous revision?")) {
        return Ok(None);
    }
    let target = ecs.rollback_service(&cluster, &service)?;
    Ok(Some(ActionResult::new(
        "Rollback requested",
        vec![service, format!("task definition: {target}")],
    )))
}
