//! Application Load Balancer menu.

use super::{pick, ALB_MENU};
use crate::aws::LoadBalancerApi;
use crate::menu::{ActionOutcome, ActionResult, Console, MenuNode};
use std::sync::Arc;

pub(super) fn menu(alb: &Arc<dyn LoadBalancerApi>) -> MenuNode {
    MenuNode::submenu(ALB_MENU)
        .leaf("List ALBs", bind(alb, list_load_balancers))
        .leaf(
            "Highest listener rule priority",
            bind(alb, highest_listener_rule_priority),
        )
}

fn bind(
    alb: &Arc<dyn LoadBalancerApi>,
    action: fn(&mut Console<'_>, &dyn LoadBalancerApi) -> ActionOutcome,
) -> impl Fn(&mut Console<'_>) -> ActionOutcome + 'static {
    let alb = Arc::clone(alb);
    move |console| action(console, alb.as_ref())
}

fn list_load_balancers(_: &mut Console<'_>, alb: &dyn LoadBalancerApi) -> ActionOutcome {
    let arns = alb.list_load_balancers()?;
    Ok(Some(ActionResult::new("List of ALBs", arns)))
}

fn highest_listener_rule_priority(
    console: &mut Console<'_>,
    alb: &dyn LoadBalancerApi,
) -> ActionOutcome {
    let arns = alb.list_load_balancers()?;
    let Some(lb) = pick(console, "Select an ALB", &arns, "No load balancers found")? else {
        return Ok(None);
    };
    let listeners = alb.list_listeners(&lb)?;
    let Some(listener) = pick(console, "Select a listener", &listeners, "No listeners found")?
    else {
        return Ok(None);
    };
    let priority = alb.highest_rule_priority(&listener)?;
    Ok(Some(ActionResult::single(
        "Highest listener rule priority",
        priority,
    )))
}
