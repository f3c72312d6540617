//! The static menu tree and its leaf actions.
//!
//! Actions are plain functions over a [`Console`] and one collaborator trait
//! object; [`build_main_menu`] binds them to their collaborators once at
//! startup.

mod alb;
mod ecs;
mod eks;

use crate::aws::Collaborators;
use crate::error::ActionError;
use crate::menu::{choose_with_retry, Console, MenuNode};

pub const MAIN_MENU: &str = "Main";
pub const ALB_MENU: &str = "ALB";
pub const ECS_MENU: &str = "ECS";
pub const EKS_MENU: &str = "EKS";

/// Root menu: ALB, ECS, EKS.
pub fn build_main_menu(collaborators: &Collaborators) -> MenuNode {
    MenuNode::root(MAIN_MENU)
        .nest(alb::menu(&collaborators.alb))
        .nest(ecs::menu(&collaborators.ecs))
        .nest(eks::menu(&collaborators.eks))
}

/// Let the operator pick one of `items`.
///
/// With nothing to pick, shows `empty` as a warning and returns `Ok(None)`.
fn pick(
    console: &mut Console<'_>,
    prompt: &str,
    items: &[String],
    empty: &str,
) -> Result<Option<String>, ActionError> {
    if items.is_empty() {
        let render = console.render();
        render.show_warning(empty);
        render.pause_for_acknowledgement();
        return Ok(None);
    }
    let choice = choose_with_retry(console, prompt, items)?;
    Ok(Some(items[choice - 1].clone()))
}
