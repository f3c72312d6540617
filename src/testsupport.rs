//! Shared test fixtures: scripted input, a recording renderer, fake AWS
//! collaborators, and a scratch directory.

use crate::aws::{ContainerServiceApi, KubernetesApi, LoadBalancerApi};
use crate::error::CollaboratorError;
use crate::ui::{LineSource, RenderSink};
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

/// `&["a", "b"]` -> `vec!["a".to_string(), "b".to_string()]`.
pub fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Line source that replays a fixed script, then reports end-of-input.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    Clear,
    Menu { title: String, labels: Vec<String> },
    Prompt,
    Result { title: String, values: Vec<String> },
    Error(String),
    Warning(String),
    Info(String),
    Pause,
}

/// Render sink that records every call in order.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    events: RefCell<Vec<RenderEvent>>,
}

impl RecordingRenderer {
    pub fn events(&self) -> Vec<RenderEvent> {
        self.events.borrow().clone()
    }

    pub fn count(&self, pred: impl Fn(&RenderEvent) -> bool) -> usize {
        self.events.borrow().iter().filter(|e| pred(e)).count()
    }

    pub fn results(&self) -> Vec<(String, Vec<String>)> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                RenderEvent::Result { title, values } => Some((title.clone(), values.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                RenderEvent::Error(msg) => Some(msg.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                RenderEvent::Warning(msg) => Some(msg.clone()),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: RenderEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl RenderSink for RecordingRenderer {
    fn clear(&self) {
        self.push(RenderEvent::Clear);
    }

    fn show_menu(&self, title: &str, labels: &[String]) {
        self.push(RenderEvent::Menu {
            title: title.to_string(),
            labels: labels.to_vec(),
        });
    }

    fn prompt_choice(&self) {
        self.push(RenderEvent::Prompt);
    }

    fn show_result(&self, title: &str, values: &[String]) {
        self.push(RenderEvent::Result {
            title: title.to_string(),
            values: values.to_vec(),
        });
    }

    fn show_error(&self, msg: &str) {
        self.push(RenderEvent::Error(msg.to_string()));
    }

    fn show_warning(&self, msg: &str) {
        self.push(RenderEvent::Warning(msg.to_string()));
    }

    fn show_info(&self, msg: &str) {
        self.push(RenderEvent::Info(msg.to_string()));
    }

    fn pause_for_acknowledgement(&self) {
        self.push(RenderEvent::Pause);
    }
}

// ---------------------------------------------------------------------------
// Collaborators
// ---------------------------------------------------------------------------

/// In-memory stand-in for every AWS collaborator.
///
/// Each call is logged as `operation(arg, ...)`. An operation listed in
/// `failures` returns that error instead of its canned value.
#[derive(Debug, Default)]
pub struct FakeAws {
    pub load_balancers: Vec<String>,
    pub listeners: Vec<String>,
    pub highest_priority: u32,
    pub ecs_clusters: Vec<String>,
    pub services: Vec<String>,
    pub tasks: Vec<String>,
    pub task_definition: String,
    pub family: String,
    pub task_definitions: Vec<String>,
    pub deployment_status: String,
    pub eks_clusters: Vec<String>,
    pub eks_status: String,
    pub failures: HashMap<&'static str, CollaboratorError>,
    pub(crate) calls: RefCell<Vec<String>>,
}

impl FakeAws {
    pub fn failing(mut self, operation: &'static str, error: CollaboratorError) -> Self {
        self.failures.insert(operation, error);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, operation: &'static str, args: &[&str]) -> Result<(), CollaboratorError> {
        self.calls
            .borrow_mut()
            .push(format!("{operation}({})", args.join(", ")));
        match self.failures.get(operation) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

impl LoadBalancerApi for FakeAws {
    fn list_load_balancers(&self) -> Result<Vec<String>, CollaboratorError> {
        self.record("list_load_balancers", &[])?;
        Ok(self.load_balancers.clone())
    }

    fn list_listeners(&self, load_balancer_arn: &str) -> Result<Vec<String>, CollaboratorError> {
        self.record("list_listeners", &[load_balancer_arn])?;
        Ok(self.listeners.clone())
    }

    fn highest_rule_priority(&self, listener_arn: &str) -> Result<u32, CollaboratorError> {
        self.record("highest_rule_priority", &[listener_arn])?;
        Ok(self.highest_priority)
    }
}

impl ContainerServiceApi for FakeAws {
    fn list_clusters(&self) -> Result<Vec<String>, CollaboratorError> {
        self.record("ecs_list_clusters", &[])?;
        Ok(self.ecs_clusters.clone())
    }

    fn list_services(&self, cluster: &str) -> Result<Vec<String>, CollaboratorError> {
        self.record("list_services", &[cluster])?;
        Ok(self.services.clone())
    }

    fn list_tasks(&self, cluster: &str, service: &str) -> Result<Vec<String>, CollaboratorError> {
        self.record("list_tasks", &[cluster, service])?;
        Ok(self.tasks.clone())
    }

    fn service_task_definition(
        &self,
        cluster: &str,
        service: &str,
    ) -> Result<String, CollaboratorError> {
        self.record("service_task_definition", &[cluster, service])?;
        Ok(self.task_definition.clone())
    }

    fn task_definition_family(&self, task_definition: &str) -> Result<String, CollaboratorError> {
        self.record("task_definition_family", &[task_definition])?;
        Ok(self.family.clone())
    }

    fn list_task_definitions(&self, family: &str) -> Result<Vec<String>, CollaboratorError> {
        self.record("list_task_definitions", &[family])?;
        Ok(self.task_definitions.clone())
    }

    fn latest_deployment_status(
        &self,
        cluster: &str,
        service: &str,
    ) -> Result<String, CollaboratorError> {
        self.record("latest_deployment_status", &[cluster, service])?;
        Ok(self.deployment_status.clone())
    }

    fn restart_service(&self, cluster: &str, service: &str) -> Result<(), CollaboratorError> {
        self.record("restart_service", &[cluster, service])
    }

    fn rollback_service(&self, cluster: &str, service: &str) -> Result<String, CollaboratorError> {
        self.record("rollback_service", &[cluster, service])?;
        Ok(format!("{}:previous", self.family))
    }
}

impl KubernetesApi for FakeAws {
    fn list_clusters(&self) -> Result<Vec<String>, CollaboratorError> {
        self.record("eks_list_clusters", &[])?;
        Ok(self.eks_clusters.clone())
    }

    fn cluster_status(&self, name: &str) -> Result<String, CollaboratorError> {
        self.record("cluster_status", &[name])?;
        Ok(self.eks_status.clone())
    }
}

// ---------------------------------------------------------------------------
// Filesystem
// ---------------------------------------------------------------------------

static SCRATCH_SEQ: AtomicU64 = AtomicU64::new(0);

/// Per-test directory under the system temp dir, removed on drop.
#[derive(Debug)]
pub struct ScratchDir {
    root: PathBuf,
}

impl ScratchDir {
    pub fn new(label: &str) -> Self {
        let root = std::env::temp_dir().join(format!(
            "devops-tools-{label}-{}-{}",
            std::process::id(),
            SCRATCH_SEQ.fetch_add(1, Ordering::Relaxed)
        ));
        fs::create_dir_all(&root).expect("create scratch dir");
        Self { root }
    }

    /// Path of `relative` inside the scratch dir; nothing is created.
    pub fn join(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Write `content` to `relative`, creating intermediate directories.
    pub fn put(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.join(relative);
        fs::create_dir_all(path.parent().unwrap_or(&self.root)).expect("create parent dirs");
        fs::write(&path, content).expect("write scratch file");
        path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}
