//! Tekton task document model.
//!
//! The subset of the Tekton `PipelineTask` shape that hook builds emit. The
//! plugin treats this as an opaque structured document it populates and
//! serializes; step scripts may reference declared parameters with Tekton's
//! own `$(params.Name)` substitution syntax, which is emitted as a literal
//! string and never interpreted here.

use serde::{Deserialize, Serialize};

/// A named task spliced into a pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineTask {
    /// Task name, unique within the pipeline.
    pub name: String,
    /// Inline task definition (parameter declarations + steps).
    #[serde(rename = "taskSpec")]
    pub task_spec: TaskSpec,
    /// Parameter values bound on the task. Empty until an override binds
    /// one; omitted from the wire when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Param>,
}

/// Inline task definition: what the engine runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSpec {
    /// Parameters the steps may reference.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<ParamSpec>,
    /// Container steps, run in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<Step>,
}

/// Declaration of a parameter a task accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamSpec {
    pub name: String,
}

/// A parameter value bound on a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    pub value: String,
}

/// One container step of a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub name: String,
    pub image: String,
    pub script: String,
}
