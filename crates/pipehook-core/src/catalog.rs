//! Hook catalog and task synthesis.
//!
//! The catalog is an explicitly constructed, immutable value built once at
//! process startup and shared read-only across concurrent discovery and
//! build calls; no locking is needed. Each build operates on a fresh clone
//! of the hook's template, so concurrent builds never touch shared mutable
//! state.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::error::{Error, Result};
use crate::schema::{VariableSchema, VariableSpec};
use crate::tekton::{Param, ParamSpec, PipelineTask, Step, TaskSpec};
use crate::types::{Hook, HookMetadata};

/// Pipeline engine this plugin's outputs are written for.
pub const PIPELINE_TYPE: &str = "tekton";

/// Name of the built-in hook.
pub const LS_HOOK: &str = "ls";

/// Variable binding the `Path` parameter of the `ls` hook.
pub const VAR_PRINT_PATH: &str = "printPath";
/// Variable replacing the step image of the `ls` hook.
pub const VAR_IMAGE_NAME: &str = "imageName";

/// One override point of a hook template: a declared variable name and the
/// typed application of its value to the task.
#[derive(Debug)]
pub struct VarOverride {
    /// Variable name looked up in the user mapping.
    pub var: &'static str,
    /// Applies the value to the template.
    pub apply: fn(&mut PipelineTask, &str),
}

/// One hook identity: capability metadata, the default task template, and
/// the override table applied on top of it.
#[derive(Debug)]
pub struct HookSpec {
    /// Capability record returned by discovery.
    pub metadata: HookMetadata,
    /// Produces the hook's default task.
    pub template: fn() -> PipelineTask,
    /// Recognized override points, applied in declaration order. Keys not
    /// listed here are ignored by construction.
    pub overrides: Vec<VarOverride>,
}

/// Immutable registry of the hooks this plugin implements.
#[derive(Debug)]
pub struct HookCatalog {
    pipeline_type: &'static str,
    hooks: Vec<HookSpec>,
    metadata: Vec<HookMetadata>,
}

impl HookCatalog {
    /// Validate and construct a catalog.
    ///
    /// Fails if two hooks share a name or an override consumes a variable
    /// the hook's schema does not declare. Both are startup-time programmer
    /// errors; a constructed catalog cannot fail discovery or lose a hook.
    pub fn new(pipeline_type: &'static str, hooks: Vec<HookSpec>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for hook in &hooks {
            if !seen.insert(hook.metadata.name.as_str()) {
                return Err(Error::Catalog(format!(
                    "duplicate hook name {}",
                    hook.metadata.name
                )));
            }
            for ov in &hook.overrides {
                if !hook.metadata.variable_schema.declares(ov.var) {
                    return Err(Error::Catalog(format!(
                        "hook {} consumes undeclared variable {}",
                        hook.metadata.name, ov.var
                    )));
                }
            }
        }

        let metadata = hooks.iter().map(|h| h.metadata.clone()).collect();
        Ok(Self {
            pipeline_type,
            hooks,
            metadata,
        })
    }

    /// The catalog served by the plugin process.
    pub fn builtin() -> Result<Self> {
        Self::new(PIPELINE_TYPE, vec![ls_hook()])
    }

    /// Fixed identifier of the target pipeline engine.
    pub fn pipeline_type(&self) -> &str {
        self.pipeline_type
    }

    /// Capability records for every hook, in declaration order.
    pub fn metadata(&self) -> &[HookMetadata] {
        &self.metadata
    }

    fn get(&self, name: &str) -> Option<&HookSpec> {
        self.hooks.iter().find(|h| h.metadata.name == name)
    }

    /// Synthesize the task for `name`.
    ///
    /// Instantiates the hook's template, applies the overrides present in
    /// `user_vars`, serializes the task, and wraps the bytes in an envelope
    /// with empty follow-up fields. Unknown keys in `user_vars` are
    /// ignored. Pure: identical inputs always produce byte-identical
    /// output, so the host may retry freely.
    pub fn build_hook(&self, name: &str, user_vars: &BTreeMap<String, String>) -> Result<Hook> {
        let spec = self
            .get(name)
            .ok_or_else(|| Error::UnknownHook(name.to_string()))?;

        let mut task = (spec.template)();
        for ov in &spec.overrides {
            if let Some(value) = user_vars.get(ov.var) {
                (ov.apply)(&mut task, value);
            }
        }

        let resource = serde_json::to_vec(&task)?;
        debug!(hook = name, bytes = resource.len(), "task built");
        Ok(Hook::from_resource(resource))
    }
}

/// The `ls` hook: print the contents of a path inside a pipeline step.
fn ls_hook() -> HookSpec {
    HookSpec {
        metadata: HookMetadata {
            name: LS_HOOK.to_string(),
            is_pre_hook: true,
            is_post_hook: true,
            supported_event_source_types: vec!["gitlab".to_string()],
            variable_schema: VariableSchema::object([
                (VAR_PRINT_PATH, VariableSpec::string().with_max_length(20)),
                (VAR_IMAGE_NAME, VariableSpec::string()),
            ]),
        },
        template: ls_template,
        overrides: vec![
            VarOverride {
                var: VAR_PRINT_PATH,
                apply: bind_path,
            },
            VarOverride {
                var: VAR_IMAGE_NAME,
                apply: set_image,
            },
        ],
    }
}

fn ls_template() -> PipelineTask {
    PipelineTask {
        name: LS_HOOK.to_string(),
        task_spec: TaskSpec {
            params: vec![ParamSpec {
                name: "Path".to_string(),
            }],
            steps: vec![Step {
                name: "print-path".to_string(),
                image: "bash:4.4".to_string(),
                script: "ls $(params.Path)".to_string(),
            }],
        },
        params: Vec::new(),
    }
}

/// Bind the `Path` parameter value; the step script keeps referencing the
/// parameter symbolically.
fn bind_path(task: &mut PipelineTask, value: &str) {
    task.params = vec![Param {
        name: "Path".to_string(),
        value: value.to_string(),
    }];
}

/// Replace the step's container image directly.
fn set_image(task: &mut PipelineTask, value: &str) {
    if let Some(step) = task.task_spec.steps.first_mut() {
        step.image = value.to_string();
    }
}
