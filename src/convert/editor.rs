//! The editor (canvas) wire schema.
//!
//! Field names match the canvas JSON byte for byte: the editor mixes
//! camelCase (`isStart`, `extractVars`) with snake_case holdovers
//! (`custom_fields`, `else_option`), so every rename is explicit rather
//! than blanket `rename_all`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::flow::{DEFAULT_TEMPERATURE, ModelOptions, NodeKind, PromptSpec, VarDecl, VarKind};
use crate::layout::Position;

/// A complete canvas document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditorFlow {
    #[serde(default)]
    pub nodes: Vec<EditorNode>,
    #[serde(default)]
    pub edges: Vec<EditorEdge>,
    #[serde(rename = "globalConfig", default)]
    pub global_config: GlobalConfig,
}

/// A node as the canvas stores it: kind and position at the top level,
/// everything else under `data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorNode {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: NodeKind,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub data: EditorNodeData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditorNodeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub prompt: PromptSpec,
    #[serde(rename = "isStart", default)]
    pub is_start: bool,
    #[serde(rename = "isGlobal", default)]
    pub is_global: bool,
    #[serde(rename = "nodeDescription", default)]
    pub node_description: String,
    #[serde(rename = "autoReturnToPrevious", default)]
    pub auto_return_to_previous: bool,
    #[serde(rename = "overridesGlobalPathway", default)]
    pub overrides_global_pathway: bool,
    #[serde(rename = "modelOptions", default)]
    pub model_options: EditorModelOptions,
    #[serde(rename = "extractVars", default)]
    pub extract_vars: Vec<EditorExtractVar>,
    #[serde(rename = "loopEnabled", default)]
    pub loop_enabled: bool,
    #[serde(default)]
    pub condition: String,
}

/// Model settings as the canvas nests them under `modelOptions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorModelOptions {
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(rename = "skipUserResponse", default)]
    pub skip_user_response: bool,
    /// Engine-specific overrides, carried verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE
}

impl Default for EditorModelOptions {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            skip_user_response: false,
            extra: BTreeMap::new(),
        }
    }
}

impl From<&ModelOptions> for EditorModelOptions {
    fn from(options: &ModelOptions) -> Self {
        Self {
            temperature: options.temperature,
            skip_user_response: options.skip_user_response,
            extra: options.extra.clone(),
        }
    }
}

impl From<&EditorModelOptions> for ModelOptions {
    fn from(options: &EditorModelOptions) -> Self {
        Self {
            temperature: options.temperature,
            skip_user_response: options.skip_user_response,
            extra: options.extra.clone(),
        }
    }
}

/// A variable declaration with the editor-side `varType` spelling.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditorExtractVar {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "varType", default)]
    pub kind: VarKind,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required: bool,
}

impl From<&VarDecl> for EditorExtractVar {
    fn from(decl: &VarDecl) -> Self {
        Self {
            name: decl.name.clone(),
            kind: decl.kind,
            description: decl.description.clone(),
            required: decl.required,
        }
    }
}

impl From<&EditorExtractVar> for VarDecl {
    fn from(var: &EditorExtractVar) -> Self {
        Self {
            name: var.name.clone(),
            kind: var.kind,
            description: var.description.clone(),
            required: var.required,
        }
    }
}

/// A transition as the canvas stores it. `edge_type` and `animated` carry
/// the loop-back rendering style; forward edges leave both unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditorEdge {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub data: EditorEdgeData,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub edge_type: Option<String>,
    #[serde(default)]
    pub animated: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditorEdgeData {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub else_option: bool,
}

/// Flow-wide behavioral texts as the canvas groups them.
///
/// `globalPrompt` is a legacy field older documents still carry; the five
/// structured fields are what maps onto the engine schema.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(rename = "globalPrompt", default)]
    pub global_prompt: String,
    #[serde(rename = "roleAndObjective", default)]
    pub role_and_objective: String,
    #[serde(rename = "toneAndStyle", default)]
    pub tone_and_style: String,
    #[serde(rename = "languageAndFormatRules", default)]
    pub language_and_format_rules: String,
    #[serde(rename = "behaviorAndFallbacks", default)]
    pub behavior_and_fallbacks: String,
    #[serde(rename = "placeholdersAndVariables", default)]
    pub placeholders_and_variables: String,
}
