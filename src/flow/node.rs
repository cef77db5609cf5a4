use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::value::VarValue;

/// Canonical default applied when a document carries no temperature of its own.
///
/// Historical exports disagreed between 0.2 and 0.3; 0.3 is what the current
/// engine expects, and both conversion directions use it.
pub const DEFAULT_TEMPERATURE: f64 = 0.3;

/// The closed set of step types a flow can contain.
///
/// Unknown type strings parse as [`NodeKind::Normal`] so that documents
/// written by newer editors still load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum NodeKind {
    Start,
    End,
    #[default]
    Normal,
    Message,
    Request,
    Extraction,
    Validation,
    Recommendation,
    Summary,
    Global,
}

impl NodeKind {
    /// Parses a type string, mapping anything unrecognized to `Normal`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "start" => Self::Start,
            "end" => Self::End,
            "normal" => Self::Normal,
            "message" => Self::Message,
            "request" => Self::Request,
            "extraction" => Self::Extraction,
            "validation" => Self::Validation,
            "recommendation" => Self::Recommendation,
            "summary" => Self::Summary,
            "global" => Self::Global,
            _ => Self::Normal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Normal => "normal",
            Self::Message => "message",
            Self::Request => "request",
            Self::Extraction => "extraction",
            Self::Validation => "validation",
            Self::Recommendation => "recommendation",
            Self::Summary => "summary",
            Self::Global => "global",
        }
    }

    /// Start and end markers. They render smaller and never invoke the model.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Start | Self::End)
    }
}

impl From<String> for NodeKind {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Declared type of an extracted variable.
///
/// Unknown type strings parse as [`VarKind::String`], matching the default
/// for declarations that omit the type entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum VarKind {
    #[default]
    String,
    Int,
    Float,
    Boolean,
    Datetime,
    Array,
    Object,
}

impl VarKind {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "string" => Self::String,
            "int" => Self::Int,
            "float" => Self::Float,
            "boolean" => Self::Boolean,
            "datetime" => Self::Datetime,
            "array" => Self::Array,
            "object" => Self::Object,
            _ => Self::String,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Datetime => "datetime",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl From<String> for VarKind {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl fmt::Display for VarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One variable a node promises to extract from the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VarDecl {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "var_type", default)]
    pub kind: VarKind,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required: bool,
}

impl VarDecl {
    /// Interprets a raw value against this declaration's kind.
    pub fn parse_value(&self, raw: &str) -> VarValue {
        VarValue::parse(self.kind, raw)
    }
}

/// The structured instruction payload of a node.
///
/// All fields default to empty so that sparse documents load without
/// noise; the serialized form is identical in both wire schemas.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PromptSpec {
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub objective: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub examples: String,
    #[serde(default)]
    pub custom_fields: BTreeMap<String, String>,
}

/// Model invocation settings attached to a node.
///
/// `extra` carries engine-specific overrides verbatim, so that options this
/// crate does not know about survive a round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelOptions {
    pub temperature: f64,
    pub skip_user_response: bool,
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Default for ModelOptions {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            skip_user_response: false,
            extra: BTreeMap::new(),
        }
    }
}

/// A single step of a conversational flow.
///
/// Positions are deliberately absent: coordinates are owned by the layout
/// engine's output and are never authoritative input to analysis.
#[derive(Debug, Clone, Default)]
pub struct FlowNode {
    pub id: String,
    pub kind: NodeKind,
    /// Display label; falls back to the id when unset.
    pub name: Option<String>,
    pub prompt: PromptSpec,
    pub extract_vars: Vec<VarDecl>,
    /// Free-text loop condition, meaningful only with `loop_enabled`.
    pub condition: String,
    pub is_start: bool,
    pub is_global: bool,
    pub auto_return_to_previous: bool,
    pub loop_enabled: bool,
    pub overrides_global_pathway: bool,
    pub node_description: String,
    pub model_options: ModelOptions,
}

impl FlowNode {
    /// The label shown on the canvas: the name when present, else the id.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.id,
        }
    }
}
