use serde::Serialize;

use super::node::VarKind;

/// A typed variable value at the editor boundary.
///
/// Extracted data and custom-field payloads arrive as free text. [`parse`]
/// interprets the text against the declared kind and keeps it raw when
/// interpretation fails, so a bad value never aborts an analysis.
///
/// [`parse`]: VarValue::parse
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum VarValue {
    String(String),
    Int(i64),
    Float(f64),
    Boolean(bool),
    /// Kept as text; the editor does not interpret timestamps.
    Datetime(String),
    Array(Vec<serde_json::Value>),
    Object(serde_json::Map<String, serde_json::Value>),
    /// Fallback for values that do not parse as their declared kind.
    Raw(String),
}

impl VarValue {
    /// Interprets `raw` against the declared kind.
    ///
    /// Never fails: a value that cannot be parsed degrades to
    /// [`VarValue::Raw`] and the problem is logged.
    pub fn parse(kind: VarKind, raw: &str) -> Self {
        let trimmed = raw.trim();
        match kind {
            VarKind::String => Self::String(raw.to_string()),
            VarKind::Datetime => Self::Datetime(trimmed.to_string()),
            VarKind::Int => match trimmed.parse::<i64>() {
                Ok(value) => Self::Int(value),
                Err(_) => Self::raw_fallback(kind, raw),
            },
            VarKind::Float => match trimmed.parse::<f64>() {
                Ok(value) => Self::Float(value),
                Err(_) => Self::raw_fallback(kind, raw),
            },
            VarKind::Boolean => match trimmed.to_ascii_lowercase().as_str() {
                "true" | "1" => Self::Boolean(true),
                "false" | "0" => Self::Boolean(false),
                _ => Self::raw_fallback(kind, raw),
            },
            VarKind::Array => match serde_json::from_str::<serde_json::Value>(trimmed) {
                Ok(serde_json::Value::Array(items)) => Self::Array(items),
                _ => Self::raw_fallback(kind, raw),
            },
            VarKind::Object => match serde_json::from_str::<serde_json::Value>(trimmed) {
                Ok(serde_json::Value::Object(map)) => Self::Object(map),
                _ => Self::raw_fallback(kind, raw),
            },
        }
    }

    fn raw_fallback(kind: VarKind, raw: &str) -> Self {
        tracing::warn!("Value '{}' does not parse as {}; keeping raw text", raw, kind);
        Self::Raw(raw.to_string())
    }

    /// The kind this value was parsed as, if interpretation succeeded.
    pub fn kind(&self) -> Option<VarKind> {
        match self {
            Self::String(_) => Some(VarKind::String),
            Self::Int(_) => Some(VarKind::Int),
            Self::Float(_) => Some(VarKind::Float),
            Self::Boolean(_) => Some(VarKind::Boolean),
            Self::Datetime(_) => Some(VarKind::Datetime),
            Self::Array(_) => Some(VarKind::Array),
            Self::Object(_) => Some(VarKind::Object),
            Self::Raw(_) => None,
        }
    }
}
