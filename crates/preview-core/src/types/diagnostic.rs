use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Severity {
    Error,
    Warning,
}

/// A problem found during analysis, or synthesized by the bridge when
/// analysis could not finish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Diagnostic {
    pub severity: Severity,
    /// One-line human-readable summary.
    pub summary: String,
    /// Longer human-readable explanation. May be empty.
    #[serde(default)]
    pub detail: String,
    /// Engine-defined metadata, passed through untouched.
    #[serde(default = "empty_extra")]
    #[ts(type = "Record<string, unknown>")]
    pub extra: serde_json::Value,
}

pub type Diagnostics = Vec<Diagnostic>;

fn empty_extra() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl Diagnostic {
    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(Severity::Error, summary, detail)
    }

    pub fn warning(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(Severity::Warning, summary, detail)
    }

    fn new(severity: Severity, summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity,
            summary: summary.into(),
            detail: detail.into(),
            extra: empty_extra(),
        }
    }

    /// Attach engine metadata under `key`. Non-object `extra` values are
    /// replaced by an object first.
    pub fn with_extra(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        if !self.extra.is_object() {
            self.extra = empty_extra();
        }
        if let Some(map) = self.extra.as_object_mut() {
            map.insert(key.to_string(), value.into());
        }
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
