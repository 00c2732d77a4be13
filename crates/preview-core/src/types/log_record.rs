use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::tracing::fields;

/// Level assigned to lines that could not be decoded.
pub const UNKNOWN_LEVEL: &str = "unknown";

/// One structured log line captured during an invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LogRecord {
    pub time: DateTime<Utc>,
    pub level: String,
    pub msg: String,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub root: String,
    #[serde(default)]
    pub err: String,
}

impl LogRecord {
    /// Decode a JSON log line as written by `tracing_subscriber`'s JSON
    /// formatter. Both the nested (`fields: {..}`) and flattened layouts are
    /// accepted, as are the `time`/`msg` spellings.
    ///
    /// Returns `None` when the line is not a JSON object carrying a string
    /// `level` and an RFC 3339 timestamp.
    pub fn parse(raw: &str) -> Option<Self> {
        let obj = match serde_json::from_str::<Value>(raw.trim()).ok()? {
            Value::Object(obj) => obj,
            _ => return None,
        };

        let level = obj.get("level")?.as_str()?.to_string();
        let time = obj
            .get("timestamp")
            .or_else(|| obj.get("time"))
            .and_then(Value::as_str)
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())?
            .with_timezone(&Utc);

        let nested = obj.get("fields").and_then(Value::as_object);
        let field = |name: &str| -> String {
            nested
                .and_then(|f| f.get(name))
                .or_else(|| obj.get(name))
                .map(field_text)
                .unwrap_or_default()
        };

        let mut msg = field("message");
        if msg.is_empty() {
            msg = field("msg");
        }
        let mut err = field(fields::ERR);
        if err.is_empty() {
            err = field("error");
        }

        Some(Self {
            time,
            level,
            msg,
            prefix: field(fields::PREFIX),
            root: field(fields::ROOT),
            err,
        })
    }

    /// Minimal record for a line that could not be decoded.
    pub fn unparsed(raw: &str) -> Self {
        Self {
            time: Utc::now(),
            level: UNKNOWN_LEVEL.to_string(),
            msg: raw.to_string(),
            prefix: String::new(),
            root: String::new(),
            err: String::new(),
        }
    }

    /// Decode `raw`, falling back to [`LogRecord::unparsed`].
    pub fn from_line(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_else(|| Self::unparsed(raw))
    }
}

fn field_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
