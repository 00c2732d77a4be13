use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{Diagnostic, Diagnostics, LogRecord};
use crate::errors::BridgeError;

/// The single object handed back to the host for every invocation that got
/// past tree construction, success or fault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseEnvelope {
    /// Engine result; `null` when analysis did not run to completion.
    #[ts(type = "unknown")]
    pub output: Option<serde_json::Value>,
    /// Never null. Empty when there is nothing to report.
    pub diags: Diagnostics,
    /// Records captured during the invocation, in arrival order.
    pub parser_logs: Vec<LogRecord>,
}

impl ResponseEnvelope {
    /// Envelope for an invocation whose engine call returned.
    pub fn completed(
        output: Option<serde_json::Value>,
        diags: Diagnostics,
        parser_logs: Vec<LogRecord>,
    ) -> Self {
        Self {
            output,
            diags,
            parser_logs,
        }
    }

    /// Envelope for an invocation that faulted. Carries exactly one
    /// diagnostic: the synthesized fault report.
    pub fn faulted(fault: Diagnostic, parser_logs: Vec<LogRecord>) -> Self {
        Self {
            output: None,
            diags: vec![fault],
            parser_logs,
        }
    }

    /// Serialize to the text payload returned across the boundary.
    pub fn to_payload(&self) -> Result<String, BridgeError> {
        Ok(serde_json::to_string(self)?)
    }
}
