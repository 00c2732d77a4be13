//! Analysis invoker: parameter conversion plus the single engine call.

use serde_json::Value;

use crate::engine::{AnalysisEngine, AnalysisRequest};
use crate::errors::BridgeError;
use crate::logsink::CaptureLogger;
use crate::tracing::fields;
use crate::types::{Diagnostic, Diagnostics, ParameterMap};
use crate::vfs::VirtualFileTree;

/// Engine output after conversion to an opaque JSON value.
#[derive(Debug)]
pub struct Invocation {
    pub output: Option<Value>,
    pub diags: Diagnostics,
}

/// Convert the optional host parameter argument.
///
/// An absent argument is not an error: it is logged and analysis runs with
/// no overrides. A present argument that is not an object is rejected.
pub fn convert_parameters(parameters: Option<&Value>) -> Result<Option<ParameterMap>, BridgeError> {
    match parameters {
        Some(value) => ParameterMap::from_host(value).map(Some),
        None => {
            tracing::info!(
                prefix = fields::PREFIX_INVOKER,
                "no parameters argument supplied, running without parameter overrides"
            );
            Ok(None)
        }
    }
}

/// Call `engine` exactly once against `files`.
///
/// Must run inside `logger`'s scope so the engine's records reach the sink.
/// The engine's diagnostics are returned unmodified; if its output cannot
/// be represented as JSON the output is dropped and one error diagnostic is
/// appended.
pub fn invoke<E: AnalysisEngine>(
    engine: &E,
    files: &VirtualFileTree,
    parameters: Option<&Value>,
    logger: &CaptureLogger,
) -> Result<Invocation, BridgeError> {
    let parameters = convert_parameters(parameters)?;

    let analysis = engine.analyze(AnalysisRequest {
        files,
        parameters: parameters.as_ref(),
        logger,
    });

    let mut diags = analysis.diags;
    let output = match analysis.output.map(|o| serde_json::to_value(&o)).transpose() {
        Ok(output) => output,
        Err(e) => {
            tracing::error!(prefix = fields::PREFIX_INVOKER, err = %e, "engine output is not serializable");
            diags.push(Diagnostic::error("Failed to serialize analysis output", e.to_string()));
            None
        }
    };

    Ok(Invocation { output, diags })
}
