//! `preview(fileTree, parameters?)`: the host entry point.

use napi::bindgen_prelude::Unknown;
use napi_derive::napi;

use crate::conversions::error_codes;
use crate::conversions::host_value::HostDecoder;
use crate::runtime;

/// Analyze a nested object of file contents.
///
/// Always resolves to a JSON text with `output`, `diags` and `parser_logs`,
/// including when the engine panics. Throws `[TREE_ERROR]` when `fileTree`
/// is not an object and `[INVALID_ARGUMENT]` when `parameters` is neither
/// an object nor null. Functions, symbols and BigInts inside either argument
/// decode as `null`.
#[napi(ts_args_type = "fileTree: Record<string, unknown>, parameters?: Record<string, unknown> | null")]
pub fn preview(file_tree: Unknown<'_>, parameters: Unknown<'_>) -> napi::Result<String> {
    let rt = runtime::get()?;
    let decoder = HostDecoder::new(rt.config().tree.effective_max_depth());
    let file_tree = decoder.decode(&file_tree)?;
    let parameters = decoder.decode_optional(&parameters)?;
    rt.bridge
        .preview(&file_tree, parameters.as_ref())
        .map_err(error_codes::to_napi_error)
}
