//! Check operation - API validation.

use luagd_bindgen_codegen::pipeline::{CodegenOptions, Pipeline};
use luagd_bindgen_manifest::ApiFile;

use super::summarize;
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the pipeline over the API and collects its diagnostics. Validation
/// errors end up in the report rather than failing the operation.
pub fn check(api_file: ApiFile, options: CodegenOptions) -> CheckReport {
    let api_path = api_file.path().to_path_buf();
    let (ctx, _result) = Pipeline::with_options(options).run_collecting(api_file.into_api());

    CheckReport {
        api_path,
        diagnostics: summarize(&ctx.diagnostics),
    }
}
