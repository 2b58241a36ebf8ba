//! Lint for allow-listed utility functions the API does not declare.

use luagd_bindgen_manifest::{ExtensionApi, UTILITY_FUNCTIONS};

use super::super::Lint;
use crate::pipeline::{CodegenOptions, Diagnostic};

/// Warns about allow-listed utility functions missing from the API.
///
/// Missing functions are left out of the bindings; this usually means the
/// dump comes from an engine version that renamed or removed them.
pub struct UtilityAllowListLint;

impl Lint for UtilityAllowListLint {
    fn name(&self) -> &'static str {
        "utility-allow-list"
    }

    fn description(&self) -> &'static str {
        "Check allow-listed utility functions exist in the API"
    }

    fn check(
        &self,
        api: &ExtensionApi,
        _options: &CodegenOptions,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        for function in UTILITY_FUNCTIONS {
            if api.utility_function(function.name).is_none() {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!("utility function '{}' is not declared by the API", function.name),
                    )
                    .at("utility_functions"),
                );
            }
        }
    }
}
