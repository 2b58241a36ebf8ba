//! Info operation - API version and binding statistics.

use std::path::Path;

use eyre::{Context, Result};
use luagd_bindgen_codegen::pipeline::{CodegenOptions, Pipeline, phases::ValidatePhase};
use luagd_bindgen_manifest::ApiFile;

use crate::reports::InfoReport;

/// Execute the info operation.
///
/// Runs the pipeline to compute statistics; validation errors fail the
/// operation since the statistics would be meaningless.
pub fn info(api_file: ApiFile, options: CodegenOptions, output_dir: &Path) -> Result<InfoReport> {
    let api_path = std::fs::canonicalize(api_file.path())
        .unwrap_or_else(|_| api_file.path().to_path_buf());
    let api = api_file.into_api();
    let header = api.header.clone();

    let pipeline = Pipeline::with_options(options);
    let phases = pipeline
        .phase_info()
        .into_iter()
        .map(|p| (p.name.to_string(), p.description.to_string()))
        .collect();
    let lints = ValidatePhase::new()
        .lint_info()
        .into_iter()
        .map(|l| (l.name.to_string(), l.description.to_string()))
        .collect();

    let mut ctx = pipeline
        .run(api)
        .wrap_err("API has errors, run `luagd check` for details")?;

    Ok(InfoReport {
        api_path,
        version: header.as_ref().map(|h| h.version().to_string()),
        full_name: header.and_then(|h| h.version_full_name),
        output_dir: output_dir.to_path_buf(),
        computed: ctx.take_computed()?,
        phases,
        lints,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_collects_phases_and_lints() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extension_api.json");
        std::fs::write(
            &path,
            r#"{
                "header": {
                    "version_major": 4, "version_minor": 1, "version_patch": 3,
                    "version_full_name": "Godot Engine v4.1.3.stable.official"
                },
                "classes": [ { "name": "Object", "methods": [ { "name": "get_class" } ] } ]
            }"#,
        )
        .unwrap();

        let report = info(
            ApiFile::open(&path).unwrap(),
            CodegenOptions::default(),
            Path::new("gen"),
        )
        .unwrap();

        assert_eq!(report.version.as_deref(), Some("4.1.3"));
        assert_eq!(
            report.full_name.as_deref(),
            Some("Godot Engine v4.1.3.stable.official")
        );
        assert_eq!(report.computed.method_count, 1);
        assert_eq!(report.phases.len(), 3);
        assert_eq!(report.lints.len(), 3);
    }
}
