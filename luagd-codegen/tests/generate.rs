//! Tests for writing `bindings.json` to disk.

use luagd_bindgen_codegen::{
    BINDINGS_FILE, Generator,
    pipeline::{CodegenOptions, Pipeline},
};
use luagd_bindgen_core::Codegen;
use luagd_bindgen_ir::BindingsIR;
use luagd_bindgen_manifest::parse_api;

const SAMPLE_API: &str = include_str!("fixtures/extension_api.json");

fn lower(options: CodegenOptions) -> BindingsIR {
    let api = parse_api(SAMPLE_API, "extension_api.json").expect("Failed to parse sample API");
    let mut ctx = Pipeline::with_options(options)
        .run(api)
        .expect("pipeline should succeed");
    ctx.take_ir().expect("bindings should be lowered")
}

#[test]
fn test_generate_writes_bindings() {
    let dir = tempfile::tempdir().unwrap();
    let ir = lower(CodegenOptions::default());

    let result = Generator::new(&ir, true).generate(dir.path()).unwrap();

    let path = dir.path().join(BINDINGS_FILE);
    assert_eq!(result.written, [path.clone()]);

    let content = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["meta"]["version"], "4.1.0");
    assert_eq!(value["classes"][0]["name"], "Object");
    assert!(content.ends_with("}\n"));
}

#[test]
fn test_preview_matches_written_file() {
    let dir = tempfile::tempdir().unwrap();
    let ir = lower(CodegenOptions::default());
    let generator = Generator::new(&ir, false);

    let preview = generator.preview().unwrap();
    generator.generate(dir.path()).unwrap();

    assert_eq!(generator.target(), "json");
    assert_eq!(preview.len(), 1);
    assert_eq!(preview[0].path, BINDINGS_FILE);
    assert_eq!(
        std::fs::read_to_string(dir.path().join(BINDINGS_FILE)).unwrap(),
        preview[0].content
    );
    // compact output is a single line
    assert_eq!(preview[0].content.lines().count(), 1);
}

#[test]
fn test_pipeline_output_is_byte_identical_across_runs() {
    let first_dir = tempfile::tempdir().unwrap();
    let second_dir = tempfile::tempdir().unwrap();

    let first = lower(CodegenOptions::default());
    let second = lower(CodegenOptions::default());
    Generator::new(&first, true).generate(first_dir.path()).unwrap();
    Generator::new(&second, true).generate(second_dir.path()).unwrap();

    let read = |dir: &tempfile::TempDir| std::fs::read(dir.path().join(BINDINGS_FILE)).unwrap();
    assert_eq!(read(&first_dir), read(&second_dir));

    // regenerating into the same directory leaves the file alone
    let again = Generator::new(&second, true).generate(first_dir.path()).unwrap();
    assert!(again.written.is_empty());
    assert_eq!(again.unchanged.len(), 1);
}

#[test]
fn test_strict_accessors_abort_generation() {
    let api = parse_api(SAMPLE_API, "extension_api.json").unwrap();
    let options = CodegenOptions {
        strict_accessors: true,
        ..CodegenOptions::default()
    };

    let (ctx, result) = Pipeline::with_options(options).run_collecting(api);

    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "validation failed with 2 error(s)");
    assert_eq!(ctx.error_count(), 2);
    assert!(ctx.ir.is_none());
}

#[test]
fn test_custom_skip_list() {
    let ir = lower(CodegenOptions {
        skip_classes: vec!["Vector2".into(), "Range".into()],
        strict_accessors: false,
    });

    assert!(ir.class("int").is_some());
    assert!(ir.class("Vector2").is_none());
    assert!(ir.class("Range").is_none());
}
