//! Snapshot tests for the binding tables lowered from a sample API dump.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use insta::assert_snapshot;
use luagd_bindgen_codegen::pipeline::{CompilationContext, Pipeline};
use luagd_bindgen_ir::{BindingsIR, EnumBinding};
use luagd_bindgen_manifest::parse_api;

const SAMPLE_API: &str = include_str!("fixtures/extension_api.json");

fn run_pipeline() -> CompilationContext {
    let api = parse_api(SAMPLE_API, "extension_api.json").expect("Failed to parse sample API");
    Pipeline::new().run(api).expect("pipeline should succeed")
}

fn lower() -> BindingsIR {
    run_pipeline().take_ir().expect("bindings should be lowered")
}

/// One line per value: `luau_name = value`.
fn render_enum(binding: &EnumBinding) -> String {
    let mut lines = vec![format!(
        "{} (prefix '{}'{})",
        binding.name,
        binding.prefix,
        if binding.is_bitfield { ", bitfield" } else { "" }
    )];
    lines.extend(
        binding
            .values
            .iter()
            .map(|v| format!("  {} = {}", v.luau_name, v.value)),
    );
    lines.join("\n")
}

#[test]
fn test_global_enums() {
    let ir = lower();
    let rendered: Vec<_> = ir.global_enums.iter().map(render_enum).collect();

    assert_snapshot!(rendered.join("\n"), @r"
    Side (prefix 'SIDE_')
      LEFT = 0
      TOP = 1
      RIGHT = 2
      BOTTOM = 3
    MethodFlags (prefix 'METHOD_FLAG_', bitfield)
      NORMAL = 1
      EDITOR = 2
      CONST = 4
      VIRTUAL = 8
      VARARG = 16
      STATIC = 32
      METHOD_FLAGS_DEFAULT = 1
    VariantOperator (prefix 'OP_')
      EQUAL = 0
      NOT_EQUAL = 1
      LESS = 2
    ");
}

#[test]
fn test_builtin_operators() {
    let ir = lower();
    let vector2 = ir.class("Vector2").expect("Vector2 not lowered");

    let rendered: Vec<_> = vector2
        .operators
        .iter()
        .map(|op| {
            format!(
                "{} {} {} -> {}",
                op.metamethod.metatable_key(),
                op.symbol,
                op.right_type.as_deref().unwrap_or("-"),
                op.return_type.as_deref().unwrap_or("-")
            )
        })
        .collect();

    assert_snapshot!(rendered.join("\n"), @r"
    __eq == Vector2 -> bool
    __mul * float -> Vector2
    __add + Vector2 -> Vector2
    __unm unary- - -> Vector2
    ");
}

#[test]
fn test_class_methods() {
    let ir = lower();

    let rendered: Vec<_> = ir
        .classes
        .iter()
        .flat_map(|c| {
            c.methods
                .iter()
                .map(move |m| format!("{}.{} -> {}", c.name, m.name, m.luau_name))
        })
        .collect();

    assert_snapshot!(rendered.join("\n"), @r"
    Object.get_class -> GetClass
    Engine.set_max_fps -> SetMaxFps
    Engine.get_max_fps -> GetMaxFps
    Range.set_value -> SetValue
    Range.get_value -> GetValue
    ");
}

#[test]
fn test_properties() {
    let ir = lower();
    let range = ir.class("Range").expect("Range not lowered");
    let json = serde_json::to_string_pretty(&range.properties).unwrap();

    assert_snapshot!(json, @r#"
    [
      {
        "name": "value",
        "luau_name": "value",
        "type": "float",
        "setter": "SetValue",
        "getter": "GetValue",
        "setter_missing": false,
        "getter_missing": false
      },
      {
        "name": "ratio",
        "luau_name": "ratio",
        "type": "float",
        "setter": null,
        "getter": null,
        "setter_missing": true,
        "getter_missing": true
      },
      {
        "name": "allow_greater",
        "luau_name": "allowGreater",
        "type": "bool",
        "setter": null,
        "getter": "GetValue",
        "setter_missing": false,
        "getter_missing": false
      }
    ]
    "#);
}

#[test]
fn test_utility_functions() {
    let ir = lower();
    let json = serde_json::to_string_pretty(&ir.utility_functions).unwrap();

    assert_snapshot!(json, @r#"
    [
      {
        "name": "lerpf",
        "luau_name": "lerp",
        "is_print": false,
        "is_vararg": false
      },
      {
        "name": "wrapf",
        "luau_name": "wrap",
        "is_print": false,
        "is_vararg": false
      },
      {
        "name": "print",
        "luau_name": "print",
        "is_print": true,
        "is_vararg": true
      }
    ]
    "#);
}

#[test]
fn test_accessor_diagnostics() {
    let ctx = run_pipeline();

    let rendered: Vec<_> = ctx
        .diagnostics
        .iter()
        .filter(|d| d.location.as_deref() != Some("utility_functions"))
        .map(|d| d.to_string())
        .collect();

    assert_snapshot!(rendered.join("\n"), @r"
    warning: setter 'set_as_ratio' of property 'Range.ratio' is not a method of 'Range' (at classes.Range.properties.ratio)
    warning: getter 'get_as_ratio' of property 'Range.ratio' is not a method of 'Range' (at classes.Range.properties.ratio)
    ");
}

#[test]
fn test_skipped_and_singleton_classes() {
    let ir = lower();

    assert_eq!(ir.meta.version.as_deref(), Some("4.1.0"));
    assert!(ir.class("int").is_none());
    assert!(ir.class("Engine").unwrap().is_singleton());
    assert_eq!(ir.class("Range").unwrap().parent.as_deref(), Some("Object"));
    assert_eq!(ir.class("Range").unwrap().enums[0].prefix, "PROCESS_MODE_");
}

#[test]
fn test_statistics() {
    let mut ctx = run_pipeline();
    let computed = ctx.take_computed().unwrap();

    assert_eq!(computed.builtin_class_count, 1);
    assert_eq!(computed.class_count, 3);
    assert_eq!(computed.skipped_class_count, 1);
    assert_eq!(computed.method_count, 7);
    // Object.get, Object.set and two virtual methods
    assert_eq!(computed.skipped_method_count, 4);
    assert_eq!(computed.operator_count, 4);
    assert_eq!(computed.dropped_operator_count, 3);
    assert_eq!(computed.missing_accessor_count, 2);
    assert_eq!(computed.enum_count, 5);
    assert_eq!(computed.utility_count, 3);
    assert_eq!(ctx.warning_count(), 22);
}
