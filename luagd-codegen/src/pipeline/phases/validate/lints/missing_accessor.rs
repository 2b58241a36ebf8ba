//! Lint for property accessors that name no method of their class.

use luagd_bindgen_manifest::{ExtensionApi, PropertyDescriptor};

use super::super::Lint;
use crate::{
    pipeline::{CodegenOptions, Diagnostic, Severity},
    resolve::{Accessor, resolve_accessors},
};

/// Reports setters and getters that cannot be resolved.
///
/// Such accessors are left empty in the bindings. This is a warning unless
/// strict accessors are enabled.
pub struct MissingAccessorLint;

impl Lint for MissingAccessorLint {
    fn name(&self) -> &'static str {
        "missing-accessor"
    }

    fn description(&self) -> &'static str {
        "Check property setters and getters name a method of their class"
    }

    fn check(
        &self,
        api: &ExtensionApi,
        options: &CodegenOptions,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let severity = if options.strict_accessors {
            Severity::Error
        } else {
            Severity::Warning
        };

        for (section, class) in options.bound_classes(api) {
            for property in &class.properties {
                let resolution = resolve_accessors(property, class);
                let location = format!("{}.{}.properties.{}", section, class.name, property.name);

                let accessors = [("setter", &resolution.setter), ("getter", &resolution.getter)];
                for (kind, accessor) in accessors {
                    if let Accessor::Missing { declared } = accessor {
                        diagnostics.push(
                            Diagnostic::new(
                                severity,
                                "validate",
                                missing_message(&class.name, property, kind, declared),
                            )
                            .at(location.clone()),
                        );
                    }
                }
            }
        }
    }
}

fn missing_message(
    class: &str,
    property: &PropertyDescriptor,
    kind: &str,
    declared: &str,
) -> String {
    format!(
        "{} '{}' of property '{}.{}' is not a method of '{}'",
        kind, declared, class, property.name, class
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_api(json: &str) -> ExtensionApi {
        serde_json::from_str(json).expect("Failed to parse test API")
    }

    fn range_api() -> ExtensionApi {
        parse_api(
            r#"{
                "classes": [
                    { "name": "Range",
                      "methods": [ { "name": "set_value" }, { "name": "get_value" } ],
                      "properties": [
                        { "name": "value", "type": "float", "setter": "_set_value", "getter": "get_value" },
                        { "name": "ratio", "type": "float", "setter": "set_as_ratio", "getter": "" }
                      ] }
                ]
            }"#,
        )
    }

    #[test]
    fn test_missing_setter_warns() {
        let mut diagnostics = Vec::new();
        MissingAccessorLint.check(&range_api(), &CodegenOptions::default(), &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
        assert_eq!(
            diagnostics[0].message,
            "setter 'set_as_ratio' of property 'Range.ratio' is not a method of 'Range'"
        );
        assert_eq!(
            diagnostics[0].location.as_deref(),
            Some("classes.Range.properties.ratio")
        );
    }

    #[test]
    fn test_strict_accessors_error() {
        let options = CodegenOptions {
            strict_accessors: true,
            ..CodegenOptions::default()
        };

        let mut diagnostics = Vec::new();
        MissingAccessorLint.check(&range_api(), &options, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_error());
    }

    #[test]
    fn test_skipped_class_is_not_checked() {
        let api = parse_api(
            r#"{
                "builtin_classes": [
                    { "name": "String", "properties": [ { "name": "length", "getter": "len" } ] }
                ]
            }"#,
        );

        let mut diagnostics = Vec::new();
        MissingAccessorLint.check(&api, &CodegenOptions::default(), &mut diagnostics);

        assert!(diagnostics.is_empty());
    }
}
