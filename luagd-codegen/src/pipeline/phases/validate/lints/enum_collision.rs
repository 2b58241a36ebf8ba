//! Lint for enum values that collide once their prefix is stripped.

use indexmap::IndexMap;
use luagd_bindgen_manifest::{EnumDescriptor, ExtensionApi};

use super::super::Lint;
use crate::{
    pipeline::{CodegenOptions, Diagnostic},
    resolve::{enum_prefix, strip_enum_prefix},
};

/// Errors when two values of one enum strip to the same Luau name, or when a
/// value is nothing but the shared prefix and would strip to an empty name.
///
/// The emitter keys enum tables by the stripped name, so a collision would
/// silently drop a value.
pub struct EnumCollisionLint;

impl Lint for EnumCollisionLint {
    fn name(&self) -> &'static str {
        "enum-collision"
    }

    fn description(&self) -> &'static str {
        "Check stripped enum value names are unique within their enum"
    }

    fn check(
        &self,
        api: &ExtensionApi,
        options: &CodegenOptions,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        for descriptor in &api.global_enums {
            check_enum(descriptor, "global_enums", diagnostics);
        }

        for (section, class) in options.bound_classes(api) {
            let location = format!("{}.{}.enums", section, class.name);
            for descriptor in &class.enums {
                check_enum(descriptor, &location, diagnostics);
            }
        }
    }
}

fn check_enum(descriptor: &EnumDescriptor, parent: &str, diagnostics: &mut Vec<Diagnostic>) {
    let prefix = enum_prefix(&descriptor.value_names());
    let mut seen: IndexMap<String, &str> = IndexMap::new();
    let location = format!("{}.{}", parent, descriptor.name);

    for value in &descriptor.values {
        if !prefix.is_empty() && value.name == prefix {
            diagnostics.push(
                Diagnostic::error(
                    "validate",
                    format!(
                        "value '{}' of enum '{}' is only its prefix and has no name of its own",
                        value.name, descriptor.name
                    ),
                )
                .at(location.clone()),
            );
            continue;
        }

        let stripped = strip_enum_prefix(&prefix, &value.name);
        if let Some(first) = seen.get(&stripped) {
            diagnostics.push(
                Diagnostic::error(
                    "validate",
                    format!(
                        "values '{}' and '{}' of enum '{}' both bind as '{}'",
                        first, value.name, descriptor.name, stripped
                    ),
                )
                .at(location.clone()),
            );
        } else {
            seen.insert(stripped, &value.name);
        }
    }
}
