//! Class method filtering.

use luagd_bindgen_manifest::{ClassDescriptor, MethodDescriptor};

/// The engine's root object class.
pub const ROOT_CLASS: &str = "Object";

/// Generic property access methods on the root class, bound by hand.
const ROOT_SPECIAL_METHODS: &[&str] = &["get", "set"];

/// Returns true if `method` of `class_name` must not be bound.
///
/// Virtual methods can't be called from scripts (script instances receive
/// them by implementing them), and `Object.get`/`Object.set` are special
/// cases of the emitter.
pub fn should_skip_method(class_name: &str, method: &MethodDescriptor) -> bool {
    method.is_virtual
        || (class_name == ROOT_CLASS && ROOT_SPECIAL_METHODS.contains(&method.name.as_str()))
}

/// Methods of `class` that are bound, in declaration order.
pub fn bindable_methods(class: &ClassDescriptor) -> Vec<&MethodDescriptor> {
    class
        .methods
        .iter()
        .filter(|m| !should_skip_method(&class.name, m))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn method(name: &str, is_virtual: bool) -> MethodDescriptor {
        MethodDescriptor {
            name: name.into(),
            is_virtual,
            is_const: false,
            is_static: false,
            is_vararg: false,
            arguments: vec![],
            return_type: None,
            return_value: None,
        }
    }

    fn class(name: &str, methods: Vec<MethodDescriptor>) -> ClassDescriptor {
        ClassDescriptor {
            name: name.into(),
            inherits: None,
            is_refcounted: false,
            is_instantiable: true,
            methods,
            properties: vec![],
            operators: vec![],
            enums: vec![],
        }
    }

    fn names(methods: &[&MethodDescriptor]) -> Vec<String> {
        methods.iter().map(|m| m.name.clone()).collect()
    }

    #[test]
    fn test_virtuals_skipped() {
        let node = class(
            "Node",
            vec![
                method("_ready", true),
                method("add_child", false),
                method("_process", true),
                method("get_parent", false),
            ],
        );

        assert_eq!(names(&bindable_methods(&node)), ["add_child", "get_parent"]);
    }

    #[test]
    fn test_root_special_methods_skipped() {
        let object = class(
            "Object",
            vec![
                method("get_class", false),
                method("set", false),
                method("get", false),
                method("set_meta", false),
                method("_get", true),
            ],
        );

        assert_eq!(
            names(&bindable_methods(&object)),
            ["get_class", "set_meta"]
        );
    }

    #[test]
    fn test_get_set_kept_on_other_classes() {
        let dict = class("Dictionary", vec![method("get", false), method("set", false)]);
        assert_eq!(names(&bindable_methods(&dict)), ["get", "set"]);
    }

    #[test]
    fn test_should_skip_method() {
        assert!(should_skip_method("Node", &method("_input", true)));
        assert!(should_skip_method("Object", &method("set", false)));
        assert!(!should_skip_method("Object", &method("notification", false)));
    }
}
