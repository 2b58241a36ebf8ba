//! Property accessor resolution.

use luagd_bindgen_core::to_pascal_case;
use luagd_bindgen_manifest::{ClassDescriptor, PropertyDescriptor};

/// Outcome of resolving one declared accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Accessor {
    /// The property declares no such accessor.
    Absent,
    /// Resolved to a method on the class; holds its Luau name.
    Resolved(String),
    /// Declared, but no method of the class matches it.
    Missing {
        /// The accessor name as declared.
        declared: String,
    },
}

impl Accessor {
    /// Luau identifier of the accessor, empty unless resolved.
    pub fn identifier(&self) -> &str {
        match self {
            Accessor::Resolved(name) => name,
            Accessor::Absent | Accessor::Missing { .. } => "",
        }
    }

    /// Returns true if the accessor was declared but could not be resolved.
    pub fn is_missing(&self) -> bool {
        matches!(self, Accessor::Missing { .. })
    }

    /// The resolved Luau name, if any.
    pub fn resolved(&self) -> Option<&str> {
        match self {
            Accessor::Resolved(name) => Some(name),
            _ => None,
        }
    }
}

/// Resolved setter and getter of a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorResolution {
    pub setter: Accessor,
    pub getter: Accessor,
}

impl AccessorResolution {
    /// Returns true if either accessor is missing.
    pub fn has_missing(&self) -> bool {
        self.setter.is_missing() || self.getter.is_missing()
    }
}

/// Resolve the setter and getter of `property` against `class`.
///
/// Only methods declared by `class` itself are searched, never those of its
/// base classes. When the declared name is not found, the name with leading
/// and trailing underscores trimmed is tried, so that properties backed by
/// virtual-looking names (`_set_value`) bind to the real method (`set_value`).
pub fn resolve_accessors(
    property: &PropertyDescriptor,
    class: &ClassDescriptor,
) -> AccessorResolution {
    AccessorResolution {
        setter: resolve_accessor(property.setter.as_deref(), class),
        getter: resolve_accessor(property.getter.as_deref(), class),
    }
}

fn resolve_accessor(declared: Option<&str>, class: &ClassDescriptor) -> Accessor {
    let declared = match declared {
        None | Some("") => return Accessor::Absent,
        Some(name) => name,
    };

    if class.declares_method(declared) {
        return Accessor::Resolved(to_pascal_case(declared));
    }

    let trimmed = declared.trim_matches('_');
    if class.declares_method(trimmed) {
        return Accessor::Resolved(to_pascal_case(trimmed));
    }

    Accessor::Missing {
        declared: declared.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use luagd_bindgen_manifest::MethodDescriptor;

    use super::*;

    fn method(name: &str) -> MethodDescriptor {
        MethodDescriptor {
            name: name.into(),
            is_virtual: false,
            is_const: false,
            is_static: false,
            is_vararg: false,
            arguments: vec![],
            return_type: None,
            return_value: None,
        }
    }

    fn class(methods: &[&str]) -> ClassDescriptor {
        ClassDescriptor {
            name: "Range".into(),
            inherits: Some("Control".into()),
            is_refcounted: false,
            is_instantiable: true,
            methods: methods.iter().map(|m| method(m)).collect(),
            properties: vec![],
            operators: vec![],
            enums: vec![],
        }
    }

    fn property(setter: Option<&str>, getter: Option<&str>) -> PropertyDescriptor {
        PropertyDescriptor {
            name: "value".into(),
            ty: "float".into(),
            setter: setter.map(Into::into),
            getter: getter.map(Into::into),
        }
    }

    #[test]
    fn test_direct_match() {
        let class = class(&["set_value", "get_value"]);
        let res = resolve_accessors(&property(Some("set_value"), Some("get_value")), &class);

        assert_eq!(res.setter, Accessor::Resolved("SetValue".into()));
        assert_eq!(res.getter.identifier(), "GetValue");
        assert!(!res.has_missing());
    }

    #[test]
    fn test_underscore_fallback() {
        let class = class(&["set_value", "get_value"]);
        let res = resolve_accessors(&property(Some("_set_value"), Some("get_value_")), &class);

        assert_eq!(res.setter.identifier(), "SetValue");
        assert!(!res.setter.is_missing());
        assert_eq!(res.getter.identifier(), "GetValue");
    }

    #[test]
    fn test_declared_name_preferred() {
        // an exact match wins over the trimmed form
        let class = class(&["_set_value", "set_value"]);
        let res = resolve_accessors(&property(Some("_set_value"), None), &class);

        assert_eq!(res.setter.identifier(), "_SetValue");
    }

    #[test]
    fn test_missing() {
        let class = class(&["get_value"]);
        let res = resolve_accessors(&property(Some("set_ratio"), Some("get_value")), &class);

        assert_eq!(
            res.setter,
            Accessor::Missing {
                declared: "set_ratio".into()
            }
        );
        assert_eq!(res.setter.identifier(), "");
        assert!(res.setter.is_missing());
        assert!(res.has_missing());
        assert_eq!(res.getter.resolved(), Some("GetValue"));
    }

    #[test]
    fn test_absent_is_not_missing() {
        let class = class(&[]);

        for res in [
            resolve_accessors(&property(None, None), &class),
            resolve_accessors(&property(Some(""), Some("")), &class),
        ] {
            assert_eq!(res.setter, Accessor::Absent);
            assert_eq!(res.getter, Accessor::Absent);
            assert_eq!(res.setter.identifier(), "");
            assert!(!res.has_missing());
        }
    }

    #[test]
    fn test_base_class_methods_ignored() {
        // set_visible lives on CanvasItem, not on this class
        let class = class(&["set_value"]);
        let res = resolve_accessors(&property(Some("set_visible"), None), &class);

        assert!(res.setter.is_missing());
    }
}
