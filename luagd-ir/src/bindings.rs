//! Binding tables.
//!
//! ```text
//! ExtensionApi → LowerPhase (resolvers) → BindingsIR → bindings.json
//! ```

use serde::Serialize;

use crate::{ClassKind, Metamethod};

/// Everything the emitter needs, in emission order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BindingsIR {
    /// Source API metadata.
    pub meta: ApiMeta,
    /// Variant value types.
    pub builtin_classes: Vec<ClassBinding>,
    /// Object-derived engine classes.
    pub classes: Vec<ClassBinding>,
    /// Enums declared at global scope.
    pub global_enums: Vec<EnumBinding>,
    /// Allow-listed utility functions.
    pub utility_functions: Vec<UtilityBinding>,
}

impl BindingsIR {
    /// Iterate builtin classes followed by engine classes.
    pub fn all_classes(&self) -> impl Iterator<Item = &ClassBinding> {
        self.builtin_classes.iter().chain(self.classes.iter())
    }

    /// Find a class binding by name.
    pub fn class(&self, name: &str) -> Option<&ClassBinding> {
        self.all_classes().find(|c| c.name == name)
    }
}

/// Metadata about the API dump the tables were built from.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ApiMeta {
    /// Engine version string (e.g., "4.1.0"), if the dump had a header.
    pub version: Option<String>,
}

/// A class and everything bound on it.
#[derive(Debug, Clone, Serialize)]
pub struct ClassBinding {
    pub name: String,
    pub kind: ClassKind,
    /// Parent class, if any.
    pub parent: Option<String>,
    /// Directly callable methods.
    pub methods: Vec<MethodBinding>,
    /// Operators in registration order.
    pub operators: Vec<OperatorBinding>,
    pub properties: Vec<PropertyBinding>,
    pub enums: Vec<EnumBinding>,
    /// Names of singleton instances of this class.
    pub singletons: Vec<String>,
}

impl ClassBinding {
    /// Returns true if this class has at least one singleton instance.
    pub fn is_singleton(&self) -> bool {
        !self.singletons.is_empty()
    }

    /// Find a bound method by its engine name.
    pub fn method(&self, name: &str) -> Option<&MethodBinding> {
        self.methods.iter().find(|m| m.name == name)
    }
}

/// A method exposed to scripts.
#[derive(Debug, Clone, Serialize)]
pub struct MethodBinding {
    /// Engine name (snake_case).
    pub name: String,
    /// Luau name (PascalCase).
    pub luau_name: String,
    pub is_const: bool,
    pub is_static: bool,
    pub is_vararg: bool,
    pub arguments: Vec<ArgumentBinding>,
    pub return_type: Option<String>,
}

/// A method or function argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgumentBinding {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

/// An operator installed as a metamethod.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperatorBinding {
    /// Native operator symbol (e.g., "+").
    pub symbol: String,
    pub metamethod: Metamethod,
    /// Right operand type; `None` for unary operators.
    pub right_type: Option<String>,
    pub return_type: Option<String>,
}

/// A property with its resolved accessors.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyBinding {
    /// Engine name (snake_case).
    pub name: String,
    /// Luau name (camelCase).
    pub luau_name: String,
    #[serde(rename = "type")]
    pub ty: String,
    /// Luau name of the setter method, if the property has one that resolved.
    pub setter: Option<String>,
    /// Luau name of the getter method, if the property has one that resolved.
    pub getter: Option<String>,
    /// The setter is declared but names no method of the class.
    pub setter_missing: bool,
    /// The getter is declared but names no method of the class.
    pub getter_missing: bool,
}

/// An enum with its prefix-stripped value names.
#[derive(Debug, Clone, Serialize)]
pub struct EnumBinding {
    /// Canonical name (scoping dots removed).
    pub name: String,
    pub is_bitfield: bool,
    /// Prefix shared by the values (possibly empty).
    pub prefix: String,
    pub values: Vec<EnumValueBinding>,
}

/// One enum value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumValueBinding {
    /// Engine name (e.g., "KEY_A").
    pub name: String,
    /// Luau name with the enum prefix removed (e.g., "A").
    pub luau_name: String,
    pub value: i64,
}

/// A free utility function exposed to scripts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UtilityBinding {
    /// Engine name.
    pub name: String,
    /// Name in the Luau global table (may be renamed, e.g. "lerpf" -> "lerp").
    pub luau_name: String,
    /// Print-like functions take any number of arguments of any type.
    pub is_print: bool,
    pub is_vararg: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_class(name: &str, kind: ClassKind) -> ClassBinding {
        ClassBinding {
            name: name.into(),
            kind,
            parent: None,
            methods: vec![MethodBinding {
                name: "get_name".into(),
                luau_name: "GetName".into(),
                is_const: true,
                is_static: false,
                is_vararg: false,
                arguments: vec![],
                return_type: Some("StringName".into()),
            }],
            operators: vec![],
            properties: vec![],
            enums: vec![],
            singletons: vec![],
        }
    }

    #[test]
    fn test_all_classes_order() {
        let ir = BindingsIR {
            builtin_classes: vec![make_class("Vector2", ClassKind::Builtin)],
            classes: vec![make_class("Node", ClassKind::Object)],
            ..Default::default()
        };

        let names: Vec<_> = ir.all_classes().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Vector2", "Node"]);
        assert!(ir.class("Node").is_some());
        assert!(ir.class("Object").is_none());
    }

    #[test]
    fn test_class_lookup_helpers() {
        let mut class = make_class("Engine", ClassKind::Object);
        assert!(!class.is_singleton());

        class.singletons.push("Engine".into());
        assert!(class.is_singleton());
        assert_eq!(class.method("get_name").unwrap().luau_name, "GetName");
        assert!(class.method("set_name").is_none());
    }

    #[test]
    fn test_serialize_property() {
        let prop = PropertyBinding {
            name: "position".into(),
            luau_name: "position".into(),
            ty: "Vector2".into(),
            setter: Some("SetPosition".into()),
            getter: None,
            setter_missing: false,
            getter_missing: true,
        };

        let json = serde_json::to_value(&prop).unwrap();
        assert_eq!(json["type"], "Vector2");
        assert_eq!(json["setter"], "SetPosition");
        assert!(json["getter"].is_null());
        assert_eq!(json["setter_missing"], false);
        assert_eq!(json["getter_missing"], true);
    }
}
