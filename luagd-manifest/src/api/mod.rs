//! Extension API types and parsing for `extension_api.json` dumps.

mod file;
mod parse;
mod validate;

use luagd_bindgen_core::Version;
use serde::Deserialize;

pub use file::ApiFile;
pub use parse::parse_api;
pub use validate::ParseContext;

/// Root of an `extension_api.json` dump.
///
/// Only the sections the binding generator reads are modelled; unknown keys
/// (e.g. `builtin_class_sizes`, `native_structures`) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtensionApi {
    /// Engine version the dump was produced by.
    #[serde(default)]
    pub header: Option<ApiHeader>,

    #[serde(default)]
    pub global_enums: Vec<EnumDescriptor>,

    #[serde(default)]
    pub utility_functions: Vec<UtilityFunctionDescriptor>,

    /// Variant value types (Vector2, Color, ...).
    #[serde(default)]
    pub builtin_classes: Vec<ClassDescriptor>,

    /// Object-derived engine classes.
    #[serde(default)]
    pub classes: Vec<ClassDescriptor>,

    #[serde(default)]
    pub singletons: Vec<SingletonDescriptor>,
}

impl ExtensionApi {
    /// Find a builtin or engine class by name.
    pub fn class(&self, name: &str) -> Option<&ClassDescriptor> {
        self.builtin_classes
            .iter()
            .chain(self.classes.iter())
            .find(|c| c.name == name)
    }

    /// Find a utility function by name.
    pub fn utility_function(&self, name: &str) -> Option<&UtilityFunctionDescriptor> {
        self.utility_functions.iter().find(|f| f.name == name)
    }

    /// Engine version from the header, if present.
    pub fn version(&self) -> Option<Version> {
        self.header.as_ref().map(ApiHeader::version)
    }
}

/// Version header of the dump.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiHeader {
    pub version_major: u32,
    pub version_minor: u32,
    pub version_patch: u32,
    #[serde(default)]
    pub version_status: Option<String>,
    #[serde(default)]
    pub version_full_name: Option<String>,
}

impl ApiHeader {
    pub fn version(&self) -> Version {
        Version::new(self.version_major, self.version_minor, self.version_patch)
    }
}

/// A builtin or engine class.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassDescriptor {
    pub name: String,

    /// Parent class (engine classes only).
    #[serde(default)]
    pub inherits: Option<String>,

    #[serde(default)]
    pub is_refcounted: bool,

    #[serde(default)]
    pub is_instantiable: bool,

    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,

    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,

    /// Operators (builtin classes only).
    #[serde(default)]
    pub operators: Vec<OperatorDescriptor>,

    #[serde(default)]
    pub enums: Vec<EnumDescriptor>,
}

impl ClassDescriptor {
    /// Check whether this class itself declares a method with the given name.
    ///
    /// Inherited methods are not considered.
    pub fn declares_method(&self, name: &str) -> bool {
        self.methods.iter().any(|m| m.name == name)
    }
}

/// A method declared on a class.
#[derive(Debug, Clone, Deserialize)]
pub struct MethodDescriptor {
    pub name: String,

    #[serde(default)]
    pub is_virtual: bool,

    #[serde(default)]
    pub is_const: bool,

    #[serde(default)]
    pub is_static: bool,

    #[serde(default)]
    pub is_vararg: bool,

    #[serde(default)]
    pub arguments: Vec<ArgumentDescriptor>,

    /// Return type as declared on builtin class methods.
    #[serde(default)]
    pub return_type: Option<String>,

    /// Return type as declared on engine class methods.
    #[serde(default)]
    pub return_value: Option<ReturnValue>,
}

impl MethodDescriptor {
    /// The declared return type, whichever form the dump used.
    pub fn returns(&self) -> Option<&str> {
        self.return_type
            .as_deref()
            .or_else(|| self.return_value.as_ref().map(|r| r.ty.as_str()))
    }
}

/// Return value of an engine class method.
#[derive(Debug, Clone, Deserialize)]
pub struct ReturnValue {
    #[serde(rename = "type")]
    pub ty: String,
}

/// A method or function argument.
#[derive(Debug, Clone, Deserialize)]
pub struct ArgumentDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

/// A native operator declared on a builtin class.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OperatorDescriptor {
    /// Operator symbol (e.g., "==", "unary-").
    pub name: String,

    /// Right operand type. Absent for unary operators.
    #[serde(default)]
    pub right_type: Option<String>,

    #[serde(default)]
    pub return_type: Option<String>,
}

/// A property exposed through setter/getter methods.
#[derive(Debug, Clone, Deserialize)]
pub struct PropertyDescriptor {
    pub name: String,

    #[serde(rename = "type", default)]
    pub ty: String,

    #[serde(default)]
    pub setter: Option<String>,

    #[serde(default)]
    pub getter: Option<String>,
}

/// An enum (global or class-scoped).
#[derive(Debug, Clone, Deserialize)]
pub struct EnumDescriptor {
    /// Enum name; global enums may be scoped (e.g., "Variant.Type").
    pub name: String,

    #[serde(default)]
    pub is_bitfield: bool,

    /// Values in declaration order.
    #[serde(default)]
    pub values: Vec<EnumValue>,
}

impl EnumDescriptor {
    /// Value names in declaration order.
    pub fn value_names(&self) -> Vec<&str> {
        self.values.iter().map(|v| v.name.as_str()).collect()
    }
}

/// One enum value.
#[derive(Debug, Clone, Deserialize)]
pub struct EnumValue {
    pub name: String,
    pub value: i64,
}

/// A singleton instance registered with the engine.
#[derive(Debug, Clone, Deserialize)]
pub struct SingletonDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

/// A free utility function.
#[derive(Debug, Clone, Deserialize)]
pub struct UtilityFunctionDescriptor {
    pub name: String,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub return_type: Option<String>,

    #[serde(default)]
    pub is_vararg: bool,

    #[serde(default)]
    pub arguments: Vec<ArgumentDescriptor>,
}
