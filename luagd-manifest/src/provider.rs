//! Fixed tables and lookups over the API that the generator consults.

use crate::{ExtensionApi, SingletonDescriptor};

/// Builtin classes represented by Luau primitives; they get no bindings.
pub const SKIPPED_CLASSES: &[&str] = &["Nil", "bool", "int", "float", "String"];

/// A utility function that is exposed to scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtilityFunction {
    /// Engine name.
    pub name: &'static str,
    /// Luau name, if it differs from the engine name.
    pub rename: Option<&'static str>,
    /// Print-like functions accept any number of arguments of any type.
    pub is_print: bool,
}

impl UtilityFunction {
    const fn fixed(name: &'static str) -> Self {
        Self {
            name,
            rename: None,
            is_print: false,
        }
    }

    const fn renamed(name: &'static str, rename: &'static str) -> Self {
        Self {
            name,
            rename: Some(rename),
            is_print: false,
        }
    }

    const fn print(name: &'static str) -> Self {
        Self {
            name,
            rename: None,
            is_print: true,
        }
    }

    /// Name in the Luau global table.
    pub fn luau_name(&self) -> &'static str {
        self.rename.unwrap_or(self.name)
    }
}

/// Utility functions to bind, in registration order.
pub const UTILITY_FUNCTIONS: &[UtilityFunction] = &[
    // math functions not provided by Luau
    UtilityFunction::fixed("ease"),
    UtilityFunction::renamed("lerpf", "lerp"),
    UtilityFunction::fixed("cubic_interpolate"),
    UtilityFunction::fixed("bezier_interpolate"),
    UtilityFunction::fixed("lerp_angle"),
    UtilityFunction::fixed("inverse_lerp"),
    UtilityFunction::fixed("range_lerp"),
    UtilityFunction::fixed("smoothstep"),
    UtilityFunction::fixed("move_toward"),
    UtilityFunction::fixed("linear2db"),
    UtilityFunction::fixed("db2linear"),
    UtilityFunction::renamed("wrapf", "wrap"),
    UtilityFunction::fixed("pingpong"),
    UtilityFunction::fixed("is_equal_approx"),
    // print
    UtilityFunction::print("print"),
    UtilityFunction::print("printraw"),
    UtilityFunction::print("printerr"),
    UtilityFunction::print("print_verbose"),
    UtilityFunction::print("print_rich"),
    UtilityFunction::print("push_error"),
    UtilityFunction::print("push_warning"),
    // other
    UtilityFunction::fixed("hash"),
    UtilityFunction::fixed("is_instance_valid"),
];

/// Look up an allow-listed utility function by engine name.
pub fn utility_function(name: &str) -> Option<&'static UtilityFunction> {
    UTILITY_FUNCTIONS.iter().find(|f| f.name == name)
}

impl ExtensionApi {
    /// Singletons whose declared type is exactly `type_name`.
    pub fn singletons_of_type<'a>(
        &'a self,
        type_name: &'a str,
    ) -> impl Iterator<Item = &'a SingletonDescriptor> + 'a {
        self.singletons.iter().filter(move |s| s.ty == type_name)
    }
}
