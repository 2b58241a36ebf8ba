//! Pure resolvers that turn API descriptors into Luau-facing names and tables.
//!
//! Every function in here is deterministic and side-effect free; running one
//! twice on the same descriptors yields identical output.

mod accessors;
mod enums;
mod methods;
mod operators;

pub use accessors::{Accessor, AccessorResolution, resolve_accessors};
pub use enums::{enum_prefix, strip_enum_prefix};
pub use methods::{ROOT_CLASS, bindable_methods, should_skip_method};
pub use operators::{DYNAMIC_TYPE, resolve_operators};
