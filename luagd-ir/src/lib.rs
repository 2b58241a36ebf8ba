//! Intermediate representation for the Luau binding generator.
//!
//! This crate holds the normalized binding tables handed to the emitter.
//! Every name in here is already in its final Luau form; the emitter only
//! has to render templates.
//!
//! # Architecture
//!
//! ```text
//! extension_api.json → luagd-manifest (parsing) → luagd-ir (binding tables) → emitter
//! ```

mod bindings;
mod types;

pub use bindings::{
    ApiMeta, ArgumentBinding, BindingsIR, ClassBinding, EnumBinding, EnumValueBinding,
    MethodBinding, OperatorBinding, PropertyBinding, UtilityBinding,
};
pub use types::{ClassKind, Metamethod};
