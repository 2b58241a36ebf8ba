//! Built-in lints.

mod enum_collision;
mod missing_accessor;
mod utility_allow_list;

pub use enum_collision::EnumCollisionLint;
pub use missing_accessor::MissingAccessorLint;
pub use utility_allow_list::UtilityAllowListLint;
