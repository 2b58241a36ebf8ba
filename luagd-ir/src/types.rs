//! Core type definitions.

use serde::Serialize;

/// A Luau metamethod that an operator binding installs.
///
/// The set is fixed: native operators without an entry here have no Luau
/// counterpart and are never bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Metamethod {
    Eq,
    Lt,
    Le,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Unm,
}

impl Metamethod {
    /// Look up the metamethod for a native operator symbol (e.g., "==" -> `Eq`).
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let metamethod = match symbol {
            "==" => Metamethod::Eq,
            "<" => Metamethod::Lt,
            "<=" => Metamethod::Le,
            "+" => Metamethod::Add,
            "-" => Metamethod::Sub,
            "*" => Metamethod::Mul,
            "/" => Metamethod::Div,
            "%" => Metamethod::Mod,
            "unary-" => Metamethod::Unm,
            _ => return None,
        };
        Some(metamethod)
    }

    /// Get the short name (e.g., "eq").
    pub fn as_str(&self) -> &'static str {
        match self {
            Metamethod::Eq => "eq",
            Metamethod::Lt => "lt",
            Metamethod::Le => "le",
            Metamethod::Add => "add",
            Metamethod::Sub => "sub",
            Metamethod::Mul => "mul",
            Metamethod::Div => "div",
            Metamethod::Mod => "mod",
            Metamethod::Unm => "unm",
        }
    }

    /// Get the metatable key (e.g., "__eq").
    pub fn metatable_key(&self) -> String {
        format!("__{}", self.as_str())
    }
}

impl std::fmt::Display for Metamethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which half of the engine API a class comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    /// Variant value type (Vector2, Color, Array, ...).
    Builtin,
    /// Object-derived engine class (Node, Resource, ...).
    Object,
}
