//! Operator set resolution.

use luagd_bindgen_ir::Metamethod;
use luagd_bindgen_manifest::OperatorDescriptor;

/// The engine's catch-all value type.
pub const DYNAMIC_TYPE: &str = "Variant";

/// Registration priority. Generated dispatch tries overloads in order, so
/// the least specific right operand goes last: `Variant` after everything,
/// and `int` after other types because it may be dropped for a `float`
/// overload.
fn priority(op: &OperatorDescriptor) -> u8 {
    match op.right_type.as_deref() {
        Some("int") => 1,
        Some(DYNAMIC_TYPE) => 2,
        _ => 0,
    }
}

/// Select and order the operators of `class_name` that become metamethods.
///
/// Operators are stably sorted by [`priority`], then filtered:
/// - symbols without a Luau metamethod are dropped;
/// - `==` is only kept against the class itself (Luau never calls `__eq`
///   for operands of different types);
/// - an `int` overload is dropped once a `float` overload was accepted,
///   since Luau numbers cover both.
pub fn resolve_operators<'a>(
    class_name: &str,
    operators: &'a [OperatorDescriptor],
) -> Vec<(&'a OperatorDescriptor, Metamethod)> {
    let mut sorted: Vec<&OperatorDescriptor> = operators.iter().collect();
    sorted.sort_by_key(|op| priority(op));

    let mut output: Vec<(&OperatorDescriptor, Metamethod)> = Vec::new();

    for op in sorted {
        let Some(metamethod) = Metamethod::from_symbol(&op.name) else {
            continue;
        };

        if let Some(right_type) = op.right_type.as_deref() {
            if metamethod == Metamethod::Eq && right_type != class_name {
                continue;
            }

            let has_float = output
                .iter()
                .any(|(accepted, _)| accepted.right_type.as_deref() == Some("float"));
            if right_type == "int" && has_float {
                continue;
            }
        }

        output.push((op, metamethod));
    }

    output
}
