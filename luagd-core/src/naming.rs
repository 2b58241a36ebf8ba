//! Identifier casing used by the generated Luau API surface.

/// Convert a snake_case identifier to PascalCase (e.g., "get_node" -> "GetNode").
///
/// Empty segments are dropped, so repeated underscores collapse. A leading
/// underscore survives as a single leading underscore ("_ready" -> "_Ready").
/// Dimensional suffixes are fixed up after casing ("move_local_2d" -> "MoveLocal2D").
pub fn to_pascal_case(s: &str) -> String {
    let mut output: String = s
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect();

    if s.starts_with('_') {
        output.insert(0, '_');
    }

    output.replace("2d", "2D").replace("3d", "3D")
}

/// Convert a snake_case identifier to camelCase (e.g., "get_node" -> "getNode").
///
/// The PascalCase form is computed first, then everything up to and including
/// the first cased character is lowercased. Returns `None` if the identifier
/// has no cased character at all (e.g., "_2").
pub fn to_camel_case(s: &str) -> Option<String> {
    let pascal = to_pascal_case(s);
    let (begin, first) = pascal.char_indices().find(|(_, c)| is_cased(*c))?;
    let split = begin + first.len_utf8();

    let mut output = pascal[..split].to_lowercase();
    output.push_str(&pascal[split..]);
    Some(output)
}

/// Canonical name for an enum, with scoping dots removed
/// (e.g., "Variant.Type" -> "VariantType").
pub fn canonical_enum_name(name: &str) -> String {
    name.replace('.', "")
}

fn is_cased(c: char) -> bool {
    c.to_uppercase().ne(c.to_lowercase())
}
