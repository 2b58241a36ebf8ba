//! Binding statistics block shared by several reports.

use luagd_bindgen_codegen::ComputedData;
use luagd_bindgen_core::{Indent, SourceBuffer};

/// Render binding statistics as an aligned, indented block.
pub fn render_stats(computed: &ComputedData, level: usize) -> String {
    let rows = [
        (
            "Classes",
            format!(
                "{} builtin, {} engine ({} skipped)",
                computed.builtin_class_count, computed.class_count, computed.skipped_class_count
            ),
        ),
        (
            "Methods",
            format!(
                "{} ({} skipped)",
                computed.method_count, computed.skipped_method_count
            ),
        ),
        (
            "Operators",
            format!(
                "{} ({} dropped)",
                computed.operator_count, computed.dropped_operator_count
            ),
        ),
        (
            "Properties",
            format!(
                "{} ({} missing accessors)",
                computed.property_count, computed.missing_accessor_count
            ),
        ),
        (
            "Enums",
            format!(
                "{} ({} values)",
                computed.enum_count, computed.enum_value_count
            ),
        ),
        ("Singletons", computed.singleton_count.to_string()),
        ("Utilities", computed.utility_count.to_string()),
    ];

    let mut buffer = SourceBuffer::new(Indent::Spaces(2));
    for (label, value) in &rows {
        buffer.append(level, &format!("{:<12}{}", label, value));
    }
    buffer.finish()
}
