//! Enum value prefix detection.

/// Find the prefix shared by the values of one enum.
///
/// The first value is the candidate. The prefix grows one character at a
/// time while at most one value disagrees with the candidate at that
/// position, which tolerates a single outlier such as `METHOD_FLAGS_DEFAULT`
/// among `METHOD_FLAG_*` values. The result is then cut back to the last
/// underscore so it never ends mid-word (`TRANSFER_MODE_UNRELIABLE` and
/// `TRANSFER_MODE_UNRELIABLE_ORDERED` share `TRANSFER_MODE_U`, not a prefix).
///
/// Returns an empty string for an empty slice.
pub fn enum_prefix<S: AsRef<str>>(values: &[S]) -> String {
    let Some(first) = values.first() else {
        return String::new();
    };
    let values: Vec<&[u8]> = values.iter().map(|v| v.as_ref().as_bytes()).collect();
    let first = first.as_ref();

    let mut len = 0;
    for (i, candidate) in first.bytes().enumerate() {
        let invalid_count = values
            .iter()
            .filter(|value| value.get(i) != Some(&candidate))
            .count();

        if invalid_count > 1 {
            break;
        }
        len = i + 1;
    }

    // cut back to the last '_' within the common part
    match first.as_bytes()[..len].iter().rposition(|&b| b == b'_') {
        Some(end) => first[..=end].to_string(),
        None => String::new(),
    }
}

/// Remove `prefix` from an enum value name.
///
/// Names left starting with a digit get an `N` so they stay valid
/// identifiers (`KEY_0` -> `N0`). A value equal to the prefix keeps its
/// full name rather than becoming empty.
pub fn strip_enum_prefix(prefix: &str, value: &str) -> String {
    let stripped = match value.strip_prefix(prefix) {
        Some("") | None => value,
        Some(rest) => rest,
    };

    if stripped.starts_with(|c: char| c.is_ascii_digit()) {
        format!("N{}", stripped)
    } else {
        stripped.to_string()
    }
}
