//! Structural validation of a parsed API dump.

use std::{collections::HashSet, sync::Arc};

use miette::SourceSpan;

use super::{EnumDescriptor, ExtensionApi};
use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current path
/// through the API hierarchy, so errors can name the offending entry.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "extension_api.json");
/// let nested = ctx.push("classes").push("Node").push("enums");
/// nested.validate_enum(&descriptor)?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments (e.g., ["classes", "Node", "enums"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Find the span of the `n`th declaration named `name`.
    pub fn find_span(&self, name: &str, nth: usize) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name, nth)
    }

    /// Validate the whole API.
    ///
    /// Fails on the first malformed entry: an enum without values, or a class
    /// name declared twice.
    pub fn validate_api(&self, api: &'a ExtensionApi) -> Result<()> {
        let global = self.push("global_enums");
        for descriptor in &api.global_enums {
            global.validate_enum(descriptor)?;
        }

        let mut seen = HashSet::new();
        for (section, classes) in [
            ("builtin_classes", &api.builtin_classes),
            ("classes", &api.classes),
        ] {
            for class in classes {
                if !seen.insert(class.name.as_str()) {
                    return Err(self.source.duplicate_class_error(
                        &class.name,
                        self.find_span(&class.name, 0),
                        self.find_span(&class.name, 1),
                    ));
                }

                let enums = self.push(section).push(&class.name).push("enums");
                for descriptor in &class.enums {
                    enums.validate_enum(descriptor)?;
                }
            }
        }

        Ok(())
    }

    /// Validate a single enum declaration.
    pub fn validate_enum(&self, descriptor: &EnumDescriptor) -> Result<()> {
        if descriptor.values.is_empty() {
            return Err(self.source.empty_enum_error(
                &descriptor.name,
                self.path_string(),
                self.find_span(&descriptor.name, 0),
            ));
        }
        Ok(())
    }
}

/// Find the span of a declared name in the JSON source.
///
/// Matches `"name": "<name>"` with or without the space Godot's dumper
/// emits, and returns the span of the name itself.
pub(crate) fn find_name_span(src: &str, name: &str, nth: usize) -> Option<SourceSpan> {
    let patterns = [
        format!("\"name\": \"{}\"", name),
        format!("\"name\":\"{}\"", name),
    ];

    for pattern in &patterns {
        if let Some((pos, _)) = src.match_indices(pattern.as_str()).nth(nth) {
            // the name sits right before the closing quote
            let start = pos + pattern.len() - name.len() - 1;
            return Some(SourceSpan::from((start, name.len())));
        }
    }

    None
}
