//! Options that steer lowering and validation.

use luagd_bindgen_manifest::{BindgenConfig, ClassDescriptor, ExtensionApi, SKIPPED_CLASSES};

/// Options shared by all pipeline phases.
#[derive(Debug, Clone)]
pub struct CodegenOptions {
    /// Classes that get no bindings.
    pub skip_classes: Vec<String>,
    /// Report unresolvable accessors as errors instead of warnings.
    pub strict_accessors: bool,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            skip_classes: SKIPPED_CLASSES.iter().map(|s| s.to_string()).collect(),
            strict_accessors: false,
        }
    }
}

impl From<&BindgenConfig> for CodegenOptions {
    fn from(config: &BindgenConfig) -> Self {
        Self {
            skip_classes: config.skip_classes.clone(),
            strict_accessors: config.strict_accessors,
        }
    }
}

impl CodegenOptions {
    /// Returns true if `name` gets no bindings.
    pub fn skips_class(&self, name: &str) -> bool {
        self.skip_classes.iter().any(|s| s == name)
    }

    /// Classes that get bindings, tagged with the API section they come from.
    pub fn bound_classes<'a>(
        &'a self,
        api: &'a ExtensionApi,
    ) -> impl Iterator<Item = (&'static str, &'a ClassDescriptor)> + 'a {
        api.builtin_classes
            .iter()
            .map(|c| ("builtin_classes", c))
            .chain(api.classes.iter().map(|c| ("classes", c)))
            .filter(move |(_, c)| !self.skips_class(&c.name))
    }
}
