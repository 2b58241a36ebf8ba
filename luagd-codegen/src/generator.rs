//! Writes binding tables to disk for the emitter.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use luagd_bindgen_core::{
    Codegen, FileRules, GenerateResult, GeneratedFile, Overwrite, PreviewFile, WriteResult,
};
use luagd_bindgen_ir::BindingsIR;

/// Name of the binding tables file inside the output directory.
pub const BINDINGS_FILE: &str = "bindings.json";

/// JSON backend: serializes [`BindingsIR`] into `bindings.json`.
pub struct Generator<'a> {
    ir: &'a BindingsIR,
    pretty: bool,
}

impl<'a> Generator<'a> {
    pub fn new(ir: &'a BindingsIR, pretty: bool) -> Self {
        Self { ir, pretty }
    }

    fn files(&self) -> Vec<Box<dyn GeneratedFile + 'a>> {
        vec![Box::new(BindingsFile {
            ir: self.ir,
            pretty: self.pretty,
        })]
    }
}

impl Codegen for Generator<'_> {
    fn target(&self) -> &'static str {
        "json"
    }

    fn preview(&self) -> Result<Vec<PreviewFile>> {
        self.files()
            .iter()
            .map(|file| -> Result<PreviewFile> {
                Ok(PreviewFile {
                    path: file.path(Path::new("")).display().to_string(),
                    content: file.render()?,
                })
            })
            .collect()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();

        for file in self.files() {
            let path = file.path(output_dir);
            match file.write(output_dir)? {
                WriteResult::Written => result.written.push(path),
                WriteResult::Skipped => result.unchanged.push(path),
            }
        }

        Ok(result)
    }
}

struct BindingsFile<'a> {
    ir: &'a BindingsIR,
    pretty: bool,
}

impl GeneratedFile for BindingsFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(BINDINGS_FILE)
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: Overwrite::IfChanged,
        }
    }

    fn render(&self) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(self.ir)
        } else {
            serde_json::to_string(self.ir)
        };
        let mut content = json.wrap_err("failed to serialize bindings")?;
        content.push('\n');
        Ok(content)
    }
}
