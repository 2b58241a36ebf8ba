use std::path::{Path, PathBuf};

use super::ExtensionApi;
use crate::{Error, Result};

/// Represents an `extension_api.json` file with both raw content and parsed API.
#[derive(Debug)]
pub struct ApiFile {
    path: PathBuf,
    content: String,
    api: ExtensionApi,
}

impl ApiFile {
    /// Open and parse an API dump.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let filename = path.display().to_string();
        let api = ExtensionApi::from_str_with_filename(&content, &filename)?;

        Ok(Self { path, content, api })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed API.
    pub fn api(&self) -> &ExtensionApi {
        &self.api
    }

    /// Consume the file, keeping only the parsed API.
    pub fn into_api(self) -> ExtensionApi {
        self.api
    }
}
