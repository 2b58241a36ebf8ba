//! Extension API parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{ExtensionApi, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for ExtensionApi {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_api(s, "extension_api.json")
    }
}

impl ExtensionApi {
    /// Parse an `extension_api.json` file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        parse_api(&content, &path.display().to_string())
    }

    /// Parse an API dump from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_api(content, filename)
    }
}

/// Parse an API dump from content with the given filename for error reporting.
pub fn parse_api(content: &str, filename: &str) -> Result<ExtensionApi> {
    let source_ctx = SourceContext::new(content, filename);
    let api: ExtensionApi =
        serde_json::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    ParseContext::new(content, filename).validate_api(&api)?;
    Ok(api)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        let api: ExtensionApi = r#"{ "classes": [ { "name": "Object" } ] }"#.parse().unwrap();
        assert_eq!(api.classes[0].name, "Object");
    }

    #[test]
    fn test_syntax_error() {
        let err = ExtensionApi::from_str(r#"{ "classes": [ "#).unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_missing_required_field() {
        // every class needs a name
        let err = ExtensionApi::from_str(r#"{ "classes": [ { "inherits": "Object" } ] }"#)
            .unwrap_err();
        match *err {
            Error::Parse { source, .. } => assert!(source.to_string().contains("name")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = ExtensionApi::from_file("does/not/exist.json").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
