//! `package.json` reading.

use crate::error::{BuildError, Result};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

pub const MANIFEST_FILE_NAME: &str = "package.json";

#[derive(Debug, Deserialize)]
struct RawManifest {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    version: Option<String>,
}

/// Name and version of the package being built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageMetadata {
    pub name: String,
    pub version: String,
}

impl PackageMetadata {
    /// Read `package.json` from `dir`.
    ///
    /// # Errors
    ///
    /// Fails when the file is missing or unparseable, or when `name` or
    /// `version` is absent or empty.
    pub async fn read(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_FILE_NAME);
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(BuildError::ManifestNotFound(path).into());
            }
            Err(e) => return Err(e.into()),
        };

        Self::parse(&content).map_err(|e| match e {
            ManifestParseError::Json(reason) => BuildError::ManifestInvalid { path, reason }.into(),
            ManifestParseError::MissingField(field) => BuildError::ManifestMissingField(field).into(),
        })
    }

    fn parse(content: &str) -> std::result::Result<Self, ManifestParseError> {
        let raw: RawManifest =
            serde_json::from_str(content).map_err(|e| ManifestParseError::Json(e.to_string()))?;

        let name = raw
            .name
            .filter(|n| !n.is_empty())
            .ok_or(ManifestParseError::MissingField("name"))?;
        let version = raw
            .version
            .filter(|v| !v.is_empty())
            .ok_or(ManifestParseError::MissingField("version"))?;

        Ok(Self { name, version })
    }
}

enum ManifestParseError {
    Json(String),
    MissingField(&'static str),
}

impl fmt::Display for PackageMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} v{}", self.name, self.version)
    }
}
