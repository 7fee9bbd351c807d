use indexmap::IndexMap;
use miette::Diagnostic;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Name under which the embedded manifest is reported in diagnostics.
pub const BUILTIN_MANIFEST_NAME: &str = "notecam.toml";

const BUILTIN_MANIFEST: &str = include_str!("notecam.toml");

#[derive(Error, Debug, Diagnostic)]
pub enum ManifestError {
    #[error("Unable to parse manifest '{path}': {source}")]
    #[diagnostic(
        code(notecam::manifest::parse_toml),
        help("Each key must be a directory and each value an array of file names")
    )]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// A directory key of the manifest. The empty key stands for the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directory<'a>(&'a str);
impl<'a> Directory<'a> {
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Path of `file_name` relative to the project root.
    pub fn join(&self, file_name: &str) -> PathBuf {
        if self.is_root() {
            PathBuf::from(file_name)
        } else {
            PathBuf::from(self.0).join(file_name)
        }
    }
}

/// Ordered table of directories and the files created inside each of them.
#[derive(Debug, Deserialize, Clone)]
pub struct Manifest(IndexMap<String, Vec<String>>);
impl Manifest {
    /// Parses the NoteCam manifest embedded in the binary.
    pub fn builtin() -> Result<Self, ManifestError> {
        Manifest::parse(BUILTIN_MANIFEST_NAME, BUILTIN_MANIFEST)
    }

    pub fn parse<P: Into<PathBuf>>(path: P, content: &str) -> Result<Self, ManifestError> {
        toml::from_str(content).map_err(|err| ManifestError::ParseToml {
            path: path.into(),
            source: err,
        })
    }

    /// Entries in document order.
    pub fn entries(&self) -> impl Iterator<Item = (Directory<'_>, &[String])> {
        self.0
            .iter()
            .map(|(directory, files)| (Directory(directory.as_str()), files.as_slice()))
    }
}
