use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

/// An in-memory locale document backed by a JSON file on disk.
///
/// The root must be a JSON object. Key order is preserved across a
/// load/save round trip (serde_json `preserve_order`), so untouched
/// regions of a file keep their original key ordering.
#[derive(Debug)]
pub struct LocaleDocument {
    file_path: PathBuf,
    data: Map<String, Value>,
}

impl LocaleDocument {
    /// Open an existing locale file. Fails if the file is missing,
    /// malformed, or its root is not an object.
    pub fn open(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        Self::from_content(path, &content)
    }

    /// Open a locale file, treating a missing file as an empty document.
    ///
    /// A file that exists but cannot be parsed is still an error; only
    /// absence is forgiven.
    pub fn open_or_empty(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self {
                file_path: path.to_path_buf(),
                data: Map::new(),
            });
        }
        Self::open(path)
    }

    fn from_content(path: &Path, content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)
            .with_context(|| format!("Failed to parse JSON: {}", path.display()))?;
        match value {
            Value::Object(data) => Ok(Self {
                file_path: path.to_path_buf(),
                data,
            }),
            _ => bail!("Root of JSON file must be an object: {}", path.display()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.data
    }

    /// Save the document with 4-space indentation and a trailing newline.
    ///
    /// Non-ASCII characters are written literally, not `\u` escaped, so
    /// translated strings stay readable in diffs.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let content = to_pretty_string(&self.data)?;
        fs::write(&self.file_path, format!("{}\n", content))
            .with_context(|| format!("Failed to write file: {}", self.file_path.display()))?;

        Ok(())
    }
}

/// Serialize a document root with 4-space indentation.
///
/// serde_json's default pretty printer uses 2 spaces; the locale files
/// use 4, so a custom formatter keeps rewrites diff-stable.
pub fn to_pretty_string(data: &Map<String, Value>) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    data.serialize(&mut serializer)
        .context("Failed to serialize JSON")?;
    String::from_utf8(buf).context("Serialized JSON was not valid UTF-8")
}
