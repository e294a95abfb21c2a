//! Loading and saving scheme documents.
//!
//! This is the only place the crate touches the filesystem. Loading and saving both validate, so
//! the transition engine never sees a malformed scheme and a saved file always loads again.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use crate::{
    document::model::Document,
    foundation::error::{SchemeError, SchemeResult},
};

/// On-disk serialization of a scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// `serde_json`, pretty-printed on write.
    Json,
    /// `serde_yaml`; the usual format for hand-edited schemes.
    Yaml,
}

impl Format {
    /// Pick a format from a file extension (`.json`, `.yaml`, `.yml`).
    pub fn from_path(path: &Path) -> SchemeResult<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(SchemeError::validation(format!(
                "cannot infer scheme format from '{}' (expected .json, .yaml or .yml)",
                path.display()
            ))),
        }
    }
}

impl Document {
    /// Parse and validate a document.
    pub fn from_reader<R: Read>(r: R, format: Format) -> SchemeResult<Self> {
        let doc: Document = match format {
            Format::Json => serde_json::from_reader(r)
                .map_err(|e| SchemeError::serde(format!("parse scheme JSON: {e}")))?,
            Format::Yaml => serde_yaml::from_reader(r)
                .map_err(|e| SchemeError::serde(format!("parse scheme YAML: {e}")))?,
        };
        doc.validate()?;
        Ok(doc)
    }

    /// Parse and validate a document held in memory.
    pub fn from_str_with(s: &str, format: Format) -> SchemeResult<Self> {
        Self::from_reader(s.as_bytes(), format)
    }

    /// Load and validate a document from disk; the format follows the file extension.
    #[tracing::instrument(fields(path = %path.as_ref().display()), skip(path))]
    pub fn from_path(path: impl AsRef<Path>) -> SchemeResult<Self> {
        let path = path.as_ref();
        let format = Format::from_path(path)?;
        let f = File::open(path).map_err(|e| {
            SchemeError::Io(std::io::Error::new(
                e.kind(),
                format!("open scheme '{}': {e}", path.display()),
            ))
        })?;
        let doc = Self::from_reader(BufReader::new(f), format)?;
        tracing::debug!(
            forms = doc.data.form.len(),
            characters = doc.data.repertoire.len(),
            "scheme loaded"
        );
        Ok(doc)
    }

    /// Serialize the document.
    pub fn to_writer<W: Write>(&self, w: W, format: Format) -> SchemeResult<()> {
        match format {
            Format::Json => serde_json::to_writer_pretty(w, self)
                .map_err(|e| SchemeError::serde(format!("write scheme JSON: {e}"))),
            Format::Yaml => serde_yaml::to_writer(w, self)
                .map_err(|e| SchemeError::serde(format!("write scheme YAML: {e}"))),
        }
    }

    /// Serialize the document to a string.
    pub fn to_string_with(&self, format: Format) -> SchemeResult<String> {
        let mut buf = Vec::new();
        self.to_writer(&mut buf, format)?;
        String::from_utf8(buf).map_err(|e| SchemeError::serde(format!("non-UTF-8 output: {e}")))
    }

    /// Validate, then write the document to disk, creating parent directories as needed.
    ///
    /// Nothing is written when validation fails, so every saved file loads again.
    #[tracing::instrument(fields(path = %path.as_ref().display()), skip(self, path))]
    pub fn save(&self, path: impl AsRef<Path>) -> SchemeResult<()> {
        let path = path.as_ref();
        let format = Format::from_path(path)?;
        self.validate()?;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let mut w = BufWriter::new(File::create(path)?);
        self.to_writer(&mut w, format)?;
        w.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/io.rs"]
mod tests;
