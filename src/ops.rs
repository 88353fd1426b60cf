//! Run outputs: serializing the accumulator, writing it, and the report types
//! callers use to display what happened.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::Formatter;
use serde_json::{Map, Serializer, Value};

use crate::error::TfvarsError;
use crate::settings::Settings;
use crate::types::SkippedFile;

/// Outcome of one run. Returned to the caller for display.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeReport {
    /// Every discovered file name, in merge order, whether or not it merged.
    pub discovered: Vec<String>,
    /// Files left out of the merge, in processing order.
    pub skipped: Vec<SkippedFile>,
    /// Top-level keys of the merged document, in output order.
    pub keys: Vec<String>,
    /// What happened to the merged document.
    pub output: Output,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// The merged document was written to this path.
    Written { path: PathBuf },
    /// Dry run: the serialized document, not written anywhere.
    Rendered(String),
}

impl fmt::Display for MergeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Output::Rendered(json) = &self.output {
            writeln!(f, "{json}")?;
        }
        writeln!(f, "Merged files: {:?}", self.discovered)?;
        write!(f, "Final keys: {:?}", self.keys)
    }
}

/// One-line JSON with `", "` between items and `": "` after keys.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

fn to_string_spaced(merged: &Map<String, Value>) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, SpacedFormatter);
    merged.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(serde::ser::Error::custom)
}

/// Serialize the accumulator on one line unless `pretty` is set.
pub fn render(merged: &Map<String, Value>, pretty: bool) -> Result<String, TfvarsError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(merged)
    } else {
        to_string_spaced(merged)
    };
    rendered.map_err(TfvarsError::Serialize)
}

/// Write the merged document as UTF-8, replacing any existing file.
pub fn write_output(
    path: &Path,
    merged: &Map<String, Value>,
    pretty: bool,
) -> Result<(), TfvarsError> {
    let json = render(merged, pretty)?;
    std::fs::write(path, json).map_err(|e| TfvarsError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Generate a commented TOML template for the settings file.
pub fn generate_template() -> String {
    confique::toml::template::<Settings>(confique::toml::FormatOptions::default())
}
