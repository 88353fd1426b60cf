use std::fmt;
use std::path::Path;

/// Suffix of variable files written in HCL.
pub const HCL_SUFFIX: &str = ".auto.tfvars";

/// Suffix of variable files written in JSON.
pub const JSON_SUFFIX: &str = ".auto.tfvars.json";

/// Default name of the merged output file.
pub const DEFAULT_OUTPUT: &str = "00-all.auto.tfvars.json";

/// Encoding of an input document, decided by file name alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Hcl,
    Json,
}

impl Format {
    /// Anything ending in `.json` is JSON; everything else is handed to the HCL parser.
    pub fn from_path(path: &Path) -> Self {
        let is_json = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(".json"));
        if is_json { Format::Json } else { Format::Hcl }
    }

    pub fn name(self) -> &'static str {
        match self {
            Format::Hcl => "HCL",
            Format::Json => "JSON",
        }
    }
}

/// A discovered file that did not make it into the merge, with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedFile {
    pub file: String,
    pub reason: String,
}

impl fmt::Display for SkippedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Skip {}: {}", self.file, self.reason)
    }
}
