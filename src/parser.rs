//! Document parsers: text in, generic value tree out.
//!
//! Both input encodings go through the [`DocumentParser`] trait so the
//! pipeline never knows which library did the work. HCL parsing is delegated
//! to [`hcl-rs`](https://docs.rs/hcl-rs) behind the `hcl` Cargo feature (on by
//! default). Without it, [`HclParser`] still exists but rejects every
//! document with [`ParseError::Unsupported`], which the pipeline reports as a
//! skipped file rather than a failed run.

use serde_json::Value;

use crate::error::ParseError;
use crate::types::Format;

/// Converts one document's text into a JSON-compatible value.
pub trait DocumentParser {
    fn parse(&self, text: &str) -> Result<Value, ParseError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonParser;

impl DocumentParser for JsonParser {
    fn parse(&self, text: &str) -> Result<Value, ParseError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Parses `.tfvars` bodies. Attributes become keys, blocks become nested
/// objects, and expressions that are not literals come back as `"${...}"`
/// strings.
#[derive(Debug, Default, Clone, Copy)]
pub struct HclParser;

impl DocumentParser for HclParser {
    #[cfg(feature = "hcl")]
    fn parse(&self, text: &str) -> Result<Value, ParseError> {
        Ok(hcl::from_str(text)?)
    }

    #[cfg(not(feature = "hcl"))]
    fn parse(&self, _text: &str) -> Result<Value, ParseError> {
        Err(ParseError::Unsupported {
            format: Format::Hcl.name(),
        })
    }
}

/// One parser per input format.
pub struct Parsers {
    json: Box<dyn DocumentParser>,
    hcl: Box<dyn DocumentParser>,
}

impl Default for Parsers {
    fn default() -> Self {
        Self {
            json: Box::new(JsonParser),
            hcl: Box::new(HclParser),
        }
    }
}

impl Parsers {
    /// Replace the HCL collaborator, e.g. with one that is known to be absent.
    pub fn with_hcl(mut self, parser: impl DocumentParser + 'static) -> Self {
        self.hcl = Box::new(parser);
        self
    }

    /// Replace the JSON collaborator.
    pub fn with_json(mut self, parser: impl DocumentParser + 'static) -> Self {
        self.json = Box::new(parser);
        self
    }

    pub fn for_format(&self, format: Format) -> &dyn DocumentParser {
        match format {
            Format::Json => self.json.as_ref(),
            Format::Hcl => self.hcl.as_ref(),
        }
    }
}

/// Stands in for a collaborator that is not installed.
#[derive(Debug, Clone, Copy)]
pub struct Unavailable(pub Format);

impl DocumentParser for Unavailable {
    fn parse(&self, _text: &str) -> Result<Value, ParseError> {
        Err(ParseError::Unsupported {
            format: self.0.name(),
        })
    }
}
