//! Merge Terraform variable files into one. Point it at a directory, and go.
//!
//! `tfvars-merge` discovers every `*.auto.tfvars` (HCL) and
//! `*.auto.tfvars.json` (JSON) file in a directory, parses each into a
//! generic value tree, deep-merges them in a fixed order, and writes the
//! result to `00-all.auto.tfvars.json`.
//!
//! ```ignore
//! let report = Merger::builder().dir("infra/prod").build()?.run()?;
//! println!("{report}");
//! ```
//!
//! # Merge order
//!
//! ```text
//! *.auto.tfvars          sorted by name
//!        ↑ overridden by
//! *.auto.tfvars.json     sorted by name
//! ```
//!
//! Every JSON file outranks every HCL file, whatever the names. Within a
//! group, later names win. The output file matches the JSON pattern too, so
//! a second run picks up the previous output as its lowest-priority JSON
//! input.
//!
//! # Deep merge
//!
//! Objects merge key by key, recursively. Anything else (arrays, scalars,
//! `null`, or an object meeting a non-object) is replaced wholesale by the
//! later file. See [`deep_merge`].
//!
//! # Partial failure
//!
//! A file that cannot be read, does not parse, or whose root is not an
//! object is skipped and reported; the run carries on with the rest. Only
//! failing to list the directory or to write the output ends a run with an
//! error. See [`TfvarsError::is_per_file`].
//!
//! # HCL support
//!
//! HCL parsing is delegated to `hcl-rs` behind the `hcl` Cargo feature (on
//! by default). Built without it, `.auto.tfvars` files are skipped with an
//! "HCL support is not available" reason. Parsers are swappable through
//! [`DocumentParser`] and [`Parsers`].
//!
//! # Settings
//!
//! A few knobs (output name, pretty printing) live in [`Settings`], resolved
//! from compiled defaults, an optional `.tfvars-merge.toml` in the working
//! directory, and explicit [`Overrides`], in that priority order.

pub mod error;
pub mod types;

mod builder;
mod cli;
mod file;
pub(crate) mod merge;
mod ops;
mod parser;
mod resolve;
mod settings;

#[cfg(test)]
mod fixtures;

pub use builder::{Merger, MergerBuilder};
pub use cli::Cli;
pub use error::{ParseError, TfvarsError};
pub use file::{discover, load_document};
pub use merge::deep_merge;
pub use ops::{MergeReport, Output, generate_template};
pub use parser::{DocumentParser, HclParser, JsonParser, Parsers, Unavailable};
pub use resolve::merge_documents;
pub use settings::{Overrides, SETTINGS_FILE, Settings, load_settings};
pub use types::{DEFAULT_OUTPUT, Format, SkippedFile};
