//! Core merge pipeline: fold loaded documents into one accumulator.
//!
//! Operates on load results rather than paths, so the whole pipeline is
//! testable with synthetic inputs. The iterator is consumed lazily: a file is
//! loaded, merged, and released before the next one is touched.
//!
//! 1. A load error skips the file.
//! 2. A root that is not an object skips the file.
//! 3. An object root is deep-merged into the accumulator (later wins).

use serde_json::{Map, Value};
use tracing::warn;

use crate::error::TfvarsError;
use crate::merge::deep_merge;
use crate::types::SkippedFile;

/// Merge documents in order, reporting each skipped file to `on_skip` as it happens.
///
/// Each item is `(display name, load result)`. Per-file errors never stop the
/// fold; other errors are returned immediately.
pub fn merge_documents<I, F>(
    documents: I,
    mut on_skip: F,
) -> Result<(Map<String, Value>, Vec<SkippedFile>), TfvarsError>
where
    I: IntoIterator<Item = (String, Result<Value, TfvarsError>)>,
    F: FnMut(&SkippedFile),
{
    let mut merged = Map::new();
    let mut skipped = Vec::new();

    for (file, loaded) in documents {
        let failure = match loaded {
            Ok(Value::Object(doc)) => {
                deep_merge(&mut merged, doc);
                continue;
            }
            Ok(other) => TfvarsError::NotAMappingRoot {
                path: file.clone().into(),
                found: kind_of(&other),
            },
            Err(e) if e.is_per_file() => e,
            Err(e) => return Err(e),
        };

        let skip = SkippedFile {
            reason: skip_reason(&failure),
            file,
        };
        warn!(file = %skip.file, reason = %skip.reason, "skipping file");
        on_skip(&skip);
        skipped.push(skip);
    }

    Ok((merged, skipped))
}

/// Reason text without the path; the skip line already names the file.
fn skip_reason(err: &TfvarsError) -> String {
    match err {
        TfvarsError::Read { source, .. } => source.to_string(),
        TfvarsError::Parse { source, .. } => source.to_string(),
        other => other.to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
