//! File discovery and loading for variable files.
//!
//! # Discovery
//!
//! [`discover`] lists a single directory (no recursion) and keeps entries whose
//! names end in `.auto.tfvars` or `.auto.tfvars.json`. The two groups are
//! sorted independently and concatenated, HCL files first:
//!
//! ```text
//! b.auto.tfvars  z.auto.tfvars  a.auto.tfvars.json  c.auto.tfvars.json
//! └── lowest precedence                     highest precedence ──┘
//! ```
//!
//! Every JSON file therefore outranks every HCL file, whatever the names.
//! Names starting with `.` are never matched, the same way a shell glob
//! skips hidden files.
//!
//! # Loading
//!
//! [`load_document`] reads a file fully and hands the text to the parser for
//! its [`Format`]. Read and parse failures carry the path so the caller can
//! report and skip the file.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::error::TfvarsError;
use crate::parser::Parsers;
use crate::types::{Format, HCL_SUFFIX, JSON_SUFFIX};

/// List variable files in `dir`, in merge order (first = lowest priority).
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>, TfvarsError> {
    let entries = std::fs::read_dir(dir).map_err(|e| TfvarsError::Discovery {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| TfvarsError::Discovery {
            path: dir.to_path_buf(),
            source: e,
        })?;
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => debug!(name = ?raw, "ignoring non UTF-8 file name"),
        }
    }

    Ok(order_candidates(names)
        .into_iter()
        .map(|name| dir.join(name))
        .collect())
}

/// Select and order candidate file names. Pure; [`discover`] feeds it a
/// directory listing.
pub fn order_candidates(names: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut hcl = Vec::new();
    let mut json = Vec::new();

    for name in names {
        if name.starts_with('.') {
            continue;
        }
        if name.ends_with(HCL_SUFFIX) {
            hcl.push(name);
        } else if name.ends_with(JSON_SUFFIX) {
            json.push(name);
        }
    }

    hcl.sort();
    json.sort();
    hcl.extend(json);
    hcl
}

/// Read and parse one file. The root may be any value; callers decide what
/// to do with non-object roots.
pub fn load_document(path: &Path, parsers: &Parsers) -> Result<Value, TfvarsError> {
    let format = Format::from_path(path);
    let content = std::fs::read_to_string(path).map_err(|e| TfvarsError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(path = %path.display(), format = format.name(), bytes = content.len(), "loaded file");

    parsers
        .for_format(format)
        .parse(&content)
        .map_err(|e| TfvarsError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
}

/// File name for display, falling back to the full path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::fixtures::test::write_files;
    use crate::parser::Unavailable;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn hcl_group_precedes_json_group() {
        let ordered = order_candidates(names(&[
            "a.auto.tfvars.json",
            "z.auto.tfvars",
            "c.auto.tfvars.json",
            "b.auto.tfvars",
        ]));
        assert_eq!(
            ordered,
            names(&[
                "b.auto.tfvars",
                "z.auto.tfvars",
                "a.auto.tfvars.json",
                "c.auto.tfvars.json",
            ])
        );
    }

    #[test]
    fn unrelated_names_are_ignored() {
        let ordered = order_candidates(names(&[
            "terraform.tfvars",
            "main.tf",
            "x.auto.tfvars.bak",
            "notes.json",
            "prod.auto.tfvars",
        ]));
        assert_eq!(ordered, names(&["prod.auto.tfvars"]));
    }

    #[test]
    fn hidden_names_are_ignored() {
        let ordered = order_candidates(names(&[".secret.auto.tfvars", ".auto.tfvars.json"]));
        assert!(ordered.is_empty());
    }

    #[test]
    fn sort_is_bytewise() {
        let ordered = order_candidates(names(&["b.auto.tfvars", "B.auto.tfvars", "a.auto.tfvars"]));
        assert_eq!(
            ordered,
            names(&["B.auto.tfvars", "a.auto.tfvars", "b.auto.tfvars"])
        );
    }

    #[test]
    fn discover_empty_dir() {
        let dir = TempDir::new().unwrap();
        assert!(discover(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn discover_does_not_recurse() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("a.auto.tfvars"), "x = 1\n").unwrap();
        write_files(dir.path(), &[("top.auto.tfvars.json", "{}")]);

        let found = discover(dir.path()).unwrap();
        assert_eq!(found, vec![dir.path().join("top.auto.tfvars.json")]);
    }

    #[test]
    fn discover_missing_dir_is_error() {
        let dir = TempDir::new().unwrap();
        let result = discover(&dir.path().join("gone"));
        assert!(matches!(result, Err(TfvarsError::Discovery { .. })));
    }

    #[test]
    fn load_json_document() {
        let dir = TempDir::new().unwrap();
        write_files(dir.path(), &[("a.auto.tfvars.json", r#"{"region": "us-east-1"}"#)]);
        let value = load_document(&dir.path().join("a.auto.tfvars.json"), &Parsers::default()).unwrap();
        assert_eq!(value, json!({"region": "us-east-1"}));
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let err = load_document(&dir.path().join("gone.auto.tfvars.json"), &Parsers::default())
            .unwrap_err();
        assert!(matches!(err, TfvarsError::Read { .. }));
    }

    #[test]
    fn load_malformed_json_is_parse_error() {
        let dir = TempDir::new().unwrap();
        write_files(dir.path(), &[("bad.auto.tfvars.json", "{not json")]);
        let err = load_document(&dir.path().join("bad.auto.tfvars.json"), &Parsers::default())
            .unwrap_err();
        assert!(matches!(
            err,
            TfvarsError::Parse {
                source: ParseError::Json(_),
                ..
            }
        ));
    }

    #[test]
    fn load_hcl_with_missing_collaborator_is_parse_error() {
        let dir = TempDir::new().unwrap();
        write_files(dir.path(), &[("a.auto.tfvars", "region = \"x\"\n")]);
        let parsers = Parsers::default().with_hcl(Unavailable(Format::Hcl));
        let err = load_document(&dir.path().join("a.auto.tfvars"), &parsers).unwrap_err();
        assert!(matches!(
            err,
            TfvarsError::Parse {
                source: ParseError::Unsupported { .. },
                ..
            }
        ));
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_file_returns_read_error() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("locked.auto.tfvars.json");
        fs::write(&file_path, "{}").unwrap();
        fs::set_permissions(&file_path, fs::Permissions::from_mode(0o000)).unwrap();

        // Root ignores permission bits; only assert when the read really fails.
        if fs::read_to_string(&file_path).is_err() {
            let err = load_document(&file_path, &Parsers::default()).unwrap_err();
            assert!(matches!(err, TfvarsError::Read { .. }));
        }

        fs::set_permissions(&file_path, fs::Permissions::from_mode(0o644)).unwrap();
    }

    #[test]
    fn display_name_is_file_name() {
        assert_eq!(display_name(Path::new("/tmp/x/a.auto.tfvars")), "a.auto.tfvars");
    }
}
