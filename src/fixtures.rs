#[cfg(test)]
pub mod test {
    use std::path::Path;

    use serde_json::{Map, Value};

    /// Write `(name, content)` pairs into `dir`.
    pub fn write_files(dir: &Path, files: &[(&str, &str)]) {
        for (name, content) in files {
            std::fs::write(dir.join(name), content).unwrap();
        }
    }

    /// Read back a JSON file written by a run.
    pub fn read_json(path: &Path) -> Value {
        let text = std::fs::read_to_string(path).unwrap();
        serde_json::from_str(&text).unwrap()
    }

    pub fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    // -- Sample variable files ---------------------------------------------------

    pub const NETWORK_HCL: &str = r#"
region = "us-east-1"
azs    = ["us-east-1a", "us-east-1b"]
tags = {
  env = "dev"
}
"#;

    pub const TAGS_JSON: &str = r#"{"tags": {"owner": "team1"}, "region": "us-west-2"}"#;

    #[test]
    fn object_unwraps_maps() {
        let map = object(serde_json::json!({"a": 1}));
        assert_eq!(map["a"], 1);
    }
}
