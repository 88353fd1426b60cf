use serde_json::{Map, Value};

/// Deep-merge `src` into `into`, in place.
/// If both sides hold an object for the same key, recurse.
/// Otherwise `src`'s value replaces the slot, arrays included.
pub fn deep_merge(into: &mut Map<String, Value>, src: Map<String, Value>) {
    for (key, src_val) in src {
        match (into.get_mut(&key), src_val) {
            (Some(Value::Object(into_obj)), Value::Object(src_obj)) => {
                deep_merge(into_obj, src_obj);
            }
            (_, src_val) => {
                // An existing key keeps its position; only the value changes.
                into.insert(key, src_val);
            }
        }
    }
}
