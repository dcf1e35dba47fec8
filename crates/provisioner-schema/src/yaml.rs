//! YAML input via yaml-rust2
//!
//! YAML documents are converted to a `serde_json::Value` tree so the typed
//! decoding path is the same for both formats.

use serde_json::{Map, Number, Value};
use yaml_rust2::{Yaml, YamlLoader};

use crate::{Error, Result};

const FORMAT: &str = "yaml";

/// Parse the first document of a YAML string into a JSON value tree.
///
/// Empty input yields `Value::Null`.
pub fn parse_yaml(input: &str) -> Result<Value> {
    let docs = YamlLoader::load_from_str(input).map_err(|e| Error::decode(FORMAT, e.to_string()))?;
    match docs.into_iter().next() {
        Some(doc) => yaml_to_json(doc, "$"),
        None => Ok(Value::Null),
    }
}

/// Convert a YAML node, tracking its path for error messages
fn yaml_to_json(yaml: Yaml, path: &str) -> Result<Value> {
    match yaml {
        Yaml::Null => Ok(Value::Null),
        Yaml::Boolean(b) => Ok(Value::Bool(b)),
        Yaml::Integer(i) => Ok(Value::Number(i.into())),
        Yaml::Real(s) => {
            let f: f64 = s
                .parse()
                .map_err(|_| Error::decode(FORMAT, format!("invalid number `{s}` at {path}")))?;
            Number::from_f64(f)
                .map(Value::Number)
                .ok_or_else(|| Error::decode(FORMAT, format!("non-finite number at {path}")))
        }
        Yaml::String(s) => Ok(Value::String(s)),
        Yaml::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| yaml_to_json(item, &format!("{path}[{i}]")))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        Yaml::Hash(entries) => entries
            .into_iter()
            .map(|(k, v)| {
                let key = match k {
                    Yaml::String(s) => s,
                    Yaml::Integer(i) => i.to_string(),
                    Yaml::Boolean(b) => b.to_string(),
                    _ => {
                        return Err(Error::decode(
                            FORMAT,
                            format!("unsupported mapping key at {path}"),
                        ))
                    }
                };
                let child = format!("{path}.{key}");
                yaml_to_json(v, &child).map(|v| (key, v))
            })
            .collect::<Result<Map<String, Value>>>()
            .map(Value::Object),
        Yaml::Alias(_) => Err(Error::decode(FORMAT, format!("aliases are not supported ({path})"))),
        Yaml::BadValue => Err(Error::decode(FORMAT, format!("bad value at {path}"))),
    }
}
