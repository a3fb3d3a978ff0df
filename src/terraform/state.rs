//! Terraform state model and loader.
//!
//! Parses tfstate v4 documents into a read-only model that filters and
//! address rendering operate on.
use std::collections::BTreeMap;
use std::fmt;
use std::io::Read;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::filter::ResourceFilter;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputValue {
    #[serde(deserialize_with = "lenient::or_default")]
    pub sensitive: bool,
    #[serde(rename = "type", deserialize_with = "lenient::string")]
    pub output_type: String,
    /// Only integer outputs are representable; anything else decodes as 0.
    #[serde(deserialize_with = "lenient::integer")]
    pub value: i64,
    #[serde(deserialize_with = "lenient::or_default")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ResourceInstance {
    /// Empty when the resource has no `count`/`for_each` index.
    ///
    /// Integer `count` indexes are kept as text, so moved blocks render them
    /// as `["0"]`; Terraform needs `[0]` to address a `count` instance.
    #[serde(deserialize_with = "lenient::string")]
    pub index_key: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub schema_version: i64,
    #[serde(deserialize_with = "lenient::or_default")]
    pub attributes: Map<String, Value>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub sensitive_attributes: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Resource {
    /// Empty for the root module, `module.<name>` otherwise.
    #[serde(deserialize_with = "lenient::or_default")]
    pub module: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub mode: String,
    #[serde(rename = "type", deserialize_with = "lenient::or_default")]
    pub resource_type: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub name: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub provider: String,
    #[serde(deserialize_with = "lenient::elements")]
    pub instances: Vec<ResourceInstance>,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.module.trim().is_empty() {
            write!(f, "{}.", self.module)?;
        }
        write!(f, "{}.{}", self.resource_type, self.name)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateDocument {
    pub version: i64,
    pub terraform_version: String,
    pub serial: i64,
    pub lineage: String,
    pub outputs: Option<BTreeMap<String, OutputValue>>,
    pub resources: Option<Vec<Resource>>,
}

impl StateDocument {
    /// Decodes every top-level JSON value of `reader`, merging later values
    /// over earlier ones.
    ///
    /// Malformed input is not an error: decoding stops and the document
    /// built so far is returned. Fields of the wrong type are skipped
    /// without dropping their siblings.
    pub fn load<R: Read>(reader: R) -> Self {
        let mut state = Self::default();
        let stream = serde_json::Deserializer::from_reader(reader).into_iter::<Value>();

        for (index, value) in stream.enumerate() {
            match value {
                Ok(Value::Object(fields)) => {
                    tracing::debug!(document = index, "decoded terraform state value");
                    state.apply(fields);
                }
                Ok(other) => {
                    tracing::warn!(
                        document = index,
                        value = %other,
                        "terraform state is not a JSON object, keeping partial state"
                    );
                    break;
                }
                Err(err) => {
                    tracing::warn!(
                        document = index,
                        error = %err,
                        "error decoding terraform state, keeping partial state"
                    );
                    break;
                }
            }
        }

        state
    }

    /// Present fields overwrite, `outputs` merge by key, and a `null`
    /// collection clears what earlier values carried.
    fn apply(&mut self, fields: Map<String, Value>) {
        for (key, value) in fields {
            match key.as_str() {
                "version" => decode_field(&mut self.version, &key, value),
                "terraform_version" => decode_field(&mut self.terraform_version, &key, value),
                "serial" => decode_field(&mut self.serial, &key, value),
                "lineage" => decode_field(&mut self.lineage, &key, value),
                "outputs" => match value {
                    Value::Null => self.outputs = None,
                    Value::Object(entries) => {
                        let outputs = self.outputs.get_or_insert_with(BTreeMap::new);
                        for (name, output) in entries {
                            match serde_json::from_value(output) {
                                Ok(output) => {
                                    outputs.insert(name, output);
                                }
                                Err(err) => tracing::warn!(
                                    output = %name,
                                    error = %err,
                                    "skipping undecodable output"
                                ),
                            }
                        }
                    }
                    other => tracing::warn!(value = %other, "skipping outputs, expected an object"),
                },
                "resources" => match value {
                    Value::Null => self.resources = None,
                    Value::Array(items) => self.resources = Some(lenient::decode_elements(items)),
                    other => {
                        tracing::warn!(value = %other, "skipping resources, expected an array")
                    }
                },
                _ => {}
            }
        }
    }

    /// Resources accepted by `filter`, in document order.
    pub fn list_resources(&self, filter: &ResourceFilter) -> Vec<&Resource> {
        self.resources
            .iter()
            .flatten()
            .filter(|resource| filter.matches(resource))
            .collect()
    }
}

fn decode_field<T: DeserializeOwned>(target: &mut T, key: &str, value: Value) {
    if value.is_null() {
        return;
    }
    match serde_json::from_value(value) {
        Ok(decoded) => *target = decoded,
        Err(err) => tracing::warn!(field = key, error = %err, "skipping state field"),
    }
}

mod lenient {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    // NOTE: count indexes and structured output types arrive as non-strings
    pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Null => String::new(),
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            other => {
                tracing::debug!(value = %other, "coercing non-string state field to text");
                other.to_string()
            }
        })
    }

    pub fn integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(value.as_i64().unwrap_or_else(|| {
            tracing::debug!(value = %value, "non-integer output value decoded as 0");
            0
        }))
    }

    pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(serde_json::from_value(value).unwrap_or_else(|err| {
            tracing::debug!(error = %err, "state field has unexpected type, using default");
            T::default()
        }))
    }

    pub fn elements<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(items) => decode_elements(items),
            Value::Null => Vec::new(),
            other => {
                tracing::debug!(value = %other, "expected an array, using empty list");
                Vec::new()
            }
        })
    }

    /// Decodes each element on its own, skipping those that fail.
    pub fn decode_elements<T: DeserializeOwned>(items: Vec<Value>) -> Vec<T> {
        items
            .into_iter()
            .filter_map(|item| {
                serde_json::from_value(item)
                    .map_err(|err| tracing::warn!(error = %err, "skipping undecodable element"))
                    .ok()
            })
            .collect()
    }
}
