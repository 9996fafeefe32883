//! JSON body posted by the contact form

use serde_json::{Map, Value};

/// Checkbox group whose values are sent as a list
pub const INTERESTS_FIELD: &str = "intereses";

/// Turn form entries into the submitted object. Repeated names keep their
/// last value, except `intereses`, which always carries every checked value
/// as a list (empty when none).
pub fn build_payload(entries: &[(String, String)]) -> Value {
  let mut object = Map::new();
  for (name, value) in entries {
    object.insert(name.clone(), Value::String(value.clone()));
  }

  let interests = entries
    .iter()
    .filter(|(name, _)| name == INTERESTS_FIELD)
    .map(|(_, value)| Value::String(value.clone()))
    .collect();
  object.insert(INTERESTS_FIELD.to_string(), Value::Array(interests));

  Value::Object(object)
}
