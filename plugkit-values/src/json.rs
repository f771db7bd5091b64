//! JSON interop for bags
//!
//! Bags serialize the way the host runtime encodes arrays: list-shaped
//! bags become JSON arrays, everything else becomes objects with the key's
//! display form. Ingestion goes through [`Limits`] because serialized
//! settings arrive from untrusted form posts.

use crate::bag::{Bag, Value};
use crate::error::{Result, ValueError};
use crate::key::Key;
use crate::limits::Limits;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(flag) => serializer.serialize_bool(*flag),
            Value::Int(number) => serializer.serialize_i64(*number),
            Value::Float(number) => serializer.serialize_f64(*number),
            Value::Str(text) => serializer.serialize_str(text),
            Value::Bag(bag) => bag.serialize(serializer),
        }
    }
}

impl Serialize for Bag {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.is_list() {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for (_, value) in self.iter() {
                seq.serialize_element(value)?;
            }
            seq.end()
        } else {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (key, value) in self.iter() {
                map.serialize_entry(&key.to_string(), value)?;
            }
            map.end()
        }
    }
}

impl Bag {
    /// Parse a serialized settings value into a bag, enforcing `limits`.
    ///
    /// The top level must be a JSON object or array; scalars fail with
    /// [`ValueError::NotACollection`].
    pub fn from_json_str(text: &str, limits: &Limits) -> Result<Bag> {
        if text.len() > limits.max_serialized_len {
            return Err(ValueError::LimitExceeded(format!(
                "serialized input is {} bytes (max {})",
                text.len(),
                limits.max_serialized_len
            )));
        }

        let parsed: serde_json::Value = serde_json::from_str(text)?;
        Bag::from_json_value(parsed, limits)
    }

    /// Convert a parsed JSON value into a bag, enforcing `limits`.
    ///
    /// Object keys go through [`Key::from_json_key`], so canonical integer
    /// strings come back as positional keys. Array elements are keyed
    /// `0..n`. Numbers become [`Value::Int`] when they fit an `i64`.
    pub fn from_json_value(value: serde_json::Value, limits: &Limits) -> Result<Bag> {
        match value {
            serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                match convert_value(value, limits, 0)? {
                    Value::Bag(bag) => Ok(bag),
                    _ => Err(ValueError::NotACollection),
                }
            }
            _ => Err(ValueError::NotACollection),
        }
    }

    /// Serialize this bag back to its JSON text form.
    pub fn to_json_string(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

fn convert_value(value: serde_json::Value, limits: &Limits, depth: usize) -> Result<Value> {
    if depth > limits.max_depth {
        return Err(ValueError::LimitExceeded(format!(
            "nesting depth exceeds {}",
            limits.max_depth
        )));
    }

    Ok(match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(flag) => Value::Bool(flag),
        serde_json::Value::Number(number) => match number.as_i64() {
            Some(int) => Value::Int(int),
            None => Value::Float(number.as_f64().unwrap_or_default()),
        },
        serde_json::Value::String(text) => Value::Str(text),
        serde_json::Value::Array(elements) => {
            check_entry_count(elements.len(), limits)?;
            let mut bag = Bag::with_capacity(elements.len());
            for (position, element) in elements.into_iter().enumerate() {
                bag.insert(
                    Key::Positional(position as i64),
                    convert_value(element, limits, depth + 1)?,
                );
            }
            Value::Bag(bag)
        }
        serde_json::Value::Object(members) => {
            check_entry_count(members.len(), limits)?;
            let mut bag = Bag::with_capacity(members.len());
            for (raw_key, member) in members {
                bag.insert(
                    Key::from_json_key(&raw_key),
                    convert_value(member, limits, depth + 1)?,
                );
            }
            Value::Bag(bag)
        }
    })
}

fn check_entry_count(count: usize, limits: &Limits) -> Result<()> {
    if count > limits.max_entries {
        return Err(ValueError::LimitExceeded(format!(
            "collection has {} entries (max {})",
            count, limits.max_entries
        )));
    }
    Ok(())
}
