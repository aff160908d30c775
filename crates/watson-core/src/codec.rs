use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{
    ModelError, Result,
    field::{self, Field, Shape},
};

/// How absent optional fields are written when a model is encoded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsentFields {
    /// Leave the key out of the payload
    #[default]
    Omit,
    /// Write the key with a `null` value
    Null,
}

/// A model that can be decoded from and encoded to its JSON wire form
///
/// Implementors only declare their name and field table; the codec itself is
/// shared. The serde attributes on the struct and the `FIELDS` table describe
/// the same mapping and are checked against each other in tests.
pub trait WireModel: Serialize + DeserializeOwned {
    /// Model name used in errors and log records
    const NAME: &'static str;

    /// One entry per struct field, in declaration order
    const FIELDS: &'static [Field];

    /// Wire key for an in-memory field name
    fn wire_key(name: &str) -> Option<&'static str> {
        field::by_name(Self::FIELDS, name).map(Field::wire_key)
    }

    /// In-memory field name for a wire key
    fn field_name(wire: &str) -> Option<&'static str> {
        field::by_wire_key(Self::FIELDS, wire).map(Field::name)
    }

    /// Decode a JSON value, ignoring keys the model does not declare
    fn from_value(value: Value) -> Result<Self> {
        decode(value)
    }

    fn from_json(json: &str) -> Result<Self> {
        let value = serde_json::from_str(json).map_err(decode_error::<Self>)?;
        decode(value)
    }

    fn from_slice(bytes: &[u8]) -> Result<Self> {
        let value = serde_json::from_slice(bytes).map_err(decode_error::<Self>)?;
        decode(value)
    }

    /// Encode to a JSON value, leaving absent fields out
    fn to_value(&self) -> Result<Value> {
        encode(self, AbsentFields::Omit)
    }

    fn to_value_with(&self, absent: AbsentFields) -> Result<Value> {
        encode(self, absent)
    }

    fn to_json(&self) -> Result<String> {
        self.to_json_with(AbsentFields::Omit)
    }

    fn to_json_with(&self, absent: AbsentFields) -> Result<String> {
        let value = encode(self, absent)?;
        serde_json::to_string(&value).map_err(|source| ModelError::Encode {
            model: Self::NAME,
            source,
        })
    }
}

fn decode<T: WireModel>(value: Value) -> Result<T> {
    reject_null_items(T::NAME, T::FIELDS, &value)?;

    let model = serde_json::from_value(value).map_err(decode_error::<T>)?;
    tracing::trace!(model = T::NAME, "decoded payload");

    Ok(model)
}

fn decode_error<T: WireModel>(source: serde_json::Error) -> ModelError {
    tracing::debug!(model = T::NAME, error = %source, "failed to decode payload");
    ModelError::Decode {
        model: T::NAME,
        source,
    }
}

/// Arrays are append-only sequences of present items, so a `null` element is
/// rejected before serde sees it
fn reject_null_items(model: &'static str, fields: &'static [Field], value: &Value) -> Result<()> {
    let Value::Object(object) = value else {
        return Ok(());
    };

    for field in fields {
        let Some(item) = object.get(field.wire_key()) else {
            continue;
        };

        if let Value::Array(items) = item
            && matches!(field.shape(), Shape::List | Shape::ModelList(_))
            && items.iter().any(Value::is_null)
        {
            tracing::debug!(model, field = field.wire_key(), "rejected null list item");
            return Err(ModelError::InvalidArgument {
                model,
                message: format!("`{}` cannot contain null", field.wire_key()),
            });
        }

        match (field.shape(), item) {
            (Shape::Model(nested), _) => reject_null_items(model, nested, item)?,
            (Shape::ModelList(nested), Value::Array(items)) => {
                for item in items {
                    reject_null_items(model, nested, item)?;
                }
            }
            _ => {}
        }
    }

    Ok(())
}

fn encode<T: WireModel>(model: &T, absent: AbsentFields) -> Result<Value> {
    let mut value = serde_json::to_value(model).map_err(|source| ModelError::Encode {
        model: T::NAME,
        source,
    })?;

    if absent == AbsentFields::Null {
        fill_absent(T::FIELDS, &mut value);
    }
    tracing::trace!(model = T::NAME, ?absent, "encoded model");

    Ok(value)
}

fn fill_absent(fields: &'static [Field], value: &mut Value) {
    let Value::Object(object) = value else {
        return;
    };

    for field in fields {
        let entry = object.entry(field.wire_key()).or_insert(Value::Null);

        match field.shape() {
            Shape::Model(nested) => fill_absent(nested, entry),
            Shape::ModelList(nested) => {
                if let Value::Array(items) = entry {
                    for item in items {
                        fill_absent(nested, item);
                    }
                }
            }
            Shape::Scalar | Shape::List => {}
        }
    }
}
