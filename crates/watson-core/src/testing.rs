//! Assertions shared by the model crates' tests

use std::fmt::Debug;

use serde_json::{Map, Value};

use crate::{Field, Shape, WireModel};

/// Assert that a fully populated model encodes exactly the wire keys its
/// field table declares, each holding a value of the declared shape
///
/// Nested models are checked for shape only, so they may be sparse.
///
/// # Panics
///
/// Panics if the model fails to encode, the key sets differ, or a value's
/// JSON kind does not match its field's [`Shape`].
pub fn assert_field_table<T: WireModel>(model: &T) {
    let value = model.to_value().expect("model encodes");
    let Value::Object(object) = value else {
        panic!("{} does not encode as a JSON object", T::NAME);
    };

    let mut encoded: Vec<&str> = object.keys().map(String::as_str).collect();
    let mut declared: Vec<&str> = T::FIELDS.iter().map(Field::wire_key).collect();
    encoded.sort_unstable();
    declared.sort_unstable();

    assert_eq!(encoded, declared, "{} field table disagrees with its wire encoding", T::NAME);

    assert_shapes(T::NAME, T::FIELDS, &object);
}

fn assert_shapes(model: &str, fields: &[Field], object: &Map<String, Value>) {
    for field in fields {
        let Some(value) = object.get(field.wire_key()).filter(|value| !value.is_null()) else {
            continue;
        };

        let matches = match (field.shape(), value) {
            (Shape::Scalar, Value::Array(_) | Value::Object(_)) => false,
            (Shape::Scalar, _) => true,
            (Shape::List, Value::Array(items)) => items.iter().all(|item| !item.is_array() && !item.is_object()),
            (Shape::Model(nested), Value::Object(inner)) => {
                assert_shapes(model, nested, inner);
                true
            }
            (Shape::ModelList(nested), Value::Array(items)) => items.iter().all(|item| {
                item.as_object().is_some_and(|inner| {
                    assert_shapes(model, nested, inner);
                    true
                })
            }),
            _ => false,
        };

        assert!(
            matches,
            "{model}: `{}` is declared {:?} but encodes as {value}",
            field.name(),
            field.shape()
        );
    }
}

/// Assert both round trips for a payload: encode(decode(payload)) equals the
/// payload, and decode(encode(model)) equals the model
///
/// # Panics
///
/// Panics if either direction fails or the results differ.
pub fn assert_round_trip<T: WireModel + PartialEq + Debug>(payload: &Value) -> T {
    let model = T::from_value(payload.clone()).expect("payload decodes");
    let encoded = model.to_value().expect("model encodes");
    assert_eq!(&encoded, payload, "{} did not re-encode its payload", T::NAME);

    let decoded = T::from_value(encoded).expect("encoded model decodes");
    assert_eq!(decoded, model, "{} changed across decode(encode(..))", T::NAME);

    model
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Tagged {
        label: String,
        tags: Vec<String>,
    }

    impl WireModel for Tagged {
        const NAME: &'static str = "Tagged";
        const FIELDS: &'static [Field] = &[Field::scalar("label"), Field::list("tags")];
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Mislabeled {
        tags: Vec<String>,
    }

    impl WireModel for Mislabeled {
        const NAME: &'static str = "Mislabeled";
        const FIELDS: &'static [Field] = &[Field::scalar("tags")];
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Outer {
        inner: Tagged,
    }

    impl WireModel for Outer {
        const NAME: &'static str = "Outer";
        const FIELDS: &'static [Field] = &[Field::model("inner", &[Field::list("label"), Field::list("tags")])];
    }

    fn tagged() -> Tagged {
        Tagged {
            label: "news".to_owned(),
            tags: vec!["a".to_owned()],
        }
    }

    #[test]
    fn matching_table_passes() {
        assert_field_table(&tagged());
    }

    #[test]
    #[should_panic(expected = "Mislabeled: `tags` is declared Scalar")]
    fn list_declared_as_scalar_fails() {
        assert_field_table(&Mislabeled {
            tags: vec!["a".to_owned()],
        });
    }

    #[test]
    #[should_panic(expected = "Outer: `label` is declared List")]
    fn nested_shapes_are_checked() {
        assert_field_table(&Outer { inner: tagged() });
    }
}
