use serde::{Deserialize, Serialize};
use watson_core::{Field, Result, WireModel, required};

/// A recognized capture group for an entity value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureGroup {
    group: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    location: Option<Vec<i64>>,
}

impl CaptureGroup {
    pub fn builder() -> CaptureGroupBuilder {
        CaptureGroupBuilder::default()
    }

    /// Builder seeded with this capture group's values
    pub fn to_builder(&self) -> CaptureGroupBuilder {
        CaptureGroupBuilder::from(self.clone())
    }

    /// The capture group name
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Zero-based character offsets where the entity value begins and ends in the input text
    pub fn location(&self) -> Option<&[i64]> {
        self.location.as_deref()
    }
}

impl WireModel for CaptureGroup {
    const NAME: &'static str = "CaptureGroup";
    const FIELDS: &'static [Field] = &[Field::scalar("group"), Field::list("location")];
}

/// Builder for [`CaptureGroup`]
#[derive(Debug, Clone, Default)]
pub struct CaptureGroupBuilder {
    group: Option<String>,
    location: Option<Vec<i64>>,
}

impl CaptureGroupBuilder {
    /// Builder with the required `group` already set
    pub fn new(group: impl Into<String>) -> Self {
        Self {
            group: Some(group.into()),
            location: None,
        }
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Append one offset to `location`
    pub fn add_location(mut self, location: i64) -> Self {
        self.location.get_or_insert_with(Vec::new).push(location);
        self
    }

    /// Replace `location`, discarding any offsets added so far
    pub fn location(mut self, location: impl Into<Option<Vec<i64>>>) -> Self {
        self.location = location.into();
        self
    }

    pub fn build(&self) -> Result<CaptureGroup> {
        Ok(CaptureGroup {
            group: required(CaptureGroup::NAME, "group", self.group.as_ref())?,
            location: self.location.clone(),
        })
    }
}

impl From<CaptureGroup> for CaptureGroupBuilder {
    fn from(value: CaptureGroup) -> Self {
        Self {
            group: Some(value.group),
            location: value.location,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use watson_core::{ModelError, testing};

    use super::*;

    #[test]
    fn builds_with_group_and_locations() {
        let group = CaptureGroupBuilder::new("person")
            .add_location(5)
            .add_location(12)
            .build()
            .unwrap();

        assert_eq!(group.group(), "person");
        assert_eq!(group.location(), Some(&[5, 12][..]));
    }

    #[test]
    fn group_is_required() {
        let err = CaptureGroup::builder().add_location(1).build().unwrap_err();
        assert!(matches!(
            err,
            ModelError::MissingField {
                model: "CaptureGroup",
                field: "group"
            }
        ));

        let group = CaptureGroup::builder().add_location(1).group("date").build().unwrap();
        assert_eq!(group.group(), "date");
    }

    #[test]
    fn location_is_absent_until_added() {
        let group = CaptureGroupBuilder::new("person").build().unwrap();
        assert_eq!(group.location(), None);
    }

    #[test]
    fn replacing_location_discards_added_offsets() {
        let builder = CaptureGroupBuilder::new("person").add_location(1).add_location(2);

        let replaced = builder.clone().location(vec![7]).build().unwrap();
        assert_eq!(replaced.location(), Some(&[7][..]));

        let cleared = builder.location(None).build().unwrap();
        assert_eq!(cleared.location(), None);
    }

    #[test]
    fn copy_builder_reproduces_instance() {
        let group = CaptureGroupBuilder::new("person").add_location(3).build().unwrap();
        assert_eq!(group.to_builder().build().unwrap(), group);

        let edited = group.to_builder().add_location(9).build().unwrap();
        assert_eq!(edited.location(), Some(&[3, 9][..]));
        assert_eq!(group.location(), Some(&[3][..]));
    }

    #[test]
    fn repeated_builds_are_independent() {
        let builder = CaptureGroupBuilder::new("person").add_location(1);
        let first = builder.build().unwrap();
        let builder = builder.add_location(2);
        let second = builder.build().unwrap();

        assert_eq!(first.location(), Some(&[1][..]));
        assert_eq!(second.location(), Some(&[1, 2][..]));
    }

    #[test]
    fn payload_round_trips() {
        let group: CaptureGroup = testing::assert_round_trip(&json!({
            "group": "person",
            "location": [0, 4]
        }));
        assert_eq!(group.location(), Some(&[0, 4][..]));
    }

    #[test]
    fn null_location_item_is_rejected() {
        let err = CaptureGroup::from_value(json!({ "group": "person", "location": [5, null] })).unwrap_err();
        assert!(matches!(err, ModelError::InvalidArgument { .. }));
    }

    #[test]
    fn missing_group_fails_to_decode() {
        let err = CaptureGroup::from_json(r#"{"location": [1]}"#).unwrap_err();
        assert!(matches!(err, ModelError::Decode { .. }));
    }

    #[test]
    fn field_table_matches_encoding() {
        let group = CaptureGroupBuilder::new("person").add_location(1).build().unwrap();
        testing::assert_field_table(&group);
    }

    #[test]
    fn encoded_form() {
        let group = CaptureGroupBuilder::new("person").add_location(5).add_location(12).build().unwrap();
        insta::assert_json_snapshot!(group, @r#"
        {
          "group": "person",
          "location": [
            5,
            12
          ]
        }
        "#);
    }
}
