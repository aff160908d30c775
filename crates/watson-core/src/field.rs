/// How a field's value is laid out on the wire
///
/// Nested shapes carry the nested model's own field table so that the codec
/// can walk a payload without knowing the concrete types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A single primitive value (string, number, boolean, timestamp)
    Scalar,
    /// An array of primitive values
    List,
    /// A nested model object
    Model(&'static [Field]),
    /// An array of nested model objects
    ModelList(&'static [Field]),
}

/// One entry of a model's field table
///
/// Maps the in-memory field name to the key used on the wire. The wire key
/// equals the name unless the entry was declared with [`Field::wire`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    name: &'static str,
    wire: &'static str,
    shape: Shape,
}

impl Field {
    pub const fn scalar(name: &'static str) -> Self {
        Self::with_shape(name, Shape::Scalar)
    }

    pub const fn list(name: &'static str) -> Self {
        Self::with_shape(name, Shape::List)
    }

    pub const fn model(name: &'static str, fields: &'static [Self]) -> Self {
        Self::with_shape(name, Shape::Model(fields))
    }

    pub const fn model_list(name: &'static str, fields: &'static [Self]) -> Self {
        Self::with_shape(name, Shape::ModelList(fields))
    }

    const fn with_shape(name: &'static str, shape: Shape) -> Self {
        Self {
            name,
            wire: name,
            shape,
        }
    }

    /// Use a wire key that differs from the field name
    #[must_use]
    pub const fn wire(self, wire: &'static str) -> Self {
        Self { wire, ..self }
    }

    /// In-memory field name
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Key used for this field in the JSON payload
    pub const fn wire_key(&self) -> &'static str {
        self.wire
    }

    pub const fn shape(&self) -> Shape {
        self.shape
    }

    /// Whether the wire key differs from the field name
    pub fn is_renamed(&self) -> bool {
        self.name != self.wire
    }
}

/// Look up a field by its in-memory name
pub(crate) fn by_name(fields: &'static [Field], name: &str) -> Option<&'static Field> {
    fields.iter().find(|field| field.name == name)
}

/// Look up a field by its wire key
pub(crate) fn by_wire_key(fields: &'static [Field], wire: &str) -> Option<&'static Field> {
    fields.iter().find(|field| field.wire == wire)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INNER: &[Field] = &[Field::list("xpaths")];
    const OUTER: &[Field] = &[
        Field::scalar("id").wire("classifier_id"),
        Field::scalar("name"),
        Field::model("keep_content", INNER),
        Field::model_list("classes", INNER),
    ];

    #[test]
    fn unrenamed_field_uses_its_name() {
        let field = Field::scalar("name");
        assert_eq!(field.wire_key(), "name");
        assert!(!field.is_renamed());
    }

    #[test]
    fn renamed_field_keeps_shape() {
        let field = Field::list("class_names").wire("classes");
        assert_eq!(field.name(), "class_names");
        assert_eq!(field.wire_key(), "classes");
        assert_eq!(field.shape(), Shape::List);
        assert!(field.is_renamed());
    }

    #[test]
    fn lookups_go_both_ways() {
        assert_eq!(by_name(OUTER, "id").map(Field::wire_key), Some("classifier_id"));
        assert_eq!(by_wire_key(OUTER, "classifier_id").map(Field::name), Some("id"));
        assert!(by_name(OUTER, "classifier_id").is_none());
        assert!(by_wire_key(OUTER, "missing").is_none());
    }

    #[test]
    fn nested_shapes_carry_tables() {
        let Some(field) = by_name(OUTER, "keep_content") else {
            panic!("keep_content is declared");
        };
        assert_eq!(field.shape(), Shape::Model(INNER));
    }
}
