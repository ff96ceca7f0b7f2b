use serde::{Serialize, Serializer};

/// A three-state update for an optional field in a partial update.
///
/// A plain `Option` cannot distinguish "leave the field alone" from "clear
/// it"; this type can:
/// - `NoChange`: the field keeps whatever value it has
/// - `Set(value)`: the field becomes `value`
/// - `Clear`: the field becomes empty
///
/// On the wire, `Set` serializes as the value, `Clear` as an explicit `null`,
/// and `NoChange` fields are omitted from the patch entirely (via
/// `skip_serializing_if = "FieldUpdate::is_no_change"` on the patch field).
///
/// # Example
///
/// ```
/// use trellis_domain::FieldUpdate;
///
/// let rename = FieldUpdate::Set("Review queue".to_string());
/// let drop_color: FieldUpdate<String> = FieldUpdate::Clear;
/// let keep_description: FieldUpdate<String> = FieldUpdate::NoChange;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    /// Leave the field as it is.
    NoChange,
    /// Replace the field's value.
    Set(T),
    /// Empty the field.
    Clear,
}

impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        FieldUpdate::NoChange
    }
}

impl<T> FieldUpdate<T> {
    /// True when this field should be left out of a serialized patch.
    pub fn is_no_change(&self) -> bool {
        matches!(self, FieldUpdate::NoChange)
    }
}

impl<T: Serialize> Serialize for FieldUpdate<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            FieldUpdate::Set(value) => value.serialize(serializer),
            // NoChange only reaches here if the patch forgot to skip it;
            // serializing it as null keeps the output well-formed.
            FieldUpdate::Clear | FieldUpdate::NoChange => serializer.serialize_none(),
        }
    }
}
