use serde::Serialize;
use uuid::Uuid;

use crate::field_update::FieldUpdate;

/// Partial update for a card, shaped for `PATCH /cards/{id}`.
///
/// Absent fields are omitted from the request body so the server leaves them
/// untouched. `description` uses [`FieldUpdate`] so a caller can distinguish
/// "leave as is" from "clear to null".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "FieldUpdate::is_no_change")]
    pub description: FieldUpdate<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_id: Option<Uuid>,
}

/// Partial update for a list, shaped for `PATCH /lists/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "FieldUpdate::is_no_change")]
    pub color: FieldUpdate<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
}

/// Partial update for a board, shaped for `PATCH /boards/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_change_fields_are_omitted() {
        let patch = CardPatch {
            position: Some(3),
            ..Default::default()
        };

        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"position":3}"#);
    }

    #[test]
    fn test_clear_serializes_as_null() {
        let patch = CardPatch {
            description: FieldUpdate::Clear,
            ..Default::default()
        };

        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"description":null}"#);
    }

    #[test]
    fn test_set_serializes_as_value() {
        let patch = ListPatch {
            name: Some("Doing".to_string()),
            color: FieldUpdate::Set("#ff8800".to_string()),
            position: None,
        };

        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r##"{"name":"Doing","color":"#ff8800"}"##);
    }

    #[test]
    fn test_list_id_uses_camel_case() {
        let list = Uuid::new_v4();
        let patch = CardPatch {
            position: Some(1),
            list_id: Some(list),
            ..Default::default()
        };

        let json = serde_json::to_string(&patch).unwrap();
        assert!(json.contains("\"listId\""));
        assert!(!json.contains("\"list_id\""));
    }
}
