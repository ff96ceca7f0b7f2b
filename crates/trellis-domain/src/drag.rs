use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What kind of entity a drag gesture is moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragKind {
    Card,
    List,
}

/// A droppable container plus a 0-based slot inside it.
///
/// For card drags the droppable is a list; for list drags it is the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropSlot {
    pub droppable_id: Uuid,
    pub index: usize,
}

/// The result of a completed drag gesture.
///
/// `destination` is `None` when the drag was cancelled or released outside
/// any droppable; such events must produce no writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragEvent {
    pub draggable_id: Uuid,
    #[serde(rename = "type")]
    pub kind: DragKind,
    pub source: DropSlot,
    pub destination: Option<DropSlot>,
}

impl DragEvent {
    /// A drag released over a valid slot.
    pub fn dropped(
        draggable_id: Uuid,
        kind: DragKind,
        source: DropSlot,
        destination: DropSlot,
    ) -> Self {
        Self {
            draggable_id,
            kind,
            source,
            destination: Some(destination),
        }
    }

    /// A drag released outside any droppable.
    pub fn cancelled(draggable_id: Uuid, kind: DragKind, source: DropSlot) -> Self {
        Self {
            draggable_id,
            kind,
            source,
            destination: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_matches_drag_result_shape() {
        let event = DragEvent::dropped(
            Uuid::new_v4(),
            DragKind::Card,
            DropSlot {
                droppable_id: Uuid::new_v4(),
                index: 0,
            },
            DropSlot {
                droppable_id: Uuid::new_v4(),
                index: 2,
            },
        );

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"draggableId\""));
        assert!(json.contains("\"droppableId\""));
        assert!(json.contains("\"type\":\"card\""));
    }

    #[test]
    fn test_cancelled_drag_has_null_destination() {
        let event = DragEvent::cancelled(
            Uuid::new_v4(),
            DragKind::List,
            DropSlot {
                droppable_id: Uuid::new_v4(),
                index: 1,
            },
        );

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"destination\":null"));
    }
}
