use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::board::BoardId;
use crate::list::ListId;
use crate::user::UserId;

pub type CardId = Uuid;
pub type CommentId = Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub board_id: BoardId,
    pub list_id: ListId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// 1-based rank among the cards of `list_id`; contiguous within a list.
    pub position: i32,
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Card {
    pub fn new(board_id: BoardId, list_id: ListId, name: String, position: i32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            board_id,
            list_id,
            name,
            description: None,
            position,
            comments: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update_position(&mut self, position: i32) {
        self.position = position;
        self.updated_at = Utc::now();
    }

    pub fn move_to_list(&mut self, list_id: ListId, position: i32) {
        self.list_id = list_id;
        self.position = position;
        self.updated_at = Utc::now();
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub user_id: UserId,
    pub text: String,
    pub created_at: DateTime<Utc>,
}
