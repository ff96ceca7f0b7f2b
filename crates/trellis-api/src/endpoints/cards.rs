use serde_json::json;
use trellis_core::TrellisResult;
use trellis_domain::{BoardId, Card, CardId, CardPatch, CommentId, ListId};

use crate::client::{decode, json_body, ApiClient};
use crate::transport::{ApiRequest, HttpTransport};

impl<T: HttpTransport> ApiClient<T> {
    /// All cards of one board, across all of its lists.
    pub async fn cards_for_board(&self, board_id: BoardId) -> TrellisResult<Vec<Card>> {
        let response = self
            .send_authorized(ApiRequest::get(self.url(&format!("/boards/{}/cards", board_id))))
            .await?;
        decode(&response)
    }

    pub async fn get_card(&self, id: CardId) -> TrellisResult<Card> {
        let response = self
            .send_authorized(ApiRequest::get(self.url(&format!("/cards/{}", id))))
            .await?;
        decode(&response)
    }

    /// Create a card at the tail of `list_id`.
    pub async fn create_card(
        &self,
        list_id: ListId,
        name: &str,
        description: Option<&str>,
    ) -> TrellisResult<Card> {
        let mut body = json!({ "listId": list_id, "name": name });
        if let Some(description) = description {
            body["description"] = json!(description);
        }
        let request = ApiRequest::post(self.url("/cards")).with_body(body);
        let response = self.send_authorized(request).await?;
        decode(&response)
    }

    pub async fn update_card(&self, id: CardId, patch: &CardPatch) -> TrellisResult<Card> {
        let request =
            ApiRequest::patch(self.url(&format!("/cards/{}", id))).with_body(json_body(patch)?);
        let response = self.send_authorized(request).await?;
        decode(&response)
    }

    pub async fn delete_card(&self, id: CardId) -> TrellisResult<()> {
        self.send_authorized(ApiRequest::delete(self.url(&format!("/cards/{}", id))))
            .await?;
        Ok(())
    }

    /// Append a comment; the server returns the updated card.
    pub async fn add_comment(&self, card_id: CardId, text: &str) -> TrellisResult<Card> {
        let request = ApiRequest::post(self.url(&format!("/cards/{}/comments", card_id)))
            .with_body(json!({ "text": text }));
        let response = self.send_authorized(request).await?;
        decode(&response)
    }

    /// Remove a comment; the server returns the updated card.
    pub async fn delete_comment(
        &self,
        card_id: CardId,
        comment_id: CommentId,
    ) -> TrellisResult<Card> {
        let response = self
            .send_authorized(ApiRequest::delete(
                self.url(&format!("/cards/{}/comments/{}", card_id, comment_id)),
            ))
            .await?;
        decode(&response)
    }
}
