use futures::try_join;
use serde_json::json;
use trellis_core::TrellisResult;
use trellis_domain::{Board, BoardId, BoardPatch, BoardSnapshot};

use crate::client::{decode, json_body, ApiClient};
use crate::transport::{ApiRequest, HttpTransport};

impl<T: HttpTransport> ApiClient<T> {
    /// All boards visible to the signed-in user.
    pub async fn boards(&self) -> TrellisResult<Vec<Board>> {
        let response = self.send_authorized(ApiRequest::get(self.url("/boards"))).await?;
        decode(&response)
    }

    pub async fn get_board(&self, id: BoardId) -> TrellisResult<Board> {
        let response = self
            .send_authorized(ApiRequest::get(self.url(&format!("/boards/{}", id))))
            .await?;
        decode(&response)
    }

    pub async fn create_board(&self, name: &str, private: bool) -> TrellisResult<Board> {
        let request = ApiRequest::post(self.url("/boards"))
            .with_body(json!({ "name": name, "private": private }));
        let response = self.send_authorized(request).await?;
        decode(&response)
    }

    pub async fn update_board(&self, id: BoardId, patch: &BoardPatch) -> TrellisResult<Board> {
        let request =
            ApiRequest::patch(self.url(&format!("/boards/{}", id))).with_body(json_body(patch)?);
        let response = self.send_authorized(request).await?;
        decode(&response)
    }

    pub async fn delete_board(&self, id: BoardId) -> TrellisResult<()> {
        self.send_authorized(ApiRequest::delete(self.url(&format!("/boards/{}", id))))
            .await?;
        Ok(())
    }

    /// One full read of a board: the record, its lists, and its cards,
    /// fetched concurrently.
    pub async fn load_board(&self, id: BoardId) -> TrellisResult<BoardSnapshot> {
        let (board, lists, cards) = try_join!(
            self.get_board(id),
            self.lists_for_board(id),
            self.cards_for_board(id),
        )?;
        Ok(BoardSnapshot::new(board, lists, cards))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::{CredentialStore, MemoryCredentialStore, TokenPair};
    use crate::session::Session;
    use crate::transport::{ApiResponse, MockHttpTransport};
    use trellis_domain::{Card, List};
    use uuid::Uuid;

    fn json_response<B: serde::Serialize>(body: &B) -> ApiResponse {
        ApiResponse {
            status: 200,
            body: serde_json::to_vec(body).unwrap(),
        }
    }

    async fn signed_in_client(transport: MockHttpTransport) -> ApiClient<MockHttpTransport> {
        let store = MemoryCredentialStore::new();
        store
            .store(&TokenPair {
                token: "t1".to_string(),
                refresh_token: "r1".to_string(),
            })
            .await
            .unwrap();
        let session = Session::restore(store).await.unwrap();
        ApiClient::with_transport(transport, "http://localhost:5000/api", session)
    }

    #[tokio::test]
    async fn test_load_board_assembles_a_snapshot() {
        let owner = Uuid::new_v4();
        let board = Board::new("Release".to_string(), owner);
        let list = List::new(board.id, "Todo".to_string(), 1);
        let card = Card::new(board.id, list.id, "Cut the tag".to_string(), 1);

        let board_id = board.id;
        let board_clone = board.clone();
        let lists = vec![list.clone()];
        let cards = vec![card.clone()];

        let mut transport = MockHttpTransport::new();
        transport
            .expect_execute()
            .withf(move |request| request.url.ends_with(&format!("/boards/{}", board_id)))
            .times(1)
            .returning(move |_| Ok(json_response(&board_clone)));
        transport
            .expect_execute()
            .withf(|request| request.url.ends_with("/lists"))
            .times(1)
            .returning(move |_| Ok(json_response(&lists)));
        transport
            .expect_execute()
            .withf(|request| request.url.ends_with("/cards"))
            .times(1)
            .returning(move |_| Ok(json_response(&cards)));

        let client = signed_in_client(transport).await;
        let snapshot = client.load_board(board.id).await.unwrap();

        assert_eq!(snapshot.board.id, board.id);
        assert_eq!(snapshot.lists.len(), 1);
        assert_eq!(snapshot.cards.len(), 1);
        assert_eq!(snapshot.cards[0].id, card.id);
    }

    #[tokio::test]
    async fn test_update_board_sends_only_the_patched_fields() {
        let id = Uuid::new_v4();
        let board = Board::new("Renamed".to_string(), Uuid::new_v4());

        let mut transport = MockHttpTransport::new();
        transport
            .expect_execute()
            .withf(|request| {
                request.method == reqwest::Method::PATCH
                    && request.body == Some(serde_json::json!({ "name": "Renamed" }))
            })
            .times(1)
            .returning(move |_| Ok(json_response(&board)));

        let client = signed_in_client(transport).await;
        let patch = BoardPatch {
            name: Some("Renamed".to_string()),
            ..Default::default()
        };
        client.update_board(id, &patch).await.unwrap();
    }
}
