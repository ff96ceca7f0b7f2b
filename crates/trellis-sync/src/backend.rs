use async_trait::async_trait;
use trellis_api::{ApiClient, HttpTransport};
use trellis_core::TrellisResult;
use trellis_domain::{BoardId, BoardSnapshot, Card, CardId, CardPatch, List, ListId, ListPatch};

/// Persistence seam for the sync controller.
///
/// `push_*` persists a single placement as a partial update; `fetch_board`
/// is the wholesale read used for reconciliation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SyncBackend: Send + Sync {
    async fn push_card(&self, id: CardId, patch: CardPatch) -> TrellisResult<Card>;
    async fn push_list(&self, id: ListId, patch: ListPatch) -> TrellisResult<List>;
    async fn fetch_board(&self, id: BoardId) -> TrellisResult<BoardSnapshot>;
}

#[async_trait]
impl<T: HttpTransport> SyncBackend for ApiClient<T> {
    async fn push_card(&self, id: CardId, patch: CardPatch) -> TrellisResult<Card> {
        self.update_card(id, &patch).await
    }

    async fn push_list(&self, id: ListId, patch: ListPatch) -> TrellisResult<List> {
        self.update_list(id, &patch).await
    }

    async fn fetch_board(&self, id: BoardId) -> TrellisResult<BoardSnapshot> {
        self.load_board(id).await
    }
}
