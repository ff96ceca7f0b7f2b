use serde_json::json;
use trellis_core::TrellisResult;
use trellis_domain::{BoardId, List, ListId, ListPatch};

use crate::client::{decode, json_body, ApiClient};
use crate::transport::{ApiRequest, HttpTransport};

impl<T: HttpTransport> ApiClient<T> {
    /// Lists of one board, in stored order.
    pub async fn lists_for_board(&self, board_id: BoardId) -> TrellisResult<Vec<List>> {
        let response = self
            .send_authorized(ApiRequest::get(self.url(&format!("/boards/{}/lists", board_id))))
            .await?;
        decode(&response)
    }

    pub async fn get_list(&self, id: ListId) -> TrellisResult<List> {
        let response = self
            .send_authorized(ApiRequest::get(self.url(&format!("/lists/{}", id))))
            .await?;
        decode(&response)
    }

    pub async fn create_list(
        &self,
        board_id: BoardId,
        name: &str,
        color: Option<&str>,
    ) -> TrellisResult<List> {
        let mut body = json!({ "boardId": board_id, "name": name });
        if let Some(color) = color {
            body["color"] = json!(color);
        }
        let request = ApiRequest::post(self.url("/lists")).with_body(body);
        let response = self.send_authorized(request).await?;
        decode(&response)
    }

    pub async fn update_list(&self, id: ListId, patch: &ListPatch) -> TrellisResult<List> {
        let request =
            ApiRequest::patch(self.url(&format!("/lists/{}", id))).with_body(json_body(patch)?);
        let response = self.send_authorized(request).await?;
        decode(&response)
    }

    pub async fn delete_list(&self, id: ListId) -> TrellisResult<()> {
        self.send_authorized(ApiRequest::delete(self.url(&format!("/lists/{}", id))))
            .await?;
        Ok(())
    }
}
