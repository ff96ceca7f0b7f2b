use serde_json::json;
use trellis_core::TrellisResult;
use trellis_domain::{BoardId, Invitation, InvitationId};

use crate::client::{decode, ApiClient};
use crate::transport::{ApiRequest, HttpTransport};

impl<T: HttpTransport> ApiClient<T> {
    /// Invitations addressed to the signed-in user.
    pub async fn invitations(&self) -> TrellisResult<Vec<Invitation>> {
        let response = self
            .send_authorized(ApiRequest::get(self.url("/invitations")))
            .await?;
        decode(&response)
    }

    /// Invite another user to a board by email.
    pub async fn invite(&self, board_id: BoardId, email: &str) -> TrellisResult<Invitation> {
        let request = ApiRequest::post(self.url("/invitations"))
            .with_body(json!({ "boardId": board_id, "email": email }));
        let response = self.send_authorized(request).await?;
        decode(&response)
    }

    pub async fn accept_invitation(&self, id: InvitationId) -> TrellisResult<Invitation> {
        let request = ApiRequest::post(self.url(&format!("/invitations/{}/accept", id)));
        let response = self.send_authorized(request).await?;
        decode(&response)
    }

    pub async fn decline_invitation(&self, id: InvitationId) -> TrellisResult<Invitation> {
        let request = ApiRequest::post(self.url(&format!("/invitations/{}/decline", id)));
        let response = self.send_authorized(request).await?;
        decode(&response)
    }
}
