use crate::cli::InviteAction;
use crate::context::CliContext;
use crate::output;

pub async fn handle(ctx: &CliContext, action: InviteAction) -> anyhow::Result<()> {
    match action {
        InviteAction::Send { board_id, email } => {
            let invitation = ctx.api.invite(board_id, &email).await?;
            output::output_success(&invitation);
        }
        InviteAction::List => {
            let invitations = ctx.api.invitations().await?;
            output::output_list(invitations);
        }
        InviteAction::Accept { id } => {
            let invitation = ctx.api.accept_invitation(id).await?;
            output::output_success(&invitation);
        }
        InviteAction::Decline { id } => {
            let invitation = ctx.api.decline_invitation(id).await?;
            output::output_success(&invitation);
        }
    }
    Ok(())
}
