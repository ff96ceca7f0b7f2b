use crate::cli::AuthAction;
use crate::context::CliContext;
use crate::output;

pub async fn handle(ctx: &CliContext, action: AuthAction) -> anyhow::Result<()> {
    match action {
        AuthAction::Login { username, password } => {
            let auth = ctx.api.login(&username, &password).await?;
            output::output_success(&auth.user);
        }
        AuthAction::Register {
            username,
            email,
            password,
        } => {
            let auth = ctx.api.register(&username, &email, &password).await?;
            output::output_success(&auth.user);
        }
        AuthAction::Logout => {
            ctx.api.logout().await?;
            output::output_success(serde_json::json!({"loggedOut": true}));
        }
        AuthAction::Status => {
            let authenticated = ctx.api.session().is_authenticated().await;
            output::output_success(serde_json::json!({"authenticated": authenticated}));
        }
        AuthAction::RequestPasswordReset { email } => {
            ctx.api.request_password_reset(&email).await?;
            output::output_success(serde_json::json!({"requested": true}));
        }
        AuthAction::ResetPassword { token, password } => {
            ctx.api.reset_password(&token, &password).await?;
            output::output_success(serde_json::json!({"reset": true}));
        }
        AuthAction::VerifyEmail { token } => {
            ctx.api.verify_email(&token).await?;
            output::output_success(serde_json::json!({"verified": true}));
        }
    }
    Ok(())
}
