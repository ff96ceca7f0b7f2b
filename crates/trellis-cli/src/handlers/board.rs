use crate::cli::{BoardAction, BoardUpdateArgs};
use crate::context::CliContext;
use crate::output;
use trellis_domain::{Board, BoardPatch};

pub async fn handle(ctx: &CliContext, action: BoardAction) -> anyhow::Result<()> {
    match action {
        BoardAction::Create { name, private } => {
            let board = ctx.api.create_board(&name, private).await?;
            output::output_success(&board);
        }
        BoardAction::List => {
            let boards = ctx.api.boards().await?;
            output::output_list(boards);
        }
        BoardAction::Get { id } => {
            let board = ctx.api.get_board(id).await?;
            output::output_success(&board);
        }
        BoardAction::Show { id } => {
            let snapshot = ctx.api.load_board(id).await?;
            output::output_success(&snapshot);
        }
        BoardAction::Update(args) => {
            let board = handle_update(ctx, args).await?;
            output::output_success(&board);
        }
        BoardAction::Delete { id } => {
            ctx.api.delete_board(id).await?;
            output::output_success(serde_json::json!({"deleted": id.to_string()}));
        }
    }
    Ok(())
}

async fn handle_update(ctx: &CliContext, args: BoardUpdateArgs) -> anyhow::Result<Board> {
    let patch = BoardPatch {
        name: args.name,
        private: args.private,
    };
    Ok(ctx.api.update_board(args.id, &patch).await?)
}
