use crate::cli::{ListAction, ListUpdateArgs};
use crate::context::CliContext;
use crate::output;
use trellis_domain::{DragEvent, DragKind, DropSlot, FieldUpdate, List, ListId, ListPatch};
use trellis_sync::SyncController;

pub async fn handle(ctx: &CliContext, action: ListAction) -> anyhow::Result<()> {
    match action {
        ListAction::Create {
            board_id,
            name,
            color,
        } => {
            let list = ctx.api.create_list(board_id, &name, color.as_deref()).await?;
            output::output_success(&list);
        }
        ListAction::List { board_id } => {
            let lists = ctx.api.lists_for_board(board_id).await?;
            output::output_list(lists);
        }
        ListAction::Get { id } => {
            let list = ctx.api.get_list(id).await?;
            output::output_success(&list);
        }
        ListAction::Update(args) => {
            let list = handle_update(ctx, args).await?;
            output::output_success(&list);
        }
        ListAction::Delete { id } => {
            ctx.api.delete_list(id).await?;
            output::output_success(serde_json::json!({"deleted": id.to_string()}));
        }
        ListAction::Reorder { id, position } => {
            handle_reorder(ctx, id, position).await?;
        }
    }
    Ok(())
}

async fn handle_update(ctx: &CliContext, args: ListUpdateArgs) -> anyhow::Result<List> {
    let color = if args.clear_color {
        FieldUpdate::Clear
    } else {
        args.color.map(FieldUpdate::Set).unwrap_or(FieldUpdate::NoChange)
    };
    let patch = ListPatch {
        name: args.name,
        color,
        position: None,
    };
    Ok(ctx.api.update_list(args.id, &patch).await?)
}

/// Replay the move as the drag gesture it stands in for, against a fresh
/// snapshot of the board.
async fn handle_reorder(ctx: &CliContext, id: ListId, position: usize) -> anyhow::Result<()> {
    let Some(index) = position.checked_sub(1) else {
        anyhow::bail!("--position is 1-based; use 1 for the front of the board");
    };

    let list = ctx.api.get_list(id).await?;
    let snapshot = ctx.api.load_board(list.board_id).await?;

    let mut controller = SyncController::new(ctx.api.clone(), snapshot);
    let Some(source) = controller.state().list_slot(id) else {
        anyhow::bail!("List not found on its board: {}", id);
    };
    let destination = DropSlot {
        droppable_id: list.board_id,
        index,
    };
    let event = DragEvent::dropped(id, DragKind::List, source, destination);

    let outcome = controller.handle_drag(&event).await?;
    let mut data = output::reorder_summary(outcome);
    data["lists"] = serde_json::to_value(controller.state().lists_ordered())?;
    output::output_success(data);
    Ok(())
}
