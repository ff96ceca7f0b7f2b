use crate::cli::{CardAction, CardCreateArgs, CardUpdateArgs};
use crate::context::CliContext;
use crate::output;
use trellis_domain::{Card, CardId, CardPatch, DragEvent, DragKind, DropSlot, FieldUpdate, ListId};
use trellis_sync::SyncController;

pub async fn handle(ctx: &CliContext, action: CardAction) -> anyhow::Result<()> {
    match action {
        CardAction::Create(args) => {
            let card = handle_create(ctx, args).await?;
            output::output_success(&card);
        }
        CardAction::List { board_id } => {
            let cards = ctx.api.cards_for_board(board_id).await?;
            output::output_list(cards);
        }
        CardAction::Get { id } => {
            let card = ctx.api.get_card(id).await?;
            output::output_success(&card);
        }
        CardAction::Update(args) => {
            let card = handle_update(ctx, args).await?;
            output::output_success(&card);
        }
        CardAction::Move {
            id,
            list_id,
            position,
        } => {
            handle_move(ctx, id, list_id, position).await?;
        }
        CardAction::Delete { id } => {
            ctx.api.delete_card(id).await?;
            output::output_success(serde_json::json!({"deleted": id.to_string()}));
        }
        CardAction::AddComment { id, text } => {
            let card = ctx.api.add_comment(id, &text).await?;
            output::output_success(&card);
        }
        CardAction::DeleteComment {
            card_id,
            comment_id,
        } => {
            let card = ctx.api.delete_comment(card_id, comment_id).await?;
            output::output_success(&card);
        }
    }
    Ok(())
}

async fn handle_create(ctx: &CliContext, args: CardCreateArgs) -> anyhow::Result<Card> {
    Ok(ctx
        .api
        .create_card(args.list_id, &args.name, args.description.as_deref())
        .await?)
}

async fn handle_update(ctx: &CliContext, args: CardUpdateArgs) -> anyhow::Result<Card> {
    let description = if args.clear_description {
        FieldUpdate::Clear
    } else {
        args.description
            .map(FieldUpdate::Set)
            .unwrap_or(FieldUpdate::NoChange)
    };
    let patch = CardPatch {
        name: args.name,
        description,
        position: None,
        list_id: None,
    };
    Ok(ctx.api.update_card(args.id, &patch).await?)
}

/// Replay the move as the drag gesture it stands in for, against a fresh
/// snapshot of the board.
async fn handle_move(
    ctx: &CliContext,
    id: CardId,
    list_id: ListId,
    position: Option<usize>,
) -> anyhow::Result<()> {
    if position == Some(0) {
        anyhow::bail!("--position is 1-based; use 1 for the front of the list");
    }

    let card = ctx.api.get_card(id).await?;
    let snapshot = ctx.api.load_board(card.board_id).await?;

    let mut controller = SyncController::new(ctx.api.clone(), snapshot);
    let Some(source) = controller.state().card_slot(id) else {
        anyhow::bail!("Card not found on its board: {}", id);
    };
    let index = match position {
        Some(position) => position - 1,
        None => controller.state().cards_in(list_id).len(),
    };
    let event = DragEvent::dropped(
        id,
        DragKind::Card,
        source,
        DropSlot {
            droppable_id: list_id,
            index,
        },
    );

    let outcome = controller.handle_drag(&event).await?;
    let mut data = output::reorder_summary(outcome);
    data["cards"] = serde_json::to_value(controller.state().cards_in(list_id))?;
    output::output_success(data);
    Ok(())
}
