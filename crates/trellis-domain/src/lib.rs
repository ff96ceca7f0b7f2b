pub mod board;
pub mod card;
pub mod drag;
pub mod field_update;
pub mod invitation;
pub mod list;
pub mod patch;
pub mod reorder;
pub mod snapshot;
pub mod user;

pub use board::{Board, BoardId};
pub use card::{Card, CardId, Comment, CommentId};
pub use drag::{DragEvent, DragKind, DropSlot};
pub use field_update::FieldUpdate;
pub use invitation::{Invitation, InvitationId, InvitationStatus};
pub use list::{List, ListId};
pub use patch::{BoardPatch, CardPatch, ListPatch};
pub use reorder::{
    plan_card_move, plan_drag, plan_list_reorder, CardPlacement, ListPlacement, ReorderPlan,
};
pub use snapshot::BoardSnapshot;
pub use user::{User, UserId};
