use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::card::Card;
use crate::list::List;

/// A complete read of one board: the board record plus every list and card
/// that belongs to it.
///
/// This is the unit of refetch for reconciliation: when a partial write is
/// rejected, the client replaces its local state with a fresh snapshot
/// rather than patching around the failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    pub board: Board,
    #[serde(default)]
    pub lists: Vec<List>,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl BoardSnapshot {
    pub fn new(board: Board, lists: Vec<List>, cards: Vec<Card>) -> Self {
        Self { board, lists, cards }
    }
}
