use trellis_domain::{Board, BoardSnapshot, Card, CardId, DropSlot, List, ListId, ReorderPlan};

/// The client's working copy of one board.
///
/// Ordering is always derived from stored positions, never from insertion
/// order, so the copy reads the same before and after a refetch.
pub struct BoardState {
    board: Board,
    lists: Vec<List>,
    cards: Vec<Card>,
}

impl BoardState {
    pub fn new(snapshot: BoardSnapshot) -> Self {
        Self {
            board: snapshot.board,
            lists: snapshot.lists,
            cards: snapshot.cards,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn lists(&self) -> &[List] {
        &self.lists
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Lists in display order.
    pub fn lists_ordered(&self) -> Vec<&List> {
        let mut lists: Vec<&List> = self.lists.iter().collect();
        lists.sort_by_key(|list| list.position);
        lists
    }

    /// Cards of one list in display order.
    pub fn cards_in(&self, list_id: ListId) -> Vec<&Card> {
        let mut cards: Vec<&Card> = self
            .cards
            .iter()
            .filter(|card| card.list_id == list_id)
            .collect();
        cards.sort_by_key(|card| card.position);
        cards
    }

    /// The slot a card currently occupies, usable as a drag source.
    pub fn card_slot(&self, card_id: CardId) -> Option<DropSlot> {
        let card = self.cards.iter().find(|card| card.id == card_id)?;
        let index = self
            .cards_in(card.list_id)
            .iter()
            .position(|card| card.id == card_id)?;
        Some(DropSlot {
            droppable_id: card.list_id,
            index,
        })
    }

    /// The slot a list currently occupies, usable as a drag source.
    pub fn list_slot(&self, list_id: ListId) -> Option<DropSlot> {
        let index = self
            .lists_ordered()
            .iter()
            .position(|list| list.id == list_id)?;
        Some(DropSlot {
            droppable_id: self.board.id,
            index,
        })
    }

    /// Apply a plan to the working copy.
    pub fn apply(&mut self, plan: &ReorderPlan) {
        match plan {
            ReorderPlan::Cards(placements) => {
                for placement in placements {
                    let Some(card) = self
                        .cards
                        .iter_mut()
                        .find(|card| card.id == placement.card_id)
                    else {
                        continue;
                    };
                    match placement.list_id {
                        Some(list_id) => card.move_to_list(list_id, placement.position),
                        None => card.update_position(placement.position),
                    }
                }
            }
            ReorderPlan::Lists(placements) => {
                for placement in placements {
                    let Some(list) = self
                        .lists
                        .iter_mut()
                        .find(|list| list.id == placement.list_id)
                    else {
                        continue;
                    };
                    list.update_position(placement.position);
                }
            }
        }
    }

    /// Replace the whole working copy with a fresh server read.
    pub fn replace(&mut self, snapshot: BoardSnapshot) {
        self.board = snapshot.board;
        self.lists = snapshot.lists;
        self.cards = snapshot.cards;
    }
}
