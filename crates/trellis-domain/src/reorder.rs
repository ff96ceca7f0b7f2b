//! Pure planning for drag-and-drop reordering.
//!
//! Positions are 1-based and contiguous within a lane (a list's cards, or a
//! board's lists). A plan is computed by rebuilding the affected lane order
//! in memory, renumbering it from 1, and emitting a placement for every
//! entity whose stored position (or parent list) differs from its target.
//! Entities outside the affected lanes are never touched.
//!
//! Planning is total: unknown ids, out-of-range indexes, and cancelled drags
//! degrade to an empty plan or a clamped insert, never an error.

use crate::board::BoardId;
use crate::card::{Card, CardId};
use crate::drag::{DragEvent, DragKind};
use crate::list::{List, ListId};
use crate::patch::{CardPatch, ListPatch};

/// One card write produced by planning: the card's new position, plus its
/// new list when the drag crossed lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardPlacement {
    pub card_id: CardId,
    /// `Some` only for the dragged card of a cross-list move.
    pub list_id: Option<ListId>,
    pub position: i32,
}

impl CardPlacement {
    pub fn to_patch(&self) -> CardPatch {
        CardPatch {
            position: Some(self.position),
            list_id: self.list_id,
            ..Default::default()
        }
    }
}

/// One list write produced by planning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPlacement {
    pub list_id: ListId,
    pub position: i32,
}

impl ListPlacement {
    pub fn to_patch(&self) -> ListPatch {
        ListPatch {
            position: Some(self.position),
            ..Default::default()
        }
    }
}

/// The full set of writes needed to persist one drag gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderPlan {
    Cards(Vec<CardPlacement>),
    Lists(Vec<ListPlacement>),
}

impl ReorderPlan {
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        match self {
            ReorderPlan::Cards(placements) => placements.len(),
            ReorderPlan::Lists(placements) => placements.len(),
        }
    }
}

/// Plan the writes for a finished drag gesture.
///
/// Returns an empty plan when the drag was cancelled (`destination` is
/// `None`), when the dragged entity is unknown, or when the destination
/// droppable does not belong to the given board state.
pub fn plan_drag(lists: &[List], cards: &[Card], event: &DragEvent) -> ReorderPlan {
    match event.kind {
        DragKind::Card => {
            let Some(destination) = event.destination else {
                return ReorderPlan::Cards(Vec::new());
            };
            if !lists.iter().any(|list| list.id == destination.droppable_id) {
                return ReorderPlan::Cards(Vec::new());
            }
            ReorderPlan::Cards(plan_card_move(
                cards,
                event.draggable_id,
                event.source.droppable_id,
                destination.droppable_id,
                destination.index,
            ))
        }
        DragKind::List => {
            let Some(destination) = event.destination else {
                return ReorderPlan::Lists(Vec::new());
            };
            let dragged = lists.iter().find(|list| list.id == event.draggable_id);
            match dragged {
                Some(list) if list.board_id == destination.droppable_id => {
                    ReorderPlan::Lists(plan_list_reorder(
                        lists,
                        event.draggable_id,
                        destination.index,
                    ))
                }
                _ => ReorderPlan::Lists(Vec::new()),
            }
        }
    }
}

/// Plan the card writes for moving `dragged_id` to `destination_index`
/// (0-based) within `destination_list`.
///
/// Dropping a card back onto its own slot yields an empty plan, even when
/// the lane's stored positions are not contiguous. The caller is expected to
/// have checked that `destination_list` exists.
pub fn plan_card_move(
    cards: &[Card],
    dragged_id: CardId,
    source_list: ListId,
    destination_list: ListId,
    destination_index: usize,
) -> Vec<CardPlacement> {
    if source_list == destination_list {
        let mut order = card_lane(cards, source_list);
        let Some(from) = order.iter().position(|id| *id == dragged_id) else {
            return Vec::new();
        };
        order.remove(from);
        let to = destination_index.min(order.len());
        if to == from {
            return Vec::new();
        }
        order.insert(to, dragged_id);
        diff_cards(cards, &order, None)
    } else {
        let mut source_order = card_lane(cards, source_list);
        let Some(from) = source_order.iter().position(|id| *id == dragged_id) else {
            return Vec::new();
        };
        source_order.remove(from);

        let mut destination_order = card_lane(cards, destination_list);
        let to = destination_index.min(destination_order.len());
        destination_order.insert(to, dragged_id);

        let mut placements =
            diff_cards(cards, &destination_order, Some((dragged_id, destination_list)));
        placements.extend(diff_cards(cards, &source_order, None));
        placements
    }
}

/// Plan the list writes for moving `dragged_id` to `destination_index`
/// (0-based) among its board's lists.
pub fn plan_list_reorder(
    lists: &[List],
    dragged_id: ListId,
    destination_index: usize,
) -> Vec<ListPlacement> {
    let Some(dragged) = lists.iter().find(|list| list.id == dragged_id) else {
        return Vec::new();
    };

    let mut order = list_lane(lists, dragged.board_id);
    let Some(from) = order.iter().position(|id| *id == dragged_id) else {
        return Vec::new();
    };
    order.remove(from);
    let to = destination_index.min(order.len());
    if to == from {
        return Vec::new();
    }
    order.insert(to, dragged_id);

    diff_lists(lists, &order)
}

fn card_lane(cards: &[Card], list_id: ListId) -> Vec<CardId> {
    let mut lane: Vec<&Card> = cards.iter().filter(|card| card.list_id == list_id).collect();
    lane.sort_by_key(|card| card.position);
    lane.iter().map(|card| card.id).collect()
}

fn list_lane(lists: &[List], board_id: BoardId) -> Vec<ListId> {
    let mut lane: Vec<&List> = lists.iter().filter(|list| list.board_id == board_id).collect();
    lane.sort_by_key(|list| list.position);
    lane.iter().map(|list| list.id).collect()
}

/// Renumber `order` from 1 and emit a placement for every card whose stored
/// position differs. The dragged card of a cross-list move (`moved`) is
/// always emitted, carrying its new list.
fn diff_cards(
    cards: &[Card],
    order: &[CardId],
    moved: Option<(CardId, ListId)>,
) -> Vec<CardPlacement> {
    let mut placements = Vec::new();
    for (index, id) in order.iter().enumerate() {
        let target = (index + 1) as i32;
        match moved {
            Some((moved_id, destination)) if *id == moved_id => {
                placements.push(CardPlacement {
                    card_id: *id,
                    list_id: Some(destination),
                    position: target,
                });
                continue;
            }
            _ => {}
        }
        let Some(card) = cards.iter().find(|card| card.id == *id) else {
            continue;
        };
        if card.position != target {
            placements.push(CardPlacement {
                card_id: *id,
                list_id: None,
                position: target,
            });
        }
    }
    placements
}

fn diff_lists(lists: &[List], order: &[ListId]) -> Vec<ListPlacement> {
    let mut placements = Vec::new();
    for (index, id) in order.iter().enumerate() {
        let target = (index + 1) as i32;
        let Some(list) = lists.iter().find(|list| list.id == *id) else {
            continue;
        };
        if list.position != target {
            placements.push(ListPlacement {
                list_id: *id,
                position: target,
            });
        }
    }
    placements
}
