use futures::future::join_all;
use trellis_core::TrellisResult;
use trellis_domain::{plan_drag, BoardSnapshot, DragEvent, ReorderPlan};

use crate::backend::SyncBackend;
use crate::state::BoardState;

/// How a finished drag ended up persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// The drag required no writes.
    Noop,
    /// Every placement was accepted; `updated` entities were written.
    Synced { updated: usize },
    /// At least one write was rejected; local state was replaced with a
    /// fresh server read.
    Reconciled,
}

/// Applies drags optimistically and keeps the working copy honest.
///
/// Each drag runs in two phases: the plan is applied to local state first,
/// then every placement is pushed concurrently as a partial update. If any
/// push fails, the whole board is refetched exactly once and the local copy
/// replaced, so the client never keeps an ordering the server refused.
pub struct SyncController<B: SyncBackend> {
    backend: B,
    state: BoardState,
}

impl<B: SyncBackend> SyncController<B> {
    pub fn new(backend: B, snapshot: BoardSnapshot) -> Self {
        Self {
            backend,
            state: BoardState::new(snapshot),
        }
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Handle one finished drag gesture end to end.
    pub async fn handle_drag(&mut self, event: &DragEvent) -> TrellisResult<DragOutcome> {
        let plan = plan_drag(self.state.lists(), self.state.cards(), event);
        if plan.is_empty() {
            return Ok(DragOutcome::Noop);
        }

        let updated = plan.len();
        self.state.apply(&plan);

        let failures = self.push_plan(&plan).await;
        if failures == 0 {
            return Ok(DragOutcome::Synced { updated });
        }

        tracing::warn!(failures, total = updated, "Placement writes rejected, refetching board");
        let snapshot = self.backend.fetch_board(self.state.board().id).await?;
        self.state.replace(snapshot);
        Ok(DragOutcome::Reconciled)
    }

    /// Push every placement concurrently; returns how many were rejected.
    async fn push_plan(&self, plan: &ReorderPlan) -> usize {
        match plan {
            ReorderPlan::Cards(placements) => {
                let pushes = placements.iter().map(|placement| {
                    self.backend.push_card(placement.card_id, placement.to_patch())
                });
                count_failures(join_all(pushes).await)
            }
            ReorderPlan::Lists(placements) => {
                let pushes = placements.iter().map(|placement| {
                    self.backend.push_list(placement.list_id, placement.to_patch())
                });
                count_failures(join_all(pushes).await)
            }
        }
    }
}

fn count_failures<V>(results: Vec<TrellisResult<V>>) -> usize {
    let mut failures = 0;
    for result in &results {
        if let Err(err) = result {
            tracing::debug!("Placement write rejected: {}", err);
            failures += 1;
        }
    }
    failures
}
