//! services/api/src/web/swipe_task.rs
//!
//! This module contains the asynchronous "worker" function that settles a
//! swipe decision after the simulated latency.

use crate::web::{
    protocol::ServerMessage,
    session::{sleep_or_cancel, SessionContext},
    views::MatchView,
};
use asado_match_core::{Direction, PendingDecision};
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Records the match for an accepted candidate, then advances the deck.
///
/// Both steps are scoped to the session: if it ends first, neither happens.
pub async fn swipe_process(
    ctx: SessionContext,
    decision: PendingDecision,
    cancellation_token: CancellationToken,
) {
    let timings = ctx.app_state.config.timings;

    if !sleep_or_cancel(&cancellation_token, timings.swipe_match_delay).await {
        info!("Swipe cancelled before it settled.");
        return;
    }

    if decision.direction == Direction::Accept {
        let matched = {
            let mut session = ctx.session.lock().await;
            MatchView::from(session.app.record_match(decision.candidate))
        };
        info!("New match {} with '{}'.", matched.id, matched.group.name);
        ctx.emit(ServerMessage::MatchCreated { matched });
    }

    let remaining = timings
        .swipe_settle_delay
        .saturating_sub(timings.swipe_match_delay);
    if !sleep_or_cancel(&cancellation_token, remaining).await {
        info!("Swipe cancelled before the deck advanced.");
        return;
    }

    {
        let mut session = ctx.session.lock().await;
        session.deck.settle();
    }
    ctx.emit_snapshot().await;
}
