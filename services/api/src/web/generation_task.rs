//! services/api/src/web/generation_task.rs
//!
//! This module contains the asynchronous "worker" function that runs one
//! text-generation request and hands the result back to the view that asked.

use crate::web::session::SessionContext;
use asado_match_core::{GenerationKind, GenerationRequest, Ticket};
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Generates text for `request` and applies it if `ticket` is still current.
///
/// Results for a view that was torn down or restarted in the meantime are dropped.
pub async fn generation_process(
    ctx: SessionContext,
    ticket: Ticket,
    request: GenerationRequest,
    cancellation_token: CancellationToken,
) {
    let kind = request.kind();
    let start = Instant::now();

    let text = tokio::select! {
        _ = cancellation_token.cancelled() => {
            info!("{:?} generation abandoned; its view is gone.", kind);
            return;
        }
        text = ctx.app_state.text_generator.generate(&request) => text,
    };
    info!("{:?} generation took {:?}.", kind, start.elapsed());

    let applied = {
        let mut session = ctx.session.lock().await;
        match kind {
            GenerationKind::Motto => session.draft.apply_motto(ticket, text),
            GenerationKind::Icebreaker => session
                .conversation
                .as_mut()
                .is_some_and(|open| open.conversation.apply_icebreaker(ticket, text)),
            GenerationKind::Advice => session.advice.apply_answer(ticket, text),
        }
    };

    if applied {
        ctx.emit_snapshot().await;
    } else {
        info!("Discarding late {:?} result.", kind);
    }
}
