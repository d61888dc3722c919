//! services/api/src/web/reply_task.rs
//!
//! This module contains the asynchronous "worker" function that delivers the
//! counterpart's scripted reply after the simulated typing delay.

use crate::web::{
    protocol::ServerMessage,
    session::{sleep_or_cancel, SessionContext},
    views::ChatMessageView,
};
use tokio_util::sync::CancellationToken;
use tracing::info;
use uuid::Uuid;

/// Appends one scripted reply to the conversation with `match_id`.
///
/// The token belongs to the conversation: closing it cancels the reply.
pub async fn reply_process(ctx: SessionContext, match_id: Uuid, cancellation_token: CancellationToken) {
    let delay = ctx.app_state.config.timings.chat_reply_delay;
    if !sleep_or_cancel(&cancellation_token, delay).await {
        info!("Scripted reply for match {} cancelled.", match_id);
        return;
    }

    let message = {
        let mut guard = ctx.session.lock().await;
        let state = &mut *guard;
        let Some(open) = state
            .conversation
            .as_mut()
            .filter(|open| open.conversation.match_id() == match_id)
        else {
            return;
        };
        let message = ChatMessageView::from(open.conversation.push_scripted_reply());
        state.app.set_last_message(match_id, &message.text);
        message
    };

    ctx.emit(ServerMessage::MessageAppended { match_id, message });
    ctx.emit_snapshot().await;
}
