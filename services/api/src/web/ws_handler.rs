//! services/api/src/web/ws_handler.rs
//!
//! This is the main entry point and control loop for a WebSocket connection.
//! One connection carries one session: its state lives and dies with the socket.

use crate::{
    error::ApiError,
    web::{
        protocol::{ClientMessage, ServerMessage},
        session::{handle_client_message, SessionContext},
        state::AppState,
    },
};
use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::Response,
};
use futures::{stream::SplitSink, SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// The handler for upgrading HTTP requests to WebSocket connections.
pub async fn ws_handler(ws: WebSocketUpgrade, State(app_state): State<Arc<AppState>>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, app_state))
}

async fn handle_socket(socket: WebSocket, app_state: Arc<AppState>) {
    info!("New WebSocket connection established.");
    let (ws_sender, mut receiver) = socket.split();

    // --- 1. Writer Task ---
    // Every server message, whether from a handler or a scheduled task, goes through the outbox.
    let (outbox, outbox_rx) = mpsc::unbounded_channel::<ServerMessage>();
    let mut writer_task = tokio::spawn(async move {
        if let Err(e) = forward_outbox(ws_sender, outbox_rx).await {
            warn!("Stopped writing to the client: {}", e);
        }
    });

    let ctx = SessionContext::new(app_state, outbox);
    ctx.emit_snapshot().await;

    // --- 2. Main Message Loop ---
    loop {
        tokio::select! {
            incoming = receiver.next() => match incoming {
                Some(Ok(Message::Text(text))) => {
                    match serde_json::from_str::<ClientMessage>(&text) {
                        Ok(message) => handle_client_message(&ctx, message).await,
                        Err(e) => {
                            warn!("Received malformed client message: {}", e);
                            ctx.emit(ServerMessage::Rejected {
                                reason: format!("Malformed message: {}", e),
                            });
                        }
                    }
                }
                Some(Ok(Message::Close(_))) | None => {
                    info!("Client closed the connection.");
                    break;
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    error!("WebSocket receive error: {:?}", e);
                    break;
                }
            },
            _ = &mut writer_task => {
                info!("Writer task ended; closing session.");
                break;
            }
        }
    }

    // --- 3. Teardown ---
    ctx.shutdown().await;
    writer_task.abort();
    info!("WebSocket session ended.");
}

/// Drains the outbox into the socket until the session drops its sender.
async fn forward_outbox(
    mut ws_sender: SplitSink<WebSocket, Message>,
    mut outbox_rx: mpsc::UnboundedReceiver<ServerMessage>,
) -> Result<(), ApiError> {
    while let Some(message) = outbox_rx.recv().await {
        let json = serde_json::to_string(&message)?;
        ws_sender.send(Message::Text(json.into())).await?;
    }
    Ok(())
}
