//! WebSocket connection state machine.
//!
//! Handles the read/write loop for a single WebSocket connection,
//! dispatching incoming commands and forwarding filtered events.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::{Mutex, broadcast};

use super::messages::{WsCommand, WsMessage, WsMessageType};
use super::subscription::SubscriptionManager;
use crate::api::dto::ShelfDto;
use crate::domain::LibraryEvent;
use crate::service::LibraryService;

/// Runs the read/write loop for a single WebSocket connection.
///
/// - Reads commands from the client and dispatches them.
/// - Forwards matching events from the [`broadcast::Receiver`] to the client.
pub async fn run_connection(
    socket: WebSocket,
    mut event_rx: broadcast::Receiver<LibraryEvent>,
    library: Arc<Mutex<LibraryService>>,
) {
    let (mut ws_tx, mut ws_rx) = socket.split();
    let mut subs = SubscriptionManager::new();

    loop {
        tokio::select! {
            // Incoming message from client
            msg = ws_rx.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        let response = handle_text_message(&text, &mut subs, &library).await;
                        if let Some(resp_json) = response
                            && ws_tx.send(Message::text(resp_json)).await.is_err() {
                                break;
                            }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    _ => {}
                }
            }
            // Event from EventBus
            event = event_rx.recv() => {
                match event {
                    Ok(library_event) => {
                        if subs.matches(library_event.event_type_str()) {
                            let msg = WsMessage::new(
                                uuid::Uuid::new_v4().to_string(),
                                WsMessageType::Event,
                                serde_json::to_value(&library_event).unwrap_or_default(),
                            );
                            let json = serde_json::to_string(&msg).unwrap_or_default();
                            if ws_tx.send(Message::text(json)).await.is_err() {
                                break;
                            }
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        tracing::warn!(lagged = n, "ws client lagged behind event bus");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        }
    }

    tracing::debug!("ws connection closed");
}

/// Handles a text message from the client, returning an optional JSON response.
async fn handle_text_message(
    text: &str,
    subs: &mut SubscriptionManager,
    library: &Mutex<LibraryService>,
) -> Option<String> {
    let Ok(msg) = serde_json::from_str::<WsMessage>(text) else {
        let err = WsMessage::error(String::new(), 400, "malformed JSON");
        return serde_json::to_string(&err).ok();
    };

    let Ok(command) = serde_json::from_value::<WsCommand>(msg.payload) else {
        let err = WsMessage::error(msg.id, 404, "unknown command");
        return serde_json::to_string(&err).ok();
    };

    let result = match command {
        WsCommand::Subscribe { event_types } => {
            subs.subscribe(&event_types);
            Ok(serde_json::json!({
                "subscribed": event_types,
                "count": subs.count(),
                "wildcard": subs.is_subscribed_all(),
            }))
        }
        WsCommand::Unsubscribe { event_types } => {
            subs.unsubscribe(&event_types);
            Ok(serde_json::json!({
                "unsubscribed": event_types,
                "remaining_count": subs.count(),
                "wildcard": subs.is_subscribed_all(),
            }))
        }
        WsCommand::PlaceBook {
            book_title,
            shelf_title,
        } => library
            .lock()
            .await
            .place_book(&book_title, &shelf_title)
            .map(|outcome| serde_json::to_value(outcome).unwrap_or_default()),
        WsCommand::MoveBook {
            book_title,
            source_title,
            destination_title,
        } => library
            .lock()
            .await
            .move_book(&book_title, &source_title, &destination_title)
            .map(|outcome| serde_json::to_value(outcome).unwrap_or_default()),
        WsCommand::GetShelf { title } => library
            .lock()
            .await
            .shelf(&title)
            .map(|shelf| serde_json::to_value(ShelfDto::from(shelf)).unwrap_or_default()),
    };

    let response = match result {
        Ok(payload) => WsMessage::new(msg.id, WsMessageType::Response, payload),
        Err(err) => WsMessage::error(msg.id, err.error_code(), &err.to_string()),
    };
    serde_json::to_string(&response).ok()
}
