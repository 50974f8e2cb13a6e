//! WebSocket message types: envelope and commands.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Top-level WebSocket message envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WsMessage {
    /// Client-provided ID for requests; server-generated for events.
    pub id: String,
    /// Message type discriminator.
    #[serde(rename = "type")]
    pub msg_type: WsMessageType,
    /// ISO-8601 timestamp.
    pub timestamp: DateTime<Utc>,
    /// Variant-specific payload.
    pub payload: serde_json::Value,
}

impl WsMessage {
    /// Builds a server-side message stamped with the current time.
    #[must_use]
    pub fn new(id: String, msg_type: WsMessageType, payload: serde_json::Value) -> Self {
        Self {
            id,
            msg_type,
            timestamp: Utc::now(),
            payload,
        }
    }

    /// Builds an error message with a numeric code.
    #[must_use]
    pub fn error(id: String, code: u32, message: &str) -> Self {
        Self::new(
            id,
            WsMessageType::Error,
            serde_json::json!({ "code": code, "message": message }),
        )
    }
}

/// Discriminator for WebSocket message types.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WsMessageType {
    /// Client → Server command.
    Command,
    /// Server → Client response to a command.
    Response,
    /// Server → Client broadcast event.
    Event,
    /// Server → Client error.
    Error,
}

/// Commands that a client can send over WebSocket.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum WsCommand {
    /// Subscribe to events of the given types. Use `["*"]` for all.
    Subscribe {
        /// Event types such as `"book_placed"`.
        event_types: Vec<String>,
    },
    /// Unsubscribe from events of the given types.
    Unsubscribe {
        /// Event types to drop.
        event_types: Vec<String>,
    },
    /// Place a pooled book on a shelf.
    PlaceBook {
        /// Title of the pooled book.
        book_title: String,
        /// Destination shelf title.
        shelf_title: String,
    },
    /// Move a book between shelves.
    MoveBook {
        /// Title of the book to move.
        book_title: String,
        /// Source shelf title.
        source_title: String,
        /// Destination shelf title.
        destination_title: String,
    },
    /// Read a shelf's books.
    GetShelf {
        /// Shelf title.
        title: String,
    },
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn parses_move_command() {
        let json = serde_json::json!({
            "command": "move_book",
            "book_title": "Dune",
            "source_title": "A",
            "destination_title": "B"
        });
        let Ok(WsCommand::MoveBook { destination_title, .. }) =
            serde_json::from_value::<WsCommand>(json)
        else {
            panic!("expected move_book command");
        };
        assert_eq!(destination_title, "B");
    }

    #[test]
    fn rejects_unknown_command() {
        let json = serde_json::json!({ "command": "swap" });
        assert!(serde_json::from_value::<WsCommand>(json).is_err());
    }
}
