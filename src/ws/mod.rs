//! WebSocket layer: connection handling, message routing, subscriptions.
//!
//! The WebSocket endpoint at `/ws` streams catalog events filtered by
//! event type and accepts placement and movement commands.

pub mod connection;
pub mod handler;
pub mod messages;
pub mod subscription;
