//! End-to-end tests: boot the router on an ephemeral port and drive it over
//! HTTP and WebSocket.

#![allow(clippy::panic)]

use std::net::SocketAddr;
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use serde_json::{Value, json};
use tokio_tungstenite::tungstenite::Message;

use shelf_gateway::app_state::AppState;
use shelf_gateway::config::LibraryOptions;
use shelf_gateway::{build_app, build_library};

async fn spawn_app() -> SocketAddr {
    let app = build_app(AppState::new(build_library(
        100,
        100,
        LibraryOptions::default(),
    )));
    let Ok(listener) = tokio::net::TcpListener::bind("127.0.0.1:0").await else {
        panic!("failed to bind ephemeral port");
    };
    let Ok(addr) = listener.local_addr() else {
        panic!("listener has no local address");
    };
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    addr
}

struct Api {
    client: reqwest::Client,
    base: String,
}

impl Api {
    fn new(addr: SocketAddr) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: format!("http://{addr}"),
        }
    }

    async fn post(&self, path: &str, body: Value) -> (u16, Value) {
        let Ok(resp) = self
            .client
            .post(format!("{}{path}", self.base))
            .json(&body)
            .send()
            .await
        else {
            panic!("POST {path} failed");
        };
        let status = resp.status().as_u16();
        (status, resp.json().await.unwrap_or(Value::Null))
    }

    async fn get(&self, path: &str) -> (u16, Value) {
        let Ok(resp) = self.client.get(format!("{}{path}", self.base)).send().await else {
            panic!("GET {path} failed");
        };
        let status = resp.status().as_u16();
        (status, resp.json().await.unwrap_or(Value::Null))
    }

    async fn get_text(&self, path: &str) -> String {
        let Ok(resp) = self.client.get(format!("{}{path}", self.base)).send().await else {
            panic!("GET {path} failed");
        };
        resp.text().await.unwrap_or_default()
    }

    async fn delete(&self, path: &str) -> u16 {
        let Ok(resp) = self
            .client
            .delete(format!("{}{path}", self.base))
            .send()
            .await
        else {
            panic!("DELETE {path} failed");
        };
        resp.status().as_u16()
    }
}

fn shelf_titles(shelf: &Value) -> Vec<String> {
    shelf["books"]
        .as_array()
        .map(|books| {
            books
                .iter()
                .filter_map(|b| b["title"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[tokio::test]
async fn health_reports_catalog_sizes() {
    let api = Api::new(spawn_app().await);
    let (status, body) = api.get("/health").await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["shelves"], 0);
}

#[tokio::test]
async fn place_and_move_book_over_http() {
    let api = Api::new(spawn_app().await);

    assert_eq!(api.post("/api/v1/shelves", json!({"title": "A"})).await.0, 201);
    assert_eq!(api.post("/api/v1/shelves", json!({"title": "B"})).await.0, 201);
    let (status, _) = api
        .post(
            "/api/v1/books",
            json!({"title": "Dune", "author": "Herbert", "page_count": 412}),
        )
        .await;
    assert_eq!(status, 201);

    let (status, placed) = api
        .post(
            "/api/v1/books/place",
            json!({"book_title": "Dune", "shelf_title": "A"}),
        )
        .await;
    assert_eq!(status, 200);
    assert_eq!(placed["transfer"], "from_pool");

    let (status, moved) = api
        .post(
            "/api/v1/books/move",
            json!({"book_title": "Dune", "source_title": "A", "destination_title": "B"}),
        )
        .await;
    assert_eq!(status, 200);
    assert_eq!(moved["transfer"], "shelf_to_shelf");
    assert_eq!(
        moved["message"],
        "Book \"Dune\" by Herbert was replaced on \"B\" shelf"
    );

    let (_, a) = api.get("/api/v1/shelves/A").await;
    let (_, b) = api.get("/api/v1/shelves/B").await;
    assert!(shelf_titles(&a).is_empty());
    assert_eq!(shelf_titles(&b), vec!["Dune".to_string()]);

    let (_, pool) = api.get("/api/v1/books/pool").await;
    assert_eq!(pool["count"], 0);
}

#[tokio::test]
async fn errors_carry_codes_and_leave_state_alone() {
    let api = Api::new(spawn_app().await);
    api.post("/api/v1/shelves", json!({"title": "A"})).await;
    api.post(
        "/api/v1/books",
        json!({"title": "Dune", "author": "Herbert", "page_count": 412}),
    )
    .await;

    let (status, body) = api
        .post(
            "/api/v1/books/place",
            json!({"book_title": "Emma", "shelf_title": "A"}),
        )
        .await;
    assert_eq!(status, 404);
    assert_eq!(body["error"]["code"], 2003);

    let (status, body) = api
        .post(
            "/api/v1/books/move",
            json!({"book_title": "Dune", "source_title": "A", "destination_title": "Z"}),
        )
        .await;
    assert_eq!(status, 404);
    assert_eq!(body["error"]["code"], 2002);

    let (status, _) = api.post("/api/v1/shelves", json!({"title": "A"})).await;
    assert_eq!(status, 409);

    let (_, pool) = api.get("/api/v1/books/pool").await;
    assert_eq!(pool["count"], 1);
}

#[tokio::test]
async fn subscribed_reader_inbox_over_http() {
    let api = Api::new(spawn_app().await);
    assert_eq!(api.post("/api/v1/readers", json!({"name": "R"})).await.0, 201);

    let (status, sub) = api.post("/api/v1/readers/R/subscription", json!({})).await;
    assert_eq!(status, 200);
    assert_eq!(sub["changed"], true);

    api.post("/api/v1/shelves", json!({"title": "Fiction"})).await;
    assert_eq!(api.delete("/api/v1/readers/R/subscription").await, 200);
    api.post("/api/v1/shelves", json!({"title": "History"})).await;

    let (_, reader) = api.get("/api/v1/readers/R").await;
    assert_eq!(reader["subscribed"], false);
    assert_eq!(reader["inbox"], json!(["Added new shelf: Fiction"]));

    let (status, _) = api.post("/api/v1/readers/ghost/subscription", json!({})).await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn delete_shelf_returns_books_to_pool() {
    let api = Api::new(spawn_app().await);
    api.post("/api/v1/shelves", json!({"title": "A"})).await;
    api.post(
        "/api/v1/books",
        json!({"title": "Dune", "author": "Herbert", "page_count": 412}),
    )
    .await;
    api.post(
        "/api/v1/books/place",
        json!({"book_title": "Dune", "shelf_title": "A"}),
    )
    .await;

    assert_eq!(api.delete("/api/v1/shelves/A").await, 204);
    assert_eq!(api.delete("/api/v1/shelves/A").await, 404);
    let (_, pool) = api.get("/api/v1/books/pool").await;
    assert_eq!(pool["count"], 1);
}

#[tokio::test]
async fn text_rendering() {
    let api = Api::new(spawn_app().await);
    api.post("/api/v1/shelves", json!({"title": "A"})).await;
    api.post("/api/v1/readers", json!({"name": "R"})).await;

    assert_eq!(
        api.get_text("/api/v1/shelves/A?format=text").await,
        "Shelf \"A\":\n  (empty)\n"
    );
    assert_eq!(
        api.get_text("/report").await,
        "Shelf \"A\":\n  (empty)\nR (not subscribed)\n"
    );
}

#[tokio::test]
async fn websocket_streams_subscribed_events() {
    let addr = spawn_app().await;
    let api = Api::new(addr);

    let Ok((mut ws, _)) = tokio_tungstenite::connect_async(format!("ws://{addr}/ws")).await else {
        panic!("websocket handshake failed");
    };

    let subscribe = json!({
        "id": "sub-1",
        "type": "command",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "payload": {"command": "subscribe", "event_types": ["book_placed"]}
    });
    let Ok(()) = ws.send(Message::text(subscribe.to_string())).await else {
        panic!("failed to send subscribe");
    };
    let ack = next_json(&mut ws).await;
    assert_eq!(ack["type"], "response");
    assert_eq!(ack["id"], "sub-1");

    api.post("/api/v1/shelves", json!({"title": "A"})).await;
    api.post(
        "/api/v1/books",
        json!({"title": "Dune", "author": "Herbert", "page_count": 412}),
    )
    .await;
    api.post(
        "/api/v1/books/place",
        json!({"book_title": "Dune", "shelf_title": "A"}),
    )
    .await;

    let event = next_json(&mut ws).await;
    assert_eq!(event["type"], "event");
    assert_eq!(event["payload"]["event_type"], "book_placed");
    assert_eq!(event["payload"]["shelf"], "A");
}

#[tokio::test]
async fn websocket_commands_drive_the_catalog() {
    let addr = spawn_app().await;
    let api = Api::new(addr);
    api.post("/api/v1/shelves", json!({"title": "A"})).await;
    api.post("/api/v1/shelves", json!({"title": "B"})).await;
    api.post(
        "/api/v1/books",
        json!({"title": "Dune", "author": "Herbert", "page_count": 412}),
    )
    .await;

    let Ok((mut ws, _)) = tokio_tungstenite::connect_async(format!("ws://{addr}/ws")).await else {
        panic!("websocket handshake failed");
    };

    let placed = send_command(
        &mut ws,
        "place-1",
        json!({"command": "place_book", "book_title": "Dune", "shelf_title": "A"}),
    )
    .await;
    assert_eq!(placed["type"], "response");
    assert_eq!(placed["id"], "place-1");
    assert_eq!(placed["payload"]["transfer"], "from_pool");
    assert_eq!(placed["payload"]["shelf"], "A");

    let moved = send_command(
        &mut ws,
        "move-1",
        json!({
            "command": "move_book",
            "book_title": "Dune",
            "source_title": "A",
            "destination_title": "B"
        }),
    )
    .await;
    assert_eq!(moved["type"], "response");
    assert_eq!(moved["id"], "move-1");
    assert_eq!(moved["payload"]["transfer"], "shelf_to_shelf");
    assert_eq!(moved["payload"]["shelf"], "B");
    assert_eq!(
        moved["payload"]["message"],
        "Book \"Dune\" by Herbert was replaced on \"B\" shelf"
    );

    let shelf = send_command(&mut ws, "get-1", json!({"command": "get_shelf", "title": "B"})).await;
    assert_eq!(shelf_titles(&shelf["payload"]), vec!["Dune"]);

    let (_, source) = api.get("/api/v1/shelves/A").await;
    assert!(shelf_titles(&source).is_empty());
    let (_, destination) = api.get("/api/v1/shelves/B").await;
    assert_eq!(shelf_titles(&destination), vec!["Dune"]);

    let missing = send_command(
        &mut ws,
        "move-2",
        json!({
            "command": "move_book",
            "book_title": "Dune",
            "source_title": "A",
            "destination_title": "B"
        }),
    )
    .await;
    assert_eq!(missing["type"], "error");
    assert_eq!(missing["id"], "move-2");
    assert_eq!(missing["payload"]["code"], 2003);
}

async fn send_command<S>(ws: &mut S, id: &str, payload: Value) -> Value
where
    S: futures_util::Sink<Message, Error = tokio_tungstenite::tungstenite::Error>
        + futures_util::Stream<Item = Result<Message, tokio_tungstenite::tungstenite::Error>>
        + Unpin,
{
    let command = json!({
        "id": id,
        "type": "command",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "payload": payload,
    });
    let Ok(()) = ws.send(Message::text(command.to_string())).await else {
        panic!("failed to send {id}");
    };
    next_json(ws).await
}

async fn next_json<S>(ws: &mut S) -> Value
where
    S: futures_util::Stream<Item = Result<Message, tokio_tungstenite::tungstenite::Error>> + Unpin,
{
    let Ok(Some(Ok(msg))) = tokio::time::timeout(Duration::from_secs(5), ws.next()).await else {
        panic!("no websocket message within timeout");
    };
    let Ok(text) = msg.into_text() else {
        panic!("expected a text frame");
    };
    serde_json::from_str(text.as_str()).unwrap_or(Value::Null)
}
