use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn client_receives_the_state_on_connect() {
    let app = TestApp::spawn_app().await;
    let mut client = app.open_websocket().await;

    let message = client.receive_json().await;

    assert_eq!(message["type"], "gameState");
    assert_eq!(message["snapshot"]["phase"], "CategorySelect");
    assert_eq!(message["cues"], json!([]));
}

#[tokio::test]
async fn commands_sent_over_the_websocket_are_broadcast() {
    let app = TestApp::spawn_app().await;
    let mut sender = app.open_websocket().await;
    let mut watcher = app.open_websocket().await;
    sender.receive_json().await;
    watcher.receive_json().await;

    sender
        .send_command(json!({"type": "selectCategory", "categoryId": "sports"}))
        .await;

    for client in [&mut sender, &mut watcher] {
        let message = client.receive_json().await;
        assert_eq!(message["type"], "gameState");
        assert_eq!(message["snapshot"]["phase"], "Idle");
        assert_eq!(message["snapshot"]["selectedCategory"]["id"], "sports");
    }
}

#[tokio::test]
async fn rejected_command_is_reported_to_the_sender_only() {
    let app = TestApp::spawn_app().await;
    let mut client = app.open_websocket().await;
    client.receive_json().await;

    client.send_command(json!({"type": "gotIt"})).await;

    let message = client.receive_json().await;
    assert_eq!(message["type"], "error");
    assert_eq!(message["error"]["type"], "INVALID_COMMAND");

    // The connection stays usable after a rejection
    client.send_text("ping".to_string()).await;
    assert_eq!(client.receive_text().await, "pong");
}

#[tokio::test]
async fn unprocessable_message_keeps_the_connection_open() {
    let app = TestApp::spawn_app().await;
    let mut client = app.open_websocket().await;
    client.receive_json().await;

    client.send_text("invalid".to_string()).await;

    let message = client.receive_json().await;
    assert_eq!(message["type"], "error");
    assert_eq!(message["error"]["type"], "UNPROCESSABLE_MESSAGE");

    client.send_command(json!({"type": "selectCategory", "categoryId": "jobs"})).await;
    let message = client.receive_json().await;
    assert_eq!(message["snapshot"]["phase"], "Idle");
}
