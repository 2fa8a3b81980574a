use std::time::Duration;

use reqwest::StatusCode;
use serde_json::{json, Value};

use crate::helpers::{ErrorResponse, TestApp};

#[tokio::test]
async fn categories_are_listed_from_the_catalog_file() {
    let app = TestApp::spawn_app().await;

    let response = app.get("/categories").await;

    assert_eq!(response.status(), StatusCode::OK);
    let categories: Vec<Value> = response.json().await.unwrap();
    assert_eq!(categories.len(), 6);
    assert_eq!(categories[0]["id"], "animals");
    assert_eq!(categories[0]["displayName"], "Animals");
    assert_eq!(categories[0]["wordCount"], 16);
}

#[tokio::test]
async fn new_game_waits_for_a_category() {
    let app = TestApp::spawn_app().await;

    let response = app.get("/game").await;

    assert_eq!(response.status(), StatusCode::OK);
    let snapshot: Value = response.json().await.unwrap();
    assert_eq!(snapshot["phase"], "CategorySelect");
    assert_eq!(snapshot["currentWord"], Value::Null);
    assert_eq!(snapshot["team1Score"], 0);
    assert_eq!(snapshot["team2Score"], 0);
}

#[tokio::test]
async fn starting_a_round_draws_a_word() {
    let app = TestApp::spawn_app().await;

    let response = app.start_round("animals").await;

    assert_eq!(response.cues, vec!["roundStart".to_string()]);
    assert_eq!(response.snapshot["phase"], "Playing");
    assert_eq!(response.snapshot["roundTimeLeft"], 60);
    assert_eq!(response.snapshot["wordTimeLeft"], 15);
    assert_eq!(response.snapshot["currentTeam"], 1);
    assert!(response.snapshot["currentWord"].is_string());
}

#[tokio::test]
async fn correct_guess_hands_the_turn_to_the_other_team() {
    let app = TestApp::spawn_app().await;
    let started = app.start_round("food").await;
    let first_word = started.snapshot["currentWord"].clone();

    let response = app.execute(json!({"type": "gotIt"})).await;

    assert_eq!(response.cues, vec!["correct".to_string()]);
    assert_eq!(response.snapshot["currentTeam"], 2);
    assert_eq!(response.snapshot["roundStats"]["team1Correct"], json!([first_word]));
    assert_ne!(response.snapshot["currentWord"], first_word);
}

#[tokio::test]
async fn unknown_category_is_not_found() {
    let app = TestApp::spawn_app().await;

    let response = app
        .post_command(json!({"type": "selectCategory", "categoryId": "dinosaurs"}))
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: ErrorResponse = response.json().await.unwrap();
    assert_eq!(error.r#type, "UNKNOWN_CATEGORY");
    assert!(!error.title.is_empty());
    assert!(error.detail.contains("dinosaurs"));
}

#[tokio::test]
async fn command_outside_its_phase_is_a_conflict() {
    let app = TestApp::spawn_app().await;

    let response = app.post_command(json!({"type": "skip"})).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let error: ErrorResponse = response.json().await.unwrap();
    assert_eq!(error.r#type, "INVALID_COMMAND");

    let snapshot: Value = app.get("/game").await.json().await.unwrap();
    assert_eq!(snapshot["phase"], "CategorySelect");
}

#[tokio::test]
async fn malformed_command_is_a_bad_request() {
    let app = TestApp::spawn_app().await;

    let response = app.post_raw_command("not a command".to_string()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = response.json().await.unwrap();
    assert_eq!(error.r#type, "UNPROCESSABLE_MESSAGE");
}

#[tokio::test]
async fn round_expires_and_scores_are_settled() {
    let app = TestApp::spawn_app_with(|config| {
        config.game.round_duration_seconds = 1;
        config.game.heartbeat_millis = 20;
    })
    .await;
    app.start_round("animals").await;

    let mut snapshot: Value = Value::Null;
    for _ in 0..50 {
        tokio::time::sleep(Duration::from_millis(20)).await;
        snapshot = app.get("/game").await.json().await.unwrap();
        if snapshot["phase"] == "RoundOver" {
            break;
        }
    }
    assert_eq!(snapshot["phase"], "RoundOver");
    assert_eq!(snapshot["losingTeam"], 1);
    assert_eq!(snapshot["currentWord"], Value::Null);

    let stats = app.execute(json!({"type": "continueToStats"})).await;
    assert_eq!(stats.snapshot["phase"], "Stats");
    assert_eq!(stats.snapshot["team1Score"], 1);

    app.execute(json!({"type": "continueToSteal"})).await;
    let scoreboard = app
        .execute(json!({"type": "stealDecision", "didSteal": true}))
        .await;
    assert_eq!(scoreboard.snapshot["phase"], "Scoreboard");
    assert_eq!(scoreboard.snapshot["team1Score"], 1);
    assert_eq!(scoreboard.snapshot["team2Score"], 2);

    let adjusted = app
        .execute(json!({"type": "adjustScore", "team": 2, "delta": -1}))
        .await;
    assert_eq!(adjusted.snapshot["team2Score"], 1);

    let next = app.execute(json!({"type": "nextRound"})).await;
    assert_eq!(next.snapshot["phase"], "CategorySelect");
    assert_eq!(next.snapshot["team1Score"], 1);
    assert_eq!(next.snapshot["team2Score"], 1);
}
