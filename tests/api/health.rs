use crate::helpers::TestApp;

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn_app().await;

    let response = app.get("/health").await;

    assert!(response.status().is_success());
    assert_eq!("healthy".to_string(), response.text().await.unwrap());
}

#[tokio::test]
async fn metrics_are_exposed() {
    let app = TestApp::spawn_app().await;

    let response = app.get("/metrics").await;

    assert!(response.status().is_success());
}
