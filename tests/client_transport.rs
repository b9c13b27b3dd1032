use httpmock::Method::POST;
use httpmock::MockServer;

use portfolio_chat::client::transport::{ChatTransport, HttpTransport, TransportError};
use portfolio_chat::client::widget::{ChatWidget, WidgetState};

#[tokio::test]
async fn http_transport_posts_message_and_reads_response() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/chat")
            .json_body(serde_json::json!({ "message": "hi" }));
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"response":"hey there!"}"#);
    });

    let transport = HttpTransport::new(server.url("/api/chat"));
    let reply = transport.send("hi").await.unwrap();
    mock.assert_async().await;
    assert_eq!(reply, "hey there!");
}

#[tokio::test]
async fn server_error_becomes_status_error() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/chat");
        then.status(500)
            .header("content-type", "application/json")
            .body(r#"{"error":"Failed to get response"}"#);
    });

    let transport = HttpTransport::new(server.url("/api/chat"));
    let err = transport.send("hi").await.unwrap_err();
    assert!(matches!(err, TransportError::Status(500)));
}

#[tokio::test]
async fn widget_falls_back_when_proxy_is_down() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/chat");
        then.status(502);
    });

    let transport = HttpTransport::new(server.url("/api/chat"));
    let mut widget = ChatWidget::new();
    widget.send(&transport, "any fun hobbies?").await.unwrap();
    assert_eq!(widget.state(), WidgetState::FallbackRendering);
    while widget.step() {}
    assert_eq!(widget.state(), WidgetState::Idle);
    assert!(widget
        .transcript()
        .last()
        .unwrap()
        .text
        .starts_with("When I'm not debugging models"));
}
