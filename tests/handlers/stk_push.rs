use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header::CONTENT_TYPE},
};
use lucie_pay::{
    app::{App, STK_PUSH_PATH},
    handlers::stk_push::STK_PUSH_LABEL,
    kopokopo::{GatewayError, MockPaymentGateway},
    layers::{gateway::PaymentGatewayLayer, sink::DiagnosticSinkLayer},
    models::StkPushResponse,
    sinks::MockDiagnosticSink,
};
use mockall::predicate;
use serde_json::json;
use tower::ServiceExt;

fn quiet_sink() -> MockDiagnosticSink {
    let mut mock_sink = MockDiagnosticSink::new();
    mock_sink.expect_payload().return_const(());
    mock_sink
}

fn app(mock_sink: MockDiagnosticSink, mock_gateway: MockPaymentGateway) -> Router {
    App::new()
        .router()
        .layer(DiagnosticSinkLayer(Arc::new(mock_sink)))
        .layer(PaymentGatewayLayer(Arc::new(mock_gateway)))
}

async fn push(app: Router, form: &'static str) -> (StatusCode, StkPushResponse) {
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(STK_PUSH_PATH)
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn success() {
    let mut mock_gateway = MockPaymentGateway::new();

    mock_gateway
        .expect_access_token()
        .times(1)
        .returning(|| Box::pin(async { Ok("tok-123".to_string()) }));

    mock_gateway
        .expect_initiate_stk_push()
        .withf(|token, request| {
            token.to_string() == "tok-123"
                && request.phone_number == "254712345678"
                && request.amount == "150.00"
        })
        .times(1)
        .returning(|_, _| Box::pin(async { Ok(json!({"data": {"id": "pay-1"}})) }));

    let mut mock_sink = MockDiagnosticSink::new();
    mock_sink
        .expect_payload()
        .with(
            predicate::eq(STK_PUSH_LABEL.to_string()),
            predicate::eq(json!({"phone": "254712345678", "amount": "150.00"})),
        )
        .times(1)
        .return_const(());

    let (status, body) = push(
        app(mock_sink, mock_gateway),
        "phone=0712345678&amount=150.00",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.success);
    assert_eq!(body.data.message, "STK Push sent successfully.");
    assert!(body.data.response.is_none());
}

#[tokio::test]
async fn error_access_token() {
    let mut mock_gateway = MockPaymentGateway::new();

    mock_gateway
        .expect_access_token()
        .times(1)
        .returning(|| Box::pin(async { Err(GatewayError::MissingToken) }));

    mock_gateway.expect_initiate_stk_push().times(0);

    let (status, body) = push(
        app(quiet_sink(), mock_gateway),
        "phone=0712345678&amount=150.00",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body.success);
    assert_eq!(body.data.message, "Authentication failed (no token).");
}

#[tokio::test]
async fn rejected_by_gateway() {
    let mut mock_gateway = MockPaymentGateway::new();

    mock_gateway
        .expect_access_token()
        .times(1)
        .returning(|| Box::pin(async { Ok("tok-123".to_string()) }));

    mock_gateway
        .expect_initiate_stk_push()
        .times(1)
        .returning(|_, _| {
            Box::pin(async { Ok(json!({"error_code": 400, "error_message": "Invalid till"})) })
        });

    let (status, body) = push(
        app(quiet_sink(), mock_gateway),
        "phone=0712345678&amount=150.00",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body.success);
    assert_eq!(body.data.message, "STK Push failed.");
    assert_eq!(
        body.data.response,
        Some(json!({"error_code": 400, "error_message": "Invalid till"}))
    );
}

#[tokio::test]
async fn error_initiate_stk_push() {
    let mut mock_gateway = MockPaymentGateway::new();

    mock_gateway
        .expect_access_token()
        .times(1)
        .returning(|| Box::pin(async { Ok("tok-123".to_string()) }));

    mock_gateway
        .expect_initiate_stk_push()
        .times(1)
        .returning(|_, _| Box::pin(async { Err(GatewayError::MissingToken) }));

    let (status, body) = push(
        app(quiet_sink(), mock_gateway),
        "phone=0712345678&amount=150.00",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body.success);
    assert_eq!(body.data.message, "STK Push failed.");
}

#[tokio::test]
async fn international_phone_and_missing_amount() {
    let mut mock_gateway = MockPaymentGateway::new();

    mock_gateway
        .expect_access_token()
        .times(1)
        .returning(|| Box::pin(async { Ok("tok-123".to_string()) }));

    mock_gateway
        .expect_initiate_stk_push()
        .withf(|_, request| request.phone_number == "254712345678" && request.amount == "0")
        .times(1)
        .returning(|_, _| Box::pin(async { Ok(json!({"data": {"id": "pay-2"}})) }));

    let (status, body) = push(app(quiet_sink(), mock_gateway), "phone=254712345678").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.success);
}

#[tokio::test]
async fn get_not_allowed() {
    let response = app(MockDiagnosticSink::new(), MockPaymentGateway::new())
        .oneshot(
            Request::builder()
                .uri(STK_PUSH_PATH)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
