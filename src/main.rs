use std::time::Duration;

use axum::{
    body::Body,
    extract::Request,
    http::Response,
};
use lucie_pay::{
    app::{App, RECEIVE_DATA_PATH},
    config::ServerConfig,
    headers::sensitive_headers,
    layers::{gateway::PaymentGatewayLayer, sink::DiagnosticSinkLayer},
    utils::get_request_id,
};
use time::UtcOffset;
use tokio::net::TcpListener;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    sensitive_headers::SetSensitiveRequestHeadersLayer,
    trace::TraceLayer,
};
use tracing::{Span, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Use UTC timestamps
    let offset = UtcOffset::UTC;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .flatten_event(true)
                .with_timer(fmt::time::OffsetTime::new(
                    offset,
                    time::format_description::well_known::Rfc3339,
                ))
                .with_level(true)
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false),
        )
        .with(EnvFilter::from_default_env())
        .try_init()?;

    let settings = ServerConfig::load()?;
    info!(
        msg = "Loaded configuration",
        addr = %settings.server.addr,
        sink = ?settings.diagnostics.sink,
        kopokopo = ?settings.kopokopo
    );

    let app = App::new()
        .router()
        .layer(DiagnosticSinkLayer::from_kind(settings.diagnostics.sink))
        .layer(PaymentGatewayLayer::kopokopo(settings.kopokopo.clone())?)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .on_request(|req: &Request<Body>, _span: &Span| {
                    let headers = req
                        .headers()
                        .iter()
                        .filter(|(k, _)| k.as_str() != "x-request-id")
                        .map(|(k, v)| {
                            let val = if v.is_sensitive() {
                                "******"
                            } else {
                                v.to_str().unwrap_or("<non-utf8>")
                            };
                            format!("{}: {}", k.as_str(), val)
                        })
                        .collect::<Vec<_>>()
                        .join("; ");

                    info!(
                        msg = "Request initiated",
                        req_id = %get_request_id(req.extensions()),
                        method = %req.method(),
                        uri = %req.uri(),
                        headers = %headers
                    )
                })
                .on_response(|res: &Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        msg = "Request processed",
                        req_id = %get_request_id(res.extensions()),
                        status = %res.status().as_u16(),
                        latency = ?latency
                    )
                }),
        )
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid::default()))
        .layer(SetSensitiveRequestHeadersLayer::new(sensitive_headers()));

    let listener = TcpListener::bind(settings.server.addr.as_str()).await?;

    info!(
        msg = "Starting server",
        addr = %listener.local_addr()?,
        path = RECEIVE_DATA_PATH
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!(msg = "Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(msg = "Failed to listen for Ctrl+C", error = %err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                tracing::warn!(msg = "Failed to install SIGTERM handler", error = %err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!(msg = "Signal received, starting graceful shutdown");
}
