use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::*,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::app_state::{AppState, SessionStore, SESSION_HEADER};
use crate::{
    application::LookupController,
    domain::{ports::geolocation::GeolocationClient, view::LookupView},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpServerConfig {
    pub port: u16,
}

pub struct HttpServer {
    router: Router,
    listener: net::TcpListener,
}

impl HttpServer {
    pub async fn new<C: GeolocationClient>(
        config: HttpServerConfig,
        client: Arc<C>,
    ) -> anyhow::Result<Self> {
        let router = router(client);

        let addr = SocketAddr::from(([0, 0, 0, 0, 0, 0, 0, 0], config.port));

        let listener = net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to listen on port {}", config.port))?;

        Ok(Self { router, listener })
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let addr = self
            .listener
            .local_addr()
            .context("failed to read listener address")?;
        tracing::info!("listening on {}", addr);
        axum::serve(self.listener, self.router)
            .await
            .context("received error from running server")?;
        Ok(())
    }
}

/// Builds the app. Each caller gets its own lookup session, keyed by the
/// `x-lookup-session` header; responses echo the id back in that header.
pub fn router<C: GeolocationClient>(client: Arc<C>) -> Router {
    let trace_layer =
        TraceLayer::new_for_http().make_span_with(|request: &axum::extract::Request<_>| {
            let uri = request.uri().to_string();
            tracing::info_span!("http_request", method = ?request.method(), uri)
        });

    let state = AppState {
        sessions: Arc::new(SessionStore::new(client)),
    };

    Router::new()
        .route("/health", get(health_route))
        .nest("/api", api_routes(state))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
}

fn api_routes<C: GeolocationClient>(state: AppState<C>) -> Router {
    Router::new()
        .route(
            "/lookup",
            get(current_lookup::<C>)
                .post(submit_lookup::<C>)
                .delete(clear_lookup::<C>),
        )
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub ip: String,
}

#[derive(Debug, Serialize)]
pub struct LookupResponse {
    pub address: Option<String>,
    pub state: LookupView,
}

type SessionResponse = (StatusCode, [(&'static str, String); 1], Json<LookupResponse>);

async fn health_route() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}

async fn current_lookup<C: GeolocationClient>(
    State(state): State<AppState<C>>,
    headers: HeaderMap,
) -> SessionResponse {
    let (session, controller) = open_session(&state, &headers).await;
    respond(StatusCode::OK, session, &controller).await
}

async fn submit_lookup<C: GeolocationClient>(
    State(state): State<AppState<C>>,
    headers: HeaderMap,
    Json(request): Json<SubmitRequest>,
) -> SessionResponse {
    let (session, controller) = open_session(&state, &headers).await;
    let status = match controller.submit(&request.ip).await {
        Ok(_) => StatusCode::OK,
        Err(e) => e.status_code(),
    };
    respond(status, session, &controller).await
}

async fn clear_lookup<C: GeolocationClient>(
    State(state): State<AppState<C>>,
    headers: HeaderMap,
) -> SessionResponse {
    let (session, controller) = open_session(&state, &headers).await;
    controller.clear().await;
    respond(StatusCode::OK, session, &controller).await
}

async fn open_session<C: GeolocationClient>(
    state: &AppState<C>,
    headers: &HeaderMap,
) -> (String, Arc<LookupController<C>>) {
    let id = headers
        .get(SESSION_HEADER)
        .and_then(|value| value.to_str().ok());
    state.sessions.get_or_create(id).await
}

async fn respond<C: GeolocationClient>(
    status: StatusCode,
    session: String,
    controller: &LookupController<C>,
) -> SessionResponse {
    let (address, lookup) = controller.snapshot().await;
    let body = LookupResponse {
        address,
        state: LookupView::from(&lookup),
    };
    (status, [(SESSION_HEADER, session)], Json(body))
}
