use crate::engine::PageEngine;
use crate::metrics::gather_metrics;
use crate::model::PageResponse;
use crate::pagination::build_links;
use crate::render::render_page;
use crate::store::RecordStore;
use axum::{
    extract::{Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{error, info};

struct AppState<S> {
    engine: Arc<PageEngine<S>>,
    query_timeout: Option<Duration>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
            query_timeout: self.query_timeout,
        }
    }
}

impl<S> AppState<S> {
    fn deadline(&self) -> Option<Instant> {
        self.query_timeout.map(|timeout| Instant::now() + timeout)
    }
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    page: Option<String>,
}

impl PageQuery {
    /// Missing or unparsable values fall back to page 1.
    fn page_number(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(1)
    }
}

pub fn create_router<S>(engine: Arc<PageEngine<S>>, query_timeout: Option<Duration>) -> Router
where
    S: RecordStore + 'static,
{
    let state = AppState {
        engine,
        query_timeout,
    };

    Router::new()
        .route("/data", get(get_data_html::<S>))
        .route("/api/v1/data", get(get_data_json::<S>))
        .route("/ping", get(ping))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
        .layer(middleware::from_fn(log_request))
}

async fn get_data_html<S: RecordStore + 'static>(
    State(state): State<AppState<S>>,
    Query(params): Query<PageQuery>,
) -> Result<Html<String>, AppError> {
    let page = state
        .engine
        .fetch_page(params.page_number(), state.deadline())
        .await?;
    let links = build_links(page.total_pages);

    Ok(Html(render_page(&page, &links)))
}

async fn get_data_json<S: RecordStore + 'static>(
    State(state): State<AppState<S>>,
    Query(params): Query<PageQuery>,
) -> Result<Json<PageResponse>, AppError> {
    let page = state
        .engine
        .fetch_page(params.page_number(), state.deadline())
        .await?;
    let links = build_links(page.total_pages);

    Ok(Json(PageResponse { page, links }))
}

async fn ping() -> &'static str {
    "GET OK"
}

async fn metrics_handler() -> Result<String, AppError> {
    Ok(gather_metrics()?)
}

async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(req).await;

    info!(
        "{} {} {} {:.3}s",
        method,
        path,
        response.status().as_u16(),
        start.elapsed().as_secs_f64()
    );
    response
}

struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("API error: {:#}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error",
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<&str>) -> PageQuery {
        PageQuery {
            page: page.map(str::to_string),
        }
    }

    #[test]
    fn test_page_number_parsing() {
        assert_eq!(query(None).page_number(), 1);
        assert_eq!(query(Some("")).page_number(), 1);
        assert_eq!(query(Some("abc")).page_number(), 1);
        assert_eq!(query(Some("4")).page_number(), 4);
        assert_eq!(query(Some(" 12 ")).page_number(), 12);
        assert_eq!(query(Some("-3")).page_number(), -3);
    }

    #[test]
    fn test_app_error_is_generic() {
        let response =
            AppError::from(crate::errors::Error::DeadlineExceeded).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
