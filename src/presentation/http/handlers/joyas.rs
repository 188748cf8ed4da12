//! Catalog route handlers: thin orchestration over the domain components.
//!
//! Each handler extracts raw query/path input, runs it through the validating
//! parsers, executes the repository queries, and maps outcomes to status codes.
//! Numeric parameters are carried as raw strings so validation happens in the
//! domain layer (with its error taxonomy) instead of inside the extractor.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, header},
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    config::Config,
    domain::{
        catalog::{
            filters::JoyaFilters,
            hateoas::shape,
            order_by::{JoyaColumn, OrderBy},
            pagination::{PageDefaults, PageSpec},
        },
        joya::entity::Joya,
    },
    presentation::http::{errors::AppError, state::AppState},
};

/// Raw query parameters for the paginated listing.
///
/// `limits` and `page` stay strings here: present-but-non-numeric values must
/// become a 400 with this service's error body, not an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    limits: Option<String>,
    page: Option<String>,
    order_by: Option<String>,
}

/// `GET /joyas` — paginated, sortable listing in HATEOAS shape.
///
/// The count and page queries are independent reads and run concurrently.
pub async fn list_joyas(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let defaults = PageDefaults {
        limit: state.config.catalog_default_limit,
        page: state.config.catalog_default_page,
        max_limit: state.config.catalog_max_limit,
    };
    let page = PageSpec::from_raw(params.limits.as_deref(), params.page.as_deref(), defaults)?;
    let order = OrderBy::parse(params.order_by.as_deref(), JoyaColumn::Id);

    let (stock_total, joyas) = tokio::join!(
        state.joya_repo.count_all(),
        state.joya_repo.list(order, page)
    );
    let stock_total = stock_total?;
    let joyas = joyas?;

    let base_url = request_base_url(&headers, &state.config);
    let listing = shape(&base_url, "joya", &joyas);
    tracing::debug!(
        total_joyas = listing.total_joyas,
        stock_total,
        "Joyas page fetched"
    );

    Ok(Json(json!({
        "totalJoyas": listing.total_joyas,
        "stockTotal": stock_total,
        "results": listing.results,
    })))
}

/// `GET /joyas/joya/{id}` — a single raw item.
///
/// The id arrives as a path string and is validated here so a non-numeric id
/// yields this route's documented 400 body.
pub async fn get_joya(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Joya>, AppError> {
    let id: i32 = id
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid or missing id parameter".to_string()))?;

    let joya = state
        .joya_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Joya not found".to_string()))?;

    Ok(Json(joya))
}

/// Raw query parameters for `/joyas/filtros`.
#[derive(Debug, Deserialize)]
pub struct FilterQuery {
    precio_min: Option<String>,
    precio_max: Option<String>,
    categoria: Option<String>,
    metal: Option<String>,
}

/// `GET /joyas/filtros` — all items matching the given predicates.
pub async fn filter_joyas(
    State(state): State<AppState>,
    Query(params): Query<FilterQuery>,
) -> Result<Json<Vec<Joya>>, AppError> {
    let filters = JoyaFilters::normalize(
        params.precio_min.as_deref(),
        params.precio_max.as_deref(),
        params.categoria.as_deref(),
        params.metal.as_deref(),
    )?;

    let joyas = state.joya_repo.filter(&filters).await?;
    Ok(Json(joyas))
}

/// Base URL for HATEOAS hrefs, reconstructed from the Host header with the
/// configured bind address as fallback.
fn request_base_url(headers: &HeaderMap, config: &Config) -> String {
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| format!("{}:{}", config.host, config.port));
    format!("http://{}/joyas", host)
}
