//! Movie routes
//!
//! Each route is a fixed 1-or-2-step pipeline: optionally resolve the
//! caller's query to an upstream identifier, then fetch the resource for it.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use serde_json::{Value, json};

use super::ApiError;
use crate::domain::DomainError;
use crate::infrastructure::AppState;

#[derive(Debug, Deserialize)]
pub struct MovieQuery {
    pub query: Option<String>,
}

fn require_query(params: MovieQuery) -> Result<String, DomainError> {
    match params.query {
        Some(q) if !q.trim().is_empty() => Ok(q),
        _ => Err(DomainError::Validation(
            "missing required parameter: query".to_string(),
        )),
    }
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Upstream reachable and credential accepted"),
        (status = 502, description = "Upstream unreachable")
    )
)]
pub async fn upstream_diagnostic(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    state.catalog.check_upstream().await?;
    Ok(Json(json!({
        "success": "ok",
        "data": { "upstream": "reachable" }
    })))
}

#[utoipa::path(
    get,
    path = "/movies/popular",
    responses(
        (status = 200, description = "First page of popular movies")
    )
)]
pub async fn popular(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let movies = state.catalog.popular().await?;
    Ok(Json(json!({
        "success": "ok",
        "data": { "results": movies }
    })))
}

#[utoipa::path(
    get,
    path = "/movies/search",
    params(
        ("query" = String, Query, description = "Movie title to search for")
    ),
    responses(
        (status = 200, description = "Top search matches"),
        (status = 400, description = "Missing query parameter")
    )
)]
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<MovieQuery>,
) -> Result<Json<Value>, ApiError> {
    let query = require_query(params)?;
    let hits = state.catalog.search_movies(&query).await?;
    Ok(Json(json!({
        "success": "ok",
        "data": { "results": hits }
    })))
}

#[utoipa::path(
    get,
    path = "/movies",
    params(
        ("query" = String, Query, description = "Movie title")
    ),
    responses(
        (status = 200, description = "Details of the first movie matching the title"),
        (status = 400, description = "Missing query parameter"),
        (status = 404, description = "No movie matched the title")
    )
)]
pub async fn details_by_title(
    State(state): State<AppState>,
    Query(params): Query<MovieQuery>,
) -> Result<Json<Value>, ApiError> {
    let query = require_query(params)?;
    let id = state.catalog.resolve_movie(&query).await?;
    let details = state.catalog.movie_details(id).await?;
    Ok(Json(json!({
        "success": "ok",
        "data": details
    })))
}

#[utoipa::path(
    get,
    path = "/movies/now-playing",
    responses(
        (status = 200, description = "Movies currently in theaters")
    )
)]
pub async fn now_playing(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let movies = state.catalog.now_playing().await?;
    Ok(Json(json!({
        "success": "ok",
        "data": { "results": movies }
    })))
}

#[utoipa::path(
    get,
    path = "/movies/genre",
    params(
        ("query" = String, Query, description = "Genre name, matched exactly")
    ),
    responses(
        (status = 200, description = "Movies in the given genre"),
        (status = 400, description = "Missing query parameter"),
        (status = 404, description = "No genre with that name")
    )
)]
pub async fn by_genre(
    State(state): State<AppState>,
    Query(params): Query<MovieQuery>,
) -> Result<Json<Value>, ApiError> {
    let query = require_query(params)?;
    let genre = state.catalog.resolve_genre(&query).await?;
    let movies = state.catalog.movies_by_genre(genre).await?;
    Ok(Json(json!({
        "success": "ok",
        "data": { "results": movies }
    })))
}

#[utoipa::path(
    get,
    path = "/movies/credits",
    params(
        ("query" = String, Query, description = "Movie title")
    ),
    responses(
        (status = 200, description = "Cast and crew of the first movie matching the title"),
        (status = 400, description = "Missing query parameter"),
        (status = 404, description = "No movie matched the title")
    )
)]
pub async fn credits_by_title(
    State(state): State<AppState>,
    Query(params): Query<MovieQuery>,
) -> Result<Json<Value>, ApiError> {
    let query = require_query(params)?;
    let id = state.catalog.resolve_movie(&query).await?;
    let credits = state.catalog.movie_credits(id).await?;
    Ok(Json(json!({
        "success": "ok",
        "data": credits
    })))
}
