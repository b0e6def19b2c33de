//! TMDB-compatible upstream integration
//!
//! Implements the catalog contract against the movie metadata API: one
//! reqwest client shared across requests, bearer credential on every call,
//! responses curated down to the fields the local routes expose.

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::domain::{
    DomainError, GenreId, GenreMovie, MovieCatalog, MovieCredits, MovieDetails, MovieId,
    MovieSummary, NowPlayingEntry, SearchHit,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Paged upstream endpoints are always requested with these values;
/// callers cannot page through results.
const LANGUAGE: &str = "en-US";
const PAGE: &str = "1";

const SEARCH_RESULT_LIMIT: usize = 5;
const NOW_PLAYING_LIMIT: usize = 10;
const GENRE_RESULT_LIMIT: usize = 10;
const CREW_LIMIT: usize = 3;

/// Client for the upstream movie metadata API
pub struct TmdbClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

#[derive(Debug, Deserialize)]
struct PagedResults<T> {
    results: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct GenreList {
    genres: Vec<Genre>,
}

#[derive(Debug, Deserialize)]
struct Genre {
    id: i64,
    name: String,
}

impl TmdbClient {
    /// Create a new client for the given upstream.
    ///
    /// Returns an error if the credential is empty or the HTTP client
    /// cannot be built.
    pub fn new(base_url: &str, token: &str) -> Result<Self, DomainError> {
        if token.trim().is_empty() {
            return Err(DomainError::Internal(
                "upstream API token is empty".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| DomainError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, DomainError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "upstream request");

        let resp = self
            .client
            .get(&url)
            .query(params)
            .bearer_auth(&self.token)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "upstream returned an error status");
            return Err(DomainError::UpstreamStatus(status.as_u16()));
        }

        resp.json::<T>().await.map_err(|e| {
            DomainError::Upstream(format!("Failed to decode upstream response: {}", e))
        })
    }
}

#[async_trait]
impl MovieCatalog for TmdbClient {
    async fn check_upstream(&self) -> Result<(), DomainError> {
        // Body is irrelevant; a 2xx means the credential was accepted.
        let _: serde_json::Value = self.get_json("/authentication", &[]).await?;
        Ok(())
    }

    async fn resolve_movie(&self, query: &str) -> Result<MovieId, DomainError> {
        let page: PagedResults<SearchHit> = self
            .get_json(
                "/search/movie",
                &[("query", query), ("language", LANGUAGE), ("page", PAGE)],
            )
            .await?;

        page.results
            .first()
            .map(|hit| MovieId(hit.id))
            .ok_or(DomainError::NotFound)
    }

    async fn resolve_genre(&self, name: &str) -> Result<GenreId, DomainError> {
        let list: GenreList = self
            .get_json("/genre/movie/list", &[("language", LANGUAGE)])
            .await?;

        list.genres
            .iter()
            .find(|genre| genre.name == name)
            .map(|genre| GenreId(genre.id))
            .ok_or(DomainError::NotFound)
    }

    async fn popular(&self) -> Result<Vec<MovieSummary>, DomainError> {
        let page: PagedResults<MovieSummary> = self
            .get_json("/movie/popular", &[("language", LANGUAGE), ("page", PAGE)])
            .await?;
        Ok(page.results)
    }

    async fn search_movies(&self, query: &str) -> Result<Vec<SearchHit>, DomainError> {
        let mut page: PagedResults<SearchHit> = self
            .get_json(
                "/search/movie",
                &[("query", query), ("language", LANGUAGE), ("page", PAGE)],
            )
            .await?;

        page.results.truncate(SEARCH_RESULT_LIMIT);
        Ok(page.results)
    }

    async fn movie_details(&self, id: MovieId) -> Result<MovieDetails, DomainError> {
        self.get_json(&format!("/movie/{}", id.0), &[("language", LANGUAGE)])
            .await
    }

    async fn now_playing(&self) -> Result<Vec<NowPlayingEntry>, DomainError> {
        let mut page: PagedResults<NowPlayingEntry> = self
            .get_json(
                "/movie/now_playing",
                &[("language", LANGUAGE), ("page", PAGE)],
            )
            .await?;

        page.results.truncate(NOW_PLAYING_LIMIT);
        Ok(page.results)
    }

    async fn movies_by_genre(&self, genre: GenreId) -> Result<Vec<GenreMovie>, DomainError> {
        let genre_param = genre.0.to_string();
        let mut page: PagedResults<GenreMovie> = self
            .get_json(
                "/discover/movie",
                &[
                    ("with_genres", genre_param.as_str()),
                    ("language", LANGUAGE),
                    ("page", PAGE),
                ],
            )
            .await?;

        page.results.truncate(GENRE_RESULT_LIMIT);
        Ok(page.results)
    }

    async fn movie_credits(&self, id: MovieId) -> Result<MovieCredits, DomainError> {
        let mut credits: MovieCredits = self
            .get_json(
                &format!("/movie/{}/credits", id.0),
                &[("language", LANGUAGE)],
            )
            .await?;

        credits.crew.truncate(CREW_LIMIT);
        Ok(credits)
    }
}
