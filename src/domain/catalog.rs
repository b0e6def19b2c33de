//! Catalog trait definition
//!
//! This trait defines the contract for the two-stage upstream lookup:
//! resolve a human-readable query to an upstream identifier, then fetch
//! the full resource for that identifier.
//! Implementations live in the modules/integrations layer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::DomainError;

/// Upstream movie identifier. Opaque, only meaningful to the upstream service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MovieId(pub i64);

/// Upstream genre identifier. Scoped to genres; never interchangeable with a movie ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenreId(pub i64);

/// One entry of the popular-movies listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: i64,
    pub title: String,
    pub release_date: Option<String>,
    pub vote_average: Option<f64>,
}

/// One title-search match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: i64,
    pub title: String,
    pub overview: Option<String>,
    pub release_date: Option<String>,
}

/// Full detail record for a single movie
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDetails {
    pub id: i64,
    pub title: String,
    pub tagline: Option<String>,
    pub overview: Option<String>,
    pub release_date: Option<String>,
    pub runtime: Option<u32>,
}

/// One entry of the in-theaters listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NowPlayingEntry {
    pub title: String,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
}

/// One entry of a discover-by-genre listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreMovie {
    pub id: i64,
    pub title: String,
    pub genre_ids: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastMember {
    pub id: i64,
    pub name: String,
    pub character: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewMember {
    pub id: i64,
    pub name: String,
    pub job: Option<String>,
}

/// Cast and crew for a single movie
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieCredits {
    pub id: i64,
    pub cast: Vec<CastMember>,
    pub crew: Vec<CrewMember>,
}

/// Contract for the upstream movie catalog.
///
/// The resolve_* methods form the Resolver stage (one lookup call, extract
/// an identifier); the remaining methods form the Detail Fetcher stage (one
/// call parameterized by identifier or fixed listing). Every method performs
/// exactly one outbound request.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Validate upstream connectivity and the configured credential.
    async fn check_upstream(&self) -> Result<(), DomainError>;

    /// Resolve a movie title to the identifier of the first search match.
    ///
    /// Fails with `DomainError::NotFound` when the search yields no results.
    async fn resolve_movie(&self, query: &str) -> Result<MovieId, DomainError>;

    /// Resolve a genre name to its identifier.
    ///
    /// The match is a case-sensitive exact comparison against the upstream
    /// genre list; fails with `DomainError::NotFound` when no entry matches.
    async fn resolve_genre(&self, name: &str) -> Result<GenreId, DomainError>;

    /// First page of the popular-movies listing.
    async fn popular(&self) -> Result<Vec<MovieSummary>, DomainError>;

    /// Title search, curated to the top matches.
    async fn search_movies(&self, query: &str) -> Result<Vec<SearchHit>, DomainError>;

    /// Full details for one movie.
    async fn movie_details(&self, id: MovieId) -> Result<MovieDetails, DomainError>;

    /// First page of the in-theaters listing, curated to the top entries.
    async fn now_playing(&self) -> Result<Vec<NowPlayingEntry>, DomainError>;

    /// First page of movies matching a genre, curated to the top entries.
    async fn movies_by_genre(&self, genre: GenreId) -> Result<Vec<GenreMovie>, DomainError>;

    /// Cast and crew for one movie, crew curated to the top entries.
    async fn movie_credits(&self, id: MovieId) -> Result<MovieCredits, DomainError>;
}
