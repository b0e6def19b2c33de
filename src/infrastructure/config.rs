use std::env;

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub upstream_base_url: String,
    pub api_token: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            upstream_base_url: env::var("MOVIE_DB_URL")
                .unwrap_or_else(|_| "https://api.themoviedb.org/3".to_string()),
            api_token: env::var("MOVIEDB_API_KEY").unwrap_or_default(),
        }
    }
}
