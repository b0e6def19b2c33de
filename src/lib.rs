pub mod api;
pub mod api_docs;
pub mod domain;
pub mod infrastructure;
pub mod modules;

pub use infrastructure::config;
pub use infrastructure::state;
pub use modules::integrations::tmdb;
