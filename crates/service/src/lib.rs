//! Service crate for the reel-picks recommendation engine.
//!
//! This crate contains the request/response types the web client speaks and
//! the service that runs a request through filtering, ranking and formatting.

pub mod error;
pub mod request;
pub mod format;
pub mod service;

pub use error::ServiceError;
pub use request::{GenreField, PreferenceRequest};
pub use format::{format_recommendations, Recommendation, PLACEHOLDER_POSTER};
pub use service::RecommendationService;
