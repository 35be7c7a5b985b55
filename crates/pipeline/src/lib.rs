//! Preference filtering for movie recommendations.
//!
//! This crate provides:
//! - `PreferenceRecord` and the closed mode/bucket enums a request parses into
//! - Filter trait and implementations for candidate filtering
//! - FilterPipeline for composing filters
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{filter_catalog, PreferenceRecord, RecommendationMode, TimePeriod};
//!
//! let prefs = PreferenceRecord::new(RecommendationMode::Basic)
//!     .with_time_period(TimePeriod::Classic)
//!     .with_genres(&["Drama"]);
//!
//! let candidates = filter_catalog(&catalog, &prefs);
//! ```

pub mod traits;
pub mod mode;
pub mod preferences;
pub mod filters;
pub mod filter_pipeline;

// Re-export main types
pub use traits::Filter;
pub use mode::{DiscoveryKind, Mood, RecommendationMode, RegionTarget};
pub use preferences::{GenreSelection, PopularityBucket, PreferenceRecord, RatingBucket, TimePeriod};
pub use filter_pipeline::{filter_catalog, FilterPipeline};
