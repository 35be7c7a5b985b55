//! Filter implementations for the preference pipeline.
//!
//! One filter per preference bucket. Each is only added to a pipeline when
//! its preference is set; an "any" preference means no filter at all.

pub mod genre_preference;
pub mod minimum_rating;
pub mod popularity;
pub mod time_period;

// Re-export for convenience
pub use genre_preference::GenrePreferenceFilter;
pub use minimum_rating::MinimumRatingFilter;
pub use popularity::PopularityFilter;
pub use time_period::TimePeriodFilter;
