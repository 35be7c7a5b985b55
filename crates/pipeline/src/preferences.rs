//! The preference record a request carries.
//!
//! Each bucket has an `Any` arm that turns its filter off. Unknown request
//! strings map to `Any` rather than failing the request.

use crate::mode::RecommendationMode;
use serde::{Deserialize, Serialize};

/// Release era
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimePeriod {
    #[default]
    Any,
    /// Before 2000
    Classic,
    /// 2000 up to (not including) 2020
    Modern,
    /// 2020 and later
    Recent,
}

impl TimePeriod {
    pub fn from_request(value: &str) -> Self {
        match value {
            "classic" => TimePeriod::Classic,
            "modern" => TimePeriod::Modern,
            "recent" => TimePeriod::Recent,
            _ => TimePeriod::Any,
        }
    }

    /// Whether a release year falls in this period. Unknown years never do,
    /// except for `Any`.
    pub fn contains(&self, year: Option<u16>) -> bool {
        match (self, year) {
            (TimePeriod::Any, _) => true,
            (_, None) => false,
            (TimePeriod::Classic, Some(year)) => year < 2000,
            (TimePeriod::Modern, Some(year)) => (2000..2020).contains(&year),
            (TimePeriod::Recent, Some(year)) => year >= 2020,
        }
    }
}

/// Rating floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RatingBucket {
    #[default]
    Any,
    /// Rating 7.0 and up
    HighRated,
}

impl RatingBucket {
    pub const HIGH_RATED_FLOOR: f32 = 7.0;

    pub fn from_request(value: &str) -> Self {
        match value {
            "high-rated" => RatingBucket::HighRated,
            _ => RatingBucket::Any,
        }
    }
}

/// Popularity bracket, split at a popularity score of 30
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PopularityBucket {
    #[default]
    Any,
    /// Strictly above 30
    Popular,
    /// 30 or below
    LesserKnown,
}

impl PopularityBucket {
    pub const THRESHOLD: f32 = 30.0;

    pub fn from_request(value: &str) -> Self {
        match value {
            "popular" => PopularityBucket::Popular,
            "lesser-known" => PopularityBucket::LesserKnown,
            _ => PopularityBucket::Any,
        }
    }
}

/// Requested genres
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GenreSelection {
    #[default]
    Any,
    /// Keep items matching at least one of these
    Only(Vec<String>),
}

impl GenreSelection {
    /// An empty list, or any list containing "any", selects everything
    pub fn from_request<S: AsRef<str>>(genres: &[S]) -> Self {
        if genres.is_empty() || genres.iter().any(|g| g.as_ref() == "any") {
            GenreSelection::Any
        } else {
            GenreSelection::Only(genres.iter().map(|g| g.as_ref().to_string()).collect())
        }
    }
}

/// Everything one request asks for. Built per request, never stored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PreferenceRecord {
    pub mode: RecommendationMode,
    pub genres: GenreSelection,
    pub time_period: TimePeriod,
    pub rating: RatingBucket,
    pub popularity: PopularityBucket,
}

impl PreferenceRecord {
    pub fn new(mode: RecommendationMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_genres<S: AsRef<str>>(mut self, genres: &[S]) -> Self {
        self.genres = GenreSelection::from_request(genres);
        self
    }

    pub fn with_time_period(mut self, time_period: TimePeriod) -> Self {
        self.time_period = time_period;
        self
    }

    pub fn with_rating(mut self, rating: RatingBucket) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_popularity(mut self, popularity: PopularityBucket) -> Self {
        self.popularity = popularity;
        self
    }
}
