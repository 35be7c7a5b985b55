//! Wire form of a recommendation request.
//!
//! Field names follow the web client (`recommendationType`, `subType`, ...).
//! Every field is optional on the wire; missing or unknown values select the
//! "any" behaviour.

use pipeline::{
    PopularityBucket, PreferenceRecord, RatingBucket, RecommendationMode, TimePeriod,
};
use serde::{Deserialize, Serialize};

/// Either a single genre or a list of them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenreField {
    One(String),
    Many(Vec<String>),
}

impl Default for GenreField {
    fn default() -> Self {
        GenreField::Many(Vec::new())
    }
}

impl GenreField {
    pub fn as_slice(&self) -> &[String] {
        match self {
            GenreField::One(genre) => std::slice::from_ref(genre),
            GenreField::Many(genres) => genres,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceRequest {
    #[serde(default)]
    pub recommendation_type: String,
    #[serde(default)]
    pub sub_type: String,
    #[serde(default)]
    pub genre: GenreField,
    #[serde(default = "any")]
    pub time_period: String,
    #[serde(default = "any_rating")]
    pub rating: String,
    #[serde(default = "any")]
    pub popularity: String,
}

fn any() -> String {
    "any".to_string()
}

fn any_rating() -> String {
    "any-rating".to_string()
}

impl Default for PreferenceRequest {
    fn default() -> Self {
        Self {
            recommendation_type: String::new(),
            sub_type: String::new(),
            genre: GenreField::default(),
            time_period: any(),
            rating: any_rating(),
            popularity: any(),
        }
    }
}

impl PreferenceRequest {
    pub fn new(recommendation_type: impl Into<String>, sub_type: impl Into<String>) -> Self {
        Self {
            recommendation_type: recommendation_type.into(),
            sub_type: sub_type.into(),
            ..Self::default()
        }
    }

    pub fn with_genres<S: Into<String>>(mut self, genres: impl IntoIterator<Item = S>) -> Self {
        self.genre = GenreField::Many(genres.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_time_period(mut self, time_period: impl Into<String>) -> Self {
        self.time_period = time_period.into();
        self
    }

    pub fn with_rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = rating.into();
        self
    }

    pub fn with_popularity(mut self, popularity: impl Into<String>) -> Self {
        self.popularity = popularity.into();
        self
    }

    /// Parse the free-form strings into the closed preference types
    pub fn to_preferences(&self) -> PreferenceRecord {
        PreferenceRecord::new(RecommendationMode::from_request(
            &self.recommendation_type,
            &self.sub_type,
        ))
        .with_genres(self.genre.as_slice())
        .with_time_period(TimePeriod::from_request(&self.time_period))
        .with_rating(RatingBucket::from_request(&self.rating))
        .with_popularity(PopularityBucket::from_request(&self.popularity))
    }
}
