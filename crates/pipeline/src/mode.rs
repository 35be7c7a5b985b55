//! Closed set of recommendation modes.
//!
//! Requests name a mode and a sub-mode as free strings. They are parsed once
//! into these enums; anything unrecognized lands in an explicit arm so every
//! strategy has to say what it does with it.

use data_loader::Region;
use serde::{Deserialize, Serialize};

/// Which strategy a request asks for
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RecommendationMode {
    /// Similar to a reference movie picked from the candidates
    Content,
    Mood(Mood),
    Discovery(DiscoveryKind),
    Regional(RegionTarget),
    /// Highest rated, then most popular
    #[default]
    Basic,
}

impl RecommendationMode {
    /// Parse the `recommendationType` / `subType` pair of a request
    pub fn from_request(recommendation_type: &str, sub_type: &str) -> Self {
        match recommendation_type {
            "content" => RecommendationMode::Content,
            "mood" => RecommendationMode::Mood(Mood::from_request(sub_type)),
            "discovery" => RecommendationMode::Discovery(DiscoveryKind::from_request(sub_type)),
            "regional" => RecommendationMode::Regional(RegionTarget::from_request(sub_type)),
            _ => RecommendationMode::Basic,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RecommendationMode::Content => "content",
            RecommendationMode::Mood(_) => "mood",
            RecommendationMode::Discovery(_) => "discovery",
            RecommendationMode::Regional(_) => "regional",
            RecommendationMode::Basic => "basic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    Happy,
    Sad,
    Excited,
    Relaxed,
    Thoughtful,
    Romantic,
    Unrecognized,
}

impl Mood {
    pub fn from_request(sub_type: &str) -> Self {
        match sub_type {
            "happy" => Mood::Happy,
            "sad" => Mood::Sad,
            "excited" => Mood::Excited,
            "relaxed" => Mood::Relaxed,
            "thoughtful" => Mood::Thoughtful,
            "romantic" => Mood::Romantic,
            _ => Mood::Unrecognized,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscoveryKind {
    /// Well rated and little known
    Hidden,
    Underrated,
    /// Older and well rated
    Cult,
    /// Rating 8.0 and up, a stand-in for award winners
    Awards,
    Unrecognized,
}

impl DiscoveryKind {
    pub fn from_request(sub_type: &str) -> Self {
        match sub_type {
            "hidden" => DiscoveryKind::Hidden,
            "underrated" => DiscoveryKind::Underrated,
            "cult" => DiscoveryKind::Cult,
            "awards" => DiscoveryKind::Awards,
            _ => DiscoveryKind::Unrecognized,
        }
    }
}

/// Region a regional request asks for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegionTarget {
    Known(Region),
    /// A label no item can carry; the request matches nothing
    Unrecognized(String),
}

impl RegionTarget {
    pub fn from_request(sub_type: &str) -> Self {
        match sub_type.parse::<Region>() {
            Ok(region) => RegionTarget::Known(region),
            Err(_) => RegionTarget::Unrecognized(sub_type.to_string()),
        }
    }
}
