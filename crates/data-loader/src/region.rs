//! Regional cinema labels derived from free text.
//!
//! The label is a keyword heuristic, not a fact about where a film was made.
//! It is computed once while the store loads, before the catalog is shared.

use crate::error::DataLoadError;
use crate::types::{Catalog, CatalogItem};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// Coarse regional cinema label
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[default]
    Hollywood,
    Bollywood,
    Tollywood,
    Kollywood,
}

impl Region {
    pub const ALL: [Region; 4] = [
        Region::Hollywood,
        Region::Bollywood,
        Region::Tollywood,
        Region::Kollywood,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Hollywood => "Hollywood",
            Region::Bollywood => "Bollywood",
            Region::Tollywood => "Tollywood",
            Region::Kollywood => "Kollywood",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = DataLoadError;

    /// Labels are matched exactly; "bollywood" is not "Bollywood".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Hollywood" => Ok(Region::Hollywood),
            "Bollywood" => Ok(Region::Bollywood),
            "Tollywood" => Ok(Region::Tollywood),
            "Kollywood" => Ok(Region::Kollywood),
            _ => Err(DataLoadError::InvalidValue {
                field: "region".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

// Checked in this order; the first list with any hit wins.
const BOLLYWOOD_MARKERS: &[&str] = &[
    "bollywood", "hindi", "india", "indian", "mumbai", "khan", "kapoor", "chopra", "johar",
    "bhatt",
];
const TOLLYWOOD_MARKERS: &[&str] = &[
    "telugu",
    "tollywood",
    "hyderabad",
    "andhra",
    "telangana",
    "rajamouli",
    "prabhas",
    "allu",
    "chiranjeevi",
];
const KOLLYWOOD_MARKERS: &[&str] = &["tamil", "kollywood", "chennai", "rajinikanth", "vijay", "ajith"];

/// Classify one item from its title, cast, crew and overview.
pub fn classify(item: &CatalogItem) -> Region {
    let text = format!(
        "{} {} {} {}",
        item.title,
        item.actors.as_deref().unwrap_or_default(),
        item.directors.as_deref().unwrap_or_default(),
        item.overview.as_deref().unwrap_or_default(),
    )
    .to_lowercase();

    let rules = [
        (Region::Bollywood, BOLLYWOOD_MARKERS),
        (Region::Tollywood, TOLLYWOOD_MARKERS),
        (Region::Kollywood, KOLLYWOOD_MARKERS),
    ];

    rules
        .iter()
        .find(|(_, markers)| markers.iter().any(|marker| text.contains(marker)))
        .map(|(region, _)| *region)
        .unwrap_or(Region::Hollywood)
}

/// Label every item that has no region yet. Returns how many were classified.
///
/// Items that already carry a label are left alone, so running this twice is
/// a no-op the second time.
pub fn ensure_regions(catalog: &mut Catalog) -> usize {
    let classified = catalog
        .items_mut()
        .par_iter_mut()
        .filter(|item| item.region.is_none())
        .map(|item| {
            item.region = Some(classify(item));
        })
        .count();

    if classified > 0 {
        info!("Classified {} movies by regional cinema", classified);
    }
    classified
}
