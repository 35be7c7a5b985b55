//! Response shape sent back to the web client.

use data_loader::{CatalogItem, Region};
use serde::{Deserialize, Serialize};

pub const PLACEHOLDER_POSTER: &str = "/static/img/no-poster.jpg";

/// One recommended movie. Unknown fields are filled with neutral defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub title: String,
    pub genres: Vec<String>,
    pub year: u16,
    pub rating: f32,
    pub overview: String,
    pub region: String,
    pub poster_path: String,
}

impl From<&CatalogItem> for Recommendation {
    fn from(item: &CatalogItem) -> Self {
        Self {
            title: item.title.clone(),
            genres: item.genres.clone(),
            year: item.year.unwrap_or(0),
            rating: item.rating.filter(|r| r.is_finite()).unwrap_or(0.0),
            overview: item.overview.clone().unwrap_or_default(),
            region: item.region.unwrap_or_default().to_string(),
            poster_path: PLACEHOLDER_POSTER.to_string(),
        }
    }
}

pub fn format_recommendations(items: &[&CatalogItem]) -> Vec<Recommendation> {
    items.iter().map(|&item| Recommendation::from(item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(format_recommendations(&[]).is_empty());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let item = CatalogItem::new(1, "Mystery");
        let formatted = format_recommendations(&[&item]);

        assert_eq!(
            formatted,
            vec![Recommendation {
                title: "Mystery".to_string(),
                genres: vec![],
                year: 0,
                rating: 0.0,
                overview: String::new(),
                region: "Hollywood".to_string(),
                poster_path: PLACEHOLDER_POSTER.to_string(),
            }]
        );
    }

    #[test]
    fn test_wire_names() {
        let item = CatalogItem::new(1, "RRR")
            .with_genres("Action|Drama")
            .with_year(2022)
            .with_rating(7.8)
            .with_overview("Two revolutionaries")
            .with_region(Region::Tollywood);
        let json = serde_json::to_value(Recommendation::from(&item)).unwrap();

        assert_eq!(json["genres"], serde_json::json!(["Action", "Drama"]));
        assert_eq!(json["year"], 2022);
        assert_eq!(json["region"], "Tollywood");
        assert_eq!(json["posterPath"], PLACEHOLDER_POSTER);
    }
}
