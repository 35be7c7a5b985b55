//! End-to-end tests: request in, formatted recommendations out.

use std::collections::HashSet;
use std::fs;
use std::sync::Arc;

use data_loader::{ArtifactPaths, ArtifactStore, Catalog, CatalogItem, Region};
use rand::rngs::StdRng;
use rand::SeedableRng;
use service::{PreferenceRequest, Recommendation, RecommendationService, ServiceError};
use tempfile::TempDir;

fn service_over(items: Vec<CatalogItem>) -> RecommendationService {
    let store = ArtifactStore::from_catalog(Catalog::from_items(items));
    RecommendationService::new(Arc::new(store))
}

fn titles(picks: &[Recommendation]) -> Vec<&str> {
    picks.iter().map(|p| p.title.as_str()).collect()
}

fn mixed_catalog() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new(1, "Sholay")
            .with_genres("Action|Adventure")
            .with_year(1975)
            .with_rating(8.1)
            .with_popularity(9.5)
            .with_actors("Amitabh Bachchan, Dharmendra")
            .with_overview("A Hindi classic about two small-time crooks"),
        CatalogItem::new(2, "Baahubali: The Beginning")
            .with_genres("Action|Drama|Fantasy")
            .with_year(2015)
            .with_rating(7.6)
            .with_popularity(28.0)
            .with_directors("S. S. Rajamouli"),
        CatalogItem::new(3, "Vikram")
            .with_genres("Action|Thriller")
            .with_year(2022)
            .with_rating(7.9)
            .with_popularity(14.0)
            .with_overview("A Tamil action thriller"),
        CatalogItem::new(4, "The Godfather")
            .with_genres("Drama|Crime")
            .with_year(1972)
            .with_rating(8.7)
            .with_popularity(120.0),
        CatalogItem::new(5, "Paddington 2")
            .with_genres("Comedy|Family|Adventure")
            .with_year(2017)
            .with_rating(7.6)
            .with_popularity(18.3),
        CatalogItem::new(6, "Hereditary")
            .with_genres("Horror|Mystery")
            .with_year(2018)
            .with_rating(7.3)
            .with_popularity(40.2),
        CatalogItem::new(7, "Untitled Project"),
    ]
}

#[test]
fn test_classic_time_period_keeps_only_1995() {
    let service = service_over(vec![
        CatalogItem::new(1, "Nineties").with_year(1995).with_rating(6.0),
        CatalogItem::new(2, "Tens").with_year(2015).with_rating(7.0),
        CatalogItem::new(3, "Twenties").with_year(2023).with_rating(8.0),
    ]);
    let request = PreferenceRequest::default().with_time_period("classic");

    let picks = service.recommend(&request).unwrap();
    assert_eq!(titles(&picks), vec!["Nineties"]);
    assert_eq!(picks[0].year, 1995);
}

#[test]
fn test_happy_mood_excludes_horror() {
    let service = service_over(vec![
        CatalogItem::new(1, "Paddington").with_genres("Comedy|Family").with_rating(7.0),
        CatalogItem::new(2, "Scream").with_genres("Horror").with_rating(9.0),
    ]);

    let picks = service.recommend(&PreferenceRequest::new("mood", "happy")).unwrap();
    assert_eq!(titles(&picks), vec!["Paddington"]);
    assert_eq!(picks[0].genres, vec!["Comedy", "Family"]);
}

#[test]
fn test_awards_discovery() {
    let service = service_over(vec![
        CatalogItem::new(1, "Good").with_rating(8.5),
        CatalogItem::new(2, "Nearly").with_rating(7.9),
        CatalogItem::new(3, "Best").with_rating(9.0),
    ]);

    let picks = service.recommend(&PreferenceRequest::new("discovery", "awards")).unwrap();
    assert_eq!(titles(&picks), vec!["Best", "Good"]);
}

#[test]
fn test_empty_candidates_are_not_an_error() {
    let service = service_over(mixed_catalog());
    let request = PreferenceRequest::default().with_genres(["Western"]);

    for (kind, sub_type) in [
        ("content", ""),
        ("mood", "sad"),
        ("discovery", "hidden"),
        ("regional", "Bollywood"),
        ("", ""),
    ] {
        let mut request = request.clone();
        request.recommendation_type = kind.to_string();
        request.sub_type = sub_type.to_string();
        assert_eq!(service.recommend(&request), Ok(vec![]));
    }
}

#[test]
fn test_catalog_unavailable_is_distinct_from_empty() {
    let service = RecommendationService::new(Arc::new(ArtifactStore::empty()));
    assert_eq!(
        service.recommend(&PreferenceRequest::new("mood", "happy")),
        Err(ServiceError::CatalogUnavailable)
    );
}

#[test]
fn test_regional_labels_come_from_classification() {
    let service = service_over(mixed_catalog());

    for (label, expected) in [
        ("Bollywood", vec!["Sholay"]),
        ("Tollywood", vec!["Baahubali: The Beginning"]),
        ("Kollywood", vec!["Vikram"]),
    ] {
        let picks = service.recommend(&PreferenceRequest::new("regional", label)).unwrap();
        assert_eq!(titles(&picks), expected);
        assert!(picks.iter().all(|p| p.region == label));
    }

    let picks = service.recommend(&PreferenceRequest::new("regional", "Hollywood")).unwrap();
    assert_eq!(titles(&picks), vec!["The Godfather", "Paddington 2", "Hereditary", "Untitled Project"]);

    let picks = service.recommend(&PreferenceRequest::new("regional", "Nollywood")).unwrap();
    assert!(picks.is_empty());
}

#[test]
fn test_basic_and_mood_are_sorted_by_rating() {
    let service = service_over(mixed_catalog());

    for request in [
        PreferenceRequest::new("", ""),
        PreferenceRequest::new("mood", "excited"),
        PreferenceRequest::new("mood", "thoughtful"),
    ] {
        let picks = service.recommend_with_limit(&request, 10).unwrap();
        assert!(picks.windows(2).all(|w| w[0].rating >= w[1].rating));
    }
}

#[test]
fn test_hidden_gems_respect_thresholds() {
    let catalog = mixed_catalog();
    let service = service_over(catalog.clone());

    let picks = service.recommend(&PreferenceRequest::new("discovery", "hidden")).unwrap();
    assert_eq!(titles(&picks), vec!["Sholay", "Vikram", "Paddington 2", "Baahubali: The Beginning"]);
    for pick in &picks {
        let item = catalog.iter().find(|i| i.title == pick.title).unwrap();
        assert!(item.popularity.unwrap() < 30.0);
        assert!(item.rating.unwrap() >= 7.0);
    }
}

#[test]
fn test_results_are_bounded_and_drawn_from_candidates() {
    let service = service_over(mixed_catalog());
    let mut rng = StdRng::seed_from_u64(11);
    let high_rated: HashSet<&str> = ["Sholay", "Baahubali: The Beginning", "Vikram", "The Godfather", "Paddington 2", "Hereditary"]
        .into_iter()
        .collect();

    for (kind, sub_type) in [
        ("content", ""),
        ("mood", "romantic"),
        ("mood", "nonsense"),
        ("discovery", "underrated"),
        ("discovery", "cult"),
        ("discovery", "nonsense"),
        ("regional", "Hollywood"),
        ("basic", ""),
    ] {
        let request = PreferenceRequest::new(kind, sub_type).with_rating("high-rated");
        for limit in [0, 1, 3, 6] {
            let picks = service.recommend_with_rng(&request, limit, &mut rng).unwrap();
            assert!(picks.len() <= limit.min(high_rated.len()));
            assert!(picks.iter().all(|p| high_rated.contains(p.title.as_str())));
        }
    }
}

#[test]
fn test_unknown_fields_are_formatted_with_defaults() {
    let service = service_over(vec![CatalogItem::new(1, "Untitled Project")]);

    let picks = service.recommend(&PreferenceRequest::default()).unwrap();
    assert_eq!(picks.len(), 1);
    assert_eq!(picks[0].year, 0);
    assert_eq!(picks[0].rating, 0.0);
    assert_eq!(picks[0].overview, "");
    assert_eq!(picks[0].region, "Hollywood");
    assert_eq!(picks[0].poster_path, "/static/img/no-poster.jpg");
}

#[test]
fn test_json_request_and_response() {
    let service = service_over(mixed_catalog());
    let request: PreferenceRequest = serde_json::from_str(
        r#"{"recommendationType": "mood", "subType": "happy", "genre": "Comedy", "timePeriod": "modern"}"#,
    )
    .unwrap();

    let picks = service.recommend(&request).unwrap();
    let json = serde_json::to_value(&picks).unwrap();

    assert_eq!(json[0]["title"], "Paddington 2");
    assert_eq!(json[0]["year"], 2017);
    assert_eq!(json[0]["posterPath"], "/static/img/no-poster.jpg");
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[test]
fn test_content_from_artifacts_on_disk() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("movies2024.csv"),
        "\
MovieID,Title,Genres,ReleaseYear,VoteAverage,Popularity,Overview,Actors,Directors
10,Alien,Horror|Science Fiction,1979,8.1,60.0,A crew meets a creature,Sigourney Weaver,Ridley Scott
20,Aliens,Action|Science Fiction,1986,7.9,45.0,The creature returns,Sigourney Weaver,James Cameron
30,Annie Hall,Comedy|Romance,1977,7.8,20.0,A comedian falls in love,Diane Keaton,Woody Allen
",
    )
    .unwrap();
    fs::write(
        dir.path().join("cosine_sim_sample.json"),
        "[[1.0, 0.8, 0.1], [0.8, 1.0, 0.2], [0.1, 0.2, 1.0]]",
    )
    .unwrap();
    fs::write(dir.path().join("sample_indices.json"), "[10, 20, 30]").unwrap();

    let store = ArtifactStore::load(&ArtifactPaths::new(dir.path(), dir.path()));
    assert!(store.sample_similarity().is_some());
    assert_eq!(store.catalog().unwrap().get(30).unwrap().region, Some(Region::Hollywood));
    let service = RecommendationService::new(Arc::new(store));

    // Both candidates are each other's nearest neighbour
    let request = PreferenceRequest::new("content", "").with_genres(["Science Fiction"]);
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..5 {
        let picks = service.recommend_with_rng(&request, 6, &mut rng).unwrap();
        assert_eq!(picks.len(), 1);
        assert!(picks[0].title.starts_with("Alien"));
    }
}
