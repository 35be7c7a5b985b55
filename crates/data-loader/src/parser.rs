//! Parser for the catalog CSV.
//!
//! Header columns: `MovieID, Title, Genres, ReleaseYear, VoteAverage,
//! Popularity, Overview, Actors, Directors` and an optional `Region`.
//! Only `MovieID` is mandatory per row. Every other cell may be empty or
//! malformed, in which case the field is recorded as unknown.

use crate::error::{DataLoadError, Result};
use crate::types::{split_genres, Catalog, CatalogItem};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// One raw CSV row. Numbers stay as text so that "1995.0", "" and "n/a"
/// can all be handled without rejecting the row.
#[derive(Debug, Deserialize)]
struct CatalogRecord {
    #[serde(rename = "MovieID")]
    movie_id: String,
    #[serde(rename = "Title", default)]
    title: Option<String>,
    #[serde(rename = "Genres", default)]
    genres: Option<String>,
    #[serde(rename = "ReleaseYear", default)]
    release_year: Option<String>,
    #[serde(rename = "VoteAverage", default)]
    vote_average: Option<String>,
    #[serde(rename = "Popularity", default)]
    popularity: Option<String>,
    #[serde(rename = "Overview", default)]
    overview: Option<String>,
    #[serde(rename = "Actors", default)]
    actors: Option<String>,
    #[serde(rename = "Directors", default)]
    directors: Option<String>,
    #[serde(rename = "Region", default)]
    region: Option<String>,
}

/// Parse the catalog file at `path`
pub fn parse_catalog(path: &Path) -> Result<Catalog> {
    let file = File::open(path).map_err(|_| DataLoadError::FileNotFound {
        path: path.display().to_string(),
    })?;
    parse_catalog_reader(file, &path.display().to_string())
}

/// Parse catalog CSV from any reader. `source` is only used in log lines.
pub fn parse_catalog_reader<R: Read>(reader: R, source: &str) -> Result<Catalog> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = reader.headers()?.clone();

    let mut catalog = Catalog::new();
    let mut skipped = 0usize;
    let mut duplicates = 0usize;
    let mut rows = 0usize;

    for (row, result) in reader.records().enumerate() {
        rows = row + 1;
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipping unreadable catalog row {} in {}: {}", row + 1, source, e);
                skipped += 1;
                continue;
            }
        };
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let parsed = record
            .deserialize::<CatalogRecord>(Some(&headers))
            .map_err(DataLoadError::from)
            .and_then(|raw| into_item(raw, row));

        match parsed {
            Ok(item) => {
                if !catalog.insert(item) {
                    duplicates += 1;
                }
            }
            Err(e) => {
                warn!("Skipping catalog line {} in {}: {}", line, source, e);
                skipped += 1;
            }
        }
    }
    catalog.set_source_rows(rows);

    if skipped > 0 || duplicates > 0 {
        warn!(
            "Catalog {}: skipped {} malformed rows and {} duplicate ids",
            source, skipped, duplicates
        );
    }
    debug!("Parsed {} catalog items from {}", catalog.len(), source);

    if catalog.is_empty() {
        return Err(DataLoadError::EmptyCatalog {
            path: source.to_string(),
        });
    }
    Ok(catalog)
}

fn into_item(raw: CatalogRecord, row: usize) -> Result<CatalogItem> {
    let id = raw
        .movie_id
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|id| id.fract() == 0.0 && *id >= 0.0 && *id <= u32::MAX as f64)
        .map(|id| id as u32)
        .ok_or_else(|| DataLoadError::InvalidValue {
            field: "MovieID".to_string(),
            value: raw.movie_id.clone(),
        })?;

    Ok(CatalogItem {
        id,
        title: non_empty(raw.title).unwrap_or_default(),
        genres: non_empty(raw.genres)
            .map(|g| split_genres(&g))
            .unwrap_or_default(),
        year: parse_number(raw.release_year.as_deref()).and_then(to_year),
        rating: parse_number(raw.vote_average.as_deref()).map(|v| v as f32),
        popularity: parse_number(raw.popularity.as_deref())
            .filter(|p| *p >= 0.0)
            .map(|p| p as f32),
        overview: non_empty(raw.overview),
        actors: non_empty(raw.actors),
        directors: non_empty(raw.directors),
        region: raw.region.as_deref().and_then(|r| r.parse().ok()),
        source_row: row,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parse a numeric cell; empty, "nan" and garbage are all unknown
fn parse_number(cell: Option<&str>) -> Option<f64> {
    cell.map(str::trim)
        .filter(|c| !c.is_empty())
        .and_then(|c| c.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Years arrive as "1995" or "1995.0" depending on how the catalog was exported
fn to_year(value: f64) -> Option<u16> {
    if value.fract() == 0.0 && (1.0..=u16::MAX as f64).contains(&value) {
        Some(value as u16)
    } else {
        None
    }
}
