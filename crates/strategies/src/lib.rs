//! # Strategies Crate
//!
//! Ranking strategies for movie recommendations.
//!
//! ## Components
//!
//! ### Content
//! Similar movies to a reference picked at random from the candidates, using
//! the sample similarity matrix or, failing that, the full text matrix.
//!
//! ### Mood, Discovery, Regional
//! Heuristic filters and scores over the candidates:
//! - Mood: genres that suit the mood, best rated first
//! - Discovery: hidden gems, underrated, cult classics, award calibre
//! - Regional: one film industry, best rated first
//!
//! ### Basic
//! Best rated, then most popular. Every other strategy falls back to it.
//!
//! ## Example Usage
//!
//! ```ignore
//! use strategies::RecommendationEngine;
//! use pipeline::{filter_catalog, RecommendationMode};
//! use std::sync::Arc;
//!
//! let engine = RecommendationEngine::new(Arc::new(store));
//! let catalog = engine.store().catalog().unwrap();
//!
//! let candidates = filter_catalog(catalog, &prefs);
//! let picks = engine.recommend(&candidates, &prefs.mode);
//! ```

pub mod error;
pub mod config;
mod ranking;
pub mod basic;
pub mod content;
pub mod mood;
pub mod discovery;
pub mod regional;
pub mod engine;

pub use error::StrategyError;
pub use config::EngineConfig;
pub use engine::RecommendationEngine;
pub use mood::mood_genres;
