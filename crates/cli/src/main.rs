use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{ArtifactPaths, ArtifactStore, CatalogItem, Region};
use rand::Rng;
use service::{PreferenceRequest, Recommendation, RecommendationService};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use strategies::EngineConfig;
use tokio::sync::Semaphore;
use tracing::info;

/// Reel Picks - Movie Recommendation Engine
#[derive(Parser)]
#[command(name = "reel-picks")]
#[command(about = "Movie recommendations by mood, region, discovery and content similarity", long_about = None)]
struct Cli {
    /// Directory holding movies2024.csv
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Directory holding the precomputed model artifacts
    #[arg(short, long, default_value = "models")]
    models_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get movie recommendations for a set of preferences
    Recommend {
        /// content, mood, discovery or regional (anything else ranks by rating)
        #[arg(long = "type", default_value = "")]
        kind: String,

        /// Mood, discovery kind or region label, depending on --type
        #[arg(long, default_value = "")]
        sub_type: String,

        /// Genre to include; repeat for several
        #[arg(long)]
        genre: Vec<String>,

        /// any, classic, modern or recent
        #[arg(long, default_value = "any")]
        time_period: String,

        /// any-rating or high-rated
        #[arg(long, default_value = "any-rating")]
        rating: String,

        /// any, popular or lesser-known
        #[arg(long, default_value = "any")]
        popularity: String,

        /// Number of recommendations to return
        #[arg(long, default_value = "6")]
        limit: usize,

        /// Print the JSON response instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Search for movies by title
    Search {
        /// Movie title to search for (case-insensitive substring match)
        #[arg(long)]
        title: String,
    },

    /// Show what was loaded
    Stats,

    /// Run benchmark to test performance
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,

        /// Number of concurrent requests
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let paths = ArtifactPaths::new(&cli.data_dir, &cli.models_dir);
    let store = Arc::new(ArtifactStore::load(&paths));
    info!("Artifacts loaded in {:?}", start.elapsed());

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend {
            kind,
            sub_type,
            genre,
            time_period,
            rating,
            popularity,
            limit,
            json,
        } => {
            let request = PreferenceRequest::new(kind, sub_type)
                .with_genres(genre)
                .with_time_period(time_period)
                .with_rating(rating)
                .with_popularity(popularity);
            handle_recommend(store, request, limit, json)?
        }
        Commands::Search { title } => handle_search(&store, &title)?,
        Commands::Stats => handle_stats(&store)?,
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(store, requests, concurrent).await?,
    }

    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(
    store: Arc<ArtifactStore>,
    request: PreferenceRequest,
    limit: usize,
    json: bool,
) -> Result<()> {
    let service =
        RecommendationService::new(store).with_config(EngineConfig::default().with_limit(limit));
    let recommendations = service
        .recommend(&request)
        .context("Failed to get recommendations")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&recommendations)?);
    } else {
        print_recommendations(&recommendations);
    }
    Ok(())
}

/// Handle the 'search' command
fn handle_search(store: &ArtifactStore, title: &str) -> Result<()> {
    let catalog = store.catalog().context("Movie data not available")?;
    let needle = title.to_lowercase();

    // (exact match?, item)
    let mut matches: Vec<(bool, &CatalogItem)> = catalog
        .iter()
        .filter_map(|item| {
            let haystack = item.title.to_lowercase();
            haystack.contains(&needle).then(|| (haystack == needle, item))
        })
        .collect();

    // Exact matches first, then best rated
    matches.sort_by(|a, b| {
        b.0.cmp(&a.0).then_with(|| match (a.1.rating, b.1.rating) {
            (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        })
    });

    println!("{}", format!("Search results for '{}':", title).bold().blue());
    if matches.is_empty() {
        println!("  no movies found");
    }
    for (_, item) in matches.iter().take(20) {
        println!(
            "{}: {} ({}) [{}] rating {} - {}",
            item.id,
            item.title,
            item.year.map(|y| y.to_string()).unwrap_or_else(|| "????".to_string()),
            item.genres.join(", "),
            item.rating.map(|r| format!("{:.1}", r)).unwrap_or_else(|| "n/a".to_string()),
            item.region.unwrap_or_default()
        );
    }
    Ok(())
}

/// Handle the 'stats' command
fn handle_stats(store: &ArtifactStore) -> Result<()> {
    let catalog = store.catalog().context("Movie data not available")?;

    let mut per_region: HashMap<Region, usize> = HashMap::new();
    for item in catalog {
        *per_region.entry(item.region.unwrap_or_default()).or_insert(0) += 1;
    }

    println!("{}", "Catalog".bold().blue());
    println!("{}Movies: {}", "• ".green(), catalog.len());
    println!("{}Rows in file: {}", "• ".green(), catalog.source_rows());
    println!("{}", "Artifacts".bold().blue());
    for name in store.loaded_artifacts() {
        println!("{}{}", "• ".green(), name);
    }
    println!("{}", "Regions".bold().blue());
    for region in Region::ALL {
        println!(
            "{}{}: {}",
            "• ".cyan(),
            region,
            per_region.get(&region).copied().unwrap_or(0)
        );
    }
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(
    store: Arc<ArtifactStore>,
    requests: usize,
    concurrent: usize,
) -> Result<()> {
    let service = RecommendationService::new(store);
    let permits = Arc::new(Semaphore::new(concurrent.max(1)));

    let wall_clock = Instant::now();
    let mut handles = vec![];
    for request in (0..requests).map(|_| random_request()) {
        let service = service.clone();
        let permit = permits.clone().acquire_owned().await?;
        let handle = tokio::task::spawn_blocking(move || {
            let _permit = permit;
            let start = Instant::now();
            service.recommend(&request)?;
            Ok::<_, anyhow::Error>(start.elapsed())
        });
        handles.push(handle);
    }

    // Wait for all tasks to complete and collect timings
    let mut timings = vec![];
    for handle in handles {
        let elapsed = handle.await.context("Benchmark task panicked")??;
        timings.push(elapsed);
    }
    let total_time = wall_clock.elapsed();

    if timings.is_empty() {
        println!("No requests made");
        return Ok(());
    }

    timings.sort();
    let busy: Duration = timings.iter().sum();
    let avg_latency = busy / timings.len() as u32;
    let percentile = |p: f32| timings[((timings.len() as f32 * p) as usize).min(timings.len() - 1)];
    let throughput = timings.len() as f32 / total_time.as_secs_f32();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Requests: {} ({} concurrent)", timings.len(), concurrent.max(1));
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// A preference request with every field picked at random
fn random_request() -> PreferenceRequest {
    const KINDS: &[(&str, &[&str])] = &[
        ("content", &[""]),
        ("mood", &["happy", "sad", "excited", "relaxed", "thoughtful", "romantic"]),
        ("discovery", &["hidden", "underrated", "cult", "awards"]),
        ("regional", &["Hollywood", "Bollywood", "Tollywood", "Kollywood"]),
        ("", &[""]),
    ];
    const GENRES: &[&str] = &["any", "Action", "Comedy", "Drama", "Romance", "Thriller"];
    const PERIODS: &[&str] = &["any", "classic", "modern", "recent"];
    const RATINGS: &[&str] = &["any-rating", "high-rated"];
    const POPULARITY: &[&str] = &["any", "popular", "lesser-known"];

    let mut rng = rand::rng();
    let (kind, sub_types) = KINDS[rng.random_range(0..KINDS.len())];
    let mut pick = |options: &[&'static str]| options[rng.random_range(0..options.len())];

    PreferenceRequest::new(kind, pick(sub_types))
        .with_genres([pick(GENRES)])
        .with_time_period(pick(PERIODS))
        .with_rating(pick(RATINGS))
        .with_popularity(pick(POPULARITY))
}

/// Helper function to format and print recommendations
fn print_recommendations(recommendations: &[Recommendation]) {
    println!("{}", "Movie Recommendations:".bold().blue());
    if recommendations.is_empty() {
        println!("  nothing matched these preferences");
    }
    for (i, rec) in recommendations.iter().enumerate() {
        println!(
            "{}. {} ({}) [{}] - Rating: {:.1} - {}",
            (i + 1).to_string().green(),
            rec.title.bold(),
            rec.year,
            rec.genres.join(", "),
            rec.rating,
            rec.region.cyan()
        );
    }
}
