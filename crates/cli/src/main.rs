use anyhow::{anyhow, Context, Result};
use browser::{movie_route, CatalogBrowser, DetailOutcome, MOVIE_ROUTE_PREFIX};
use catalog::{Catalog, MovieRecord};
use clap::{Parser, Subcommand};
use colored::Colorize;
use query::{GenreFilter, QueryParameters, SortDirection, SortKey};
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tracing::info;

/// MovieScope - Browse, search and sort the movie catalog
#[derive(Parser)]
#[command(name = "moviescope")]
#[command(about = "Discover films: search, filter and sort the movie catalog", long_about = None)]
struct Cli {
    /// Directory of *.json catalog files (defaults to the built-in catalog)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the featured movies (home screen)
    Featured {
        /// Search title, director and description (case-insensitive)
        #[arg(long, default_value = "")]
        search: String,

        /// Only show this genre
        #[arg(long, default_value = "")]
        genre: String,
    },

    /// List the whole catalog (all movies screen)
    List {
        /// Search title, director and description (case-insensitive)
        #[arg(long, default_value = "")]
        search: String,

        /// Only show this genre
        #[arg(long, default_value = "")]
        genre: String,

        /// Sort by title, year or rating
        #[arg(long, default_value = "title")]
        sort: SortKey,

        /// Sort order: asc or desc
        #[arg(long, default_value = "asc")]
        order: SortDirection,
    },

    /// List the genres in the catalog
    Genres,

    /// Show one movie's details
    Show {
        /// Movie ID to display, or its route (e.g. /movie/5)
        #[arg(long)]
        id: String,
    },

    /// Run benchmark to test query performance
    Benchmark {
        /// Number of queries to run
        #[arg(long, default_value = "1000")]
        requests: usize,

        /// Number of concurrent queries
        #[arg(long, default_value = "8")]
        concurrent: usize,
    },
}

#[derive(Serialize)]
struct ListOutput<'a> {
    summary: &'a str,
    total_matches: usize,
    movies: &'a [&'a MovieRecord],
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let catalog = Arc::new(load_catalog(&cli)?);
    info!("Loaded {} movies in {:?}", catalog.len(), start.elapsed());

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Featured { search, genre } => handle_featured(catalog, search, &genre, cli.json)?,
        Commands::List {
            search,
            genre,
            sort,
            order,
        } => handle_list(catalog, search, &genre, sort, order, cli.json)?,
        Commands::Genres => handle_genres(&catalog, cli.json)?,
        Commands::Show { id } => handle_show(catalog, &id, cli.json)?,
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(catalog, requests, concurrent).await?,
    }

    Ok(())
}

fn load_catalog(cli: &Cli) -> Result<Catalog> {
    match &cli.data_dir {
        Some(dir) => Catalog::load_from_dir(dir)
            .with_context(|| format!("Failed to load movie catalog from {}", dir.display())),
        None => catalog::builtin().context("Failed to load built-in movie catalog"),
    }
}

/// Handle the 'featured' command
fn handle_featured(catalog: Arc<Catalog>, search: String, genre: &str, json: bool) -> Result<()> {
    let mut browser = CatalogBrowser::new(catalog);
    let genre = browser.parse_genre(genre)?;
    browser.home_state().set_search(search);
    browser.home_state().set_genre(genre);

    let screen = browser.home();

    if json {
        let output = ListOutput {
            summary: &screen.summary,
            total_matches: screen.page.total_matches,
            movies: &screen.page.movies,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", "🌟 Featured Movies".bold().blue());
    println!("{}\n", screen.summary.dimmed());
    if let Some(message) = screen.empty_message {
        println!("{}", "No featured movies found".bold());
        println!("{}", message);
        return Ok(());
    }
    print_movies(&screen.page.movies);
    if screen.page.has_more {
        println!("\n{} {}", "→".green(), "View all movies: moviescope list".bold());
    }
    Ok(())
}

/// Handle the 'list' command
fn handle_list(
    catalog: Arc<Catalog>,
    search: String,
    genre: &str,
    sort: SortKey,
    order: SortDirection,
    json: bool,
) -> Result<()> {
    let mut browser = CatalogBrowser::new(catalog);
    let genre = browser.parse_genre(genre)?;
    let state = browser.catalog_state();
    state.set_search(search);
    state.set_genre(genre);
    // Replay the clicks that lead to the requested order
    state.toggle_sort(sort);
    if state.sort_direction() != order {
        state.toggle_sort(sort);
    }

    let screen = browser.all_movies();

    if json {
        let output = ListOutput {
            summary: &screen.summary,
            total_matches: screen.movies.len(),
            movies: &screen.movies,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", "🎬 All Movies".bold().blue());
    let buttons: Vec<String> = screen
        .sort_buttons
        .iter()
        .map(|(key, arrow)| match arrow {
            Some(arrow) => format!("{} {}", key, arrow).bold().to_string(),
            None => key.to_string(),
        })
        .collect();
    println!("Sort by: {}", buttons.join(" | "));
    println!("{}\n", screen.summary.dimmed());

    if let Some(message) = screen.empty_message {
        println!("{}", "No movies found".bold());
        println!("{}", message);
        return Ok(());
    }
    print_movies(&screen.movies);
    Ok(())
}

/// Handle the 'genres' command
fn handle_genres(catalog: &Catalog, json: bool) -> Result<()> {
    let genres = query::list_genres(catalog.records());

    if json {
        println!("{}", serde_json::to_string_pretty(&genres)?);
        return Ok(());
    }

    println!("{}", "Genres:".bold().blue());
    for genre in genres {
        let count = query::filter(
            catalog.records(),
            &QueryParameters::new().with_genre(GenreFilter::Only(genre.to_string())),
        )
        .len();
        println!("{}{} ({} movies)", "• ".green(), genre, count);
    }
    Ok(())
}

/// Handle the 'show' command
fn handle_show(catalog: Arc<Catalog>, id: &str, json: bool) -> Result<()> {
    let browser = CatalogBrowser::new(catalog);

    // Accept the route printed by `featured` and `list` as well as a bare id
    let id = id.strip_prefix(MOVIE_ROUTE_PREFIX).unwrap_or(id);
    let movie = match browser.movie_details(id) {
        DetailOutcome::Found(movie) => movie,
        DetailOutcome::NotFound(not_found) => {
            println!("{}", "Movie Not Found".bold().red());
            println!("{}", not_found.message);
            println!("{} Back to Home: {}", "←".green(), not_found.back_route);
            return Err(anyhow!("Movie {} not found", not_found.requested));
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(movie)?);
        return Ok(());
    }

    println!("{}", movie.title.bold().blue());
    let mut meta = vec![movie.year.to_string()];
    if let Some(duration) = &movie.duration {
        meta.push(duration.clone());
    }
    meta.push(movie.genre.clone());
    println!("{}", meta.join(" • ").dimmed());
    println!("{}Rating: ⭐ {}/10", "• ".cyan(), movie.rating);
    println!("{}Director: {}", "• ".cyan(), movie.director);
    println!("{}Poster: {}", "• ".cyan(), movie.poster);
    println!("\n{}", "Overview".bold());
    println!("{}", movie.description);
    if !movie.cast.is_empty() {
        println!("\n{}", "Cast".bold());
        println!("{}", movie.cast.join(", "));
    }
    Ok(())
}

/// Handle the 'benchmark' command
///
/// Every query runs on the blocking pool against the same shared catalog.
async fn handle_benchmark(
    catalog: Arc<Catalog>,
    requests: usize,
    concurrent: usize,
) -> Result<()> {
    if requests == 0 {
        return Err(anyhow!("--requests must be at least 1"));
    }

    let workload = random_workload(&catalog, requests);
    let semaphore = Arc::new(Semaphore::new(concurrent.max(1)));

    let wall_clock = Instant::now();
    let mut handles = Vec::with_capacity(requests);
    for params in workload {
        let permit = semaphore.clone().acquire_owned().await?;
        let catalog = catalog.clone();
        handles.push(tokio::task::spawn_blocking(move || {
            let _permit = permit;
            let start = Instant::now();
            let matched = query::query(catalog.records(), &params).len();
            (start.elapsed(), matched)
        }));
    }

    // Wait for all tasks to complete and collect timings
    let mut timings: Vec<Duration> = Vec::with_capacity(requests);
    let mut total_matches = 0usize;
    for handle in handles {
        let (elapsed, matched) = handle.await?;
        timings.push(elapsed);
        total_matches += matched;
    }
    let wall_time = wall_clock.elapsed();

    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let percentile = |p: f32| timings[((timings.len() - 1) as f32 * p) as usize];
    let throughput = requests as f64 / wall_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Queries: {} ({} concurrent)", requests, concurrent.max(1));
    println!("Total time: {:?}", wall_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} queries/second", throughput);
    println!("Average matches per query: {:.1}", total_matches as f64 / requests as f64);

    Ok(())
}

/// Random query parameters drawn from the catalog's own vocabulary
fn random_workload(catalog: &Catalog, requests: usize) -> Vec<QueryParameters> {
    let genres = query::list_genres(catalog.records());
    let words: Vec<&str> = catalog
        .records()
        .iter()
        .flat_map(|movie| movie.title.split_whitespace())
        .collect();
    let mut rng = rand::rng();

    (0..requests)
        .map(|_| {
            let search = match words.choose(&mut rng) {
                Some(word) if rng.random_bool(0.5) => word.to_string(),
                _ => String::new(),
            };
            let genre = match genres.choose(&mut rng) {
                Some(genre) if rng.random_bool(0.3) => GenreFilter::Only(genre.to_string()),
                _ => GenreFilter::All,
            };
            let key = SortKey::ALL[rng.random_range(0..SortKey::ALL.len())];
            let direction = if rng.random_bool(0.5) {
                SortDirection::Ascending
            } else {
                SortDirection::Descending
            };
            QueryParameters::new()
                .with_search(search)
                .with_genre(genre)
                .sorted_by(key, direction)
        })
        .collect()
}

/// Helper function to print movie cards
fn print_movies(movies: &[&MovieRecord]) {
    for (rank, movie) in movies.iter().enumerate() {
        println!(
            "{}. {} ({}) ⭐ {}/10 - {} - by {} {}",
            (rank + 1).to_string().green(),
            movie.title.bold(),
            movie.year,
            movie.rating,
            movie.genre,
            movie.director,
            movie_route(movie.id).as_str().dimmed()
        );
    }
}
