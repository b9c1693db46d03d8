use std::net::SocketAddr;

use flight_server::analysis::Analyzer;
use flight_server::feed::FlightFeed;
use flight_server::web::{AppState, create_router};

/// Feed location when FLIGHT_FEED_PATH is not set.
const DEFAULT_FEED_PATH: &str = "data/flights.xml";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let feed_path =
        std::env::var("FLIGHT_FEED_PATH").unwrap_or_else(|_| DEFAULT_FEED_PATH.to_string());

    // Load and validate the whole feed up front so a malformed document
    // fails the process instead of the first query
    let feed = FlightFeed::from_path(&feed_path)
        .unwrap_or_else(|e| panic!("failed to read feed {feed_path}: {e}"));
    let analyzer = Analyzer::new(feed);
    let flights = analyzer
        .all_flights()
        .unwrap_or_else(|e| panic!("malformed feed {feed_path}: {e}"));
    println!("Loaded {} flights from {}", flights.len(), feed_path);

    // Build app state
    let state = AppState::new(analyzer);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Flight feed analyzer listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET /health                   - Health check");
    println!("  GET /flights                  - All flights with total travel time");
    println!("  GET /flights/sorted-by-price  - Flights by ticket price (?reverse=true)");
    println!("  GET /flights/sorted-by-time   - Flights by travel time (?reverse=true)");
    println!("  GET /flights/direction        - Flights for ?source=&destination=");
    println!("  GET /routes                   - Distinct routes (?airports=true for the airport set)");
    println!("  GET /routes/optimal           - Best flights for ?source=&destination= (&count=)");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
