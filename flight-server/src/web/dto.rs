//! Data transfer objects for web requests and responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Route, RouteSummary, Segment};

/// Display format for segment timestamps in responses.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Query parameters for the sorted flight listings.
#[derive(Debug, Deserialize)]
pub struct SortQuery {
    /// Sort descending instead of ascending
    pub reverse: Option<bool>,
}

/// Query parameters for direction filtering.
#[derive(Debug, Deserialize)]
pub struct DirectionQuery {
    /// Departure airport code
    pub source: String,

    /// Final destination airport code
    pub destination: String,
}

/// Query parameters for route enumeration.
#[derive(Debug, Deserialize)]
pub struct RoutesQuery {
    /// Return the set of airports instead of route summaries
    pub airports: Option<bool>,
}

/// Query parameters for optimal route selection.
#[derive(Debug, Deserialize)]
pub struct OptimalQuery {
    /// Departure airport code
    pub source: String,

    /// Final destination airport code
    pub destination: String,

    /// Maximum number of routes to return
    pub count: Option<usize>,
}

/// A flight segment in responses.
#[derive(Debug, Serialize)]
pub struct SegmentResult {
    /// Departure airport code
    pub source: String,

    /// Arrival airport code
    pub destination: String,

    /// Departure time
    pub departure: String,

    /// Arrival time
    pub arrival: String,

    /// Remaining feed fields (carrier, flight number, ...)
    pub details: BTreeMap<String, String>,
}

impl SegmentResult {
    fn from_segment(segment: &Segment) -> Self {
        Self {
            source: segment.source().to_string(),
            destination: segment.destination().to_string(),
            departure: segment.departure().format(TIMESTAMP_FORMAT).to_string(),
            arrival: segment.arrival().format(TIMESTAMP_FORMAT).to_string(),
            details: segment.details().clone(),
        }
    }
}

/// The fare of a flight in responses.
#[derive(Debug, Serialize)]
pub struct FareResult {
    /// Ticket amount
    pub amount: f64,

    /// Currency code
    pub currency: String,
}

/// A flight (priced itinerary) in responses.
#[derive(Debug, Serialize)]
pub struct FlightResult {
    /// Segments in travel order
    pub segments: Vec<SegmentResult>,

    /// Ticket price shared by all segments
    pub price: FareResult,

    /// Human-readable total travel time, e.g. "6h 45m"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_travel_time: Option<String>,
}

impl FlightResult {
    /// Build a response record from a route.
    pub fn from_route(route: &Route) -> Self {
        Self {
            segments: route
                .segments()
                .iter()
                .map(SegmentResult::from_segment)
                .collect(),
            price: FareResult {
                amount: route.fare().amount(),
                currency: route.fare().currency().to_string(),
            },
            total_travel_time: route.total_travel_time().map(|t| t.to_string()),
        }
    }
}

/// Response carrying a list of flights.
#[derive(Debug, Serialize)]
pub struct FlightsResponse {
    /// Matching flights
    pub flights: Vec<FlightResult>,
}

impl FlightsResponse {
    /// Build the response from a list of routes.
    pub fn from_routes(routes: &[Route]) -> Self {
        Self {
            flights: routes.iter().map(FlightResult::from_route).collect(),
        }
    }
}

/// A distinct route in responses.
#[derive(Debug, Serialize)]
pub struct RouteSummaryResult {
    /// Departure airport code
    pub source: String,

    /// Layover airport code, absent for direct routes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer: Option<String>,

    /// Final destination airport code
    pub destination: String,
}

impl RouteSummaryResult {
    /// Build a response record from a summary.
    pub fn from_summary(summary: &RouteSummary) -> Self {
        Self {
            source: summary.source.to_string(),
            transfer: summary.transfer.map(|code| code.to_string()),
            destination: summary.destination.to_string(),
        }
    }
}

/// Response carrying distinct route summaries.
#[derive(Debug, Serialize)]
pub struct RoutesResponse {
    /// Distinct routes
    pub routes: Vec<RouteSummaryResult>,
}

/// Response carrying the set of known airports.
#[derive(Debug, Serialize)]
pub struct AirportsResponse {
    /// Airport codes in lexicographic order
    pub airports: Vec<String>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error description
    pub error: String,
}
