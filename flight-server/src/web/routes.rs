//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};

use crate::analysis::{self, DEFAULT_OPTIMAL_COUNT};
use crate::domain::AirportCode;
use crate::feed::FeedError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/flights", get(all_flights))
        .route("/flights/sorted-by-price", get(flights_sorted_by_price))
        .route("/flights/sorted-by-time", get(flights_sorted_by_time))
        .route("/flights/direction", get(flights_by_direction))
        .route("/routes", get(all_routes))
        .route("/routes/optimal", get(optimal_routes))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// All flights, annotated with total travel time, in feed order.
async fn all_flights(State(state): State<AppState>) -> Result<Json<FlightsResponse>, AppError> {
    let flights = state.analyzer.all_flights()?;
    Ok(Json(FlightsResponse::from_routes(&flights)))
}

/// All flights sorted by ticket price.
async fn flights_sorted_by_price(
    State(state): State<AppState>,
    Query(req): Query<SortQuery>,
) -> Result<Json<FlightsResponse>, AppError> {
    let flights = state.analyzer.all_flights()?;
    let flights = analysis::sort_by_price(flights, req.reverse.unwrap_or(false));
    Ok(Json(FlightsResponse::from_routes(&flights)))
}

/// All flights sorted by total travel time.
async fn flights_sorted_by_time(
    State(state): State<AppState>,
    Query(req): Query<SortQuery>,
) -> Result<Json<FlightsResponse>, AppError> {
    let flights = state.analyzer.all_flights()?;
    let flights = analysis::sort_by_travel_time(flights, req.reverse.unwrap_or(false));
    Ok(Json(FlightsResponse::from_routes(&flights)))
}

/// Flights for one direction, ignoring transfer points.
async fn flights_by_direction(
    State(state): State<AppState>,
    Query(req): Query<DirectionQuery>,
) -> Result<Json<FlightsResponse>, AppError> {
    let source = parse_airport(&req.source, "source")?;
    let destination = parse_airport(&req.destination, "destination")?;

    let flights = state.analyzer.flights_by_direction(&source, &destination)?;
    Ok(Json(FlightsResponse::from_routes(&flights)))
}

/// Distinct routes, or the airport set when `airports=true`.
async fn all_routes(
    State(state): State<AppState>,
    Query(req): Query<RoutesQuery>,
) -> Result<Response, AppError> {
    if req.airports.unwrap_or(false) {
        let airports = state
            .analyzer
            .airports()?
            .iter()
            .map(|code| code.to_string())
            .collect();
        Ok(Json(AirportsResponse { airports }).into_response())
    } else {
        let routes = state
            .analyzer
            .all_routes()?
            .iter()
            .map(RouteSummaryResult::from_summary)
            .collect();
        Ok(Json(RoutesResponse { routes }).into_response())
    }
}

/// Best flights for a direction by combined time/price rank.
async fn optimal_routes(
    State(state): State<AppState>,
    Query(req): Query<OptimalQuery>,
) -> Result<Json<FlightsResponse>, AppError> {
    let source = parse_airport(&req.source, "source")?;
    let destination = parse_airport(&req.destination, "destination")?;
    let count = req.count.unwrap_or(DEFAULT_OPTIMAL_COUNT);

    let flights = state
        .analyzer
        .optimal_routes(&source, &destination, count)?;
    Ok(Json(FlightsResponse::from_routes(&flights)))
}

fn parse_airport(value: &str, role: &str) -> Result<AirportCode, AppError> {
    AirportCode::parse(value).map_err(|_| AppError::BadRequest {
        message: format!("invalid {role} airport code: {value}"),
    })
}

/// Application-level errors with HTTP mappings.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<FeedError> for AppError {
    fn from(e: FeedError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        tracing::error!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
