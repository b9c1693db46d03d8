//! Document-bound query façade.

use std::collections::BTreeSet;

use crate::domain::{AirportCode, Route, RouteSummary};
use crate::feed::{FeedError, FlightFeed};

use super::annotate::annotate_travel_times;
use super::query::{airport_set, distinct_routes, filter_by_direction};
use super::rank;

/// Number of routes `optimal_routes` returns when the caller does not
/// ask for a specific count.
pub const DEFAULT_OPTIMAL_COUNT: usize = 10;

/// Query façade over a loaded flight feed.
///
/// Every method re-extracts the route set from the document, so calls
/// share no state and results cannot go stale. The feed is immutable
/// after load, which makes the analyzer freely shareable across
/// threads.
pub struct Analyzer {
    feed: FlightFeed,
}

impl Analyzer {
    /// Create an analyzer over a loaded feed.
    pub fn new(feed: FlightFeed) -> Self {
        Self { feed }
    }

    /// All flights in document order, annotated with total travel time.
    pub fn all_flights(&self) -> Result<Vec<Route>, FeedError> {
        Ok(annotate_travel_times(self.feed.extract_routes()?))
    }

    /// All flights departing `source` and finally arriving at
    /// `destination`, in document order.
    pub fn flights_by_direction(
        &self,
        source: &AirportCode,
        destination: &AirportCode,
    ) -> Result<Vec<Route>, FeedError> {
        Ok(filter_by_direction(
            self.all_flights()?,
            source,
            destination,
        ))
    }

    /// Every distinct {source, transfer, destination} route in the feed.
    pub fn all_routes(&self) -> Result<Vec<RouteSummary>, FeedError> {
        Ok(distinct_routes(&self.all_flights()?))
    }

    /// Every airport named by any route, in any role.
    pub fn airports(&self) -> Result<BTreeSet<AirportCode>, FeedError> {
        Ok(airport_set(&self.all_flights()?))
    }

    /// Up to `count` flights for the direction, ranked by combined
    /// time/price rank (best first).
    pub fn optimal_routes(
        &self,
        source: &AirportCode,
        destination: &AirportCode,
        count: usize,
    ) -> Result<Vec<Route>, FeedError> {
        Ok(rank::optimal_routes(
            self.flights_by_direction(source, destination)?,
            count,
        ))
    }
}
