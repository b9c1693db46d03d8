//! Sorting, filtering, and route-set deduplication.
//!
//! All operations are pure: they consume or borrow a route list and
//! return a new sequence, leaving the inputs untouched. Sorts are
//! stable, so routes with equal keys keep their extraction order.

use std::collections::{BTreeSet, HashSet};

use crate::domain::{AirportCode, Route, RouteSummary};

/// Sort routes by ticket price, ascending unless `descending`.
pub fn sort_by_price(mut routes: Vec<Route>, descending: bool) -> Vec<Route> {
    routes.sort_by(|a, b| {
        let ordering = a.fare().cmp_amount(b.fare());
        if descending { ordering.reverse() } else { ordering }
    });
    routes
}

/// Sort routes by total travel time, ascending unless `descending`.
///
/// Expects annotated routes; an un-annotated route sorts before every
/// annotated one.
pub fn sort_by_travel_time(mut routes: Vec<Route>, descending: bool) -> Vec<Route> {
    routes.sort_by(|a, b| {
        let ordering = a.total_travel_time().cmp(&b.total_travel_time());
        if descending { ordering.reverse() } else { ordering }
    });
    routes
}

/// Keep only routes departing `source` and finally arriving at
/// `destination`, in their original order.
///
/// The transfer point does not matter: a one-stop route counts if its
/// last leg lands at `destination`.
pub fn filter_by_direction(
    routes: Vec<Route>,
    source: &AirportCode,
    destination: &AirportCode,
) -> Vec<Route> {
    routes
        .into_iter()
        .filter(|route| route.source() == source && route.final_destination() == destination)
        .collect()
}

/// One summary per distinct {source, transfer, destination} triple, in
/// first-seen order.
pub fn distinct_routes(routes: &[Route]) -> Vec<RouteSummary> {
    let mut seen = HashSet::new();
    let mut distinct = Vec::new();

    for route in routes {
        let summary = route.summary();
        if seen.insert(summary) {
            distinct.push(summary);
        }
    }

    distinct
}

/// Every airport appearing in any route, whether as source, transfer,
/// or destination.
pub fn airport_set(routes: &[Route]) -> BTreeSet<AirportCode> {
    let mut airports = BTreeSet::new();

    for route in routes {
        let summary = route.summary();
        airports.insert(summary.source);
        airports.extend(summary.transfer);
        airports.insert(summary.destination);
    }

    airports
}
