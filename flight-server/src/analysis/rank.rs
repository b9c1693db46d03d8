//! Optimal route selection.
//!
//! Time and price have no shared unit, so instead of mixing raw values
//! the ranker compares relative rank: each route's weight is the sum of
//! its 0-based position in the time-ascending ordering and in the
//! price-ascending ordering, and the lowest weights win. Ties keep
//! extraction order.

use crate::domain::Route;

/// Pick up to `count` routes with the best combined time/price rank.
///
/// The input is expected to be a direction-filtered, annotated route
/// set. If fewer than `count` routes exist they are all returned; an
/// empty input yields an empty result.
pub fn optimal_routes(routes: Vec<Route>, count: usize) -> Vec<Route> {
    let total = routes.len();

    // Rank positions are computed over indices; both sorts are stable,
    // so equal times or fares keep their extraction order
    let mut by_time: Vec<usize> = (0..total).collect();
    by_time.sort_by(|&a, &b| {
        routes[a]
            .total_travel_time()
            .cmp(&routes[b].total_travel_time())
    });

    let mut by_price: Vec<usize> = (0..total).collect();
    by_price.sort_by(|&a, &b| routes[a].fare().cmp_amount(routes[b].fare()));

    let mut weights = vec![0usize; total];
    for (position, &index) in by_time.iter().enumerate() {
        weights[index] += position;
    }
    for (position, &index) in by_price.iter().enumerate() {
        weights[index] += position;
    }

    let mut weighted: Vec<(usize, Route)> = routes
        .into_iter()
        .enumerate()
        .map(|(index, route)| (weights[index], route))
        .collect();
    weighted.sort_by_key(|(weight, _)| *weight);
    weighted.truncate(count);

    weighted.into_iter().map(|(_, route)| route).collect()
}


#[cfg(test)]
mod proptests {
    use std::collections::BTreeMap;

    use chrono::Duration;
    use proptest::prelude::*;

    use super::*;
    use crate::domain::{AirportCode, Fare, Segment, parse_feed_timestamp};

    fn route_strategy() -> impl Strategy<Value = Route> {
        (60i64..1200, 1u32..50).prop_map(|(minutes, price)| {
            let departure = parse_feed_timestamp("2018-10-22T0600").unwrap();
            let segment = Segment::new(
                AirportCode::parse("JFK").unwrap(),
                AirportCode::parse("LAX").unwrap(),
                departure,
                departure + Duration::minutes(minutes),
                BTreeMap::new(),
            )
            .unwrap();

            Route::new(vec![segment], Fare::new(f64::from(price) * 25.0, "USD"))
                .unwrap()
                .with_total_travel_time()
        })
    }

    proptest! {
        /// Never returns more than `count` routes
        #[test]
        fn bounded_by_count(
            routes in prop::collection::vec(route_strategy(), 0..20),
            count in 0usize..15,
        ) {
            let total = routes.len();
            let best = optimal_routes(routes, count);
            prop_assert_eq!(best.len(), total.min(count));
        }

        /// Output routes all come from the input (by time/price key)
        #[test]
        fn output_is_a_sub_multiset(routes in prop::collection::vec(route_strategy(), 0..20)) {
            let mut available: Vec<_> = routes
                .iter()
                .map(|r| (r.total_travel_time(), r.fare().amount().to_bits()))
                .collect();

            for route in optimal_routes(routes.clone(), 10) {
                let key = (route.total_travel_time(), route.fare().amount().to_bits());
                let position = available.iter().position(|k| *k == key);
                prop_assert!(position.is_some());
                available.swap_remove(position.unwrap());
            }
        }
    }
}
