//! Travel time annotation.

use crate::domain::Route;

/// Attach `TotalTravelTime` to every route.
///
/// One output route per input route, order preserved. Each total is the
/// sum of that route's own segment durations; nothing else about the
/// route changes.
pub fn annotate_travel_times(routes: Vec<Route>) -> Vec<Route> {
    routes
        .into_iter()
        .map(Route::with_total_travel_time)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::Duration;

    use super::*;
    use crate::domain::{AirportCode, Fare, Segment, TravelTime, parse_feed_timestamp};

    fn code(s: &str) -> AirportCode {
        AirportCode::parse(s).unwrap()
    }

    fn segment(source: &str, destination: &str, start: &str, minutes: i64) -> Segment {
        let departure = parse_feed_timestamp(start).unwrap();
        Segment::new(
            code(source),
            code(destination),
            departure,
            departure + Duration::minutes(minutes),
            BTreeMap::new(),
        )
        .unwrap()
    }

    fn direct(source: &str, destination: &str, minutes: i64) -> Route {
        Route::new(
            vec![segment(source, destination, "2018-10-22T0600", minutes)],
            Fare::new(100.0, "USD"),
        )
        .unwrap()
    }

    #[test]
    fn annotates_every_route_in_order() {
        let routes = vec![
            direct("JFK", "LAX", 370),
            direct("DXB", "DEL", 280),
            direct("DEL", "BKK", 255),
        ];

        let annotated = annotate_travel_times(routes);

        assert_eq!(annotated.len(), 3);
        assert_eq!(
            annotated[0].total_travel_time(),
            Some(TravelTime::from_minutes(370))
        );
        assert_eq!(
            annotated[1].total_travel_time(),
            Some(TravelTime::from_minutes(280))
        );
        assert_eq!(
            annotated[2].total_travel_time(),
            Some(TravelTime::from_minutes(255))
        );
        // Order follows the input
        assert_eq!(annotated[0].source(), &code("JFK"));
        assert_eq!(annotated[2].source(), &code("DEL"));
    }

    #[test]
    fn layover_time_is_not_travel_time() {
        let route = Route::new(
            vec![
                segment("JFK", "ORD", "2018-10-22T0800", 150),
                // Second leg departs 90 minutes after the first arrives
                segment("ORD", "LAX", "2018-10-22T1200", 255),
            ],
            Fare::new(310.5, "USD"),
        )
        .unwrap();

        let annotated = annotate_travel_times(vec![route]);

        assert_eq!(
            annotated[0].total_travel_time(),
            Some(TravelTime::from_minutes(405))
        );
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(annotate_travel_times(vec![]).is_empty());
    }

    #[test]
    fn resumming_segments_matches_the_annotation() {
        let routes = vec![
            direct("JFK", "LAX", 370),
            Route::new(
                vec![
                    segment("DXB", "DEL", "2018-10-22T0005", 280),
                    segment("DEL", "BKK", "2018-10-22T0600", 255),
                ],
                Fare::new(546.8, "SGD"),
            )
            .unwrap(),
        ];

        for route in annotate_travel_times(routes) {
            let resummed: TravelTime = route.segments().iter().map(Segment::duration).sum();
            assert_eq!(route.total_travel_time(), Some(resummed));
        }
    }
}
