//! Route types.
//!
//! A `Route` represents one priced itinerary from the feed: an ordered
//! sequence of flight segments plus the fare shared by all of them.

use std::fmt;

use super::{AirportCode, DomainError, Fare, Segment, TravelTime};

/// A priced itinerary.
///
/// # Invariants
///
/// - At least one segment
/// - Segment order is travel order (segment 1 departs first)
/// - Exactly one fare, shared by all segments
/// - `total_travel_time` is `None` on freshly extracted routes and is
///   filled once by the annotator; it is never recomputed or mutated
///   afterwards
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    segments: Vec<Segment>,
    fare: Fare,
    total_travel_time: Option<TravelTime>,
}

impl Route {
    /// Constructs a raw (un-annotated) route.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the segment list is empty.
    pub fn new(segments: Vec<Segment>, fare: Fare) -> Result<Self, DomainError> {
        if segments.is_empty() {
            return Err(DomainError::EmptyRoute);
        }

        Ok(Self {
            segments,
            fare,
            total_travel_time: None,
        })
    }

    /// Returns all segments in travel order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the number of segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this route has no layover.
    pub fn is_direct(&self) -> bool {
        self.segments.len() == 1
    }

    /// Returns the fare.
    pub fn fare(&self) -> &Fare {
        &self.fare
    }

    /// Returns the departure airport of the whole itinerary.
    pub fn source(&self) -> &AirportCode {
        // Safe: validated non-empty at construction
        self.segments.first().unwrap().source()
    }

    /// Returns the arrival airport of the whole itinerary.
    pub fn final_destination(&self) -> &AirportCode {
        // Safe: validated non-empty at construction
        self.segments.last().unwrap().destination()
    }

    /// Returns the transfer airport, if the route has a layover.
    pub fn transfer(&self) -> Option<&AirportCode> {
        if self.is_direct() {
            None
        } else {
            Some(self.segments[0].destination())
        }
    }

    /// Returns the annotated total travel time, if set.
    pub fn total_travel_time(&self) -> Option<TravelTime> {
        self.total_travel_time
    }

    /// Returns a copy of this route with `total_travel_time` filled in
    /// as the sum of its segment durations.
    pub fn with_total_travel_time(mut self) -> Self {
        self.total_travel_time = Some(self.segments.iter().map(Segment::duration).sum());
        self
    }

    /// Returns the de-duplicated endpoint view of this route.
    pub fn summary(&self) -> RouteSummary {
        RouteSummary {
            source: *self.source(),
            transfer: self.transfer().copied(),
            destination: *self.final_destination(),
        }
    }
}

/// The endpoints of a route, ignoring times and pricing.
///
/// Two routes with the same source, transfer point, and destination map
/// to equal summaries; equality over the full triple is the
/// deduplication key for distinct-route enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteSummary {
    /// Departure airport
    pub source: AirportCode,
    /// Layover airport, absent for direct routes
    pub transfer: Option<AirportCode>,
    /// Arrival airport
    pub destination: AirportCode,
}

impl fmt::Display for RouteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.transfer {
            Some(transfer) => write!(f, "{}-{}-{}", self.source, transfer, self.destination),
            None => write!(f, "{}-{}", self.source, self.destination),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::domain::parse_feed_timestamp;

    fn code(s: &str) -> AirportCode {
        AirportCode::parse(s).unwrap()
    }

    fn segment(source: &str, destination: &str, dep: &str, arr: &str) -> Segment {
        Segment::new(
            code(source),
            code(destination),
            parse_feed_timestamp(dep).unwrap(),
            parse_feed_timestamp(arr).unwrap(),
            BTreeMap::new(),
        )
        .unwrap()
    }

    fn direct_route() -> Route {
        Route::new(
            vec![segment("JFK", "LAX", "2018-10-22T0800", "2018-10-22T1410")],
            Fare::new(420.0, "USD"),
        )
        .unwrap()
    }

    fn one_stop_route() -> Route {
        Route::new(
            vec![
                segment("JFK", "ORD", "2018-10-22T0800", "2018-10-22T1030"),
                segment("ORD", "LAX", "2018-10-22T1200", "2018-10-22T1615"),
            ],
            Fare::new(310.5, "USD"),
        )
        .unwrap()
    }

    #[test]
    fn empty_route_rejected() {
        let result = Route::new(vec![], Fare::new(100.0, "USD"));
        assert!(matches!(result, Err(DomainError::EmptyRoute)));
    }

    #[test]
    fn direct_route_endpoints() {
        let route = direct_route();

        assert!(route.is_direct());
        assert_eq!(route.segment_count(), 1);
        assert_eq!(route.source(), &code("JFK"));
        assert_eq!(route.final_destination(), &code("LAX"));
        assert_eq!(route.transfer(), None);
    }

    #[test]
    fn one_stop_route_endpoints() {
        let route = one_stop_route();

        assert!(!route.is_direct());
        assert_eq!(route.segment_count(), 2);
        assert_eq!(route.source(), &code("JFK"));
        assert_eq!(route.final_destination(), &code("LAX"));
        assert_eq!(route.transfer(), Some(&code("ORD")));
    }

    #[test]
    fn raw_route_has_no_travel_time() {
        assert_eq!(direct_route().total_travel_time(), None);
    }

    #[test]
    fn annotation_sums_segment_durations() {
        let route = one_stop_route().with_total_travel_time();

        // 150 min + 255 min, layover time excluded
        assert_eq!(
            route.total_travel_time(),
            Some(TravelTime::from_minutes(405))
        );
    }

    #[test]
    fn annotation_preserves_everything_else() {
        let raw = one_stop_route();
        let annotated = raw.clone().with_total_travel_time();

        assert_eq!(annotated.segments(), raw.segments());
        assert_eq!(annotated.fare(), raw.fare());
    }

    #[test]
    fn summary_direct() {
        let summary = direct_route().summary();

        assert_eq!(summary.source, code("JFK"));
        assert_eq!(summary.transfer, None);
        assert_eq!(summary.destination, code("LAX"));
        assert_eq!(summary.to_string(), "JFK-LAX");
    }

    #[test]
    fn summary_one_stop() {
        let summary = one_stop_route().summary();

        assert_eq!(summary.transfer, Some(code("ORD")));
        assert_eq!(summary.to_string(), "JFK-ORD-LAX");
    }

    #[test]
    fn summaries_distinguish_direct_from_one_stop() {
        // Same endpoints, different shape: both must survive dedup
        let direct = direct_route().summary();
        let one_stop = one_stop_route().summary();

        assert_ne!(direct, one_stop);

        use std::collections::HashSet;
        let set: HashSet<_> = [direct, one_stop, direct].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
