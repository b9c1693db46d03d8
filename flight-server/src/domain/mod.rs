//! Domain types for the flight feed analyzer.
//!
//! This module contains the core domain model types that represent
//! validated itinerary data. All types enforce their invariants at
//! construction time, so code that receives these types can trust
//! their validity.

mod airport;
mod error;
mod fare;
mod route;
mod segment;
mod time;

pub use airport::{AirportCode, InvalidAirportCode};
pub use error::DomainError;
pub use fare::Fare;
pub use route::{Route, RouteSummary};
pub use segment::Segment;
pub use time::{TimeError, TravelTime, parse_feed_timestamp};
