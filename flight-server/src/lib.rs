//! Flight itinerary feed analyzer.
//!
//! Parses a static XML feed of priced flight itineraries and answers
//! queries over it: sorting by price or travel time, direction
//! filtering, distinct route enumeration, and combined time/price
//! ranking.

pub mod analysis;
pub mod domain;
pub mod feed;
pub mod web;
