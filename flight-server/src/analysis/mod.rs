//! Flight feed analysis.
//!
//! The query operations over extracted routes: travel time annotation,
//! price/time sorting, direction filtering, distinct route enumeration,
//! and combined time/price ranking. Everything here is pure and
//! synchronous; the `Analyzer` façade binds the operations to a loaded
//! feed document.

mod analyzer;
mod annotate;
mod query;
mod rank;

pub use analyzer::{Analyzer, DEFAULT_OPTIMAL_COUNT};
pub use annotate::annotate_travel_times;
pub use query::{
    airport_set, distinct_routes, filter_by_direction, sort_by_price, sort_by_travel_time,
};
pub use rank::optimal_routes;
