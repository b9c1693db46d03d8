//! Domain error types.
//!
//! These errors represent validation failures in the domain layer.
//! They are distinct from feed parsing/IO errors.

use super::AirportCode;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// Route has no segments
    #[error("route must have at least one segment")]
    EmptyRoute,

    /// Segment times are inverted
    #[error("segment {origin}-{destination} arrives before it departs")]
    ArrivalBeforeDeparture {
        origin: AirportCode,
        destination: AirportCode,
    },
}
