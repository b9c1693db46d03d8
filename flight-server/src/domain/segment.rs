//! Flight segment types.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;

use super::{AirportCode, DomainError, TravelTime};

/// One non-stop leg of an itinerary.
///
/// The endpoints and times required by the query layer are typed fields;
/// everything else the feed says about the leg (carrier, flight number,
/// booking class, ...) is kept verbatim in `details`, keyed by the feed's
/// own tag names. The feed has no fixed schema for those.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    source: AirportCode,
    destination: AirportCode,
    departure: NaiveDateTime,
    arrival: NaiveDateTime,
    details: BTreeMap<String, String>,
}

impl Segment {
    /// Constructs a segment from validated parts.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the arrival time is before the departure time.
    pub fn new(
        source: AirportCode,
        destination: AirportCode,
        departure: NaiveDateTime,
        arrival: NaiveDateTime,
        details: BTreeMap<String, String>,
    ) -> Result<Self, DomainError> {
        if arrival < departure {
            return Err(DomainError::ArrivalBeforeDeparture {
                origin: source,
                destination,
            });
        }

        Ok(Self {
            source,
            destination,
            departure,
            arrival,
            details,
        })
    }

    /// Returns the departure airport.
    pub fn source(&self) -> &AirportCode {
        &self.source
    }

    /// Returns the arrival airport.
    pub fn destination(&self) -> &AirportCode {
        &self.destination
    }

    /// Returns the departure time.
    pub fn departure(&self) -> NaiveDateTime {
        self.departure
    }

    /// Returns the arrival time.
    pub fn arrival(&self) -> NaiveDateTime {
        self.arrival
    }

    /// Returns the time spent on this leg.
    pub fn duration(&self) -> TravelTime {
        TravelTime::from_duration(self.arrival - self.departure)
    }

    /// Returns all non-endpoint fields the feed carried for this leg.
    pub fn details(&self) -> &BTreeMap<String, String> {
        &self.details
    }

    /// Looks up a single feed field by its tag name.
    pub fn detail(&self, key: &str) -> Option<&str> {
        self.details.get(key).map(String::as_str)
    }
}
