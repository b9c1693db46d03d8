//! Conversion from raw feed records to validated domain routes.
//!
//! Hoists the fields the query layer depends on (endpoints, times,
//! price) out of the raw field maps into typed values. Anything the
//! conversion cannot type is a data error that surfaces to the caller;
//! nothing is defaulted.

use std::collections::BTreeMap;

use crate::domain::{AirportCode, DomainError, Fare, Route, Segment, parse_feed_timestamp};

use super::parser::RawItinerary;

const SOURCE_FIELD: &str = "Source";
const DESTINATION_FIELD: &str = "Destination";
const DEPARTURE_FIELD: &str = "DepartureTimeStamp";
const ARRIVAL_FIELD: &str = "ArrivalTimeStamp";

/// Error during raw record to domain conversion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    /// Segment is missing a required field
    #[error("itinerary {itinerary} segment {segment} is missing {field}")]
    MissingField {
        itinerary: usize,
        segment: usize,
        field: &'static str,
    },

    /// Segment field present but unparsable
    #[error("itinerary {itinerary} segment {segment} has invalid {field} {value:?}")]
    InvalidField {
        itinerary: usize,
        segment: usize,
        field: &'static str,
        value: String,
    },

    /// Ticket price is not a finite decimal number
    #[error("itinerary {itinerary} has unparsable ticket price {value:?}")]
    InvalidPrice { itinerary: usize, value: String },

    /// Record violates a domain invariant
    #[error("itinerary {itinerary} is invalid: {source}")]
    Domain {
        itinerary: usize,
        source: DomainError,
    },
}

/// Convert one raw itinerary into a domain route.
///
/// `itinerary` is the record's 1-based position in document order, used
/// only for error messages.
pub fn convert_itinerary(raw: RawItinerary, itinerary: usize) -> Result<Route, ConversionError> {
    let mut segments = Vec::with_capacity(raw.segments.len());

    for (index, mut fields) in raw.segments.into_iter().enumerate() {
        let segment = index + 1;

        let source = parse_airport(&mut fields, SOURCE_FIELD, itinerary, segment)?;
        let destination = parse_airport(&mut fields, DESTINATION_FIELD, itinerary, segment)?;
        let departure = parse_time(&mut fields, DEPARTURE_FIELD, itinerary, segment)?;
        let arrival = parse_time(&mut fields, ARRIVAL_FIELD, itinerary, segment)?;

        // The typed fields are hoisted out; whatever remains stays as
        // open-ended segment details
        let segment = Segment::new(source, destination, departure, arrival, fields)
            .map_err(|source| ConversionError::Domain { itinerary, source })?;
        segments.push(segment);
    }

    let amount: f64 =
        raw.ticket_price
            .trim()
            .parse()
            .map_err(|_| ConversionError::InvalidPrice {
                itinerary,
                value: raw.ticket_price.clone(),
            })?;
    if !amount.is_finite() {
        return Err(ConversionError::InvalidPrice {
            itinerary,
            value: raw.ticket_price,
        });
    }

    Route::new(segments, Fare::new(amount, raw.currency))
        .map_err(|source| ConversionError::Domain { itinerary, source })
}

fn take_field(
    fields: &mut BTreeMap<String, String>,
    field: &'static str,
    itinerary: usize,
    segment: usize,
) -> Result<String, ConversionError> {
    fields
        .remove(field)
        .ok_or(ConversionError::MissingField {
            itinerary,
            segment,
            field,
        })
}

fn parse_airport(
    fields: &mut BTreeMap<String, String>,
    field: &'static str,
    itinerary: usize,
    segment: usize,
) -> Result<AirportCode, ConversionError> {
    let value = take_field(fields, field, itinerary, segment)?;
    AirportCode::parse(&value).map_err(|_| ConversionError::InvalidField {
        itinerary,
        segment,
        field,
        value,
    })
}

fn parse_time(
    fields: &mut BTreeMap<String, String>,
    field: &'static str,
    itinerary: usize,
    segment: usize,
) -> Result<chrono::NaiveDateTime, ConversionError> {
    let value = take_field(fields, field, itinerary, segment)?;
    parse_feed_timestamp(&value).map_err(|_| ConversionError::InvalidField {
        itinerary,
        segment,
        field,
        value,
    })
}
