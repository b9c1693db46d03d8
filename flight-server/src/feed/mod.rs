//! Flight feed loading and route extraction.
//!
//! The feed is a static XML document of priced itineraries. Key
//! characteristics:
//! - loaded once, queried many times; every extraction re-walks the
//!   document, so query results never depend on hidden caches
//! - only onward itineraries take part in queries; return blocks are
//!   skipped
//! - pricing is mandatory; extraction fails fast on itineraries without
//!   a priced TotalAmount charge

mod convert;
mod error;
mod parser;
#[cfg(test)]
pub(crate) mod sample;

pub use convert::ConversionError;
pub use error::FeedError;
pub use parser::RawItinerary;

use std::path::Path;

use crate::domain::Route;

/// An in-memory flight feed document.
pub struct FlightFeed {
    xml: String,
}

impl FlightFeed {
    /// Create a feed from an XML document already in memory.
    pub fn new(xml: impl Into<String>) -> Self {
        Self { xml: xml.into() }
    }

    /// Read a feed document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FeedError> {
        let xml = std::fs::read_to_string(path)?;
        Ok(Self::new(xml))
    }

    /// Extract one raw route per itinerary, in document order.
    ///
    /// Re-walks the document on every call; returned routes are fresh
    /// records with no `TotalTravelTime` yet.
    ///
    /// # Errors
    ///
    /// Returns `Err` on malformed XML, missing pricing data, or segments
    /// that fail domain validation.
    pub fn extract_routes(&self) -> Result<Vec<Route>, FeedError> {
        let raw = parser::parse_feed(&self.xml)?;

        let mut routes = Vec::with_capacity(raw.len());
        for (index, itinerary) in raw.into_iter().enumerate() {
            routes.push(convert::convert_itinerary(itinerary, index + 1)?);
        }

        tracing::debug!(routes = routes.len(), "extracted routes from feed");
        Ok(routes)
    }
}
