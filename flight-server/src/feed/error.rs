//! Feed error types.

use super::ConversionError;

/// Errors raised while loading or extracting the itinerary feed.
///
/// Missing pricing data is an error, never a default: an itinerary the
/// feed does not price cannot take part in any query.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// Feed file could not be read
    #[error("failed to read feed: {0}")]
    Io(#[from] std::io::Error),

    /// XML syntax error
    #[error("malformed feed XML: {0}")]
    Xml(String),

    /// Itinerary without a pricing block
    #[error("itinerary {itinerary} has no pricing block")]
    MissingPricing { itinerary: usize },

    /// Pricing block without a currency attribute
    #[error("itinerary {itinerary} pricing block has no currency attribute")]
    MissingCurrency { itinerary: usize },

    /// Pricing block without a TotalAmount service charge
    #[error("itinerary {itinerary} has no TotalAmount service charge")]
    MissingTotalCharge { itinerary: usize },

    /// Itinerary without any flight segments
    #[error("itinerary {itinerary} has no flight segments")]
    NoSegments { itinerary: usize },

    /// Extracted record failed domain validation
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}
