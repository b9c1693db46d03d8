//! Streaming extraction of raw itineraries from the feed XML.
//!
//! The feed is a `PricedItineraries` list. Each direct child wraps one
//! itinerary: an `OnwardPricedItinerary` holding the flight segments,
//! and a sibling `Pricing` block carrying a `currency` attribute and
//! `ServiceCharges` entries, one of which has `ChargeType="TotalAmount"`.
//! Return blocks (`ReturnPricedItinerary`) are not part of any query and
//! are skipped.
//!
//! Segments have no fixed schema: every leaf field of a `Flight` element
//! is collected verbatim as tag -> trimmed text, skipping empty text.

use std::collections::BTreeMap;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::FeedError;

const PRICED_ITINERARIES_TAG: &str = "PricedItineraries";
const ONWARD_TAG: &str = "OnwardPricedItinerary";
const FLIGHT_TAG: &str = "Flight";
const PRICING_TAG: &str = "Pricing";
const SERVICE_CHARGES_TAG: &str = "ServiceCharges";
const CHARGE_TYPE_ATTR: &str = "ChargeType";
const CURRENCY_ATTR: &str = "currency";
const TOTAL_AMOUNT_CHARGE: &str = "TotalAmount";

/// One itinerary straight off the XML, not yet validated.
#[derive(Debug, Clone)]
pub struct RawItinerary {
    /// Field maps of the onward segments, in document order
    pub segments: Vec<BTreeMap<String, String>>,
    /// Text of the first TotalAmount service charge
    pub ticket_price: String,
    /// Currency attribute of the pricing block
    pub currency: String,
}

/// Accumulator for the itinerary wrapper currently being walked.
#[derive(Debug, Default)]
struct PendingItinerary {
    segments: Vec<BTreeMap<String, String>>,
    saw_pricing: bool,
    currency: Option<String>,
    ticket_price: Option<String>,
}

impl PendingItinerary {
    /// Closes the wrapper, insisting on complete pricing data.
    fn finish(self, itinerary: usize) -> Result<RawItinerary, FeedError> {
        if !self.saw_pricing {
            return Err(FeedError::MissingPricing { itinerary });
        }
        let currency = self
            .currency
            .ok_or(FeedError::MissingCurrency { itinerary })?;
        let ticket_price = self
            .ticket_price
            .ok_or(FeedError::MissingTotalCharge { itinerary })?;
        if self.segments.is_empty() {
            return Err(FeedError::NoSegments { itinerary });
        }

        Ok(RawItinerary {
            segments: self.segments,
            ticket_price,
            currency,
        })
    }
}

fn xml_err(err: impl std::fmt::Display) -> FeedError {
    FeedError::Xml(err.to_string())
}

fn attr_value(element: &BytesStart<'_>, name: &str) -> Result<Option<String>, FeedError> {
    for attr in element.attributes() {
        let attr = attr.map_err(xml_err)?;
        if attr.key.as_ref() == name.as_bytes() {
            return Ok(Some(String::from_utf8_lossy(&attr.value).into_owned()));
        }
    }
    Ok(None)
}

/// Walks the document and returns one raw record per itinerary wrapper,
/// in document order.
pub fn parse_feed(xml: &str) -> Result<Vec<RawItinerary>, FeedError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut itineraries = Vec::new();
    // Open element names, outermost first. Leaf fields consumed via
    // read_text never appear on it.
    let mut path: Vec<String> = Vec::new();
    let mut pending: Option<PendingItinerary> = None;
    let mut segment_fields: Option<BTreeMap<String, String>> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();

                // Inside a segment every child element is a leaf field.
                if let Some(fields) = segment_fields.as_mut() {
                    let text = reader.read_text(e.name()).map_err(xml_err)?;
                    let text = text.trim();
                    if !text.is_empty() {
                        fields.insert(name, text.to_string());
                    }
                    continue;
                }

                let in_itinerary = pending.is_some();
                if path.last().is_some_and(|p| p == PRICED_ITINERARIES_TAG) {
                    pending = Some(PendingItinerary::default());
                } else if name == FLIGHT_TAG
                    && in_itinerary
                    && path.iter().any(|p| p == ONWARD_TAG)
                {
                    segment_fields = Some(BTreeMap::new());
                } else if name == PRICING_TAG && in_itinerary {
                    // Safe: in_itinerary checked above
                    let itinerary = pending.as_mut().unwrap();
                    itinerary.saw_pricing = true;
                    itinerary.currency = attr_value(&e, CURRENCY_ATTR)?;
                } else if name == SERVICE_CHARGES_TAG
                    && in_itinerary
                    && path.iter().any(|p| p == PRICING_TAG)
                {
                    let charge_type = attr_value(&e, CHARGE_TYPE_ATTR)?;
                    if charge_type.as_deref() == Some(TOTAL_AMOUNT_CHARGE) {
                        let text = reader.read_text(e.name()).map_err(xml_err)?;
                        // Safe: in_itinerary checked above
                        let itinerary = pending.as_mut().unwrap();
                        if itinerary.ticket_price.is_none() {
                            itinerary.ticket_price = Some(text.trim().to_string());
                        }
                        continue;
                    }
                }

                path.push(name);
            }
            Ok(Event::End(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                path.pop();

                if name == FLIGHT_TAG {
                    if let (Some(fields), Some(itinerary)) =
                        (segment_fields.take(), pending.as_mut())
                    {
                        itinerary.segments.push(fields);
                    }
                } else if pending.is_some()
                    && path.last().is_some_and(|p| p == PRICED_ITINERARIES_TAG)
                {
                    // The wrapper just closed; require complete pricing
                    let itinerary = pending.take().unwrap();
                    itineraries.push(itinerary.finish(itineraries.len() + 1)?);
                }
            }
            Ok(Event::Empty(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();

                if segment_fields.is_some() {
                    // Self-closed leaf field: no text, skip
                } else if path.last().is_some_and(|p| p == PRICED_ITINERARIES_TAG) {
                    // A content-free itinerary wrapper cannot be priced
                    PendingItinerary::default().finish(itineraries.len() + 1)?;
                } else if let Some(itinerary) = pending.as_mut() {
                    if name == FLIGHT_TAG && path.iter().any(|p| p == ONWARD_TAG) {
                        itinerary.segments.push(BTreeMap::new());
                    } else if name == PRICING_TAG {
                        itinerary.saw_pricing = true;
                        itinerary.currency = attr_value(&e, CURRENCY_ATTR)?;
                    }
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(FeedError::Xml(format!(
                    "{e} at position {}",
                    reader.error_position()
                )));
            }
        }
    }

    if pending.is_some() {
        return Err(FeedError::Xml("unexpected end of document".to_string()));
    }

    Ok(itineraries)
}
