//! Synthetic feed documents for tests.
//!
//! Builders emit XML in the real feed shape so parser, conversion, and
//! analysis tests can all run against self-contained documents instead
//! of fixture files.

/// One `Flight` element with the usual leaf fields.
pub(crate) fn flight_xml(source: &str, destination: &str, departure: &str, arrival: &str) -> String {
    format!(
        "<Flight>\
           <Carrier id=\"AI\">AirIndia</Carrier>\
           <FlightNumber>996</FlightNumber>\
           <Source>{source}</Source>\
           <Destination>{destination}</Destination>\
           <DepartureTimeStamp>{departure}</DepartureTimeStamp>\
           <ArrivalTimeStamp>{arrival}</ArrivalTimeStamp>\
           <Class>G</Class>\
           <NumberOfStops>0</NumberOfStops>\
           <TicketType>E</TicketType>\
         </Flight>"
    )
}

/// An itinerary wrapper around the given onward flights and a raw
/// pricing fragment (pass an empty string to omit pricing).
pub(crate) fn itinerary_with_pricing(flights: &[String], pricing: &str) -> String {
    format!(
        "<Flights>\
           <OnwardPricedItinerary>\
             <Flights>{}</Flights>\
           </OnwardPricedItinerary>\
           {pricing}\
         </Flights>",
        flights.concat()
    )
}

/// An itinerary wrapper with well-formed pricing at the given total.
pub(crate) fn itinerary_with_flights(flights: &[String], price: &str, currency: &str) -> String {
    let pricing = format!(
        "<Pricing currency=\"{currency}\">\
           <ServiceCharges type=\"SingleAdult\" ChargeType=\"BaseFare\">212.00</ServiceCharges>\
           <ServiceCharges type=\"SingleAdult\" ChargeType=\"AirlineTaxes\">118.70</ServiceCharges>\
           <ServiceCharges type=\"SingleAdult\" ChargeType=\"TotalAmount\">{price}</ServiceCharges>\
         </Pricing>"
    );
    itinerary_with_pricing(flights, &pricing)
}

/// A direct (single-segment) itinerary.
pub(crate) fn direct_itinerary(
    source: &str,
    destination: &str,
    departure: &str,
    arrival: &str,
    price: &str,
    currency: &str,
) -> String {
    itinerary_with_flights(
        &[flight_xml(source, destination, departure, arrival)],
        price,
        currency,
    )
}

/// A one-stop itinerary via `transfer`.
pub(crate) fn one_stop_itinerary(
    source: &str,
    transfer: &str,
    destination: &str,
    first_leg: (&str, &str),
    second_leg: (&str, &str),
    price: &str,
    currency: &str,
) -> String {
    itinerary_with_flights(
        &[
            flight_xml(source, transfer, first_leg.0, first_leg.1),
            flight_xml(transfer, destination, second_leg.0, second_leg.1),
        ],
        price,
        currency,
    )
}

/// An itinerary carrying both an onward and a return block. Only the
/// onward leg should ever be extracted.
pub(crate) fn round_trip_itinerary(
    source: &str,
    destination: &str,
    departure: &str,
    arrival: &str,
    return_departure: &str,
    return_arrival: &str,
    price: &str,
    currency: &str,
) -> String {
    let pricing = format!(
        "<Pricing currency=\"{currency}\">\
           <ServiceCharges type=\"SingleAdult\" ChargeType=\"TotalAmount\">{price}</ServiceCharges>\
         </Pricing>"
    );
    format!(
        "<Flights>\
           <OnwardPricedItinerary>\
             <Flights>{}</Flights>\
           </OnwardPricedItinerary>\
           <ReturnPricedItinerary>\
             <Flights>{}</Flights>\
           </ReturnPricedItinerary>\
           {pricing}\
         </Flights>",
        flight_xml(source, destination, departure, arrival),
        flight_xml(destination, source, return_departure, return_arrival),
    )
}

/// A whole feed document around the given itinerary wrappers.
pub(crate) fn feed_xml(itineraries: &[String]) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <AirFareSearchResponse>\
           <RequestId>123e4567</RequestId>\
           <PricedItineraries>{}</PricedItineraries>\
         </AirFareSearchResponse>",
        itineraries.concat()
    )
}
