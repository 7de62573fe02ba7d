//! XML → record mapping.
//!
//! Both service operations answer with the same shape: a root element whose
//! children are one element per record, each holding one namespaced child
//! element per field:
//!
//! ```xml
//! <ArrayOfObjStation xmlns="http://api.irishrail.ie/realtime/">
//!   <objStation>
//!     <StationDesc>Belfast</StationDesc>
//!     <StationAlias />
//!     ...
//!   </objStation>
//! </ArrayOfObjStation>
//! ```
//!
//! A record kind only declares its field table ([`Record::FIELDS`]); the
//! lookup itself lives in [`parse_records`] and is shared.

use roxmltree::{Document, Node};
use tracing::debug;

use crate::domain::{ArrivingTrain, Station};

use super::error::ParseError;

/// One record field: its logical name and the element tag it is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub tag: &'static str,
}

impl Field {
    const fn new(name: &'static str, tag: &'static str) -> Self {
        Self { name, tag }
    }
}

/// A record kind that can be read from one XML element.
///
/// `FIELDS` is exhaustive: every entry is required, and `from_fields`
/// receives the values in table order.
pub trait Record<const N: usize>: Sized {
    /// Passed unchanged to every record built from one document.
    type Context: Copy;

    /// Name used in error messages.
    const KIND: &'static str;

    const FIELDS: [Field; N];

    fn from_fields(context: Self::Context, values: [String; N]) -> Self;
}

impl Record<6> for Station {
    type Context = ();

    const KIND: &'static str = "station";

    const FIELDS: [Field; 6] = [
        Field::new("id", "StationId"),
        Field::new("code", "StationCode"),
        Field::new("alias", "StationAlias"),
        Field::new("description", "StationDesc"),
        Field::new("latitude", "StationLatitude"),
        Field::new("longitude", "StationLongitude"),
    ];

    fn from_fields(
        _context: (),
        [id, code, alias, description, latitude, longitude]: [String; 6],
    ) -> Self {
        Station {
            id,
            code,
            alias,
            description,
            latitude,
            longitude,
        }
    }
}

impl<'s> Record<16> for ArrivingTrain<'s> {
    type Context = &'s Station;

    const KIND: &'static str = "arrival";

    const FIELDS: [Field; 16] = [
        Field::new("code", "Traincode"),
        Field::new("origin", "Origin"),
        Field::new("destination", "Destination"),
        Field::new("origin_time", "Origintime"),
        Field::new("destination_time", "Destinationtime"),
        Field::new("status", "Status"),
        Field::new("last_location", "Lastlocation"),
        Field::new("due_in_minutes", "Duein"),
        Field::new("minutes_late", "Late"),
        Field::new("expected_arrival", "Exparrival"),
        Field::new("expected_departure", "Expdepart"),
        Field::new("scheduled_arrival", "Scharrival"),
        Field::new("scheduled_departure", "Schdepart"),
        Field::new("direction", "Direction"),
        Field::new("train_type", "Traintype"),
        Field::new("location_type", "Locationtype"),
    ];

    fn from_fields(
        station: &'s Station,
        [
            code,
            origin,
            destination,
            origin_time,
            destination_time,
            status,
            last_location,
            due_in_minutes,
            minutes_late,
            expected_arrival,
            expected_departure,
            scheduled_arrival,
            scheduled_departure,
            direction,
            train_type,
            location_type,
        ]: [String; 16],
    ) -> Self {
        ArrivingTrain {
            station,
            code,
            origin,
            destination,
            origin_time,
            destination_time,
            status,
            last_location,
            due_in_minutes,
            minutes_late,
            expected_arrival,
            expected_departure,
            scheduled_arrival,
            scheduled_departure,
            direction,
            train_type,
            location_type,
        }
    }
}

/// Map every child element of the document root into a record, in document order.
///
/// Fails on the first element missing a field; no partial result is returned.
pub fn parse_records<R, const N: usize>(
    xml: &str,
    namespace: &str,
    context: R::Context,
) -> Result<Vec<R>, ParseError>
where
    R: Record<N>,
{
    let document = Document::parse(xml)?;

    let records = document
        .root_element()
        .children()
        .filter(Node::is_element)
        .enumerate()
        .map(|(index, element)| map_element::<R, N>(element, namespace, index, context))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(kind = R::KIND, count = records.len(), "mapped records");
    Ok(records)
}

/// Map a directory response (`getAllStationsXML`).
pub fn parse_stations(xml: &str, namespace: &str) -> Result<Vec<Station>, ParseError> {
    parse_records::<Station, 6>(xml, namespace, ())
}

/// Map a station board response (`getStationDataByNameXML`), tagging every
/// arrival with `station`.
pub fn parse_arrivals<'s>(
    xml: &str,
    namespace: &str,
    station: &'s Station,
) -> Result<Vec<ArrivingTrain<'s>>, ParseError> {
    parse_records::<ArrivingTrain<'s>, 16>(xml, namespace, station)
}

fn map_element<R, const N: usize>(
    element: Node<'_, '_>,
    namespace: &str,
    index: usize,
    context: R::Context,
) -> Result<R, ParseError>
where
    R: Record<N>,
{
    let mut values: [String; N] = std::array::from_fn(|_| String::new());

    for (value, field) in values.iter_mut().zip(R::FIELDS) {
        *value = child_text(element, namespace, field.tag).ok_or(ParseError::MissingElement {
            record: R::KIND,
            index,
            field: field.name,
            tag: field.tag,
        })?;
    }

    Ok(R::from_fields(context, values))
}

/// Text of the first child element named `{namespace}tag`.
///
/// An empty element yields an empty string. An empty `namespace` matches
/// only un-namespaced elements.
fn child_text(element: Node<'_, '_>, namespace: &str, tag: &str) -> Option<String> {
    element
        .children()
        .find(|child| {
            let name = child.tag_name();
            child.is_element()
                && name.name() == tag
                && name.namespace().unwrap_or_default() == namespace
        })
        .map(|child| child.text().unwrap_or_default().to_string())
}
