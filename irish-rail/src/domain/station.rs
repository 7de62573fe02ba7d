//! Stations from the Irish Rail station directory.

use std::fmt;

use geo::{GeodesicDistance, Point};
use serde::Serialize;

use crate::realtime::{RealtimeClient, RealtimeError};

use super::ArrivingTrain;

/// A coordinate that is not a usable decimal degree value.
///
/// Latitudes must lie in `[-90, 90]` and longitudes in `[-180, 180]`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidCoordinate {
    /// A station's coordinate text, as received from the service
    #[error("invalid {axis} {value:?} for station {station}")]
    Station {
        /// Description of the station carrying the bad value.
        station: String,
        /// `"latitude"` or `"longitude"`.
        axis: &'static str,
        value: String,
    },

    /// A caller-supplied point
    #[error("query {axis} {value} is out of range")]
    Query { axis: &'static str, value: f64 },
}

impl InvalidCoordinate {
    /// `"latitude"` or `"longitude"`.
    pub fn axis(&self) -> &'static str {
        match self {
            Self::Station { axis, .. } | Self::Query { axis, .. } => *axis,
        }
    }
}

/// Check a caller-supplied point and build it as a `geo` point.
pub(crate) fn query_point(
    latitude: f64,
    longitude: f64,
) -> Result<Point<f64>, InvalidCoordinate> {
    for (axis, value) in [("latitude", latitude), ("longitude", longitude)] {
        if !in_range(axis, value) {
            return Err(InvalidCoordinate::Query { axis, value });
        }
    }
    Ok(Point::new(longitude, latitude))
}

fn in_range(axis: &str, value: f64) -> bool {
    let limit = if axis == "latitude" { 90.0 } else { 180.0 };
    (-limit..=limit).contains(&value)
}

/// An Irish Rail station.
///
/// Stations are only produced by mapping a directory response, and never
/// change afterwards. Coordinates are kept as the text the service sent, so
/// no precision is lost or invented; [`Station::position`] parses them when
/// a geographic query needs numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Station {
    pub(crate) id: String,
    pub(crate) code: String,
    pub(crate) alias: String,
    pub(crate) description: String,
    pub(crate) latitude: String,
    pub(crate) longitude: String,
}

impl Station {
    /// Numeric station identifier, as text.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Short station code, e.g. `"CNLLY"`.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Alternative name (often empty).
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Human readable name, e.g. `"Dublin Connolly"`.
    ///
    /// This is the key used when asking the service for arrivals.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Latitude in decimal degrees, exactly as received.
    pub fn latitude(&self) -> &str {
        &self.latitude
    }

    /// Longitude in decimal degrees, exactly as received.
    pub fn longitude(&self) -> &str {
        &self.longitude
    }

    /// The station's location as a `geo` point (x = longitude, y = latitude).
    pub fn position(&self) -> Result<Point<f64>, InvalidCoordinate> {
        let latitude = self.parse_axis("latitude", &self.latitude)?;
        let longitude = self.parse_axis("longitude", &self.longitude)?;
        Ok(Point::new(longitude, latitude))
    }

    /// Geodesic distance on the WGS-84 ellipsoid to the given point, in kilometres.
    pub fn kilometres_from(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<f64, InvalidCoordinate> {
        Ok(self.metres_from(latitude, longitude)? / 1000.0)
    }

    pub(crate) fn metres_from(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<f64, InvalidCoordinate> {
        let target = query_point(latitude, longitude)?;
        Ok(self.position()?.geodesic_distance(&target))
    }

    /// Trains due at this station in the next 90 minutes.
    ///
    /// Every returned record borrows this station.
    pub async fn next_arrivals<'s>(
        &'s self,
        client: &RealtimeClient,
    ) -> Result<Vec<ArrivingTrain<'s>>, RealtimeError> {
        client.station_arrivals(self).await
    }

    fn parse_axis(&self, axis: &'static str, value: &str) -> Result<f64, InvalidCoordinate> {
        value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| in_range(axis, *v))
            .ok_or_else(|| InvalidCoordinate::Station {
                station: self.description.clone(),
                axis,
                value: value.to_string(),
            })
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

#[cfg(test)]
pub(crate) fn station(description: &str, latitude: &str, longitude: &str) -> Station {
    Station {
        id: "1".to_string(),
        code: "TEST".to_string(),
        alias: String::new(),
        description: description.to_string(),
        latitude: latitude.to_string(),
        longitude: longitude.to_string(),
    }
}
