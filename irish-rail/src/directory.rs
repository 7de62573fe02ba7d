//! Queries over the station directory.
//!
//! Every query fetches the full directory afresh and searches it in memory.

use tracing::{debug, trace};

use crate::domain::station::query_point;
use crate::domain::{InvalidCoordinate, Station};
use crate::realtime::{RealtimeClient, RealtimeError};

/// Station directory backed by the realtime service.
#[derive(Debug, Clone)]
pub struct StationDirectory {
    client: RealtimeClient,
}

impl StationDirectory {
    pub fn new(client: RealtimeClient) -> Self {
        Self { client }
    }

    /// The client used for fetches; also needed for [`Station::next_arrivals`].
    pub fn client(&self) -> &RealtimeClient {
        &self.client
    }

    /// Fetch all stations, in the order the service lists them.
    pub async fn fetch_all(&self) -> Result<Vec<Station>, RealtimeError> {
        self.client.all_stations().await
    }

    /// The first station whose description equals `name`, ignoring case.
    pub async fn find_by_name(&self, name: &str) -> Result<Station, RealtimeError> {
        let stations = self.fetch_all().await?;
        find_by_description(&stations, name)
            .cloned()
            .ok_or_else(|| RealtimeError::StationNotFound {
                name: name.to_string(),
            })
    }

    /// The station nearest to the given point along the WGS-84 ellipsoid.
    ///
    /// Ties go to the station listed first. A point outside the valid
    /// coordinate ranges is rejected before anything is fetched.
    pub async fn find_closest_to(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Station, RealtimeError> {
        query_point(latitude, longitude)?;
        let stations = self.fetch_all().await?;
        let closest = closest_station(&stations, latitude, longitude)?
            .ok_or(RealtimeError::EmptyDirectory)?;
        debug!(station = %closest, latitude, longitude, "closest station");
        Ok(closest.clone())
    }
}

/// Case-insensitive exact match on [`Station::description`].
pub fn find_by_description<'a>(stations: &'a [Station], name: &str) -> Option<&'a Station> {
    let wanted = name.to_lowercase();
    stations
        .iter()
        .find(|station| station.description().to_lowercase() == wanted)
}

/// The station with the smallest geodesic distance to the point, or `None`
/// if `stations` is empty.
///
/// Ties go to the earliest station. Fails if the point or any station's
/// coordinates are out of range or do not parse.
pub fn closest_station(
    stations: &[Station],
    latitude: f64,
    longitude: f64,
) -> Result<Option<&Station>, InvalidCoordinate> {
    query_point(latitude, longitude)?;
    let mut best: Option<(&Station, f64)> = None;

    for station in stations {
        let metres = station.metres_from(latitude, longitude)?;
        trace!(station = %station, metres, "distance");

        // Strictly less, so the first of equal distances wins.
        if best.is_none_or(|(_, best_metres)| metres < best_metres) {
            best = Some((station, metres));
        }
    }

    Ok(best.map(|(station, _)| station))
}
