//! Trains due at a station.

use std::fmt;

use serde::Serialize;

use super::Station;

/// A train due to arrive at a station.
///
/// `station` is the station the board was requested for, not the train's
/// current position (see [`ArrivingTrain::last_location`]). The record
/// borrows it, so the station must outlive every arrival fetched for it.
///
/// All other fields are the service's text, unparsed. In particular
/// `due_in_minutes` and `minutes_late` are strings; convert them yourself
/// if you need numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArrivingTrain<'s> {
    pub(crate) station: &'s Station,
    pub(crate) code: String,
    pub(crate) origin: String,
    pub(crate) destination: String,
    pub(crate) origin_time: String,
    pub(crate) destination_time: String,
    pub(crate) status: String,
    pub(crate) last_location: String,
    pub(crate) due_in_minutes: String,
    pub(crate) minutes_late: String,
    pub(crate) expected_arrival: String,
    pub(crate) expected_departure: String,
    pub(crate) scheduled_arrival: String,
    pub(crate) scheduled_departure: String,
    pub(crate) direction: String,
    pub(crate) train_type: String,
    pub(crate) location_type: String,
}

impl<'s> ArrivingTrain<'s> {
    /// The station this arrival was requested for.
    pub fn station(&self) -> &'s Station {
        self.station
    }

    /// Train code, e.g. `"E109"`.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Station the service started from.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Station the service terminates at.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Departure time from the origin (`HH:MM`).
    pub fn origin_time(&self) -> &str {
        &self.origin_time
    }

    /// Arrival time at the destination (`HH:MM`).
    pub fn destination_time(&self) -> &str {
        &self.destination_time
    }

    /// Free text status, e.g. `"En Route"` or `"No Information"`.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Where the train was last reported, e.g. `"Arrived Howth Junction"`.
    /// Empty if the train has not started.
    pub fn last_location(&self) -> &str {
        &self.last_location
    }

    /// Minutes until the train is due at the station.
    pub fn due_in_minutes(&self) -> &str {
        &self.due_in_minutes
    }

    /// Minutes behind schedule; negative when running early.
    pub fn minutes_late(&self) -> &str {
        &self.minutes_late
    }

    /// Expected arrival time here (`HH:MM`), `"00:00"` at the origin.
    pub fn expected_arrival(&self) -> &str {
        &self.expected_arrival
    }

    /// Expected departure time from here (`HH:MM`), `"00:00"` at the destination.
    pub fn expected_departure(&self) -> &str {
        &self.expected_departure
    }

    /// Timetabled arrival time here (`HH:MM`).
    pub fn scheduled_arrival(&self) -> &str {
        &self.scheduled_arrival
    }

    /// Timetabled departure time from here (`HH:MM`).
    pub fn scheduled_departure(&self) -> &str {
        &self.scheduled_departure
    }

    /// `"Northbound"`, `"Southbound"` or `"To <destination>"`.
    pub fn direction(&self) -> &str {
        &self.direction
    }

    /// e.g. `"DART"`, `"Train"`.
    pub fn train_type(&self) -> &str {
        &self.train_type
    }

    /// `O` origin, `D` destination, `S` stop, `T` timing point.
    pub fn location_type(&self) -> &str {
        &self.location_type
    }

    /// A human readable summary of the train's arrival status.
    pub fn message(&self) -> String {
        format!(
            "The {} {} {} to {} service\n\
             is expected to arrive at {}\n\
             in {} minutes at {}. It is {} minutes late.\n\
             The status is {}.",
            self.direction,
            self.origin_time,
            self.origin,
            self.destination,
            self.station.description(),
            self.due_in_minutes,
            self.expected_arrival,
            self.minutes_late,
            self.status,
        )
    }
}

impl fmt::Display for ArrivingTrain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}
