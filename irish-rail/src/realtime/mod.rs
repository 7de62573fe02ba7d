//! Irish Rail realtime (RTPI) service client.
//!
//! The service is a plain XML-over-HTTP API:
//! - `getAllStationsXML` lists every station
//! - `getStationDataByNameXML?StationDesc=...` lists trains due at one
//!   station within the next 90 minutes
//!
//! Every element in both responses sits in the
//! `http://api.irishrail.ie/realtime/` namespace. The namespace and base URL
//! are configuration, so the client can be pointed at a fixture server.

mod client;
mod config;
mod error;
mod mapper;

pub use client::RealtimeClient;
pub use config::{DEFAULT_BASE_URL, DEFAULT_NAMESPACE, RealtimeConfig};
pub use error::{ParseError, RealtimeError};
pub use mapper::{Field, Record, parse_arrivals, parse_records, parse_stations};
