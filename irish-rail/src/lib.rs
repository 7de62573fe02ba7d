//! Irish Rail realtime passenger information client.
//!
//! Fetches the station directory and per-station arrival boards from the
//! Irish Rail XML web service and maps them into typed records:
//!
//! ```no_run
//! # async fn run() -> Result<(), irish_rail::RealtimeError> {
//! use irish_rail::{RealtimeClient, RealtimeConfig, StationDirectory};
//!
//! let directory = StationDirectory::new(RealtimeClient::new(RealtimeConfig::new())?);
//!
//! let station = directory.find_closest_to(53.3498, -6.2603).await?;
//! for train in station.next_arrivals(directory.client()).await? {
//!     println!("{}", train.message());
//! }
//! # Ok(())
//! # }
//! ```

pub mod directory;
pub mod domain;
pub mod realtime;

pub use directory::StationDirectory;
pub use domain::{ArrivingTrain, InvalidCoordinate, Station};
pub use realtime::{ParseError, RealtimeClient, RealtimeConfig, RealtimeError};
