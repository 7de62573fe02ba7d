//! Record types for the Irish Rail realtime service.
//!
//! Records are built by the mapper in [`crate::realtime`] and are immutable
//! afterwards. Field values are kept as the service sent them.

mod arrival;
pub(crate) mod station;

pub use arrival::ArrivingTrain;
pub use station::{InvalidCoordinate, Station};
