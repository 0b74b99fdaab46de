pub mod catalog;
pub mod composer;
pub mod desk;
pub mod distance;
pub mod status;

pub use crate::domain::model::{
    DistanceResult, GeoCoordinate, LocationOutcome, OutboundMessage, Package, PositionPayload,
    ReferencePoint, ReservationPayload, ReservationRequest, ROUEN,
};
pub use crate::domain::ports::{DispatchReceipt, Dispatcher, LocationProvider};
pub use crate::utils::error::Result;
