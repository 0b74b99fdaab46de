pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{BoothConfig, DispatchChannel};
pub use crate::core::catalog::Catalog;
pub use crate::core::composer::ReservationComposer;
pub use crate::core::desk::{ReservationDesk, ZoneCheck};
pub use crate::core::distance::{estimate, EARTH_RADIUS_KM, FREE_ZONE_RADIUS_KM};
pub use crate::domain::model::{
    DistanceResult, GeoCoordinate, LocationOutcome, OutboundMessage, Package, ReferencePoint,
    ReservationRequest, ROUEN,
};
pub use crate::utils::error::{BoothError, Result};
