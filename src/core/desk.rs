use crate::core::catalog::Catalog;
use crate::core::composer::ReservationComposer;
use crate::core::distance::estimate;
use crate::core::status::{location_failure_message, zone_message};
use crate::core::{
    DispatchReceipt, Dispatcher, DistanceResult, GeoCoordinate, LocationOutcome, LocationProvider,
    OutboundMessage, ReferencePoint, ReservationRequest,
};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

#[derive(Debug, Clone, PartialEq)]
pub struct ZoneCheck {
    pub outcome: LocationOutcome,
    pub distance: Option<DistanceResult>,
    pub message: String,
}

impl ZoneCheck {
    pub fn origin(&self) -> Option<GeoCoordinate> {
        self.outcome.coordinate()
    }

    pub fn to_json(&self) -> Result<String> {
        let status = match &self.outcome {
            LocationOutcome::Available(_) => "available",
            LocationOutcome::Unavailable => "unavailable",
            LocationOutcome::PermissionDenied => "permission_denied",
            LocationOutcome::Error(_) => "error",
        };
        let report = serde_json::json!({
            "status": status,
            "origin": self.origin(),
            "distance": self.distance,
            "message": self.message,
        });
        Ok(serde_json::to_string_pretty(&report)?)
    }
}

/// Asks for the current position once and classifies it. Failures end up in `message`.
pub async fn check_zone<L: LocationProvider + ?Sized>(
    locator: &L,
    reference: &ReferencePoint,
) -> ZoneCheck {
    let outcome = locator.request_current_position().await;

    match outcome.coordinate() {
        Some(origin) => {
            let distance = estimate(origin, reference.coordinate);
            tracing::info!(
                "Visitor is {} km from {}",
                distance.display_km(),
                reference.name
            );
            ZoneCheck {
                message: zone_message(&distance, reference),
                distance: Some(distance),
                outcome,
            }
        }
        None => {
            tracing::warn!("Location unavailable: {:?}", outcome);
            ZoneCheck {
                message: location_failure_message(&outcome).unwrap_or_default(),
                distance: None,
                outcome,
            }
        }
    }
}

/// Wires location, composition and dispatch together for one visitor session.
pub struct ReservationDesk<L: LocationProvider, D: Dispatcher> {
    locator: L,
    dispatcher: D,
    composer: ReservationComposer,
    catalog: Catalog,
    reference: ReferencePoint,
}

impl<L: LocationProvider, D: Dispatcher> ReservationDesk<L, D> {
    pub fn new(
        locator: L,
        dispatcher: D,
        composer: ReservationComposer,
        catalog: Catalog,
        reference: ReferencePoint,
    ) -> Self {
        Self {
            locator,
            dispatcher,
            composer,
            catalog,
            reference,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub async fn check_zone(&self) -> ZoneCheck {
        check_zone(&self.locator, &self.reference).await
    }

    pub fn prepare(&self, request: &ReservationRequest) -> Result<OutboundMessage> {
        request.validate()?;
        self.composer.compose(request, &self.catalog)
    }

    pub async fn submit(&self, request: &ReservationRequest) -> Result<DispatchReceipt> {
        let message = self.prepare(request)?;
        tracing::info!(
            "Dispatching reservation via {} to {}",
            self.dispatcher.channel(),
            message.recipient
        );
        let receipt = self.dispatcher.dispatch(&message).await?;
        tracing::debug!("Dispatch receipt: {:?}", receipt);
        Ok(receipt)
    }
}
