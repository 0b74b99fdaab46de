use crate::core::distance::FREE_ZONE_RADIUS_KM;
use crate::core::{DistanceResult, LocationOutcome, ReferencePoint};

pub fn zone_message(result: &DistanceResult, reference: &ReferencePoint) -> String {
    if result.within_free_zone {
        format!(
            "Vous êtes dans la zone de livraison gratuite ({} km autour de {}).",
            FREE_ZONE_RADIUS_KM, reference.name
        )
    } else {
        "Hors zone : des frais de déplacement pourront être ajoutés. Contactez-nous.".to_string()
    }
}

/// Status line for a failed position request. `None` when a position was obtained.
pub fn location_failure_message(outcome: &LocationOutcome) -> Option<String> {
    let message = match outcome {
        LocationOutcome::Available(_) => return None,
        LocationOutcome::Unavailable => {
            "Géolocalisation non disponible sur cet appareil.".to_string()
        }
        LocationOutcome::PermissionDenied => {
            "Impossible d'obtenir votre position : autorisation refusée. \
             Les éventuels frais de déplacement seront confirmés avec vous."
                .to_string()
        }
        LocationOutcome::Error(detail) => {
            format!("Impossible d'obtenir votre position : {}.", detail)
        }
    };
    Some(message)
}
