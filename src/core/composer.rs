use crate::core::catalog::Catalog;
use crate::core::distance::estimate;
use crate::core::{
    OutboundMessage, PositionPayload, ReferencePoint, ReservationPayload, ReservationRequest,
};
use crate::utils::error::{BoothError, Result};
use std::borrow::Cow;

pub const POSITION_NOT_PROVIDED: &str = "non fournie";
pub const PHONE_NOT_PROVIDED: &str = "non renseigné";

/// Percent-encodes one dynamic value. Only RFC 3986 unreserved characters pass through.
pub fn encode_component(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

pub fn decode_component(value: &str) -> Result<String> {
    urlencoding::decode(value)
        .map(Cow::into_owned)
        .map_err(|e| BoothError::ValidationError {
            field: "encoded_component".to_string(),
            message: format!("Decoded bytes are not valid UTF-8: {}", e),
        })
}

/// Turns a reservation request into a message for the recipient.
#[derive(Debug, Clone)]
pub struct ReservationComposer {
    recipient: String,
    reference: ReferencePoint,
}

impl ReservationComposer {
    pub fn new(recipient: impl Into<String>, reference: ReferencePoint) -> Self {
        Self {
            recipient: recipient.into(),
            reference,
        }
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn compose(
        &self,
        request: &ReservationRequest,
        catalog: &Catalog,
    ) -> Result<OutboundMessage> {
        let package = catalog.get(request.selected_package_id)?;

        let position = match (request.origin_coordinate, request.distance_result) {
            (Some(origin), distance) => {
                let distance =
                    distance.unwrap_or_else(|| estimate(origin, self.reference.coordinate));
                PositionPayload::Provided {
                    latitude: origin.latitude,
                    longitude: origin.longitude,
                    kilometers: distance.kilometers,
                    within_free_zone: distance.within_free_zone,
                }
            }
            (None, Some(distance)) => PositionPayload::DistanceOnly {
                kilometers: distance.kilometers,
                within_free_zone: distance.within_free_zone,
            },
            (None, None) => PositionPayload::NotProvided,
        };

        let payload = ReservationPayload {
            name: request.contact_name.clone(),
            email: request.contact_email.clone(),
            phone: request.contact_phone.clone(),
            date: request.requested_date,
            package_id: package.id,
            package_title: package.title.clone(),
            package_price: package.price_amount,
            package_prints: package.included_prints,
            reference: self.reference.name.to_string(),
            position,
        };

        tracing::debug!(
            "Composed reservation for package {} ({})",
            payload.package_id,
            payload.package_title
        );

        Ok(OutboundMessage {
            recipient: self.recipient.clone(),
            subject: format!("Réservation Photobooth - {}", payload.package_title),
            body: render_body(&payload),
            payload,
        })
    }
}

fn render_position(payload: &ReservationPayload) -> String {
    match &payload.position {
        PositionPayload::Provided {
            latitude,
            longitude,
            kilometers,
            ..
        } => format!(
            "{}, {} (à {:.1} km de {})",
            latitude, longitude, kilometers, payload.reference
        ),
        PositionPayload::DistanceOnly { kilometers, .. } => {
            format!("à {:.1} km de {}", kilometers, payload.reference)
        }
        PositionPayload::NotProvided => POSITION_NOT_PROVIDED.to_string(),
    }
}

fn render_body(payload: &ReservationPayload) -> String {
    let lines = [
        "Bonjour,".to_string(),
        String::new(),
        "Je souhaite réserver :".to_string(),
        format!("- Nom : {}", payload.name),
        format!("- Email : {}", payload.email),
        format!(
            "- Téléphone : {}",
            payload.phone.as_deref().unwrap_or(PHONE_NOT_PROVIDED)
        ),
        format!("- Date : {}", payload.date.format("%Y-%m-%d")),
        format!(
            "- Formule : {} ({} €, {} tirages)",
            payload.package_title, payload.package_price, payload.package_prints
        ),
        format!("- Position : {}", render_position(payload)),
        String::new(),
        "Merci !".to_string(),
    ];
    lines.join("\n")
}

impl OutboundMessage {
    /// `mailto:` link with subject and body encoded separately.
    pub fn to_mailto_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            encode_component(&self.subject),
            encode_component(&self.body)
        )
    }

    /// Flat field list for form backends such as Formspree or Netlify Forms.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let payload = &self.payload;
        let mut fields = vec![
            ("_subject", self.subject.clone()),
            ("name", payload.name.clone()),
            ("email", payload.email.clone()),
            ("phone", payload.phone.clone().unwrap_or_default()),
            ("date", payload.date.format("%Y-%m-%d").to_string()),
            ("package_id", payload.package_id.to_string()),
            ("package", payload.package_title.clone()),
            ("price", payload.package_price.to_string()),
            ("prints", payload.package_prints.to_string()),
            ("position", render_position(payload)),
        ];
        match payload.position {
            PositionPayload::Provided {
                within_free_zone, ..
            }
            | PositionPayload::DistanceOnly {
                within_free_zone, ..
            } => fields.push(("free_delivery", within_free_zone.to_string())),
            PositionPayload::NotProvided => {}
        }
        fields.push(("message", self.body.clone()));
        fields
    }
}

/// Splits a `mailto:` URI back into recipient, subject and body.
pub fn parse_mailto_uri(uri: &str) -> Result<(String, String, String)> {
    let invalid = |message: &str| BoothError::ValidationError {
        field: "mailto".to_string(),
        message: message.to_string(),
    };

    let rest = uri
        .strip_prefix("mailto:")
        .ok_or_else(|| invalid("missing mailto: scheme"))?;
    let (recipient, query) = rest
        .split_once('?')
        .ok_or_else(|| invalid("missing query string"))?;

    let mut subject = None;
    let mut body = None;
    for pair in query.split('&') {
        match pair.split_once('=') {
            Some(("subject", value)) => subject = Some(decode_component(value)?),
            Some(("body", value)) => body = Some(decode_component(value)?),
            _ => return Err(invalid("unexpected query parameter")),
        }
    }

    Ok((
        recipient.to_string(),
        subject.ok_or_else(|| invalid("missing subject"))?,
        body.ok_or_else(|| invalid("missing body"))?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DistanceResult, GeoCoordinate, ROUEN};
    use chrono::NaiveDate;

    fn request(package_id: u32) -> ReservationRequest {
        ReservationRequest {
            contact_name: "Camille Martin".to_string(),
            contact_email: "camille@example.com".to_string(),
            contact_phone: Some("06 12 34 56 78".to_string()),
            requested_date: NaiveDate::from_ymd_opt(2026, 6, 20).unwrap(),
            selected_package_id: package_id,
            origin_coordinate: None,
            distance_result: None,
        }
    }

    fn composer() -> ReservationComposer {
        ReservationComposer::new("contact@votrephotobooth.fr", ROUEN)
    }

    #[test]
    fn test_compose_without_position() {
        let message = composer().compose(&request(2), &Catalog::default()).unwrap();

        assert_eq!(message.recipient, "contact@votrephotobooth.fr");
        assert_eq!(message.subject, "Réservation Photobooth - Formule 2");
        assert!(message.body.contains("- Formule : Formule 2 (200 €, 150 tirages)"));
        assert!(message.body.contains("- Position : non fournie"));
        assert!(message.body.contains("- Date : 2026-06-20"));
        assert_eq!(message.payload.position, PositionPayload::NotProvided);
    }

    #[test]
    fn test_compose_with_position() {
        let mut req = request(1);
        let paris = GeoCoordinate {
            latitude: 48.8566,
            longitude: 2.3522,
        };
        req.origin_coordinate = Some(paris);
        req.distance_result = Some(estimate(paris, ROUEN.coordinate));

        let message = composer().compose(&req, &Catalog::default()).unwrap();
        assert!(message
            .body
            .contains("- Position : 48.8566, 2.3522 (à 112.1 km de Rouen)"));
    }

    #[test]
    fn test_compose_computes_missing_distance() {
        let mut req = request(3);
        req.origin_coordinate = Some(ROUEN.coordinate);

        let message = composer().compose(&req, &Catalog::default()).unwrap();
        assert!(matches!(
            message.payload.position,
            PositionPayload::Provided {
                within_free_zone: true,
                ..
            }
        ));
        assert!(message.body.contains("(à 0.0 km de Rouen)"));
    }

    #[test]
    fn test_compose_distance_only() {
        let mut req = request(4);
        req.distance_result = Some(DistanceResult {
            kilometers: 25.04,
            within_free_zone: true,
        });

        let message = composer().compose(&req, &Catalog::default()).unwrap();
        assert!(message.body.contains("- Position : à 25.0 km de Rouen"));
    }

    #[test]
    fn test_compose_missing_phone() {
        let mut req = request(2);
        req.contact_phone = None;
        let message = composer().compose(&req, &Catalog::default()).unwrap();
        assert!(message.body.contains("- Téléphone : non renseigné"));
    }

    #[test]
    fn test_compose_unknown_package() {
        let result = composer().compose(&request(99), &Catalog::default());
        assert!(matches!(result, Err(BoothError::UnknownPackage { id: 99 })));
    }

    #[test]
    fn test_mailto_uri_keeps_structure() {
        let mut req = request(2);
        req.contact_name = "Tom & Jerry?subject=spam".to_string();
        let message = composer().compose(&req, &Catalog::default()).unwrap();

        let uri = message.to_mailto_uri();
        assert!(uri.starts_with("mailto:contact@votrephotobooth.fr?subject="));
        assert_eq!(uri.matches('&').count(), 1);
        assert_eq!(uri.matches('?').count(), 1);

        let (recipient, subject, body) = parse_mailto_uri(&uri).unwrap();
        assert_eq!(recipient, message.recipient);
        assert_eq!(subject, message.subject);
        assert_eq!(body, message.body);
    }

    #[test]
    fn test_encode_decode_identity() {
        for value in ["a&b", "100%", "ligne 1\nligne 2", "é à ç", "=?#+/ ", ""] {
            assert_eq!(decode_component(&encode_component(value)).unwrap(), value);
        }
    }

    #[test]
    fn test_form_fields() {
        let message = composer().compose(&request(2), &Catalog::default()).unwrap();
        let fields = message.form_fields();

        assert!(fields.contains(&("email", "camille@example.com".to_string())));
        assert!(fields.contains(&("package", "Formule 2".to_string())));
        assert!(fields.contains(&("position", "non fournie".to_string())));
        assert!(!fields.iter().any(|(k, _)| *k == "free_delivery"));
    }
}
