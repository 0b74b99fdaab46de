use crate::utils::error::Result;
use crate::utils::validation::{
    validate_coordinate, validate_email, validate_non_empty_string, Validate,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A point on the globe, in decimal degrees.
///
/// Struct literals skip range checks; use [`GeoCoordinate::new`] for values
/// coming from outside the process.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        validate_coordinate("latitude", latitude, 90.0)?;
        validate_coordinate("longitude", longitude, 180.0)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// The service's base location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePoint {
    pub name: &'static str,
    pub coordinate: GeoCoordinate,
}

pub const ROUEN: ReferencePoint = ReferencePoint {
    name: "Rouen",
    coordinate: GeoCoordinate {
        latitude: 49.4431,
        longitude: 1.0993,
    },
};

impl ReferencePoint {
    /// OpenStreetMap embed URL framing the reference point.
    pub fn map_embed_url(&self) -> String {
        let lat = self.coordinate.latitude;
        let lon = self.coordinate.longitude;
        // bbox order is min_lon,min_lat,max_lon,max_lat
        let bbox = format!(
            "{:.1},{:.2},{:.1},{:.2}",
            lon - 0.1,
            lat - 0.05,
            lon + 0.1,
            lat + 0.05
        );
        format!(
            "https://www.openstreetmap.org/export/embed.html?bbox={}&layer=mapnik",
            urlencoding::encode(&bbox)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistanceResult {
    pub kilometers: f64,
    pub within_free_zone: bool,
}

impl DistanceResult {
    /// Distance rounded to one decimal, for display only.
    pub fn display_km(&self) -> String {
        format!("{:.1}", self.kilometers)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub id: u32,
    pub title: String,
    #[serde(rename = "price")]
    pub price_amount: f64,
    #[serde(rename = "prints")]
    pub included_prints: u32,
}

impl Package {
    pub fn new(id: u32, title: &str, price_amount: f64, included_prints: u32) -> Self {
        Self {
            id,
            title: title.to_string(),
            price_amount,
            included_prints,
        }
    }

    pub fn prints_label(&self) -> String {
        if self.included_prints > 0 {
            format!("{} tirages inclus", self.included_prints)
        } else {
            "Numérique seulement".to_string()
        }
    }

    pub fn option_label(&self) -> String {
        format!("{} — {} €", self.title, self.price_amount)
    }
}

/// What the location collaborator reports back.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationOutcome {
    Available(GeoCoordinate),
    Unavailable,
    PermissionDenied,
    Error(String),
}

impl LocationOutcome {
    pub fn coordinate(&self) -> Option<GeoCoordinate> {
        match self {
            LocationOutcome::Available(coordinate) => Some(*coordinate),
            _ => None,
        }
    }

    pub fn into_result(self) -> Result<GeoCoordinate> {
        use crate::utils::error::BoothError;
        match self {
            LocationOutcome::Available(coordinate) => Ok(coordinate),
            LocationOutcome::Unavailable => Err(BoothError::GeolocationUnavailable),
            LocationOutcome::PermissionDenied => Err(BoothError::GeolocationPermissionDenied),
            LocationOutcome::Error(detail) => Err(BoothError::GeolocationError { detail }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReservationRequest {
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub requested_date: NaiveDate,
    pub selected_package_id: u32,
    pub origin_coordinate: Option<GeoCoordinate>,
    pub distance_result: Option<DistanceResult>,
}

impl Validate for ReservationRequest {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("name", &self.contact_name)?;
        validate_email("email", &self.contact_email)?;
        if let Some(phone) = &self.contact_phone {
            validate_non_empty_string("phone", phone)?;
        }
        Ok(())
    }
}

/// Position block of a reservation, as sent to the recipient.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PositionPayload {
    Provided {
        latitude: f64,
        longitude: f64,
        kilometers: f64,
        within_free_zone: bool,
    },
    DistanceOnly {
        kilometers: f64,
        within_free_zone: bool,
    },
    NotProvided,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReservationPayload {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date: NaiveDate,
    pub package_id: u32,
    pub package_title: String,
    pub package_price: f64,
    pub package_prints: u32,
    pub reference: String,
    pub position: PositionPayload,
}

impl ReservationPayload {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutboundMessage {
    pub recipient: String,
    pub subject: String,
    pub body: String,
    pub payload: ReservationPayload,
}
