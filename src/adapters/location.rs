use crate::core::{GeoCoordinate, LocationOutcome, LocationProvider};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

/// A position typed in by the visitor.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation {
    coordinate: GeoCoordinate,
}

impl FixedLocation {
    pub fn new(coordinate: GeoCoordinate) -> Self {
        Self { coordinate }
    }
}

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn request_current_position(&self) -> LocationOutcome {
        LocationOutcome::Available(self.coordinate)
    }
}

/// No positioning capability at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableLocation;

#[async_trait]
impl LocationProvider for UnavailableLocation {
    async fn request_current_position(&self) -> LocationOutcome {
        LocationOutcome::Unavailable
    }
}

/// The visitor declined to share a position.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeniedLocation;

#[async_trait]
impl LocationProvider for DeniedLocation {
    async fn request_current_position(&self) -> LocationOutcome {
        LocationOutcome::PermissionDenied
    }
}

#[derive(Debug, Deserialize)]
struct PositionResponse {
    #[serde(alias = "lat")]
    latitude: f64,
    #[serde(alias = "lon", alias = "lng")]
    longitude: f64,
}

/// Looks the position up from a JSON endpoint returning `{"latitude": .., "longitude": ..}`.
pub struct HttpLocationProvider {
    client: Client,
    endpoint: String,
}

impl HttpLocationProvider {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    async fn fetch(&self) -> std::result::Result<LocationOutcome, reqwest::Error> {
        tracing::debug!("Requesting position from {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status();
        tracing::debug!("Position endpoint status: {}", status);

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Ok(LocationOutcome::PermissionDenied);
        }
        if !status.is_success() {
            return Ok(LocationOutcome::Error(format!(
                "le service de position a répondu {}",
                status
            )));
        }

        let position: PositionResponse = response.json().await?;
        Ok(
            match GeoCoordinate::new(position.latitude, position.longitude) {
                Ok(coordinate) => LocationOutcome::Available(coordinate),
                Err(e) => LocationOutcome::Error(e.to_string()),
            },
        )
    }
}

#[async_trait]
impl LocationProvider for HttpLocationProvider {
    async fn request_current_position(&self) -> LocationOutcome {
        match self.fetch().await {
            Ok(outcome) => outcome,
            Err(e) if e.is_connect() => {
                tracing::warn!("Position service unreachable: {}", e);
                LocationOutcome::Unavailable
            }
            Err(e) if e.is_timeout() => LocationOutcome::Error("délai dépassé".to_string()),
            Err(e) => LocationOutcome::Error(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_location() {
        let here = GeoCoordinate {
            latitude: 49.44,
            longitude: 1.1,
        };
        let outcome =
            tokio_test::block_on(FixedLocation::new(here).request_current_position());
        assert_eq!(outcome, LocationOutcome::Available(here));
    }

    #[test]
    fn test_stub_providers() {
        assert_eq!(
            tokio_test::block_on(UnavailableLocation.request_current_position()),
            LocationOutcome::Unavailable
        );
        assert_eq!(
            tokio_test::block_on(DeniedLocation.request_current_position()),
            LocationOutcome::PermissionDenied
        );
    }
}
