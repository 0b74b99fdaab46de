use crate::adapters::{AnyLocation, FixedLocation, UnavailableLocation};
use crate::config::toml_config::{BoothConfig, DispatchChannel};
use crate::core::{GeoCoordinate, ReservationRequest};
use crate::utils::error::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "booth-reserve")]
#[command(about = "Photobooth rental: delivery zone check and reservation requests")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(long, global = true, help = "Print results as JSON")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List the available packages
    Packages,
    /// Check whether a position is inside the free delivery zone
    CheckZone(PositionArgs),
    /// Compose and send a reservation request
    Reserve(ReserveArgs),
    /// Print the map embed URL around the base location
    Map,
}

#[derive(Debug, Clone, Default, Args)]
pub struct PositionArgs {
    /// Latitude in decimal degrees
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude in decimal degrees
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,
}

impl PositionArgs {
    pub fn coordinate(&self) -> Result<Option<GeoCoordinate>> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => GeoCoordinate::new(lat, lon).map(Some),
            _ => Ok(None),
        }
    }

    /// Typed-in position first, then the configured position service.
    pub fn location_source(&self, config: &BoothConfig) -> Result<AnyLocation> {
        if let Some(coordinate) = self.coordinate()? {
            return Ok(AnyLocation::Fixed(FixedLocation::new(coordinate)));
        }
        Ok(match config.location_provider()? {
            Some(provider) => AnyLocation::Http(provider),
            None => AnyLocation::Unavailable(UnavailableLocation),
        })
    }
}

#[derive(Debug, Clone, Args)]
pub struct ReserveArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub phone: Option<String>,

    /// Event date, YYYY-MM-DD
    #[arg(long)]
    pub date: NaiveDate,

    /// Package id (see `packages`)
    #[arg(long)]
    pub package: u32,

    /// Skip the position check entirely
    #[arg(long)]
    pub no_location: bool,

    /// Override the dispatch channel from the config file
    #[arg(long, value_enum)]
    pub channel: Option<DispatchChannel>,

    #[command(flatten)]
    pub position: PositionArgs,
}

impl ReserveArgs {
    pub fn to_request(&self) -> ReservationRequest {
        ReservationRequest {
            contact_name: self.name.trim().to_string(),
            contact_email: self.email.trim().to_string(),
            contact_phone: self
                .phone
                .as_deref()
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string),
            requested_date: self.date,
            selected_package_id: self.package,
            origin_coordinate: None,
            distance_result: None,
        }
    }
}
