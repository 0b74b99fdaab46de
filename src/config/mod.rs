#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command, PositionArgs, ReserveArgs};
pub use toml_config::{BoothConfig, DispatchChannel};
