// Adapters layer: concrete location sources and dispatch channels.

pub mod http_form;
pub mod location;
pub mod mailto;

pub use http_form::HttpFormDispatcher;
pub use location::{DeniedLocation, FixedLocation, HttpLocationProvider, UnavailableLocation};
pub use mailto::MailtoDispatcher;

use crate::core::{DispatchReceipt, Dispatcher, LocationOutcome, LocationProvider, OutboundMessage};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Dispatcher picked at runtime from configuration.
pub enum ChannelDispatcher {
    Mailto(MailtoDispatcher),
    HttpForm(HttpFormDispatcher),
}

#[async_trait]
impl Dispatcher for ChannelDispatcher {
    fn channel(&self) -> &'static str {
        match self {
            ChannelDispatcher::Mailto(d) => d.channel(),
            ChannelDispatcher::HttpForm(d) => d.channel(),
        }
    }

    async fn dispatch(&self, message: &OutboundMessage) -> Result<DispatchReceipt> {
        match self {
            ChannelDispatcher::Mailto(d) => d.dispatch(message).await,
            ChannelDispatcher::HttpForm(d) => d.dispatch(message).await,
        }
    }
}

/// Location source picked at runtime from CLI flags and configuration.
pub enum AnyLocation {
    Fixed(FixedLocation),
    Http(HttpLocationProvider),
    Unavailable(UnavailableLocation),
}

#[async_trait]
impl LocationProvider for AnyLocation {
    async fn request_current_position(&self) -> LocationOutcome {
        match self {
            AnyLocation::Fixed(p) => p.request_current_position().await,
            AnyLocation::Http(p) => p.request_current_position().await,
            AnyLocation::Unavailable(p) => p.request_current_position().await,
        }
    }
}
