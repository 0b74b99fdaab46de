use crate::domain::model::{LocationOutcome, OutboundMessage};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of the visitor's current position. One call per user action.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn request_current_position(&self) -> LocationOutcome;
}

/// What a dispatcher did with a message.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchReceipt {
    pub channel: &'static str,
    /// The mailto URI or the form endpoint the message went to.
    pub target: String,
    pub launched: bool,
}

#[async_trait]
pub trait Dispatcher: Send + Sync {
    fn channel(&self) -> &'static str;
    async fn dispatch(&self, message: &OutboundMessage) -> Result<DispatchReceipt>;
}
