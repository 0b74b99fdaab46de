use crate::core::{DispatchReceipt, Dispatcher, OutboundMessage};
use crate::utils::error::{BoothError, Result};
use async_trait::async_trait;
use tokio::process::Command;

/// Hands the message to the local mail client through a `mailto:` link.
///
/// Without an opener the link is only returned in the receipt, for the
/// caller to print or embed.
#[derive(Debug, Clone, Default)]
pub struct MailtoDispatcher {
    opener: Option<String>,
}

impl MailtoDispatcher {
    pub fn new(opener: Option<String>) -> Self {
        Self { opener }
    }
}

#[async_trait]
impl Dispatcher for MailtoDispatcher {
    fn channel(&self) -> &'static str {
        "mailto"
    }

    async fn dispatch(&self, message: &OutboundMessage) -> Result<DispatchReceipt> {
        let uri = message.to_mailto_uri();

        let Some(opener) = &self.opener else {
            return Ok(DispatchReceipt {
                channel: self.channel(),
                target: uri,
                launched: false,
            });
        };

        tracing::debug!("Opening mail client with '{}'", opener);
        let status = Command::new(opener).arg(&uri).status().await?;
        if !status.success() {
            return Err(BoothError::DispatchError {
                channel: self.channel().to_string(),
                message: format!("'{}' exited with {}", opener, status),
            });
        }

        Ok(DispatchReceipt {
            channel: self.channel(),
            target: uri,
            launched: true,
        })
    }
}
