use crate::core::{DispatchReceipt, Dispatcher, OutboundMessage};
use crate::utils::error::{BoothError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Posts the reservation as a urlencoded form (Formspree, Netlify Forms, ...).
pub struct HttpFormDispatcher {
    client: Client,
    endpoint: String,
}

impl HttpFormDispatcher {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl Dispatcher for HttpFormDispatcher {
    fn channel(&self) -> &'static str {
        "http_form"
    }

    async fn dispatch(&self, message: &OutboundMessage) -> Result<DispatchReceipt> {
        let fields = message.form_fields();
        tracing::debug!("Posting {} form fields to {}", fields.len(), self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header("Accept", "application/json")
            .form(&fields)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Form endpoint status: {}", status);
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BoothError::DispatchError {
                channel: self.channel().to_string(),
                message: format!("endpoint answered {}: {}", status, body.trim()),
            });
        }

        Ok(DispatchReceipt {
            channel: self.channel(),
            target: self.endpoint.clone(),
            launched: true,
        })
    }
}
