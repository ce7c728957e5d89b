//! Opsgenie alert sender

use std::sync::Arc;

use async_trait::async_trait;

use crate::body::BodyComposer;
use crate::config::Config;
use crate::event::{ContactData, NotificationEvents, TriggerData};
use crate::io::AlertClient;
use crate::markdown::MarkdownRenderer;
use crate::priority::Priority;
use crate::sender::{AlertRequest, Sender};
use crate::title::compose_title;

/// Composes alerts within the channel limits and hands them to a client
pub struct OpsgenieSender {
    title_limit: usize,
    body_limit: i64,
    entity: String,
    source: String,
    body: BodyComposer,
    client: Arc<dyn AlertClient>,
}

impl std::fmt::Debug for OpsgenieSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpsgenieSender")
            .field("title_limit", &self.title_limit)
            .field("body_limit", &self.body_limit)
            .field("source", &self.source)
            .finish()
    }
}

impl OpsgenieSender {
    pub fn new(
        config: &Config,
        renderer: Arc<dyn MarkdownRenderer>,
        client: Arc<dyn AlertClient>,
    ) -> crate::Result<Self> {
        let format = config.event_format()?;

        tracing::debug!(
            "Created OpsgenieSender with limits title={} body={}",
            config.channel.title_limit,
            config.channel.body_limit
        );

        Ok(Self {
            title_limit: config.channel.title_limit,
            body_limit: config.channel.body_limit,
            entity: config.entity.clone(),
            source: config.source.clone(),
            body: BodyComposer::new(renderer, format),
            client,
        })
    }

    /// Compose the alert for a batch without sending it
    pub fn build_request(
        &self,
        events: &NotificationEvents,
        trigger: &TriggerData,
        plot: &[u8],
        throttled: bool,
    ) -> AlertRequest {
        AlertRequest {
            message: compose_title(events, trigger, self.title_limit),
            description: self
                .body
                .compose(&trigger.desc, events, throttled, self.body_limit),
            tags: trigger.tags.clone(),
            entity: self.entity.clone(),
            source: self.source.clone(),
            priority: Priority::classify(events),
            attachment: plot.to_vec(),
        }
    }
}

#[async_trait]
impl Sender for OpsgenieSender {
    fn type_name(&self) -> &str {
        "opsgenie"
    }

    async fn send_events(
        &self,
        events: &NotificationEvents,
        contact: &ContactData,
        trigger: &TriggerData,
        plot: &[u8],
        throttled: bool,
    ) -> crate::Result<()> {
        let request = self.build_request(events, trigger, plot, throttled);

        tracing::debug!(
            "Sending Opsgenie alert: title='{}', priority={}, events={}, throttled={}",
            request.message,
            request.priority,
            events.len(),
            throttled
        );

        self.client.create_alert(&request).await.map_err(|e| {
            crate::SenderError::Delivery(format!(
                "failed to send {} event message to opsgenie contact {}: {}",
                trigger.id, contact.value, e
            ))
        })?;

        tracing::debug!("Opsgenie alert for '{}' sent successfully", trigger.id);
        Ok(())
    }
}
