//! Alert sender - bounded-length alert composition
//!
//! Turns a trigger and a batch of state-change events into a title, body and
//! priority that fit a notification channel's character limits, then hands
//! the result to a delivery client.

pub mod body;
pub mod budget;
pub mod config;
pub mod error;
pub mod event;
pub mod event_list;
pub mod io;
pub mod markdown;
pub mod opsgenie;
pub mod priority;
pub mod sender;
pub mod text;
pub mod title;

pub use config::{load_config, Config};
pub use error::{Result, SenderError};
pub use event::{ContactData, Event, NotificationBatch, NotificationEvents, State, TriggerData};
pub use priority::Priority;

use std::path::Path;
use std::sync::Arc;

use crate::io::{AlertClient, WriterAlertClient};
use crate::markdown::ComrakRenderer;
use crate::opsgenie::OpsgenieSender;
use crate::sender::Sender;

/// Load a notification batch from a JSON file
pub fn load_batch(path: &Path) -> Result<NotificationBatch> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        SenderError::Config(format!("Failed to read batch file {:?}: {}", path, e))
    })?;
    let batch: NotificationBatch = serde_json::from_str(&content)?;
    Ok(batch)
}

/// Compose and deliver `batch` through `client`
pub async fn send_batch(
    config: &Config,
    batch: &NotificationBatch,
    client: Arc<dyn AlertClient>,
) -> Result<()> {
    let sender = OpsgenieSender::new(config, Arc::new(ComrakRenderer::new()), client)?;

    tracing::info!(
        "Sending {} events of trigger '{}' to {} contact '{}'",
        batch.events.len(),
        batch.trigger.id,
        sender.type_name(),
        batch.contact.value
    );

    sender
        .send_events(
            &batch.events,
            &batch.contact,
            &batch.trigger,
            &[],
            batch.throttled,
        )
        .await
}

/// Run the sender with the given configuration, writing the alert to stdout
pub async fn run(config: Config, batch: NotificationBatch) -> Result<()> {
    send_batch(&config, &batch, Arc::new(WriterAlertClient::stdout())).await
}
