//! Sender trait and the alert request handed to delivery clients

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::event::{ContactData, NotificationEvents, TriggerData};
use crate::priority::Priority;

/// A composed alert, ready for a delivery client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRequest {
    /// Title, within the channel title limit
    pub message: String,
    /// Body, within the channel body limit
    pub description: String,
    pub tags: Vec<String>,
    pub entity: String,
    pub source: String,
    pub priority: Priority,
    /// Graphic attachment, passed through untouched
    #[serde(skip)]
    pub attachment: Vec<u8>,
}

/// Trait for sending a trigger's events to one contact
#[async_trait]
pub trait Sender: Send + Sync + std::fmt::Debug {
    /// Get the sender type name (e.g. "opsgenie")
    fn type_name(&self) -> &str;

    /// Compose and deliver one alert for `events`
    async fn send_events(
        &self,
        events: &NotificationEvents,
        contact: &ContactData,
        trigger: &TriggerData,
        plot: &[u8],
        throttled: bool,
    ) -> crate::Result<()>;
}
