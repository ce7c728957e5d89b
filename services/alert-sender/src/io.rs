//! Delivery client abstraction for testability

use std::io::Write;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::sender::AlertRequest;

/// Hands composed alerts to a notification channel
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait AlertClient: Send + Sync {
    /// Create one alert on the channel
    async fn create_alert(&self, request: &AlertRequest) -> crate::Result<()>;
}

/// Writes each alert as one JSON line to a writer.
///
/// The write is synchronous and short, so it runs under a blocking
/// `std::sync::Mutex` without yielding. A poisoned lock is recovered.
pub struct WriterAlertClient<W> {
    writer: Mutex<W>,
}

impl WriterAlertClient<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> WriterAlertClient<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl<W: Write + Send> AlertClient for WriterAlertClient<W> {
    async fn create_alert(&self, request: &AlertRequest) -> crate::Result<()> {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        serde_json::to_writer(&mut *writer, request)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        tracing::debug!(
            "Wrote alert '{}' ({} chars of description)",
            request.message,
            request.description.chars().count()
        );
        Ok(())
    }
}
