//! Delivery stream abstraction and the Amazon Data Firehose client.
//!
//! The simulator only needs "append this record, give me its id". The
//! [`DeliveryStream`] trait captures exactly that so the loop can be
//! exercised against an in-memory stream in tests.

use std::future::Future;

use aws_config::BehaviorVersion;
use aws_sdk_firehose::Client;
use aws_sdk_firehose::config::Region;
use aws_sdk_firehose::error::DisplayErrorContext;
use aws_sdk_firehose::primitives::Blob;
use aws_sdk_firehose::types::Record;

use crate::error::TelemetryError;

/// An append-only sink accepting one record at a time.
pub trait DeliveryStream: Send + Sync {
    /// Name used in log lines.
    fn name(&self) -> &str;

    /// Append `payload` and return the id the stream assigned to it.
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError::Delivery`] if the stream refuses the
    /// record or cannot be reached.
    fn put_record(
        &self,
        payload: &str,
    ) -> impl Future<Output = Result<String, TelemetryError>> + Send;
}

/// Firehose delivery stream addressed by name and region.
#[derive(Debug, Clone)]
pub struct FirehoseStream {
    client: Client,
    stream_name: String,
}

impl FirehoseStream {
    /// Build a client for `stream_name` in `region`.
    ///
    /// Credentials come from the default AWS provider chain (environment,
    /// profile, or the container task role).
    pub async fn connect(stream_name: &str, region: &str) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_owned()))
            .load()
            .await;
        Self::from_client(Client::new(&sdk_config), stream_name)
    }

    /// Wrap an already configured Firehose client.
    pub fn from_client(client: Client, stream_name: impl Into<String>) -> Self {
        Self {
            client,
            stream_name: stream_name.into(),
        }
    }
}

impl DeliveryStream for FirehoseStream {
    fn name(&self) -> &str {
        &self.stream_name
    }

    async fn put_record(&self, payload: &str) -> Result<String, TelemetryError> {
        let record = Record::builder()
            .data(Blob::new(payload.as_bytes()))
            .build()
            .map_err(|e| TelemetryError::Delivery(format!("invalid record: {e}")))?;

        let output = self
            .client
            .put_record()
            .delivery_stream_name(&self.stream_name)
            .record(record)
            .send()
            .await
            .map_err(|e| {
                TelemetryError::Delivery(format!(
                    "PutRecord to {} failed: {}",
                    self.stream_name,
                    DisplayErrorContext(&e)
                ))
            })?;

        Ok(output.record_id().to_owned())
    }
}
