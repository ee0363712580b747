//! Message envelope
#![allow(clippy::must_use_candidate)] // Small constructor/accessor API without pervasive #[must_use].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message moving through the conversion processor.
///
/// The payload carries raw EDI text on the way in and XML text on the way
/// out; a message with no payload is passed over without processing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Message identifier assigned by the transport.
    pub id: String,

    /// Payload text, if any.
    pub data: Option<String>,

    /// When the transport received the message.
    pub received_at: Option<DateTime<Utc>>,
}

impl Message {
    /// Create a message with the given id and payload.
    pub fn new(id: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data: Some(data.into()),
            received_at: None,
        }
    }

    /// Create a message with no payload.
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data: None,
            received_at: None,
        }
    }

    /// Attach the transport receive time.
    #[must_use]
    pub fn with_received_at(mut self, received_at: DateTime<Utc>) -> Self {
        self.received_at = Some(received_at);
        self
    }
}
