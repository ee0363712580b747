//! Message conversion processor
//!
//! Receives messages whose payload is a raw EDI string, converts the
//! payload to XML with the configured options, and hands back the message
//! for forwarding. A conversion failure is reported through the log and
//! the message is dropped; partial output is never forwarded.
#![allow(clippy::must_use_candidate)] // Small constructor/accessor API without pervasive #[must_use].

use crate::Result;
use crate::config::ProcessorConfig;
use crate::message::Message;
use tracing::{debug, error};
use xedi_x12::X12Parser;
use xedi_xml::{XmlOptions, XmlSerializer};

/// Running counters for a processor instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessorStats {
    /// Messages with a non-empty payload that were picked up.
    pub messages_processed: usize,
    /// Messages successfully converted.
    pub messages_converted: usize,
    /// Messages dropped because conversion failed.
    pub messages_failed: usize,
}

/// Converts message payloads from EDI to XML.
#[derive(Debug, Default)]
pub struct Processor {
    config: ProcessorConfig,
    stats: ProcessorStats,
    sequence: u64,
}

impl Processor {
    /// Create a processor with the given configuration.
    pub fn new(config: ProcessorConfig) -> Self {
        Self {
            config,
            stats: ProcessorStats::default(),
            sequence: 0,
        }
    }

    /// Create a processor with default configuration.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Process one inbound message.
    ///
    /// Returns the outbound message with its payload replaced by XML and a
    /// fresh sequential id, or `None` when the processor is disabled, the
    /// payload is empty or absent, or conversion failed. Failures are
    /// reported through the log rather than propagated to the transport.
    pub fn process_message(&mut self, message: Message) -> Option<Message> {
        if !self.config.enabled {
            return None;
        }
        let data = message.data.as_deref().filter(|data| !data.is_empty())?;

        self.stats.messages_processed += 1;
        if self.config.debug {
            debug!(message_id = %message.id, bytes = data.len(), "converting message payload");
        }

        match self.convert(data) {
            Ok(xml) => {
                self.stats.messages_converted += 1;
                self.sequence += 1;
                Some(Message {
                    id: format!("{:06}", self.sequence),
                    data: Some(xml),
                    received_at: message.received_at,
                })
            }
            Err(err) => {
                self.stats.messages_failed += 1;
                error!(message_id = %message.id, error = %err, "EDI conversion failed");
                None
            }
        }
    }

    /// Convert a raw EDI payload to XML using the configured options.
    pub fn convert(&self, data: &str) -> Result<String> {
        let mut parser = X12Parser::from_text(data);
        parser.parse()?;

        let serializer = XmlSerializer::new(XmlOptions {
            indent: self.config.indent,
            include_header: self.config.include_headers,
        });
        Ok(serializer.serialize(parser.document())?)
    }

    /// Current counters.
    pub fn stats(&self) -> ProcessorStats {
        self.stats
    }

    /// Configuration in effect.
    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }
}
