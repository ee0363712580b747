#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # xedi-pipeline
//!
//! Message-processing adapter around the conversion engine.
//!
//! This crate provides the glue a message transport needs: a YAML-loadable
//! [`ProcessorConfig`], a [`Message`] envelope, and a [`Processor`] that
//! converts an inbound EDI payload to XML and forwards it, reporting any
//! conversion failure through the log instead of propagating it.

pub mod config;
pub mod message;
pub mod processor;

pub use config::ProcessorConfig;
pub use message::Message;
pub use processor::{Processor, ProcessorStats};

use thiserror::Error;

/// Errors that can occur in the processing adapter
#[derive(Error, Debug)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] xedi_x12::Error),

    #[error("serialize error: {0}")]
    Serialize(#[from] xedi_xml::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_yaml::Error),
}

/// Crate-local result type for processing operations.
pub type Result<T> = std::result::Result<T, Error>;
