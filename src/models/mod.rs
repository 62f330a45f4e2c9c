//! Data models for SMDR call records.
//!
//! - [`CallRecord`] - One structured call-detail record parsed from a switch line
//! - [`CallDirection`] - Incoming/outgoing classification derived from the call type

pub mod record;

pub use record::{CallDirection, CallRecord};
