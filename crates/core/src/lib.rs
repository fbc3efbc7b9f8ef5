//! Domain types for the activities service.
//!
//! Holds everything that does not touch I/O: the identifier newtype, the
//! error taxonomy shared by the store and the HTTP layer, and validation of
//! inbound activity payloads.

pub mod activity;
pub mod error;
pub mod types;
