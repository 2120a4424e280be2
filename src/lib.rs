//! Identifies the Raspberry Pi model the current process runs on from the
//! revision code the kernel exposes in `/proc/cpuinfo` or the device tree.

pub mod app;
pub mod common;
pub mod config;
pub mod enums;
pub mod hardware;
pub mod log;
pub mod models;

pub use common::error::DecodeError;
pub use hardware::source::{decode, RevisionDecoder};
pub use models::revision_record::RevisionRecord;
