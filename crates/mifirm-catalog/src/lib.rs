//! Supported wearables and the firmware payloads each one needs.
//!
//! # Architecture
//!
//! - `device.rs` - A single device record and its archive entry paths
//! - `catalog.rs` - The ordered, read-only built-in table and 1-based selection

pub use catalog::{BUILTIN, Catalog};
pub use device::{ASSET_PREFIX, DeviceRecord, is_plain_name};
pub use error::{Error, Result};

mod catalog;
mod device;
mod error;
