pub mod adapters;
pub mod config;
pub mod domain;
pub mod utils;
pub mod web;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::HubSpotClient;
pub use config::PortalSettings;
pub use domain::{NewRecord, Record, RecordStore};
pub use utils::error::{PortalError, Result};
