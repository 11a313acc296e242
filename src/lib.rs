pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::SerialPortOpener;
pub use config::device::{DeviceSettings, BAUD_RATE, DEVICE_PATH};
pub use core::writer::Writer;
pub use domain::{model::Outcome, ports::PortOpener};
pub use utils::error::{Result, SendError};
