use crate::config::device::DeviceSettings;
use crate::utils::error::Result;
use std::io::Write;

/// Opens the byte sink a message is written to. The returned port is
/// closed when it is dropped.
pub trait PortOpener: Send + 'static {
    type Port: Write + Send;

    fn open(&self, settings: &DeviceSettings) -> Result<Self::Port>;
}
