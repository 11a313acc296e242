use crate::config::device::DeviceSettings;
use crate::domain::ports::PortOpener;
use crate::utils::error::Result;
use serialport::SerialPort;

/// Opens real serial devices through the `serialport` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialPortOpener;

impl PortOpener for SerialPortOpener {
    type Port = Box<dyn SerialPort>;

    fn open(&self, settings: &DeviceSettings) -> Result<Self::Port> {
        tracing::debug!(
            path = %settings.path,
            baud_rate = settings.baud_rate,
            "Opening serial device"
        );

        let port = serialport::new(&settings.path, settings.baud_rate)
            .timeout(settings.timeout)
            .open()?;

        Ok(port)
    }
}
