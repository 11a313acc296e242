use crate::utils::error::Result;
use crate::utils::validation::{validate_baud_rate, validate_device_path, Validate};
use std::time::Duration;

/// UART on the Raspberry Pi GPIO header.
pub const DEVICE_PATH: &str = "/dev/ttyAMA0";

pub const BAUD_RATE: u32 = 2_500_000;

/// Upper bound on one blocked write. The serial library needs a nonzero
/// timeout. Linux caps a single argument at 128 KiB, about 0.52 s of line
/// time at 2.5 Mbaud, so a healthy UART never reaches it. Hitting it
/// surfaces as an I/O error.
pub const WRITE_TIMEOUT: Duration = Duration::from_secs(1);

/// Where and how fast to talk. Parity, data bits, stop bits and flow
/// control are left at the serial library's defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceSettings {
    pub path: String,
    pub baud_rate: u32,
    pub timeout: Duration,
}

impl Default for DeviceSettings {
    fn default() -> Self {
        Self {
            path: DEVICE_PATH.to_string(),
            baud_rate: BAUD_RATE,
            timeout: WRITE_TIMEOUT,
        }
    }
}

impl Validate for DeviceSettings {
    fn validate(&self) -> Result<()> {
        validate_device_path(&self.path)?;
        validate_baud_rate(self.baud_rate)
    }
}
