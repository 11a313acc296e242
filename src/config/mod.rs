pub mod device;

#[cfg(feature = "cli")]
use clap::Parser;

/// Command line of the `serial-send` binary. The device path and baud rate
/// are fixed, see [`device::DeviceSettings`].
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "serial-send")]
#[command(about = "Write a message to the serial port /dev/ttyAMA0 at 2500000 baud")]
pub struct CliConfig {
    /// Text to send; written as raw UTF-8 with no terminator
    #[arg(allow_hyphen_values = true)]
    pub message: String,

    /// Anything after the message is accepted and not sent.
    #[arg(hide = true, num_args = 0.., allow_hyphen_values = true)]
    pub ignored: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
