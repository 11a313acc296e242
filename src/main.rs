use clap::Parser;
use serial_send::utils::{logger, signal};
use serial_send::{CliConfig, DeviceSettings, Outcome, SerialPortOpener, Writer};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let writer = Writer::new(SerialPortOpener, DeviceSettings::default())?;

    // Installed before the worker opens the device.
    let interrupt = signal::interrupt();
    let outcome = match interrupt {
        Ok(interrupted) => writer.send_until(config.message, interrupted).await?,
        Err(e) => {
            tracing::warn!("Unable to listen for Ctrl+C: {}", e);
            writer
                .send_until(config.message, std::future::pending())
                .await?
        }
    };

    match outcome {
        Outcome::Sent { bytes } => tracing::info!("Sent {} bytes", bytes),
        Outcome::Interrupted => {}
    }

    Ok(())
}
