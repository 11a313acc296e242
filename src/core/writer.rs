use crate::config::device::DeviceSettings;
use crate::domain::model::Outcome;
use crate::domain::ports::PortOpener;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::future::Future;
use std::io::Write;

/// Opens the device, writes one message, closes the device.
pub struct Writer<O: PortOpener> {
    opener: O,
    settings: DeviceSettings,
}

impl<O: PortOpener> Writer<O> {
    pub fn new(opener: O, settings: DeviceSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { opener, settings })
    }

    /// Blocking open, write, flush. The port is dropped, and so closed,
    /// before this returns on every path.
    pub fn send(&self, message: &str) -> Result<usize> {
        let bytes = message.as_bytes();
        let mut port = self.opener.open(&self.settings)?;

        port.write_all(bytes)?;
        port.flush()?;
        drop(port);

        tracing::debug!(bytes = bytes.len(), path = %self.settings.path, "Message written");
        Ok(bytes.len())
    }

    /// Runs [`Writer::send`] on a blocking worker and races it against
    /// `shutdown`. When `shutdown` wins the worker keeps the port until
    /// its write returns, then drops it.
    pub async fn send_until<F>(self, message: String, shutdown: F) -> Result<Outcome>
    where
        F: Future<Output = ()>,
    {
        let worker = tokio::task::spawn_blocking(move || self.send(&message));
        tokio::pin!(shutdown);

        tokio::select! {
            biased;
            _ = &mut shutdown => {
                tracing::debug!("Interrupted, leaving quietly");
                Ok(Outcome::Interrupted)
            }
            joined = worker => {
                let bytes = joined??;
                Ok(Outcome::Sent { bytes })
            }
        }
    }
}
