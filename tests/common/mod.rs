#![allow(dead_code)]

use serial_send::{DeviceSettings, PortOpener, Result};
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Barrier, Mutex};
use tokio::sync::oneshot;

/// In-memory stand-in for a serial device. Records what was written,
/// which settings it was opened with and whether the port was dropped.
#[derive(Clone, Default)]
pub struct MemoryOpener {
    pub written: Arc<Mutex<Vec<u8>>>,
    pub opened_with: Arc<Mutex<Vec<DeviceSettings>>>,
    pub closed: Arc<AtomicBool>,
    on_open: Arc<Mutex<Option<oneshot::Sender<()>>>>,
    gate: Option<Arc<Barrier>>,
}

impl MemoryOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fires `on_open` once the port is open and blocks every write until
    /// the returned barrier is waited on from the test.
    pub fn gated(on_open: oneshot::Sender<()>) -> (Self, Arc<Barrier>) {
        let gate = Arc::new(Barrier::new(2));
        let opener = Self {
            on_open: Arc::new(Mutex::new(Some(on_open))),
            gate: Some(gate.clone()),
            ..Self::default()
        };
        (opener, gate)
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.written.lock().unwrap().clone()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

pub struct MemoryPort {
    written: Arc<Mutex<Vec<u8>>>,
    closed: Arc<AtomicBool>,
    gate: Option<Arc<Barrier>>,
}

impl Write for MemoryPort {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if let Some(gate) = self.gate.take() {
            gate.wait();
        }
        self.written.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Drop for MemoryPort {
    fn drop(&mut self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

impl PortOpener for MemoryOpener {
    type Port = MemoryPort;

    fn open(&self, settings: &DeviceSettings) -> Result<Self::Port> {
        self.opened_with.lock().unwrap().push(settings.clone());
        if let Some(tx) = self.on_open.lock().unwrap().take() {
            let _ = tx.send(());
        }
        Ok(MemoryPort {
            written: self.written.clone(),
            closed: self.closed.clone(),
            gate: self.gate.clone(),
        })
    }
}

/// A port that refuses every write, like a device that vanished mid-send.
#[derive(Clone, Default)]
pub struct BrokenOpener {
    pub closed: Arc<AtomicBool>,
}

pub struct BrokenPort {
    closed: Arc<AtomicBool>,
}

impl Write for BrokenPort {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "device went away",
        ))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Drop for BrokenPort {
    fn drop(&mut self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

impl PortOpener for BrokenOpener {
    type Port = BrokenPort;

    fn open(&self, _settings: &DeviceSettings) -> Result<Self::Port> {
        Ok(BrokenPort {
            closed: self.closed.clone(),
        })
    }
}
