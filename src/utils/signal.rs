use std::future::Future;

/// Installs the Ctrl+C handler now and returns a future that resolves on
/// the next interrupt. Must be called from inside a tokio runtime.
///
/// Signals that arrive between this call and the first poll are not lost.
#[cfg(unix)]
pub fn interrupt() -> std::io::Result<impl Future<Output = ()> + Send + 'static> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt())?;
    Ok(async move {
        sigint.recv().await;
    })
}

// Windows installs its console handler lazily on first poll.
#[cfg(not(unix))]
pub fn interrupt() -> std::io::Result<impl Future<Output = ()> + Send + 'static> {
    Ok(async {
        let _ = tokio::signal::ctrl_c().await;
    })
}
