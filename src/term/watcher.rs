//! Resize notifications.
//!
//! On Unix a background task listens for SIGWINCH and republishes the
//! terminal geometry into the shared [`TerminalSize`].

use std::io;
use std::sync::Arc;

use tokio::task::JoinHandle;

use super::size::TerminalSize;

/// Spawn the resize watcher on the current tokio runtime.
#[cfg(unix)]
pub fn spawn_resize_watcher(size: Arc<TerminalSize>) -> io::Result<JoinHandle<()>> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut resized = signal(SignalKind::window_change())?;
    Ok(tokio::spawn(async move {
        while resized.recv().await.is_some() {
            size.refresh();
        }
    }))
}

/// No resize signal outside Unix; geometry stays as detected at startup.
#[cfg(not(unix))]
pub fn spawn_resize_watcher(size: Arc<TerminalSize>) -> io::Result<JoinHandle<()>> {
    drop(size);
    Ok(tokio::spawn(async {}))
}
