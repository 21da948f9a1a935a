use std::io;
use std::time::Duration;

use tokio::net::TcpStream;
use tokio::time::timeout;

/// Attempts a single TCP handshake against `host:port`, bounded by
/// `probe_timeout`.
///
/// Name resolution happens inside [`TcpStream::connect`], so a resolution
/// failure surfaces as an ordinary `io::Error` here rather than a panic.
/// An expired timer is mapped onto [`io::ErrorKind::TimedOut`] so callers
/// see one uniform error type for every failure path. The stream is
/// dropped immediately; a completed handshake is all we need.
pub async fn connect(host: &str, port: u16, probe_timeout: Duration) -> io::Result<()> {
    let addr: String = format!("{host}:{port}");

    match timeout(probe_timeout, TcpStream::connect(&addr)).await {
        Ok(Ok(_stream)) => Ok(()),
        Ok(Err(e)) => Err(e),
        Err(_elapsed) => Err(io::Error::new(
            io::ErrorKind::TimedOut,
            "connection timed out",
        )),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
