//! HEAD-request probing.
//!
//! A single [`reqwest::Client`] is built per batch with both the connect
//! and the overall request timeout set to the configured value, then
//! shared by every probing task (the client is internally reference
//! counted, so cloning it is cheap and keeps connection pooling in one
//! place).

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

/// What a single HEAD attempt proved about the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadResult {
    /// Any HTTP response at all, including 4xx/5xx: something answered.
    Status(u16),
    /// TLS negotiation failed, which still proves a listener is serving
    /// TLS on the target. Classified separately so the caller can report
    /// it as reachable-with-certificate-trouble.
    TlsHandshake,
    /// DNS failure, refused connection, timeout, malformed host. Tells us
    /// nothing; the caller falls through to the next probe layer.
    Unreachable,
}

/// Builds the shared per-batch client. Redirects follow the default
/// policy, mirroring the status code a browser-ish client would end on.
pub fn build_client(probe_timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .connect_timeout(probe_timeout)
        .timeout(probe_timeout)
        .build()
}

/// Issues one HEAD request and classifies the result.
pub async fn head(client: &Client, url: &str) -> HeadResult {
    match client.head(url).send().await {
        Ok(response) => HeadResult::Status(response.status().as_u16()),
        Err(e) if is_tls_failure(&e) => HeadResult::TlsHandshake,
        Err(e) => {
            debug!("HEAD {url} failed: {e}");
            HeadResult::Unreachable
        }
    }
}

/// Walks the error source chain looking for a TLS-layer failure.
///
/// reqwest wraps the TLS backend's error several levels deep and exposes
/// no typed accessor for it, so classification goes by the rendered
/// messages of the inner chain. The outermost error is skipped: its
/// Display embeds the request URL, and a hostname like `ssl.example.com`
/// must never be mistaken for a TLS failure. The patterns are the ones
/// rustls uses for negotiation rejections ("invalid peer certificate",
/// "received fatal alert"); a plaintext listener answering the
/// ClientHello with garbage or EOF matches neither and falls through.
fn is_tls_failure(err: &reqwest::Error) -> bool {
    let top: &(dyn std::error::Error + 'static) = err;
    let mut source = top.source();

    while let Some(e) = source {
        let text: String = e.to_string().to_ascii_lowercase();
        if text.contains("certificate") || text.contains("fatal alert") {
            return true;
        }
        source = e.source();
    }

    false
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
