//! Listener binding shared by both service binaries.

use std::net::Ipv4Addr;
use std::ops::RangeInclusive;
use tokio::net::TcpListener;

/// Ports scanned by the document service when no port is configured.
pub const DOC_PORT_RANGE: RangeInclusive<u16> = 5000..=5099;
/// Ports scanned by the entity service when no port is configured.
pub const NER_PORT_RANGE: RangeInclusive<u16> = 5100..=5199;

/// Bind `port` when given, otherwise the first free port in `fallback`.
///
/// Only `AddrInUse` moves the scan to the next port; any other bind error is returned.
pub async fn bind_listener(
    port: Option<u16>,
    fallback: RangeInclusive<u16>,
) -> Result<(TcpListener, u16), std::io::Error> {
    if let Some(port) = port {
        return TcpListener::bind((Ipv4Addr::UNSPECIFIED, port))
            .await
            .map(|listener| (listener, port));
    }

    let (first, last) = (*fallback.start(), *fallback.end());
    for port in fallback {
        match TcpListener::bind((Ipv4Addr::UNSPECIFIED, port)).await {
            Ok(listener) => {
                tracing::debug!(port, "Bound server port");
                return Ok((listener, port));
            }
            Err(err) if err.kind() == std::io::ErrorKind::AddrInUse => {
                tracing::debug!(port, "Port already in use; trying next");
                continue;
            }
            Err(err) => return Err(err),
        }
    }

    Err(std::io::Error::new(
        std::io::ErrorKind::AddrNotAvailable,
        format!("No available port found in range {first}-{last}"),
    ))
}
