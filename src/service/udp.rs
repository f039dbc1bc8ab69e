use std::net::{SocketAddr, UdpSocket};
use tracing::{info, warn};
use crate::core::error::{Error, ErrorKind, Result};
use crate::search::pipeline::QueryPipeline;

/// Stateless UDP query service: one datagram in (the raw query string), one
/// formatted-text datagram out. Synchronous and single-threaded; no
/// concurrent query handling, no retries, a lost reply is not resent.
pub struct QueryService {
    socket: UdpSocket,
    pipeline: QueryPipeline,
    buffer_size: usize,
}

impl QueryService {
    /// Bind failures are fatal; everything after bind is skip-and-continue.
    pub fn bind(addr: &str, pipeline: QueryPipeline, buffer_size: usize) -> Result<Self> {
        let socket = UdpSocket::bind(addr).map_err(|e| {
            Error::new(ErrorKind::Network, format!("cannot bind {}: {}", addr, e))
        })?;
        info!(%addr, "query service listening");
        Ok(QueryService {
            socket,
            pipeline,
            buffer_size,
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.socket.local_addr()?)
    }

    /// Serve queries forever, one at a time.
    pub fn run(&self) {
        let mut buf = vec![0u8; self.buffer_size];
        loop {
            let (len, peer) = match self.socket.recv_from(&mut buf) {
                Ok(received) => received,
                Err(e) => {
                    warn!(error = %e, "receive failed, waiting for next datagram");
                    continue;
                }
            };
            let query = String::from_utf8_lossy(&buf[..len]);
            info!(%peer, query = %query, "query received");

            let response = self.pipeline.execute_formatted(&query);
            let payload = truncate_to_bound(&response, self.buffer_size);
            match self.socket.send_to(payload.as_bytes(), peer) {
                Ok(sent) => info!(%peer, bytes = sent, "response sent"),
                Err(e) => warn!(%peer, error = %e, "send failed, reply dropped"),
            }
        }
    }
}

/// Responses beyond the datagram bound are cut at the last char boundary
/// that fits. Inherited transport limitation: callers must not expect more.
fn truncate_to_bound(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
