//! Best-effort debug telemetry.
//!
//! When a visual-debugging listener is running on the local machine, the
//! engine streams newline-delimited JSON event records to it. The
//! connection is attempted a fixed number of times at startup; failure is a
//! warning, never an error, and a write failure silently drops the
//! connection for the rest of the session. The engine never reads from the
//! socket and never blocks on it beyond the short connect timeout.

use std::io::Write;
use std::net::{SocketAddr, TcpStream};
use std::time::Duration;

use serde::Serialize;

/// Loopback endpoint the debug listener is expected on.
const ENDPOINT: ([u8; 4], u16) = ([127, 0, 0, 1], 5425);
const CONNECT_ATTEMPTS: u32 = 10;
const CONNECT_TIMEOUT: Duration = Duration::from_millis(50);

/// One telemetry record, serialized as a JSON line.
#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub(crate) enum TelemetryEvent {
    WorldCreated {
        thread_count: usize,
        gravity: [f32; 3],
    },
    MeshCooked {
        handle: usize,
        vertices: usize,
        triangles: usize,
    },
    StaticActorPlaced {
        position: [f32; 3],
    },
    TerrainPlaced {
        size_x: u32,
        size_y: u32,
    },
    ControllerCreated {
        handle: usize,
        height: f32,
        radius: f32,
    },
    Step {
        dt: f32,
    },
}

/// Fire-and-forget client for the local debug listener.
#[derive(Debug)]
pub(crate) struct TelemetryClient {
    stream: TcpStream,
}

impl TelemetryClient {
    /// Attempts to reach the listener. `None` means no listener answered
    /// within the fixed attempt budget.
    pub(crate) fn connect() -> Option<Self> {
        let addr = SocketAddr::from(ENDPOINT);
        for _ in 0..CONNECT_ATTEMPTS {
            if let Ok(stream) = TcpStream::connect_timeout(&addr, CONNECT_TIMEOUT) {
                let _ = stream.set_nodelay(true);
                return Some(Self { stream });
            }
        }
        None
    }

    /// Sends one event. Returns `false` once the connection is lost so the
    /// caller can drop the client.
    pub(crate) fn send(&mut self, event: &TelemetryEvent) -> bool {
        let write = serde_json::to_writer(&mut self.stream, event)
            .map_err(std::io::Error::from)
            .and_then(|()| self.stream.write_all(b"\n"));
        write.is_ok()
    }
}
