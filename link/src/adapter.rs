use thiserror::Error;
use uuid::{Uuid, uuid};

/// Service advertised by the peripheral; used as the scan filter.
pub const SERVICE_UUID: Uuid = uuid!("4fafc201-1fb5-459e-8fcc-c5c9c331914b");

/// Characteristic the command bytes are written to.
pub const TASK_CHARACTERISTIC_UUID: Uuid = uuid!("beb5483e-36e1-4688-b7f5-ea07361b26a8");

/// Connectivity changes reported by the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkEvent {
    /// A device matching the filter was connected. Writes are not possible
    /// yet, service discovery is still running.
    Connected,
    Disconnected,
    /// The task characteristic was discovered, writes may proceed.
    ServiceReady,
}

#[derive(Debug, Error)]
pub enum LinkError {
    /// Not connected, or the characteristic has not been discovered yet.
    #[error("link not ready")]
    NotReady,
    /// The transport failed to carry the write.
    #[error("link write failed: {0}")]
    WriteFailed(String),
}

/// The opaque transport. Real radio, loopback, or mock.
///
/// Writes are fire-and-forget: the peripheral never acknowledges, so a
/// silently dropped byte is indistinguishable from a delivered one.
// Callers are generic over the adapter, auto trait bounds stay with the
// implementation.
#[allow(async_fn_in_trait)]
pub trait LinkAdapter {
    /// Connect to the first device advertising `service`.
    async fn connect(&mut self, service: Uuid) -> Result<(), LinkError>;

    /// Write a single byte to the task characteristic.
    ///
    /// May suspend on the underlying transport.
    async fn write(&mut self, byte: u8) -> Result<(), LinkError>;
}
