use log::debug;
use uuid::Uuid;

use crate::{LinkAdapter, LinkError};

/// An in-process link that records everything written to it.
///
/// Stands in for the radio in tests and demos.
#[derive(Debug, Default)]
pub struct LoopbackLink {
    written: Vec<u8>,
}

impl LoopbackLink {
    pub fn written(&self) -> &[u8] {
        &self.written
    }
}

impl LinkAdapter for LoopbackLink {
    async fn connect(&mut self, service: Uuid) -> Result<(), LinkError> {
        debug!("Loopback connect for service {service}");
        Ok(())
    }

    async fn write(&mut self, byte: u8) -> Result<(), LinkError> {
        self.written.push(byte);
        Ok(())
    }
}
