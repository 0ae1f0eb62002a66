use log::{debug, warn};

use tremor_input::GestureCommand;

use crate::{LinkAdapter, LinkError, LinkEvent};

/// The single ASCII byte a command travels as.
pub const fn wire_byte(command: GestureCommand) -> u8 {
    match command {
        GestureCommand::Down => b'1',
        GestureCommand::DragStart => b'2',
        GestureCommand::Up => b'3',
    }
}

/// Serializes gesture commands onto the link.
///
/// Gated on service readiness: until the transport reports
/// [`LinkEvent::ServiceReady`], every dispatch fails fast with
/// [`LinkError::NotReady`] instead of blocking. Callers must not retry; a
/// dropped command stays dropped.
#[derive(Debug)]
pub struct CommandDispatcher<L> {
    link: L,
    service_ready: bool,
}

impl<L: LinkAdapter> CommandDispatcher<L> {
    pub fn new(link: L) -> Self {
        Self {
            link,
            service_ready: false,
        }
    }

    pub fn connectivity_changed(&mut self, event: LinkEvent) {
        match event {
            LinkEvent::Connected => {
                debug!("Link connected, waiting for service discovery");
            }
            LinkEvent::ServiceReady => {
                self.service_ready = true;
            }
            LinkEvent::Disconnected => {
                warn!("Link disconnected");
                self.service_ready = false;
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        self.service_ready
    }

    pub async fn dispatch(&mut self, command: GestureCommand) -> Result<(), LinkError> {
        if !self.service_ready {
            return Err(LinkError::NotReady);
        }
        self.link.write(wire_byte(command)).await
    }

    pub fn link(&self) -> &L {
        &self.link
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use uuid::Uuid;

    use crate::LoopbackLink;

    use super::*;

    struct FailingLink;

    impl LinkAdapter for FailingLink {
        async fn connect(&mut self, _service: Uuid) -> Result<(), LinkError> {
            Ok(())
        }

        async fn write(&mut self, _byte: u8) -> Result<(), LinkError> {
            Err(LinkError::WriteFailed("radio gone".into()))
        }
    }

    #[test]
    fn byte_mapping() {
        assert_eq!(wire_byte(GestureCommand::Down), b'1');
        assert_eq!(wire_byte(GestureCommand::DragStart), b'2');
        assert_eq!(wire_byte(GestureCommand::Up), b'3');
    }

    #[test]
    fn dispatch_fails_fast_until_service_ready() {
        let mut dispatcher = CommandDispatcher::new(LoopbackLink::default());

        let result = block_on(dispatcher.dispatch(GestureCommand::Down));
        assert!(matches!(result, Err(LinkError::NotReady)));

        // Connected alone is not enough.
        dispatcher.connectivity_changed(LinkEvent::Connected);
        let result = block_on(dispatcher.dispatch(GestureCommand::Down));
        assert!(matches!(result, Err(LinkError::NotReady)));

        dispatcher.connectivity_changed(LinkEvent::ServiceReady);
        block_on(dispatcher.dispatch(GestureCommand::Down)).unwrap();
        assert_eq!(dispatcher.link().written(), b"1");
    }

    #[test]
    fn disconnect_disarms_the_dispatcher() {
        let mut dispatcher = CommandDispatcher::new(LoopbackLink::default());
        dispatcher.connectivity_changed(LinkEvent::ServiceReady);
        block_on(dispatcher.dispatch(GestureCommand::Down)).unwrap();

        dispatcher.connectivity_changed(LinkEvent::Disconnected);
        let result = block_on(dispatcher.dispatch(GestureCommand::Up));
        assert!(matches!(result, Err(LinkError::NotReady)));
        assert_eq!(dispatcher.link().written(), b"1");
    }

    #[test]
    fn transport_failure_surfaces_as_write_failed() {
        let mut dispatcher = CommandDispatcher::new(FailingLink);
        dispatcher.connectivity_changed(LinkEvent::ServiceReady);

        let result = block_on(dispatcher.dispatch(GestureCommand::Down));
        assert!(matches!(result, Err(LinkError::WriteFailed(_))));
        // Still armed, the next command gets its own chance.
        assert!(dispatcher.is_ready());
    }

    #[test]
    fn full_gesture_on_the_wire() {
        let mut dispatcher = CommandDispatcher::new(LoopbackLink::default());
        dispatcher.connectivity_changed(LinkEvent::ServiceReady);

        for command in [
            GestureCommand::Down,
            GestureCommand::DragStart,
            GestureCommand::Up,
        ] {
            block_on(dispatcher.dispatch(command)).unwrap();
        }

        assert_eq!(dispatcher.link().written(), b"123");
    }
}
