use std::thread;

use futures::executor::block_on;
use log::warn;
use tokio::sync::mpsc::{self, UnboundedSender};
use uuid::Uuid;

use tremor_input::GestureCommand;

use crate::{CommandDispatcher, LinkAdapter, LinkEvent};

#[derive(Debug)]
enum DispatchMessage {
    Command(GestureCommand),
    Connectivity(LinkEvent),
}

/// Feeds the dispatcher without waiting for the transport.
///
/// Commands and connectivity changes share one queue, so a readiness change
/// stays ordered with the commands around it.
#[derive(Debug, Clone)]
pub struct DispatchHandle {
    sender: UnboundedSender<DispatchMessage>,
}

impl DispatchHandle {
    /// Queue a command. A command that cannot be queued or written is
    /// logged and dropped, never retried.
    pub fn dispatch(&self, command: GestureCommand) {
        if self.sender.send(DispatchMessage::Command(command)).is_err() {
            warn!("Dispatch worker is gone, command {command:?} dropped");
        }
    }

    pub fn connectivity_changed(&self, event: LinkEvent) {
        if self
            .sender
            .send(DispatchMessage::Connectivity(event))
            .is_err()
        {
            warn!("Dispatch worker is gone, connectivity change dropped");
        }
    }
}

/// Spawn the dispatch worker around `link`.
///
/// Connects to `service` first, then drains the queue. A suspended write
/// only ever parks this worker; sample processing and measurement recording
/// continue independently. The worker exits once every handle is dropped
/// and hands the dispatcher back for inspection.
pub fn spawn_dispatcher<L>(
    link: L,
    service: Uuid,
) -> (DispatchHandle, thread::JoinHandle<CommandDispatcher<L>>)
where
    L: LinkAdapter + Send + 'static,
{
    let (sender, mut receiver) = mpsc::unbounded_channel();

    let worker = thread::spawn(move || {
        let mut link = link;
        if let Err(e) = block_on(link.connect(service)) {
            // Not fatal: the transport reports connectivity separately, and
            // an unready dispatcher fails fast anyway.
            warn!("Link connect failed: {e}");
        }

        let mut dispatcher = CommandDispatcher::new(link);
        while let Some(message) = receiver.blocking_recv() {
            match message {
                DispatchMessage::Connectivity(event) => dispatcher.connectivity_changed(event),
                DispatchMessage::Command(command) => {
                    if let Err(e) = block_on(dispatcher.dispatch(command)) {
                        warn!("Command {command:?} dropped: {e}");
                    }
                }
            }
        }
        dispatcher
    });

    (DispatchHandle { sender }, worker)
}
