use tremor_geometry::{Point, Size};
use tremor_input::{GestureEvent, GestureTracker, Target, TouchSample};
use tremor_link::{DispatchHandle, LinkEvent};
use tremor_recorder::RecorderHandle;

use crate::SessionConfig;

/// Wires the gesture tracker to the command and measurement consumers.
///
/// The two output streams are independent workers: a pending link write
/// never stops measurements, and slow storage never delays a command byte.
/// Ordering is guaranteed within each stream, not between them. Nothing
/// here fails: a link or storage problem degrades that one command or
/// record and is logged by the owning worker.
#[derive(Debug)]
pub struct SessionPipeline {
    tracker: GestureTracker,
    target: Target,
    commands: DispatchHandle,
    recorder: RecorderHandle,
}

impl SessionPipeline {
    pub fn new(config: &SessionConfig, commands: DispatchHandle, recorder: RecorderHandle) -> Self {
        Self {
            tracker: GestureTracker::new(config.drag_threshold),
            target: Target::default(),
            commands,
            recorder,
        }
    }

    /// Digest one pointer sample, routing whatever it produced.
    pub fn pointer_sample(&mut self, sample: TouchSample) {
        for event in self.tracker.process(sample, self.target.point()) {
            match event {
                GestureEvent::Command(command) => self.commands.dispatch(command),
                GestureEvent::Measurement(record) => self.recorder.submit(record),
            }
        }
    }

    /// The drawable area changed: the target moves to its center.
    ///
    /// Only affects the deltas of subsequent records, the link is not
    /// involved.
    pub fn surface_resized(&mut self, size: Size) {
        self.target.relocate(size);
    }

    pub fn link_event(&mut self, event: LinkEvent) {
        self.commands.connectivity_changed(event);
    }

    /// Discard the contact in flight, if any, without a synthetic `Up`.
    pub fn cancel(&mut self) {
        self.tracker.reset();
    }

    pub fn target(&self) -> Point {
        self.target.point()
    }
}
