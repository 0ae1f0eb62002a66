use log::{debug, warn};

use tremor_geometry::Point;

use crate::{GestureCommand, MeasurementRecord, TouchPhase, TouchSample};

/// Displacement from the down position above which motion counts as a drag
/// and not as jitter. Surface units, compared strictly.
pub const DEFAULT_DRAG_THRESHOLD: f64 = 10.0;

/// What the tracker emits while digesting a sample.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureEvent {
    Command(GestureCommand),
    Measurement(MeasurementRecord),
}

/// Per-contact state. Lives from `Begin` to the matching `Up`.
#[derive(Debug, Clone)]
struct GestureSession {
    down_position: Point,
    /// Position of the most recent sample of this contact, used to suppress
    /// zero-movement samples and to close the session synthetically.
    last_position: Point,
    drag_announced: bool,
}

impl GestureSession {
    fn open(at: Point) -> Self {
        Self {
            down_position: at,
            last_position: at,
            drag_announced: false,
        }
    }
}

/// Classifies a raw pointer sample stream into `Down`, at most one
/// `DragStart`, and `Up` per contact, and measures every effective sample
/// against the current target.
///
/// One contact at a time; samples arrive serialized, so there is no internal
/// locking.
#[derive(Debug)]
pub struct GestureTracker {
    drag_threshold: f64,
    session: Option<GestureSession>,
    /// Not reset on session boundaries.
    next_sequence: u64,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(DEFAULT_DRAG_THRESHOLD)
    }
}

impl GestureTracker {
    pub fn new(drag_threshold: f64) -> Self {
        Self {
            drag_threshold,
            session: None,
            next_sequence: 0,
        }
    }

    /// Digest one sample against the current target position.
    ///
    /// The returned events are in emission order: commands and measurements
    /// must be forwarded exactly as sequenced here.
    pub fn process(&mut self, sample: TouchSample, target: Point) -> Vec<GestureEvent> {
        match sample.phase {
            TouchPhase::Begin => self.begin(sample.position, target),
            TouchPhase::Move => self.moved(sample.position, target),
            TouchPhase::End => self.end(sample.position, target),
        }
    }

    /// Discard an in-flight session without a synthetic `Up`.
    ///
    /// For pipeline cancellation (contact lost, surface torn down). The
    /// sequence counter keeps its value.
    pub fn reset(&mut self) {
        self.session = None;
    }

    fn begin(&mut self, position: Point, target: Point) -> Vec<GestureEvent> {
        let mut events = Vec::new();

        // A second Begin on a live session is a protocol violation of the
        // input source. Close the stale session with a synthetic Up so the
        // command order stays intact, then open the new one.
        if let Some(stale) = self.session.take() {
            warn!("Begin with a session in progress, closing the stale session");
            events.push(self.measure(target, stale.last_position));
            events.push(GestureEvent::Command(GestureCommand::Up));
        }

        self.session = Some(GestureSession::open(position));
        events.push(GestureEvent::Command(GestureCommand::Down));
        events.push(self.measure(target, position));
        events
    }

    fn moved(&mut self, position: Point, target: Point) -> Vec<GestureEvent> {
        let Some(session) = &mut self.session else {
            debug!("Move without a session, ignoring");
            return Vec::new();
        };

        // Zero movement is jitter-free repetition: no command, no record.
        if position == session.last_position {
            return Vec::new();
        }

        let crossed_threshold = !session.drag_announced
            && position.distance_to(session.down_position) > self.drag_threshold;
        if crossed_threshold {
            session.drag_announced = true;
        }
        session.last_position = position;

        let mut events = Vec::new();
        if crossed_threshold {
            events.push(GestureEvent::Command(GestureCommand::DragStart));
        }
        events.push(self.measure(target, position));
        events
    }

    fn end(&mut self, position: Point, target: Point) -> Vec<GestureEvent> {
        if self.session.take().is_none() {
            warn!("End without a session, ignoring");
            return Vec::new();
        }

        vec![
            self.measure(target, position),
            GestureEvent::Command(GestureCommand::Up),
        ]
    }

    fn measure(&mut self, target: Point, touch: Point) -> GestureEvent {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        GestureEvent::Measurement(MeasurementRecord::new(sequence, target, touch))
    }
}
