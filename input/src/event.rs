use derive_more::Constructor;

use tremor_geometry::Point;

/// Lifecycle phase of a pointer sample for a single logical contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Begin,
    Move,
    End,
}

/// One raw pointer sample as delivered by the input source.
#[derive(Debug, Clone, Copy, PartialEq, Constructor)]
pub struct TouchSample {
    pub position: Point,
    pub phase: TouchPhase,
}

impl TouchSample {
    pub fn begin(position: impl Into<Point>) -> Self {
        Self::new(position.into(), TouchPhase::Begin)
    }

    pub fn moved(position: impl Into<Point>) -> Self {
        Self::new(position.into(), TouchPhase::Move)
    }

    pub fn end(position: impl Into<Point>) -> Self {
        Self::new(position.into(), TouchPhase::End)
    }
}
