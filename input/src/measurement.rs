use chrono::{Local, NaiveDate};

use tremor_geometry::{Point, Vector};

/// One measurement of a touch against the current target.
///
/// Produced for every effective touch sample, not only on phase transitions.
/// Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementRecord {
    /// Strictly increasing over the lifetime of the tracker, used for
    /// storage naming only.
    pub sequence: u64,
    pub target: Point,
    pub touch: Point,
    pub delta: Vector,
    /// Day the sample was taken.
    pub recorded: NaiveDate,
}

impl MeasurementRecord {
    pub fn new(sequence: u64, target: Point, touch: Point) -> Self {
        Self {
            sequence,
            target,
            touch,
            delta: touch - target,
            recorded: Local::now().date_naive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_is_touch_minus_target() {
        let record = MeasurementRecord::new(0, (50.0, 50.0).into(), (100.0, 100.0).into());
        assert_eq!(record.delta, Point::new(50.0, 50.0));
    }
}
