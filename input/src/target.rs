use tremor_geometry::{Point, Size};

/// The point on the surface the user is meant to touch.
///
/// Single writer: only the surface resize path relocates it. The tracker
/// reads it on every sample, it never writes it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Target {
    point: Point,
}

impl Target {
    /// Move the target to the center of the resized surface.
    pub fn relocate(&mut self, size: Size) {
        self.point = size.center();
    }

    pub fn point(&self) -> Point {
        self.point
    }
}
