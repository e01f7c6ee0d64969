use crate::types::Point;

/// Bounded toroidal coordinate space. All positions the simulation produces
/// satisfy `0 <= x, y < size`; stepping past an edge re-enters from the
/// opposite edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridModel {
    size: i32,
}

impl GridModel {
    pub fn new(size: i32) -> Result<Self, String> {
        if size < 1 {
            return Err(format!("Grid size must be positive, got {}", size));
        }
        Ok(Self { size })
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// Applies `delta` to one coordinate with wrap-around.
    ///
    /// Holds for unit deltas and, more generally, for any `delta` with
    /// `delta >= -size`.
    pub fn wrap(&self, coordinate: i32, delta: i32) -> i32 {
        (coordinate + delta + self.size) % self.size
    }

    pub fn center(&self) -> Point {
        Point::new(self.size / 2, self.size / 2)
    }

    pub fn contains(&self, point: &Point) -> bool {
        (0..self.size).contains(&point.x) && (0..self.size).contains(&point.y)
    }
}
