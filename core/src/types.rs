#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Latched movement command. `Halt` is a real input value (mapped from the
/// space key by the host), not the absence of input: a halted snake stays in
/// place until a movement direction arrives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
    Halt,
}

impl Direction {
    /// Unit cell delta for one step. `Halt` does not move.
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Halt => (0, 0),
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }
}

/// Outcome of a single [`crate::SnakeSimulation::step`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveResult {
    /// No movement happened: the direction is `Halt`, or not enough frame
    /// time has accumulated yet.
    Idle,
    /// The snake advanced one cell without eating.
    Moved,
    /// The snake advanced onto the food cell and grew.
    Food,
    /// The attempted move landed on the snake's own body; the game is over
    /// and the pre-move state is kept.
    BodyCollision,
    /// The game was already over; the call was a no-op.
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_structural_equality() {
        assert_eq!(Point::new(3, 7), Point::new(3, 7));
        assert_ne!(Point::new(3, 7), Point::new(7, 3));
    }

    #[test]
    fn test_is_opposite_pairs() {
        assert!(Direction::Left.is_opposite(&Direction::Right));
        assert!(Direction::Up.is_opposite(&Direction::Down));
        assert!(!Direction::Left.is_opposite(&Direction::Up));
        assert!(!Direction::Left.is_opposite(&Direction::Left));
    }

    #[test]
    fn test_halt_is_opposite_to_nothing() {
        for d in [
            Direction::Left,
            Direction::Right,
            Direction::Up,
            Direction::Down,
            Direction::Halt,
        ] {
            assert!(!Direction::Halt.is_opposite(&d));
            assert!(!d.is_opposite(&Direction::Halt));
        }
    }

    #[test]
    fn test_halt_offset_is_zero() {
        assert_eq!(Direction::Halt.offset(), (0, 0));
    }
}
