use snake_core::{Direction, GridModel, Point, SnakeSimulation};

const MOVES: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

/// Greedy food-seeking steering for the headless runner: among the safe
/// moves that do not reverse the latched direction, pick the one closest to
/// the food by wrap-aware Manhattan distance.
pub struct Pilot;

impl Pilot {
    pub fn choose_direction(sim: &SnakeSimulation) -> Direction {
        let head = sim.head_position();
        let food = sim.food_position();
        let grid = sim.grid();
        let current = sim.direction();

        let mut best_direction = None;
        let mut best_distance = i32::MAX;

        for direction in Self::candidate_directions(current) {
            let next = Self::next_position(grid, head, direction);
            if !Self::is_safe(sim, next) {
                continue;
            }
            let distance = Self::torus_distance(grid, next, food);
            if distance < best_distance {
                best_distance = distance;
                best_direction = Some(direction);
            }
        }

        // Boxed in: keep going and let the simulation report the collision.
        best_direction.unwrap_or(current)
    }

    /// All moves except the reversal of the current one. `Halt` latches
    /// nothing yet, so every move qualifies.
    fn candidate_directions(current: Direction) -> Vec<Direction> {
        MOVES
            .into_iter()
            .filter(|d| !d.is_opposite(&current))
            .collect()
    }

    fn next_position(grid: &GridModel, from: Point, direction: Direction) -> Point {
        let (dx, dy) = direction.offset();
        Point::new(grid.wrap(from.x, dx), grid.wrap(from.y, dy))
    }

    /// A cell is safe when no body segment occupies it. The tail cell is
    /// not exempted: the simulation treats moving onto it as fatal even
    /// though it vacates the same tick.
    fn is_safe(sim: &SnakeSimulation, position: Point) -> bool {
        !sim.body_positions().contains(&position)
    }

    fn torus_distance(grid: &GridModel, a: Point, b: Point) -> i32 {
        let size = grid.size();
        let dx = (a.x - b.x).abs();
        let dy = (a.y - b.y).abs();
        dx.min(size - dx) + dy.min(size - dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_core::{MoveResult, SnakeSimulation};

    #[test]
    fn test_candidates_exclude_reversal() {
        let candidates = Pilot::candidate_directions(Direction::Right);
        assert_eq!(candidates.len(), 3);
        assert!(!candidates.contains(&Direction::Left));
    }

    #[test]
    fn test_halt_allows_all_four_moves() {
        assert_eq!(Pilot::candidate_directions(Direction::Halt).len(), 4);
    }

    #[test]
    fn test_torus_distance_prefers_wrapping() {
        let grid = GridModel::new(15).unwrap();
        // 14 -> 0 is one step across the edge, not fourteen through the middle.
        assert_eq!(
            Pilot::torus_distance(&grid, Point::new(14, 7), Point::new(0, 7)),
            1
        );
        assert_eq!(
            Pilot::torus_distance(&grid, Point::new(3, 3), Point::new(3, 3)),
            0
        );
    }

    #[test]
    fn test_pilot_reaches_food() {
        let mut sim = SnakeSimulation::new(15, 42).unwrap();
        let mut ate = false;
        for _ in 0..300 {
            sim.set_direction(Pilot::choose_direction(&sim));
            if sim.step(1.0) == MoveResult::Food {
                ate = true;
                break;
            }
            assert!(!sim.is_game_over());
        }
        assert!(ate);
    }

    #[test]
    fn test_pilot_avoids_occupied_cells() {
        // Seeded play until the body is long enough to block candidate
        // cells, then keep playing: whenever at least one candidate cell is
        // free, the pilot must not steer into the body. Resetting on game
        // over keeps the run going; everything stays deterministic.
        let mut sim = SnakeSimulation::new(15, 42).unwrap();
        let mut blocked_seen = 0u32;

        for _ in 0..6000 {
            if sim.is_game_over() {
                sim.reset();
            }

            let chosen = Pilot::choose_direction(&sim);
            let next = Pilot::next_position(sim.grid(), sim.head_position(), chosen);

            let candidate_cells: Vec<Point> = Pilot::candidate_directions(sim.direction())
                .into_iter()
                .map(|d| Pilot::next_position(sim.grid(), sim.head_position(), d))
                .collect();
            let body: Vec<Point> = sim.body_positions().iter().copied().collect();
            let occupied = |cell: &Point| body.contains(cell);

            if candidate_cells.iter().any(occupied) {
                blocked_seen += 1;
            }
            if !candidate_cells.iter().all(occupied) {
                assert!(
                    !occupied(&next),
                    "pilot steered into its body at ({}, {}) with a free cell available",
                    next.x,
                    next.y
                );
            }

            sim.set_direction(chosen);
            sim.step(1.0);
        }

        // The run must actually have produced body-blocked candidates,
        // otherwise the assertion above never had anything to catch.
        assert!(blocked_seen > 0);
    }

    #[test]
    fn test_pilot_never_reverses_latched_direction() {
        let mut sim = SnakeSimulation::new(15, 7).unwrap();
        for _ in 0..200 {
            let before = sim.direction();
            let chosen = Pilot::choose_direction(&sim);
            assert!(!chosen.is_opposite(&before));
            sim.set_direction(chosen);
            sim.step(1.0);
            if sim.is_game_over() {
                break;
            }
        }
    }
}
