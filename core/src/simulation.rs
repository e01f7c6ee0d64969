use std::collections::VecDeque;

use crate::grid::GridModel;
use crate::log;
use crate::session_rng::SessionRng;
use crate::settings::{SimulationSettings, Validate};
use crate::types::{Direction, MoveResult, Point};

/// Fixed-timestep snake state machine.
///
/// The owning frame driver feeds [`SnakeSimulation::step`] a per-frame delta
/// time and the latest latched direction via
/// [`SnakeSimulation::set_direction`]; the simulation accumulates frame time
/// and advances at most one cell per elapsed `speed_delay`. All reachable
/// state is exposed through read accessors so a renderer never mutates.
///
/// Two states: running and game-over. The only way out of game-over is
/// [`SnakeSimulation::reset`].
pub struct SnakeSimulation {
    grid: GridModel,
    settings: SimulationSettings,
    head: Point,
    /// Trailing segments, front = most recently vacated head cell. Empty for
    /// a length-1 snake.
    body: VecDeque<Point>,
    food: Point,
    direction: Direction,
    score: f32,
    speed_delay: f32,
    elapsed: f32,
    game_over: bool,
    rng: SessionRng,
}

impl SnakeSimulation {
    /// Builds a simulation from validated settings and an RNG seed. The seed
    /// makes a whole game reproducible; pass `rand::random()` for play.
    pub fn create(settings: &SimulationSettings, seed: u64) -> Result<Self, String> {
        settings.validate()?;
        let grid = GridModel::new(settings.grid_size)?;
        let mut rng = SessionRng::new(seed);

        let head = grid.center();
        let food = place_food(&mut rng, &grid, head);

        Ok(Self {
            grid,
            settings: *settings,
            head,
            body: VecDeque::new(),
            food,
            direction: Direction::Halt,
            score: 0.0,
            speed_delay: settings.initial_delay,
            elapsed: 0.0,
            game_over: false,
            rng,
        })
    }

    /// Default tuning with a custom grid size.
    pub fn new(grid_size: i32, seed: u64) -> Result<Self, String> {
        let settings = SimulationSettings {
            grid_size,
            ..Default::default()
        };
        Self::create(&settings, seed)
    }

    /// Overwrites the latched direction unconditionally, last writer wins.
    /// Reversing into the body is not rejected here; the reversal simply
    /// collides on the next step.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Advances the state machine by one frame.
    ///
    /// Frame time accumulates across calls; until it reaches `speed_delay`
    /// nothing moves. Once the threshold is met the accumulator resets to
    /// zero (it does not carry a remainder) and one cell of movement is
    /// attempted in the latched direction, wrapping at the grid edges.
    ///
    /// A move onto the snake's own body sets the game-over flag and leaves
    /// head and body exactly as they were, so the final render still shows
    /// the fatal configuration.
    pub fn step(&mut self, dt: f32) -> MoveResult {
        if self.game_over {
            return MoveResult::GameOver;
        }

        self.elapsed += dt;
        if self.elapsed < self.speed_delay {
            return MoveResult::Idle;
        }
        self.elapsed = 0.0;

        if self.direction == Direction::Halt {
            return MoveResult::Idle;
        }

        let (dx, dy) = self.direction.offset();
        let next = Point::new(self.grid.wrap(self.head.x, dx), self.grid.wrap(self.head.y, dy));

        // Pre-move body only; the attempted destination is discarded, not
        // the step that got there. Moving onto the tail cell counts too.
        if self.body.contains(&next) {
            self.game_over = true;
            log!(
                "Snake ran into itself at ({}, {}). Final score: {:.1}",
                next.x,
                next.y,
                self.score
            );
            return MoveResult::BodyCollision;
        }

        self.body.push_front(self.head);

        if next == self.food {
            self.head = next;
            self.score += self.settings.score_increment;
            self.speed_delay =
                (self.speed_delay - self.settings.delay_decrement).max(self.settings.min_delay);
            // Respawn is deliberately unchecked against occupancy: food may
            // land under the snake and stay unreachable until the tail
            // vacates that cell.
            self.food = self.rng.random_point(&self.grid);
            log!(
                "Ate food at ({}, {}). Score: {:.1}, delay: {:.2}",
                next.x,
                next.y,
                self.score,
                self.speed_delay
            );
            return MoveResult::Food;
        }

        self.body
            .pop_back()
            .expect("Snake body should never be empty after a head push");
        self.head = next;
        MoveResult::Moved
    }

    /// Reinitializes to the construction-time state with a freshly reseeded
    /// random source. Never fails.
    pub fn reset(&mut self) {
        self.rng.reseed();
        self.head = self.grid.center();
        self.body.clear();
        self.food = place_food(&mut self.rng, &self.grid, self.head);
        self.direction = Direction::Halt;
        self.score = 0.0;
        self.speed_delay = self.settings.initial_delay;
        self.elapsed = 0.0;
        self.game_over = false;
    }

    pub fn head_position(&self) -> Point {
        self.head
    }

    pub fn body_positions(&self) -> &VecDeque<Point> {
        &self.body
    }

    pub fn food_position(&self) -> Point {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> f32 {
        self.score
    }

    pub fn speed_delay(&self) -> f32 {
        self.speed_delay
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    /// Total snake length, head included.
    pub fn length(&self) -> usize {
        1 + self.body.len()
    }

    #[cfg(test)]
    fn set_head(&mut self, head: Point) {
        self.head = head;
    }

    #[cfg(test)]
    fn set_food(&mut self, food: Point) {
        self.food = food;
    }

    #[cfg(test)]
    fn set_body(&mut self, cells: Vec<Point>) {
        self.body = cells.into();
    }
}

/// Initial/reset food placement. The body is empty at these moments, so
/// avoiding the head cell alone satisfies the placement invariant; the retry
/// is bounded because a 1x1 grid has no free cell at all.
fn place_food(rng: &mut SessionRng, grid: &GridModel, head: Point) -> Point {
    let mut food = rng.random_point(grid);
    for _ in 0..100 {
        if food != head {
            break;
        }
        food = rng.random_point(grid);
    }
    food
}
