pub mod grid;
pub mod logger;
pub mod session_rng;
pub mod settings;
pub mod simulation;
pub mod types;

pub use grid::GridModel;
pub use session_rng::SessionRng;
pub use settings::{SimulationSettings, Validate};
pub use simulation::SnakeSimulation;
pub use types::{Direction, MoveResult, Point};
