mod clock;
mod food;
mod particles;
mod session_rng;
mod settings;
mod snake;
mod snapshot;
mod state;
mod types;

pub use clock::TickClock;
pub use food::Food;
pub use particles::{Particle, ParticleSystem};
pub use session_rng::SessionRng;
pub use settings::GameSettings;
pub use snake::{Snake, StepOutcome};
pub use snapshot::{GameSnapshot, ParticleView};
pub use state::{GameEndReason, GameState};
pub use types::{ColorRange, Direction, GridSize, Point, Rgb};
