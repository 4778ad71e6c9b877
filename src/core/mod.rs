//! Game session, per-frame step, scene hand-off and the frame loop.

pub mod config;
pub mod constants;
pub mod game_loop;
pub mod game_state;
pub mod scene;
pub mod tick;

pub use config::{ConfigError, GameConfig};
pub use game_loop::{run, settle, Frontend, RunSummary};
pub use game_state::{GameSession, Obstacle, Player, SessionState};
pub use scene::{build_scene, DrawCommand, Hud, Scene};
pub use tick::{step, FrameInput, TickEvent, TickResult};
