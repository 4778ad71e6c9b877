//! Session state: the player, the obstacle run, the finish line and the
//! background layers, plus whether the run is still going.

use super::config::GameConfig;
use crate::assets::AssetSet;
use crate::runner::{AnimatedSprite, ParallaxLayer, PhysicsBody, Rect, Vec2};
use rand::Rng;

/// Where the session stands. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Running,
    Won,
    Lost,
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Running)
    }

    /// Message shown once the run has ended.
    pub fn end_message(&self) -> Option<&'static str> {
        match self {
            Self::Running => None,
            Self::Won => Some("You Win!"),
            Self::Lost => Some("Game Over!"),
        }
    }
}

/// The runner: vertical physics plus its running animation.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub body: PhysicsBody,
    pub sprite: AnimatedSprite,
}

impl Player {
    /// Collision box, the full unpadded frame at the body's position.
    pub fn bounds(&self) -> Rect {
        Rect::at(
            self.body.position,
            self.sprite.frame_width(),
            self.sprite.frame_height(),
        )
    }
}

/// One obstacle scrolling toward the player.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub sprite: AnimatedSprite,
    /// Top-left corner (px).
    pub position: Vec2,
    /// Set once the obstacle has scrolled fully past the player.
    pub cleared: bool,
}

impl Obstacle {
    /// Unpadded sprite box; padding is applied by the collision test.
    pub fn bounds(&self) -> Rect {
        Rect::at(
            self.position,
            self.sprite.frame_width(),
            self.sprite.frame_height(),
        )
    }
}

/// Everything one run of the game owns. Advanced by [`step`](super::tick::step).
#[derive(Debug, Clone)]
pub struct GameSession {
    pub config: GameConfig,
    pub assets: AssetSet,
    pub player: Player,
    /// Obstacles in spawn order, which is also left-to-right order.
    pub obstacles: Vec<Obstacle>,
    /// X coordinate the player must reach to win; scrolls with obstacles.
    pub finish_line_x: f64,
    /// Background layers, farthest first.
    pub layers: Vec<ParallaxLayer>,
    pub state: SessionState,
    /// Frames stepped while running.
    pub frame_count: u64,
    /// Seconds simulated while running.
    pub elapsed: f64,
}

impl GameSession {
    /// New session with obstacles spaced by `config`. Spacing jitter, if
    /// enabled, draws from the thread RNG.
    pub fn new(config: GameConfig, assets: AssetSet) -> Self {
        Self::with_rng(config, assets, &mut rand::thread_rng())
    }

    /// New session drawing spacing jitter from `rng`.
    pub fn with_rng<R: Rng>(config: GameConfig, assets: AssetSet, rng: &mut R) -> Self {
        let player_sprite = AnimatedSprite::new(
            assets.player.frame_width(),
            assets.player.frame_height(),
            0.0,
            assets.player.frames_per_row(),
            config.player_frame_duration,
        );
        let player = Player {
            body: PhysicsBody::grounded_at(
                config.player_x,
                config.ground_level,
                player_sprite.frame_height(),
            ),
            sprite: player_sprite,
        };

        let obstacles = spawn_obstacles(&config, &assets, rng);
        let finish_line_x = obstacles
            .last()
            .map(|o| o.position.x)
            .unwrap_or(config.window_width);

        let layers = config
            .layer_speeds
            .iter()
            .zip(&assets.backgrounds)
            .map(|(&speed, sheet)| {
                ParallaxLayer::new(speed, sheet.width as f64 * config.background_scale)
            })
            .collect();

        log::debug!(
            "session created: {} obstacles, finish line at {:.0}px",
            obstacles.len(),
            finish_line_x
        );

        Self {
            config,
            assets,
            player,
            obstacles,
            finish_line_x,
            layers,
            state: SessionState::Running,
            frame_count: 0,
            elapsed: 0.0,
        }
    }

    pub fn is_running(&self) -> bool {
        !self.state.is_terminal()
    }

    pub fn player_is_grounded(&self) -> bool {
        self.player
            .body
            .is_grounded(self.config.ground_level, self.player.sprite.frame_height())
    }

    pub fn cleared_count(&self) -> usize {
        self.obstacles.iter().filter(|o| o.cleared).count()
    }

    /// Pixels left before the player reaches the finish line.
    pub fn distance_to_finish(&self) -> f64 {
        (self.finish_line_x - self.player.body.position.x).max(0.0)
    }
}

/// Place `obstacle_count` obstacles on the ground, the first at the right
/// edge of the world, each following one `obstacle_spacing` further right.
fn spawn_obstacles<R: Rng>(config: &GameConfig, assets: &AssetSet, rng: &mut R) -> Vec<Obstacle> {
    let frame_width = assets.obstacle.frame_width();
    let frame_height = assets.obstacle.frame_height();
    let y = config.ground_level - frame_height;

    let mut obstacles = Vec::with_capacity(config.obstacle_count);
    let mut x = config.window_width;
    for i in 0..config.obstacle_count {
        // Stagger animations so the obstacles do not pulse in unison. The
        // first obstacle has no predecessor to offset from.
        let seed = if i == 0 {
            0.0
        } else {
            1.0 / (12.0 * i as f64)
        };
        let sprite = AnimatedSprite::new(
            frame_width,
            frame_height,
            0.0,
            assets.obstacle.frames_per_row(),
            config.obstacle_frame_duration,
        )
        .with_elapsed(seed);

        obstacles.push(Obstacle {
            sprite,
            position: Vec2::new(x, y),
            cleared: false,
        });

        let jitter = if config.obstacle_spacing_jitter > 0.0 {
            rng.gen_range(-config.obstacle_spacing_jitter..=config.obstacle_spacing_jitter)
        } else {
            0.0
        };
        x += config.obstacle_spacing + jitter;
    }
    obstacles
}
