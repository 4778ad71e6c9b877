// World dimensions (pixels). The renderer scales these to its own surface.
pub const WINDOW_WIDTH: f64 = 1280.0;
pub const WINDOW_HEIGHT: f64 = 720.0;

// Frame pacing
pub const TARGET_FPS: u32 = 60;

// Physics (pixels/second, pixels/second²)
pub const GRAVITY: f64 = 1_000.0;
pub const JUMP_VELOCITY: f64 = -700.0;
pub const SCROLL_VELOCITY: f64 = -200.0;

// Obstacles
pub const OBSTACLE_COUNT: usize = 10;
pub const OBSTACLE_SPACING: f64 = 300.0;
pub const COLLISION_PADDING: f64 = 20.0;

// Animation timing (seconds per frame)
pub const PLAYER_FRAME_DURATION: f64 = 1.0 / 12.0;
pub const OBSTACLE_FRAME_DURATION: f64 = 1.0 / 16.0;

// Background
pub const BACKGROUND_SCALE: f64 = 4.0;
pub const LAYER_SPEEDS: [f64; 3] = [200.0, 300.0, 400.0];

// Files under ~/.dasher/
pub const CONFIG_FILENAME: &str = "config.json";
pub const LOG_FILENAME: &str = "dasher.log";
