//! The per-frame step: the single place a [`GameSession`] changes.
//!
//! `step` applies one frame of simulation and returns a [`TickResult`]
//! describing what happened, so the presentation layer can react without
//! inspecting session internals. Frame time is taken as given; a very long
//! frame can carry an obstacle clean through the player between two checks.

use super::game_state::{GameSession, SessionState};
use crate::runner::{check_collision, Rect};

/// Input sampled for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// The jump key went down this frame (edge, not level).
    pub jump_pressed: bool,
}

impl FrameInput {
    pub const NONE: Self = Self {
        jump_pressed: false,
    };
    pub const JUMP: Self = Self { jump_pressed: true };
}

/// Something that happened during a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickEvent {
    /// Jump impulse applied.
    Jumped,
    /// Player touched down after being airborne.
    Landed,
    /// Obstacle at this index scrolled fully past the player.
    ObstacleCleared { index: usize },
    /// Player hit an obstacle; the session is lost.
    Collided,
    /// Player reached the finish line; the session is won.
    FinishReached,
}

/// Outcome of one [`step`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickResult {
    pub events: Vec<TickEvent>,
    /// The session became terminal during this frame.
    pub ended: Option<SessionState>,
}

impl TickResult {
    pub fn has(&self, event: TickEvent) -> bool {
        self.events.contains(&event)
    }
}

/// Advance the session by `delta_time` seconds.
///
/// Order per frame: player physics (jump applied between the velocity and
/// position updates), animations, scrolling, then collision before the
/// finish-line check. A terminal session is left untouched.
pub fn step(session: &mut GameSession, delta_time: f64, input: FrameInput) -> TickResult {
    let mut result = TickResult::default();
    if session.state.is_terminal() {
        return result;
    }

    session.frame_count += 1;
    session.elapsed += delta_time;

    let gravity = session.config.gravity;
    let jump_velocity = session.config.jump_velocity;
    let ground_level = session.config.ground_level;
    let scroll_velocity = session.config.scroll_velocity;
    let padding = session.config.collision_padding;

    // 1. Player physics
    let player = &mut session.player;
    let player_height = player.sprite.frame_height();
    let was_grounded = player.body.is_grounded(ground_level, player_height);

    player
        .body
        .apply_gravity(delta_time, gravity, ground_level, player_height);
    if input.jump_pressed
        && was_grounded
        && player.body.jump(jump_velocity, ground_level, player_height)
    {
        result.events.push(TickEvent::Jumped);
    }
    player
        .body
        .advance_position(delta_time, ground_level, player_height);

    if !was_grounded && player.body.is_grounded(ground_level, player_height) {
        result.events.push(TickEvent::Landed);
    }

    // 2. Animations
    player.sprite.tick(delta_time);
    for obstacle in &mut session.obstacles {
        obstacle.sprite.tick(delta_time);
    }

    // 3. Scrolling
    let dx = scroll_velocity * delta_time;
    for obstacle in &mut session.obstacles {
        obstacle.position.x += dx;
    }
    session.finish_line_x += dx;
    for layer in &mut session.layers {
        layer.advance(delta_time);
    }

    let player_x = session.player.body.position.x;
    for (index, obstacle) in session.obstacles.iter_mut().enumerate() {
        if !obstacle.cleared && obstacle.position.x + obstacle.sprite.frame_width() < player_x {
            obstacle.cleared = true;
            result.events.push(TickEvent::ObstacleCleared { index });
        }
    }

    // 4. Collision
    let player_box = session.player.bounds();
    let obstacle_boxes: Vec<Rect> = session.obstacles.iter().map(|o| o.bounds()).collect();
    if check_collision(&player_box, &obstacle_boxes, padding) {
        end(session, SessionState::Lost, &mut result);
        result.events.push(TickEvent::Collided);
        return result;
    }

    // 5. Finish line
    if player_x >= session.finish_line_x {
        end(session, SessionState::Won, &mut result);
        result.events.push(TickEvent::FinishReached);
    }

    result
}

fn end(session: &mut GameSession, state: SessionState, result: &mut TickResult) {
    session.state = state;
    result.ended = Some(state);
    log::info!(
        "session {:?} after {} frames ({:.2}s), {}/{} obstacles cleared",
        state,
        session.frame_count,
        session.elapsed,
        session.cleared_count(),
        session.obstacles.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetSet;
    use crate::core::config::GameConfig;
    use crate::core::game_state::Obstacle;

    const DT: f64 = 1.0 / 60.0;

    fn empty_session() -> GameSession {
        let config = GameConfig {
            obstacle_count: 0,
            ..GameConfig::default()
        };
        GameSession::new(config, AssetSet::default())
    }

    #[test]
    fn test_running_step_advances_counters() {
        let mut session = empty_session();
        step(&mut session, DT, FrameInput::NONE);
        assert_eq!(session.frame_count, 1);
        assert!((session.elapsed - DT).abs() < 1e-12);
    }

    #[test]
    fn test_finish_line_scrolls() {
        let mut session = empty_session();
        let before = session.finish_line_x;
        step(&mut session, 0.5, FrameInput::NONE);
        assert!((session.finish_line_x - (before - 100.0)).abs() < 1e-9);
    }

    #[test]
    fn test_jump_event_and_lift_same_frame() {
        let mut session = empty_session();
        let ground_y = session.player.body.position.y;

        let result = step(&mut session, DT, FrameInput::JUMP);

        assert!(result.has(TickEvent::Jumped));
        assert!(session.player.body.position.y < ground_y);
        assert!(!session.player_is_grounded());
    }

    #[test]
    fn test_jump_ignored_mid_air() {
        let mut session = empty_session();
        step(&mut session, DT, FrameInput::JUMP);
        let velocity = session.player.body.vertical_velocity;

        let result = step(&mut session, DT, FrameInput::JUMP);

        assert!(!result.has(TickEvent::Jumped));
        // Only gravity changed the velocity
        let expected = velocity + session.config.gravity * DT;
        assert!((session.player.body.vertical_velocity - expected).abs() < 1e-9);
    }

    #[test]
    fn test_landed_event_after_jump() {
        let mut session = empty_session();
        session.finish_line_x = 1.0e9;
        step(&mut session, DT, FrameInput::JUMP);

        let mut landed = false;
        for _ in 0..200 {
            if step(&mut session, DT, FrameInput::NONE).has(TickEvent::Landed) {
                landed = true;
                break;
            }
        }
        assert!(landed);
        assert!(session.player_is_grounded());
    }

    #[test]
    fn test_collision_loses() {
        let mut session = empty_session();
        let player_box = session.player.bounds();
        let sprite = session.player.sprite.clone();
        session.obstacles.push(Obstacle {
            sprite,
            position: crate::runner::Vec2::new(player_box.x, player_box.y),
            cleared: false,
        });

        let result = step(&mut session, DT, FrameInput::NONE);

        assert_eq!(session.state, SessionState::Lost);
        assert_eq!(result.ended, Some(SessionState::Lost));
        assert!(result.has(TickEvent::Collided));
    }

    #[test]
    fn test_collision_checked_before_finish() {
        let mut session = empty_session();
        session.finish_line_x = 0.0;
        let sprite = session.player.sprite.clone();
        session.obstacles.push(Obstacle {
            sprite,
            position: session.player.body.position,
            cleared: false,
        });

        step(&mut session, DT, FrameInput::NONE);

        assert_eq!(session.state, SessionState::Lost);
    }

    #[test]
    fn test_reaching_finish_wins() {
        let mut session = empty_session();
        session.finish_line_x = 2.0;

        let result = step(&mut session, DT, FrameInput::NONE);

        assert_eq!(session.state, SessionState::Won);
        assert!(result.has(TickEvent::FinishReached));
    }

    #[test]
    fn test_terminal_session_is_frozen() {
        let mut session = empty_session();
        session.finish_line_x = 2.0;
        step(&mut session, DT, FrameInput::NONE);
        assert_eq!(session.state, SessionState::Won);

        let snapshot = (
            session.frame_count,
            session.finish_line_x,
            session.player.clone(),
            session.layers.clone(),
        );
        let result = step(&mut session, DT, FrameInput::JUMP);

        assert!(result.events.is_empty());
        assert!(result.ended.is_none());
        assert_eq!(session.state, SessionState::Won);
        assert_eq!(snapshot.0, session.frame_count);
        assert!((snapshot.1 - session.finish_line_x).abs() < f64::EPSILON);
        assert_eq!(snapshot.2, session.player);
        assert_eq!(snapshot.3, session.layers);
    }

    #[test]
    fn test_obstacle_cleared_once() {
        let mut session = empty_session();
        session.finish_line_x = 1.0e9;
        let sprite = session.player.sprite.clone();
        // Just ahead of passing the player's left edge, above the player so
        // it never collides
        session.obstacles.push(Obstacle {
            sprite,
            position: crate::runner::Vec2::new(-127.0, 0.0),
            cleared: false,
        });

        let first = step(&mut session, DT, FrameInput::NONE);
        let second = step(&mut session, DT, FrameInput::NONE);

        assert!(first.has(TickEvent::ObstacleCleared { index: 0 }));
        assert!(!second.has(TickEvent::ObstacleCleared { index: 0 }));
        assert_eq!(session.cleared_count(), 1);
    }
}
