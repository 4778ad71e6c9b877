//! What the renderer draws for a frame.
//!
//! A [`Scene`] is built from a session after its step has completed, so a
//! renderer never observes a half-updated frame. Commands are ordered back to
//! front.

use super::game_state::GameSession;
use crate::assets::SheetId;
use crate::runner::{Rect, Vec2};

/// Draw `source` (a sub-rectangle of `sheet`, in sheet pixels) with its
/// top-left corner at `dest` (world pixels), scaled by `scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub sheet: SheetId,
    pub source: Rect,
    pub dest: Vec2,
    pub scale: f64,
}

impl DrawCommand {
    /// Index of the frame `source` selects along its row.
    pub fn frame_index(&self) -> usize {
        if self.source.width <= 0.0 {
            return 0;
        }
        (self.source.x / self.source.width).round().max(0.0) as usize
    }

    /// Area covered in world pixels.
    pub fn dest_rect(&self) -> Rect {
        Rect::at(
            self.dest,
            self.source.width * self.scale,
            self.source.height * self.scale,
        )
    }
}

/// Heads-up figures shown alongside the play field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hud {
    pub cleared: usize,
    pub total: usize,
    pub distance_to_finish: f64,
    pub elapsed: f64,
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub world_width: f64,
    pub world_height: f64,
    pub commands: Vec<DrawCommand>,
    pub hud: Hud,
    /// End-of-game message once the session is over.
    pub message: Option<&'static str>,
}

/// Snapshot the session into draw commands: background layers (two tiles
/// each), then obstacles, then the player.
pub fn build_scene(session: &GameSession) -> Scene {
    let mut commands = Vec::with_capacity(session.layers.len() * 2 + session.obstacles.len() + 1);

    for (index, (layer, sheet)) in session
        .layers
        .iter()
        .zip(&session.assets.backgrounds)
        .enumerate()
    {
        for x in layer.tile_positions() {
            commands.push(DrawCommand {
                sheet: SheetId::Background(index),
                source: sheet.full_rect(),
                dest: Vec2::new(x, 0.0),
                scale: session.config.background_scale,
            });
        }
    }

    for obstacle in &session.obstacles {
        commands.push(DrawCommand {
            sheet: SheetId::Obstacle,
            source: obstacle.sprite.frame_rect,
            dest: obstacle.position,
            scale: 1.0,
        });
    }

    commands.push(DrawCommand {
        sheet: SheetId::Player,
        source: session.player.sprite.frame_rect,
        dest: session.player.body.position,
        scale: 1.0,
    });

    Scene {
        world_width: session.config.window_width,
        world_height: session.config.window_height,
        commands,
        hud: Hud {
            cleared: session.cleared_count(),
            total: session.obstacles.len(),
            distance_to_finish: session.distance_to_finish(),
            elapsed: session.elapsed,
        },
        message: session.state.end_message(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetSet;
    use crate::core::config::GameConfig;
    use crate::core::game_state::SessionState;
    use crate::core::tick::{step, FrameInput};

    fn session() -> GameSession {
        GameSession::new(GameConfig::default(), AssetSet::default())
    }

    #[test]
    fn test_command_order_back_to_front() {
        let scene = build_scene(&session());

        // 3 layers x 2 tiles, 10 obstacles, 1 player
        assert_eq!(scene.commands.len(), 17);
        assert!(scene.commands[..6]
            .iter()
            .all(|c| matches!(c.sheet, SheetId::Background(_))));
        assert!(scene.commands[6..16]
            .iter()
            .all(|c| c.sheet == SheetId::Obstacle));
        assert_eq!(scene.commands[16].sheet, SheetId::Player);
    }

    #[test]
    fn test_layer_tiles_adjacent() {
        let mut s = session();
        for _ in 0..30 {
            step(&mut s, 1.0 / 60.0, FrameInput::NONE);
        }
        let scene = build_scene(&s);
        for pair in scene.commands[..6].chunks(2) {
            let first = pair[0].dest_rect();
            let second = pair[1].dest_rect();
            assert!((first.right() - second.x).abs() < 1e-9);
            assert!(first.x <= 0.0);
        }
    }

    #[test]
    fn test_player_command_follows_animation() {
        let mut s = session();
        for _ in 0..20 {
            step(&mut s, 1.0 / 60.0, FrameInput::NONE);
        }
        let scene = build_scene(&s);
        let player = scene.commands.last().unwrap();
        assert_eq!(player.frame_index(), s.player.sprite.frame_index);
        assert_eq!(player.dest, s.player.body.position);
    }

    #[test]
    fn test_message_only_when_terminal() {
        let mut s = session();
        assert_eq!(build_scene(&s).message, None);

        s.state = SessionState::Lost;
        assert_eq!(build_scene(&s).message, Some("Game Over!"));
    }

    #[test]
    fn test_hud_counts() {
        let s = session();
        let hud = build_scene(&s).hud;
        assert_eq!(hud.cleared, 0);
        assert_eq!(hud.total, 10);
        assert!((hud.distance_to_finish - s.finish_line_x).abs() < f64::EPSILON);
    }
}
