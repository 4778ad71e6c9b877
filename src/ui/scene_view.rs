//! Terminal rendering of a [`Scene`].
//!
//! Uses a cell buffer for per-character color control. Every draw command is
//! scaled from world pixels into cells and its glyph frame is stretched over
//! that box; the buffer is then stamped row-by-row as Paragraph widgets.

use super::game_common::{
    create_game_layout, render_game_over_banner, render_status_bar, GameResultType,
};
use super::glyphs::glyph_sheet;
use crate::core::game_state::SessionState;
use crate::core::scene::{DrawCommand, Scene};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const CONTROLS: &[(&str, &str)] = &[("[Space/Up]", "Jump"), ("[Esc/Q]", "Quit")];

/// Render a full frame: border, play field, status bar and end banner.
pub fn render_scene(frame: &mut Frame, area: Rect, scene: &Scene) {
    let layout = create_game_layout(frame, area, " Dasher ", Color::LightCyan);

    render_play_field(frame, layout.content, scene);
    render_status(frame, layout.status_bar, scene);

    if let Some(message) = scene.message {
        let result_type = if Some(message) == SessionState::Won.end_message() {
            GameResultType::Win
        } else {
            GameResultType::Loss
        };
        let detail = format!(
            "Cleared {}/{} in {:.1}s",
            scene.hud.cleared, scene.hud.total, scene.hud.elapsed
        );
        render_game_over_banner(frame, layout.content, result_type, message, &detail);
    }
}

/// Cell in the render buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
        }
    }
}

/// Rasterize `scene` into a `width` x `height` grid of cells. Commands are
/// painted in order, so later ones cover earlier ones.
pub fn rasterize(scene: &Scene, width: u16, height: u16) -> Vec<Vec<Cell>> {
    let mut buffer = vec![vec![Cell::default(); width as usize]; height as usize];
    if width == 0 || height == 0 || scene.world_width <= 0.0 || scene.world_height <= 0.0 {
        return buffer;
    }

    let x_scale = width as f64 / scene.world_width;
    let y_scale = height as f64 / scene.world_height;

    for command in &scene.commands {
        stamp(&mut buffer, command, x_scale, y_scale);
    }

    buffer
}

fn stamp(buffer: &mut [Vec<Cell>], command: &DrawCommand, x_scale: f64, y_scale: f64) {
    let glyphs = glyph_sheet(command.sheet);
    let frame_index = command.frame_index();
    let dest = command.dest_rect();

    let left = (dest.x * x_scale).round() as i32;
    let top = (dest.y * y_scale).round() as i32;
    let right = ((dest.right() * x_scale).round() as i32).max(left.saturating_add(1));
    let bottom = ((dest.bottom() * y_scale).round() as i32).max(top.saturating_add(1));
    // Far-off commands saturate at the i32 limits; measure in f64
    let box_width = right as f64 - left as f64;
    let box_height = bottom as f64 - top as f64;

    let rows = buffer.len() as i32;
    let cols = buffer.first().map_or(0, |r| r.len()) as i32;

    for row in top.max(0)..bottom.min(rows) {
        let v = (row as f64 - top as f64) / box_height;
        for col in left.max(0)..right.min(cols) {
            let u = (col as f64 - left as f64) / box_width;
            if let Some(ch) = glyphs.sample(frame_index, u, v) {
                buffer[row as usize][col as usize] = Cell { ch, fg: glyphs.fg };
            }
        }
    }
}

fn render_play_field(frame: &mut Frame, area: Rect, scene: &Scene) {
    if area.height < 2 || area.width < 10 {
        return;
    }

    let buffer = rasterize(scene, area.width, area.height);

    for (row_idx, row_data) in buffer.iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        let mut current_fg = Color::Reset;
        let mut current_text = String::new();

        for &cell in row_data {
            if cell.fg != current_fg && !current_text.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut current_text),
                    Style::default().fg(current_fg),
                ));
            }
            current_fg = cell.fg;
            current_text.push(cell.ch);
        }
        if !current_text.is_empty() {
            spans.push(Span::styled(current_text, Style::default().fg(current_fg)));
        }

        let row_area = Rect::new(area.x, area.y + row_idx as u16, area.width, 1);
        frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
    }
}

fn render_status(frame: &mut Frame, area: Rect, scene: &Scene) {
    let hud = &scene.hud;
    match scene.message {
        Some(message) => render_status_bar(frame, area, message, Color::White, &CONTROLS[1..]),
        None => {
            let text = format!(
                "Cleared {}/{}  Finish in {:.0}px  {:.1}s",
                hud.cleared,
                hud.total,
                hud.distance_to_finish.max(0.0),
                hud.elapsed
            );
            render_status_bar(frame, area, &text, Color::LightYellow, CONTROLS);
        }
    }
}
