//! Character-cell stand-ins for the sprite sheets.
//!
//! Each sheet is a list of frames; each frame is a few rows of text that get
//! stretched (nearest neighbor) over whatever cell box the sprite covers on
//! screen. Spaces are transparent.

use crate::assets::SheetId;
use ratatui::style::Color;

/// Frames of one sheet plus the color they are drawn in.
pub struct GlyphSheet {
    pub frames: &'static [&'static [&'static str]],
    pub fg: Color,
}

impl GlyphSheet {
    /// Frame `index`, wrapping if the sheet has fewer frames than the
    /// animation.
    pub fn frame(&self, index: usize) -> &'static [&'static str] {
        self.frames[index % self.frames.len()]
    }

    /// Character at relative position (`u`, `v`) in `[0, 1)` of `frame`, or
    /// `None` where the frame is transparent.
    pub fn sample(&self, frame: usize, u: f64, v: f64) -> Option<char> {
        let rows = self.frame(frame);
        let row_idx = ((v * rows.len() as f64) as usize).min(rows.len() - 1);
        let row = rows[row_idx];
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        if width == 0 {
            return None;
        }
        let col_idx = ((u * width as f64) as usize).min(width - 1);
        row.chars().nth(col_idx).filter(|ch| *ch != ' ')
    }
}

const PLAYER_FRAMES: &[&[&str]] = &[
    &[" o ", "/|\\", "/ \\"],
    &[" o ", "/|\\", " |\\"],
    &[" o ", "-|-", " | "],
    &[" o ", "/|\\", "/| "],
    &[" o ", "\\|/", "/ \\"],
    &[" o ", "-|\\", " |\\"],
];

const OBSTACLE_FRAMES: &[&[&str]] = &[
    &[" . ", ".@.", " . "],
    &[". .", " @ ", ". ."],
    &[" * ", "*@*", " * "],
    &["* *", " @ ", "* *"],
    &[" o ", "o@o", " o "],
    &["o o", " @ ", "o o"],
    &[" * ", "*O*", " * "],
    &["* *", " O ", "* *"],
];

const FAR_BUILDINGS: &[&[&str]] = &[&[
    "                                  ",
    "                                  ",
    "       _                 _        ",
    "  _   | |   __          | |   _   ",
    " | |__| |  |  |   _     | |__| |  ",
    " |    | |__|  |__| |____|    | |__",
    " |    |       |    |         |    ",
    " |    |       |    |         |    ",
]];

const BACK_BUILDINGS: &[&[&str]] = &[&[
    "                                  ",
    "                                  ",
    "                                  ",
    "    ___              ____         ",
    "   |o o|    ___     |o  o|  __    ",
    "___|o o|___|o o|____|o  o|_|oo|___",
    "   |o o|   |o o|    |o  o| |oo|   ",
    "   |o o|   |o o|    |o  o| |oo|   ",
]];

const FOREGROUND: &[&[&str]] = &[&[
    "                                            ",
    "                                            ",
    "                                            ",
    "                                            ",
    "                                            ",
    "   T           T           T           T    ",
    "   |           |           |           |    ",
    "============================================",
]];

const PLAYER: GlyphSheet = GlyphSheet {
    frames: PLAYER_FRAMES,
    fg: Color::LightYellow,
};
const OBSTACLE: GlyphSheet = GlyphSheet {
    frames: OBSTACLE_FRAMES,
    fg: Color::LightMagenta,
};
const LAYERS: [GlyphSheet; 3] = [
    GlyphSheet {
        frames: FAR_BUILDINGS,
        fg: Color::Rgb(60, 60, 90),
    },
    GlyphSheet {
        frames: BACK_BUILDINGS,
        fg: Color::Rgb(100, 90, 130),
    },
    GlyphSheet {
        frames: FOREGROUND,
        fg: Color::Rgb(140, 110, 80),
    },
];

/// Glyph sheet for a sprite sheet. Extra background layers reuse the
/// nearest stock layer.
pub fn glyph_sheet(sheet: SheetId) -> &'static GlyphSheet {
    match sheet {
        SheetId::Player => &PLAYER,
        SheetId::Obstacle => &OBSTACLE,
        SheetId::Background(index) => &LAYERS[index.min(LAYERS.len() - 1)],
    }
}
