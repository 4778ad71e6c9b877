//! Sprite-sheet metadata.
//!
//! The simulation never touches image data. It only needs the size of each
//! sheet and how it is divided into frames, which is enough to size the
//! animation source rectangles and the collision boxes.

use crate::runner::Rect;

/// Identifies which sheet a draw command samples from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetId {
    Player,
    Obstacle,
    /// Background layer, back to front.
    Background(usize),
}

/// Pixel dimensions of a sheet and its frame grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSheet {
    pub width: u32,
    pub height: u32,
    pub columns: u32,
    pub rows: u32,
}

impl SpriteSheet {
    pub const fn new(width: u32, height: u32, columns: u32, rows: u32) -> Self {
        Self {
            width,
            height,
            columns,
            rows,
        }
    }

    /// A sheet that is a single image (background tiles).
    pub const fn single(width: u32, height: u32) -> Self {
        Self::new(width, height, 1, 1)
    }

    pub fn frame_width(&self) -> f64 {
        self.width as f64 / self.columns.max(1) as f64
    }

    pub fn frame_height(&self) -> f64 {
        self.height as f64 / self.rows.max(1) as f64
    }

    /// Frames in one row of the sheet; animations cycle along a row.
    pub fn frames_per_row(&self) -> usize {
        self.columns.max(1) as usize
    }

    /// The whole sheet as a source rectangle.
    pub fn full_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width as f64, self.height as f64)
    }
}

/// Sheets used by one game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetSet {
    /// Running player, one row of frames.
    pub player: SpriteSheet,
    /// Obstacle sheet; only its first row is animated.
    pub obstacle: SpriteSheet,
    /// Background layers from farthest to nearest.
    pub backgrounds: Vec<SpriteSheet>,
}

impl Default for AssetSet {
    /// Dimensions of the stock Dasher textures.
    fn default() -> Self {
        Self {
            player: SpriteSheet::new(768, 128, 6, 1),
            obstacle: SpriteSheet::new(800, 800, 8, 8),
            backgrounds: vec![
                SpriteSheet::single(272, 160), // far buildings
                SpriteSheet::single(272, 160), // back buildings
                SpriteSheet::single(352, 160), // foreground
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_frame_sizes() {
        let assets = AssetSet::default();
        assert!((assets.player.frame_width() - 128.0).abs() < f64::EPSILON);
        assert!((assets.player.frame_height() - 128.0).abs() < f64::EPSILON);
        assert_eq!(assets.player.frames_per_row(), 6);

        assert!((assets.obstacle.frame_width() - 100.0).abs() < f64::EPSILON);
        assert!((assets.obstacle.frame_height() - 100.0).abs() < f64::EPSILON);
        assert_eq!(assets.obstacle.frames_per_row(), 8);

        assert_eq!(assets.backgrounds.len(), 3);
    }

    #[test]
    fn test_zero_grid_does_not_divide_by_zero() {
        let sheet = SpriteSheet::new(64, 32, 0, 0);
        assert!((sheet.frame_width() - 64.0).abs() < f64::EPSILON);
        assert!((sheet.frame_height() - 32.0).abs() < f64::EPSILON);
        assert_eq!(sheet.frames_per_row(), 1);
    }
}
