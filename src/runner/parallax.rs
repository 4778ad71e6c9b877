//! Endless horizontal scrolling for background layers.

/// One background layer, tiled twice side by side.
///
/// `offset_x` stays in `(-tile_width, 0]`; drawing the tile at `offset_x`
/// and again at `offset_x + tile_width` covers any view no wider than a tile.
#[derive(Debug, Clone, PartialEq)]
pub struct ParallaxLayer {
    pub offset_x: f64,
    /// Pixels per second, positive scrolls left.
    pub scroll_speed: f64,
    pub tile_width: f64,
}

impl ParallaxLayer {
    pub fn new(scroll_speed: f64, tile_width: f64) -> Self {
        Self {
            offset_x: 0.0,
            scroll_speed,
            tile_width,
        }
    }

    pub fn advance(&mut self, delta_time: f64) {
        self.offset_x -= self.scroll_speed * delta_time;
        if self.offset_x <= -self.tile_width {
            self.offset_x = 0.0;
        } else if self.offset_x > 0.0 {
            // Scrolling right: the left tile takes over
            self.offset_x = self.offset_x.rem_euclid(self.tile_width) - self.tile_width;
            if self.offset_x <= -self.tile_width {
                self.offset_x = 0.0;
            }
        }
    }

    /// Left edges of the two tiles to draw this frame.
    pub fn tile_positions(&self) -> [f64; 2] {
        [self.offset_x, self.offset_x + self.tile_width]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrolls_left() {
        let mut layer = ParallaxLayer::new(200.0, 1088.0);
        layer.advance(0.5);
        assert!((layer.offset_x + 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_wraps_to_zero_at_tile_width() {
        let mut layer = ParallaxLayer::new(100.0, 50.0);
        layer.advance(0.5);
        assert!(layer.offset_x.abs() < f64::EPSILON);
    }

    #[test]
    fn test_offset_stays_in_range() {
        for tile_width in [1.0, 64.0, 1088.0, 1408.0] {
            let mut layer = ParallaxLayer::new(400.0, tile_width);
            for step in 0..2000 {
                let dt = if step % 97 == 0 { 0.4 } else { 1.0 / 60.0 };
                layer.advance(dt);
                assert!(layer.offset_x <= 0.0);
                assert!(layer.offset_x > -tile_width);
            }
        }
    }

    #[test]
    fn test_rightward_scroll_stays_in_range() {
        let mut layer = ParallaxLayer::new(-200.0, 1088.0);
        for _ in 0..600 {
            layer.advance(1.0 / 60.0);
            assert!(layer.offset_x <= 0.0);
            assert!(layer.offset_x > -layer.tile_width);
        }
        // 2000px of rightward travel wraps twice
        assert!((layer.offset_x - (2000.0 - 2.0 * 1088.0)).abs() < 1e-6);
    }

    #[test]
    fn test_two_tiles_cover_view() {
        let view_width = 1088.0;
        let mut layer = ParallaxLayer::new(300.0, 1088.0);
        for _ in 0..500 {
            layer.advance(1.0 / 60.0);
            let [first, second] = layer.tile_positions();
            // First tile starts at or left of the view, second continues it
            // without a gap and reaches past the right edge.
            assert!(first <= 0.0);
            assert!((second - (first + layer.tile_width)).abs() < 1e-9);
            assert!(second + layer.tile_width >= view_width);
        }
    }
}
