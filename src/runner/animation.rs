//! Sprite-sheet frame cycling.

use super::geometry::Rect;

/// Frame-cycling state over a horizontal strip of a sprite sheet.
///
/// `frame_rect` is the source rectangle the renderer samples. Its `x` always
/// equals `frame_index * frame_rect.width`.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedSprite {
    pub frame_rect: Rect,
    pub frame_index: usize,
    pub frame_count: usize,
    /// Seconds each frame stays on screen. Zero advances on every update.
    pub frame_duration: f64,
    /// Seconds accumulated since the last frame change.
    pub elapsed_in_frame: f64,
}

impl AnimatedSprite {
    /// Sprite over frames of `frame_width` x `frame_height` starting at row `row_y`.
    ///
    /// A `frame_count` of zero is treated as a single-frame sheet.
    pub fn new(
        frame_width: f64,
        frame_height: f64,
        row_y: f64,
        frame_count: usize,
        frame_duration: f64,
    ) -> Self {
        Self {
            frame_rect: Rect::new(0.0, row_y, frame_width, frame_height),
            frame_index: 0,
            frame_count: frame_count.max(1),
            frame_duration: frame_duration.max(0.0),
            elapsed_in_frame: 0.0,
        }
    }

    /// Start with `elapsed` seconds already accumulated, to stagger sprites
    /// that would otherwise animate in lockstep.
    pub fn with_elapsed(mut self, elapsed: f64) -> Self {
        self.elapsed_in_frame = elapsed.max(0.0);
        self
    }

    pub fn frame_width(&self) -> f64 {
        self.frame_rect.width
    }

    pub fn frame_height(&self) -> f64 {
        self.frame_rect.height
    }

    /// Accumulate `delta_time` and move to the next frame once the current
    /// one has been shown for `frame_duration`. Wraps to frame 0 after
    /// `max_frame_index` (never beyond the last frame of the sheet).
    ///
    /// Returns true if the frame changed.
    pub fn advance(&mut self, delta_time: f64, max_frame_index: usize) -> bool {
        self.elapsed_in_frame += delta_time;
        if self.elapsed_in_frame < self.frame_duration {
            return false;
        }

        self.elapsed_in_frame = 0.0;
        let last = max_frame_index.min(self.frame_count - 1);
        self.frame_index = if self.frame_index >= last {
            0
        } else {
            self.frame_index + 1
        };
        self.frame_rect.x = self.frame_index as f64 * self.frame_rect.width;
        true
    }

    /// Advance over every frame of the sheet.
    pub fn tick(&mut self, delta_time: f64) -> bool {
        self.advance(delta_time, self.frame_count - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sprite(frames: usize, duration: f64) -> AnimatedSprite {
        AnimatedSprite::new(128.0, 128.0, 0.0, frames, duration)
    }

    #[test]
    fn test_holds_frame_until_duration_elapsed() {
        let mut s = sprite(6, 0.5);
        assert!(!s.tick(0.25));
        assert_eq!(s.frame_index, 0);
        assert!(s.tick(0.25));
        assert_eq!(s.frame_index, 1);
        assert!(s.elapsed_in_frame.abs() < f64::EPSILON);
    }

    #[test]
    fn test_frame_rect_tracks_index() {
        let mut s = sprite(6, 0.25);
        for _ in 0..20 {
            s.tick(0.25);
            assert!((s.frame_rect.x - s.frame_index as f64 * 128.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_cycles_with_period_of_frame_count() {
        let mut s = sprite(6, 0.25);
        let mut seen = Vec::new();
        for _ in 0..12 {
            s.tick(0.25);
            seen.push(s.frame_index);
        }
        assert_eq!(seen, vec![1, 2, 3, 4, 5, 0, 1, 2, 3, 4, 5, 0]);
    }

    #[test]
    fn test_index_stays_in_range_for_any_delta() {
        let mut s = sprite(8, 1.0 / 12.0);
        for dt in [0.0, 0.001, 0.05, 0.3, 2.0, 0.0, 10.0] {
            for _ in 0..50 {
                s.tick(dt);
                assert!(s.frame_index < s.frame_count);
            }
        }
    }

    #[test]
    fn test_zero_duration_advances_every_call() {
        let mut s = sprite(4, 0.0);
        for expected in [1, 2, 3, 0, 1] {
            assert!(s.tick(0.0));
            assert_eq!(s.frame_index, expected);
        }
    }

    #[test]
    fn test_max_frame_index_limits_cycle() {
        let mut s = sprite(8, 0.0);
        for _ in 0..3 {
            s.advance(0.016, 1);
        }
        // 0 -> 1 -> 0 -> 1
        assert_eq!(s.frame_index, 1);
    }

    #[test]
    fn test_max_frame_index_beyond_sheet_is_bounded() {
        let mut s = sprite(3, 0.0);
        for _ in 0..10 {
            s.advance(0.016, 99);
            assert!(s.frame_index < 3);
        }
    }

    #[test]
    fn test_zero_frame_count_treated_as_single_frame() {
        let mut s = sprite(0, 0.0);
        assert_eq!(s.frame_count, 1);
        s.tick(1.0);
        assert_eq!(s.frame_index, 0);
    }

    #[test]
    fn test_elapsed_seed_shortens_first_frame() {
        let mut s = sprite(6, 0.5).with_elapsed(0.375);
        assert!(s.tick(0.125));
        assert_eq!(s.frame_index, 1);
    }
}
