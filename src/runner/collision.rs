//! Player versus obstacle overlap.

use super::geometry::Rect;

/// True if `player` overlaps any obstacle once each obstacle box is shrunk by
/// `padding` on every side. The padding trims the transparent margin around
/// obstacle frames; the player box is used as-is.
pub fn check_collision<'a, I>(player: &Rect, obstacles: I, padding: f64) -> bool
where
    I: IntoIterator<Item = &'a Rect>,
{
    obstacles
        .into_iter()
        .any(|obstacle| obstacle.shrink(padding).overlaps(player))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_boxes_collide_without_padding() {
        let a = Rect::new(0.0, 592.0, 128.0, 128.0);
        assert!(check_collision(&a, [&a], 0.0));
    }

    #[test]
    fn test_separated_boxes_do_not_collide() {
        let player = Rect::new(0.0, 592.0, 128.0, 128.0);
        let far = Rect::new(400.0, 620.0, 100.0, 100.0);
        assert!(!check_collision(&player, [&far], 0.0));
    }

    #[test]
    fn test_padding_trims_grazing_contact() {
        let player = Rect::new(0.0, 592.0, 128.0, 128.0);
        // Obstacle sprite overlaps the player by 30px horizontally
        let obstacle = Rect::new(98.0, 620.0, 100.0, 100.0);
        assert!(check_collision(&player, [&obstacle], 0.0));
        assert!(!check_collision(&player, [&obstacle], 35.0));
    }

    #[test]
    fn test_symmetric_under_box_order() {
        let boxes = [
            Rect::new(0.0, 0.0, 50.0, 50.0),
            Rect::new(25.0, 25.0, 50.0, 50.0),
            Rect::new(49.0, 0.0, 10.0, 10.0),
            Rect::new(50.0, 50.0, 10.0, 10.0),
            Rect::new(-5.0, -5.0, 100.0, 100.0),
        ];
        for a in &boxes {
            for b in &boxes {
                assert_eq!(
                    check_collision(a, [b], 0.0),
                    check_collision(b, [a], 0.0),
                    "{:?} vs {:?}",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_any_obstacle_triggers() {
        let player = Rect::new(0.0, 0.0, 10.0, 10.0);
        let obstacles = [
            Rect::new(100.0, 0.0, 10.0, 10.0),
            Rect::new(200.0, 0.0, 10.0, 10.0),
            Rect::new(5.0, 5.0, 10.0, 10.0),
        ];
        assert!(check_collision(&player, &obstacles, 0.0));
        assert!(!check_collision(&player, &obstacles[..2], 0.0));
    }

    #[test]
    fn test_no_obstacles() {
        let player = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!check_collision(&player, std::iter::empty(), 0.0));
    }
}
