//! Simulation building blocks: geometry, animation, physics, parallax and
//! collision. Nothing here knows about sessions or rendering.

pub mod animation;
pub mod collision;
pub mod geometry;
pub mod parallax;
pub mod physics;

pub use animation::AnimatedSprite;
pub use collision::check_collision;
pub use geometry::{Rect, Vec2};
pub use parallax::ParallaxLayer;
pub use physics::PhysicsBody;
