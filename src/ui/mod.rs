//! Terminal frontend: glyph art, scene rendering and the crossterm backend.

pub mod game_common;
pub mod glyphs;
pub mod scene_view;
pub mod terminal;

pub use terminal::TerminalFrontend;
