//! Dasher - a side-scrolling runner.
//!
//! The simulation core (`runner`, `core`) is independent of any display; the
//! terminal frontend in `ui` is one implementation of
//! [`core::game_loop::Frontend`].

pub mod assets;
pub mod build_info;
pub mod core;
pub mod runner;
pub mod ui;
pub mod utils;
