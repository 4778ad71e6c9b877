//! Crossterm/ratatui implementation of the loop's [`Frontend`].

use super::scene_view::render_scene;
use crate::core::game_loop::Frontend;
use crate::core::scene::Scene;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

/// What a key press means to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Jump,
    Quit,
}

/// Map a key event to an action. Only presses count; release and repeat
/// events (sent by some terminals) are ignored.
pub fn map_key(key: KeyEvent) -> Option<KeyAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Up => Some(KeyAction::Jump),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(KeyAction::Quit)
        }
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(KeyAction::Quit),
        _ => None,
    }
}

/// Full-screen terminal frontend paced at a target frame rate.
pub struct TerminalFrontend {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    frame_budget: Duration,
    last_frame: Instant,
    jump_pressed: bool,
    close_requested: bool,
    restored: bool,
}

impl TerminalFrontend {
    /// Enter raw mode and the alternate screen.
    pub fn new(target_fps: u32) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        log::info!("terminal frontend started at {} fps", target_fps);

        Ok(Self {
            terminal,
            frame_budget: Duration::from_secs_f64(1.0 / target_fps.max(1) as f64),
            last_frame: Instant::now(),
            jump_pressed: false,
            close_requested: false,
            restored: false,
        })
    }

    /// Leave the alternate screen and give the terminal back.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        log::info!("restoring terminal");
        disable_raw_mode()?;
        self.terminal.backend_mut().execute(LeaveAlternateScreen)?;
        self.terminal.show_cursor()
    }
}

impl Drop for TerminalFrontend {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

impl Frontend for TerminalFrontend {
    /// Collect key presses until the current frame's slot is used up.
    fn poll_input(&mut self) -> io::Result<()> {
        self.jump_pressed = false;
        let deadline = self.last_frame + self.frame_budget;

        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            if let Event::Key(key) = event::read()? {
                match map_key(key) {
                    Some(KeyAction::Jump) => self.jump_pressed = true,
                    Some(KeyAction::Quit) => {
                        self.close_requested = true;
                        break;
                    }
                    None => {}
                }
            }
        }

        Ok(())
    }

    fn elapsed_since_last_frame(&mut self) -> f64 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame).as_secs_f64();
        self.last_frame = now;
        elapsed
    }

    fn is_close_requested(&self) -> bool {
        self.close_requested
    }

    fn is_jump_pressed_this_frame(&self) -> bool {
        self.jump_pressed
    }

    fn draw(&mut self, scene: &Scene) -> io::Result<()> {
        self.terminal.draw(|frame| {
            let area = frame.size();
            render_scene(frame, area, scene);
        })?;
        Ok(())
    }
}
