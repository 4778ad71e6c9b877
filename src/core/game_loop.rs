//! The frame loop and the contract it needs from a window/render backend.

use super::game_state::{GameSession, SessionState};
use super::scene::{build_scene, Scene};
use super::tick::{step, FrameInput, TickEvent};
use std::io;

/// Window, input and drawing services a frontend provides to the loop.
///
/// The loop calls, once per frame: [`poll_input`](Frontend::poll_input),
/// the three queries, then [`draw`](Frontend::draw). Frame pacing is the
/// frontend's business; `elapsed_since_last_frame` reports whatever time
/// actually passed.
pub trait Frontend {
    /// Gather input for the coming frame, waiting for the next frame slot if
    /// the frontend paces itself.
    fn poll_input(&mut self) -> io::Result<()>;

    /// Seconds since the previous call.
    fn elapsed_since_last_frame(&mut self) -> f64;

    fn is_close_requested(&self) -> bool;

    /// True only on the frame the jump key went down.
    fn is_jump_pressed_this_frame(&self) -> bool;

    /// Draw each command's sprite-sheet sub-rectangle at its destination,
    /// plus the HUD and any end-of-game message.
    fn draw(&mut self, scene: &Scene) -> io::Result<()>;
}

/// How a run of the loop ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// Frames drawn, including frames shown after the session ended.
    pub frames_drawn: u64,
    pub final_state: SessionState,
    pub cleared: usize,
}

/// Drive `session` until the frontend asks to close. A finished session
/// keeps being drawn (frozen, with its end message) until then.
pub fn run<F: Frontend>(frontend: &mut F, session: &mut GameSession) -> io::Result<RunSummary> {
    let mut frames_drawn = 0;

    loop {
        frontend.poll_input()?;
        if frontend.is_close_requested() {
            log::info!("close requested after {} frames", frames_drawn);
            break;
        }

        let delta_time = frontend.elapsed_since_last_frame();
        let input = FrameInput {
            jump_pressed: frontend.is_jump_pressed_this_frame(),
        };

        let result = step(session, delta_time, input);
        for event in &result.events {
            match event {
                TickEvent::ObstacleCleared { index } => {
                    log::debug!("obstacle {} cleared", index)
                }
                other => log::debug!("{:?} at {:.2}s", other, session.elapsed),
            }
        }

        frontend.draw(&build_scene(session))?;
        frames_drawn += 1;
    }

    Ok(RunSummary {
        frames_drawn,
        final_state: session.state,
        cleared: session.cleared_count(),
    })
}

/// Combine the loop's outcome with the result of tearing the frontend down.
/// A loop error takes precedence; a teardown error it would hide is logged.
pub fn settle(outcome: io::Result<RunSummary>, teardown: io::Result<()>) -> io::Result<RunSummary> {
    match (outcome, teardown) {
        (Ok(summary), Ok(())) => Ok(summary),
        (Ok(_), Err(e)) => Err(e),
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(teardown_err)) => {
            log::error!("frontend teardown also failed: {}", teardown_err);
            Err(e)
        }
    }
}
