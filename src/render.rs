// The endless animation loop, decoupled from the actual window.
// Visual: frames keep coming until you close the window.

use crate::draw::Surface;
use crate::error::Error;
use crate::transit::TransitState;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Closed,
}

/// Draw, present, advance; repeat until the surface reports it was closed.
/// Returns how many frames were shown.
pub fn run<S: Surface>(state: &mut TransitState, surface: &mut S) -> Result<u64, Error> {
    let mut loop_state = LoopState::Running;
    let mut frames: u64 = 0;

    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;

    while loop_state == LoopState::Running {
        if !surface.poll_open() {
            loop_state = LoopState::Closed;
            continue;
        }

        let lum = state.render_frame();
        surface.present(state.frame())?;
        tracing::trace!(tick = state.tick(), ratio = lum / state.baseline(), "frame");
        state.advance();
        frames += 1;

        frames_this_second += 1;
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            tracing::debug!(fps = frames_this_second as f32 / secs, "render rate");
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    tracing::info!(frames, "window closed");
    Ok(frames)
}
