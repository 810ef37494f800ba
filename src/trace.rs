//! Frame-stepped simulation of navigation scripts.
//!
//! Drives an [`AppShell`] with a [`ClockDriver`] at a fixed frame rate and records what a
//! renderer would see on each frame. Used by the `pagewipe simulate` command and by tests.

use crate::{
    animation::{driver::ClockDriver, pose::ContentPose},
    foundation::{
        core::{FrameIndex, Fps},
        error::{PagewipeError, PagewipeResult},
    },
    overlay::Occlusion,
    routing::table::{ContentUnit, RouteTable},
    shell::app::{AppShell, Navigation},
    transition::{config::TransitionConfig, phase::Phase, phase::TransitionEvent},
};

/// One scripted navigation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScriptStep {
    pub at_s: f64,
    pub navigate: Navigation,
}

/// Renderer-visible state after one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TraceFrame {
    pub frame: FrameIndex,
    pub time_s: f64,
    pub phase: Phase,
    pub url: String,
    pub displayed_path: String,
    pub content: ContentUnit,
    pub occlusion: Occlusion,
    pub band_offsets: Vec<f64>,
    /// `None` while the container has no inline transform.
    pub content_pose: Option<ContentPose>,
    pub pointer_blocked: bool,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct Trace {
    pub fps: Fps,
    pub frames: Vec<TraceFrame>,
    pub events: Vec<TransitionEvent>,
    /// All steps dispatched and the orchestrator back to idle before the frame limit.
    pub completed: bool,
}

impl Trace {
    pub fn last(&self) -> Option<&TraceFrame> {
        self.frames.last()
    }
}

/// Run `script` against a fresh shell starting at `start_url`.
///
/// Steps are dispatched on the first frame whose time is at or after `at_s`. Recording stops one
/// frame after the last step once the shell is idle again, or after `max_frames`.
#[tracing::instrument(skip(config, routes, script), fields(steps = script.len()))]
pub fn simulate(
    config: TransitionConfig,
    routes: RouteTable,
    start_url: &str,
    script: &[ScriptStep],
    fps: Fps,
    max_frames: u64,
) -> PagewipeResult<Trace> {
    if let Some(bad) = script.iter().find(|s| !s.at_s.is_finite() || s.at_s < 0.0) {
        return Err(PagewipeError::validation(format!(
            "script step time must be finite and >= 0 (got {})",
            bad.at_s
        )));
    }
    let mut steps = script.to_vec();
    steps.sort_by(|a, b| a.at_s.total_cmp(&b.at_s));

    let mut shell = AppShell::new(routes, config, ClockDriver::new(), start_url)?;
    let mut frames = Vec::new();
    let mut events = Vec::new();
    let mut next = 0usize;
    let mut completed = false;

    for f in 0..max_frames {
        let frame = FrameIndex(f);
        let t = fps.frame_time_secs(frame);

        while next < steps.len() && steps[next].at_s <= t {
            shell.dispatch(steps[next].navigate.clone(), t);
            next += 1;
        }
        shell.frame(t);
        events.extend(shell.orchestrator_mut().drain_events());
        frames.push(snapshot(&shell, frame, t));

        if next == steps.len() && shell.orchestrator().is_idle() {
            completed = true;
            break;
        }
    }

    if !completed {
        tracing::warn!(max_frames, "simulation hit the frame limit before settling");
    }
    Ok(Trace {
        fps,
        frames,
        events,
        completed,
    })
}

fn snapshot(shell: &AppShell, frame: FrameIndex, time_s: f64) -> TraceFrame {
    let o = shell.orchestrator();
    TraceFrame {
        frame,
        time_s,
        phase: o.phase(),
        url: shell.current_url().to_owned(),
        displayed_path: o.displayed().path.clone(),
        content: o.displayed().content.clone(),
        occlusion: o.overlay().occlusion(),
        band_offsets: o.overlay().band_offsets().to_vec(),
        content_pose: o.content().transform(),
        pointer_blocked: o.overlay().is_interactive(),
    }
}

#[cfg(test)]
#[path = "../tests/unit/trace/simulate.rs"]
mod tests;
