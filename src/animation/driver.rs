//! Animation driver strategy.
//!
//! The orchestrator never interpolates values itself. It hands a [`Timeline`] to an
//! [`AnimationDriver`] and, on every host tick, asks the driver for the current
//! [`TimelineFrame`]. A frame with `finished == true` is the "phase complete" event.

use smallvec::SmallVec;

use crate::{
    animation::{ops::span_end, pose::ContentPose, tween::Tween},
    foundation::error::PagewipeResult,
};

/// Everything one transition phase animates: one offset tween per overlay band plus the
/// content container pose.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Timeline {
    pub bands: Vec<Tween<f64>>,
    pub content: Tween<ContentPose>,
}

impl Timeline {
    pub fn duration_s(&self) -> f64 {
        span_end(&self.bands).max(self.content.end_s())
    }

    pub fn validate(&self) -> PagewipeResult<()> {
        for tw in &self.bands {
            tw.validate()?;
        }
        self.content.validate()
    }

    /// Sample every track at timeline-local time `t_s`.
    pub fn sample(&self, t_s: f64) -> TimelineFrame {
        TimelineFrame {
            band_offsets: self.bands.iter().map(|tw| tw.sample(t_s)).collect(),
            content: self.content.sample(t_s),
            finished: t_s >= self.duration_s(),
        }
    }
}

/// Interpolated values for one host tick.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TimelineFrame {
    pub band_offsets: SmallVec<[f64; 8]>,
    pub content: ContentPose,
    /// Set on the last frame of the timeline; every value is at its end pose.
    pub finished: bool,
}

/// Pluggable animation engine.
///
/// Implementations must report `finished` at most once per `play`, and the finished frame must
/// carry the timeline's end values.
pub trait AnimationDriver {
    /// Start `timeline` at host time `now_s`, replacing anything currently playing.
    fn play(&mut self, timeline: Timeline, now_s: f64);

    /// Advance to host time `now_s`. `None` when nothing is playing.
    fn sample(&mut self, now_s: f64) -> Option<TimelineFrame>;

    /// Drop the active timeline without completing it.
    fn cancel(&mut self);

    fn is_playing(&self) -> bool;
}

impl<D: AnimationDriver + ?Sized> AnimationDriver for Box<D> {
    fn play(&mut self, timeline: Timeline, now_s: f64) {
        (**self).play(timeline, now_s)
    }

    fn sample(&mut self, now_s: f64) -> Option<TimelineFrame> {
        (**self).sample(now_s)
    }

    fn cancel(&mut self) {
        (**self).cancel()
    }

    fn is_playing(&self) -> bool {
        (**self).is_playing()
    }
}

#[derive(Clone, Debug)]
struct Active {
    timeline: Timeline,
    /// Unset until the first finite host time is seen.
    started_at_s: Option<f64>,
    last_local_s: f64,
}

/// Default driver: samples the active timeline against the host clock.
///
/// A clock that moves backwards produces no progress. A clock that jumps far ahead (a throttled
/// background tab coming back) lands directly on the finished frame.
#[derive(Clone, Debug, Default)]
pub struct ClockDriver {
    active: Option<Active>,
}

impl ClockDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Timeline-local time of the active timeline, if any.
    pub fn local_time_s(&self) -> Option<f64> {
        self.active.as_ref().map(|a| a.last_local_s)
    }
}

impl AnimationDriver for ClockDriver {
    fn play(&mut self, timeline: Timeline, now_s: f64) {
        if cfg!(debug_assertions) {
            if let Err(err) = timeline.validate() {
                tracing::warn!(%err, "playing a timeline with invalid tracks");
            }
        }
        if self.active.is_some() {
            tracing::trace!("replacing active timeline");
        }
        if !now_s.is_finite() {
            tracing::debug!(now_s, "non-finite start time; anchoring on the next finite tick");
        }
        self.active = Some(Active {
            timeline,
            started_at_s: now_s.is_finite().then_some(now_s),
            last_local_s: 0.0,
        });
    }

    fn sample(&mut self, now_s: f64) -> Option<TimelineFrame> {
        let active = self.active.as_mut()?;
        if active.started_at_s.is_none() && now_s.is_finite() {
            active.started_at_s = Some(now_s);
        }
        let local = match active.started_at_s {
            Some(start) if now_s.is_finite() => (now_s - start).max(active.last_local_s),
            _ => active.last_local_s,
        };
        active.last_local_s = local;

        let frame = active.timeline.sample(local);
        if frame.finished {
            self.active = None;
        }
        Some(frame)
    }

    fn cancel(&mut self) {
        self.active = None;
    }

    fn is_playing(&self) -> bool {
        self.active.is_some()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/driver.rs"]
mod tests;
