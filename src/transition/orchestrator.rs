//! Route transition state machine.
//!
//! The orchestrator keeps two notions of "where we are": the navigation intent (the path the
//! host last asked for) and the displayed route (what is actually mounted). When they diverge it
//! runs one `Idle -> Exiting -> Entering -> Idle` cycle:
//!
//! 1. **Exiting**: the overlay becomes visible and interactive, bands sweep in with a stagger,
//!    and the old content recedes.
//! 2. On exit completion, while the overlay fully covers the viewport, the displayed route is
//!    replaced by the resolution of the *current* intent, the scroll position resets, and the
//!    phase becomes **Entering**.
//! 3. **Entering**: the new content snaps to its entry pose, bands sweep out, the content
//!    settles to rest.
//! 4. On enter completion the overlay goes back to idle, the content transform is cleared, and
//!    the phase returns to **Idle**.
//!
//! The host drives time explicitly: [`TransitionOrchestrator::navigate`] feeds intents and
//! [`TransitionOrchestrator::tick`] advances the animation driver. Nothing here reads ambient
//! globals or blocks.

use crate::{
    animation::driver::{AnimationDriver, ClockDriver, TimelineFrame},
    foundation::error::{PagewipeError, PagewipeResult},
    overlay::OverlaySurface,
    routing::{path::normalize_path, table::ContentUnit, table::RouteTable},
    transition::{
        config::{InterruptPolicy, TransitionConfig},
        phase::{Phase, TransitionEvent},
        stage::{ContentContainer, Viewport},
        timeline::{enter_timeline, exit_timeline},
    },
};

/// The route whose content is mounted.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct DisplayedRoute {
    /// Normalized path that was resolved.
    pub path: String,
    /// Pattern of the matching route.
    pub pattern: String,
    pub content: ContentUnit,
}

pub struct TransitionOrchestrator<D = ClockDriver> {
    routes: RouteTable,
    config: TransitionConfig,
    driver: D,
    overlay: OverlaySurface,
    content: ContentContainer,
    viewport: Viewport,
    phase: Phase,
    displayed: DisplayedRoute,
    intent: String,
    events: Vec<TransitionEvent>,
}

impl TransitionOrchestrator<ClockDriver> {
    /// Orchestrator over the portfolio routes with the default configuration.
    pub fn portfolio(initial_path: &str) -> PagewipeResult<Self> {
        let config = TransitionConfig::default();
        let overlay = OverlaySurface::new(config.band_count)?;
        Self::new(
            RouteTable::portfolio(),
            overlay,
            ClockDriver::new(),
            config,
            initial_path,
        )
    }
}

impl<D: AnimationDriver> TransitionOrchestrator<D> {
    /// The overlay is reset to its idle state; its band count must match the configuration.
    pub fn new(
        routes: RouteTable,
        mut overlay: OverlaySurface,
        driver: D,
        config: TransitionConfig,
        initial_path: &str,
    ) -> PagewipeResult<Self> {
        config.validate()?;
        if overlay.band_count() != config.band_count {
            return Err(PagewipeError::validation(format!(
                "overlay has {} bands but the configuration expects {}",
                overlay.band_count(),
                config.band_count
            )));
        }
        overlay.reset();

        let resolved = routes.resolve(initial_path);
        let displayed = DisplayedRoute {
            path: resolved.path.clone(),
            pattern: resolved.route.pattern.as_str().to_owned(),
            content: resolved.content().clone(),
        };
        let content = ContentContainer::new(displayed.content.clone());
        let intent = displayed.path.clone();

        Ok(Self {
            routes,
            config,
            driver,
            overlay,
            content,
            viewport: Viewport::default(),
            phase: Phase::Idle,
            displayed,
            intent,
            events: Vec::new(),
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase.is_idle()
    }

    pub fn displayed(&self) -> &DisplayedRoute {
        &self.displayed
    }

    /// Latest accepted navigation intent, normalized.
    pub fn intent(&self) -> &str {
        &self.intent
    }

    pub fn overlay(&self) -> &OverlaySurface {
        &self.overlay
    }

    pub fn content(&self) -> &ContentContainer {
        &self.content
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Host-side scrolling goes through here.
    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn events(&self) -> &[TransitionEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<TransitionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Feed a navigation intent observed at host time `now_s`.
    #[tracing::instrument(skip(self), fields(phase = %self.phase))]
    pub fn navigate(&mut self, intent: &str, now_s: f64) {
        let path = normalize_path(intent);

        if self.phase.is_idle() {
            self.intent = path;
            if self.intent == self.displayed.path {
                tracing::trace!("intent matches the displayed route");
                return;
            }
            self.begin_exit(now_s);
            return;
        }

        match self.config.interrupt {
            InterruptPolicy::DropWhileBusy => {
                tracing::debug!(%path, "dropping intent while busy");
                self.events
                    .push(TransitionEvent::IntentDropped { path, at_s: now_s });
            }
            InterruptPolicy::QueueLatest => {
                if path == self.intent {
                    return;
                }
                self.intent = path.clone();
                let ev = if self.phase == Phase::Exiting {
                    tracing::debug!(%path, "retargeting pending swap");
                    TransitionEvent::IntentRetargeted { path, at_s: now_s }
                } else {
                    tracing::debug!(%path, "holding intent until idle");
                    TransitionEvent::IntentHeld { path, at_s: now_s }
                };
                self.events.push(ev);
            }
        }
    }

    /// Advance the animation to host time `now_s`. A no-op while idle.
    pub fn tick(&mut self, now_s: f64) {
        if self.phase.is_idle() {
            return;
        }
        let Some(frame) = self.driver.sample(now_s) else {
            tracing::trace!(phase = %self.phase, "driver has no active timeline");
            return;
        };
        self.apply(&frame);
        if frame.finished {
            match self.phase {
                Phase::Exiting => self.swap_and_enter(now_s),
                Phase::Entering => self.finish(now_s),
                Phase::Idle => {}
            }
        }
    }

    fn apply(&mut self, frame: &TimelineFrame) {
        if let Err(err) = self.overlay.set_band_offsets(&frame.band_offsets) {
            tracing::warn!(%err, "ignoring overlay values from driver");
        }
        self.content.set_pose(frame.content);
    }

    fn set_phase(&mut self, to: Phase, now_s: f64) {
        let from = self.phase;
        debug_assert_eq!(from.next(), to, "illegal phase transition");
        tracing::debug!(%from, %to, at_s = now_s, "phase change");
        self.phase = to;
        self.events.push(TransitionEvent::PhaseChanged {
            from,
            to,
            at_s: now_s,
        });
    }

    fn begin_exit(&mut self, now_s: f64) {
        self.overlay.set_visibility(true);
        self.overlay.set_interactive(true);
        let timeline = exit_timeline(&self.config, self.content.pose());
        self.set_phase(Phase::Exiting, now_s);
        self.driver.play(timeline, now_s);
    }

    fn swap_and_enter(&mut self, now_s: f64) {
        // Commit full coverage so the swap is hidden even if the driver's last frame was off.
        self.overlay.cover_fully();
        let occlusion = self.overlay.occlusion();

        let resolved = self.routes.resolve(&self.intent);
        let next = DisplayedRoute {
            path: resolved.path.clone(),
            pattern: resolved.route.pattern.as_str().to_owned(),
            content: resolved.content().clone(),
        };
        let prev = std::mem::replace(&mut self.displayed, next);
        self.content.mount(self.displayed.content.clone());
        self.viewport.scroll_to_top();

        tracing::debug!(
            from = %prev.path,
            to = %self.displayed.path,
            content = %self.displayed.content,
            "swapped displayed route"
        );
        self.events.push(TransitionEvent::Swapped {
            from_path: prev.path,
            to_path: self.displayed.path.clone(),
            content: self.displayed.content.clone(),
            occlusion,
            at_s: now_s,
        });
        self.events.push(TransitionEvent::ScrollReset { at_s: now_s });
        self.set_phase(Phase::Entering, now_s);

        self.content.set_pose(self.config.enter.content.pose);
        self.driver.play(enter_timeline(&self.config), now_s);
    }

    fn finish(&mut self, now_s: f64) {
        self.overlay.reset();
        self.content.clear_transform();
        self.set_phase(Phase::Idle, now_s);

        if self.intent != self.displayed.path {
            tracing::debug!(intent = %self.intent, "re-evaluating held intent");
            self.begin_exit(now_s);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/orchestrator.rs"]
mod tests;
