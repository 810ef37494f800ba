use crate::{
    animation::driver::{AnimationDriver, ClockDriver},
    foundation::error::PagewipeResult,
    overlay::OverlaySurface,
    routing::{path::normalize_path, table::RouteTable},
    shell::history::History,
    transition::{config::TransitionConfig, orchestrator::TransitionOrchestrator},
};

/// Navigation input from the user or the application.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "to", rename_all = "snake_case")]
pub enum Navigation {
    /// Link activation with an href.
    Link(String),
    /// Programmatic redirect; replaces the current history entry.
    Redirect(String),
    Back,
    Forward,
}

/// Application shell: owns the URL history and feeds every URL change into the orchestrator.
pub struct AppShell<D = ClockDriver> {
    history: History,
    orchestrator: TransitionOrchestrator<D>,
}

impl AppShell<ClockDriver> {
    pub fn portfolio(initial_url: &str) -> PagewipeResult<Self> {
        Self::new(
            RouteTable::portfolio(),
            TransitionConfig::default(),
            ClockDriver::new(),
            initial_url,
        )
    }
}

impl<D: AnimationDriver> AppShell<D> {
    pub fn new(
        routes: RouteTable,
        config: TransitionConfig,
        driver: D,
        initial_url: &str,
    ) -> PagewipeResult<Self> {
        let overlay = OverlaySurface::new(config.band_count)?;
        let orchestrator =
            TransitionOrchestrator::new(routes, overlay, driver, config, initial_url)?;
        Ok(Self {
            history: History::new(initial_url),
            orchestrator,
        })
    }

    pub fn current_url(&self) -> &str {
        self.history.current()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn orchestrator(&self) -> &TransitionOrchestrator<D> {
        &self.orchestrator
    }

    pub fn orchestrator_mut(&mut self) -> &mut TransitionOrchestrator<D> {
        &mut self.orchestrator
    }

    /// Apply `nav` to the history and forward the resulting URL.
    ///
    /// Returns `false` when nothing changed (back at the oldest entry, forward at the newest).
    /// A link to the exact current URL replaces the entry instead of pushing a duplicate.
    pub fn dispatch(&mut self, nav: Navigation, now_s: f64) -> bool {
        match nav {
            Navigation::Link(href) => {
                if href == self.history.current() {
                    self.history.replace(href);
                } else {
                    self.history.push(href);
                }
            }
            Navigation::Redirect(href) => self.history.replace(href),
            Navigation::Back => {
                if !self.history.back() {
                    return false;
                }
            }
            Navigation::Forward => {
                if !self.history.forward() {
                    return false;
                }
            }
        }
        let url = self.history.current().to_owned();
        self.orchestrator.navigate(&url, now_s);
        true
    }

    /// One animation frame.
    pub fn frame(&mut self, now_s: f64) {
        self.orchestrator.tick(now_s);
    }

    /// Whether the mounted page matches the URL bar.
    pub fn is_settled(&self) -> bool {
        self.orchestrator.is_idle()
            && normalize_path(self.history.current()) == self.orchestrator.displayed().path
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shell/app.rs"]
mod tests;
