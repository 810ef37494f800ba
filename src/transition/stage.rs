//! Visual resources the orchestrator exclusively writes, besides the overlay.

use crate::{animation::pose::ContentPose, routing::table::ContentUnit};

/// The element hosting the mounted page.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ContentContainer {
    mounted: ContentUnit,
    /// `None` means no inline transform: the container sits in normal layout flow.
    transform: Option<ContentPose>,
    mounts: u64,
}

impl ContentContainer {
    pub fn new(initial: ContentUnit) -> Self {
        Self {
            mounted: initial,
            transform: None,
            mounts: 1,
        }
    }

    pub fn mounted(&self) -> &ContentUnit {
        &self.mounted
    }

    /// Total number of mounts, including the initial one.
    pub fn mount_count(&self) -> u64 {
        self.mounts
    }

    /// Unmount the current page and mount `unit` in its place.
    pub fn mount(&mut self, unit: ContentUnit) {
        self.mounted = unit;
        self.mounts += 1;
    }

    pub fn set_pose(&mut self, pose: ContentPose) {
        self.transform = Some(pose);
    }

    pub fn clear_transform(&mut self) {
        self.transform = None;
    }

    pub fn transform(&self) -> Option<ContentPose> {
        self.transform
    }

    /// Effective pose; an untransformed container is at rest.
    pub fn pose(&self) -> ContentPose {
        self.transform.unwrap_or(ContentPose::RESTING)
    }
}

/// Scroll state of the page viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct Viewport {
    pub scroll_x: f64,
    pub scroll_y: f64,
    resets: u64,
}

impl Viewport {
    /// Host-driven scrolling.
    pub fn scroll_to(&mut self, x: f64, y: f64) {
        self.scroll_x = x;
        self.scroll_y = y;
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_x = 0.0;
        self.scroll_y = 0.0;
        self.resets += 1;
    }

    /// How many times [`Viewport::scroll_to_top`] ran.
    pub fn reset_count(&self) -> u64 {
        self.resets
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/stage.rs"]
mod tests;
