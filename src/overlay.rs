//! Band-wipe occlusion surface.
//!
//! A full-viewport layer split into equal-width vertical bands. Each band has a vertical offset
//! in percent of the viewport height: [`BAND_HIDDEN_BELOW`] (parked below the viewport),
//! [`BAND_COVERING`] (covering its column), or [`BAND_HIDDEN_ABOVE`] (swept out the top).
//! The surface knows nothing about routes; the orchestrator drives it.

use smallvec::SmallVec;

use crate::foundation::{
    core::clamp01,
    error::{PagewipeError, PagewipeResult},
};

pub const BAND_HIDDEN_BELOW: f64 = 100.0;
pub const BAND_COVERING: f64 = 0.0;
pub const BAND_HIDDEN_ABOVE: f64 = -100.0;

/// Upper bound on the number of bands a surface may be split into.
pub const MAX_BANDS: usize = 32;

/// Summary of how much of the viewport the surface hides.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "state", content = "coverage", rename_all = "snake_case")]
pub enum Occlusion {
    Revealed,
    Partial(f64),
    Covered,
}

impl Occlusion {
    pub fn is_covered(self) -> bool {
        matches!(self, Self::Covered)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct OverlaySurface {
    offsets: SmallVec<[f64; 8]>,
    visible: bool,
    interactive: bool,
}

impl OverlaySurface {
    pub fn new(band_count: usize) -> PagewipeResult<Self> {
        if band_count == 0 || band_count > MAX_BANDS {
            return Err(PagewipeError::validation(format!(
                "overlay band count must be in 1..={MAX_BANDS} (got {band_count})"
            )));
        }
        Ok(Self {
            offsets: SmallVec::from_elem(BAND_HIDDEN_BELOW, band_count),
            visible: false,
            interactive: false,
        })
    }

    pub fn band_count(&self) -> usize {
        self.offsets.len()
    }

    pub fn band_offsets(&self) -> &[f64] {
        &self.offsets
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the surface intercepts pointer events.
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn set_band_offsets(&mut self, offsets: &[f64]) -> PagewipeResult<()> {
        if offsets.len() != self.offsets.len() {
            return Err(PagewipeError::validation(format!(
                "expected {} band offsets, got {}",
                self.offsets.len(),
                offsets.len()
            )));
        }
        if let Some(bad) = offsets.iter().find(|o| !o.is_finite()) {
            return Err(PagewipeError::validation(format!(
                "band offsets must be finite (got {bad})"
            )));
        }
        self.offsets.copy_from_slice(offsets);
        Ok(())
    }

    pub fn set_visibility(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Snap every band to covering and make the surface visible.
    pub fn cover_fully(&mut self) {
        self.offsets.fill(BAND_COVERING);
        self.visible = true;
    }

    /// Return to the idle state: bands parked below, invisible, pointer-transparent.
    pub fn reset(&mut self) {
        self.offsets.fill(BAND_HIDDEN_BELOW);
        self.visible = false;
        self.interactive = false;
    }

    /// Fraction of the viewport hidden, in `[0, 1]`.
    pub fn coverage(&self) -> f64 {
        if !self.visible {
            return 0.0;
        }
        let sum: f64 = self
            .offsets
            .iter()
            .map(|o| clamp01(1.0 - o.abs() / BAND_HIDDEN_BELOW))
            .sum();
        sum / self.offsets.len() as f64
    }

    pub fn occlusion(&self) -> Occlusion {
        let c = self.coverage();
        if c >= 1.0 {
            Occlusion::Covered
        } else if c <= 0.0 {
            Occlusion::Revealed
        } else {
            Occlusion::Partial(c)
        }
    }

    /// CSS `transform` for band `i`, if it exists.
    pub fn band_css_transform(&self, i: usize) -> Option<String> {
        self.offsets.get(i).map(|o| format!("translateY({o}%)"))
    }
}

#[cfg(test)]
#[path = "../tests/unit/overlay/surface.rs"]
mod tests;
