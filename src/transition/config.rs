use crate::{
    animation::{ease::Ease, pose::ContentPose},
    foundation::{
        core::check_secs,
        error::{PagewipeError, PagewipeResult},
    },
    overlay::MAX_BANDS,
};

/// What happens to a new navigation intent while a transition is in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum InterruptPolicy {
    /// Keep only the newest intent. During the exit phase it becomes the swap target; during the
    /// enter phase it is re-evaluated once the cycle reaches idle.
    #[default]
    QueueLatest,
    /// Forget intents that arrive while not idle.
    DropWhileBusy,
}

/// Where the bands go when they uncover the new page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RevealMode {
    /// Continue upward and leave through the top edge.
    #[default]
    SweepThrough,
    /// Drop back down to the parked position.
    Retract,
}

/// Staggered band sweep.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OverlaySweep {
    /// Per-band sweep duration.
    pub duration_s: f64,
    /// Delay between consecutive bands, left to right.
    pub stagger_s: f64,
    pub ease: Ease,
}

/// Content container motion toward or away from `pose`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentMotion {
    pub duration_s: f64,
    pub ease: Ease,
    /// Exit: the receded pose animated to. Enter: the pose snapped to before animating to rest.
    pub pose: ContentPose,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExitConfig {
    pub overlay: OverlaySweep,
    /// Runs in parallel with the overlay sweep, both starting at the same instant.
    pub content: ContentMotion,
}

impl Default for ExitConfig {
    fn default() -> Self {
        Self {
            overlay: OverlaySweep {
                duration_s: 0.5,
                stagger_s: 0.05,
                ease: Ease::OutCubic,
            },
            content: ContentMotion {
                duration_s: 0.5,
                ease: Ease::InCubic,
                pose: ContentPose {
                    scale: 0.95,
                    opacity: 0.0,
                    rotate_y_deg: 5.0,
                    translate_y_px: 0.0,
                },
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnterConfig {
    pub overlay: OverlaySweep,
    pub content: ContentMotion,
    /// Content start relative to the end of the overlay sweep; negative values overlap its tail.
    pub content_offset_s: f64,
}

impl Default for EnterConfig {
    fn default() -> Self {
        Self {
            overlay: OverlaySweep {
                duration_s: 0.5,
                stagger_s: 0.05,
                ease: Ease::InOutCubic,
            },
            content: ContentMotion {
                duration_s: 0.6,
                ease: Ease::OutCubic,
                pose: ContentPose {
                    scale: 0.95,
                    opacity: 0.0,
                    rotate_y_deg: -5.0,
                    translate_y_px: 0.0,
                },
            },
            content_offset_s: -0.3,
        }
    }
}

/// Timing and pose configuration of the page transition.
///
/// Any section may be omitted from JSON and falls back to its default. An `overlay` or `content`
/// sweep that is present must be complete.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransitionConfig {
    pub band_count: usize,
    pub exit: ExitConfig,
    pub enter: EnterConfig,
    pub reveal: RevealMode,
    pub interrupt: InterruptPolicy,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            band_count: 5,
            exit: ExitConfig::default(),
            enter: EnterConfig::default(),
            reveal: RevealMode::default(),
            interrupt: InterruptPolicy::default(),
        }
    }
}

impl TransitionConfig {
    /// A lighter variant: short vertical drift and fade instead of the 3D tilt.
    pub fn subtle() -> Self {
        let ease = Ease::CubicBezier {
            x1: 0.22,
            y1: 1.0,
            x2: 0.36,
            y2: 1.0,
        };
        Self {
            band_count: 5,
            exit: ExitConfig {
                overlay: OverlaySweep {
                    duration_s: 0.4,
                    stagger_s: 0.04,
                    ease,
                },
                content: ContentMotion {
                    duration_s: 0.4,
                    ease,
                    pose: ContentPose {
                        scale: 1.02,
                        opacity: 0.0,
                        rotate_y_deg: 0.0,
                        translate_y_px: -10.0,
                    },
                },
            },
            enter: EnterConfig {
                overlay: OverlaySweep {
                    duration_s: 0.4,
                    stagger_s: 0.04,
                    ease,
                },
                content: ContentMotion {
                    duration_s: 0.4,
                    ease,
                    pose: ContentPose {
                        scale: 0.98,
                        opacity: 0.0,
                        rotate_y_deg: 0.0,
                        translate_y_px: 10.0,
                    },
                },
                content_offset_s: -0.2,
            },
            reveal: RevealMode::SweepThrough,
            interrupt: InterruptPolicy::QueueLatest,
        }
    }

    pub fn from_json_str(s: &str) -> PagewipeResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> PagewipeResult<()> {
        if self.band_count == 0 || self.band_count > MAX_BANDS {
            return Err(PagewipeError::validation(format!(
                "band_count must be in 1..={MAX_BANDS} (got {})",
                self.band_count
            )));
        }

        validate_sweep("exit.overlay", &self.exit.overlay)?;
        validate_motion("exit.content", &self.exit.content)?;
        validate_sweep("enter.overlay", &self.enter.overlay)?;
        validate_motion("enter.content", &self.enter.content)?;

        let off = self.enter.content_offset_s;
        if !off.is_finite() || off > 0.0 {
            return Err(PagewipeError::validation(format!(
                "enter.content_offset_s must be finite and <= 0 (got {off})"
            )));
        }
        Ok(())
    }
}

fn validate_sweep(name: &str, sweep: &OverlaySweep) -> PagewipeResult<()> {
    check_secs(&format!("{name}.duration_s"), sweep.duration_s)?;
    check_secs(&format!("{name}.stagger_s"), sweep.stagger_s)?;
    sweep.ease.validate()
}

fn validate_motion(name: &str, motion: &ContentMotion) -> PagewipeResult<()> {
    check_secs(&format!("{name}.duration_s"), motion.duration_s)?;
    motion.ease.validate()?;
    let pose = &motion.pose;
    if !pose.is_finite() {
        return Err(PagewipeError::validation(format!(
            "{name}.pose must be finite"
        )));
    }
    if !(0.0..=1.0).contains(&pose.opacity) {
        return Err(PagewipeError::validation(format!(
            "{name}.pose.opacity must be in [0, 1]"
        )));
    }
    if pose.scale <= 0.0 {
        return Err(PagewipeError::validation(format!(
            "{name}.pose.scale must be > 0"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/transition/config.rs"]
mod tests;
