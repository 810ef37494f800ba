use crate::foundation::error::{PagewipeError, PagewipeResult};

/// Index of a simulated animation frame.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Rational frame rate used to step a simulated clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    pub fn new(num: u32, den: u32) -> PagewipeResult<Self> {
        if den == 0 {
            return Err(PagewipeError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(PagewipeError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    pub fn frame_time_secs(self, frame: FrameIndex) -> f64 {
        (frame.0 as f64) * self.frame_duration_secs()
    }
}

pub fn clamp01(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// Checks that a timing value is finite and non-negative.
pub(crate) fn check_secs(name: &str, v: f64) -> PagewipeResult<()> {
    if !v.is_finite() || v < 0.0 {
        return Err(PagewipeError::validation(format!(
            "{name} must be a finite, non-negative number of seconds (got {v})"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
