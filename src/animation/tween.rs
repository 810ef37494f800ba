use crate::{
    animation::ease::Ease,
    foundation::core::check_secs,
    foundation::error::PagewipeResult,
};

/// Interpolation contract for animated value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        if t >= 1.0 {
            return *b;
        }
        a + (b - a) * t
    }
}

/// A single eased value change placed on a timeline.
///
/// Before `start_s` the tween holds `from`; at or after `start_s + duration_s` it yields `to`
/// exactly, so a completed timeline always lands on its declared end pose.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Tween<T> {
    pub from: T,
    pub to: T,
    pub start_s: f64,
    pub duration_s: f64,
    pub ease: Ease,
}

impl<T> Tween<T>
where
    T: Lerp + Clone,
{
    pub fn new(from: T, to: T, start_s: f64, duration_s: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            start_s,
            duration_s,
            ease,
        }
    }

    pub fn end_s(&self) -> f64 {
        self.start_s + self.duration_s
    }

    pub fn validate(&self) -> PagewipeResult<()> {
        check_secs("tween start", self.start_s)?;
        check_secs("tween duration", self.duration_s)?;
        self.ease.validate()
    }

    /// Sample at timeline-local time `t_s`.
    pub fn sample(&self, t_s: f64) -> T {
        if t_s < self.start_s {
            return self.from.clone();
        }
        if t_s >= self.end_s() || self.duration_s <= 0.0 {
            return self.to.clone();
        }
        let p = (t_s - self.start_s) / self.duration_s;
        T::lerp(&self.from, &self.to, self.ease.apply(p))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
