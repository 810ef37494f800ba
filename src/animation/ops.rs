use crate::animation::{
    ease::Ease,
    tween::{Lerp, Tween},
};

/// One tween per item, item `i` starting `i * each_s` after `start_s`.
pub fn stagger<T>(
    count: usize,
    start_s: f64,
    each_s: f64,
    from: T,
    to: T,
    duration_s: f64,
    ease: Ease,
) -> Vec<Tween<T>>
where
    T: Lerp + Clone,
{
    (0..count)
        .map(|i| {
            Tween::new(
                from.clone(),
                to.clone(),
                start_s + (i as f64) * each_s,
                duration_s,
                ease,
            )
        })
        .collect()
}

/// Latest end time over a set of tweens (0 when empty).
pub fn span_end<T>(tweens: &[Tween<T>]) -> f64 {
    tweens
        .iter()
        .map(|tw| tw.start_s + tw.duration_s)
        .fold(0.0, f64::max)
}

/// Resolve a start time expressed relative to the end of a previous span, e.g. `-0.3` to overlap
/// the last 0.3 seconds. Never earlier than the timeline origin.
pub fn relative_to_end(anchor_end_s: f64, offset_s: f64) -> f64 {
    (anchor_end_s + offset_s).max(0.0)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ops.rs"]
mod tests;
