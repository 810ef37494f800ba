use crate::{
    animation::{
        driver::Timeline,
        ops::{relative_to_end, span_end, stagger},
        pose::ContentPose,
        tween::Tween,
    },
    overlay::{BAND_COVERING, BAND_HIDDEN_ABOVE, BAND_HIDDEN_BELOW},
    transition::config::{RevealMode, TransitionConfig},
};

/// Overlay sweeps in while the content recedes from `from` to the exit pose, in parallel.
pub fn exit_timeline(cfg: &TransitionConfig, from: ContentPose) -> Timeline {
    let sweep = &cfg.exit.overlay;
    let motion = &cfg.exit.content;
    Timeline {
        bands: stagger(
            cfg.band_count,
            0.0,
            sweep.stagger_s,
            BAND_HIDDEN_BELOW,
            BAND_COVERING,
            sweep.duration_s,
            sweep.ease,
        ),
        content: Tween::new(from, motion.pose, 0.0, motion.duration_s, motion.ease),
    }
}

/// Overlay sweeps out while the content settles from the enter pose to rest, starting
/// `content_offset_s` relative to the end of the sweep.
pub fn enter_timeline(cfg: &TransitionConfig) -> Timeline {
    let sweep = &cfg.enter.overlay;
    let motion = &cfg.enter.content;
    let reveal_to = match cfg.reveal {
        RevealMode::SweepThrough => BAND_HIDDEN_ABOVE,
        RevealMode::Retract => BAND_HIDDEN_BELOW,
    };
    let bands = stagger(
        cfg.band_count,
        0.0,
        sweep.stagger_s,
        BAND_COVERING,
        reveal_to,
        sweep.duration_s,
        sweep.ease,
    );
    let content_start = relative_to_end(span_end(&bands), cfg.enter.content_offset_s);
    Timeline {
        bands,
        content: Tween::new(
            motion.pose,
            ContentPose::RESTING,
            content_start,
            motion.duration_s,
            motion.ease,
        ),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/timeline.rs"]
mod tests;
