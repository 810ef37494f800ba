//! pagewipe orchestrates animated page transitions for a client-rendered, multi-page site.
//!
//! When the URL changes, a band-wipe overlay sweeps across the viewport, the old page recedes,
//! and only once the viewport is fully covered is the new page mounted and the scroll position
//! reset. The overlay then sweeps away while the new page settles into place.
//!
//! # Pieces
//!
//! - [`RouteTable`]: total resolution of a path to a [`ContentUnit`], with a mandatory
//!   catch-all.
//! - [`OverlaySurface`]: the banded occlusion layer, driven externally.
//! - [`TransitionOrchestrator`]: the `idle -> exiting -> entering -> idle` state machine that
//!   decides when the displayed route changes.
//! - [`AnimationDriver`]: pluggable animation engine; [`ClockDriver`] is the default.
//! - [`AppShell`]: history and navigation input feeding the orchestrator.
//!
//! Time is always supplied by the host (`now_s`, in seconds), so everything here can be driven
//! by a real animation-frame loop or by a simulated clock in tests.
#![forbid(unsafe_code)]

pub mod animation;
pub mod foundation;
pub mod overlay;
pub mod routing;
pub mod shell;
pub mod trace;
pub mod transition;

pub use animation::driver::{AnimationDriver, ClockDriver, Timeline, TimelineFrame};
pub use animation::ease::Ease;
pub use animation::ops::{relative_to_end, span_end, stagger};
pub use animation::pose::ContentPose;
pub use animation::tween::{Lerp, Tween};
pub use foundation::core::{FrameIndex, Fps};
pub use foundation::error::{PagewipeError, PagewipeResult};
pub use overlay::{
    BAND_COVERING, BAND_HIDDEN_ABOVE, BAND_HIDDEN_BELOW, MAX_BANDS, Occlusion, OverlaySurface,
};
pub use routing::path::normalize_path;
pub use routing::pattern::{Params, RoutePattern};
pub use routing::table::{ContentUnit, Resolved, Route, RouteDef, RouteTable};
pub use shell::app::{AppShell, Navigation};
pub use shell::history::History;
pub use trace::{ScriptStep, Trace, TraceFrame, simulate};
pub use transition::config::{
    ContentMotion, EnterConfig, ExitConfig, InterruptPolicy, OverlaySweep, RevealMode,
    TransitionConfig,
};
pub use transition::orchestrator::{DisplayedRoute, TransitionOrchestrator};
pub use transition::phase::{Phase, TransitionEvent};
pub use transition::stage::{ContentContainer, Viewport};
pub use transition::timeline::{enter_timeline, exit_timeline};
