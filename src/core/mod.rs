pub mod animator;
pub mod autorotate;
pub mod easing;
pub mod hotspot;
pub mod interact;
pub mod tour;
pub mod view;

pub use animator::{Animator, RunId};
pub use autorotate::Autorotate;
pub use easing::{ease_in_out_sine, linear, Easing};
pub use hotspot::{first_link_url, sanitize, InfoHotspot, LinkHotspot};
pub use interact::{Effect, HotspotSession, InteractionMode, SideEffectTiming};
pub use tour::Tour;
pub use view::{RectilinearView, ViewLimiter, ViewParams};
