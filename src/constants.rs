//! Interaction and animation tuning constants.
//!
//! These express intended behavior (durations, clamp limits, debounce
//! windows) and keep magic numbers out of the code.

use std::f64::consts::PI;

// Hotspot zoom target: fov is reduced to `fov * ZOOM_FOV_SCALE`, capped at
// ZOOM_FOV_CAP radians.
pub const ZOOM_FOV_SCALE: f64 = 0.6;
pub const ZOOM_FOV_CAP: f64 = 0.35;

// Forward (zoom-in) and reverse (restore) tween durations, milliseconds.
pub const ZOOM_IN_DURATION_MS: f64 = 1000.0;
pub const ZOOM_OUT_DURATION_MS: f64 = 1000.0;

// Hover-leave debounce: a re-enter within this window cancels deactivation.
pub const HOVER_LEAVE_DEBOUNCE_MS: f64 = 250.0;

// Deactivation re-check interval while a forward run is still in flight.
pub const DEACTIVATE_RECHECK_MS: f64 = 100.0;

// Click-to-open variant: dwell at the target before the automatic return.
pub const CLICK_HOLD_MS: f64 = 1500.0;

// Idle auto-rotation speed and the level targets it drifts toward.
pub const AUTOROTATE_YAW_SPEED: f64 = 0.03; // rad/s
pub const AUTOROTATE_TARGET_PITCH: f64 = 0.0;
pub const AUTOROTATE_TARGET_FOV: f64 = PI / 2.0;
pub const AUTOROTATE_LEVEL_TAU_SEC: f64 = 1.5; // pitch/fov approach time constant

// Traditional view limiter bounds.
pub const MAX_RESOLUTION_FOV: f64 = 100.0 * PI / 180.0;
pub const MAX_ZOOMOUT_FOV: f64 = 120.0 * PI / 180.0;

// Stage size assumed before the first resize event arrives.
pub const DEFAULT_STAGE_WIDTH: f64 = 1280.0;
pub const DEFAULT_STAGE_HEIGHT: f64 = 720.0;
