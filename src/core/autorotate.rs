//! Ambient auto-rotation of the camera.
//!
//! Yaw advances at a constant rate while pitch and fov drift toward their
//! rest targets. Two independent switches gate it: the user-facing enabled
//! toggle, and a suspension used by hotspot interactions so rotation never
//! fights a running tween. `resume` is idempotent and only takes effect
//! while the toggle is still enabled.

use crate::constants::AUTOROTATE_LEVEL_TAU_SEC;

use super::view::{RectilinearView, ViewParams};

pub struct Autorotate {
    pub yaw_speed: f64,
    pub target_pitch: f64,
    pub target_fov: f64,
    enabled: bool,
    suspended: bool,
}

impl Autorotate {
    pub fn new(yaw_speed: f64, target_pitch: f64, target_fov: f64, enabled: bool) -> Self {
        Self {
            yaw_speed,
            target_pitch,
            target_fov,
            enabled,
            suspended: false,
        }
    }

    /// User toggle. Disabling stops rotation immediately; a later resume
    /// while disabled stays a no-op.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        log::info!("[autorotate] enabled={}", enabled);
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn suspend(&mut self) {
        self.suspended = true;
    }

    pub fn resume(&mut self) {
        if self.enabled {
            self.suspended = false;
        }
    }

    pub fn is_running(&self) -> bool {
        self.enabled && !self.suspended
    }

    /// Advance rotation by `dt_sec`. The caller must not invoke this while
    /// a view tween is in flight; the animator owns the view then.
    pub fn tick(&self, dt_sec: f64, view: &mut RectilinearView) {
        if !self.is_running() || dt_sec <= 0.0 {
            return;
        }
        let p = view.parameters();
        let alpha = 1.0 - (-dt_sec / AUTOROTATE_LEVEL_TAU_SEC).exp();
        view.set_parameters(ViewParams {
            yaw: p.yaw + self.yaw_speed * dt_sec,
            pitch: p.pitch + (self.target_pitch - p.pitch) * alpha,
            fov: p.fov + (self.target_fov - p.fov) * alpha,
        });
    }
}
